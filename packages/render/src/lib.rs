#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filter and render engine for the incident map.
//!
//! [`RenderController`] owns the incident store, the selector state, and
//! the markers it has put on a [`lagekarte_map::MapWidget`]. Every render
//! pass clears all markers, recomputes the visible set, and recreates one
//! marker per visible incident.

pub mod config;
pub mod controller;
pub mod popup;

pub use config::{AppConfig, ConfigError};
pub use controller::{ControlEvent, RenderController, RenderSummary};
pub use popup::PopupFormat;
