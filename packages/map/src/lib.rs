#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map widget contract for the incident map.
//!
//! The renderer never talks to a concrete map library. It drives a
//! [`MapWidget`], which owns the viewport, the tile layer, the legend
//! control, and two marker layers: a clustering layer that groups nearby
//! markers at low zoom, and a plain layer group for unclustered display.
//! [`RecordingMap`] implements the contract in memory.

pub mod features;
pub mod geometry;
pub mod layers;
pub mod recording;

use serde::{Deserialize, Serialize};

pub use geometry::{LatLng, LatLngBounds};
pub use layers::{
    ControlPosition, LegendControl, LegendEntry, MapOptions, Marker, MarkerIcon, TileLayer,
};
pub use recording::RecordingMap;

/// The marker layers a widget provides.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum LayerKind {
    /// Groups nearby markers into a single glyph at low zoom.
    Cluster,
    /// Shows every marker individually.
    Plain,
}

/// Opaque handle to a marker that has been added to a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MarkerHandle(pub u64);

/// An embeddable map widget.
///
/// Markers belong to a layer whether or not that layer is attached; they
/// are only shown while their layer is attached to the map.
pub trait MapWidget {
    /// Applies zoom limits and wrapping behaviour.
    fn set_options(&mut self, options: &MapOptions);

    /// Centers the viewport on `center` at `zoom`.
    fn set_view(&mut self, center: LatLng, zoom: u8);

    /// Attaches a base tile layer.
    fn add_tile_layer(&mut self, layer: TileLayer);

    /// Adds a legend control overlay.
    fn add_control(&mut self, control: LegendControl);

    /// Whether `layer` is currently attached to the map.
    fn has_layer(&self, layer: LayerKind) -> bool;

    /// Attaches `layer` to the map.
    fn add_layer(&mut self, layer: LayerKind);

    /// Adds `marker` to `layer` and returns a handle for removing it again.
    fn add_marker(&mut self, layer: LayerKind, marker: Marker) -> MarkerHandle;

    /// Removes a marker from `layer`. Unknown handles are ignored.
    fn remove_marker(&mut self, layer: LayerKind, handle: MarkerHandle);

    /// Moves the viewport so that `bounds` is fully visible.
    fn fit_bounds(&mut self, bounds: LatLngBounds);
}
