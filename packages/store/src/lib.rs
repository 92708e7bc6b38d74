#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Read-only incident store.
//!
//! The store is filled exactly once, either from an inline literal or by
//! loading a JSON array of incidents from a file or over HTTP, and is never
//! mutated afterwards. A failed load degrades to an empty store (see
//! [`IncidentStore::load_or_empty`]) so the map keeps working without
//! markers.

pub mod inline;
pub mod source;

use std::collections::BTreeSet;
use std::sync::Arc;

use lagekarte_incident_models::Incident;

pub use source::DataSource;

/// Errors that can occur while loading incidents.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// HTTP request failed or returned an error status.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The document is not a JSON array of incidents.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error reading a local file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// The full, immutable list of loaded incidents.
///
/// Cloning is cheap; clones share the same backing list.
#[derive(Debug, Clone, Default)]
pub struct IncidentStore {
    incidents: Arc<[Incident]>,
}

impl IncidentStore {
    /// Wraps an already-loaded list of incidents.
    #[must_use]
    pub fn new(incidents: Vec<Incident>) -> Self {
        let mut seen = BTreeSet::new();
        for incident in &incidents {
            if !seen.insert(incident.id.as_str()) {
                log::warn!("Duplicate incident id {:?}", incident.id);
            }
        }
        Self {
            incidents: incidents.into(),
        }
    }

    /// A store without incidents.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses a JSON array of incidents.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Json`] if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, StoreError> {
        let incidents: Vec<Incident> = serde_json::from_str(json)?;
        Ok(Self::new(incidents))
    }

    /// Loads incidents from `source`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if reading, fetching, or parsing fails.
    pub async fn load(source: &DataSource) -> Result<Self, StoreError> {
        let store = source.load().await?;
        log::info!("Loaded {} incidents from {source}", store.len());
        Ok(store)
    }

    /// Loads incidents from `source`, falling back to an empty store.
    ///
    /// A failure is logged and otherwise swallowed. There is no retry.
    pub async fn load_or_empty(source: &DataSource) -> Self {
        match Self::load(source).await {
            Ok(store) => store,
            Err(e) => {
                log::error!("Failed to load incidents from {source}: {e}");
                Self::empty()
            }
        }
    }

    /// All incidents, in load order.
    #[must_use]
    pub fn incidents(&self) -> &[Incident] {
        &self.incidents
    }

    /// Looks up an incident by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Incident> {
        self.incidents.iter().find(|incident| incident.id == id)
    }

    /// Number of incidents.
    #[must_use]
    pub fn len(&self) -> usize {
        self.incidents.len()
    }

    /// Whether the store holds no incidents.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.incidents.is_empty()
    }

    /// Distinct category labels in first-seen order. Empty labels are
    /// skipped.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = BTreeSet::new();
        self.incidents
            .iter()
            .map(|incident| incident.kind.as_str())
            .filter(|kind| !kind.is_empty() && seen.insert(*kind))
            .collect()
    }
}
