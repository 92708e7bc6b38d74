#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Incident record and category taxonomy types.
//!
//! An [`Incident`] is a single reported event with a location, a category
//! label, a point in time, and descriptive text. The category label is an
//! open string: the four labels known to [`IncidentCategory`] get their own
//! marker color, everything else falls back to [`DEFAULT_MARKER_COLOR`].

pub mod selection;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum_macros::{AsRefStr, Display, EnumString};

pub use selection::{FilterState, SHOW_ALL, TimeRange, TypeFilter};

/// Marker color used for unknown or missing categories (blue).
pub const DEFAULT_MARKER_COLOR: &str = "#2563eb";

/// The incident categories with a dedicated marker color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumString, AsRefStr,
)]
pub enum IncidentCategory {
    /// Theft
    #[strum(serialize = "Diebstahl")]
    Diebstahl,
    /// Traffic accident
    #[strum(serialize = "Verkehrsunfall")]
    Verkehrsunfall,
    /// Bodily harm
    #[strum(serialize = "Körperverletzung")]
    Koerperverletzung,
    /// Noise disturbance
    #[strum(serialize = "Ruhestörung")]
    Ruhestoerung,
}

impl IncidentCategory {
    /// Returns the marker color for this category as a CSS hex string.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Diebstahl => "#10b981",
            Self::Verkehrsunfall => "#f59e0b",
            Self::Koerperverletzung => "#ef4444",
            Self::Ruhestoerung => "#8b5cf6",
        }
    }

    /// Looks up a category by its exact label. Matching is case-sensitive.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        label.parse().ok()
    }

    /// Returns all variants of this enum, in legend order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Diebstahl,
            Self::Verkehrsunfall,
            Self::Koerperverletzung,
            Self::Ruhestoerung,
        ]
    }
}

/// Returns the marker color for an arbitrary category label.
///
/// Unknown labels (and the empty label) map to [`DEFAULT_MARKER_COLOR`].
#[must_use]
pub fn marker_color(label: &str) -> &'static str {
    IncidentCategory::from_label(label).map_or(DEFAULT_MARKER_COLOR, IncidentCategory::color)
}

/// A reported incident as loaded from the data source.
///
/// Incidents are read-only once loaded. The JSON fields `desc` and
/// `description` are both accepted; when a record carries both, `desc`
/// wins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawIncident")]
pub struct Incident {
    /// Opaque identifier, unique within a loaded set.
    pub id: String,
    /// Category label (e.g. `"Diebstahl"`). Empty when unset.
    #[serde(rename = "type")]
    pub kind: String,
    /// Short headline.
    pub title: String,
    /// Free-text body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Latitude in decimal degrees.
    pub lat: f64,
    /// Longitude in decimal degrees.
    pub lng: f64,
    /// When the incident happened.
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: DateTime<Utc>,
}

/// Wire shape of an incident record, with both description keys kept
/// apart so a record may carry either or both.
#[derive(Deserialize)]
struct RawIncident {
    id: String,
    #[serde(rename = "type", default)]
    kind: String,
    title: String,
    #[serde(default)]
    desc: Option<String>,
    #[serde(default)]
    description: Option<String>,
    lat: f64,
    lng: f64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    timestamp: DateTime<Utc>,
}

impl From<RawIncident> for Incident {
    fn from(raw: RawIncident) -> Self {
        Self {
            id: raw.id,
            kind: raw.kind,
            title: raw.title,
            description: raw.desc.or(raw.description),
            lat: raw.lat,
            lng: raw.lng,
            timestamp: raw.timestamp,
        }
    }
}

impl Incident {
    /// Returns the description, or an empty string when absent.
    #[must_use]
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Returns the marker color for this incident's category.
    #[must_use]
    pub fn marker_color(&self) -> &'static str {
        marker_color(&self.kind)
    }
}

/// Parses an incident timestamp.
///
/// Accepts RFC 3339 (with `Z` or a numeric offset), naive ISO 8601
/// date-times with optional fractional seconds, and bare `YYYY-MM-DD`
/// dates. Naive values are taken as UTC; a bare date is UTC midnight.
#[must_use]
pub fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M") {
        return Some(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date.and_time(NaiveTime::MIN).and_utc());
    }
    None
}

fn serialize_timestamp<S: Serializer>(ts: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&ts.to_rfc3339_opts(SecondsFormat::Millis, true))
}

fn deserialize_timestamp<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<DateTime<Utc>, D::Error> {
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp: {raw:?}")))
}
