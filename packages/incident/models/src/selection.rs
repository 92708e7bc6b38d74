//! Filter selection types mirroring the category and time-range selectors.
//!
//! Selector values arrive as the raw control strings (`"ALL"`,
//! `"Diebstahl"`, `"24H"`, ...) and are converted here into typed
//! selections.

use chrono::Duration;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Control value meaning "no restriction" for both selectors.
pub const SHOW_ALL: &str = "ALL";

/// Category selection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TypeFilter {
    /// Show every category.
    #[default]
    All,
    /// Show only incidents whose label equals this one exactly.
    Only(String),
}

impl TypeFilter {
    /// Converts a selector value into a filter. `"ALL"` means every
    /// category; any other value is matched verbatim.
    #[must_use]
    pub fn from_control_value(value: &str) -> Self {
        if value == SHOW_ALL {
            Self::All
        } else {
            Self::Only(value.to_string())
        }
    }

    /// Returns the selector value for this filter.
    #[must_use]
    pub fn control_value(&self) -> &str {
        match self {
            Self::All => SHOW_ALL,
            Self::Only(label) => label,
        }
    }
}

/// Trailing time window selection.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum TimeRange {
    /// No time restriction.
    #[default]
    #[serde(rename = "ALL")]
    #[strum(serialize = "ALL")]
    All,
    /// The last 24 hours.
    #[serde(rename = "24H")]
    #[strum(serialize = "24H")]
    Last24Hours,
    /// The last 7 days.
    #[serde(rename = "7D")]
    #[strum(serialize = "7D")]
    Last7Days,
    /// The last 30 days.
    #[serde(rename = "30D")]
    #[strum(serialize = "30D")]
    Last30Days,
}

impl TimeRange {
    /// Converts a selector value into a time range.
    ///
    /// Unrecognized keys impose no time restriction and yield
    /// [`TimeRange::All`].
    #[must_use]
    pub fn from_control_value(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            log::debug!("Unrecognized time range {value:?}, not restricting by time");
            Self::All
        })
    }

    /// Length of the trailing window, or `None` when unrestricted.
    #[must_use]
    pub fn window(self) -> Option<Duration> {
        match self {
            Self::All => None,
            Self::Last24Hours => Some(Duration::days(1)),
            Self::Last7Days => Some(Duration::days(7)),
            Self::Last30Days => Some(Duration::days(30)),
        }
    }

    /// Returns all variants of this enum, in selector order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::All,
            Self::Last24Hours,
            Self::Last7Days,
            Self::Last30Days,
        ]
    }

    /// Human-readable selector label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Alle Zeiträume",
            Self::Last24Hours => "Letzte 24 Stunden",
            Self::Last7Days => "Letzte 7 Tage",
            Self::Last30Days => "Letzte 30 Tage",
        }
    }
}

/// The current values of both selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    /// Category selection.
    pub type_filter: TypeFilter,
    /// Time window selection.
    pub time_filter: TimeRange,
}

impl FilterState {
    /// Builds a filter state from raw selector values.
    #[must_use]
    pub fn from_control_values(type_value: &str, time_value: &str) -> Self {
        Self {
            type_filter: TypeFilter::from_control_value(type_value),
            time_filter: TimeRange::from_control_value(time_value),
        }
    }

    /// Sets both selectors back to "show all".
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_control_value_maps_to_all() {
        assert_eq!(TypeFilter::from_control_value("ALL"), TypeFilter::All);
        assert_eq!(
            TypeFilter::from_control_value("Diebstahl"),
            TypeFilter::Only("Diebstahl".to_string())
        );
        assert_eq!(TypeFilter::All.control_value(), "ALL");
    }

    #[test]
    fn time_range_keys() {
        assert_eq!(TimeRange::from_control_value("24H"), TimeRange::Last24Hours);
        assert_eq!(TimeRange::from_control_value("7D"), TimeRange::Last7Days);
        assert_eq!(TimeRange::from_control_value("30D"), TimeRange::Last30Days);
        assert_eq!(TimeRange::from_control_value("ALL"), TimeRange::All);
        assert_eq!(TimeRange::Last7Days.to_string(), "7D");
    }

    #[test]
    fn unrecognized_time_range_is_unrestricted() {
        assert_eq!(TimeRange::from_control_value("1Y"), TimeRange::All);
        assert_eq!(TimeRange::from_control_value(""), TimeRange::All);
        assert!(TimeRange::from_control_value("24h").window().is_none());
    }

    #[test]
    fn reset_restores_show_all() {
        let mut state = FilterState::from_control_values("Verkehrsunfall", "7D");
        assert_ne!(state, FilterState::default());
        state.reset();
        assert_eq!(state, FilterState::default());
        assert_eq!(state.type_filter, TypeFilter::All);
        assert_eq!(state.time_filter, TimeRange::All);
    }
}
