#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Visible-set computation for the incident map.
//!
//! Everything here is a pure function of the incident list, the selector
//! state, and an explicit `now`. The render controller passes the wall
//! clock; tests pass a fixed instant.

use chrono::{DateTime, Utc};
use lagekarte_incident_models::{FilterState, Incident, TimeRange, TypeFilter};

/// Whether an incident's category label passes the category selection.
#[must_use]
pub fn matches_type(kind: &str, filter: &TypeFilter) -> bool {
    match filter {
        TypeFilter::All => true,
        TypeFilter::Only(label) => kind == label,
    }
}

/// Returns the earliest instant still inside `range`, or `None` when the
/// range does not restrict by time.
#[must_use]
pub fn cutoff(range: TimeRange, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    range.window().map(|window| now - window)
}

/// Whether `ts` falls inside the trailing window `range` ending at `now`.
///
/// The lower bound is inclusive. There is no upper bound, so timestamps
/// after `now` are always inside.
#[must_use]
pub fn within_time_range(ts: DateTime<Utc>, range: TimeRange, now: DateTime<Utc>) -> bool {
    cutoff(range, now).is_none_or(|cutoff| ts >= cutoff)
}

/// Whether a single incident is visible under `filters` at `now`.
#[must_use]
pub fn is_visible(incident: &Incident, filters: &FilterState, now: DateTime<Utc>) -> bool {
    matches_type(&incident.kind, &filters.type_filter)
        && within_time_range(incident.timestamp, filters.time_filter, now)
}

/// Computes the visible subset of `all`.
///
/// Filtering preserves the input order. The time cutoff is derived from
/// `now` once per call.
#[must_use]
pub fn compute_visible<'a>(
    all: &'a [Incident],
    filters: &FilterState,
    now: DateTime<Utc>,
) -> Vec<&'a Incident> {
    all.iter()
        .filter(|incident| is_visible(incident, filters, now))
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone as _};

    use super::*;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn incident(id: &str, kind: &str, timestamp: DateTime<Utc>) -> Incident {
        Incident {
            id: id.to_string(),
            kind: kind.to_string(),
            title: format!("Vorfall {id}"),
            description: None,
            lat: 51.5,
            lng: 7.4,
            timestamp,
        }
    }

    fn filters(type_value: &str, time_value: &str) -> FilterState {
        FilterState::from_control_values(type_value, time_value)
    }

    #[test]
    fn all_type_filter_includes_every_category() {
        let all = vec![
            incident("1", "Diebstahl", now()),
            incident("2", "Sonstiges", now()),
            incident("3", "", now()),
        ];
        let visible = compute_visible(&all, &filters("ALL", "ALL"), now());
        assert_eq!(visible.len(), 3);
    }

    #[test]
    fn specific_type_filter_is_exact_match() {
        let all = vec![
            incident("1", "Diebstahl", now()),
            incident("2", "Verkehrsunfall", now()),
            incident("3", "diebstahl", now()),
            incident("4", "Diebstahl", now()),
        ];
        let visible = compute_visible(&all, &filters("Diebstahl", "ALL"), now());
        let ids: Vec<&str> = visible.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "4"]);
    }

    #[test]
    fn windows_include_now_and_exact_boundary() {
        for (key, days) in [("24H", 1), ("7D", 7), ("30D", 30)] {
            let range = TimeRange::from_control_value(key);
            assert!(within_time_range(now(), range, now()), "{key}: now");
            assert!(
                within_time_range(now() - Duration::days(days), range, now()),
                "{key}: boundary"
            );
            assert!(
                !within_time_range(now() - Duration::days(days + 1), range, now()),
                "{key}: outside"
            );
            assert!(
                !within_time_range(
                    now() - Duration::days(days) - Duration::milliseconds(1),
                    range,
                    now()
                ),
                "{key}: just outside"
            );
        }
    }

    #[test]
    fn unrestricted_range_accepts_anything() {
        let ancient = Utc.with_ymd_and_hms(1990, 1, 1, 0, 0, 0).unwrap();
        assert!(within_time_range(ancient, TimeRange::All, now()));
        assert!(within_time_range(ancient, TimeRange::from_control_value("??"), now()));
        assert!(cutoff(TimeRange::All, now()).is_none());
    }

    #[test]
    fn future_timestamps_are_inside_every_window() {
        let later = now() + Duration::days(3);
        assert!(within_time_range(later, TimeRange::Last24Hours, now()));
    }

    #[test]
    fn thirty_day_window_drops_older_incident() {
        let all = vec![
            incident("1", "Diebstahl", now()),
            incident("2", "Verkehrsunfall", now() - Duration::days(40)),
        ];
        let visible = compute_visible(&all, &filters("ALL", "30D"), now());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn type_and_time_filters_combine() {
        let all = vec![
            incident("1", "Diebstahl", now() - Duration::hours(2)),
            incident("2", "Diebstahl", now() - Duration::days(3)),
            incident("3", "Ruhestörung", now() - Duration::hours(1)),
        ];
        let visible = compute_visible(&all, &filters("Diebstahl", "24H"), now());
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "1");
    }

    #[test]
    fn filtering_preserves_store_order() {
        let all = vec![
            incident("c", "Diebstahl", now() - Duration::days(2)),
            incident("a", "Diebstahl", now()),
            incident("b", "Diebstahl", now() - Duration::days(1)),
        ];
        let visible = compute_visible(&all, &filters("ALL", "7D"), now());
        let ids: Vec<&str> = visible.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "b"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        assert!(compute_visible(&[], &filters("ALL", "24H"), now()).is_empty());
    }
}
