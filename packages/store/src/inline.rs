//! Built-in demo dataset.
//!
//! Timestamps are relative to the moment of loading, so every time window
//! has something to show.

use chrono::{DateTime, Duration, Utc};
use lagekarte_incident_models::Incident;

struct DemoIncident {
    id: &'static str,
    kind: &'static str,
    title: &'static str,
    description: Option<&'static str>,
    lat: f64,
    lng: f64,
    hours_ago: i64,
}

const DEMO_INCIDENTS: &[DemoIncident] = &[
    DemoIncident {
        id: "A-1001",
        kind: "Diebstahl",
        title: "Handtaschenraub in der Innenstadt",
        description: Some("Täterin flüchtete in Richtung Westenhellweg."),
        lat: 51.5136,
        lng: 7.4653,
        hours_ago: 3,
    },
    DemoIncident {
        id: "A-1002",
        kind: "Verkehrsunfall",
        title: "Unfall an Kreuzung",
        description: Some("Zwei Pkw, Sachschaden, keine Verletzten."),
        lat: 51.4818,
        lng: 7.2162,
        hours_ago: 20,
    },
    DemoIncident {
        id: "A-1003",
        kind: "Körperverletzung",
        title: "Streit eskaliert",
        description: None,
        lat: 51.4556,
        lng: 7.0116,
        hours_ago: 2 * 24,
    },
    DemoIncident {
        id: "A-1004",
        kind: "Ruhestörung",
        title: "Nächtliche Party",
        description: Some("Anwohner beschweren sich über Lärm."),
        lat: 51.4344,
        lng: 6.7623,
        hours_ago: 5 * 24,
    },
    DemoIncident {
        id: "A-1005",
        kind: "Diebstahl",
        title: "Einbruch in Gartenlaube",
        description: Some("Werkzeug und Rasenmäher entwendet."),
        lat: 51.9625,
        lng: 7.6256,
        hours_ago: 12 * 24,
    },
    DemoIncident {
        id: "A-1006",
        kind: "Verkehrsunfall",
        title: "Wildunfall auf Landstraße",
        description: None,
        lat: 51.3671,
        lng: 7.4633,
        hours_ago: 25 * 24,
    },
    DemoIncident {
        id: "A-1007",
        kind: "Sachbeschädigung",
        title: "Beschädigte Bushaltestelle",
        description: Some("Glasscheibe eingeschlagen."),
        lat: 51.5177,
        lng: 7.0857,
        hours_ago: 45 * 24,
    },
];

/// Builds the demo incidents with timestamps counted back from `now`.
#[must_use]
pub fn demo_incidents(now: DateTime<Utc>) -> Vec<Incident> {
    DEMO_INCIDENTS
        .iter()
        .map(|demo| Incident {
            id: demo.id.to_string(),
            kind: demo.kind.to_string(),
            title: demo.title.to_string(),
            description: demo.description.map(str::to_string),
            lat: demo.lat,
            lng: demo.lng,
            timestamp: now - Duration::hours(demo.hours_ago),
        })
        .collect()
}
