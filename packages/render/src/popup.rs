//! Marker popup and icon construction.

use chrono::{DateTime, FixedOffset, Offset as _, Utc};
use lagekarte_incident_models::Incident;
use lagekarte_map::{LatLng, Marker, MarkerIcon};

/// How popup timestamps are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PopupFormat {
    offset: FixedOffset,
}

impl PopupFormat {
    /// Formats timestamps in the given offset.
    #[must_use]
    pub const fn new(offset: FixedOffset) -> Self {
        Self { offset }
    }

    /// Formats timestamps in UTC.
    #[must_use]
    pub fn utc() -> Self {
        Self::new(Utc.fix())
    }

    /// Renders `ts` as `D.M.YYYY, HH:MM:SS` (German locale, day and month
    /// unpadded) in this format's offset.
    #[must_use]
    pub fn timestamp(&self, ts: DateTime<Utc>) -> String {
        ts.with_timezone(&self.offset)
            .format("%-d.%-m.%Y, %H:%M:%S")
            .to_string()
    }

    /// Builds the popup body for `incident`.
    #[must_use]
    pub fn popup_html(&self, incident: &Incident) -> String {
        format!(
            "<div class=\"marker-popup\">\
             <h3>{title}</h3>\
             <p><strong>ID:</strong> {id}</p>\
             <p><strong>Delikt:</strong> {kind}</p>\
             <p><strong>Zeit:</strong> {time}</p>\
             <p>{description}</p>\
             </div>",
            title = html_escape(&incident.title),
            id = html_escape(&incident.id),
            kind = html_escape(&incident.kind),
            time = self.timestamp(incident.timestamp),
            description = html_escape(incident.description()),
        )
    }

    /// Builds the marker for `incident`, colored by its category.
    #[must_use]
    pub fn marker(&self, incident: &Incident) -> Marker {
        let color = incident.marker_color();
        Marker {
            id: incident.id.clone(),
            position: LatLng::new(incident.lat, incident.lng),
            color: color.to_string(),
            icon: MarkerIcon::dot(color),
            popup_html: self.popup_html(incident),
        }
    }
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone as _;

    use super::*;

    fn incident(kind: &str, description: Option<&str>) -> Incident {
        Incident {
            id: "INC-42".to_string(),
            kind: kind.to_string(),
            title: "Scheibe <eingeschlagen>".to_string(),
            description: description.map(str::to_string),
            lat: 51.51,
            lng: 7.46,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 9, 18, 5, 7).unwrap(),
        }
    }

    #[test]
    fn formats_german_locale_time() {
        let utc = PopupFormat::utc();
        assert_eq!(
            utc.timestamp(Utc.with_ymd_and_hms(2024, 3, 9, 18, 5, 7).unwrap()),
            "9.3.2024, 18:05:07"
        );

        let cet = PopupFormat::new(FixedOffset::east_opt(3600).unwrap());
        assert_eq!(
            cet.timestamp(Utc.with_ymd_and_hms(2024, 12, 31, 23, 30, 0).unwrap()),
            "1.1.2025, 00:30:00"
        );
    }

    #[test]
    fn popup_contains_all_fields() {
        let html = PopupFormat::utc().popup_html(&incident("Diebstahl", Some("Am Markt")));
        assert!(html.contains("<h3>Scheibe &lt;eingeschlagen&gt;</h3>"));
        assert!(html.contains("<strong>ID:</strong> INC-42"));
        assert!(html.contains("<strong>Delikt:</strong> Diebstahl"));
        assert!(html.contains("<strong>Zeit:</strong> 9.3.2024, 18:05:07"));
        assert!(html.contains("<p>Am Markt</p>"));
    }

    #[test]
    fn missing_description_renders_empty_paragraph() {
        let html = PopupFormat::utc().popup_html(&incident("Diebstahl", None));
        assert!(html.contains("<p></p>"));
    }

    #[test]
    fn marker_uses_category_color() {
        let format = PopupFormat::utc();
        let marker = format.marker(&incident("Körperverletzung", None));
        assert_eq!(marker.color, "#ef4444");
        assert_eq!(marker.position, LatLng::new(51.51, 7.46));
        assert!(marker.icon.html.contains("#ef4444"));

        let marker = format.marker(&incident("Sonstiges", None));
        assert_eq!(marker.color, "#2563eb");
    }
}
