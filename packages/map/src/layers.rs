//! Things that can be put on the map: tile layers, markers, and the legend
//! control, plus the initial map options.

use serde::{Deserialize, Serialize};

use crate::LatLng;

/// Initial map configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MapOptions {
    /// Initial view center.
    pub center: LatLng,
    /// Initial zoom level.
    pub zoom: u8,
    /// Lowest zoom level the user may reach.
    pub min_zoom: u8,
    /// Whether panning across the antimeridian jumps to the copy of the
    /// world that contains the markers.
    pub world_copy_jump: bool,
}

impl Default for MapOptions {
    fn default() -> Self {
        Self {
            center: LatLng::new(51.5, 7.4),
            zoom: 7,
            min_zoom: 5,
            world_copy_jump: true,
        }
    }
}

/// A raster tile source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TileLayer {
    /// URL template with `{s}`, `{z}`, `{x}`, `{y}` placeholders.
    pub url_template: String,
    /// Highest zoom level served.
    pub max_zoom: u8,
    /// Attribution HTML shown in the corner of the map.
    pub attribution: String,
}

impl Default for TileLayer {
    fn default() -> Self {
        Self {
            url_template: "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png".to_string(),
            max_zoom: 19,
            attribution: "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OSM</a>-Mitwirkende"
                .to_string(),
        }
    }
}

/// An HTML marker icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerIcon {
    /// CSS class on the icon container.
    pub class_name: String,
    /// Inner HTML of the icon.
    pub html: String,
    /// Icon size in pixels (width, height).
    pub size: (u16, u16),
    /// Pixel offset of the anchor point from the top-left corner.
    pub anchor: (u16, u16),
}

impl MarkerIcon {
    /// A 14 px dot in `color` with a white border, anchored at its center.
    #[must_use]
    pub fn dot(color: &str) -> Self {
        Self {
            class_name: "custom-marker".to_string(),
            html: format!(
                "<div style=\"background:{color};width:14px;height:14px;border-radius:50%;\
                 border:2px solid white;box-shadow:0 0 0 1px rgba(0,0,0,.2)\"></div>"
            ),
            size: (16, 16),
            anchor: (8, 8),
        }
    }
}

/// A point marker with an icon and a popup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Marker {
    /// Identifier of the record this marker shows.
    pub id: String,
    /// Marker position.
    pub position: LatLng,
    /// Fill color of the icon.
    pub color: String,
    /// Icon drawn at `position`.
    pub icon: MarkerIcon,
    /// HTML shown when the marker is clicked.
    pub popup_html: String,
}

/// Corner of the map a control is docked to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ControlPosition {
    /// Top left corner.
    TopLeft,
    /// Top right corner.
    TopRight,
    /// Bottom left corner.
    BottomLeft,
    /// Bottom right corner.
    #[default]
    BottomRight,
}

/// One row of the legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendEntry {
    /// Category label.
    pub label: String,
    /// Dot color.
    pub color: String,
}

/// The color legend overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegendControl {
    /// Where the legend is docked.
    pub position: ControlPosition,
    /// Rows, top to bottom.
    pub entries: Vec<LegendEntry>,
}

impl LegendControl {
    /// Renders the legend body.
    #[must_use]
    pub fn html(&self) -> String {
        let items: String = self
            .entries
            .iter()
            .map(|entry| {
                format!(
                    "<div class=\"item\"><span class=\"dot\" style=\"background:{}\"></span>{}</div>",
                    entry.color, entry.label
                )
            })
            .collect();
        format!("<div class=\"legend\">{items}</div>")
    }
}
