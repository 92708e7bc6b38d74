//! `GeoJSON` export of markers.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value, feature::Id};

use crate::Marker;

/// Converts markers into a `GeoJSON` `FeatureCollection` of points.
///
/// Each feature carries the marker id, its color, and the popup HTML as
/// properties.
#[must_use]
pub fn to_feature_collection<'a, I>(markers: I) -> FeatureCollection
where
    I: IntoIterator<Item = &'a Marker>,
{
    let features = markers
        .into_iter()
        .map(|marker| {
            let mut properties = JsonObject::new();
            properties.insert("id".to_string(), marker.id.clone().into());
            properties.insert("color".to_string(), marker.color.clone().into());
            properties.insert("popup".to_string(), marker.popup_html.clone().into());

            Feature {
                bbox: None,
                geometry: Some(Geometry::new(Value::Point(vec![
                    marker.position.lng,
                    marker.position.lat,
                ]))),
                id: Some(Id::String(marker.id.clone())),
                properties: Some(properties),
                foreign_members: None,
            }
        })
        .collect();

    FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    }
}
