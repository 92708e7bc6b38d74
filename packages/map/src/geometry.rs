//! Coordinates and bounding boxes in decimal degrees.

use serde::{Deserialize, Serialize};

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude.
    pub lat: f64,
    /// Longitude.
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate pair.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    /// Western longitude boundary.
    pub west: f64,
    /// Southern latitude boundary.
    pub south: f64,
    /// Eastern longitude boundary.
    pub east: f64,
    /// Northern latitude boundary.
    pub north: f64,
}

impl LatLngBounds {
    /// Creates a new bounding box from the given coordinates.
    #[must_use]
    pub const fn new(west: f64, south: f64, east: f64, north: f64) -> Self {
        Self {
            west,
            south,
            east,
            north,
        }
    }

    /// A zero-area box around a single point.
    #[must_use]
    pub const fn from_point(point: LatLng) -> Self {
        Self::new(point.lng, point.lat, point.lng, point.lat)
    }

    /// The smallest box containing every point, or `None` for no points.
    #[must_use]
    pub fn from_points<I: IntoIterator<Item = LatLng>>(points: I) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        Some(points.fold(Self::from_point(first), Self::extend))
    }

    /// Grows the box to include `point`.
    #[must_use]
    pub fn extend(self, point: LatLng) -> Self {
        Self::new(
            self.west.min(point.lng),
            self.south.min(point.lat),
            self.east.max(point.lng),
            self.north.max(point.lat),
        )
    }

    /// Grows each side by `ratio` times the span of its axis.
    ///
    /// A ratio of `0.2` widens both spans by 40% in total. A single-point
    /// box has zero span and stays a point.
    #[must_use]
    pub fn pad(self, ratio: f64) -> Self {
        let lat_buffer = (self.north - self.south).abs() * ratio;
        let lng_buffer = (self.east - self.west).abs() * ratio;
        Self::new(
            self.west - lng_buffer,
            self.south - lat_buffer,
            self.east + lng_buffer,
            self.north + lat_buffer,
        )
    }

    /// The center of the box.
    #[must_use]
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south + self.north) / 2.0,
            (self.west + self.east) / 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn bounds_cover_all_points() {
        let bounds = LatLngBounds::from_points([
            LatLng::new(51.5, 7.4),
            LatLng::new(52.0, 7.0),
            LatLng::new(51.0, 8.0),
        ])
        .unwrap();
        assert_eq!(bounds, LatLngBounds::new(7.0, 51.0, 8.0, 52.0));
    }

    #[test]
    fn no_points_means_no_bounds() {
        assert!(LatLngBounds::from_points(std::iter::empty()).is_none());
    }

    #[test]
    fn pad_grows_each_side_by_ratio_of_span() {
        let padded = LatLngBounds::new(7.0, 51.0, 8.0, 52.0).pad(0.2);
        assert!(approx(padded.west, 6.8));
        assert!(approx(padded.east, 8.2));
        assert!(approx(padded.south, 50.8));
        assert!(approx(padded.north, 52.2));
    }

    #[test]
    fn pad_leaves_single_point_unchanged() {
        let point = LatLngBounds::from_point(LatLng::new(51.5, 7.4));
        assert_eq!(point.pad(0.2), point);
        assert_eq!(point.center(), LatLng::new(51.5, 7.4));
    }
}
