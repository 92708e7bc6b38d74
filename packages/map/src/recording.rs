//! In-memory [`MapWidget`] that records every call.

use std::collections::{BTreeMap, BTreeSet};

use crate::{
    LatLng, LatLngBounds, LayerKind, LegendControl, MapOptions, MapWidget, Marker, MarkerHandle,
    TileLayer,
};

/// A map widget without a screen.
///
/// Keeps the viewport, attached layers, controls, and markers per layer so
/// that callers can inspect what a real widget would be showing.
#[derive(Debug, Default)]
pub struct RecordingMap {
    options: Option<MapOptions>,
    view: Option<(LatLng, u8)>,
    tile_layers: Vec<TileLayer>,
    controls: Vec<LegendControl>,
    attached: BTreeSet<LayerKind>,
    layers: BTreeMap<LayerKind, BTreeMap<MarkerHandle, Marker>>,
    fitted: Vec<LatLngBounds>,
    next_handle: u64,
}

impl RecordingMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current viewport center and zoom, as last set by
    /// [`MapWidget::set_view`].
    #[must_use]
    pub const fn view(&self) -> Option<(LatLng, u8)> {
        self.view
    }

    /// Attached tile layers.
    #[must_use]
    pub fn tile_layers(&self) -> &[TileLayer] {
        &self.tile_layers
    }

    /// Attached controls.
    #[must_use]
    pub fn controls(&self) -> &[LegendControl] {
        &self.controls
    }

    /// Every bounds passed to [`MapWidget::fit_bounds`], oldest first.
    #[must_use]
    pub fn fit_history(&self) -> &[LatLngBounds] {
        &self.fitted
    }

    /// The most recent bounds fit.
    #[must_use]
    pub fn last_fit(&self) -> Option<LatLngBounds> {
        self.fitted.last().copied()
    }

    /// Markers held by `layer`, in insertion order, attached or not.
    #[must_use]
    pub fn layer_markers(&self, layer: LayerKind) -> Vec<&Marker> {
        self.layers
            .get(&layer)
            .map(|markers| markers.values().collect())
            .unwrap_or_default()
    }

    /// Markers currently shown: those in attached layers.
    #[must_use]
    pub fn visible_markers(&self) -> Vec<&Marker> {
        self.attached
            .iter()
            .flat_map(|layer| self.layer_markers(*layer))
            .collect()
    }
}

impl MapWidget for RecordingMap {
    fn set_options(&mut self, options: &MapOptions) {
        self.options = Some(options.clone());
    }

    fn set_view(&mut self, center: LatLng, zoom: u8) {
        let zoom = self
            .options
            .as_ref()
            .map_or(zoom, |options| zoom.max(options.min_zoom));
        self.view = Some((center, zoom));
    }

    fn add_tile_layer(&mut self, layer: TileLayer) {
        self.tile_layers.push(layer);
    }

    fn add_control(&mut self, control: LegendControl) {
        self.controls.push(control);
    }

    fn has_layer(&self, layer: LayerKind) -> bool {
        self.attached.contains(&layer)
    }

    fn add_layer(&mut self, layer: LayerKind) {
        self.attached.insert(layer);
    }

    fn add_marker(&mut self, layer: LayerKind, marker: Marker) -> MarkerHandle {
        let handle = MarkerHandle(self.next_handle);
        self.next_handle += 1;
        self.layers.entry(layer).or_default().insert(handle, marker);
        handle
    }

    fn remove_marker(&mut self, layer: LayerKind, handle: MarkerHandle) {
        if let Some(markers) = self.layers.get_mut(&layer) {
            markers.remove(&handle);
        }
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        log::trace!("fit_bounds: {bounds:?}");
        self.view = Some((bounds.center(), self.view.map_or(0, |(_, zoom)| zoom)));
        self.fitted.push(bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MarkerIcon;

    fn marker(id: &str) -> Marker {
        Marker {
            id: id.to_string(),
            position: LatLng::new(51.5, 7.4),
            color: "#2563eb".to_string(),
            icon: MarkerIcon::dot("#2563eb"),
            popup_html: String::new(),
        }
    }

    #[test]
    fn markers_only_visible_once_layer_attached() {
        let mut map = RecordingMap::new();
        map.add_marker(LayerKind::Cluster, marker("a"));
        assert!(map.visible_markers().is_empty());
        assert_eq!(map.layer_markers(LayerKind::Cluster).len(), 1);

        map.add_layer(LayerKind::Cluster);
        assert!(map.has_layer(LayerKind::Cluster));
        assert!(!map.has_layer(LayerKind::Plain));
        assert_eq!(map.visible_markers().len(), 1);
    }

    #[test]
    fn removing_from_wrong_layer_is_ignored() {
        let mut map = RecordingMap::new();
        let handle = map.add_marker(LayerKind::Cluster, marker("a"));
        map.remove_marker(LayerKind::Plain, handle);
        assert_eq!(map.layer_markers(LayerKind::Cluster).len(), 1);
        map.remove_marker(LayerKind::Cluster, handle);
        assert!(map.layer_markers(LayerKind::Cluster).is_empty());
    }

    #[test]
    fn handles_are_unique_and_ordered() {
        let mut map = RecordingMap::new();
        let a = map.add_marker(LayerKind::Cluster, marker("a"));
        let b = map.add_marker(LayerKind::Plain, marker("b"));
        let c = map.add_marker(LayerKind::Cluster, marker("c"));
        assert!(a < b && b < c);
        let ids: Vec<&str> = map
            .layer_markers(LayerKind::Cluster)
            .iter()
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn view_respects_min_zoom() {
        let mut map = RecordingMap::new();
        map.set_options(&MapOptions::default());
        map.set_view(LatLng::new(51.5, 7.4), 2);
        assert_eq!(map.view(), Some((LatLng::new(51.5, 7.4), 5)));
    }
}
