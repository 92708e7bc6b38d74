//! The render controller and the control events that drive it.

use chrono::{DateTime, Utc};
use lagekarte_filter::compute_visible;
use lagekarte_incident_models::{FilterState, IncidentCategory, TimeRange, TypeFilter};
use lagekarte_map::{
    ControlPosition, LatLng, LatLngBounds, LayerKind, LegendControl, LegendEntry, MapWidget,
    MarkerHandle,
};
use lagekarte_store::IncidentStore;

use crate::{AppConfig, ConfigError, PopupFormat};

/// A user interaction with the filter controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlEvent {
    /// The category selector changed to this value.
    TypeChanged(String),
    /// The time-range selector changed to this value.
    TimeChanged(String),
    /// The reset button was clicked.
    ResetClicked,
    /// A key was pressed anywhere on the page.
    KeyPressed(String),
}

/// Outcome of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSummary {
    /// Ids of the visible incidents, in store order.
    pub visible: Vec<String>,
    /// The padded bounds the viewport was fitted to, if any.
    pub fitted: Option<LatLngBounds>,
}

/// Owns the incident store, the filter selection, and the markers on a
/// map widget.
///
/// All mutation happens through `&mut self`, so renders never overlap.
pub struct RenderController<M: MapWidget> {
    map: M,
    store: IncidentStore,
    filters: FilterState,
    time_filter_enabled: bool,
    fit_padding: f64,
    popup: PopupFormat,
    markers: Vec<MarkerHandle>,
}

impl<M: MapWidget> RenderController<M> {
    /// Sets up the map (options, initial view, tiles, legend) with an
    /// empty store. Nothing is rendered until [`Self::load`] is called.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidOffset`] if the configured popup time
    /// offset is out of range.
    pub fn new(mut map: M, config: &AppConfig) -> Result<Self, ConfigError> {
        let popup = PopupFormat::new(config.popup_offset()?);

        map.set_options(&config.map);
        map.set_view(config.map.center, config.map.zoom);
        map.add_tile_layer(config.tiles.clone());
        map.add_control(legend());

        Ok(Self {
            map,
            store: IncidentStore::empty(),
            filters: FilterState::default(),
            time_filter_enabled: config.time_filter,
            fit_padding: config.fit_padding,
            popup,
            markers: Vec::new(),
        })
    }

    /// Overrides how popup timestamps are formatted.
    #[must_use]
    pub fn with_popup_format(mut self, popup: PopupFormat) -> Self {
        self.popup = popup;
        self
    }

    /// Installs the loaded incidents and performs the initial render.
    pub fn load(&mut self, store: IncidentStore) -> RenderSummary {
        self.load_at(store, Utc::now())
    }

    /// Like [`Self::load`], evaluating time windows at `now`.
    pub fn load_at(&mut self, store: IncidentStore, now: DateTime<Utc>) -> RenderSummary {
        self.store = store;
        self.render_at(now)
    }

    /// Re-renders using the wall clock.
    pub fn render(&mut self) -> RenderSummary {
        self.render_at(Utc::now())
    }

    /// Clears every marker, recomputes the visible set at `now`, and puts
    /// one fresh marker per visible incident on the clustering layer.
    ///
    /// The viewport is fitted to the padded marker bounds unless nothing
    /// is visible, in which case it is left alone.
    pub fn render_at(&mut self, now: DateTime<Utc>) -> RenderSummary {
        self.clear_markers();

        let filters = self.effective_filters();
        let visible = compute_visible(self.store.incidents(), &filters, now);

        for incident in &visible {
            let handle = self
                .map
                .add_marker(LayerKind::Cluster, self.popup.marker(incident));
            self.markers.push(handle);
        }

        if !self.map.has_layer(LayerKind::Cluster) {
            self.map.add_layer(LayerKind::Cluster);
        }

        let fitted = LatLngBounds::from_points(
            visible
                .iter()
                .map(|incident| LatLng::new(incident.lat, incident.lng)),
        )
        .map(|bounds| bounds.pad(self.fit_padding));

        if let Some(bounds) = fitted {
            self.map.fit_bounds(bounds);
        }

        log::debug!(
            "Rendered {} of {} incidents (type={}, time={})",
            visible.len(),
            self.store.len(),
            filters.type_filter.control_value(),
            filters.time_filter,
        );

        RenderSummary {
            visible: visible.iter().map(|incident| incident.id.clone()).collect(),
            fitted,
        }
    }

    /// Applies a control event using the wall clock.
    ///
    /// Returns `None` when the event did not trigger a render.
    pub fn handle(&mut self, event: ControlEvent) -> Option<RenderSummary> {
        self.handle_at(event, Utc::now())
    }

    /// Applies a control event, evaluating time windows at `now`.
    ///
    /// Returns `None` when the event did not trigger a render.
    pub fn handle_at(&mut self, event: ControlEvent, now: DateTime<Utc>) -> Option<RenderSummary> {
        match event {
            ControlEvent::TypeChanged(value) => {
                self.filters.type_filter = TypeFilter::from_control_value(&value);
            }
            ControlEvent::TimeChanged(value) => {
                if !self.time_filter_enabled {
                    log::warn!("Ignoring time range {value:?}: time filtering is disabled");
                    return None;
                }
                self.filters.time_filter = TimeRange::from_control_value(&value);
            }
            ControlEvent::ResetClicked => self.filters.reset(),
            ControlEvent::KeyPressed(key) => {
                if !key.eq_ignore_ascii_case("r") {
                    return None;
                }
                self.filters.reset();
            }
        }
        Some(self.render_at(now))
    }

    /// Removes every tracked marker from both layers.
    fn clear_markers(&mut self) {
        for handle in self.markers.drain(..) {
            self.map.remove_marker(LayerKind::Cluster, handle);
            self.map.remove_marker(LayerKind::Plain, handle);
        }
    }

    fn effective_filters(&self) -> FilterState {
        if self.time_filter_enabled {
            self.filters.clone()
        } else {
            FilterState {
                type_filter: self.filters.type_filter.clone(),
                time_filter: TimeRange::All,
            }
        }
    }

    /// Current selector state.
    #[must_use]
    pub const fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Whether the time-range selector is available.
    #[must_use]
    pub const fn time_filter_enabled(&self) -> bool {
        self.time_filter_enabled
    }

    /// The loaded incidents.
    #[must_use]
    pub const fn store(&self) -> &IncidentStore {
        &self.store
    }

    /// Number of markers currently on the map.
    #[must_use]
    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    /// The map widget.
    #[must_use]
    pub const fn map(&self) -> &M {
        &self.map
    }

    /// Consumes the controller and returns the map widget.
    pub fn into_map(self) -> M {
        self.map
    }
}

/// The category color legend, docked bottom right.
#[must_use]
pub fn legend() -> LegendControl {
    LegendControl {
        position: ControlPosition::BottomRight,
        entries: IncidentCategory::all()
            .iter()
            .map(|category| LegendEntry {
                label: category.to_string(),
                color: category.color().to_string(),
            })
            .collect(),
    }
}
