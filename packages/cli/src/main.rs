#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Command-line preview of the incident map.
//!
//! Loads incidents, drives the render controller against an in-memory
//! map widget, and prints the markers that a browser map would show.
//! With `--interactive` the selectors, the reset button, and the `r`
//! shortcut are emulated with prompts.

mod interactive;

use std::path::PathBuf;

use clap::Parser;
use lagekarte_incident_models::SHOW_ALL;
use lagekarte_map::RecordingMap;
use lagekarte_map::features::to_feature_collection;
use lagekarte_render::{AppConfig, ControlEvent, RenderController, RenderSummary};
use lagekarte_store::{DataSource, IncidentStore};

#[derive(Debug, Parser)]
#[command(name = "lagekarte")]
#[command(about = "Render incidents onto a map and list the resulting markers")]
struct Args {
    /// TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Incident source: `inline`, a JSON file path, or an http(s) URL.
    #[arg(long)]
    data: Option<String>,

    /// Category to show, or `ALL`.
    #[arg(long = "type", default_value = SHOW_ALL)]
    type_filter: String,

    /// Time range to show: `ALL`, `24H`, `7D`, or `30D`.
    #[arg(long, default_value = SHOW_ALL)]
    time: String,

    /// Disable the time-range selector (category filtering only).
    #[arg(long)]
    no_time_filter: bool,

    /// Write the visible markers to this file as a `GeoJSON`
    /// `FeatureCollection`.
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Prompt for filter changes instead of rendering once.
    #[arg(short, long)]
    interactive: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init_custom_env("RUST_LOG");

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(location) = &args.data {
        config.data = DataSource::from_location(location);
    }
    if args.no_time_filter {
        config.time_filter = false;
    }

    let store = IncidentStore::load_or_empty(&config.data).await;

    let mut controller = RenderController::new(RecordingMap::new(), &config)?;
    let mut summary = controller.load(store);

    if args.interactive {
        interactive::run(&mut controller)?;
    } else {
        if args.type_filter != SHOW_ALL
            && let Some(next) = controller.handle(ControlEvent::TypeChanged(args.type_filter))
        {
            summary = next;
        }
        if args.time != SHOW_ALL
            && let Some(next) = controller.handle(ControlEvent::TimeChanged(args.time))
        {
            summary = next;
        }
        print_render(&controller, &summary);
    }

    if let Some(path) = &args.geojson {
        let collection = to_feature_collection(controller.map().visible_markers());
        std::fs::write(path, collection.to_string())?;
        log::info!(
            "Wrote {} features to {}",
            collection.features.len(),
            path.display()
        );
    }

    Ok(())
}

/// Prints the markers currently on the map and the fitted viewport.
fn print_render(controller: &RenderController<RecordingMap>, summary: &RenderSummary) {
    let filters = controller.filters();
    println!(
        "{} of {} incidents (Delikt: {}, Zeitraum: {})",
        summary.visible.len(),
        controller.store().len(),
        filters.type_filter.control_value(),
        filters.time_filter,
    );

    for marker in controller.map().visible_markers() {
        let (kind, title) = controller
            .store()
            .get(&marker.id)
            .map_or(("", ""), |incident| {
                (incident.kind.as_str(), incident.title.as_str())
            });
        println!(
            "  {:<14} {:<18} {} {:>9.4} {:>9.4}  {title}",
            marker.id, kind, marker.color, marker.position.lat, marker.position.lng,
        );
    }

    match summary.fitted {
        Some(bounds) => println!(
            "Viewport: {:.4},{:.4} .. {:.4},{:.4}",
            bounds.south, bounds.west, bounds.north, bounds.east
        ),
        None => println!("Viewport unchanged"),
    }
}
