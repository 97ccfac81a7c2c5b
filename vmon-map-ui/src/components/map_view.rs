//! The Leaflet map: drawing the AOI and showing the index overlay.

use super::{ErrorDisplay, ExportButton, Legend, LoadingSpinner};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use vmon_core::geometry::Geometry;
use vmon_data::view::{legend_index, MapConfig, OverlayLayer};
use vmon_data::VisualizationStore;

const MAP_ID: &str = "vmon-map";

/// Map widget wired to the [`VisualizationStore`] in context.
///
/// A finished drawing becomes the store's area of interest and bumps
/// `aoi_revision`, which the app's fetch effect watches. Deleting every
/// drawing clears the area of interest.
#[component]
pub fn MapView() -> Element {
    let mut state = use_context::<AppState>();
    let store = use_context::<VisualizationStore>();

    use_hook(move || {
        match serde_json::to_string(&MapConfig::default()) {
            Ok(config) => js_bridge::render_map(MAP_ID, &config),
            Err(e) => log::error!("Failed to serialize map config: {}", e),
        }

        let created = store.clone();
        js_bridge::on_draw_created(move |geojson: String| {
            match Geometry::parse_geojson(&geojson) {
                Ok(aoi) => {
                    created.set_area_of_interest(aoi);
                    state.has_aoi.set(true);
                    *state.aoi_revision.write() += 1;
                }
                Err(e) => log::warn!("Ignoring drawn shape: {}", e),
            }
        });

        js_bridge::on_draw_deleted(move || {
            store.clear_area_of_interest();
            state.has_aoi.set(false);
        });
    });

    // Overlay follows the published result
    use_effect(move || match OverlayLayer::from_state(&(state.fetch_state)()) {
        Some(layer) => match serde_json::to_string(&layer) {
            Ok(json) => js_bridge::set_overlay(&json),
            Err(e) => log::error!("Failed to serialize overlay: {}", e),
        },
        None => js_bridge::clear_overlay(),
    });

    let fetch_state = (state.fetch_state)();
    let loading = fetch_state.is_loading();
    let failure = fetch_state.failure().map(str::to_string);
    // Same source as the overlay, so palette and label never disagree
    let index = legend_index(&fetch_state, (state.selected_index)());

    rsx! {
        div {
            style: "position: relative; flex: 1; height: 100%;",
            div {
                id: MAP_ID,
                style: "height: 100%; width: 100%;",
            }
            if loading {
                div {
                    style: "position: absolute; top: 12px; left: 50%; transform: translateX(-50%); z-index: 1000;",
                    LoadingSpinner {}
                }
            }
            if let Some(message) = failure {
                div {
                    style: "position: absolute; bottom: 24px; left: 12px; z-index: 1000; max-width: 360px;",
                    ErrorDisplay { message: message }
                }
            }
            Legend { index: index }
            ExportButton {}
        }
    }
}
