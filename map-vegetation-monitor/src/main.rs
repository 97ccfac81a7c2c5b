//! NDVI & SAVI Vegetation Monitoring
//!
//! A Leaflet map where the user draws an area of interest, picks an index
//! and a date range, and gets a simulated index overlay plus a time series
//! chart of both indices.
//!
//! Data flow:
//! 1. Drawing a shape sets the store's area of interest and bumps
//!    `aoi_revision`.
//! 2. The fetch effect watches index, dates and `aoi_revision`. Each change
//!    cancels the previous fetch task and spawns a new one.
//! 3. The store publishes `Loading`, then `Ready` or `Failed`; a subscriber
//!    mirrors that into `AppState::fetch_state`, which the map overlay,
//!    legend, export button and chart all render from.

use dioxus::core::Task;
use dioxus::prelude::*;
use vmon_data::store::SIMULATED_LATENCY;
use vmon_data::{FetchOutcome, VisualizationStore};
use vmon_map_ui::canvas::CanvasEncoder;
use vmon_map_ui::components::{Header, MapView, Sidebar};
use vmon_map_ui::js_bridge;
use vmon_map_ui::state::AppState;
use vmon_map_ui::timer;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("vegetation-monitor-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let state = use_context_provider(AppState::new);
    let store = use_context_provider(|| VisualizationStore::new(CanvasEncoder));
    let mut in_flight: Signal<Option<Task>> = use_signal(|| None);

    // ─── One-time setup: widget scripts and the store subscription ───
    use_hook({
        let store = store.clone();
        move || {
            js_bridge::init_widgets();
            store.subscribe(move |published| {
                let mut fetch_state = state.fetch_state;
                fetch_state.set(published.clone());
            });
        }
    });

    // ─── Fetch whenever index, date range or AOI changes ───
    use_effect(move || {
        let index = (state.selected_index)();
        // Subscribed only to refetch after every drawing
        let _revision = (state.aoi_revision)();

        let range = match state.date_range() {
            Ok(range) => range,
            Err(e) => {
                log::warn!("Not fetching: {}", e);
                return;
            }
        };
        if !store.has_area_of_interest() {
            return;
        }

        if let Some(task) = *in_flight.peek() {
            task.cancel();
        }
        let store = store.clone();
        let task = spawn(async move {
            let outcome = store
                .fetch_index_data(index, range, timer::sleep(SIMULATED_LATENCY))
                .await;
            if outcome == FetchOutcome::Superseded {
                log::debug!("{} fetch superseded", index);
            }
        });
        in_flight.set(Some(task));
    });

    rsx! {
        div {
            style: "display: flex; flex-direction: column; height: 100vh; margin: 0; font-family: system-ui, -apple-system, sans-serif; color: #111827;",
            Header {}
            div {
                style: "display: flex; flex: 1; min-height: 0;",
                Sidebar {}
                MapView {}
            }
        }
    }
}
