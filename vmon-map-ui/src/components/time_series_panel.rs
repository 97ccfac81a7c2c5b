//! NDVI and SAVI over the picked date range.

use super::{ChartContainer, ErrorDisplay};
use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use vmon_data::view::{ChartSpec, TimeSeriesView, AOI_PROMPT};

const CHART_ID: &str = "vmon-time-series-chart";

/// The chart once an AOI exists, a prompt to draw one before that.
#[component]
pub fn TimeSeriesPanel() -> Element {
    let state = use_context::<AppState>();
    let view = TimeSeriesView::for_aoi((state.has_aoi)());
    let prompt = AOI_PROMPT;

    rsx! {
        div {
            h4 { style: "margin: 12px 0 8px 0;", "Time Series Analysis" }
            if view == TimeSeriesView::Chart {
                TimeSeriesChart {}
            } else {
                div {
                    style: "padding: 16px; background: #F9FAFB; border: 1px dashed #D1D5DB; border-radius: 4px; color: #6B7280; font-size: 14px; text-align: center;",
                    "{prompt}"
                }
            }
        }
    }
}

#[component]
fn TimeSeriesChart() -> Element {
    let state = use_context::<AppState>();

    // Redraw on every published result; keep the last chart while loading
    use_effect(move || {
        let fetch_state = (state.fetch_state)();
        if fetch_state.is_loading() {
            return;
        }
        match serde_json::to_string(&ChartSpec::from_state(&fetch_state)) {
            Ok(json) => js_bridge::render_time_series_chart(CHART_ID, &json),
            Err(e) => log::error!("Failed to serialize chart spec: {}", e),
        }
    });

    use_drop(|| js_bridge::destroy_chart(CHART_ID));

    let fetch_state = (state.fetch_state)();
    let loading = fetch_state.is_loading();
    let failure = fetch_state.failure().map(str::to_string);

    rsx! {
        ChartContainer {
            id: CHART_ID.to_string(),
            loading: loading,
        }
        if let Some(message) = failure {
            ErrorDisplay { message: message }
        }
    }
}
