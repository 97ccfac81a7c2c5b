use super::{InfoPanel, LayersPanel, PanelTabs, TimeSeriesPanel};
use crate::state::AppState;
use dioxus::prelude::*;
use vmon_data::view::Panel;

/// Left-hand control column: tabs plus the active panel.
#[component]
pub fn Sidebar() -> Element {
    let state = use_context::<AppState>();
    let active = (state.active_panel)();

    rsx! {
        aside {
            style: "width: 340px; flex-shrink: 0; display: flex; flex-direction: column; background: white; border-right: 1px solid #E5E7EB; overflow: hidden;",
            PanelTabs {}
            div {
                style: "flex: 1; overflow-y: auto; padding: 12px 16px;",
                {match active {
                    Panel::Layers => rsx! { LayersPanel {} },
                    Panel::TimeSeries => rsx! { TimeSeriesPanel {} },
                    Panel::Info => rsx! { InfoPanel {} },
                }}
            }
        }
    }
}
