use crate::state::AppState;
use dioxus::prelude::*;
use vmon_data::view::Panel;

/// Tab strip switching the sidebar panel.
#[component]
pub fn PanelTabs() -> Element {
    let mut state = use_context::<AppState>();
    let active = (state.active_panel)();

    let tabs: Vec<(Panel, &'static str, String)> = Panel::ALL
        .iter()
        .map(|&panel| {
            let style = if panel == active {
                "flex: 1; padding: 8px; border: none; border-bottom: 3px solid #16A34A; background: #F0FDF4; font-weight: 600; cursor: pointer;"
            } else {
                "flex: 1; padding: 8px; border: none; border-bottom: 3px solid transparent; background: none; color: #4B5563; cursor: pointer;"
            };
            (panel, panel.label(), style.to_string())
        })
        .collect();

    rsx! {
        nav {
            style: "display: flex; border-bottom: 1px solid #E5E7EB;",
            for (panel, label, style) in tabs {
                button {
                    key: "{label}",
                    style: "{style}",
                    onclick: move |_| state.active_panel.set(panel),
                    "{label}"
                }
            }
        }
    }
}
