use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use vmon_data::view::ExportTarget;

/// Downloads the current overlay as `{index}_{start}_{end}.png`. Disabled
/// until an overlay exists.
#[component]
pub fn ExportButton() -> Element {
    let state = use_context::<AppState>();
    let target = ExportTarget::from_state(&(state.fetch_state)());
    let disabled = target.is_none();
    let style = if disabled {
        "background: #9CA3AF; cursor: not-allowed;"
    } else {
        "background: #16A34A; cursor: pointer;"
    };

    let on_click = move |_: Event<MouseData>| {
        let Some(target) = &target else {
            return;
        };
        match js_bridge::download(&target.url, &target.filename) {
            Ok(()) => log::info!("Exported {}", target.filename),
            Err(e) => log::error!("Export of {} failed: {:?}", target.filename, e),
        }
    };

    rsx! {
        button {
            style: "position: absolute; top: 12px; left: 56px; z-index: 1000; padding: 8px 14px; color: white; border: none; border-radius: 4px; box-shadow: 0 1px 4px rgba(0,0,0,0.3); {style}",
            disabled: disabled,
            onclick: on_click,
            "Export"
        }
    }
}
