use super::{DateRangePicker, IndexSelector};
use dioxus::prelude::*;
use vmon_data::view::DRAW_HINT;

/// Index selection, date range and the drawing hint.
#[component]
pub fn LayersPanel() -> Element {
    let hint = DRAW_HINT;
    rsx! {
        div {
            IndexSelector {}
            DateRangePicker {}
            div {
                style: "margin-top: 16px; padding: 10px; background: #EFF6FF; border-radius: 4px; color: #1E3A8A; font-size: 13px;",
                "{hint}"
            }
        }
    }
}
