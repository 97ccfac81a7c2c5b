//! Vegetation index radio group.

use crate::state::AppState;
use dioxus::prelude::*;
use vmon_core::index::IndexType;

/// One radio button per [`IndexType`]; selecting one refetches the map.
#[component]
pub fn IndexSelector() -> Element {
    let mut state = use_context::<AppState>();
    let selected = (state.selected_index)();

    let options: Vec<(IndexType, &'static str, &'static str, &'static str, bool)> = IndexType::ALL
        .iter()
        .map(|&index| {
            (
                index,
                index.as_str(),
                index.display_name(),
                index.long_name(),
                index == selected,
            )
        })
        .collect();

    rsx! {
        div {
            style: "margin: 12px 0;",
            h4 { style: "margin: 0 0 6px 0;", "Vegetation Indices" }
            for (index, value, name, long_name, checked) in options {
                label {
                    key: "{value}",
                    style: "display: flex; align-items: center; gap: 8px; margin: 4px 0; cursor: pointer; font-size: 14px;",
                    input {
                        r#type: "radio",
                        name: "vegetation-index",
                        value: "{value}",
                        checked: checked,
                        onchange: move |_| state.selected_index.set(index),
                    }
                    span { strong { "{name}" } " ({long_name})" }
                }
            }
        }
    }
}
