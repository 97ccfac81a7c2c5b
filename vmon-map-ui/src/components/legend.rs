use dioxus::prelude::*;
use vmon_core::index::IndexType;
use vmon_core::palette::legend;

/// Color ramp of `index` with its value labels, pinned to the map corner.
#[component]
pub fn Legend(index: IndexType) -> Element {
    let title = format!("{} Legend", index.display_name());
    let swatches: Vec<(String, &'static str)> = legend(index)
        .into_iter()
        .map(|entry| {
            (
                format!(
                    "width: 18px; height: 12px; background: {}; border: 1px solid rgba(0,0,0,0.2);",
                    entry.color
                ),
                entry.label,
            )
        })
        .collect();

    rsx! {
        div {
            style: "position: absolute; bottom: 24px; right: 12px; z-index: 1000; padding: 8px 10px; background: white; border-radius: 4px; box-shadow: 0 1px 4px rgba(0,0,0,0.3); font-size: 12px;",
            div { style: "font-weight: 600; margin-bottom: 4px;", "{title}" }
            for (swatch, label) in swatches {
                div {
                    key: "{label}",
                    style: "display: flex; align-items: center; gap: 6px; margin: 2px 0;",
                    span { style: "{swatch}" }
                    span { "{label}" }
                }
            }
        }
    }
}
