//! Static help: what each index measures and how to use the page.

use dioxus::prelude::*;
use vmon_core::index::{IndexType, DEFAULT_SOIL_FACTOR, NIR_BAND, RED_BAND};

const HOW_TO_USE: [&str; 5] = [
    "Draw a polygon or rectangle on the map to define your Area of Interest.",
    "Select a vegetation index (NDVI or SAVI) in the Layers panel.",
    "Adjust the date range to analyze different periods.",
    "Open the Time Series panel to see how both indices change over time.",
    "Use the Export button to download the current visualization.",
];

#[component]
pub fn InfoPanel() -> Element {
    let indices: Vec<(&'static str, &'static str, &'static str)> = IndexType::ALL
        .iter()
        .map(|index| (index.display_name(), index.description(), index.formula()))
        .collect();
    let bands = format!(
        "Computed from Sentinel-2 surface reflectance: NIR is band {}, RED is band {}. SAVI uses a soil brightness factor L = {}.",
        NIR_BAND, RED_BAND, DEFAULT_SOIL_FACTOR
    );

    rsx! {
        div {
            style: "font-size: 14px; line-height: 1.5;",
            h4 { style: "margin: 12px 0 6px 0;", "About the Indices" }
            for (name, description, formula) in indices {
                div {
                    key: "{name}",
                    style: "margin-bottom: 12px;",
                    strong { "{name}" }
                    p { style: "margin: 4px 0;", "{description}" }
                    code {
                        style: "display: block; padding: 6px 8px; background: #F3F4F6; border-radius: 4px; font-size: 12px;",
                        "{formula}"
                    }
                }
            }
            p { style: "color: #4B5563; font-size: 13px;", "{bands}" }
            h4 { style: "margin: 12px 0 6px 0;", "How to Use" }
            ol {
                style: "padding-left: 20px; margin: 0;",
                for step in HOW_TO_USE {
                    li { key: "{step}", "{step}" }
                }
            }
        }
    }
}
