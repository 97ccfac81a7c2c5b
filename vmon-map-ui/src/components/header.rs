use dioxus::prelude::*;

/// Page title bar.
#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            style: "padding: 12px 20px; background: #166534; color: white; box-shadow: 0 2px 4px rgba(0,0,0,0.2);",
            h1 {
                style: "margin: 0; font-size: 20px; font-weight: 600;",
                "Web GIS System for NDVI & SAVI Monitoring"
            }
        }
    }
}
