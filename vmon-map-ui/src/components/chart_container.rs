//! Container for the Chart.js canvas.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id the chart widget renders into
    pub id: String,
    /// Dim the chart while a newer result is on its way
    #[props(default = false)]
    pub loading: bool,
    #[props(default = 260)]
    pub height: u32,
}

/// A fixed-height box for a Chart.js canvas, with a loading overlay.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "height: {}px; position: relative; width: 100%;",
        props.height
    );

    rsx! {
        div {
            style: "{style}",
            div {
                id: "{props.id}",
                style: "width: 100%; height: 100%;",
            }
            if props.loading {
                div {
                    style: "position: absolute; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(255,255,255,0.6); color: #666;",
                    "Loading chart..."
                }
            }
        }
    }
}
