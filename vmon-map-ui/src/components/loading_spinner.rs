//! Loading indicator.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct LoadingSpinnerProps {
    #[props(default = "Loading data...".to_string())]
    pub message: String,
}

/// Spinning ring with a short message.
#[component]
pub fn LoadingSpinner(props: LoadingSpinnerProps) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 10px; padding: 10px 16px; background: white; border-radius: 6px; box-shadow: 0 2px 6px rgba(0,0,0,0.25); color: #374151;",
            div {
                style: "width: 18px; height: 18px; border: 3px solid #D1D5DB; border-top-color: #16A34A; border-radius: 50%; animation: vmon-spin 0.8s linear infinite;",
            }
            style { "@keyframes vmon-spin {{ to {{ transform: rotate(360deg); }} }}" }
            span { "{props.message}" }
        }
    }
}
