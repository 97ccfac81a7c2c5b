//! Date range picker with start and end date inputs.

use crate::state::AppState;
use dioxus::prelude::*;

/// Start and end date inputs. An inverted range is reported below the
/// inputs and keeps the map on its last result.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let range_error = state.date_range().err().map(|e| e.to_string());

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    rsx! {
        div {
            style: "margin: 12px 0;",
            h4 { style: "margin: 0 0 6px 0;", "Date Range" }
            div {
                style: "display: flex; flex-direction: column; gap: 6px;",
                label {
                    style: "display: flex; justify-content: space-between; align-items: center; font-size: 14px;",
                    "Start Date"
                    input {
                        r#type: "date",
                        value: "{start}",
                        onchange: on_start_change,
                    }
                }
                label {
                    style: "display: flex; justify-content: space-between; align-items: center; font-size: 14px;",
                    "End Date"
                    input {
                        r#type: "date",
                        value: "{end}",
                        onchange: on_end_change,
                    }
                }
            }
            if let Some(err) = range_error {
                p {
                    style: "margin: 6px 0 0 0; color: #C62828; font-size: 13px;",
                    "{err}"
                }
            }
        }
    }
}
