//! Shared Dioxus components and widget bridge for the vegetation monitor.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the Leaflet map and Chart.js chart via `js_sys::eval()`
//! - `canvas`: the browser [`OverlayEncoder`](vmon_data::OverlayEncoder)
//! - `timer`: a `setTimeout`-backed sleep for the simulated latency
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (sidebar panels, map view, legend, etc.)

pub mod canvas;
pub mod components;
pub mod js_bridge;
pub mod state;
pub mod timer;
