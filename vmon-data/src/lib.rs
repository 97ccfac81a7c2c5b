//! Visualization data provider for the vegetation index monitor.
//!
//! This crate provides:
//! - `store`: [`VisualizationStore`], the injected provider holding the AOI
//!   and the published fetch state
//! - `series`: time series simulation and CSV export
//! - `result`: the fetch state machine and index result payload
//! - `encoder`: the seam for turning a raster into an overlay image URL
//! - `view`: view models for panels, overlay, chart and export

pub mod encoder;
pub mod result;
pub mod series;
pub mod store;
pub mod view;

pub use encoder::OverlayEncoder;
pub use result::{FetchOutcome, FetchState, IndexResult, OverlayImage};
pub use series::TimeSeries;
pub use store::{SubscriptionId, VisualizationStore};
