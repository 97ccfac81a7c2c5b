//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the view layer's reactive signals into a single struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. The provider itself
//! ([`VisualizationStore`](vmon_data::VisualizationStore)) is not in here;
//! the app owns it and passes it to the components that write to it.

use chrono::Local;
use dioxus::prelude::*;
use vmon_core::date_range::{format_date, DateRange, DEFAULT_LOOKBACK_DAYS};
use vmon_core::index::IndexType;
use vmon_core::VmonError;
use vmon_data::view::Panel;
use vmon_data::FetchState;

/// Shared view state for the vegetation monitor.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Index shown on the map
    pub selected_index: Signal<IndexType>,
    /// Start date as "YYYY-MM-DD" (HTML date input format)
    pub start_date: Signal<String>,
    /// End date as "YYYY-MM-DD"
    pub end_date: Signal<String>,
    /// Sidebar tab
    pub active_panel: Signal<Panel>,
    /// Mirror of the provider's published state
    pub fetch_state: Signal<FetchState>,
    /// Whether an AOI is currently drawn
    pub has_aoi: Signal<bool>,
    /// Bumped on every completed drawing, so redrawing the same shape refetches
    pub aoi_revision: Signal<u64>,
}

impl AppState {
    /// Create a new AppState covering the last [`DEFAULT_LOOKBACK_DAYS`] days.
    pub fn new() -> Self {
        let today = Local::now().date_naive();
        let range = DateRange::trailing_days(today, DEFAULT_LOOKBACK_DAYS);
        Self {
            selected_index: Signal::new(IndexType::default()),
            start_date: Signal::new(format_date(&range.start())),
            end_date: Signal::new(format_date(&range.end())),
            active_panel: Signal::new(Panel::default()),
            fetch_state: Signal::new(FetchState::Idle),
            has_aoi: Signal::new(false),
            aoi_revision: Signal::new(0),
        }
    }

    /// The picked date range, or why it is invalid.
    pub fn date_range(&self) -> Result<DateRange, VmonError> {
        DateRange::parse(&(self.start_date)(), &(self.end_date)())
    }
}
