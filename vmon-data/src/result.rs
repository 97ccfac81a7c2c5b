//! Fetch state machine and the index result payload.

use crate::series::TimeSeries;
use serde::Serialize;
use std::rc::Rc;
use vmon_core::date_range::DateRange;
use vmon_core::geometry::Bounds;
use vmon_core::index::IndexType;
use vmon_core::palette::Palette;

/// Encoded overlay image plus what it was rendered for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverlayImage {
    /// Image URL the map widget can load (a PNG data URL in the browser).
    pub url: String,
    pub label: String,
    pub index: IndexType,
}

impl OverlayImage {
    pub fn palette(&self) -> &'static Palette {
        Palette::for_index(self.index)
    }
}

/// Everything one fetch produces, published as a single value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexResult {
    pub index: IndexType,
    pub range: DateRange,
    pub overlay: OverlayImage,
    pub bounds: Bounds,
    pub time_series: TimeSeries,
}

/// The provider's published state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    /// No fetch has run since the AOI was set or cleared.
    #[default]
    Idle,
    Loading {
        index: IndexType,
        range: DateRange,
    },
    Ready(Rc<IndexResult>),
    Failed {
        reason: String,
    },
}

impl FetchState {
    pub fn result(&self) -> Option<&IndexResult> {
        match self {
            FetchState::Ready(result) => Some(result.as_ref()),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading { .. })
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            FetchState::Failed { reason } => Some(reason.as_str()),
            _ => None,
        }
    }
}

/// What became of a single `fetch_index_data` call.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchOutcome {
    /// No AOI was set; nothing changed.
    Skipped,
    /// A newer fetch started before this one finished; nothing was published.
    Superseded,
    /// This fetch's state (`Ready` or `Failed`) was published.
    Published(FetchState),
}
