//! The visualization data provider.
//!
//! [`VisualizationStore`] owns the current area of interest and the
//! published [`FetchState`]. It is constructed explicitly by the app and
//! handed to the components that need it.
//!
//! # Architecture
//!
//! - `Rc<RefCell<..>>` wrapper for interior mutability in single-threaded WASM
//! - Every fetch takes a new generation number; a fetch only publishes if
//!   its generation is still the latest when its delay resolves, so a slow
//!   earlier request can never overwrite a newer one
//! - State changes are published as whole values and pushed to every
//!   subscribed listener after the internal borrow is released

use crate::encoder::OverlayEncoder;
use crate::result::{FetchOutcome, FetchState, IndexResult, OverlayImage};
use crate::series::TimeSeries;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;
use vmon_core::collection::{CollectionFilter, SENTINEL2_COLLECTION};
use vmon_core::date_range::DateRange;
use vmon_core::geometry::Geometry;
use vmon_core::index::IndexType;
use vmon_core::palette::Palette;
use vmon_core::raster::{Raster, OVERLAY_HEIGHT, OVERLAY_WIDTH};
use vmon_core::VmonError;

/// Latency the app waits before producing a simulated result.
pub const SIMULATED_LATENCY: Duration = Duration::from_millis(500);

/// Handle returned by [`VisualizationStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn(&FetchState)>;

struct Inner {
    aoi: Option<Geometry>,
    state: FetchState,
    generation: u64,
    rng: StdRng,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

/// Area of interest plus the latest published index result.
///
/// This struct is cheaply cloneable (via `Rc`); clones share state.
#[derive(Clone)]
pub struct VisualizationStore {
    inner: Rc<RefCell<Inner>>,
    encoder: Rc<dyn OverlayEncoder>,
}

impl PartialEq for VisualizationStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl VisualizationStore {
    /// Create an empty store whose random source is seeded from the OS.
    pub fn new(encoder: impl OverlayEncoder + 'static) -> Self {
        Self::with_rng(encoder, StdRng::from_entropy())
    }

    /// Create an empty store with a reproducible random source.
    pub fn with_seed(encoder: impl OverlayEncoder + 'static, seed: u64) -> Self {
        Self::with_rng(encoder, StdRng::seed_from_u64(seed))
    }

    fn with_rng(encoder: impl OverlayEncoder + 'static, rng: StdRng) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                aoi: None,
                state: FetchState::Idle,
                generation: 0,
                rng,
                listeners: Vec::new(),
                next_subscription: 0,
            })),
            encoder: Rc::new(encoder),
        }
    }

    /// Replace the area of interest. No validation happens here; a ring
    /// too short for overlay bounds fails at fetch time.
    ///
    /// A fetch still in flight for the previous AOI is superseded. If one
    /// was loading, the state returns to [`FetchState::Idle`]; a published
    /// result stays until the next fetch replaces it.
    pub fn set_area_of_interest(&self, aoi: Geometry) {
        log::info!("store: area of interest set ({} ring points)", aoi.ring().len());
        let was_loading = {
            let mut inner = self.inner.borrow_mut();
            inner.aoi = Some(aoi);
            inner.generation += 1;
            inner.state.is_loading()
        };
        if was_loading {
            self.publish(FetchState::Idle);
        }
    }

    /// Drop the area of interest, supersede any in-flight fetch and return
    /// to [`FetchState::Idle`].
    pub fn clear_area_of_interest(&self) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.aoi = None;
            inner.generation += 1;
        }
        log::info!("store: area of interest cleared");
        self.publish(FetchState::Idle);
    }

    pub fn area_of_interest(&self) -> Option<Geometry> {
        self.inner.borrow().aoi.clone()
    }

    pub fn has_area_of_interest(&self) -> bool {
        self.inner.borrow().aoi.is_some()
    }

    /// The currently published state.
    pub fn state(&self) -> FetchState {
        self.inner.borrow().state.clone()
    }

    /// Register `listener` for every published state change.
    pub fn subscribe(&self, listener: impl Fn(&FetchState) + 'static) -> SubscriptionId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriptionId(inner.next_subscription);
        inner.next_subscription += 1;
        inner.listeners.push((id, Rc::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.listeners.len();
        inner.listeners.retain(|(existing, _)| *existing != id);
        inner.listeners.len() != before
    }

    /// Fetch (simulate) `index` over `range` for the current AOI.
    ///
    /// Without an AOI this is a no-op returning [`FetchOutcome::Skipped`].
    /// Otherwise `Loading` is published immediately, `delay` is awaited,
    /// and the result is published unless a newer fetch (or an AOI clear)
    /// happened in the meantime.
    pub async fn fetch_index_data<D>(
        &self,
        index: IndexType,
        range: DateRange,
        delay: D,
    ) -> FetchOutcome
    where
        D: Future<Output = ()>,
    {
        let (generation, aoi) = {
            let mut inner = self.inner.borrow_mut();
            let Some(aoi) = inner.aoi.clone() else {
                log::debug!("store: fetch {} skipped, no area of interest", index);
                return FetchOutcome::Skipped;
            };
            inner.generation += 1;
            (inner.generation, aoi)
        };

        log::info!(
            "store: fetching {} data for the selected area ({} to {}), request #{}",
            index,
            range.start(),
            range.end(),
            generation
        );
        self.publish(FetchState::Loading { index, range });

        delay.await;

        if self.inner.borrow().generation != generation {
            log::info!("store: request #{} superseded, dropping result", generation);
            return FetchOutcome::Superseded;
        }

        let state = match self.compute(&aoi, index, range) {
            Ok(result) => FetchState::Ready(Rc::new(result)),
            Err(e) => {
                log::error!("store: error fetching vegetation index data: {}", e);
                FetchState::Failed {
                    reason: e.to_string(),
                }
            }
        };
        self.publish(state.clone());
        FetchOutcome::Published(state)
    }

    fn compute(
        &self,
        aoi: &Geometry,
        index: IndexType,
        range: DateRange,
    ) -> Result<IndexResult, VmonError> {
        let bounds = aoi.overlay_bounds()?;

        let filter = CollectionFilter::new(range, bounds);
        log::debug!(
            "store: {} filter bounds {:?}, range {:?}, max cloud {}%",
            SENTINEL2_COLLECTION,
            filter.bounds,
            filter.range,
            filter.max_cloud_percentage
        );

        let time_series = {
            let mut inner = self.inner.borrow_mut();
            TimeSeries::simulate(&range, &mut inner.rng)
        };

        let raster =
            Raster::diagonal_gradient(Palette::for_index(index), OVERLAY_WIDTH, OVERLAY_HEIGHT);
        let label = format!("{} Visualization", index.display_name());
        let url = self.encoder.encode(&raster, &label)?;

        Ok(IndexResult {
            index,
            range,
            overlay: OverlayImage { url, label, index },
            bounds,
            time_series,
        })
    }

    fn publish(&self, state: FetchState) {
        let listeners: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            inner.state = state.clone();
            inner.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };
        for listener in listeners {
            listener(&state);
        }
    }
}
