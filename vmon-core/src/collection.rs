//! Image collection filtering contract.
//!
//! A real backend would select source scenes from a satellite collection
//! (Sentinel-2 surface reflectance) by date, AOI and cloud cover before
//! computing an index. [`ImageCollection`] is that contract. The only
//! implementation here, [`SceneCatalog`], filters scene metadata held in
//! memory; it never reads pixel data.
//!
//! # CSV Format
//!
//! Scene catalogs (has headers): `id,acquired,south,west,north,east,cloud_percentage`

use crate::date_range::DateRange;
use crate::geometry::Bounds;
use crate::VmonError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel-2 surface reflectance collection identifier.
pub const SENTINEL2_COLLECTION: &str = "COPERNICUS/S2_SR";
/// Scenes cloudier than this are dropped unless the filter says otherwise.
pub const DEFAULT_MAX_CLOUD_PERCENTAGE: f64 = 20.0;

/// Metadata for one acquired scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneMetadata {
    pub id: String,
    pub acquired: NaiveDate,
    pub footprint: Bounds,
    pub cloud_percentage: f64,
}

/// Date, bounds and cloud cover constraints for a collection query.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionFilter {
    pub range: DateRange,
    pub bounds: Bounds,
    pub max_cloud_percentage: f64,
}

impl CollectionFilter {
    pub fn new(range: DateRange, bounds: Bounds) -> Self {
        Self {
            range,
            bounds,
            max_cloud_percentage: DEFAULT_MAX_CLOUD_PERCENTAGE,
        }
    }

    pub fn with_max_cloud_percentage(mut self, max_cloud_percentage: f64) -> Self {
        self.max_cloud_percentage = max_cloud_percentage;
        self
    }

    pub fn accepts(&self, scene: &SceneMetadata) -> bool {
        self.range.contains(scene.acquired)
            && self.bounds.intersects(&scene.footprint)
            && scene.cloud_percentage <= self.max_cloud_percentage
    }
}

/// A source image collection that can be narrowed by a [`CollectionFilter`].
pub trait ImageCollection {
    fn collection_id(&self) -> &str;

    /// Scenes passing `filter`, oldest first.
    fn filter(&self, filter: &CollectionFilter) -> Vec<SceneMetadata>;
}

#[derive(Debug, Deserialize)]
struct SceneRecord {
    id: String,
    acquired: String,
    south: f64,
    west: f64,
    north: f64,
    east: f64,
    cloud_percentage: f64,
}

/// In-memory scene metadata catalog.
#[derive(Debug, Clone, Default)]
pub struct SceneCatalog {
    id: String,
    scenes: Vec<SceneMetadata>,
}

impl SceneCatalog {
    pub fn new(id: impl Into<String>, scenes: Vec<SceneMetadata>) -> Self {
        Self {
            id: id.into(),
            scenes,
        }
    }

    /// Load a catalog from CSV.
    ///
    /// # Example CSV
    /// ```text
    /// id,acquired,south,west,north,east,cloud_percentage
    /// S2A_20240105,2024-01-05,9.5,9.5,21.0,21.0,12.5
    /// ```
    pub fn from_csv(id: impl Into<String>, csv_data: &str) -> Result<Self, VmonError> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(csv_data.as_bytes());

        let mut scenes = Vec::new();
        for result in rdr.deserialize::<SceneRecord>() {
            let record = result?;
            scenes.push(SceneMetadata {
                acquired: crate::date_range::parse_date(&record.acquired)?,
                footprint: Bounds([record.south, record.west], [record.north, record.east]),
                cloud_percentage: record.cloud_percentage,
                id: record.id,
            });
        }
        let catalog = Self::new(id, scenes);
        log::info!(
            "catalog: loaded {} scenes into {}",
            catalog.scenes.len(),
            catalog.id
        );
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}

impl ImageCollection for SceneCatalog {
    fn collection_id(&self) -> &str {
        &self.id
    }

    fn filter(&self, filter: &CollectionFilter) -> Vec<SceneMetadata> {
        let mut matched: Vec<SceneMetadata> = self
            .scenes
            .iter()
            .filter(|scene| filter.accepts(scene))
            .cloned()
            .collect();
        matched.sort_by_key(|scene| scene.acquired);
        matched
    }
}
