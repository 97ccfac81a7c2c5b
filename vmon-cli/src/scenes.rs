//! Source scene listing against a catalog CSV.

use anyhow::Context;
use log::info;
use std::path::Path;
use vmon_core::collection::{
    CollectionFilter, ImageCollection, SceneCatalog, SceneMetadata, SENTINEL2_COLLECTION,
};
use vmon_core::date_range::DateRange;
use vmon_core::geometry::Geometry;

/// Print every catalog scene acquired in `range` whose footprint touches
/// the AOI envelope and whose cloud cover is at most `max_cloud` percent.
pub fn run_scenes(
    catalog_path: &Path,
    aoi_path: &Path,
    range: DateRange,
    max_cloud: f64,
) -> anyhow::Result<()> {
    let catalog_csv = std::fs::read_to_string(catalog_path)
        .with_context(|| format!("Failed to read catalog {}", catalog_path.display()))?;
    let aoi_text = std::fs::read_to_string(aoi_path)
        .with_context(|| format!("Failed to read AOI file {}", aoi_path.display()))?;

    let catalog = SceneCatalog::from_csv(SENTINEL2_COLLECTION, &catalog_csv)?;
    let aoi = Geometry::parse_geojson(&aoi_text)?;
    let scenes = select_scenes(&catalog, &aoi, range, max_cloud)?;

    info!(
        "{} of {} scenes in {} match",
        scenes.len(),
        catalog.len(),
        catalog.collection_id()
    );
    println!("id,acquired,cloud_percentage");
    for scene in &scenes {
        println!("{},{},{}", scene.id, scene.acquired, scene.cloud_percentage);
    }
    Ok(())
}

pub fn select_scenes(
    collection: &impl ImageCollection,
    aoi: &Geometry,
    range: DateRange,
    max_cloud: f64,
) -> anyhow::Result<Vec<SceneMetadata>> {
    let bounds = aoi
        .envelope()
        .context("Area of interest has no points")?;
    let filter = CollectionFilter::new(range, bounds).with_max_cloud_percentage(max_cloud);
    Ok(collection.filter(&filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = "\
id,acquired,south,west,north,east,cloud_percentage
S2A_20240105,2024-01-05,9.5,9.5,21.0,21.0,12.5
S2B_20240108,2024-01-08,9.5,9.5,21.0,21.0,48.0
S2A_20240215,2024-02-15,9.5,9.5,21.0,21.0,3.0
S2B_20240110,2024-01-10,40.0,40.0,45.0,45.0,1.0
";

    fn field() -> Geometry {
        Geometry::from_coordinates(&[[10.0, 10.0], [10.0, 20.0], [20.0, 20.0], [20.0, 10.0]])
    }

    #[test]
    fn filters_by_date_footprint_and_cloud() {
        let catalog = SceneCatalog::from_csv(SENTINEL2_COLLECTION, CATALOG).unwrap();
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();

        let ids: Vec<String> = select_scenes(&catalog, &field(), range, 20.0)
            .unwrap()
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ids, vec!["S2A_20240105"]);

        let relaxed = select_scenes(&catalog, &field(), range, 50.0).unwrap();
        assert_eq!(relaxed.len(), 2);
    }

    #[test]
    fn empty_aoi_is_an_error() {
        let catalog = SceneCatalog::from_csv(SENTINEL2_COLLECTION, CATALOG).unwrap();
        let range = DateRange::parse("2024-01-01", "2024-01-31").unwrap();
        let empty = Geometry::from_ring(Vec::new());
        assert!(select_scenes(&catalog, &empty, range, 20.0).is_err());
    }
}
