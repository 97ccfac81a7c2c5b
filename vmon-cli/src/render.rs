//! Headless render: one simulated fetch, written to disk.

use anyhow::Context;
use log::info;
use std::fmt::Write as _;
use std::path::{Path, PathBuf};
use vmon_core::date_range::DateRange;
use vmon_core::geometry::Geometry;
use vmon_core::index::IndexType;
use vmon_core::palette::legend;
use vmon_core::raster::Raster;
use vmon_core::VmonError;
use vmon_data::store::SIMULATED_LATENCY;
use vmon_data::view::export_filename;
use vmon_data::{FetchOutcome, FetchState, OverlayEncoder, VisualizationStore};

/// Writes the overlay to a fixed PNG path and hands back that path as the
/// overlay URL. The label is not burned into the file.
pub struct PngFileEncoder {
    path: PathBuf,
}

impl PngFileEncoder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl OverlayEncoder for PngFileEncoder {
    fn encode(&self, raster: &Raster, label: &str) -> Result<String, VmonError> {
        std::fs::write(&self.path, raster.to_png()?)?;
        info!("Wrote {} ({}x{}) to {}", label, raster.width(), raster.height(), self.path.display());
        Ok(self.path.display().to_string())
    }
}

/// Files produced by [`run_render`].
#[derive(Debug)]
pub struct RenderOutput {
    pub png: PathBuf,
    pub csv: PathBuf,
}

/// Load the AOI from `aoi_path`, fetch `index` over `range` and write
/// `{index}_{start}_{end}.png` plus the matching `.csv` into `out_dir`.
pub async fn run_render(
    aoi_path: &Path,
    index: IndexType,
    range: DateRange,
    out_dir: &Path,
    seed: Option<u64>,
) -> anyhow::Result<RenderOutput> {
    let text = std::fs::read_to_string(aoi_path)
        .with_context(|| format!("Failed to read AOI file {}", aoi_path.display()))?;
    let aoi = Geometry::parse_geojson(&text)?;

    std::fs::create_dir_all(out_dir)?;
    let png = out_dir.join(export_filename(index, &range));
    let csv = png.with_extension("csv");

    let encoder = PngFileEncoder::new(&png);
    let store = match seed {
        Some(seed) => VisualizationStore::with_seed(encoder, seed),
        None => VisualizationStore::new(encoder),
    };
    store.set_area_of_interest(aoi);

    let outcome = store
        .fetch_index_data(index, range, tokio::time::sleep(SIMULATED_LATENCY))
        .await;
    let result = match outcome {
        FetchOutcome::Published(FetchState::Ready(result)) => result,
        FetchOutcome::Published(FetchState::Failed { reason }) => anyhow::bail!(reason),
        other => anyhow::bail!("Fetch did not produce a result: {:?}", other),
    };

    std::fs::write(&csv, result.time_series.to_csv()?)?;
    info!(
        "{} over {} to {}: overlay bounds {:?}, {} samples",
        index,
        range.start(),
        range.end(),
        result.bounds,
        result.time_series.len()
    );
    println!("{}", png.display());
    println!("{}", csv.display());

    Ok(RenderOutput { png, csv })
}

/// Legend swatches and formula of `index`, one swatch per line.
pub fn legend_text(index: IndexType) -> String {
    let mut out = format!("{} Legend\n", index.display_name());
    for entry in legend(index) {
        let _ = writeln!(out, "  {}  {}", entry.color, entry.label);
    }
    let _ = writeln!(out, "{}", index.formula());
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECTANGLE: &str = r#"{
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "Polygon",
            "coordinates": [[[10.0, 10.0], [10.0, 20.0], [20.0, 20.0], [20.0, 10.0], [10.0, 10.0]]]
        }
    }"#;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("vmon-cli-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[tokio::test]
    async fn render_writes_png_and_csv() {
        let dir = scratch_dir("render");
        let aoi = dir.join("aoi.geojson");
        std::fs::write(&aoi, RECTANGLE).unwrap();
        let range = DateRange::parse("2024-01-01", "2024-01-12").unwrap();

        let output = run_render(&aoi, IndexType::Savi, range, &dir, Some(42))
            .await
            .unwrap();

        assert_eq!(output.png, dir.join("savi_2024-01-01_2024-01-12.png"));
        assert_eq!(output.csv, dir.join("savi_2024-01-01_2024-01-12.csv"));

        let png = std::fs::read(&output.png).unwrap();
        assert_eq!(&png[1..4], b"PNG");

        let csv = std::fs::read_to_string(&output.csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "date,ndvi,savi");
        assert_eq!(lines.len(), 13);
        assert!(lines[1].starts_with("2024-01-01,"));
        assert!(lines[12].starts_with("2024-01-12,"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn short_ring_fails_without_output() {
        let dir = scratch_dir("short-ring");
        let aoi = dir.join("line.geojson");
        std::fs::write(
            &aoi,
            r#"{"type": "Polygon", "coordinates": [[[10.0, 10.0], [20.0, 20.0]]]}"#,
        )
        .unwrap();
        let range = DateRange::parse("2024-01-01", "2024-01-12").unwrap();

        let err = run_render(&aoi, IndexType::Ndvi, range, &dir, Some(1))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("at least 3 ring points"));
        assert!(!dir.join("ndvi_2024-01-01_2024-01-12.png").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn missing_aoi_file_is_reported() {
        let dir = scratch_dir("missing");
        let range = DateRange::parse("2024-01-01", "2024-01-12").unwrap();
        let err = run_render(&dir.join("nope.geojson"), IndexType::Ndvi, range, &dir, None)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read AOI file"));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn legend_lists_six_swatches() {
        let text = legend_text(IndexType::Ndvi);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "NDVI Legend");
        assert_eq!(lines.len(), 8);
        assert!(lines[1].contains("#d73027"));
        assert!(lines[1].ends_with("-1.0"));
        assert!(lines[6].ends_with("1.0"));
        assert_eq!(lines[7], "NDVI = (NIR - RED) / (NIR + RED)");
    }
}
