//! Command implementations for the VMON CLI.
//!
//! `render` runs the same simulated fetch the web app runs and writes the
//! overlay PNG and time series CSV. `scenes` lists the source scenes a
//! catalog offers for an AOI. `legend` prints an index's color ramp.

use chrono::{Local, NaiveDate};
use clap::Subcommand;
use std::path::PathBuf;
use vmon_core::collection::DEFAULT_MAX_CLOUD_PERCENTAGE;
use vmon_core::date_range::{DateRange, DEFAULT_LOOKBACK_DAYS};
use vmon_core::index::IndexType;

pub mod render;
pub mod scenes;

#[derive(Subcommand)]
pub enum Command {
    /// Render an index overlay and time series for an area of interest
    Render {
        /// GeoJSON file with the AOI polygon (Feature, FeatureCollection or Polygon)
        #[arg(short, long)]
        aoi: PathBuf,

        /// Vegetation index: ndvi or savi
        #[arg(short, long, default_value = "ndvi")]
        index: IndexType,

        /// Start date (YYYY-MM-DD), default 90 days before the end date
        #[arg(long)]
        start: Option<NaiveDate>,

        /// End date (YYYY-MM-DD), default today
        #[arg(long)]
        end: Option<NaiveDate>,

        /// Directory the PNG and CSV are written to
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,

        /// Seed for reproducible simulated values
        #[arg(long)]
        seed: Option<u64>,
    },

    /// List catalog scenes usable for an AOI and date range
    Scenes {
        /// Scene catalog CSV (id,acquired,south,west,north,east,cloud_percentage)
        #[arg(short, long)]
        catalog: PathBuf,

        /// GeoJSON file with the AOI polygon
        #[arg(short, long)]
        aoi: PathBuf,

        #[arg(long)]
        start: Option<NaiveDate>,

        #[arg(long)]
        end: Option<NaiveDate>,

        /// Maximum cloud cover in percent
        #[arg(long, default_value_t = DEFAULT_MAX_CLOUD_PERCENTAGE)]
        max_cloud: f64,
    },

    /// Print the color legend and formula of an index
    Legend {
        #[arg(short, long, default_value = "ndvi")]
        index: IndexType,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            aoi,
            index,
            start,
            end,
            out_dir,
            seed,
        } => {
            let range = resolve_range(start, end)?;
            render::run_render(&aoi, index, range, &out_dir, seed).await?;
            Ok(())
        }
        Command::Scenes {
            catalog,
            aoi,
            start,
            end,
            max_cloud,
        } => {
            let range = resolve_range(start, end)?;
            scenes::run_scenes(&catalog, &aoi, range, max_cloud)
        }
        Command::Legend { index } => {
            print!("{}", render::legend_text(index));
            Ok(())
        }
    }
}

/// Fill in missing ends: the end defaults to today, the start to
/// [`DEFAULT_LOOKBACK_DAYS`] before the end.
pub fn resolve_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> anyhow::Result<DateRange> {
    let end = end.unwrap_or_else(|| Local::now().date_naive());
    let range = match start {
        Some(start) => DateRange::new(start, end)?,
        None => DateRange::trailing_days(end, DEFAULT_LOOKBACK_DAYS),
    };
    Ok(range)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn explicit_range_is_kept() {
        let range = resolve_range(Some(ymd(2024, 1, 1)), Some(ymd(2024, 1, 12))).unwrap();
        assert_eq!(range.start(), ymd(2024, 1, 1));
        assert_eq!(range.end(), ymd(2024, 1, 12));
    }

    #[test]
    fn missing_start_looks_back_ninety_days() {
        let range = resolve_range(None, Some(ymd(2024, 4, 1))).unwrap();
        assert_eq!(range.end(), ymd(2024, 4, 1));
        assert_eq!(range.span_days(), 90);
    }

    #[test]
    fn inverted_range_is_an_error() {
        let err = resolve_range(Some(ymd(2024, 2, 1)), Some(ymd(2024, 1, 1))).unwrap_err();
        assert!(err.to_string().contains("after end date"));
    }
}
