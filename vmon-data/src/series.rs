//! Vegetation index time series.

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;
use vmon_core::date_range::{format_date, DateRange};
use vmon_core::index::IndexType;
use vmon_core::VmonError;

/// Number of samples a simulated series carries.
pub const SAMPLE_COUNT: usize = 12;

/// Sample dates with one NDVI and one SAVI value per date.
///
/// All three sequences always have the same length.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    dates: Vec<NaiveDate>,
    ndvi: Vec<f64>,
    savi: Vec<f64>,
}

impl TimeSeries {
    pub fn new(dates: Vec<NaiveDate>, ndvi: Vec<f64>, savi: Vec<f64>) -> Result<Self, VmonError> {
        if dates.len() != ndvi.len() || dates.len() != savi.len() {
            return Err(VmonError::SeriesLengthMismatch {
                dates: dates.len(),
                ndvi: ndvi.len(),
                savi: savi.len(),
            });
        }
        Ok(Self { dates, ndvi, savi })
    }

    /// Simulate [`SAMPLE_COUNT`] samples across `range`.
    ///
    /// Values are drawn independently from each index's simulated range;
    /// there is no temporal correlation between neighbouring samples.
    pub fn simulate<R: Rng + ?Sized>(range: &DateRange, rng: &mut R) -> Self {
        let dates = range.sample_dates(SAMPLE_COUNT);
        let mut draw = |index: IndexType| -> Vec<f64> {
            let bounds = index.simulated_range();
            dates.iter().map(|_| rng.gen_range(bounds.clone())).collect()
        };
        let ndvi = draw(IndexType::Ndvi);
        let savi = draw(IndexType::Savi);
        Self { dates, ndvi, savi }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self, index: IndexType) -> &[f64] {
        match index {
            IndexType::Ndvi => &self.ndvi,
            IndexType::Savi => &self.savi,
        }
    }

    /// Dates formatted "YYYY-MM-DD", for chart labels.
    pub fn labels(&self) -> Vec<String> {
        self.dates.iter().map(format_date).collect()
    }

    /// Export as CSV with headers `date,ndvi,savi`.
    pub fn to_csv(&self) -> Result<String, VmonError> {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        wtr.write_record(["date", "ndvi", "savi"])?;
        for ((date, ndvi), savi) in self.dates.iter().zip(&self.ndvi).zip(&self.savi) {
            wtr.write_record([format_date(date), format!("{:.4}", ndvi), format!("{:.4}", savi)])?;
        }
        let bytes = wtr
            .into_inner()
            .map_err(|e| VmonError::Encoding(e.to_string()))?;
        String::from_utf8(bytes).map_err(|e| VmonError::Encoding(e.to_string()))
    }
}
