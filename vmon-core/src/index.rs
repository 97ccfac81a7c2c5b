//! Vegetation index definitions and band math.
//!
//! The formulas here describe what an imagery backend computes per pixel.
//! Nothing in this workspace runs them over real imagery; the provider
//! simulates their output instead.

use crate::VmonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Sentinel-2 near-infrared band.
pub const NIR_BAND: &str = "B8";
/// Sentinel-2 red band.
pub const RED_BAND: &str = "B4";
/// Soil brightness correction factor `L` used by SAVI.
pub const DEFAULT_SOIL_FACTOR: f64 = 0.5;

/// The vegetation indices the monitor can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexType {
    #[default]
    Ndvi,
    Savi,
}

impl IndexType {
    pub const ALL: [IndexType; 2] = [IndexType::Ndvi, IndexType::Savi];

    /// Lowercase identifier, used in file names and form values.
    pub fn as_str(&self) -> &'static str {
        match self {
            IndexType::Ndvi => "ndvi",
            IndexType::Savi => "savi",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IndexType::Ndvi => "NDVI",
            IndexType::Savi => "SAVI",
        }
    }

    pub fn long_name(&self) -> &'static str {
        match self {
            IndexType::Ndvi => "Normalized Difference Vegetation Index",
            IndexType::Savi => "Soil-Adjusted Vegetation Index",
        }
    }

    pub fn formula(&self) -> &'static str {
        match self {
            IndexType::Ndvi => "NDVI = (NIR - RED) / (NIR + RED)",
            IndexType::Savi => "SAVI = (NIR - RED) / (NIR + RED + L) × (1 + L)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            IndexType::Ndvi => {
                "Normalized Difference Vegetation Index measures vegetation health using the \
                 difference between near-infrared (NIR) and red light reflection."
            }
            IndexType::Savi => {
                "Soil-Adjusted Vegetation Index minimizes soil brightness influences in areas \
                 with low vegetation cover."
            }
        }
    }

    /// Range that simulated samples of this index are drawn from.
    pub fn simulated_range(&self) -> Range<f64> {
        match self {
            IndexType::Ndvi => 0.2..0.8,
            IndexType::Savi => 0.15..0.65,
        }
    }
}

impl fmt::Display for IndexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for IndexType {
    type Err = VmonError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ndvi" => Ok(IndexType::Ndvi),
            "savi" => Ok(IndexType::Savi),
            other => Err(VmonError::UnknownIndex(other.to_string())),
        }
    }
}

/// NDVI = (NIR - RED) / (NIR + RED). `None` when the denominator is zero.
pub fn ndvi(nir: f64, red: f64) -> Option<f64> {
    let denominator = nir + red;
    if denominator == 0.0 {
        return None;
    }
    Some((nir - red) / denominator)
}

/// SAVI = (NIR - RED) / (NIR + RED + L) * (1 + L). `None` when the
/// denominator is zero.
pub fn savi(nir: f64, red: f64, soil_factor: f64) -> Option<f64> {
    let denominator = nir + red + soil_factor;
    if denominator == 0.0 {
        return None;
    }
    Some((nir - red) / denominator * (1.0 + soil_factor))
}

/// Surface reflectance of one pixel in the two bands the indices use.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandReflectance {
    pub nir: f64,
    pub red: f64,
}

impl BandReflectance {
    /// Evaluate `index` for this pixel, using [`DEFAULT_SOIL_FACTOR`] for SAVI.
    pub fn index(&self, index: IndexType) -> Option<f64> {
        match index {
            IndexType::Ndvi => ndvi(self.nir, self.red),
            IndexType::Savi => savi(self.nir, self.red, DEFAULT_SOIL_FACTOR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn ndvi_formula() {
        assert!(close(ndvi(0.5, 0.1).unwrap(), 0.4 / 0.6));
        assert!(close(ndvi(0.1, 0.5).unwrap(), -0.4 / 0.6));
        assert_eq!(ndvi(0.0, 0.0), None);
    }

    #[test]
    fn savi_formula() {
        let value = savi(0.5, 0.1, DEFAULT_SOIL_FACTOR).unwrap();
        assert!(close(value, 0.4 / 1.1 * 1.5));
        // L = 0 reduces SAVI to NDVI
        assert!(close(savi(0.5, 0.1, 0.0).unwrap(), ndvi(0.5, 0.1).unwrap()));
        assert_eq!(savi(0.25, 0.25, -0.5), None);
    }

    #[test]
    fn band_reflectance_dispatch() {
        let pixel = BandReflectance { nir: 0.6, red: 0.2 };
        assert!(close(pixel.index(IndexType::Ndvi).unwrap(), 0.5));
        assert!(close(pixel.index(IndexType::Savi).unwrap(), 0.4 / 1.3 * 1.5));
    }

    #[test]
    fn parse_and_display() {
        assert_eq!("ndvi".parse::<IndexType>().unwrap(), IndexType::Ndvi);
        assert_eq!(" SAVI ".parse::<IndexType>().unwrap(), IndexType::Savi);
        assert!(matches!(
            "evi".parse::<IndexType>(),
            Err(VmonError::UnknownIndex(name)) if name == "evi"
        ));
        assert_eq!(IndexType::Savi.to_string(), "SAVI");
        assert_eq!(IndexType::default(), IndexType::Ndvi);
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&IndexType::Ndvi).unwrap(), "\"ndvi\"");
        let parsed: IndexType = serde_json::from_str("\"savi\"").unwrap();
        assert_eq!(parsed, IndexType::Savi);
    }
}
