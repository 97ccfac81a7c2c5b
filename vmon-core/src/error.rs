/// Error types for the vegetation monitor
use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for vegetation monitor operations
#[derive(Error, Debug)]
pub enum VmonError {
    /// The area of interest ring is too short to derive overlay corners
    #[error("Area of interest needs at least {needed} ring points (found: {found})")]
    RingTooShort { needed: usize, found: usize },

    /// GeoJSON parsed, but did not contain a polygon
    #[error("Unsupported geometry: {0}")]
    UnsupportedGeometry(String),

    /// Failed to parse GeoJSON text
    #[error("Failed to parse GeoJSON: {0}")]
    GeoJson(#[from] geojson::Error),

    /// Start date falls after end date
    #[error("Start date {start} is after end date {end}")]
    InvertedDateRange { start: NaiveDate, end: NaiveDate },

    /// Date parsing failed
    #[error("Failed to parse date: {0}")]
    DateParse(#[from] chrono::ParseError),

    /// Vegetation index name not recognized
    #[error("Unknown vegetation index: {0}")]
    UnknownIndex(String),

    /// Time series sequences disagree in length
    #[error("Time series length mismatch (dates: {dates}, ndvi: {ndvi}, savi: {savi})")]
    SeriesLengthMismatch { dates: usize, ndvi: usize, savi: usize },

    /// Overlay image could not be encoded
    #[error("Failed to encode overlay: {0}")]
    Encoding(String),

    /// PNG encoding failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Failed to read or write CSV data
    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
