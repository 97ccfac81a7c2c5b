//! Core types for the vegetation index monitor.
//!
//! This crate provides:
//! - `geometry`: the user-drawn area of interest and overlay bounds
//! - `date_range`: validated date ranges and evenly spaced sampling
//! - `index`: NDVI/SAVI definitions and band math
//! - `collection`: the image collection filter contract for an imagery backend
//! - `palette` / `raster`: color ramps and the gradient overlay raster

pub mod collection;
pub mod date_range;
pub mod error;
pub mod geometry;
pub mod index;
pub mod palette;
pub mod raster;

pub use error::VmonError;
