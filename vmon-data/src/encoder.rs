use vmon_core::raster::Raster;
use vmon_core::VmonError;

/// Turns a rendered raster into an image URL the map widget can display.
///
/// The browser app encodes through a 2D canvas (and draws `label` onto
/// the image); the CLI writes a PNG file.
pub trait OverlayEncoder {
    fn encode(&self, raster: &Raster, label: &str) -> Result<String, VmonError>;
}
