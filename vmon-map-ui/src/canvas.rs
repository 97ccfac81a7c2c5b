//! Overlay encoding through an offscreen 2D canvas.

use vmon_core::raster::Raster;
use vmon_core::VmonError;
use vmon_data::OverlayEncoder;
use wasm_bindgen::{Clamped, JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

/// Paints the raster onto a detached canvas, writes the label across the
/// top and returns the canvas as a PNG data URL.
#[derive(Debug, Clone, Copy, Default)]
pub struct CanvasEncoder;

impl CanvasEncoder {
    fn paint(raster: &Raster, label: &str) -> Result<String, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document.create_element("canvas")?.dyn_into()?;
        canvas.set_width(raster.width());
        canvas.set_height(raster.height());

        let context: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let image = ImageData::new_with_u8_clamped_array_and_sh(
            Clamped(raster.as_rgba()),
            raster.width(),
            raster.height(),
        )?;
        context.put_image_data(&image, 0.0, 0.0)?;

        context.set_fill_style_str("white");
        context.set_font("bold 24px Arial");
        context.set_text_align("center");
        context.fill_text(label, f64::from(raster.width()) / 2.0, 30.0)?;

        canvas.to_data_url_with_type("image/png")
    }
}

impl OverlayEncoder for CanvasEncoder {
    fn encode(&self, raster: &Raster, label: &str) -> Result<String, VmonError> {
        Self::paint(raster, label).map_err(|e| VmonError::Encoding(format!("{:?}", e)))
    }
}
