//! Color ramps for the overlay and legend.

use crate::index::IndexType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
        let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
        Rgb::new(mix(a.r, b.r), mix(a.g, b.g), mix(a.b, b.b))
    }
}

/// A color pinned at `offset` in `[0, 1]` along a gradient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    pub offset: f64,
    pub color: Rgb,
}

const fn stop(offset: f64, r: u8, g: u8, b: u8) -> ColorStop {
    ColorStop {
        offset,
        color: Rgb::new(r, g, b),
    }
}

/// A six-stop color ramp.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub stops: [ColorStop; 6],
}

/// Red to green.
pub const NDVI_PALETTE: Palette = Palette {
    name: "red-yellow-green",
    stops: [
        stop(0.0, 0xd7, 0x30, 0x27),
        stop(0.2, 0xf4, 0x6d, 0x43),
        stop(0.4, 0xfd, 0xae, 0x61),
        stop(0.6, 0xa6, 0xd9, 0x6a),
        stop(0.8, 0x66, 0xbd, 0x63),
        stop(1.0, 0x1a, 0x98, 0x50),
    ],
};

/// Brown to teal.
pub const SAVI_PALETTE: Palette = Palette {
    name: "brown-teal",
    stops: [
        stop(0.0, 0x8c, 0x51, 0x0a),
        stop(0.2, 0xbf, 0x81, 0x2d),
        stop(0.4, 0xdf, 0xc2, 0x7d),
        stop(0.6, 0x80, 0xcd, 0xc1),
        stop(0.8, 0x35, 0x97, 0x8f),
        stop(1.0, 0x01, 0x66, 0x5e),
    ],
};

/// Index values printed under the legend swatches.
pub const LEGEND_LABELS: [&str; 6] = ["-1.0", "-0.5", "0.0", "0.3", "0.6", "1.0"];

impl Palette {
    pub fn for_index(index: IndexType) -> &'static Palette {
        match index {
            IndexType::Ndvi => &NDVI_PALETTE,
            IndexType::Savi => &SAVI_PALETTE,
        }
    }

    /// Color at `t`, interpolated between neighbouring stops. `t` is
    /// clamped to `[0, 1]`.
    pub fn color_at(&self, t: f64) -> Rgb {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.offset {
                let width = hi.offset - lo.offset;
                let local = if width > 0.0 { (t - lo.offset) / width } else { 0.0 };
                return Rgb::lerp(lo.color, hi.color, local);
            }
        }
        self.stops[self.stops.len() - 1].color
    }
}

/// One legend swatch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub color: String,
    pub label: &'static str,
}

/// Legend swatches for `index`, one per palette stop.
pub fn legend(index: IndexType) -> Vec<LegendEntry> {
    Palette::for_index(index)
        .stops
        .iter()
        .zip(LEGEND_LABELS)
        .map(|(stop, label)| LegendEntry {
            color: stop.color.to_hex(),
            label,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_lowercase_with_hash() {
        assert_eq!(Rgb::new(0x1a, 0x98, 0x50).to_hex(), "#1a9850");
        assert_eq!(Rgb::new(0, 0, 0).to_hex(), "#000000");
    }

    #[test]
    fn color_at_hits_stops_exactly() {
        for stop in NDVI_PALETTE.stops {
            assert_eq!(NDVI_PALETTE.color_at(stop.offset), stop.color);
        }
        assert_eq!(SAVI_PALETTE.color_at(-3.0), Rgb::new(0x8c, 0x51, 0x0a));
        assert_eq!(SAVI_PALETTE.color_at(7.0), Rgb::new(0x01, 0x66, 0x5e));
    }

    #[test]
    fn color_at_interpolates_between_stops() {
        // halfway between #a6d96a and #66bd63
        let mid = NDVI_PALETTE.color_at(0.7);
        assert_eq!(mid, Rgb::new(0x86, 0xcb, 0x67));
    }

    #[test]
    fn palettes_differ_per_index() {
        assert_eq!(Palette::for_index(IndexType::Ndvi), &NDVI_PALETTE);
        assert_eq!(Palette::for_index(IndexType::Savi), &SAVI_PALETTE);
        assert_ne!(NDVI_PALETTE.stops, SAVI_PALETTE.stops);
    }

    #[test]
    fn legend_pairs_colors_with_labels() {
        let entries = legend(IndexType::Savi);
        assert_eq!(entries.len(), 6);
        assert_eq!(entries[0].color, "#8c510a");
        assert_eq!(entries[0].label, "-1.0");
        assert_eq!(entries[5].label, "1.0");
    }
}
