//! Gradient primitives: RGBA colors, stops and sampling.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// An RGBA color with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// CSS hex notation, `#RRGGBB` for opaque colors, `#RRGGBBAA` otherwise.
    pub fn css_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// One anchor of a gradient: a position in [0, 1] and its color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub stop: f64,
    pub color: Rgba,
}

/// An ordered gradient with strictly increasing stops, first at 0.0 and
/// last at 1.0. Used both for heat-map rendering and legend swatches.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    stops: Vec<GradientStop>,
}

impl Gradient {
    /// Build a gradient by spacing the given colors evenly over [0, 1].
    ///
    /// Panics with fewer than two colors; the first stop must land on 0.0
    /// and the last on 1.0.
    pub fn evenly_spaced(colors: &[Rgba]) -> Self {
        assert!(colors.len() >= 2, "a gradient needs at least two colors");
        let last = (colors.len() - 1) as f64;
        let stops = colors
            .iter()
            .enumerate()
            .map(|(i, &color)| GradientStop {
                stop: i as f64 / last,
                color,
            })
            .collect();
        Self { stops }
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Sample the gradient at a normalized position, clamped to [0, 1].
    pub fn color_at(&self, position: f64) -> Rgba {
        let position = if position.is_nan() {
            0.0
        } else {
            position.clamp(0.0, 1.0)
        };
        let mut lower = self.stops[0];
        for &upper in &self.stops[1..] {
            if position <= upper.stop {
                let span = upper.stop - lower.stop;
                let t = if span > 0.0 {
                    (position - lower.stop) / span
                } else {
                    0.0
                };
                return lerp_color(lower.color, upper.color, t);
            }
            lower = upper;
        }
        self.stops[self.stops.len() - 1].color
    }

    /// Map a raw value to a color given the data range.
    ///
    /// A collapsed range (max <= min) maps everything to the midpoint.
    pub fn map(&self, value: f64, min: f64, max: f64) -> Rgba {
        let normalized = if max > min {
            (value - min) / (max - min)
        } else {
            0.5
        };
        self.color_at(normalized)
    }
}

/// Linear interpolation between two colors, alpha included.
pub fn lerp_color(c1: Rgba, c2: Rgba, t: f64) -> Rgba {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f64 * (1.0 - t) + b as f64 * t).round() as u8;
    Rgba {
        r: mix(c1.r, c2.r),
        g: mix(c1.g, c2.g),
        b: mix(c1.b, c2.b),
        a: mix(c1.a, c2.a),
    }
}

// Color tables from the NLDAS-3 overlay renderer. Precipitation starts
// fully transparent so dry cells vanish against the basemap; the drought
// gradient's neutral midpoint is half-transparent white.

pub(super) static TEMPERATURE: Lazy<Gradient> = Lazy::new(|| {
    Gradient::evenly_spaced(&[
        Rgba::opaque(0x00, 0x00, 0x80),
        Rgba::opaque(0x00, 0x00, 0xFF),
        Rgba::opaque(0x41, 0x69, 0xE1),
        Rgba::opaque(0x00, 0xBF, 0xFF),
        Rgba::opaque(0x00, 0xFF, 0xFF),
        Rgba::opaque(0x90, 0xEE, 0x90),
        Rgba::opaque(0xFF, 0xFF, 0x00),
        Rgba::opaque(0xFF, 0xA5, 0x00),
        Rgba::opaque(0xFF, 0x45, 0x00),
        Rgba::opaque(0xFF, 0x00, 0x00),
        Rgba::opaque(0x8B, 0x00, 0x00),
    ])
});

pub(super) static PRECIPITATION: Lazy<Gradient> = Lazy::new(|| {
    Gradient::evenly_spaced(&[
        Rgba::new(0xFF, 0xFF, 0xFF, 0x00),
        Rgba::opaque(0xE6, 0xF3, 0xFF),
        Rgba::opaque(0xCC, 0xE7, 0xFF),
        Rgba::opaque(0x80, 0xCC, 0xFF),
        Rgba::opaque(0x4D, 0xA6, 0xFF),
        Rgba::opaque(0x1A, 0x80, 0xFF),
        Rgba::opaque(0x00, 0x66, 0xCC),
        Rgba::opaque(0x00, 0x4C, 0x99),
        Rgba::opaque(0x00, 0x33, 0x66),
    ])
});

pub(super) static DROUGHT: Lazy<Gradient> = Lazy::new(|| {
    Gradient::evenly_spaced(&[
        Rgba::opaque(0x8B, 0x00, 0x00),
        Rgba::opaque(0xFF, 0x00, 0x00),
        Rgba::opaque(0xFF, 0x45, 0x00),
        Rgba::opaque(0xFF, 0xA5, 0x00),
        Rgba::opaque(0xFF, 0xFF, 0x00),
        Rgba::new(0xFF, 0xFF, 0xFF, 0x80),
        Rgba::opaque(0x87, 0xCE, 0xEB),
        Rgba::opaque(0x41, 0x69, 0xE1),
        Rgba::opaque(0x00, 0x00, 0xFF),
    ])
});

// Viridis sampled at nine anchors, the fallback for variables without a
// dedicated scheme.
pub(super) static DEFAULT: Lazy<Gradient> = Lazy::new(|| {
    Gradient::evenly_spaced(&[
        Rgba::opaque(0x44, 0x01, 0x54),
        Rgba::opaque(0x47, 0x2D, 0x7B),
        Rgba::opaque(0x3B, 0x52, 0x8B),
        Rgba::opaque(0x2C, 0x72, 0x8E),
        Rgba::opaque(0x21, 0x91, 0x8C),
        Rgba::opaque(0x27, 0xAD, 0x81),
        Rgba::opaque(0x5E, 0xC9, 0x62),
        Rgba::opaque(0xAA, 0xDC, 0x32),
        Rgba::opaque(0xFD, 0xE7, 0x25),
    ])
});
