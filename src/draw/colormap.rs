//! Illuminance color ramp.
//!
//! A standalone piecewise-linear RGB interpolator: five fixed stops scaled to
//! the field's peak, with no dependency on any charting or rendering library.
//! Renderers feed each cell's lux through [`color_for`] with the current
//! peak so the whole view shares one scale.

use anyhow::{Context, Result, ensure};

/// Lower bound of the ramp domain. Keeps the scale from collapsing to a
/// near-zero width when the field is dim.
const DOMAIN_FLOOR: f64 = 100.0;

/// Ramp stops at relative positions 0..1: near-black, dark red, orange,
/// yellow, white.
const STOPS: [(f64, Rgb); 5] = [
    (0.0, Rgb::new(0x0f, 0x17, 0x2a)),
    (0.25, Rgb::new(0x99, 0x1b, 0x1b)),
    (0.5, Rgb::new(0xea, 0x58, 0x0c)),
    (0.75, Rgb::new(0xfa, 0xcc, 0x15)),
    (1.0, Rgb::new(0xff, 0xff, 0xff)),
];

/// An sRGB display color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
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

    /// Parses a `#rrggbb` hex color (leading `#` optional).
    pub fn from_hex(text: &str) -> Result<Self> {
        let hex = text.strip_prefix('#').unwrap_or(text);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "expected #rrggbb color, got '{text}'"
        );
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .with_context(|| format!("invalid hex color '{text}'"))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }
}

/// Maps an illuminance value to a display color.
///
/// Stop positions are scaled by `max(100, peak)`; values outside the domain
/// clamp to the end stops, values between stops interpolate linearly per
/// channel.
pub fn color_for(lux: f64, peak: f64) -> Rgb {
    let scale = peak.max(DOMAIN_FLOOR);
    if lux <= 0.0 {
        return STOPS[0].1;
    }
    for pair in STOPS.windows(2) {
        let (lo_pos, lo) = pair[0];
        let (hi_pos, hi) = pair[1];
        let (lo_lux, hi_lux) = (lo_pos * scale, hi_pos * scale);
        if lux <= hi_lux {
            return lerp(lo, hi, (lux - lo_lux) / (hi_lux - lo_lux));
        }
    }
    STOPS[STOPS.len() - 1].1
}

fn lerp(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let channel = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * t).round() as u8;
    Rgb::new(
        channel(a.r, b.r),
        channel(a.g, b.g),
        channel(a.b, b.b),
    )
}
