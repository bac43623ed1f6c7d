//! Color types and the HSV to RGB conversion.
//!
//! Generated colors are 8-bit RGB with a fixed opaque alpha. Channels are
//! produced by flooring, not rounding, so output matches the reference
//! palettes exactly.

use crate::error::ColorError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Opaque 8-bit RGB color.
///
/// Serializes as a hex string `"#rrggbb"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// A sampled hue/saturation/brightness triple.
///
/// Hue is in degrees `[0, 360]`; saturation and brightness are percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hsv {
    pub hue: i32,
    pub saturation: i32,
    pub brightness: i32,
}

impl Color {
    /// Alpha is not variable; every generated color is fully opaque.
    pub const ALPHA: u8 = 255;

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn alpha(self) -> u8 {
        Self::ALPHA
    }

    /// Returns `[r, g, b, 255]`.
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, Self::ALPHA]
    }

    /// Parses a hex color string like "#ff00aa" or "ff00aa" (case insensitive).
    ///
    /// Returns `ColorError::InvalidColor` if the input is not a valid 6-digit hex color.
    pub fn from_hex(hex: &str) -> Result<Color, ColorError> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.is_ascii() {
            return Err(ColorError::InvalidColor(format!(
                "expected 6 hex digits, got {:?}",
                hex
            )));
        }
        let channel = |range: std::ops::Range<usize>, name: &str| {
            u8::from_str_radix(&hex[range], 16)
                .map_err(|e| ColorError::InvalidColor(format!("invalid {name} component: {e}")))
        };
        Ok(Color {
            r: channel(0..2, "red")?,
            g: channel(2..4, "green")?,
            b: channel(4..6, "blue")?,
        })
    }

    /// Formats the color as `"#rrggbb"`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn is_gray(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

impl From<Hsv> for Color {
    fn from(hsv: Hsv) -> Self {
        hsv_to_rgb(hsv.hue, hsv.saturation, hsv.brightness)
    }
}

/// Converts hue (degrees), saturation and brightness (percent) to RGB.
///
/// Inputs are clamped to `[0, 360]`, `[0, 100]` and `[0, 100]`. The sector
/// computation is degenerate at the seam, so hue 0 is read as 1 and hue 360
/// as 359. Each channel is `floor(c * 255)`.
pub fn hsv_to_rgb(hue: i32, saturation: i32, brightness: i32) -> Color {
    let h = match hue.clamp(0, 360) {
        0 => 1,
        360 => 359,
        h => h,
    };

    let h = f64::from(h) / 360.0;
    let s = f64::from(saturation.clamp(0, 100)) / 100.0;
    let v = f64::from(brightness.clamp(0, 100)) / 100.0;

    let sector = (h * 6.0).floor();
    let f = h * 6.0 - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    // h is in (0, 1), so sector is always 0..=5.
    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Color {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

fn to_channel(c: f64) -> u8 {
    (c * 255.0).floor() as u8
}
