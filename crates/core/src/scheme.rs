//! Selection enums: which hue family to draw from and how bright the result is.

use crate::error::ColorError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named hue family constraining the generated hue to one band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Any hue on the full circle.
    #[default]
    Random,
    /// Grayscale only; saturation is always 0.
    Monochrome,
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
}

/// Brightness/vividness preset applied after the hue is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Luminosity {
    /// Unconstrained saturation and brightness.
    #[default]
    Random,
    /// Dark colors: high saturation, brightness close to the floor.
    Dark,
    /// Light, pastel colors.
    Light,
    /// Vibrant colors.
    Bright,
}

impl ColorScheme {
    /// Every scheme, in declaration order.
    pub const ALL: [ColorScheme; 9] = [
        ColorScheme::Random,
        ColorScheme::Monochrome,
        ColorScheme::Red,
        ColorScheme::Orange,
        ColorScheme::Yellow,
        ColorScheme::Green,
        ColorScheme::Blue,
        ColorScheme::Purple,
        ColorScheme::Pink,
    ];

    /// Lowercase name used by the CLI and in JSON.
    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Random => "random",
            ColorScheme::Monochrome => "monochrome",
            ColorScheme::Red => "red",
            ColorScheme::Orange => "orange",
            ColorScheme::Yellow => "yellow",
            ColorScheme::Green => "green",
            ColorScheme::Blue => "blue",
            ColorScheme::Purple => "purple",
            ColorScheme::Pink => "pink",
        }
    }

    /// Looks up a scheme by name (case insensitive).
    ///
    /// Returns `ColorError::InvalidArgument` for unknown names.
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::InvalidArgument(format!("unknown color scheme: {name}")))
    }

    /// Returns the names of all schemes.
    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|s| s.name()).collect()
    }
}

impl Luminosity {
    /// Every luminosity, in declaration order.
    pub const ALL: [Luminosity; 4] = [
        Luminosity::Random,
        Luminosity::Dark,
        Luminosity::Light,
        Luminosity::Bright,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Luminosity::Random => "random",
            Luminosity::Dark => "dark",
            Luminosity::Light => "light",
            Luminosity::Bright => "bright",
        }
    }

    /// Looks up a luminosity by name (case insensitive).
    pub fn from_name(name: &str) -> Result<Self, ColorError> {
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| ColorError::InvalidArgument(format!("unknown luminosity: {name}")))
    }

    pub fn list_names() -> Vec<&'static str> {
        Self::ALL.iter().map(|l| l.name()).collect()
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Luminosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
