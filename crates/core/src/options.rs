//! Per-color generation options.

use crate::scheme::{ColorScheme, Luminosity};
use serde::{Deserialize, Serialize};

/// Scheme and luminosity for a single generated color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Options {
    #[serde(default)]
    pub scheme: ColorScheme,
    #[serde(default)]
    pub luminosity: Luminosity,
}

impl Options {
    pub fn new(scheme: ColorScheme, luminosity: Luminosity) -> Self {
        Self { scheme, luminosity }
    }
}
