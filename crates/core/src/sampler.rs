//! The three-step HSV sampler.
//!
//! A hue is drawn from the scheme's band, then a saturation narrowed by the
//! luminosity and the hue's table row, then a brightness between the row's
//! floor curve and a luminosity-dependent ceiling. Each step makes exactly one
//! draw, so the RNG sequence consumed per color is fixed at three values.

use crate::bounds;
use crate::color::Hsv;
use crate::error::ColorError;
use crate::prng::Xorshift64;
use crate::scheme::{ColorScheme, Luminosity};

/// Saturation boundary between Light (below) and Bright (above).
const VIVID_SATURATION: i32 = 55;

/// Width of the saturation window Dark keeps at the top of a row's range.
const DARK_SATURATION_WINDOW: i32 = 10;

/// How far above the floor Dark lets brightness rise.
const DARK_BRIGHTNESS_WINDOW: i32 = 20;

const MAX_PERCENT: i32 = 100;

/// Source of uniform integers in an inclusive range.
pub trait UniformSource {
    /// Returns a value in `[lower, upper]`. Implementations must return
    /// `lower` when `upper < lower`.
    fn next_inclusive(&mut self, lower: i32, upper: i32) -> i32;
}

impl UniformSource for Xorshift64 {
    fn next_inclusive(&mut self, lower: i32, upper: i32) -> i32 {
        Xorshift64::next_inclusive(self, lower, upper)
    }
}

/// Draws a hue in `[0, 360]` from the band of `scheme`.
pub fn pick_hue<R: UniformSource + ?Sized>(scheme: ColorScheme, rng: &mut R) -> i32 {
    let range = bounds::hue_range(scheme);
    let hue = rng.next_inclusive(range.lower, range.upper);
    if hue < 0 {
        hue + 360
    } else {
        hue
    }
}

/// Draws a saturation for an already-chosen hue.
///
/// Monochrome is checked first, so it yields 0 even under Random luminosity
/// and consumes no draw.
pub fn pick_saturation<R: UniformSource + ?Sized>(
    hue: i32,
    luminosity: Luminosity,
    scheme: ColorScheme,
    rng: &mut R,
) -> Result<i32, ColorError> {
    if scheme == ColorScheme::Monochrome {
        return Ok(0);
    }
    if luminosity == Luminosity::Random {
        return Ok(rng.next_inclusive(0, MAX_PERCENT));
    }

    let range = bounds::info_for_hue(hue)?.saturation_range();
    let (mut s_min, mut s_max) = (range.lower, range.upper);
    match luminosity {
        Luminosity::Bright => s_min = VIVID_SATURATION,
        Luminosity::Dark => s_min = s_max - DARK_SATURATION_WINDOW,
        Luminosity::Light => s_max = VIVID_SATURATION,
        Luminosity::Random => {}
    }

    Ok(draw_clamped(rng, "saturation", s_min, s_max))
}

/// Draws a brightness for an already-chosen hue and saturation.
pub fn pick_brightness<R: UniformSource + ?Sized>(
    hue: i32,
    saturation: i32,
    luminosity: Luminosity,
    rng: &mut R,
) -> Result<i32, ColorError> {
    let floor = bounds::minimum_brightness(hue, saturation)?;
    let (b_min, b_max) = match luminosity {
        Luminosity::Dark => (floor, floor + DARK_BRIGHTNESS_WINDOW),
        Luminosity::Light => ((floor + MAX_PERCENT) / 2, MAX_PERCENT),
        Luminosity::Random => (0, MAX_PERCENT),
        Luminosity::Bright => (floor, MAX_PERCENT),
    };

    Ok(draw_clamped(rng, "brightness", b_min, b_max.min(MAX_PERCENT)))
}

/// Samples a full HSV triple for `(scheme, luminosity)`.
pub fn sample<R: UniformSource + ?Sized>(
    scheme: ColorScheme,
    luminosity: Luminosity,
    rng: &mut R,
) -> Result<Hsv, ColorError> {
    let hue = pick_hue(scheme, rng);
    let saturation = pick_saturation(hue, luminosity, scheme, rng)?;
    let brightness = pick_brightness(hue, saturation, luminosity, rng)?;
    Ok(Hsv {
        hue,
        saturation,
        brightness,
    })
}

/// Draws in `[lower, upper]`, collapsing an inverted range to `lower`.
fn draw_clamped<R: UniformSource + ?Sized>(
    rng: &mut R,
    what: &'static str,
    lower: i32,
    upper: i32,
) -> i32 {
    if lower > upper {
        tracing::warn!(what, lower, upper, "degenerate range, clamping to lower bound");
        return lower;
    }
    rng.next_inclusive(lower, upper)
}
