//! Per-hue-family bound table.
//!
//! Each row pairs a hue band with a brightness floor curve: a list of
//! `(saturation, minimum brightness)` control points, ordered by saturation.
//! The saturation and brightness ranges of a row are derived from the first
//! and last control points rather than stored.
//!
//! Red is stored as `[-26, 18]` so that it stays one contiguous band across
//! the 0/360 seam. Hue lookups shift `[334, 360]` down by 360 to match.
//!
//! The values are hand-tuned; changing any of them changes generated output.

use crate::error::ColorError;
use crate::scheme::ColorScheme;

/// Closed integer interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    pub lower: i32,
    pub upper: i32,
}

impl Range {
    pub const fn new(lower: i32, upper: i32) -> Self {
        Self { lower, upper }
    }

    pub fn contains(self, value: i32) -> bool {
        value >= self.lower && value <= self.upper
    }
}

/// Hue band in degrees. May start below zero (Red).
pub type HueRange = Range;

/// The whole hue circle, used when a scheme has no band of its own.
pub const FULL_CIRCLE: HueRange = Range::new(0, 360);

/// One point of a brightness floor curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlPoint {
    pub saturation: i32,
    pub min_brightness: i32,
}

const fn pt(saturation: i32, min_brightness: i32) -> ControlPoint {
    ControlPoint {
        saturation,
        min_brightness,
    }
}

/// One row of the bound table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDefinition {
    pub scheme: ColorScheme,
    /// `None` for Monochrome, which has no band of its own.
    pub hue_range: Option<HueRange>,
    pub lower_bounds: &'static [ControlPoint],
}

impl ColorDefinition {
    /// `[first point's saturation, last point's saturation]`.
    pub fn saturation_range(&self) -> Range {
        let (first, last) = self.endpoints();
        Range::new(first.saturation, last.saturation)
    }

    /// `[last point's brightness, first point's brightness]`.
    pub fn brightness_range(&self) -> Range {
        let (first, last) = self.endpoints();
        Range::new(last.min_brightness, first.min_brightness)
    }

    fn endpoints(&self) -> (ControlPoint, ControlPoint) {
        // Every row in TABLE has at least two points.
        let first = self.lower_bounds[0];
        let last = self.lower_bounds[self.lower_bounds.len() - 1];
        (first, last)
    }

    /// Evaluates the brightness floor curve at `saturation`.
    ///
    /// Linear between neighbouring control points, truncated toward zero.
    /// When `saturation` sits exactly on an inner point the earlier segment
    /// wins. Outside every segment the floor is 0.
    pub fn minimum_brightness(&self, saturation: i32) -> i32 {
        self.lower_bounds
            .windows(2)
            .find(|w| saturation >= w[0].saturation && saturation <= w[1].saturation)
            .map(|w| {
                let (s1, v1) = (f64::from(w[0].saturation), f64::from(w[0].min_brightness));
                let (s2, v2) = (f64::from(w[1].saturation), f64::from(w[1].min_brightness));
                let m = (v2 - v1) / (s2 - s1);
                let b = v1 - m * s1;
                (m * f64::from(saturation) + b) as i32
            })
            .unwrap_or(0)
    }
}

static MONOCHROME: [ControlPoint; 2] = [pt(0, 0), pt(100, 0)];

static RED: [ControlPoint; 9] = [
    pt(20, 100),
    pt(30, 92),
    pt(40, 89),
    pt(50, 85),
    pt(60, 78),
    pt(70, 70),
    pt(80, 60),
    pt(90, 55),
    pt(100, 50),
];

static ORANGE: [ControlPoint; 7] = [
    pt(20, 100),
    pt(30, 93),
    pt(40, 88),
    pt(50, 86),
    pt(60, 85),
    pt(70, 70),
    pt(100, 70),
];

static YELLOW: [ControlPoint; 8] = [
    pt(25, 100),
    pt(40, 94),
    pt(50, 89),
    pt(60, 86),
    pt(70, 84),
    pt(80, 82),
    pt(90, 80),
    pt(100, 75),
];

static GREEN: [ControlPoint; 8] = [
    pt(30, 100),
    pt(40, 90),
    pt(50, 85),
    pt(60, 81),
    pt(70, 74),
    pt(80, 64),
    pt(90, 50),
    pt(100, 40),
];

static BLUE: [ControlPoint; 9] = [
    pt(20, 100),
    pt(30, 86),
    pt(40, 80),
    pt(50, 74),
    pt(60, 60),
    pt(70, 52),
    pt(80, 44),
    pt(90, 39),
    pt(100, 35),
];

static PURPLE: [ControlPoint; 9] = [
    pt(20, 100),
    pt(30, 87),
    pt(40, 79),
    pt(50, 70),
    pt(60, 65),
    pt(70, 59),
    pt(80, 52),
    pt(90, 45),
    pt(100, 42),
];

static PINK: [ControlPoint; 7] = [
    pt(20, 100),
    pt(30, 90),
    pt(40, 86),
    pt(60, 84),
    pt(80, 80),
    pt(90, 75),
    pt(100, 73),
];

/// All table rows. Hue bands of the seven named hues tile `[-26, 334]`.
pub static TABLE: [ColorDefinition; 8] = [
    ColorDefinition {
        scheme: ColorScheme::Monochrome,
        hue_range: None,
        lower_bounds: &MONOCHROME,
    },
    ColorDefinition {
        scheme: ColorScheme::Red,
        hue_range: Some(Range::new(-26, 18)),
        lower_bounds: &RED,
    },
    ColorDefinition {
        scheme: ColorScheme::Orange,
        hue_range: Some(Range::new(19, 46)),
        lower_bounds: &ORANGE,
    },
    ColorDefinition {
        scheme: ColorScheme::Yellow,
        hue_range: Some(Range::new(47, 62)),
        lower_bounds: &YELLOW,
    },
    ColorDefinition {
        scheme: ColorScheme::Green,
        hue_range: Some(Range::new(63, 178)),
        lower_bounds: &GREEN,
    },
    ColorDefinition {
        scheme: ColorScheme::Blue,
        hue_range: Some(Range::new(179, 257)),
        lower_bounds: &BLUE,
    },
    ColorDefinition {
        scheme: ColorScheme::Purple,
        hue_range: Some(Range::new(258, 282)),
        lower_bounds: &PURPLE,
    },
    ColorDefinition {
        scheme: ColorScheme::Pink,
        hue_range: Some(Range::new(283, 334)),
        lower_bounds: &PINK,
    },
];

/// Returns the table row for `scheme`, or `None` for [`ColorScheme::Random`].
pub fn definition(scheme: ColorScheme) -> Option<&'static ColorDefinition> {
    let index = match scheme {
        ColorScheme::Random => return None,
        ColorScheme::Monochrome => 0,
        ColorScheme::Red => 1,
        ColorScheme::Orange => 2,
        ColorScheme::Yellow => 3,
        ColorScheme::Green => 4,
        ColorScheme::Blue => 5,
        ColorScheme::Purple => 6,
        ColorScheme::Pink => 7,
    };
    Some(&TABLE[index])
}

/// Hue band to draw from for `scheme`. Falls back to [`FULL_CIRCLE`] for
/// schemes without a band (Random, Monochrome).
pub fn hue_range(scheme: ColorScheme) -> HueRange {
    definition(scheme)
        .and_then(|d| d.hue_range)
        .unwrap_or(FULL_CIRCLE)
}

/// Finds the row whose hue band contains `hue`.
///
/// Hues in `[334, 360]` are shifted by -360 first to land in Red's band.
/// A miss means the table no longer partitions the circle.
pub fn info_for_hue(hue: i32) -> Result<&'static ColorDefinition, ColorError> {
    let shifted = if (334..=360).contains(&hue) {
        hue - 360
    } else {
        hue
    };
    let found = TABLE
        .iter()
        .find(|d| d.hue_range.is_some_and(|r| r.contains(shifted)));
    debug_assert!(found.is_some(), "hue {hue} not covered by the bound table");
    found.ok_or(ColorError::HueOutsideTable(hue))
}

/// Brightness floor for a sampled `(hue, saturation)` pair.
pub fn minimum_brightness(hue: i32, saturation: i32) -> Result<i32, ColorError> {
    Ok(info_for_hue(hue)?.minimum_brightness(saturation))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Table shape --

    #[test]
    fn every_named_scheme_has_a_row() {
        for scheme in ColorScheme::ALL {
            match scheme {
                ColorScheme::Random => assert!(definition(scheme).is_none()),
                _ => assert_eq!(definition(scheme).unwrap().scheme, scheme),
            }
        }
    }

    #[test]
    fn control_points_strictly_increase_in_saturation() {
        for row in &TABLE {
            for w in row.lower_bounds.windows(2) {
                assert!(
                    w[0].saturation < w[1].saturation,
                    "{:?}: saturation not increasing at {:?}",
                    row.scheme,
                    w
                );
            }
        }
    }

    #[test]
    fn control_points_never_increase_in_brightness() {
        for row in &TABLE {
            for w in row.lower_bounds.windows(2) {
                assert!(
                    w[0].min_brightness >= w[1].min_brightness,
                    "{:?}: brightness floor rises at {:?}",
                    row.scheme,
                    w
                );
            }
        }
    }

    #[test]
    fn hue_bands_tile_the_circle_without_gaps_or_overlap() {
        // Every hue in [0, 360] maps to exactly one named band.
        for hue in 0..=360 {
            let shifted = if hue >= 334 { hue - 360 } else { hue };
            let matches = TABLE
                .iter()
                .filter(|d| d.hue_range.is_some_and(|r| r.contains(shifted)))
                .count();
            assert_eq!(matches, 1, "hue {hue} matched {matches} bands");
        }
    }

    // -- Derived ranges --

    #[test]
    fn derived_ranges_for_yellow() {
        let yellow = definition(ColorScheme::Yellow).unwrap();
        assert_eq!(yellow.saturation_range(), Range::new(25, 100));
        assert_eq!(yellow.brightness_range(), Range::new(75, 100));
    }

    #[test]
    fn derived_ranges_for_monochrome() {
        let mono = definition(ColorScheme::Monochrome).unwrap();
        assert_eq!(mono.saturation_range(), Range::new(0, 100));
        assert_eq!(mono.brightness_range(), Range::new(0, 0));
    }

    // -- hue_range --

    #[test]
    fn hue_range_for_red_wraps_below_zero() {
        assert_eq!(hue_range(ColorScheme::Red), Range::new(-26, 18));
    }

    #[test]
    fn hue_range_falls_back_to_full_circle() {
        assert_eq!(hue_range(ColorScheme::Random), FULL_CIRCLE);
        assert_eq!(hue_range(ColorScheme::Monochrome), FULL_CIRCLE);
    }

    // -- info_for_hue --

    #[test]
    fn info_for_hue_band_edges() {
        assert_eq!(info_for_hue(0).unwrap().scheme, ColorScheme::Red);
        assert_eq!(info_for_hue(18).unwrap().scheme, ColorScheme::Red);
        assert_eq!(info_for_hue(19).unwrap().scheme, ColorScheme::Orange);
        assert_eq!(info_for_hue(62).unwrap().scheme, ColorScheme::Yellow);
        assert_eq!(info_for_hue(178).unwrap().scheme, ColorScheme::Green);
        assert_eq!(info_for_hue(257).unwrap().scheme, ColorScheme::Blue);
        assert_eq!(info_for_hue(282).unwrap().scheme, ColorScheme::Purple);
        assert_eq!(info_for_hue(283).unwrap().scheme, ColorScheme::Pink);
        assert_eq!(info_for_hue(333).unwrap().scheme, ColorScheme::Pink);
    }

    #[test]
    fn info_for_hue_shifts_high_hues_into_red() {
        // 334 sits on the Pink upper bound but is remapped to -26 first.
        assert_eq!(info_for_hue(334).unwrap().scheme, ColorScheme::Red);
        assert_eq!(info_for_hue(359).unwrap().scheme, ColorScheme::Red);
        assert_eq!(info_for_hue(360).unwrap().scheme, ColorScheme::Red);
    }

    // -- minimum_brightness --

    #[test]
    fn minimum_brightness_at_control_points_matches_table() {
        for row in &TABLE {
            for p in row.lower_bounds {
                assert_eq!(
                    row.minimum_brightness(p.saturation),
                    p.min_brightness,
                    "{:?} at saturation {}",
                    row.scheme,
                    p.saturation
                );
            }
        }
    }

    #[test]
    fn minimum_brightness_interpolates_and_truncates() {
        let red = definition(ColorScheme::Red).unwrap();
        assert_eq!(red.minimum_brightness(25), 96);
        assert_eq!(red.minimum_brightness(75), 65);
        let blue = definition(ColorScheme::Blue).unwrap();
        assert_eq!(blue.minimum_brightness(55), 67);
        let pink = definition(ColorScheme::Pink).unwrap();
        assert_eq!(pink.minimum_brightness(50), 85);
    }

    #[test]
    fn minimum_brightness_outside_curve_is_zero() {
        let green = definition(ColorScheme::Green).unwrap();
        assert_eq!(green.minimum_brightness(25), 0);
        assert_eq!(green.minimum_brightness(0), 0);
        assert_eq!(green.minimum_brightness(101), 0);
    }

    #[test]
    fn minimum_brightness_by_hue_uses_the_band_of_the_hue() {
        // Hue 340 belongs to Red after the shift.
        assert_eq!(minimum_brightness(340, 25).unwrap(), 96);
        // Hue 100 is Green; saturation 45 lands between (40,90) and (50,85).
        assert_eq!(minimum_brightness(100, 45).unwrap(), 87);
    }

    #[test]
    fn minimum_brightness_is_non_increasing_in_saturation() {
        for row in TABLE.iter().skip(1) {
            let first = row.lower_bounds[0].saturation;
            let mut prev = row.minimum_brightness(first);
            for s in first + 1..=100 {
                let v = row.minimum_brightness(s);
                assert!(v <= prev, "{:?}: floor rose from {prev} to {v} at {s}", row.scheme);
                prev = v;
            }
        }
    }
}
