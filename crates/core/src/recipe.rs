//! Reproducible specification for a batch of colors.
//!
//! A [`Recipe`] captures everything needed to regenerate a palette: the PRNG
//! seed, a uniform batch `(scheme, luminosity, count)`, and an optional list
//! of per-color options appended after the batch.

use crate::color::Color;
use crate::error::ColorError;
use crate::generator::RandomColor;
use crate::options::Options;
use crate::scheme::{ColorScheme, Luminosity};
use serde::{Deserialize, Serialize};

/// Reproducible batch request. Two identical recipes render identical colors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    pub seed: u64,
    #[serde(default)]
    pub scheme: ColorScheme,
    #[serde(default)]
    pub luminosity: Luminosity,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub options: Vec<Options>,
}

impl Recipe {
    /// Creates a recipe for `count` colors of one scheme and luminosity.
    pub fn new(seed: u64, scheme: ColorScheme, luminosity: Luminosity, count: usize) -> Self {
        Self {
            seed,
            scheme,
            luminosity,
            count,
            options: Vec::new(),
        }
    }

    /// Largest number of colors a single recipe may request.
    pub const MAX_COLORS: usize = 1 << 20;

    /// Total number of colors [`Recipe::render`] produces, or `None` if it
    /// does not fit in a `usize`.
    pub fn len(&self) -> Option<usize> {
        self.count.checked_add(self.options.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == Some(0)
    }

    /// Rejects recipes that would produce no colors or more than
    /// [`Recipe::MAX_COLORS`].
    pub fn validate(&self) -> Result<(), ColorError> {
        match self.len() {
            Some(0) => Err(ColorError::InvalidArgument(
                "recipe requests no colors: set count or options".to_string(),
            )),
            Some(n) if n <= Self::MAX_COLORS => Ok(()),
            _ => Err(ColorError::InvalidArgument(format!(
                "recipe requests too many colors: count {} plus {} options exceeds {}",
                self.count,
                self.options.len(),
                Self::MAX_COLORS
            ))),
        }
    }

    /// Renders the recipe with a freshly seeded generator: `count` batch
    /// colors first, then one color per options entry.
    pub fn render(&self) -> Result<Vec<Color>, ColorError> {
        self.validate()?;
        let generator = RandomColor::new(self.seed);
        let batch = (0..self.count).map(|_| generator.generate_one(self.scheme, self.luminosity));
        let per_entry = self
            .options
            .iter()
            .map(|o| generator.generate_one(o.scheme, o.luminosity));
        batch.chain(per_entry).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_recipe_without_options() {
        let r = Recipe::new(42, ColorScheme::Blue, Luminosity::Dark, 12);
        assert_eq!(r.seed, 42);
        assert_eq!(r.count, 12);
        assert!(r.options.is_empty());
        assert_eq!(r.len(), Some(12));
    }

    #[test]
    fn json_round_trip_with_options() {
        let mut r = Recipe::new(8675309, ColorScheme::Pink, Luminosity::Light, 3);
        r.options = vec![
            Options::new(ColorScheme::Monochrome, Luminosity::Dark),
            Options::new(ColorScheme::Yellow, Luminosity::Bright),
        ];
        let json = serde_json::to_string_pretty(&r).unwrap();
        let restored: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(r, restored);
    }

    #[test]
    fn json_fields_default_when_missing() {
        let r: Recipe = serde_json::from_str(r#"{"seed": 5, "count": 2}"#).unwrap();
        assert_eq!(r, Recipe::new(5, ColorScheme::Random, Luminosity::Random, 2));
    }

    #[test]
    fn validate_rejects_empty_recipe() {
        let r = Recipe::new(1, ColorScheme::Red, Luminosity::Bright, 0);
        assert!(matches!(r.validate(), Err(ColorError::InvalidArgument(_))));
        assert!(r.render().is_err());
    }

    #[test]
    fn validate_accepts_options_only_recipe() {
        let mut r = Recipe::new(1, ColorScheme::Red, Luminosity::Bright, 0);
        r.options.push(Options::default());
        assert!(r.validate().is_ok());
        assert_eq!(r.render().unwrap().len(), 1);
    }

    #[test]
    fn render_is_reproducible() {
        let mut r = Recipe::new(77, ColorScheme::Green, Luminosity::Random, 6);
        r.options.push(Options::new(ColorScheme::Purple, Luminosity::Dark));
        assert_eq!(r.render().unwrap(), r.render().unwrap());
        assert_eq!(r.render().unwrap().len(), 7);
    }

    #[test]
    fn render_matches_generator_with_same_seed() {
        let r = Recipe::new(42, ColorScheme::Orange, Luminosity::Bright, 4);
        let expected = RandomColor::new(42)
            .generate_many(ColorScheme::Orange, Luminosity::Bright, 4)
            .unwrap();
        assert_eq!(r.render().unwrap(), expected);
    }

    // -- Size limits --

    #[test]
    fn len_overflow_is_none_and_rejected() {
        let mut r = Recipe::new(1, ColorScheme::Red, Luminosity::Bright, usize::MAX);
        r.options.push(Options::default());
        assert_eq!(r.len(), None);
        assert!(!r.is_empty());
        assert!(matches!(r.validate(), Err(ColorError::InvalidArgument(_))));
        assert!(matches!(r.render(), Err(ColorError::InvalidArgument(_))));
    }

    #[test]
    fn huge_count_from_json_is_rejected_without_rendering() {
        let r: Recipe =
            serde_json::from_str(r#"{"seed": 1, "count": 18446744073709551615}"#).unwrap();
        assert!(matches!(r.render(), Err(ColorError::InvalidArgument(_))));
    }

    #[test]
    fn validate_enforces_max_colors_including_options() {
        let mut r = Recipe::new(1, ColorScheme::Blue, Luminosity::Dark, Recipe::MAX_COLORS);
        assert!(r.validate().is_ok());
        r.options.push(Options::default());
        let err = r.validate().unwrap_err();
        assert!(err.to_string().contains("too many colors"), "got: {err}");
    }
}
