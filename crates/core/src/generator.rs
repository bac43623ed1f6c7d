//! Thread-safe color generator.
//!
//! [`RandomColor`] owns the only mutable state in the crate: its PRNG. Every
//! color is sampled while holding the generator's lock, so the three draws of
//! one color are never interleaved with another thread's draws or with a
//! reseed. Given a seed and a sequence of requests, output is reproducible.

use crate::color::{Color, Hsv};
use crate::error::ColorError;
use crate::options::Options;
use crate::prng::Xorshift64;
use crate::sampler;
use crate::scheme::{ColorScheme, Luminosity};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Seedable random color generator.
#[derive(Debug)]
pub struct RandomColor {
    rng: Mutex<Xorshift64>,
}

impl RandomColor {
    /// Creates a generator with a fixed seed.
    pub fn new(seed: u64) -> Self {
        tracing::debug!(seed, "creating color generator");
        Self {
            rng: Mutex::new(Xorshift64::new(seed)),
        }
    }

    /// Creates a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(Xorshift64::entropy_seed())
    }

    /// Replaces the generator state with a fresh one seeded by `seed`.
    pub fn reseed(&self, seed: u64) {
        *self.lock() = Xorshift64::new(seed);
        tracing::debug!(seed, "reseeded color generator");
    }

    /// Reseeds from OS entropy and returns the seed used, so the run can be
    /// replayed with [`RandomColor::reseed`].
    pub fn reseed_from_entropy(&self) -> u64 {
        let seed = Xorshift64::entropy_seed();
        self.reseed(seed);
        seed
    }

    /// Samples one HSV triple.
    pub fn generate_hsv(
        &self,
        scheme: ColorScheme,
        luminosity: Luminosity,
    ) -> Result<Hsv, ColorError> {
        let hsv = sampler::sample(scheme, luminosity, &mut *self.lock())?;
        tracing::trace!(
            %scheme,
            %luminosity,
            hue = hsv.hue,
            saturation = hsv.saturation,
            brightness = hsv.brightness,
            "sampled color"
        );
        Ok(hsv)
    }

    /// Generates one color.
    pub fn generate_one(
        &self,
        scheme: ColorScheme,
        luminosity: Luminosity,
    ) -> Result<Color, ColorError> {
        self.generate_hsv(scheme, luminosity).map(Color::from)
    }

    /// Generates exactly `count` colors with the same scheme and luminosity.
    ///
    /// Returns `ColorError::InvalidArgument` if `count` is negative.
    pub fn generate_many(
        &self,
        scheme: ColorScheme,
        luminosity: Luminosity,
        count: i64,
    ) -> Result<Vec<Color>, ColorError> {
        let count = usize::try_from(count).map_err(|_| {
            ColorError::InvalidArgument(format!("count must be non-negative, got {count}"))
        })?;
        (0..count)
            .map(|_| self.generate_one(scheme, luminosity))
            .collect()
    }

    /// Generates one color per options entry, in order.
    ///
    /// Returns `ColorError::InvalidArgument` if `options` is `None`.
    pub fn generate_for_options(
        &self,
        options: Option<&[Options]>,
    ) -> Result<Vec<Color>, ColorError> {
        let options = options
            .ok_or_else(|| ColorError::InvalidArgument("options list is absent".to_string()))?;
        options
            .iter()
            .map(|o| self.generate_one(o.scheme, o.luminosity))
            .collect()
    }

    fn lock(&self) -> MutexGuard<'_, Xorshift64> {
        // A panic mid-draw leaves a valid (if advanced) state behind.
        self.rng.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RandomColor {
    fn default() -> Self {
        Self::from_entropy()
    }
}
