#![deny(unsafe_code)]
//! Core of the random color generator.
//!
//! Produces pleasing random colors constrained by a hue family
//! ([`ColorScheme`]) and a brightness preset ([`Luminosity`]). Sampling is
//! driven by a seedable `Xorshift64` PRNG held inside [`RandomColor`], so any
//! batch can be replayed from its seed (see [`Recipe`]).

pub mod bounds;
pub mod color;
pub mod error;
pub mod generator;
pub mod options;
pub mod prng;
pub mod recipe;
pub mod sampler;
pub mod scheme;

pub use color::{hsv_to_rgb, Color, Hsv};
pub use error::ColorError;
pub use generator::RandomColor;
pub use options::Options;
pub use prng::Xorshift64;
pub use recipe::Recipe;
pub use scheme::{ColorScheme, Luminosity};
