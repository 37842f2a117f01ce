#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]

//! auriga-random: deterministic random number core for sound-design tools
//!
//! Every Auriga tool exposes a "Seed" control and "Randomize" actions that
//! must reproduce an identical sonic result whenever the same seed is
//! supplied. This crate is the subsystem that guarantee rests on: a PCG32
//! generator with explicit, portable state.
//!
//! # Features
//!
//! - [`Pcg32`] - PCG-XSH-RR generator with a 64-bit state and a selectable
//!   odd 64-bit increment ("stream")
//! - Seeding from a wide seed, 32-bit seed halves, an exported state array,
//!   or the OS entropy source (`entropy` feature)
//! - Unbiased bounded integers, 53-bit doubles in `[0, 1)`, and audio-rate
//!   `f32` samples
//! - Range-mapping helpers ([`uniform_map`], [`exponential_map`],
//!   [`normal_map`]) used by randomize actions to shape `[0, 1)` draws
//! - All types are `Copy`/`Clone`, zero-allocation, and suitable for
//!   real-time use
//!
//! Not cryptographically secure. Do not use this generator for anything
//! security sensitive.

#[cfg(feature = "entropy")]
mod entropy;
mod error;
mod map;
mod pcg;

pub use error::PcgError;
pub use map::{exponential_map, normal_map, uniform_int_map, uniform_map};
pub use pcg::Pcg32;
