//! # VOIDFIELD Core
//!
//! Deterministic primitives shared by the generation engine.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the same seed always produces the same draws
//! 2. **Exact**: all stream arithmetic is 32-bit wraparound, no shortcuts
//! 3. **Leaf crate**: no dependencies, so determinism cannot drift
//!
//! ## Core Components
//!
//! - `hash_name`: arbitrary string identity to a 32-bit seed
//! - `Mulberry32`: the sequential [0, 1) stream behind all generation
//! - `Rgb`: 24-bit colors, channel mixing, and the fixed palettes
//! - `Pattern`: the glyph+color cell grid body surfaces render into
//!
//! ## Example
//!
//! ```rust,ignore
//! use voidfield_core::{hash_name, Mulberry32};
//!
//! let mut stream = Mulberry32::new(hash_name("Mao"));
//! let roll = stream.next(); // identical on every run, every platform
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod color;
pub mod grid;
pub mod seed;

pub use color::{Rgb, BRIGHTS, PASTELS};
pub use grid::{Cell, Pattern};
pub use seed::{hash_name, Mulberry32, Seed};
