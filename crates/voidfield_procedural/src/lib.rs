//! # VOIDFIELD Procedural Generation
//!
//! Deterministic deep-space generation: an infinite, reproducible field
//! of stars, planets and moons.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: the same seed always produces the same universe
//! 2. **Regioned**: space generates in fixed-size tiles on approach
//! 3. **Reclaimable**: any region can be dropped and rebuilt bit-identically
//! 4. **Host-agnostic**: no clocks, no rendering; time comes in as arguments
//!
//! ## Core Components
//!
//! - `PatternSynthesizer`: per-body glyph surfaces
//! - `BodyFactory`: planets, moons and stars from composed seeds
//! - `scan_body`: descriptive records and species naming
//! - `WorldManager`: region memoization, retention, named destinations
//! - `SPECIAL_SITES`: the two authored systems
//!
//! ## Example
//!
//! ```rust,ignore
//! use voidfield_procedural::{WorldConfig, WorldManager};
//!
//! let mut world = WorldManager::new(WorldConfig::default());
//! world.advance(0.0, 0.0, 0.0);
//!
//! // The origin neighborhood plus both authored sites.
//! assert_eq!(world.region_count(), 11);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod body;
pub mod config;
pub mod error;
pub mod pattern;
pub mod registry;
pub mod scan;
pub mod world;

pub use body::{BodyFactory, Moon, Planet, Star, MOON_ORBIT_RATE};
pub use config::WorldConfig;
pub use error::{WorldError, WorldResult};
pub use pattern::{PatternSynthesizer, PLANET_GLYPHS};
pub use registry::{is_special_name, site_at, site_named, SpecialSite, SPECIAL_SITES};
pub use scan::{scan_body, ScanRecord};
pub use world::{Region, TileCoord, WorldManager, WorldStats};
