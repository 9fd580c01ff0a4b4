//! # World Configuration
//!
//! All generation tunables live here and load once at startup from TOML.
//! Defaults reproduce the canonical universe; changing any density or
//! size range produces a different (but still fully deterministic) one.

use serde::{Deserialize, Serialize};

use crate::error::{WorldError, WorldResult};

/// Tunables for world generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WorldConfig {
    /// Side length of a square generation tile, in world units.
    pub tile_size: u32,
    /// Stars per square world unit.
    pub star_density: f64,
    /// Planets per square world unit.
    pub planet_density: f64,
    /// Inclusive lower bound of planet diameter, in cells.
    pub planet_size_min: u32,
    /// Exclusive upper bound of planet diameter, in cells.
    pub planet_size_max: u32,
    /// Inclusive lower bound of moon diameter, in cells.
    pub moon_size_min: u32,
    /// Exclusive upper bound of moon diameter, in cells.
    pub moon_size_max: u32,
    /// Maximum moons per planet.
    pub max_moons: u32,
    /// Per-axis render window, in tiles. Entities beyond this distance
    /// from the observer are inactive and their regions reclaimable.
    pub render_distance_tiles: u32,
    /// Ambient stars scattered around a named system.
    pub system_star_count: u32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tile_size: 1000,
            star_density: 0.005,
            planet_density: 0.000_04,
            planet_size_min: 15,
            planet_size_max: 22,
            moon_size_min: 2,
            moon_size_max: 10,
            max_moons: 6,
            render_distance_tiles: 2,
            system_star_count: 50,
        }
    }
}

impl WorldConfig {
    /// Parses a configuration from TOML text. Missing fields take their
    /// canonical defaults; unknown fields are rejected.
    pub fn from_toml_str(text: &str) -> WorldResult<Self> {
        let config: Self =
            toml::from_str(text).map_err(|e| WorldError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks internal consistency.
    pub fn validate(&self) -> WorldResult<()> {
        if self.tile_size == 0 {
            return Err(WorldError::InvalidConfig("tile_size must be positive".into()));
        }
        if self.planet_size_min >= self.planet_size_max {
            return Err(WorldError::InvalidConfig(format!(
                "planet size range {}..{} is empty",
                self.planet_size_min, self.planet_size_max
            )));
        }
        if self.moon_size_min >= self.moon_size_max {
            return Err(WorldError::InvalidConfig(format!(
                "moon size range {}..{} is empty",
                self.moon_size_min, self.moon_size_max
            )));
        }
        if self.max_moons == 0 {
            return Err(WorldError::InvalidConfig("max_moons must be positive".into()));
        }
        if !(self.star_density.is_finite() && self.star_density >= 0.0) {
            return Err(WorldError::InvalidConfig("star_density must be non-negative".into()));
        }
        if !(self.planet_density.is_finite() && self.planet_density >= 0.0) {
            return Err(WorldError::InvalidConfig("planet_density must be non-negative".into()));
        }
        Ok(())
    }

    /// Per-axis render window in world units.
    #[inline]
    #[must_use]
    pub fn render_distance(&self) -> f64 {
        f64::from(self.tile_size * self.render_distance_tiles)
    }

    /// Stars generated in one tile (floor of area times density).
    #[must_use]
    pub fn stars_per_tile(&self) -> u32 {
        self.count_per_tile(self.star_density)
    }

    /// Planets generated in one tile (floor of area times density).
    #[must_use]
    pub fn planets_per_tile(&self) -> u32 {
        self.count_per_tile(self.planet_density)
    }

    fn count_per_tile(&self, density: f64) -> u32 {
        let area = f64::from(self.tile_size) * f64::from(self.tile_size);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (area * density).floor() as u32
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_reproduce_canonical_universe() {
        let config = WorldConfig::default();
        assert_eq!(config.tile_size, 1000);
        assert_eq!(config.stars_per_tile(), 5000);
        assert_eq!(config.planets_per_tile(), 40);
        assert_eq!(config.render_distance(), 2000.0);
        config.validate().expect("defaults must validate");
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config = WorldConfig::from_toml_str("star_density = 0.001\nmax_moons = 3\n")
            .expect("valid toml");
        assert_eq!(config.stars_per_tile(), 1000);
        assert_eq!(config.max_moons, 3);
        assert_eq!(config.tile_size, 1000);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let err = WorldConfig::from_toml_str("warp_factor = 9\n").unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
    }

    #[test]
    fn empty_size_range_is_rejected() {
        let err = WorldConfig::from_toml_str("planet_size_min = 22\nplanet_size_max = 22\n")
            .unwrap_err();
        assert!(matches!(err, WorldError::InvalidConfig(_)));
    }
}
