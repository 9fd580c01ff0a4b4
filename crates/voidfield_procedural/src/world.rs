//! # World Manager
//!
//! Region-level memoization over the pure generators. A region is either
//! one tile, one authored site, or the pinned destination; each is a
//! pure function of its key, so the manager is free to drop any region
//! the observer has left and rebuild it bit-identically on return.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::body::{BodyFactory, Planet, Star};
use crate::config::WorldConfig;
use crate::error::{WorldError, WorldResult};
use crate::registry::SPECIAL_SITES;

/// Integer coordinate of one generation tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TileCoord {
    /// Tile column.
    pub x: i64,
    /// Tile row.
    pub y: i64,
}

impl TileCoord {
    /// The tile containing a world position (floor division).
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn containing(x: f64, y: f64, tile_size: u32) -> Self {
        let t = f64::from(tile_size);
        Self { x: (x / t).floor() as i64, y: (y / t).floor() as i64 }
    }
}

/// Identity of a generated region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum RegionKey {
    /// An emergent tile.
    Tile(TileCoord),
    /// An authored site, keyed by designation.
    Site(&'static str),
    /// The pinned named destination. Exempt from retention.
    Destination,
}

/// Everything one region generated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Region {
    /// Background stars.
    pub stars: Vec<Star>,
    /// Planets with their moons.
    pub planets: Vec<Planet>,
}

/// Session counters, in the spirit of a generation log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorldStats {
    /// Regions generated since construction.
    pub generated_this_session: u64,
    /// Regions reclaimed since construction.
    pub evicted_this_session: u64,
}

/// Owns the live regions and the observer position that scopes them.
#[derive(Debug)]
pub struct WorldManager {
    config: WorldConfig,
    regions: HashMap<RegionKey, Region>,
    observer_x: f64,
    observer_y: f64,
    stats: WorldStats,
}

impl Default for WorldManager {
    fn default() -> Self {
        Self::new(WorldConfig::default())
    }
}

impl WorldManager {
    /// A manager over an empty universe.
    #[must_use]
    pub fn new(config: WorldConfig) -> Self {
        Self {
            config,
            regions: HashMap::new(),
            observer_x: 0.0,
            observer_y: 0.0,
            stats: WorldStats::default(),
        }
    }

    /// The configuration this universe runs under.
    #[must_use]
    pub const fn config(&self) -> &WorldConfig {
        &self.config
    }

    /// Moves the observer and reconciles regions: authored sites in
    /// range first, then the 3×3 tile neighborhood, then retention of
    /// whatever the observer can still see.
    pub fn advance(&mut self, x: f64, y: f64, now_ms: f64) {
        self.observer_x = x;
        self.observer_y = y;
        let window = self.config.render_distance();

        #[allow(clippy::cast_precision_loss)]
        for site in &SPECIAL_SITES {
            let (sx, sy) = (site.x as f64, site.y as f64);
            if within(sx, sy, x, y, window) && !self.regions.contains_key(&RegionKey::Site(site.name))
            {
                let factory = BodyFactory::new(&self.config);
                let (planet, stars) = factory.named_system(site.name, sx, sy, now_ms);
                debug!(site = site.name, "generated authored site");
                self.regions
                    .insert(RegionKey::Site(site.name), Region { stars, planets: vec![planet] });
                self.stats.generated_this_session += 1;
            }
        }

        self.ensure_neighborhood(x, y, now_ms);

        let mut evicted = 0u64;
        self.regions.retain(|key, region| {
            if *key == RegionKey::Destination {
                return true;
            }
            let keep = region.stars.iter().any(|s| within(s.x, s.y, x, y, window))
                || region.planets.iter().any(|p| within(p.x, p.y, x, y, window));
            if !keep {
                evicted += 1;
            }
            keep
        });
        if evicted > 0 {
            debug!(evicted, "reclaimed out-of-window regions");
        }
        self.stats.evicted_this_session += evicted;
    }

    /// Generates one tile from scratch. Pure: depends only on the tile
    /// coordinate, the configuration, and the blink epoch.
    #[must_use]
    pub fn generate_tile(&self, tx: i64, ty: i64, now_ms: f64) -> Region {
        let factory = BodyFactory::new(&self.config);
        let stars = factory.tile_stars(tx, ty, now_ms);
        let planets = (0..self.config.planets_per_tile())
            .map(|i| factory.chunk_planet(tx, ty, i))
            .collect();
        Region { stars, planets }
    }

    /// Clears the universe, pins a named planet at the given host
    /// coordinates, and pre-populates the neighborhood around it.
    pub fn request_named_destination(
        &mut self,
        name: &str,
        x: f64,
        y: f64,
        now_ms: f64,
    ) -> WorldResult<&Planet> {
        let name = name.trim();
        if name.is_empty() {
            return Err(WorldError::EmptyDestinationName);
        }
        if !x.is_finite() || !y.is_finite() {
            return Err(WorldError::NonFiniteCoordinate { x, y });
        }

        self.stats.evicted_this_session += self.regions.len() as u64;
        self.regions.clear();
        self.observer_x = x;
        self.observer_y = y;
        info!(name, x, y, "destination set, universe reset");

        let factory = BodyFactory::new(&self.config);
        let planet = factory.named_planet(name, x, y);
        self.stats.generated_this_session += 1;

        self.ensure_neighborhood(x, y, now_ms);

        let region = self.regions.entry(RegionKey::Destination).or_default();
        region.stars.clear();
        region.planets = vec![planet];
        Ok(&region.planets[0])
    }

    /// The pinned destination planet, if one was requested.
    #[must_use]
    pub fn destination(&self) -> Option<&Planet> {
        self.regions.get(&RegionKey::Destination).and_then(|r| r.planets.first())
    }

    /// Mutable access to the pinned destination, for scanning.
    pub fn destination_mut(&mut self) -> Option<&mut Planet> {
        self.regions.get_mut(&RegionKey::Destination).and_then(|r| r.planets.first_mut())
    }

    /// Toggles and reschedules every star whose blink deadline passed.
    pub fn update_star_blinks(&mut self, now_ms: f64) {
        for region in self.regions.values_mut() {
            for star in &mut region.stars {
                if now_ms > star.next_blink_ms {
                    star.visible = !star.visible;
                    star.next_blink_ms = now_ms + star.blink_interval_ms;
                }
            }
        }
    }

    /// Stars within the render window of the last observer position.
    pub fn active_stars(&self) -> impl Iterator<Item = &Star> {
        let (ox, oy, w) = (self.observer_x, self.observer_y, self.config.render_distance());
        self.regions
            .values()
            .flat_map(|r| &r.stars)
            .filter(move |s| within(s.x, s.y, ox, oy, w))
    }

    /// Mutable variant of [`Self::active_stars`].
    pub fn active_stars_mut(&mut self) -> impl Iterator<Item = &mut Star> {
        let (ox, oy, w) = (self.observer_x, self.observer_y, self.config.render_distance());
        self.regions
            .values_mut()
            .flat_map(|r| &mut r.stars)
            .filter(move |s| within(s.x, s.y, ox, oy, w))
    }

    /// Planets within the render window of the last observer position.
    pub fn active_planets(&self) -> impl Iterator<Item = &Planet> {
        let (ox, oy, w) = (self.observer_x, self.observer_y, self.config.render_distance());
        self.regions
            .values()
            .flat_map(|r| &r.planets)
            .filter(move |p| within(p.x, p.y, ox, oy, w))
    }

    /// Mutable variant of [`Self::active_planets`], for scanning.
    pub fn active_planets_mut(&mut self) -> impl Iterator<Item = &mut Planet> {
        let (ox, oy, w) = (self.observer_x, self.observer_y, self.config.render_distance());
        self.regions
            .values_mut()
            .flat_map(|r| &mut r.planets)
            .filter(move |p| within(p.x, p.y, ox, oy, w))
    }

    /// Count of active stars.
    #[must_use]
    pub fn star_count(&self) -> usize {
        self.active_stars().count()
    }

    /// Count of active planets.
    #[must_use]
    pub fn planet_count(&self) -> usize {
        self.active_planets().count()
    }

    /// Count of live regions, active or not.
    #[must_use]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Session counters.
    #[must_use]
    pub const fn stats(&self) -> WorldStats {
        self.stats
    }

    fn ensure_neighborhood(&mut self, x: f64, y: f64, now_ms: f64) {
        let center = TileCoord::containing(x, y, self.config.tile_size);
        for dy in -1..=1 {
            for dx in -1..=1 {
                let tile = TileCoord { x: center.x + dx, y: center.y + dy };
                let key = RegionKey::Tile(tile);
                if !self.regions.contains_key(&key) {
                    let region = self.generate_tile(tile.x, tile.y, now_ms);
                    debug!(
                        tx = tile.x,
                        ty = tile.y,
                        stars = region.stars.len(),
                        planets = region.planets.len(),
                        "generated tile"
                    );
                    self.regions.insert(key, region);
                    self.stats.generated_this_session += 1;
                }
            }
        }
    }
}

/// Per-axis window test, strict on both axes.
#[inline]
fn within(ex: f64, ey: f64, ox: f64, oy: f64, window: f64) -> bool {
    (ex - ox).abs() < window && (ey - oy).abs() < window
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tile_containing_floors_negative_positions() {
        assert_eq!(TileCoord::containing(-0.5, -0.5, 1000), TileCoord { x: -1, y: -1 });
        assert_eq!(TileCoord::containing(999.9, 0.0, 1000), TileCoord { x: 0, y: 0 });
        assert_eq!(TileCoord::containing(-1000.0, 2500.0, 1000), TileCoord { x: -1, y: 2 });
    }

    #[test]
    fn first_advance_at_origin_reaches_both_sites() {
        // Per-axis deltas to (1000, 69) and (1050, 69) are all under the
        // 2000-unit window, so the origin sees 9 tiles plus both sites.
        let mut manager = WorldManager::default();
        manager.advance(0.0, 0.0, 0.0);
        assert_eq!(manager.region_count(), 11);
        assert_eq!(manager.stats().generated_this_session, 11);
    }

    #[test]
    fn deep_space_advance_generates_only_tiles() {
        let mut manager = WorldManager::default();
        manager.advance(100_000.0, 100_000.0, 0.0);
        assert_eq!(manager.region_count(), 9);
    }

    #[test]
    fn active_views_respect_the_window() {
        let mut manager = WorldManager::default();
        manager.advance(0.0, 0.0, 0.0);
        let window = manager.config().render_distance();
        assert!(manager.star_count() > 0);
        for star in manager.active_stars() {
            assert!(star.x.abs() < window && star.y.abs() < window);
        }
        for planet in manager.active_planets() {
            assert!(planet.x.abs() < window && planet.y.abs() < window);
        }
    }

    #[test]
    fn destination_rejects_bad_input() {
        let mut manager = WorldManager::default();
        assert_eq!(
            manager.request_named_destination("   ", 0.0, 0.0, 0.0),
            Err(WorldError::EmptyDestinationName)
        );
        assert!(matches!(
            manager.request_named_destination("Mao", f64::NAN, 0.0, 0.0),
            Err(WorldError::NonFiniteCoordinate { .. })
        ));
    }

    #[test]
    fn destination_survives_departure() {
        let mut manager = WorldManager::default();
        let name = manager
            .request_named_destination("Veridian-7", -5000.0, 7777.0, 0.0)
            .map(|p| p.id.clone())
            .expect("valid destination");
        assert_eq!(name, "planet-Veridian-7");

        manager.advance(50_000.0, 50_000.0, 0.0);
        manager.advance(-50_000.0, 0.0, 0.0);
        let pinned = manager.destination().expect("destination pinned");
        assert_eq!(pinned.designation.as_deref(), Some("Veridian-7"));
    }

    #[test]
    fn blink_deadlines_toggle_and_reschedule() {
        let mut manager = WorldManager::default();
        manager.advance(100_000.0, 100_000.0, 0.0);

        // Every deadline lands within one interval of the epoch, so a
        // far-future sweep toggles everything once.
        manager.update_star_blinks(1.0e9);
        assert!(manager.active_stars().all(|s| !s.visible));

        // Deadlines are now rescheduled past the sweep time.
        manager.update_star_blinks(1.0e9 + 1.0);
        assert!(manager.active_stars().all(|s| !s.visible));
    }
}
