//! # Celestial Bodies
//!
//! Stars, planets and moons, and the factory that derives them from
//! composed seeds. A body is defined entirely by its seed's draw
//! sequence; the factory's job is to compose the right seed and pull
//! the draws in the canonical order.

use voidfield_core::{hash_name, Mulberry32, Pattern, Seed};

use crate::config::WorldConfig;
use crate::pattern::PatternSynthesizer;
use crate::registry::is_special_name;
use crate::scan::{scan_body, ScanRecord};

/// Orbital angular rate shared by every moon, radians per millisecond.
pub const MOON_ORBIT_RATE: f64 = 0.0005;

/// A background point of light.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    /// World x coordinate.
    pub x: f64,
    /// World y coordinate.
    pub y: f64,
    /// Rendered glyph, `'.'` or `'*'`.
    pub glyph: char,
    /// Brightness tier, 1..=4.
    pub brightness: u8,
    /// Milliseconds between visibility toggles.
    pub blink_interval_ms: f64,
    /// Deadline of the next toggle.
    pub next_blink_ms: f64,
    /// Current visibility.
    pub visible: bool,
}

/// A moon orbiting a planet.
#[derive(Debug, Clone, PartialEq)]
pub struct Moon {
    /// Stable identity string.
    pub id: String,
    /// Generation seed.
    pub seed: Seed,
    /// Diameter in cells.
    pub size: u32,
    /// Orbit radius in world units.
    pub orbit_radius: f64,
    /// Orbit phase at time zero.
    pub orbit_phase: f64,
    /// Orbital plane inclination, radians.
    pub inclination: f64,
    /// Synthesized surface.
    pub pattern: Pattern,
    scan: Option<ScanCache>,
}

impl Moon {
    /// Orbital position at the given host time, around a parent at
    /// `(px, py)`. Presentation helper; generation state never moves.
    #[must_use]
    pub fn position_at(&self, px: f64, py: f64, time_ms: f64) -> (f64, f64) {
        let angle = self.orbit_phase + time_ms * MOON_ORBIT_RATE;
        let x = px + self.orbit_radius * angle.cos() * self.inclination.cos();
        let y = py + self.orbit_radius * angle.sin();
        (x, y)
    }

    /// Scan data for this moon, computed on first request and cached.
    pub fn scan(&mut self) -> &ScanRecord {
        let seed = hash_name(&self.id);
        let cache = match self.scan.take() {
            Some(cache) if cache.seed == seed => cache,
            _ => ScanCache { seed, hint: None, record: scan_body(seed, true, None) },
        };
        &self.scan.insert(cache).record
    }
}

/// A planet, with its moons and surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    /// Stable identity string.
    pub id: String,
    /// Generation seed.
    pub seed: Seed,
    /// World x coordinate.
    pub x: f64,
    /// World y coordinate.
    pub y: f64,
    /// Diameter in cells.
    pub size: u32,
    /// Synthesized surface.
    pub pattern: Pattern,
    /// Moons, possibly empty.
    pub moons: Vec<Moon>,
    /// Authored designation ("Mao", a destination name); `None` for
    /// emergent bodies.
    pub designation: Option<String>,
    scan: Option<ScanCache>,
}

impl Planet {
    /// Scan data for this planet, computed on first request and cached.
    ///
    /// Designated bodies scan through their designation so authored
    /// overrides (life, climate, species) apply wherever the body is
    /// encountered; emergent bodies scan through their identity string.
    pub fn scan(&mut self) -> &ScanRecord {
        let (seed, hint) = match &self.designation {
            Some(name) => (hash_name(name), Some(name.clone())),
            None => (hash_name(&self.id), None),
        };
        let cache = match self.scan.take() {
            Some(cache) if cache.seed == seed && cache.hint == hint => cache,
            _ => {
                let record = scan_body(seed, false, hint.as_deref());
                ScanCache { seed, hint, record }
            }
        };
        &self.scan.insert(cache).record
    }
}

#[derive(Debug, Clone, PartialEq)]
struct ScanCache {
    seed: Seed,
    hint: Option<String>,
    record: ScanRecord,
}

/// Derives bodies from composed seeds under a fixed configuration.
pub struct BodyFactory<'a> {
    config: &'a WorldConfig,
    synthesizer: PatternSynthesizer,
}

impl<'a> BodyFactory<'a> {
    /// A factory producing unrotated surface snapshots.
    #[must_use]
    pub const fn new(config: &'a WorldConfig) -> Self {
        Self { config, synthesizer: PatternSynthesizer::new() }
    }

    /// An emergent planet: the `index`-th planet of tile `(tx, ty)`.
    ///
    /// Seed is `hash("{tx},{ty},{index}")`; the stream then draws
    /// position, size, the 50% moon gate, moons, and finally the
    /// surface pattern.
    #[must_use]
    pub fn chunk_planet(&self, tx: i64, ty: i64, index: u32) -> Planet {
        let seed = hash_name(&format!("{tx},{ty},{index}"));
        let mut stream = Mulberry32::new(seed);

        let tile = f64::from(self.config.tile_size);
        #[allow(clippy::cast_precision_loss)]
        let (start_x, start_y) = (tx as f64 * tile, ty as f64 * tile);
        let x = start_x + stream.next() * tile;
        let y = start_y + stream.next() * tile;
        let size = stream.in_range(self.config.planet_size_min, self.config.planet_size_max);

        let has_moons = stream.next() > 0.5;
        let moons = if has_moons {
            let count = stream.in_range(1, self.config.max_moons + 1);
            self.build_moons(seed, size, count, None, &format!("moon-{tx}-{ty}-{index}"))
        } else {
            Vec::new()
        };

        let pattern = self.synthesizer.synthesize(size, false, None, &mut stream);

        Planet {
            id: format!("planet-{tx}-{ty}-{index}"),
            seed,
            x,
            y,
            size,
            pattern,
            moons,
            designation: None,
            scan: None,
        }
    }

    /// An authored planet seeded from its designation.
    ///
    /// The moon gate draw is always consumed but forced open for the
    /// special designations, so a named body is identical however it is
    /// reached.
    #[must_use]
    pub fn named_planet(&self, name: &str, x: f64, y: f64) -> Planet {
        self.named_planet_with_stream(name, x, y).0
    }

    /// An authored planet plus the ambient stars scattered around it,
    /// drawn from the continuation of the planet's stream.
    #[must_use]
    pub fn named_system(&self, name: &str, x: f64, y: f64, now_ms: f64) -> (Planet, Vec<Star>) {
        let (planet, mut stream) = self.named_planet_with_stream(name, x, y);

        let mut stars = Vec::with_capacity(self.config.system_star_count as usize);
        for _ in 0..self.config.system_star_count {
            let angle = stream.angle();
            let distance = stream.next() * 100.0 + 50.0;
            stars.push(star_at(
                x + angle.cos() * distance,
                y + angle.sin() * distance,
                &mut stream,
                now_ms,
            ));
        }

        (planet, stars)
    }

    /// The background stars of one tile, drawn from the tile's own
    /// stream.
    #[must_use]
    pub fn tile_stars(&self, tx: i64, ty: i64, now_ms: f64) -> Vec<Star> {
        let seed = hash_name(&format!("{tx},{ty}"));
        let mut stream = Mulberry32::new(seed);

        let tile = f64::from(self.config.tile_size);
        #[allow(clippy::cast_precision_loss)]
        let (start_x, start_y) = (tx as f64 * tile, ty as f64 * tile);

        let count = self.config.stars_per_tile();
        let mut stars = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let x = start_x + stream.next() * tile;
            let y = start_y + stream.next() * tile;
            stars.push(star_at(x, y, &mut stream, now_ms));
        }
        stars
    }

    fn named_planet_with_stream(&self, name: &str, x: f64, y: f64) -> (Planet, Mulberry32) {
        let seed = hash_name(name);
        let mut stream = Mulberry32::new(seed);

        let size = stream.in_range(self.config.planet_size_min, self.config.planet_size_max);

        let special = is_special_name(name);
        let mut has_moons = stream.next() > 0.5;
        if special {
            has_moons = true;
        }

        let moons = if has_moons {
            let count = stream.in_range(1, self.config.max_moons + 1);
            let pattern_override = special.then_some(name);
            self.build_moons(seed, size, count, pattern_override, &format!("moon-{name}"))
        } else {
            Vec::new()
        };

        let pattern = self.synthesizer.synthesize(size, false, Some(name), &mut stream);

        let planet = Planet {
            id: format!("planet-{name}"),
            seed,
            x,
            y,
            size,
            pattern,
            moons,
            designation: Some(name.to_string()),
            scan: None,
        };
        (planet, stream)
    }

    /// Moons derive from sub-seeds `hash("{parent_seed}-{m}")`, each
    /// with its own stream, so sibling moons cannot perturb each other.
    fn build_moons(
        &self,
        parent_seed: Seed,
        parent_size: u32,
        count: u32,
        pattern_override: Option<&str>,
        id_prefix: &str,
    ) -> Vec<Moon> {
        let mut moons = Vec::with_capacity(count as usize);
        for m in 0..count {
            let seed = hash_name(&format!("{parent_seed}-{m}"));
            let mut stream = Mulberry32::new(seed);

            let size = stream.in_range(self.config.moon_size_min, self.config.moon_size_max);
            let orbit_radius =
                f64::from(parent_size) / 2.0 + f64::from(size) + stream.next() * 20.0;
            let orbit_phase = stream.angle();
            let inclination = (stream.next() - 0.5) * std::f64::consts::PI / 3.0;
            let pattern = self.synthesizer.synthesize(size, true, pattern_override, &mut stream);

            moons.push(Moon {
                id: format!("{id_prefix}-{m}"),
                seed,
                size,
                orbit_radius,
                orbit_phase,
                inclination,
                pattern,
                scan: None,
            });
        }
        moons
    }
}

/// One star from the current stream position: brightness tier, glyph,
/// blink interval, and a first deadline offset into that interval.
fn star_at(x: f64, y: f64, stream: &mut Mulberry32, now_ms: f64) -> Star {
    #[allow(clippy::cast_possible_truncation)]
    let brightness = stream.in_range(1, 5) as u8;
    let glyph = if stream.next() > 0.5 { '.' } else { '*' };
    let blink_interval_ms = stream.next() * 5000.0 + 2000.0;
    let next_blink_ms = now_ms + stream.next() * blink_interval_ms;

    Star { x, y, glyph, brightness, blink_interval_ms, next_blink_ms, visible: true }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factory_config() -> WorldConfig {
        WorldConfig::default()
    }

    #[test]
    fn chunk_planet_is_deterministic() {
        let config = factory_config();
        let factory = BodyFactory::new(&config);
        let a = factory.chunk_planet(3, -2, 7);
        let b = factory.chunk_planet(3, -2, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn chunk_planet_lands_inside_its_tile() {
        let config = factory_config();
        let factory = BodyFactory::new(&config);
        for index in 0..40 {
            let p = factory.chunk_planet(3, -2, index);
            assert!((3000.0..4000.0).contains(&p.x), "x {} escaped tile", p.x);
            assert!((-2000.0..-1000.0).contains(&p.y), "y {} escaped tile", p.y);
            assert!((15..22).contains(&p.size), "size {} out of range", p.size);
            assert!(p.moons.len() <= 6);
        }
    }

    #[test]
    fn moons_orbit_outside_the_parent() {
        let config = factory_config();
        let factory = BodyFactory::new(&config);
        for index in 0..40 {
            let p = factory.chunk_planet(0, 0, index);
            for moon in &p.moons {
                assert!((2..10).contains(&moon.size));
                assert!(moon.orbit_radius >= f64::from(p.size) / 2.0 + f64::from(moon.size));
                assert!(moon.orbit_radius < f64::from(p.size) / 2.0 + f64::from(moon.size) + 20.0);
                assert!((0.0..std::f64::consts::TAU).contains(&moon.orbit_phase));
                assert!(moon.inclination.abs() <= std::f64::consts::PI / 6.0);
            }
        }
    }

    #[test]
    fn special_designations_always_have_moons() {
        let config = factory_config();
        let factory = BodyFactory::new(&config);
        for name in ["Mao", "Mo", "mao", "MO"] {
            let p = factory.named_planet(name, 0.0, 0.0);
            assert!(!p.moons.is_empty(), "{name} lost its moons");
            assert_eq!(p.designation.as_deref(), Some(name));
        }
    }

    #[test]
    fn named_planet_matches_any_approach() {
        // Same designation, different host coordinates: identical body.
        let config = factory_config();
        let factory = BodyFactory::new(&config);
        let a = factory.named_planet("Xylos-1", 100.0, 100.0);
        let b = factory.named_planet("Xylos-1", -9999.0, 42.0);
        assert_eq!(a.seed, b.seed);
        assert_eq!(a.size, b.size);
        assert_eq!(a.pattern, b.pattern);
        assert_eq!(a.moons, b.moons);
    }

    #[test]
    fn named_system_scatters_stars_around_the_planet() {
        let config = factory_config();
        let factory = BodyFactory::new(&config);
        let (planet, stars) = factory.named_system("Mao", 1000.0, 69.0, 0.0);
        assert_eq!(planet.id, "planet-Mao");
        assert_eq!(stars.len(), 50);
        for star in &stars {
            let d = ((star.x - 1000.0).powi(2) + (star.y - 69.0).powi(2)).sqrt();
            assert!((50.0..150.0).contains(&d), "star at distance {d}");
            assert!((1..=4).contains(&star.brightness));
            assert!(star.glyph == '.' || star.glyph == '*');
            assert!((2000.0..7000.0).contains(&star.blink_interval_ms));
            assert!(star.visible);
        }
    }

    #[test]
    fn tile_star_field_is_dense_and_bounded() {
        let config = factory_config();
        let factory = BodyFactory::new(&config);
        let stars = factory.tile_stars(-1, 2, 0.0);
        assert_eq!(stars.len(), 5000);
        for star in &stars {
            assert!((-1000.0..0.0).contains(&star.x));
            assert!((2000.0..3000.0).contains(&star.y));
        }
    }

    #[test]
    fn moon_position_starts_at_its_phase() {
        let config = factory_config();
        let factory = BodyFactory::new(&config);
        let p = factory.named_planet("Mao", 10.0, 20.0);
        let moon = &p.moons[0];
        let (x, y) = moon.position_at(10.0, 20.0, 0.0);
        let expected_x =
            10.0 + moon.orbit_radius * moon.orbit_phase.cos() * moon.inclination.cos();
        let expected_y = 20.0 + moon.orbit_radius * moon.orbit_phase.sin();
        assert!((x - expected_x).abs() < 1e-12);
        assert!((y - expected_y).abs() < 1e-12);
    }

    #[test]
    fn scans_are_cached_and_stable() {
        let config = factory_config();
        let factory = BodyFactory::new(&config);
        let mut p = factory.chunk_planet(0, 0, 3);
        let first = p.scan().clone();
        let second = p.scan().clone();
        assert_eq!(first, second);
    }
}
