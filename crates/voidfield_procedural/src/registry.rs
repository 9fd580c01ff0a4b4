//! # Special Body Registry
//!
//! Two authored systems exist at fixed coordinates; everything else in
//! the universe is emergent. The registry is the single source of truth
//! for where they are and what they are called.

/// A fixed, authored system in the otherwise emergent universe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpecialSite {
    /// World x coordinate of the system's planet.
    pub x: i64,
    /// World y coordinate of the system's planet.
    pub y: i64,
    /// The planet's designation. Also its generation seed source.
    pub name: &'static str,
}

/// The authored sites.
pub static SPECIAL_SITES: [SpecialSite; 2] = [
    SpecialSite { x: 1000, y: 69, name: "Mao" },
    SpecialSite { x: 1050, y: 69, name: "Mo" },
];

/// Looks a site up by designation, case-insensitively.
#[must_use]
pub fn site_named(name: &str) -> Option<&'static SpecialSite> {
    SPECIAL_SITES.iter().find(|s| s.name.eq_ignore_ascii_case(name))
}

/// Looks a site up by exact coordinates.
#[must_use]
pub fn site_at(x: i64, y: i64) -> Option<&'static SpecialSite> {
    SPECIAL_SITES.iter().find(|s| s.x == x && s.y == y)
}

/// True for the designations that force moons, fixed palettes and scan
/// overrides ("Mao" and "Mo", any case).
#[must_use]
pub fn is_special_name(name: &str) -> bool {
    site_named(name).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_name_ignores_case() {
        assert_eq!(site_named("mao").map(|s| (s.x, s.y)), Some((1000, 69)));
        assert_eq!(site_named("MO").map(|s| (s.x, s.y)), Some((1050, 69)));
        assert!(site_named("Xylos").is_none());
    }

    #[test]
    fn lookup_by_coordinates_is_exact() {
        assert_eq!(site_at(1000, 69).map(|s| s.name), Some("Mao"));
        assert_eq!(site_at(1050, 69).map(|s| s.name), Some("Mo"));
        assert!(site_at(1000, 70).is_none());
    }
}
