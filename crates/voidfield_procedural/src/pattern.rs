//! # Pattern Synthesis
//!
//! Turns a body's stream into its glyph surface. The draw order below is
//! the body's definition: every branch consumes (or skips) stream values
//! in a fixed sequence, so reordering any draw changes every universe.
//!
//! A synthesized [`Pattern`] is a static snapshot. Per-frame rotation is
//! a host-side transform; the synthesizer only carries an explicit phase
//! so hosts that want a rotated snapshot can request one.

use voidfield_core::{Cell, Mulberry32, Pattern, Rgb};

/// Glyphs a gas-giant cell or Voronoi site can draw. Entry count feeds
/// the uniform index draw; one entry is deliberately two codepoints.
pub const PLANET_GLYPHS: [&str; 12] =
    ["@", "⋮⋮", "#", "-", "•", "+", "=", "8", "~", ".", ":", "o"];

/// Crater glyph color, fixed for every body.
const CRATER_COLOR: Rgb = Rgb::from_hex(0x88_8888);

/// A circular depression stamped over any solid surface.
struct Crater {
    x: f64,
    y: f64,
    radius: f64,
}

/// A Voronoi site: solid surfaces in the [0.45, 0.60) type band shatter
/// into cells owned by their nearest site.
struct VoronoiSite {
    x: f64,
    y: f64,
    color: Rgb,
    glyph: &'static str,
}

/// Resolved surface palette.
struct Palette {
    base: Rgb,
    secondary: Rgb,
    highlight: Rgb,
}

/// Synthesizes body surfaces from deterministic streams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PatternSynthesizer {
    phase: f64,
}

impl Default for PatternSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PatternSynthesizer {
    /// A synthesizer producing unrotated snapshots.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// A synthesizer producing snapshots rotated by the given phase.
    #[inline]
    #[must_use]
    pub const fn with_phase(phase: f64) -> Self {
        Self { phase }
    }

    /// Synthesizes the surface for a body of the given diameter.
    ///
    /// `identity` carries a designation override: "Mao"/"Mo" (any case)
    /// select fixed palettes, and "Mo" forces rings even on moons. Moons
    /// otherwise never roll rings or gas-giant surfaces, and skip those
    /// two draws entirely.
    #[must_use]
    #[allow(
        clippy::too_many_lines,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_possible_wrap,
        clippy::cast_precision_loss
    )]
    pub fn synthesize(
        &self,
        size: u32,
        is_moon: bool,
        identity: Option<&str>,
        stream: &mut Mulberry32,
    ) -> Pattern {
        let sizef = f64::from(size);
        let center = sizef / 2.0;
        let max_dist_sq = center * center;

        let pattern_type = stream.next();
        let mut is_gas_giant = false;
        let mut has_rings = false;
        let mut ring_tilt = 1.0;

        if !is_moon {
            if stream.next() > 0.7 {
                has_rings = true;
                ring_tilt = 0.3 + stream.next() * 0.3;
            }
            is_gas_giant = stream.next() > 0.5;
        }

        let palette = match identity {
            Some(name) if name.eq_ignore_ascii_case("mao") => Palette {
                base: Rgb::from_hex(0xFF_C0CB),
                secondary: Rgb::from_hex(0xFF_FFFF),
                highlight: Rgb::from_hex(0xFF_FFFF),
            },
            Some(name) if name.eq_ignore_ascii_case("mo") => {
                // The icy designation always shows rings, even on moons.
                has_rings = true;
                ring_tilt = 0.4;
                Palette {
                    base: Rgb::from_hex(0xFF_FFFF),
                    secondary: Rgb::from_hex(0xE0_E0E0),
                    highlight: Rgb::from_hex(0xC0_C0C0),
                }
            }
            _ => Palette {
                base: Rgb::random(stream),
                secondary: Rgb::random(stream),
                highlight: Rgb::random(stream),
            },
        };

        let crater_count = stream.in_range(1, 6);
        let mut craters = Vec::with_capacity(crater_count as usize);
        for _ in 0..crater_count {
            craters.push(Crater {
                x: stream.next() * sizef - center,
                y: stream.next() * sizef - center,
                radius: stream.next() * (sizef / 4.0) + 1.0,
            });
        }

        let use_voronoi = !is_gas_giant && (0.45..0.6).contains(&pattern_type);
        let mut sites = Vec::new();
        if use_voronoi {
            let site_count = stream.in_range(5, 15);
            for _ in 0..site_count {
                let x = stream.next() * sizef - center;
                let y = stream.next() * sizef - center;
                let color = palette.base.mix(palette.highlight, stream.next());
                sites.push(VoronoiSite { x, y, color, glyph: random_glyph(stream) });
            }
        }

        // The multiplier draw is consumed even at phase zero so the
        // stream stays aligned for every phase.
        let rotation = self.phase * (0.5 + stream.next());
        let loop_radius = if has_rings {
            (center * 1.8).ceil() as i64
        } else {
            center.ceil() as i64
        };

        let side = (loop_radius * 2) as usize;
        let mut pattern = Pattern::empty(side, side);

        let inner_ring_sq = (center * 1.1) * (center * 1.1);
        let outer_ring_sq = (center * 1.7) * (center * 1.7);
        let (rot_sin, rot_cos) = rotation.sin_cos();

        for y in -loop_radius..loop_radius {
            for x in -loop_radius..loop_radius {
                let fx = x as f64;
                let fy = y as f64;
                let dist_sq = fx * fx + fy * fy;

                let mut on_ring = false;
                let mut ring_in_front = false;
                if has_rings {
                    let rot_x = fx * rot_cos - fy * rot_sin;
                    let rot_y = fx * rot_sin + fy * rot_cos;
                    let ellipse_y = rot_y / ring_tilt;
                    let ring_dist_sq = rot_x * rot_x + ellipse_y * ellipse_y;
                    on_ring = ring_dist_sq > inner_ring_sq && ring_dist_sq < outer_ring_sq;
                    ring_in_front = rot_y > 0.0;
                }

                let cell = if on_ring && ring_in_front {
                    ring_cell(stream, palette.highlight)
                } else if dist_sq <= max_dist_sq {
                    if is_gas_giant {
                        gas_giant_cell(
                            stream,
                            &palette,
                            pattern_type,
                            fx,
                            fy,
                            dist_sq / max_dist_sq,
                            center,
                            sizef,
                            rotation,
                        )
                    } else {
                        solid_cell(
                            stream,
                            &palette,
                            pattern_type,
                            fx,
                            fy,
                            dist_sq,
                            center,
                            sizef,
                            rotation,
                            &craters,
                            &sites,
                        )
                    }
                } else if on_ring {
                    // Behind the disk; drawn so the back arc stays visible
                    // beside it.
                    ring_cell(stream, palette.highlight)
                } else {
                    Cell::Empty
                };

                *pattern.cell_mut((x + loop_radius) as usize, (y + loop_radius) as usize) = cell;
            }
        }

        pattern
    }
}

/// Draws one glyph from [`PLANET_GLYPHS`].
fn random_glyph(stream: &mut Mulberry32) -> &'static str {
    PLANET_GLYPHS[stream.in_range(0, PLANET_GLYPHS.len() as u32) as usize]
}

/// One ring-arc cell. Consumes exactly one draw.
fn ring_cell(stream: &mut Mulberry32, highlight: Rgb) -> Cell {
    let glyph = if stream.next() > 0.6 { ":" } else { "." };
    Cell::Glyph { glyph, color: highlight }
}

/// A cell inside a gas giant's disk. Color comes from the type-selected
/// banding; the glyph is always one extra draw.
#[allow(clippy::too_many_arguments, clippy::cast_possible_truncation)]
fn gas_giant_cell(
    stream: &mut Mulberry32,
    palette: &Palette,
    pattern_type: f64,
    fx: f64,
    fy: f64,
    dist_factor: f64,
    center: f64,
    sizef: f64,
    rotation: f64,
) -> Cell {
    let angle = fy.atan2(fx) + rotation;
    let noise = stream.next() * 0.4;

    let color = if pattern_type < 0.25 {
        // Fluid bands following angle and depth.
        let value = (angle * 10.0 + dist_factor * 20.0 + noise * 3.0).sin();
        if value > 0.7 {
            palette.highlight
        } else if value > 0.4 {
            palette.secondary
        } else {
            palette.base
        }
    } else if pattern_type < 0.5 {
        // Horizontal banding.
        let band = ((fy + center + rotation * 30.0) / (sizef / 10.0)).floor() as i64;
        if band % 2 == 0 { palette.base } else { palette.secondary }
    } else if pattern_type < 0.75 {
        // Swirling turbulence.
        let value = (fx * 0.4 + fy * 0.4 + rotation * 20.0 + noise * 4.0).sin();
        if value > 0.5 {
            palette.highlight
        } else if value > 0.0 {
            palette.secondary
        } else {
            palette.base
        }
    } else {
        // Speckle.
        let value = stream.next();
        if value > 0.6 {
            palette.highlight
        } else if value > 0.3 {
            palette.secondary
        } else {
            palette.base
        }
    };

    Cell::Glyph { glyph: random_glyph(stream), color }
}

/// A cell inside a solid body's disk. Craters override everything;
/// Voronoi surfaces consume no per-cell draws at all.
#[allow(clippy::too_many_arguments, clippy::cast_possible_truncation)]
fn solid_cell(
    stream: &mut Mulberry32,
    palette: &Palette,
    pattern_type: f64,
    fx: f64,
    fy: f64,
    dist_sq: f64,
    center: f64,
    sizef: f64,
    rotation: f64,
    craters: &[Crater],
    sites: &[VoronoiSite],
) -> Cell {
    let in_crater = craters.iter().any(|c| {
        let dx = fx - c.x;
        let dy = fy - c.y;
        dx * dx + dy * dy < c.radius * c.radius
    });
    if in_crater {
        let glyph = if stream.next() > 0.7 { "o" } else { "O" };
        return Cell::Glyph { glyph, color: CRATER_COLOR };
    }

    if !sites.is_empty() {
        // Nearest site on unrotated coordinates, so cell ownership is
        // stable under phase rotation.
        let (rot_sin, rot_cos) = rotation.sin_cos();
        let unrot_x = fx * rot_cos + fy * rot_sin;
        let unrot_y = -fx * rot_sin + fy * rot_cos;

        let mut nearest = &sites[0];
        let mut nearest_dist_sq = f64::INFINITY;
        for site in sites {
            let dx = unrot_x - site.x;
            let dy = unrot_y - site.y;
            let site_dist_sq = dx * dx + dy * dy;
            if site_dist_sq < nearest_dist_sq {
                nearest_dist_sq = site_dist_sq;
                nearest = site;
            }
        }
        return Cell::Glyph { glyph: nearest.glyph, color: nearest.color };
    }

    if pattern_type < 0.15 {
        // Radial star bands.
        let angle = fy.atan2(fx) + rotation;
        let noise = stream.next() * 0.3;
        if (angle * 12.0 + noise * 2.0).sin() > 0.7 {
            let glyph = if stream.next() > 0.7 { "^" } else { "*" };
            Cell::Glyph { glyph, color: palette.base.mix(palette.highlight, 0.7) }
        } else {
            let glyph = if stream.next() > 0.7 { "#" } else { "%" };
            Cell::Glyph { glyph, color: palette.base.mix(palette.secondary, 0.5) }
        }
    } else if pattern_type < 0.45 {
        // Alternating latitude bands.
        let band = ((fy + center + rotation * 25.0) / (sizef / 12.0)).floor() as i64;
        if band % 2 == 0 {
            Cell::Glyph { glyph: "×", color: palette.base }
        } else {
            Cell::Glyph { glyph: "8", color: palette.secondary }
        }
    } else if pattern_type < 0.75 {
        // Wavy surface noise.
        let noise = stream.next() * 0.5;
        let value = (fx * 0.3 + fy * 0.3 + rotation * 15.0 + noise * 3.0).sin();
        if value > 0.5 {
            Cell::Glyph { glyph: "@", color: palette.highlight }
        } else if value > 0.0 {
            Cell::Glyph { glyph: "&", color: palette.secondary }
        } else {
            Cell::Glyph { glyph: "~", color: palette.base }
        }
    } else {
        // Spiral arms winding out from the center.
        let angle = fy.atan2(fx);
        let radius = dist_sq.sqrt();
        let spiral = (radius * 0.4 + angle * 3.0 + rotation * 10.0).sin();
        if spiral > 0.5 {
            Cell::Glyph { glyph: "#", color: palette.highlight }
        } else if spiral > 0.0 {
            Cell::Glyph { glyph: "%", color: palette.secondary }
        } else {
            Cell::Glyph { glyph: "~", color: palette.base }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voidfield_core::hash_name;

    fn stream_for(label: &str) -> Mulberry32 {
        Mulberry32::new(hash_name(label))
    }

    #[test]
    fn synthesis_is_deterministic() {
        let synth = PatternSynthesizer::new();
        for size in [2, 7, 15, 22] {
            let a = synth.synthesize(size, false, None, &mut stream_for("det"));
            let b = synth.synthesize(size, false, None, &mut stream_for("det"));
            assert_eq!(a, b, "size {size} diverged");
        }
    }

    #[test]
    fn moon_grid_is_disk_sized() {
        // Moons skip the ring draw, so the window is never expanded.
        let synth = PatternSynthesizer::new();
        for size in 2..=10u32 {
            let p = synth.synthesize(size, true, None, &mut stream_for("moon"));
            let expected = 2 * (f64::from(size) / 2.0).ceil() as usize;
            assert_eq!(p.width(), expected, "size {size}");
            assert_eq!(p.height(), expected, "size {size}");
        }
    }

    #[test]
    fn forced_rings_expand_the_grid() {
        let synth = PatternSynthesizer::new();
        for size in [15u32, 20, 22] {
            let p = synth.synthesize(size, false, Some("Mo"), &mut stream_for("ringed"));
            let expected = 2 * (f64::from(size) * 0.9).ceil() as usize;
            assert_eq!(p.width(), expected, "size {size}");
            assert_eq!(p.height(), expected, "size {size}");
        }
    }

    #[test]
    fn front_ring_overrides_the_disk() {
        // At phase zero the ring plane is unrotated: for size 20 and the
        // forced tilt 0.4, the cell (0, 5) sits inside the disk and
        // inside the front annulus, so the ring arc must win.
        let synth = PatternSynthesizer::new();
        let p = synth.synthesize(20, false, Some("mo"), &mut stream_for("front"));
        assert_eq!(p.width(), 36);
        match p.cell(18, 23) {
            Cell::Glyph { glyph, color } => {
                assert!(glyph == ":" || glyph == ".", "not a ring glyph: {glyph}");
                assert_eq!(color, Rgb::from_hex(0xC0_C0C0));
            }
            Cell::Empty => panic!("ring cell is empty"),
        }
    }

    #[test]
    fn mao_surface_stays_on_its_palette() {
        // Every pink/white mix keeps a saturated red channel, so the only
        // cell color breaking that rule is the fixed crater grey.
        let synth = PatternSynthesizer::new();
        for label in ["a", "b", "c", "d"] {
            let p = synth.synthesize(9, true, Some("Mao"), &mut stream_for(label));
            for row in p.rows() {
                for cell in row {
                    if let Cell::Glyph { color, .. } = cell {
                        assert!(
                            color.r == 255 || *color == CRATER_COLOR,
                            "foreign color {color} on a Mao moon"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn disk_is_fully_drawn() {
        let synth = PatternSynthesizer::new();
        let p = synth.synthesize(10, true, None, &mut stream_for("full"));
        let c = 5.0f64;
        for y in -5i64..5 {
            for x in -5i64..5 {
                let (fx, fy) = (x as f64, y as f64);
                if fx * fx + fy * fy <= c * c {
                    assert!(
                        p.cell((x + 5) as usize, (y + 5) as usize).is_glyph(),
                        "hole in disk at ({x}, {y})"
                    );
                }
            }
        }
    }

    #[test]
    fn phase_changes_only_rotation_sensitive_cells() {
        // Same stream, different phase: the grids share dimensions but
        // generally differ in content.
        let synth_a = PatternSynthesizer::new();
        let synth_b = PatternSynthesizer::with_phase(1.0);
        let a = synth_a.synthesize(20, false, Some("Mo"), &mut stream_for("p"));
        let b = synth_b.synthesize(20, false, Some("Mo"), &mut stream_for("p"));
        assert_eq!(a.width(), b.width());
        assert_ne!(a, b);
    }
}
