//! # Colors and Palettes
//!
//! 24-bit colors with channel-wise mixing, plus the two fixed palettes
//! every ordinary body draws from. Palette entries are data, not
//! algorithm: duplicates are intentional because list length feeds the
//! uniform index draw.

use crate::seed::Mulberry32;

/// Probability that a palette draw lands in the pastel table.
const PASTEL_WEIGHT: f64 = 0.8;

/// A 24-bit RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Creates a color from channels.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from a packed `0xRRGGBB` word.
    #[inline]
    #[must_use]
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as u8,
            g: ((hex >> 8) & 0xFF) as u8,
            b: (hex & 0xFF) as u8,
        }
    }

    /// Returns the packed `0xRRGGBB` word.
    #[inline]
    #[must_use]
    pub const fn to_hex(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Linear interpolation per channel.
    ///
    /// Weight 1.0 yields `self`, weight 0.0 yields `other`.
    #[must_use]
    pub fn mix(self, other: Self, weight: f64) -> Self {
        #[inline]
        fn lerp(a: u8, b: u8, w: f64) -> u8 {
            let v = f64::from(a) * w + f64::from(b) * (1.0 - w);
            // Round half up, clamped to the channel range.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            {
                (v + 0.5).floor().clamp(0.0, 255.0) as u8
            }
        }
        Self {
            r: lerp(self.r, other.r, weight),
            g: lerp(self.g, other.g, weight),
            b: lerp(self.b, other.b, weight),
        }
    }

    /// Draws a color from the weighted palette pair: 80% pastel,
    /// 20% bright. Consumes exactly two draws from the stream.
    #[must_use]
    pub fn random(stream: &mut Mulberry32) -> Self {
        if stream.chance(PASTEL_WEIGHT) {
            PASTELS[stream.in_range(0, PASTELS.len() as u32) as usize]
        } else {
            BRIGHTS[stream.in_range(0, BRIGHTS.len() as u32) as usize]
        }
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.to_hex())
    }
}

/// The pastel palette (80% of ordinary draws).
pub const PASTELS: [Rgb; 105] = [
    Rgb::from_hex(0xFFD1DC), Rgb::from_hex(0xFFECB8), Rgb::from_hex(0xB5EAD7), Rgb::from_hex(0xC7CEEA), Rgb::from_hex(0xE2F0CB),
    Rgb::from_hex(0xFFDAC1), Rgb::from_hex(0xB5EAD7), Rgb::from_hex(0xFF9AA2), Rgb::from_hex(0xFFB7B2), Rgb::from_hex(0xFFDAC1),
    Rgb::from_hex(0xE2F0CB), Rgb::from_hex(0xB5EAD7), Rgb::from_hex(0xC7CEEA), Rgb::from_hex(0xF8B195), Rgb::from_hex(0xF67280),
    Rgb::from_hex(0xC06C84), Rgb::from_hex(0x6C5B7B), Rgb::from_hex(0x355C7D), Rgb::from_hex(0xA8E6CE), Rgb::from_hex(0xDCEDC2),
    Rgb::from_hex(0xFFD3B5), Rgb::from_hex(0xFFAAA6), Rgb::from_hex(0xFF8C94), Rgb::from_hex(0xF6CD61), Rgb::from_hex(0x4DD0E1),
    Rgb::from_hex(0xFFEE58), Rgb::from_hex(0xFFCA28), Rgb::from_hex(0xFFA000), Rgb::from_hex(0xFF8F00), Rgb::from_hex(0xFF6F00),
    Rgb::from_hex(0xE0BBE4), Rgb::from_hex(0x957DAD), Rgb::from_hex(0xD291BC), Rgb::from_hex(0xFFC72C), Rgb::from_hex(0xFDCA40),
    Rgb::from_hex(0xF79C81), Rgb::from_hex(0xFC94AF), Rgb::from_hex(0xBDE0FE), Rgb::from_hex(0xA2D2FF), Rgb::from_hex(0xFFEDD8),
    Rgb::from_hex(0xC3F8FA), Rgb::from_hex(0xFFFD98), Rgb::from_hex(0xFFD1DC), Rgb::from_hex(0xFFECB8), Rgb::from_hex(0xB5EAD7),
    Rgb::from_hex(0xFFDAC1), Rgb::from_hex(0xB5EAD7), Rgb::from_hex(0xFF9AA2), Rgb::from_hex(0xFFB7B2), Rgb::from_hex(0xFFDAC1),
    Rgb::from_hex(0xE2F0CB), Rgb::from_hex(0xB5EAD7), Rgb::from_hex(0xC7CEEA), Rgb::from_hex(0xF8B195), Rgb::from_hex(0xF67280),
    Rgb::from_hex(0xC06C84), Rgb::from_hex(0x6C5B7B), Rgb::from_hex(0x355C7D), Rgb::from_hex(0xA8E6CE), Rgb::from_hex(0xDCEDC2),
    Rgb::from_hex(0xFFD3B5), Rgb::from_hex(0xFFAAA6), Rgb::from_hex(0xFF8C94), Rgb::from_hex(0xF6CD61), Rgb::from_hex(0x4DD0E1),
    Rgb::from_hex(0xFFEE58), Rgb::from_hex(0xFFCA28), Rgb::from_hex(0xFFA000), Rgb::from_hex(0xFF8F00), Rgb::from_hex(0xFF6F00),
    Rgb::from_hex(0xE0BBE4), Rgb::from_hex(0x957DAD), Rgb::from_hex(0xD291BC), Rgb::from_hex(0xFFC72C), Rgb::from_hex(0xFDCA40),
    Rgb::from_hex(0xF79C81), Rgb::from_hex(0xFC94AF), Rgb::from_hex(0xBDE0FE), Rgb::from_hex(0xA2D2FF), Rgb::from_hex(0xFFEDD8),
    Rgb::from_hex(0xC3F8FA), Rgb::from_hex(0xFFFD98), Rgb::from_hex(0xFFB347), Rgb::from_hex(0xFFCC99), Rgb::from_hex(0xFFDDC1),
    Rgb::from_hex(0xFFEEBB), Rgb::from_hex(0xFFFACD), Rgb::from_hex(0xF0FFF0), Rgb::from_hex(0xE6E6FA), Rgb::from_hex(0xFFE4E1),
    Rgb::from_hex(0xF5F5DC), Rgb::from_hex(0xFAFAD2), Rgb::from_hex(0xF0F8FF), Rgb::from_hex(0xF8F8FF), Rgb::from_hex(0xF5F5F5),
    Rgb::from_hex(0xFFF5EE), Rgb::from_hex(0xF5FFFA), Rgb::from_hex(0xF0FFFF), Rgb::from_hex(0xF0F0F0), Rgb::from_hex(0xFFF0F5),
    Rgb::from_hex(0xFAF0E6), Rgb::from_hex(0xFFF8DC), Rgb::from_hex(0xFFFAF0), Rgb::from_hex(0xFFFFF0), Rgb::from_hex(0xF8F0E6),
];

/// The bright palette (20% of ordinary draws).
pub const BRIGHTS: [Rgb; 55] = [
    Rgb::from_hex(0xFF5733), Rgb::from_hex(0x33FF57), Rgb::from_hex(0x3357FF), Rgb::from_hex(0xF3FF33), Rgb::from_hex(0xFF33F3),
    Rgb::from_hex(0x33FFF3), Rgb::from_hex(0x8A2BE2), Rgb::from_hex(0xFF6347), Rgb::from_hex(0x7CFC00), Rgb::from_hex(0xFFD700),
    Rgb::from_hex(0xFF8C00), Rgb::from_hex(0xE6E6FA), Rgb::from_hex(0x40E0D0), Rgb::from_hex(0xF08080), Rgb::from_hex(0x90EE90),
    Rgb::from_hex(0xFF69B4), Rgb::from_hex(0x00FFFF), Rgb::from_hex(0xFFA07A), Rgb::from_hex(0x98FB98), Rgb::from_hex(0xDDA0DD),
    Rgb::from_hex(0xFFA500), Rgb::from_hex(0x7B68EE), Rgb::from_hex(0x00FA9A), Rgb::from_hex(0xFF4500), Rgb::from_hex(0xDA70D6),
    Rgb::from_hex(0xFF00FF), Rgb::from_hex(0x1E90FF), Rgb::from_hex(0xFFDAB9), Rgb::from_hex(0x00BFFF), Rgb::from_hex(0xFF1493),
    Rgb::from_hex(0x7FFFD4), Rgb::from_hex(0xFF00FF), Rgb::from_hex(0xFF7F50), Rgb::from_hex(0x6495ED), Rgb::from_hex(0xDC143C),
    Rgb::from_hex(0x00FFFF), Rgb::from_hex(0x0000FF), Rgb::from_hex(0x8B0000), Rgb::from_hex(0x9932CC), Rgb::from_hex(0x8FBC8F),
    Rgb::from_hex(0x483D8B), Rgb::from_hex(0x2F4F4F), Rgb::from_hex(0x00CED1), Rgb::from_hex(0x9400D3), Rgb::from_hex(0xFF8C00),
    Rgb::from_hex(0xE9967A), Rgb::from_hex(0x8A2BE2), Rgb::from_hex(0xA52A2A), Rgb::from_hex(0xDEB887), Rgb::from_hex(0x5F9EA0),
    Rgb::from_hex(0x7FFF00), Rgb::from_hex(0xD2691E), Rgb::from_hex(0xFF7F50), Rgb::from_hex(0x6495ED), Rgb::from_hex(0xFFF8DC),
];
