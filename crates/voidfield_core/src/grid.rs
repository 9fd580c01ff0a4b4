//! # Glyph Grid
//!
//! The cell grid a body surface is synthesized into. A grid is pure
//! data: the synthesizer fills it, the host decides how to paint it.

use crate::color::Rgb;

/// One cell of a synthesized surface.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// Nothing drawn here; the host shows background.
    #[default]
    Empty,
    /// A colored glyph.
    Glyph {
        /// The character(s) to paint. Some glyphs are multi-codepoint.
        glyph: &'static str,
        /// Foreground color.
        color: Rgb,
    },
}

impl Cell {
    /// True if the cell carries a glyph.
    #[inline]
    #[must_use]
    pub const fn is_glyph(self) -> bool {
        matches!(self, Self::Glyph { .. })
    }
}

/// A row-major rectangular grid of [`Cell`]s.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pattern {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Pattern {
    /// Creates an all-empty grid.
    #[must_use]
    pub fn empty(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width * height],
        }
    }

    /// Grid width in cells.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    /// The cell at `(x, y)`, row-major, origin top-left.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        self.cells[y * self.width + x]
    }

    /// Mutable access to the cell at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is outside the grid.
    #[inline]
    pub fn cell_mut(&mut self, x: usize, y: usize) -> &mut Cell {
        assert!(x < self.width && y < self.height, "cell ({x}, {y}) out of bounds");
        &mut self.cells[y * self.width + x]
    }

    /// Iterates rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Count of non-empty cells.
    #[must_use]
    pub fn glyph_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_glyph()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_grid_has_no_glyphs() {
        let p = Pattern::empty(8, 4);
        assert_eq!(p.width(), 8);
        assert_eq!(p.height(), 4);
        assert_eq!(p.glyph_count(), 0);
        assert_eq!(p.rows().count(), 4);
    }

    #[test]
    fn cell_mut_writes_through() {
        let mut p = Pattern::empty(3, 3);
        *p.cell_mut(1, 2) = Cell::Glyph {
            glyph: "#",
            color: Rgb::from_hex(0x888888),
        };
        assert!(p.cell(1, 2).is_glyph());
        assert_eq!(p.glyph_count(), 1);
        assert_eq!(p.cell(2, 1), Cell::Empty);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn out_of_bounds_read_panics() {
        let p = Pattern::empty(2, 2);
        let _ = p.cell(2, 0);
    }
}
