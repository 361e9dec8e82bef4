//! Rasterizer: composes projected stars and the player marker into a grid.
//!
//! Stars are written in iteration order. With the default
//! [`OverdrawPolicy::IterationOrder`] the last star written to a cell wins,
//! even when an earlier star in that cell was nearer.
//! [`OverdrawPolicy::NearestWins`] is the depth-tested alternative.
//!
//! The player marker is always drawn last and replaces whatever star shares
//! its cell.

use crate::error::{FieldError, FieldResult};
use crate::projection::Projection;
use crate::types::{MarkerSymbol, StarSymbol, BLANK};

/// How overlapping stars in one cell are resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverdrawPolicy {
    /// Last star processed wins. No depth test.
    #[default]
    IterationOrder,
    /// Nearest star wins; ties keep the earlier star.
    NearestWins,
}

/// Width x height character buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<char>,
    // Per-cell depth of the current occupant, used by `NearestWins`.
    depth: Vec<f64>,
}

impl Grid {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK; len],
            depth: vec![f64::INFINITY; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Reset every cell to blank.
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
        self.depth.fill(f64::INFINITY);
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    fn idx_checked(&self, x: u16, y: u16) -> FieldResult<usize> {
        self.idx(x, y).ok_or_else(|| {
            FieldError::invariant_violation(format!(
                "cell ({}, {}) outside {}x{} grid",
                x, y, self.width, self.height
            ))
        })
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    /// Write a cell. Out-of-range coordinates are an invariant violation.
    pub fn put(&mut self, x: u16, y: u16, ch: char) -> FieldResult<()> {
        let i = self.idx_checked(x, y)?;
        self.cells[i] = ch;
        Ok(())
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[char]> + '_ {
        self.cells.chunks(self.width.max(1) as usize)
    }

    pub fn to_lines(&self) -> Vec<String> {
        self.rows().map(|row| row.iter().collect()).collect()
    }
}

/// Where the marker ended up and which glyph it uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkerCell {
    pub x: u16,
    pub y: u16,
    pub symbol: MarkerSymbol,
}

/// A finished frame: the grid plus the marker cell, so the display can style
/// the marker as the topmost layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub grid: Grid,
    pub marker: MarkerCell,
}

impl Frame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            grid: Grid::new(width, height),
            marker: MarkerCell {
                x: 0,
                y: 0,
                symbol: MarkerSymbol::Level,
            },
        }
    }
}

/// Symbol for a star at `distance` from the origin in a field of `field_size`.
pub fn star_symbol(distance: f64, field_size: f64) -> StarSymbol {
    let max_distance = field_size * 3f64.sqrt();
    StarSymbol::from_normalized(distance / max_distance)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Rasterizer {
    policy: OverdrawPolicy,
}

impl Rasterizer {
    pub fn new(policy: OverdrawPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> OverdrawPolicy {
        self.policy
    }

    /// Compose stars and marker into an existing frame.
    ///
    /// The frame's grid is cleared first. Reusing one frame across calls
    /// keeps the hot path allocation-free.
    pub fn rasterize_into(
        &self,
        stars: &[Projection],
        field_size: f64,
        marker: Projection,
        marker_symbol: MarkerSymbol,
        frame: &mut Frame,
    ) -> FieldResult<()> {
        let grid = &mut frame.grid;
        grid.clear();

        for star in stars {
            let i = grid.idx_checked(star.x, star.y)?;
            if self.policy == OverdrawPolicy::NearestWins && star.depth >= grid.depth[i] {
                continue;
            }
            grid.cells[i] = star_symbol(star.depth, field_size).as_char();
            grid.depth[i] = star.depth;
        }

        grid.put(marker.x, marker.y, marker_symbol.as_char())?;
        frame.marker = MarkerCell {
            x: marker.x,
            y: marker.y,
            symbol: marker_symbol,
        };
        Ok(())
    }

    pub fn rasterize(
        &self,
        width: u16,
        height: u16,
        stars: &[Projection],
        field_size: f64,
        marker: Projection,
        marker_symbol: MarkerSymbol,
    ) -> FieldResult<Frame> {
        let mut frame = Frame::new(width, height);
        self.rasterize_into(stars, field_size, marker, marker_symbol, &mut frame)?;
        Ok(frame)
    }
}
