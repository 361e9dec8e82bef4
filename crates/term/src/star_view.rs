//! StarView: maps a rasterized [`Frame`] plus status lines into a terminal
//! framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Frame, Status};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Rows reserved under the grid for the status lines.
pub const STATUS_ROWS: u16 = 2;

const MARKER_GREEN: Rgb = Rgb::new(80, 250, 120);

/// Styles the star grid and overlays the marker and status lines.
#[derive(Debug, Clone, Copy)]
pub struct StarView {
    marker: CellStyle,
    status: CellStyle,
}

impl Default for StarView {
    fn default() -> Self {
        Self {
            marker: CellStyle::fg(MARKER_GREEN).bold(),
            status: CellStyle::fg(Rgb::new(200, 200, 200)),
        }
    }
}

impl StarView {
    /// Render into an existing framebuffer, resizing it to `viewport`.
    ///
    /// The grid is anchored top-left and clipped to the viewport. Status
    /// lines go directly under the grid, or over its last rows when the
    /// terminal is too short to show both.
    pub fn render_into(
        &self,
        frame: &Frame,
        status: &Status,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::default());

        let grid = &frame.grid;
        let status_y = grid
            .height()
            .min(viewport.height.saturating_sub(STATUS_ROWS));

        for (y, row) in grid.rows().enumerate().take(status_y as usize) {
            for (x, &ch) in row.iter().enumerate().take(viewport.width as usize) {
                if ch != ' ' {
                    fb.put_char(x as u16, y as u16, ch, star_style(ch));
                }
            }
        }

        let m = frame.marker;
        if m.y < status_y {
            fb.put_char(m.x, m.y, m.symbol.as_char(), self.marker);
        }

        fb.put_str(0, status_y, &status.position, self.status);
        fb.put_str(0, status_y.saturating_add(1), &status.nearest, self.status);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, frame: &Frame, status: &Status, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(frame, status, viewport, &mut fb);
        fb
    }
}

/// Brighter glyphs for nearer stars.
fn star_style(ch: char) -> CellStyle {
    match ch {
        '*' => CellStyle::fg(Rgb::new(255, 255, 240)).bold(),
        '•' => CellStyle::fg(Rgb::new(230, 230, 220)),
        '·' => CellStyle::fg(Rgb::new(170, 170, 180)),
        _ => CellStyle::fg(Rgb::new(120, 120, 140)).dim(),
    }
}
