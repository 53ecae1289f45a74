//! BoardView: maps the pixel canvas into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The square canvas is shown as `side` columns by `side / 2` rows, centred in
//! the viewport. Each terminal cell carries two vertically stacked pixels as an
//! upper half block (`▀`): foreground is the top pixel, background the bottom
//! one. Typical glyphs are about twice as tall as wide, so the board stays
//! square on screen.

use crate::canvas::Canvas;
use crate::fb::{CellStyle, FrameBuffer};
use crate::types::Rgb;

const HALF_BLOCK: char = '▀';

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

/// How canvas pixels are reduced to one terminal sub-cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Filter {
    /// Average of every covered pixel.
    #[default]
    Linear,
    /// The pixel at the centre of the covered area.
    Nearest,
}

/// Where the board lands inside a viewport, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardArea {
    pub x: u16,
    pub y: u16,
    /// Board width in columns; also its height in half-block pixels.
    pub side: u16,
}

impl BoardArea {
    pub fn rows(&self) -> u16 {
        self.side / 2
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        column >= self.x
            && column < self.x + self.side
            && row >= self.y
            && row < self.y + self.rows()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardView {
    filter: Filter,
}

impl BoardView {
    pub fn new(filter: Filter) -> Self {
        Self { filter }
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    /// Board placement for `viewport`, `None` if it is too small to show
    /// anything.
    pub fn area(&self, viewport: Viewport) -> Option<BoardArea> {
        let side = viewport.width.min(viewport.height.saturating_mul(2)) & !1;
        if side == 0 {
            return None;
        }
        Some(BoardArea {
            x: (viewport.width - side) / 2,
            y: (viewport.height - side / 2) / 2,
            side,
        })
    }

    /// Render the canvas into a fresh framebuffer.
    pub fn render(&self, canvas: &Canvas, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(canvas, viewport, &mut fb);
        fb
    }

    /// Render the canvas into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, canvas: &Canvas, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let Some(area) = self.area(viewport) else {
            return;
        };
        let side = u32::from(area.side);

        for row in 0..area.rows() {
            let top = 2 * u32::from(row);
            let (ty0, ty1) = span(top, side, canvas.height());
            let (by0, by1) = span(top + 1, side, canvas.height());
            for col in 0..area.side {
                let (x0, x1) = span(u32::from(col), side, canvas.width());
                let style = CellStyle {
                    fg: self.sample(canvas, x0, x1, ty0, ty1),
                    bg: self.sample(canvas, x0, x1, by0, by1),
                };
                fb.set(area.x + col, area.y + row, style.into_cell(HALF_BLOCK));
            }
        }
    }

    /// Logical pixel under the centre of terminal cell (column, row).
    ///
    /// Cells outside the board map to `None`.
    pub fn to_logical(
        &self,
        canvas_width: u32,
        canvas_height: u32,
        viewport: Viewport,
        column: u16,
        row: u16,
    ) -> Option<(i32, i32)> {
        let area = self.area(viewport)?;
        if !area.contains(column, row) {
            return None;
        }
        let side = u64::from(area.side);
        let dx = u64::from(column - area.x);
        let dy = u64::from(row - area.y);
        let x = (2 * dx + 1) * u64::from(canvas_width) / (2 * side);
        let y = (2 * dy + 1) * u64::from(canvas_height) / side;
        Some((x as i32, y as i32))
    }

    fn sample(&self, canvas: &Canvas, x0: u32, x1: u32, y0: u32, y1: u32) -> Rgb {
        match self.filter {
            Filter::Nearest => canvas
                .pixel((x0 + x1) / 2, (y0 + y1) / 2)
                .unwrap_or_default(),
            Filter::Linear => {
                let (mut r, mut g, mut b, mut n) = (0u32, 0u32, 0u32, 0u32);
                for y in y0..y1 {
                    for x in x0..x1 {
                        if let Some(px) = canvas.pixel(x, y) {
                            r += u32::from(px.r);
                            g += u32::from(px.g);
                            b += u32::from(px.b);
                            n += 1;
                        }
                    }
                }
                if n == 0 {
                    return Rgb::default();
                }
                Rgb::new((r / n) as u8, (g / n) as u8, (b / n) as u8)
            }
        }
    }
}

/// Pixel range `[start, end)` covered by slot `i` of `slots` over `len` pixels.
/// Always at least one pixel wide.
#[inline(always)]
fn span(i: u32, slots: u32, len: u32) -> (u32, u32) {
    let start = (u64::from(i) * u64::from(len) / u64::from(slots)) as u32;
    let end = (u64::from(i + 1) * u64::from(len) / u64::from(slots)) as u32;
    (start, end.max(start + 1))
}
