//! Snapshot → framebuffer. Pure; no terminal I/O.
//!
//! The well is a bordered 10x20 box centered in the viewport, each grid cell
//! `cell_w` x `cell_h` terminal glyphs. A key legend sits to the right when
//! there is room for it.

use crate::core::Snapshot;
use crate::fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const WELL_BG: Rgb = Rgb::new(30, 30, 40);

const BORDER: GlyphStyle = GlyphStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const EMPTY: GlyphStyle = GlyphStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
const LEGEND_TITLE: GlyphStyle = GlyphStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold();
const LEGEND_KEYS: GlyphStyle = GlyphStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);
const BANNER: GlyphStyle = GlyphStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();

/// Gap between the well and the legend, in columns
const LEGEND_GAP: u16 = 2;
/// Narrowest legend worth drawing
const LEGEND_MIN_W: u16 = 12;
/// Column of the action name relative to the legend's left edge
const LEGEND_ACTION_X: u16 = 5;

/// Key legend: (keys, action).
const CONTROLS: [(&str, &str); 5] = [
    ("←/h", "left"),
    ("→/l", "right"),
    ("↓/j", "drop"),
    ("↑/k", "rotate"),
    ("q", "quit"),
];

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

/// Screen placement of the well (border included) and the legend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    left: u16,
    top: u16,
    width: u16,
    height: u16,
    legend_x: Option<u16>,
}

impl Layout {
    fn right(&self) -> u16 {
        self.left + self.width - 1
    }

    fn bottom(&self) -> u16 {
        self.top + self.height - 1
    }
}

pub struct GameView {
    /// Terminal columns per grid cell
    cell_w: u16,
    /// Terminal rows per grid cell
    cell_h: u16,
}

impl Default for GameView {
    /// Two columns per cell keeps cells roughly square in most fonts.
    fn default() -> Self {
        Self::new(2, 1)
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Size of the bordered well in terminal glyphs.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            BOARD_WIDTH as u16 * self.cell_w + 2,
            BOARD_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    fn layout(&self, viewport: Viewport) -> Layout {
        let (width, height) = self.frame_size();
        let left = viewport.width.saturating_sub(width) / 2;
        let top = viewport.height.saturating_sub(height) / 2;
        let legend_x = left.saturating_add(width).saturating_add(LEGEND_GAP);
        Layout {
            left,
            top,
            width,
            height,
            legend_x: (viewport.width.saturating_sub(legend_x) >= LEGEND_MIN_W).then_some(legend_x),
        }
    }

    /// Paint `snap` into `fb`, resizing it to the viewport.
    ///
    /// Reusing one buffer across frames avoids reallocating at a steady size.
    pub fn render_into(&self, snap: &Snapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height, Glyph::BLANK);
        let layout = self.layout(viewport);

        draw_border(fb, &layout);
        for (y, row) in snap.grid.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                self.paint_cell(fb, &layout, x as i8, y as i8, cell);
            }
        }
        if let Some(active) = snap.active {
            for (x, y) in active.cells() {
                self.paint_cell(fb, &layout, x, y, Some(active.color));
            }
        }

        if let Some(x) = layout.legend_x {
            draw_legend(fb, x, layout.top);
        }
        if snap.game_over() {
            draw_banner(fb, &layout, "GAME OVER");
        }
    }

    pub fn render(&self, snap: &Snapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(0, 0);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Paint one grid cell; coordinates outside the grid are skipped.
    fn paint_cell(&self, fb: &mut FrameBuffer, layout: &Layout, x: i8, y: i8, cell: Cell) {
        if !(0..BOARD_WIDTH as i8).contains(&x) || !(0..BOARD_HEIGHT as i8).contains(&y) {
            return;
        }
        let (ch, style) = match cell {
            Some(color) => ('█', GlyphStyle::new(color.into(), WELL_BG).bold()),
            None => ('·', EMPTY),
        };
        let px = layout.left + 1 + x as u16 * self.cell_w;
        let py = layout.top + 1 + y as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: &Layout) {
    let (left, top) = (layout.left, layout.top);
    let (right, bottom) = (layout.right(), layout.bottom());
    let inner_w = layout.width - 2;
    let inner_h = layout.height - 2;

    fb.fill_rect(left + 1, top, inner_w, 1, '─', BORDER);
    fb.fill_rect(left + 1, bottom, inner_w, 1, '─', BORDER);
    fb.fill_rect(left, top + 1, 1, inner_h, '│', BORDER);
    fb.fill_rect(right, top + 1, 1, inner_h, '│', BORDER);
    for (x, y, ch) in [
        (left, top, '┌'),
        (right, top, '┐'),
        (left, bottom, '└'),
        (right, bottom, '┘'),
    ] {
        fb.put_char(x, y, ch, BORDER);
    }
}

fn draw_legend(fb: &mut FrameBuffer, x: u16, top: u16) {
    fb.put_str(x, top, "CONTROLS", LEGEND_TITLE);
    for (y, (keys, action)) in (top.saturating_add(1)..).zip(CONTROLS) {
        fb.put_str(x, y, keys, LEGEND_KEYS);
        fb.put_str(x + LEGEND_ACTION_X, y, action, LEGEND_KEYS.dim());
    }
}

/// Centered text on the middle row of the well.
fn draw_banner(fb: &mut FrameBuffer, layout: &Layout, text: &str) {
    let text_w = text.chars().count() as u16;
    let x = layout.left + layout.width.saturating_sub(text_w) / 2;
    fb.put_str(x, layout.top + layout.height / 2, text, BANNER);
}
