//! Glyph grid that the game view paints into and the renderer flushes.
//!
//! Storage is one row-major `Vec<Glyph>`. All writes clip to the buffer, so
//! callers can paint at any coordinate without bounds checks of their own.

use crate::types::Color;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Color> for Rgb {
    fn from(color: Color) -> Self {
        let (r, g, b) = color.rgb();
        Self::new(r, g, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl GlyphStyle {
    /// Light grey on black, no attributes
    pub const PLAIN: GlyphStyle = GlyphStyle::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0));

    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const fn glyph(self, ch: char) -> Glyph {
        Glyph { ch, style: self }
    }
}

impl Default for GlyphStyle {
    fn default() -> Self {
        Self::PLAIN
    }
}

/// One terminal column of one terminal row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub style: GlyphStyle,
}

impl Glyph {
    pub const BLANK: Glyph = GlyphStyle::PLAIN.glyph(' ');
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            glyphs: Vec::new(),
        };
        fb.reset(width, height, Glyph::BLANK);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Take the given size and paint every glyph with `fill`.
    ///
    /// The allocation is kept, so a buffer reused at a steady terminal size
    /// never reallocates.
    pub fn reset(&mut self, width: u16, height: u16, fill: Glyph) {
        self.width = width;
        self.height = height;
        self.glyphs.clear();
        self.glyphs.resize(width as usize * height as usize, fill);
    }

    /// Row `y`, or an empty slice below the last row.
    pub fn row(&self, y: u16) -> &[Glyph] {
        match self.row_range(y) {
            Some(range) => &self.glyphs[range],
            None => &[],
        }
    }

    fn row_mut(&mut self, y: u16) -> &mut [Glyph] {
        match self.row_range(y) {
            Some(range) => &mut self.glyphs[range],
            None => &mut [],
        }
    }

    fn row_range(&self, y: u16) -> Option<std::ops::Range<usize>> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(start..start + self.width as usize)
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        self.row(y).get(x as usize).copied()
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: GlyphStyle) {
        if let Some(slot) = self.row_mut(y).get_mut(x as usize) {
            *slot = style.glyph(ch);
        }
    }

    /// Write `s` left to right from (x, y); the part past the right edge is dropped.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: GlyphStyle) {
        let row = self.row_mut(y);
        let start = (x as usize).min(row.len());
        for (slot, ch) in row[start..].iter_mut().zip(s.chars()) {
            *slot = style.glyph(ch);
        }
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: GlyphStyle) {
        let glyph = style.glyph(ch);
        let bottom = y.saturating_add(h).min(self.height);
        for row_y in y..bottom {
            let row = self.row_mut(row_y);
            let start = (x as usize).min(row.len());
            let end = (x as usize + w as usize).min(row.len());
            row[start..end].fill(glyph);
        }
    }

    /// Characters of row `y` as a `String` (tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }
}
