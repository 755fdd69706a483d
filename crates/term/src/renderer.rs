//! Terminal output: raw mode, the alternate screen and frame flushing.
//!
//! The first frame, and the first after a resize or
//! [`TerminalRenderer::invalidate`], is painted row by row. Later frames only
//! rewrite the runs of glyphs that changed since the frame on screen. Every
//! frame is wrapped in a synchronized update so the terminal never shows a
//! half-drawn grid.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

pub struct TerminalRenderer {
    out: io::Stdout,
    /// Frame currently on screen; `None` forces a full repaint.
    shown: Option<FrameBuffer>,
    bytes: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            shown: None,
            bytes: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch to raw mode and the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.bytes.clear();
        queue!(
            self.bytes,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        self.write_out()
    }

    /// Restore the terminal to the state `enter` found it in.
    pub fn exit(&mut self) -> Result<()> {
        self.bytes.clear();
        queue!(
            self.bytes,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        self.write_out()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next draw (terminal resized or clobbered).
    pub fn invalidate(&mut self) {
        self.shown = None;
    }

    /// Put `fb` on screen.
    ///
    /// `fb` is swapped with the frame that was on screen, so the caller gets
    /// a spare buffer back to paint the next frame into.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.bytes.clear();
        queue!(self.bytes, terminal::BeginSynchronizedUpdate)?;

        let spare = match self.shown.take() {
            Some(shown) if same_size(&shown, fb) => {
                encode_diff_into(&shown, fb, &mut self.bytes)?;
                shown
            }
            shown => {
                encode_full_into(fb, &mut self.bytes)?;
                shown.unwrap_or_else(|| FrameBuffer::new(0, 0))
            }
        };

        queue!(self.bytes, terminal::EndSynchronizedUpdate)?;
        self.shown = Some(std::mem::replace(fb, spare));
        self.write_out()
    }

    fn write_out(&mut self) -> Result<()> {
        self.out.write_all(&self.bytes)?;
        self.out.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Queue a full repaint of `fb` into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    queue!(out, terminal::Clear(terminal::ClearType::All))?;
    let mut pen = Pen::new(out);
    for y in 0..fb.height() {
        pen.move_to(0, y)?;
        pen.glyphs(fb.row(y))?;
    }
    pen.finish()?;
    Ok(())
}

/// Queue only the glyphs of `next` that differ from `prev`.
///
/// Frames of different sizes fall back to [`encode_full_into`]. Identical
/// frames queue nothing.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if !same_size(prev, next) {
        return encode_full_into(next, out);
    }
    let mut pen = Pen::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        let start = x as usize;
        pen.move_to(x, y)?;
        pen.glyphs(&next.row(y)[start..start + len as usize])?;
    }
    pen.finish()?;
    Ok(())
}

fn same_size(a: &FrameBuffer, b: &FrameBuffer) -> bool {
    a.width() == b.width() && a.height() == b.height()
}

/// Queues glyphs, emitting style escapes only when the style changes.
struct Pen<'a> {
    out: &'a mut Vec<u8>,
    style: Option<GlyphStyle>,
}

impl<'a> Pen<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(x, y))
    }

    fn glyphs(&mut self, glyphs: &[Glyph]) -> io::Result<()> {
        for glyph in glyphs {
            if self.style != Some(glyph.style) {
                queue_style(self.out, glyph.style)?;
                self.style = Some(glyph.style);
            }
            queue!(self.out, Print(glyph.ch))?;
        }
        Ok(())
    }

    /// Reset attributes if any style was emitted.
    fn finish(self) -> io::Result<()> {
        if self.style.is_none() {
            return Ok(());
        }
        queue!(self.out, ResetColor, SetAttribute(Attribute::Reset))
    }
}

fn queue_style(out: &mut Vec<u8>, style: GlyphStyle) -> io::Result<()> {
    queue!(
        out,
        SetAttribute(Attribute::Reset),
        SetForegroundColor(style.fg.into()),
        SetBackgroundColor(style.bg.into())
    )?;
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

/// Horizontal runs `(x, y, len)` where two same-sized frames differ.
fn changed_runs<'a>(prev: &'a FrameBuffer, next: &'a FrameBuffer) -> ChangedRuns<'a> {
    ChangedRuns {
        prev,
        next,
        x: 0,
        y: 0,
    }
}

struct ChangedRuns<'a> {
    prev: &'a FrameBuffer,
    next: &'a FrameBuffer,
    x: usize,
    y: u16,
}

impl Iterator for ChangedRuns<'_> {
    type Item = (u16, u16, u16);

    fn next(&mut self) -> Option<Self::Item> {
        while self.y < self.next.height() {
            let old = self.prev.row(self.y);
            let new = self.next.row(self.y);
            let differs = |x: usize| old.get(x) != new.get(x);

            let mut x = self.x;
            while x < new.len() && !differs(x) {
                x += 1;
            }
            if x < new.len() {
                let start = x;
                while x < new.len() && differs(x) {
                    x += 1;
                }
                self.x = x;
                return Some((start as u16, self.y, (x - start) as u16));
            }

            self.x = 0;
            self.y += 1;
        }
        None
    }
}
