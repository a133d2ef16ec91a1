//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Full-frame redraws only: every draw repaints the whole buffer from the
//! top-left, batching consecutive same-style cells into single styled runs.
//! The board is small and redraws are event-driven, so diffing frames would
//! buy nothing here.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Rgb, Style};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    /// Switch the terminal into game mode (raw, alternate screen, no cursor).
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    /// Restore the terminal. Callers should invoke this even when the game
    /// loop returns an error.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint the whole framebuffer.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_full_into(fb, &mut self.buf)?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
///
/// Builds a sequence of crossterm commands without touching stdout, so it
/// can be exercised in tests against a plain byte buffer.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current_style: Option<Style> = None;
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            if current_style != Some(cell.style) {
                apply_style_into(out, cell.style)?;
                current_style = Some(cell.style);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn apply_style_into(out: &mut Vec<u8>, style: Style) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::Cell;

    #[test]
    fn test_encode_produces_output_for_every_cell() {
        let mut fb = FrameBuffer::new(3, 2);
        let style = Style::default();
        fb.set(0, 0, Cell { ch: 'A', style });
        fb.set(2, 1, Cell { ch: 'B', style });

        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();

        let text = String::from_utf8_lossy(&out);
        assert!(text.contains('A'));
        assert!(text.contains('B'));
    }

    #[test]
    fn test_style_runs_are_batched() {
        // A uniform buffer should emit exactly one style change.
        let fb = FrameBuffer::new(8, 1);
        let mut out = Vec::new();
        encode_full_into(&fb, &mut out).unwrap();

        let text = String::from_utf8_lossy(&out).into_owned();
        // 38;2 introduces a truecolor foreground; the trailing reset adds no
        // second one.
        let fg_changes = text.matches("38;2").count();
        assert_eq!(fg_changes, 1);
    }

    #[test]
    fn test_rgb_conversion() {
        let rgb = Rgb::new(10, 20, 30);
        assert_eq!(
            rgb_to_color(rgb),
            Color::Rgb {
                r: 10,
                g: 20,
                b: 30
            }
        );
    }
}
