//! TerminalRenderer: flushes a surface to a real terminal.
//!
//! Frames for a puzzle this size are small, so the diffing granularity is a
//! whole row: rows that match the previous frame are skipped, everything else
//! is repainted left to right with batched style changes.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::surface::{Rgb, Style, Surface};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<Surface>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next present to repaint everything.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a frame, swapping it into internal state.
    ///
    /// Callers keep one `Surface` and pass it in every frame; the previous
    /// frame is swapped back out so neither side clones.
    pub fn present(&mut self, frame: &mut Surface) -> Result<()> {
        let repaint_all = match &self.last {
            Some(prev) => prev.width() != frame.width() || prev.height() != frame.height(),
            None => true,
        };

        if repaint_all {
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut style_cache: Option<Style> = None;
        for y in 0..frame.height() {
            let unchanged = !repaint_all
                && self
                    .last
                    .as_ref()
                    .is_some_and(|prev| prev.row(y) == frame.row(y));
            if unchanged {
                continue;
            }
            self.paint_row(frame, y, &mut style_cache)?;
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        match self.last.as_mut() {
            Some(prev) => std::mem::swap(prev, frame),
            None => self.last = Some(frame.clone()),
        }
        Ok(())
    }

    fn paint_row(&mut self, frame: &Surface, y: u16, style_cache: &mut Option<Style>) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, y))?;
        let Some(row) = frame.row(y) else {
            return Ok(());
        };
        for glyph in row {
            if *style_cache != Some(glyph.style) {
                self.apply_style(glyph.style)?;
                *style_cache = Some(glyph.style);
            }
            self.stdout.queue(Print(glyph.ch))?;
        }
        Ok(())
    }

    fn apply_style(&mut self, style: Style) -> Result<()> {
        self.stdout
            .queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.stdout
            .queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        if style.bold {
            self.stdout.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.stdout.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Rows of `next` that differ from `prev`, assuming equal dimensions.
#[cfg(test)]
fn changed_rows(prev: &Surface, next: &Surface) -> Vec<u16> {
    (0..next.height())
        .filter(|y| prev.row(*y) != next.row(*y))
        .collect()
}
