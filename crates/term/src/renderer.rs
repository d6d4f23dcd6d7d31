//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Draws by diffing the incoming frame against the previously presented
//! one and repainting only the changed runs of each row.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
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

    /// Force the next present to be a full redraw (e.g. after a terminal
    /// resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Present a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame; the
    /// renderer diffs against the previous frame, then swaps buffers so
    /// the caller reuses the old allocation without cloning.
    pub fn present(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        if self.last.is_none() {
            self.last = Some(FrameBuffer::new(fb.width(), fb.height()));
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let mut prev = self.last.take().unwrap();
        if prev.width() != fb.width() || prev.height() != fb.height() {
            // Size changed: repaint everything against a blank previous
            // frame of the right size.
            prev.resize(fb.width(), fb.height());
            prev.clear('\0', CellStyle::default());
            self.stdout
                .queue(terminal::Clear(terminal::ClearType::All))?;
        }

        let next: &FrameBuffer = fb;
        let stdout = &mut self.stdout;
        let mut current_style: Option<CellStyle> = None;
        for_each_changed_run(&prev, next, |x, y, len| {
            stdout.queue(cursor::MoveTo(x, y))?;
            for dx in 0..len {
                let cell = next.get(x + dx, y).unwrap_or_default();
                if current_style != Some(cell.style) {
                    apply_style(stdout, cell.style)?;
                    current_style = Some(cell.style);
                }
                stdout.queue(Print(cell.ch))?;
            }
            Ok(())
        })?;

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;

        // Swap current into prev so the next frame diffs without cloning.
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn apply_style(stdout: &mut io::Stdout, style: CellStyle) -> Result<()> {
    stdout.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    stdout.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    stdout.queue(SetAttribute(Attribute::Reset))?;
    if style.bold {
        stdout.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        stdout.queue(SetAttribute(Attribute::Dim))?;
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

/// Invoke `f(x, y, len)` for every horizontal run of cells that differs
/// between the two equally sized frames.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    debug_assert_eq!((prev.width(), prev.height()), (next.width(), next.height()));

    let w = next.width();
    let h = next.height();

    for y in 0..h {
        let mut x = 0;
        while x < w {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }

            let start = x;
            x += 1;
            while x < w && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            f(start, y, x - start)?;
        }
    }

    Ok(())
}
