//! TerminalRenderer: previews the LED pixel buffer in a real terminal.
//!
//! Each LED is two terminal columns wide to roughly keep the matrix square.
//! After the first frame only LEDs that changed are redrawn.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{PixelBuffer, Rgb};

/// Glyph for a lit LED
const LED_ON: &str = "██";
/// Glyph for a dark LED
const LED_OFF: &str = "··";

/// Terminal column/row of the top-left LED (inside the border)
const ORIGIN: (u16, u16) = (1, 1);

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<PixelBuffer>,
    last_status: String,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            last_status: String::new(),
            buf: Vec::with_capacity(4 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

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

    /// Force the next draw to be a full redraw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame plus a one-line status under the matrix.
    pub fn draw(&mut self, pb: &PixelBuffer, status: &str) -> Result<()> {
        self.buf.clear();
        match self.last.as_ref() {
            Some(prev) => encode_diff_into(prev, pb, &mut self.buf)?,
            None => encode_full_into(pb, &mut self.buf)?,
        }
        if self.last.is_none() || self.last_status != status {
            encode_status_into(pb, status, &mut self.buf)?;
            self.last_status.clear();
            self.last_status.push_str(status);
        }
        self.flush_buf()?;

        match self.last.as_mut() {
            Some(prev) => prev.clone_from(pb),
            None => self.last = Some(pb.clone()),
        }
        Ok(())
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

/// Encode a full-frame redraw (border and every LED) into `out`.
pub fn encode_full_into(pb: &PixelBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(SetForegroundColor(Color::Grey))?;

    let inner_w = pb.width() as usize * 2;
    let horizontal = "─".repeat(inner_w);
    out.queue(cursor::MoveTo(0, 0))?;
    out.queue(Print(format!("┌{}┐", horizontal)))?;
    for y in 0..pb.height() as u16 {
        out.queue(cursor::MoveTo(0, ORIGIN.1 + y))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(ORIGIN.0 + inner_w as u16, ORIGIN.1 + y))?;
        out.queue(Print("│"))?;
    }
    out.queue(cursor::MoveTo(0, ORIGIN.1 + pb.height() as u16))?;
    out.queue(Print(format!("└{}┘", horizontal)))?;

    for y in 0..pb.height() as i8 {
        for x in 0..pb.width() as i8 {
            encode_led_into(pb, x, y, out)?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode only the LEDs that differ between `prev` and `next`.
pub fn encode_diff_into(prev: &PixelBuffer, next: &PixelBuffer, out: &mut Vec<u8>) -> Result<()> {
    for_each_changed_led(prev, next, |x, y| encode_led_into(next, x, y, out))?;
    out.queue(ResetColor)?;
    Ok(())
}

fn encode_status_into(pb: &PixelBuffer, status: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, ORIGIN.1 + pb.height() as u16 + 1))?;
    out.queue(terminal::Clear(terminal::ClearType::UntilNewLine))?;
    out.queue(ResetColor)?;
    out.queue(Print(status))?;
    Ok(())
}

fn encode_led_into(pb: &PixelBuffer, x: i8, y: i8, out: &mut Vec<u8>) -> Result<()> {
    let color = pb.get(x, y).unwrap_or_default();
    out.queue(cursor::MoveTo(
        ORIGIN.0 + (x as u16) * 2,
        ORIGIN.1 + y as u16,
    ))?;
    if color.is_off() {
        out.queue(SetForegroundColor(Color::DarkGrey))?;
        out.queue(Print(LED_OFF))?;
    } else {
        out.queue(SetForegroundColor(rgb_to_color(color)))?;
        out.queue(Print(LED_ON))?;
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

fn for_each_changed_led(
    prev: &PixelBuffer,
    next: &PixelBuffer,
    mut f: impl FnMut(i8, i8) -> Result<()>,
) -> Result<()> {
    for y in 0..next.height() as i8 {
        for x in 0..next.width() as i8 {
            if prev.get(x, y) != next.get(x, y) {
                f(x, y)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_frames_have_no_changed_leds() {
        let a = PixelBuffer::new();
        let mut n = 0;
        for_each_changed_led(&a, &a.clone(), |_, _| {
            n += 1;
            Ok(())
        })
        .unwrap();
        assert_eq!(n, 0);
    }

    #[test]
    fn changed_leds_are_reported_in_row_order() {
        let a = PixelBuffer::new();
        let mut b = PixelBuffer::new();
        b.set(3, 2, Rgb::new(9, 9, 9));
        b.set(1, 5, Rgb::new(9, 9, 9));

        let mut changed = Vec::new();
        for_each_changed_led(&a, &b, |x, y| {
            changed.push((x, y));
            Ok(())
        })
        .unwrap();
        assert_eq!(changed, vec![(3, 2), (1, 5)]);
    }

    #[test]
    fn diff_of_identical_frames_is_tiny() {
        let a = PixelBuffer::new();
        let mut full = Vec::new();
        let mut diff = Vec::new();
        encode_full_into(&a, &mut full).unwrap();
        encode_diff_into(&a, &a, &mut diff).unwrap();
        assert!(diff.len() < full.len());
    }
}
