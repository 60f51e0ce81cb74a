//! Pixel buffer for the LED matrix.
//!
//! One `Rgb` per LED, row-major, same coordinates as the board.

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Number of LEDs on the matrix
pub const LED_COUNT: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const OFF: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn is_off(&self) -> bool {
        *self == Self::OFF
    }

    /// Halve every channel (used for the frozen board after a loss)
    pub fn dimmed(&self) -> Self {
        Self::new(self.r / 2, self.g / 2, self.b / 2)
    }
}

/// Frame for the 7x10 matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    pixels: [Rgb; LED_COUNT],
}

impl PixelBuffer {
    pub fn new() -> Self {
        Self {
            pixels: [Rgb::OFF; LED_COUNT],
        }
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    #[inline(always)]
    fn idx(x: i8, y: i8) -> Option<usize> {
        if x < 0 || y < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn get(&self, x: i8, y: i8) -> Option<Rgb> {
        Self::idx(x, y).map(|i| self.pixels[i])
    }

    /// Set one LED; out-of-range coordinates are ignored
    pub fn set(&mut self, x: i8, y: i8, color: Rgb) {
        if let Some(i) = Self::idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn clear(&mut self) {
        self.pixels.fill(Rgb::OFF);
    }

    /// Number of LEDs that are lit
    pub fn lit_count(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_off()).count()
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}
