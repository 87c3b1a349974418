//! SSD1306 OLED draw surface
//!
//! Implements the core `DrawSurface` contract over a buffered
//! embedded-graphics SSD1306. Text is drawn in a 6x10 character cell
//! grid with character-framebuffer semantics: long lines wrap at the
//! right edge, `\n` advances a row.

use embedded_graphics::{
    mono_font::{ascii::FONT_6X10, MonoTextStyle},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};
use embedded_hal::i2c::I2c;
use ssd1306::{mode::BufferedGraphicsMode, prelude::*, I2CDisplayInterface, Ssd1306};

use aither_core::traits::{DrawError, DrawSurface};

/// Panel dimensions in pixels
const WIDTH: i32 = 128;
const HEIGHT: i32 = 64;

/// Character cell of FONT_6X10
const CHAR_W: i32 = 6;
const LINE_H: i32 = 10;

pub struct Oled<I2C> {
    display: Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
}

impl<I2C: I2c> Oled<I2C> {
    /// Bring up the panel; failure here is fatal for the display task
    pub fn new(i2c: I2C) -> Result<Self, DrawError> {
        let interface = I2CDisplayInterface::new(i2c);
        let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        display.init().map_err(|_| DrawError::Bus)?;
        Ok(Self { display })
    }
}

impl<I2C: I2c> DrawSurface for Oled<I2C> {
    fn clear(&mut self, _reset_origin: bool) {
        // Buffered mode keeps no origin state; a clear is a clear
        self.display.clear_buffer();
    }

    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DrawError> {
        if !(0..WIDTH).contains(&x) || !(0..HEIGHT).contains(&y) {
            return Err(DrawError::OutOfBounds);
        }

        let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
        let mut cursor_x = x;
        let mut cursor_y = y;

        for ch in text.chars() {
            if ch == '\n' {
                cursor_x = x;
                cursor_y += LINE_H;
                continue;
            }
            if cursor_x + CHAR_W > WIDTH {
                cursor_x = 0;
                cursor_y += LINE_H;
            }
            if cursor_y >= HEIGHT {
                // Off the bottom; drop the rest like a character framebuffer
                break;
            }

            let mut buf = [0u8; 4];
            let glyph: &str = ch.encode_utf8(&mut buf);
            // Infallible on the buffered target
            let _ = Text::with_baseline(glyph, Point::new(cursor_x, cursor_y), style, Baseline::Top)
                .draw(&mut self.display);

            cursor_x += CHAR_W;
        }

        Ok(())
    }

    fn finalize(&mut self) {
        // A failed flush is transient; the next cycle presents again
        let _ = self.display.flush();
    }
}
