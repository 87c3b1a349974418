//! Draw surface trait for the monochrome bitmap display
//!
//! The renderer only needs the character-framebuffer contract of the
//! original display stack: clear, draw text at a pixel position,
//! finalize (present). Everything below that (pixel format, fonts,
//! flushing) belongs to the firmware's display driver.

/// Errors a draw call can report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawError {
    /// Bus-level communication failure with the display controller
    Bus,
    /// Text placed outside the drawable area
    OutOfBounds,
}

/// Trait for the bitmap draw surface
///
/// Text may contain `\n`, which advances to the next display row at the
/// same x position.
pub trait DrawSurface {
    /// Clear the draw buffer; `reset_origin` also resets any scroll/origin
    /// state the controller keeps
    fn clear(&mut self, reset_origin: bool);

    /// Draw text with its top-left corner at pixel position (x, y)
    fn draw_text(&mut self, text: &str, x: i32, y: i32) -> Result<(), DrawError>;

    /// Present the draw buffer on the physical display
    fn finalize(&mut self);
}
