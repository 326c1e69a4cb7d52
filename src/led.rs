//! LED strip hardware abstraction.

use palette::Srgb;

/// Trait for abstracting an addressable LED strip.
///
/// Implement this for your driver (WS2812 over RMT, SPI, PIO, etc.). Pixel
/// writes are buffered until [`show`](LedStrip::show) commits the frame.
pub trait LedStrip {
    /// Sets the buffered color of the pixel at `index`.
    ///
    /// Indices past the end of the strip should be ignored. Handle any
    /// hardware errors internally - this method cannot fail.
    fn set_pixel_color(&mut self, index: usize, color: Srgb<u8>);

    /// Pushes the buffered frame to the LEDs.
    fn show(&mut self);
}
