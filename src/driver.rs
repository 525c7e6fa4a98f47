//! Graphics driver handle

use crate::color::Rgba8;
use crate::pixfmt::{unpack_pixel, PixelFormat};

/// Graphics driver state backing hardware and client surfaces
///
/// Resolves the framebuffer, pitch and pixel format that hardware drawing
/// targets. Passed explicitly to [crate::Dc] constructors so tests can
/// substitute a synthetic framebuffer; a driver without a framebuffer
/// models a pure proxy target that has no addressable pixel store, on
/// which every drawing operation is a no-op.
#[derive(Debug)]
pub struct Driver {
    /// Pixel encoding of the framebuffer
    pub format: PixelFormat,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Bytes per framebuffer row
    pub pitch: usize,
    /// The framebuffer, if this driver has an addressable one
    pub framebuffer: Option<Vec<u8>>,
}

impl Driver {
    /// Driver with a synthetic, zeroed framebuffer
    pub fn new(format: PixelFormat, width: i32, height: i32) -> Self {
        if width <= 0 || height <= 0 {
            panic!("Cannot create driver with 0 width or height");
        }
        let pitch = width as usize * format.bytes_per_pixel();
        Driver {
            format,
            width,
            height,
            pitch,
            framebuffer: Some(vec![0u8; pitch * height as usize]),
        }
    }
    /// Driver without an addressable pixel store
    pub fn proxy(format: PixelFormat, width: i32, height: i32) -> Self {
        let pitch = width as usize * format.bytes_per_pixel();
        Driver {
            format,
            width,
            height,
            pitch,
            framebuffer: None,
        }
    }
    pub fn bits_per_pixel(&self) -> u8 {
        self.format.bits_per_pixel()
    }
    /// Read back framebuffer pixel (`x`, `y`) as 8-bit channels
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Rgba8> {
        let fb = self.framebuffer.as_ref()?;
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        let bytes = self.format.bytes_per_pixel();
        let off = y as usize * self.pitch + x as usize * bytes;
        Some(unpack_pixel(self.format, &fb[off..off + bytes]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn driver_framebuffer() {
        let drv = Driver::new(PixelFormat::Rgb888, 4, 4);
        assert_eq!(drv.pitch, 16);
        assert_eq!(drv.bits_per_pixel(), 32);
        assert_eq!(drv.get_pixel(0, 0), Some(Rgba8::opaque(0, 0, 0)));
        assert_eq!(drv.get_pixel(4, 0), None);

        let proxy = Driver::proxy(PixelFormat::Rgb565, 4, 4);
        assert_eq!(proxy.get_pixel(0, 0), None);
    }
}
