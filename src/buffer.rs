//! Off-screen pixel buffers

use crate::color::Rgba8;
use crate::pixfmt::{unpack_pixel, PixelFormat};

/// Off-screen drawing buffer
///
/// Owns its pixel store. Data is row-major; rows are `pitch` bytes apart.
#[derive(Debug)]
pub struct DcBuffer {
    /// Pixel encoding of the store
    pub format: PixelFormat,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
    /// Bytes per row
    pub pitch: usize,
    /// Pixel / component level data
    pub data: Vec<u8>,
}

impl DcBuffer {
    /// Create a new buffer of width * height pixels
    ///
    /// Data for the buffer is allocated and zeroed.
    pub fn new(format: PixelFormat, width: i32, height: i32) -> Self {
        if width <= 0 || height <= 0 {
            panic!("Cannot create buffer with 0 width or height");
        }
        let pitch = width as usize * format.bytes_per_pixel();
        DcBuffer {
            format,
            width,
            height,
            pitch,
            data: vec![0u8; pitch * height as usize],
        }
    }
    /// Size of the underlying store in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Zero the buffer
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|v| *v = 0);
    }
    /// Read back pixel (`x`, `y`) as 8-bit channels
    pub fn get_pixel(&self, x: i32, y: i32) -> Rgba8 {
        assert!(x >= 0 && x < self.width, "x {} out of 0..{}", x, self.width);
        assert!(y >= 0 && y < self.height, "y {} out of 0..{}", y, self.height);
        let bytes = self.format.bytes_per_pixel();
        let off = y as usize * self.pitch + x as usize * bytes;
        unpack_pixel(self.format, &self.data[off..off + bytes])
    }
    /// Convert to tightly packed RGB rows, e.g. for [crate::ppm] output
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for y in 0..self.height {
            for x in 0..self.width {
                let c = self.get_pixel(x, y);
                out.push(c.r);
                out.push(c.g);
                out.push(c.b);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_layout() {
        let buf = DcBuffer::new(PixelFormat::Rgb565, 10, 4);
        assert_eq!(buf.pitch, 20);
        assert_eq!(buf.len(), 80);
        assert_eq!(buf.get_pixel(0, 0), Rgba8::opaque(0, 0, 0));

        let buf = DcBuffer::new(PixelFormat::Argb8888, 3, 3);
        assert_eq!(buf.pitch, 12);
        assert_eq!(buf.get_pixel(2, 2), Rgba8::new(0, 0, 0, 0));
    }
}
