//! Filled rectangle compositing

use log::warn;

use crate::clip::Rect;
use crate::color::Rgba8;
use crate::dc::{Dc, DcKind, PixelView};
use crate::pixfmt::{
    compose_pixel, Argb8888, Bgr565, BlendMode, PixelCodec, PixelFormat, Rgb565, Rgb888,
};

/// Fill `rect` (half-open) row-major through the codec
///
/// The rectangle is pre-intersected with the clip; no per-pixel test here.
fn fill_rect_raster<C: PixelCodec>(view: &mut PixelView, mode: BlendMode, rect: &Rect, c: Rgba8) {
    for y in rect.y1..rect.y2 {
        for x in rect.x1..rect.x2 {
            compose_pixel::<C>(view.pixel_mut(x, y), mode, c);
        }
    }
}

impl Dc<'_> {
    /// Composite a solid color into every pixel of `rect`
    ///
    /// Client surfaces translate the rectangle by the owner extent and
    /// repeat the fill once per clip rectangle, intersected with it.
    /// Surfaces below 8 bits per pixel are refused.
    pub fn blend_fill_rect(&mut self, rect: &Rect, mode: BlendMode, color: Rgba8) {
        if !self.visible() {
            return;
        }
        if self.bits_per_pixel() < 8 {
            warn!("dc_blend_fill_rect(): unsupported pixel format");
            return;
        }
        let c = match mode {
            BlendMode::Blend | BlendMode::Add => color.premultiply(),
            _ => color,
        };
        let format = self.pixel_format();
        match format {
            PixelFormat::Rgb565 => self.fill_rect_codec::<Rgb565>(rect, mode, c),
            PixelFormat::Bgr565 => self.fill_rect_codec::<Bgr565>(rect, mode, c),
            PixelFormat::Rgb888 => self.fill_rect_codec::<Rgb888>(rect, mode, c),
            PixelFormat::Argb8888 => self.fill_rect_codec::<Argb8888>(rect, mode, c),
            _ => warn!("dc_blend_fill_rect(): unsupported pixel format {:?}", format),
        }
    }

    /// Composite a solid color into a batch of rectangles
    pub fn blend_fill_rects(&mut self, rects: &[Rect], mode: BlendMode, color: Rgba8) {
        if !self.visible() {
            return;
        }
        if self.bits_per_pixel() < 8 {
            warn!("dc_blend_fill_rects(): unsupported pixel format");
            return;
        }
        let c = match mode {
            BlendMode::Blend | BlendMode::Add => color.premultiply(),
            _ => color,
        };
        let format = self.pixel_format();
        match format {
            PixelFormat::Rgb565 => self.fill_rects_codec::<Rgb565>(rects, mode, c),
            PixelFormat::Bgr565 => self.fill_rects_codec::<Bgr565>(rects, mode, c),
            PixelFormat::Rgb888 => self.fill_rects_codec::<Rgb888>(rects, mode, c),
            PixelFormat::Argb8888 => self.fill_rects_codec::<Argb8888>(rects, mode, c),
            _ => warn!("dc_blend_fill_rects(): unsupported pixel format {:?}", format),
        }
    }

    fn fill_rects_codec<C: PixelCodec>(&mut self, rects: &[Rect], mode: BlendMode, c: Rgba8) {
        for rect in rects {
            self.fill_rect_codec::<C>(rect, mode, c);
        }
    }

    fn fill_rect_codec<C: PixelCodec>(&mut self, rect: &Rect, mode: BlendMode, c: Rgba8) {
        let bounds = self.bounds();
        // Fills translate by the owner extent for client surfaces only.
        let draw_rects: Vec<Rect> = match &self.kind {
            DcKind::Client { extent, clip, .. } => {
                let dr = rect.offset(extent.x1, extent.y1);
                clip.rects()
                    .iter()
                    .map(|p| p.intersect(&dr).intersect(&bounds))
                    .filter(|r| !r.is_empty())
                    .collect()
            }
            _ => {
                let r = rect.intersect(&bounds);
                if r.is_empty() {
                    Vec::new()
                } else {
                    vec![r]
                }
            }
        };
        let mut view = match self.view() {
            Some(v) => v,
            None => return,
        };
        for r in &draw_rects {
            fill_rect_raster::<C>(&mut view, mode, r, c);
        }
    }
}
