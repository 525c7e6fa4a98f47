//! Drawing context surfaces
//!
//! A [Dc] is the destination of every drawing operation: the hardware
//! framebuffer, an off-screen [DcBuffer], or a widget's client area on the
//! framebuffer. Client surfaces carry the owning widget's extent (the
//! widget-local to device translation) and borrow its clip region for the
//! duration of the draw call.

use log::warn;

use crate::buffer::DcBuffer;
use crate::clip::{ClipRegion, Point, Rect};
use crate::color::Rgba8;
use crate::driver::Driver;
use crate::pixfmt::{
    compose_pixel, Argb8888, Bgr565, BlendMode, PixelCodec, PixelFormat, Rgb565, Rgb888,
};

/// Destination surface of a drawing operation
pub struct Dc<'a> {
    pub(crate) kind: DcKind<'a>,
    visible: bool,
    foreground: Rgba8,
}

pub(crate) enum DcKind<'a> {
    /// Hardware framebuffer resolved through the graphics driver
    Hardware { driver: &'a mut Driver, extent: Rect },
    /// Off-screen buffer with its own pixel store
    Buffer(&'a mut DcBuffer),
    /// Widget client area: framebuffer plus owner extent and clip region
    Client {
        driver: &'a mut Driver,
        extent: Rect,
        clip: &'a ClipRegion,
    },
}

/// Row-addressed view of a surface's raw pixel bytes
pub(crate) struct PixelView<'a> {
    data: &'a mut [u8],
    pitch: usize,
    bytes: usize,
}

impl<'a> PixelView<'a> {
    /// Bytes of pixel (`x`, `y`); the caller guarantees both are in bounds
    pub(crate) fn pixel_mut(&mut self, x: i32, y: i32) -> &mut [u8] {
        let off = y as usize * self.pitch + x as usize * self.bytes;
        &mut self.data[off..off + self.bytes]
    }
}

impl<'a> Dc<'a> {
    /// Context drawing on the whole hardware framebuffer
    ///
    /// `extent` is the owning widget's extent; line operations translate
    /// their coordinates by its top-left corner.
    pub fn hardware(driver: &'a mut Driver, extent: Rect) -> Self {
        Dc {
            kind: DcKind::Hardware { driver, extent },
            visible: true,
            foreground: Rgba8::black(),
        }
    }
    /// Context drawing on an off-screen buffer
    pub fn buffer(buffer: &'a mut DcBuffer) -> Self {
        Dc {
            kind: DcKind::Buffer(buffer),
            visible: true,
            foreground: Rgba8::black(),
        }
    }
    /// Context drawing on a widget's client area
    ///
    /// All coordinates are widget-local and translated by `extent`'s
    /// top-left corner; writes are confined to `clip`.
    pub fn client(driver: &'a mut Driver, extent: Rect, clip: &'a ClipRegion) -> Self {
        Dc {
            kind: DcKind::Client {
                driver,
                extent,
                clip,
            },
            visible: true,
            foreground: Rgba8::black(),
        }
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
    pub fn foreground(&self) -> Rgba8 {
        self.foreground
    }
    pub fn set_foreground(&mut self, color: Rgba8) {
        self.foreground = color;
    }

    pub fn pixel_format(&self) -> PixelFormat {
        match &self.kind {
            DcKind::Hardware { driver, .. } | DcKind::Client { driver, .. } => driver.format,
            DcKind::Buffer(buf) => buf.format,
        }
    }
    pub fn bits_per_pixel(&self) -> u8 {
        self.pixel_format().bits_per_pixel()
    }

    /// Whether the surface has an addressable pixel store
    pub(crate) fn has_pixels(&self) -> bool {
        match &self.kind {
            DcKind::Hardware { driver, .. } | DcKind::Client { driver, .. } => {
                driver.framebuffer.is_some()
            }
            DcKind::Buffer(_) => true,
        }
    }

    /// Device-space bounds of the surface
    pub(crate) fn bounds(&self) -> Rect {
        match &self.kind {
            DcKind::Hardware { driver, .. } | DcKind::Client { driver, .. } => {
                Rect::new(0, 0, driver.width, driver.height)
            }
            DcKind::Buffer(buf) => Rect::new(0, 0, buf.width, buf.height),
        }
    }

    /// Device-space rectangles eligible to receive writes
    ///
    /// Client surfaces iterate their clip region; everything else is
    /// clipped to the surface bounds only.
    pub(crate) fn clip_rects(&self) -> Vec<Rect> {
        let bounds = self.bounds();
        match &self.kind {
            DcKind::Client { clip, .. } => clip
                .rects()
                .iter()
                .map(|r| r.intersect(&bounds))
                .filter(|r| !r.is_empty())
                .collect(),
            _ => vec![bounds],
        }
    }

    pub(crate) fn view(&mut self) -> Option<PixelView<'_>> {
        match &mut self.kind {
            DcKind::Hardware { driver, .. } | DcKind::Client { driver, .. } => {
                let pitch = driver.pitch;
                let bytes = driver.format.bytes_per_pixel();
                driver.framebuffer.as_mut().map(|fb| PixelView {
                    data: fb.as_mut_slice(),
                    pitch,
                    bytes,
                })
            }
            DcKind::Buffer(buf) => Some(PixelView {
                data: buf.data.as_mut_slice(),
                pitch: buf.pitch,
                bytes: buf.format.bytes_per_pixel(),
            }),
        }
    }

    fn compose_at<C: PixelCodec>(&mut self, x: i32, y: i32, mode: BlendMode, c: Rgba8) {
        if let Some(mut view) = self.view() {
            compose_pixel::<C>(view.pixel_mut(x, y), mode, c);
        }
    }

    /// Composite a single point
    ///
    /// Client surfaces translate (`x`, `y`) by the owner extent and hit-test
    /// the clip region; points outside any clip rectangle are dropped.
    pub fn blend_point(&mut self, x: i32, y: i32, mode: BlendMode, color: Rgba8) {
        if !self.visible() || !self.has_pixels() {
            return;
        }
        let (mut x, mut y) = (x, y);
        if let DcKind::Client { extent, clip, .. } = &self.kind {
            x += extent.x1;
            y += extent.y1;
            if clip.contains_point(x, y).is_none() {
                return;
            }
        }
        if !self.bounds().contains(x, y) {
            return;
        }
        let c = match mode {
            BlendMode::Blend | BlendMode::Add => color.premultiply(),
            _ => color,
        };
        match self.pixel_format() {
            PixelFormat::Rgb565 => self.compose_at::<Rgb565>(x, y, mode, c),
            PixelFormat::Bgr565 => self.compose_at::<Bgr565>(x, y, mode, c),
            PixelFormat::Rgb888 => self.compose_at::<Rgb888>(x, y, mode, c),
            PixelFormat::Argb8888 => self.compose_at::<Argb8888>(x, y, mode, c),
            _ => {}
        }
    }

    /// Composite a batch of points
    ///
    /// The pixel format is resolved once for the whole batch; all four
    /// blendable formats dispatch, ARGB8888 included.
    pub fn blend_points(&mut self, points: &[Point], mode: BlendMode, color: Rgba8) {
        if !self.visible() || !self.has_pixels() {
            return;
        }
        let c = match mode {
            BlendMode::Blend | BlendMode::Add => color.premultiply(),
            _ => color,
        };
        let format = self.pixel_format();
        match format {
            PixelFormat::Rgb565 => self.blend_points_codec::<Rgb565>(points, mode, c),
            PixelFormat::Bgr565 => self.blend_points_codec::<Bgr565>(points, mode, c),
            PixelFormat::Rgb888 => self.blend_points_codec::<Rgb888>(points, mode, c),
            PixelFormat::Argb8888 => self.blend_points_codec::<Argb8888>(points, mode, c),
            _ => warn!("dc_blend_points(): unsupported pixel format {:?}", format),
        }
    }

    fn blend_points_codec<C: PixelCodec>(&mut self, points: &[Point], mode: BlendMode, c: Rgba8) {
        let bounds = self.bounds();
        let client = match &self.kind {
            DcKind::Client { extent, clip, .. } => Some(((extent.x1, extent.y1), *clip)),
            _ => None,
        };
        let mut view = match self.view() {
            Some(v) => v,
            None => return,
        };
        for p in points {
            let (mut x, mut y) = (p.x, p.y);
            if let Some(((ox, oy), clip)) = client {
                x += ox;
                y += oy;
                if clip.contains_point(x, y).is_none() {
                    continue;
                }
            }
            if !bounds.contains(x, y) {
                continue;
            }
            compose_pixel::<C>(view.pixel_mut(x, y), mode, c);
        }
    }

    /// Draw a single pixel in the foreground color
    pub fn draw_point(&mut self, x: i32, y: i32) {
        let fg = self.foreground();
        self.blend_point(x, y, BlendMode::None, fg);
    }
}
