//! Line rasterization
//!
//! Four raster loops cover the slope cases: horizontal and vertical runs,
//! exact diagonals, and Bresenham for everything else. All of them write
//! through [compose_pixel], so the same loops serve every blend mode and
//! pixel format. `draw_end` controls whether the second endpoint is
//! plotted; polylines chain segments with `draw_end = false` so shared
//! vertices are touched once.

use log::warn;

use crate::clip::{intersect_rect_line, Point};
use crate::color::Rgba8;
use crate::dc::{Dc, DcKind, PixelView};
use crate::pixfmt::{
    compose_pixel, Argb8888, Bgr565, BlendMode, PixelCodec, PixelFormat, Rgb565, Rgb888,
};

pub(crate) fn hline<C: PixelCodec>(
    view: &mut PixelView,
    mode: BlendMode,
    x1: i32,
    x2: i32,
    y: i32,
    c: Rgba8,
    draw_end: bool,
) {
    let (start, len) = if x1 <= x2 {
        (x1, if draw_end { x2 - x1 + 1 } else { x2 - x1 })
    } else {
        (
            if draw_end { x2 } else { x2 + 1 },
            if draw_end { x1 - x2 + 1 } else { x1 - x2 },
        )
    };
    for i in 0..len {
        compose_pixel::<C>(view.pixel_mut(start + i, y), mode, c);
    }
}

pub(crate) fn vline<C: PixelCodec>(
    view: &mut PixelView,
    mode: BlendMode,
    x: i32,
    y1: i32,
    y2: i32,
    c: Rgba8,
    draw_end: bool,
) {
    let (start, len) = if y1 <= y2 {
        (y1, if draw_end { y2 - y1 + 1 } else { y2 - y1 })
    } else {
        (
            if draw_end { y2 } else { y2 + 1 },
            if draw_end { y1 - y2 + 1 } else { y1 - y2 },
        )
    };
    for i in 0..len {
        compose_pixel::<C>(view.pixel_mut(x, start + i), mode, c);
    }
}

/// Exact diagonal, |dx| == |dy|, rasterized top-down
fn dline<C: PixelCodec>(
    view: &mut PixelView,
    mode: BlendMode,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    c: Rgba8,
    draw_end: bool,
) {
    let (x0, y0, xdir) = if y1 < y2 {
        (x1, y1, if x1 < x2 { 1 } else { -1 })
    } else {
        (x2, y2, if x2 < x1 { 1 } else { -1 })
    };
    let mut len = (y2 - y1).abs();
    if draw_end {
        len += 1;
    }
    let (mut x, mut y) = (x0, y0);
    for _ in 0..len {
        compose_pixel::<C>(view.pixel_mut(x, y), mode, c);
        x += xdir;
        y += 1;
    }
}

/// General slope Bresenham
fn bline<C: PixelCodec>(
    view: &mut PixelView,
    mode: BlendMode,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    c: Rgba8,
    draw_end: bool,
) {
    let deltax = (x2 - x1).abs();
    let deltay = (y2 - y1).abs();

    let (mut numpixels, mut d, dinc1, dinc2, mut xinc1, mut xinc2, mut yinc1, mut yinc2);
    if deltax >= deltay {
        numpixels = deltax + 1;
        d = 2 * deltay - deltax;
        dinc1 = deltay * 2;
        dinc2 = (deltay - deltax) * 2;
        xinc1 = 1;
        xinc2 = 1;
        yinc1 = 0;
        yinc2 = 1;
    } else {
        numpixels = deltay + 1;
        d = 2 * deltax - deltay;
        dinc1 = deltax * 2;
        dinc2 = (deltax - deltay) * 2;
        xinc1 = 0;
        xinc2 = 1;
        yinc1 = 1;
        yinc2 = 1;
    }
    if x1 > x2 {
        xinc1 = -xinc1;
        xinc2 = -xinc2;
    }
    if y1 > y2 {
        yinc1 = -yinc1;
        yinc2 = -yinc2;
    }
    let (mut x, mut y) = (x1, y1);
    if !draw_end {
        numpixels -= 1;
    }
    for _ in 0..numpixels {
        compose_pixel::<C>(view.pixel_mut(x, y), mode, c);
        if d < 0 {
            d += dinc1;
            x += xinc1;
            y += yinc1;
        } else {
            d += dinc2;
            x += xinc2;
            y += yinc2;
        }
    }
}

/// Rasterize one clipped segment, dispatching on its slope
pub(crate) fn line_raster<C: PixelCodec>(
    view: &mut PixelView,
    mode: BlendMode,
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    c: Rgba8,
    draw_end: bool,
) {
    if y1 == y2 {
        hline::<C>(view, mode, x1, x2, y1, c, draw_end);
    } else if x1 == x2 {
        vline::<C>(view, mode, x1, y1, y2, c, draw_end);
    } else if (x1 - x2).abs() == (y1 - y2).abs() {
        dline::<C>(view, mode, x1, y1, x2, y2, c, draw_end);
    } else {
        bline::<C>(view, mode, x1, y1, x2, y2, c, draw_end);
    }
}

/// Stand-in codec for the byte-per-pixel plain line path
///
/// Stores the low byte of the packed color into the single pixel byte,
/// as the byte-wide row fill does; never used for blending.
struct Raw8;
impl PixelCodec for Raw8 {
    const BYTES: usize = 1;
    fn pack(px: &mut [u8], _r: u8, _g: u8, b: u8, _a: u8) {
        px[0] = b;
    }
    fn unpack(px: &[u8]) -> (u8, u8, u8, u8) {
        (px[0], px[0], px[0], 255)
    }
}

impl Dc<'_> {
    /// Composite a line between two points
    ///
    /// Both endpoints are drawn. Hardware and client surfaces translate by
    /// the owner extent and normalize the endpoints to top-left order
    /// before clipping; the segment is rasterized once per visible clip
    /// rectangle.
    pub fn blend_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, mode: BlendMode, color: Rgba8) {
        if !self.visible() || !self.has_pixels() {
            return;
        }
        let format = self.pixel_format();
        match format {
            PixelFormat::Rgb565 => {
                self.blend_line_codec::<Rgb565>(x1, y1, x2, y2, mode, color, true)
            }
            PixelFormat::Bgr565 => {
                self.blend_line_codec::<Bgr565>(x1, y1, x2, y2, mode, color, true)
            }
            PixelFormat::Rgb888 => {
                self.blend_line_codec::<Rgb888>(x1, y1, x2, y2, mode, color, true)
            }
            PixelFormat::Argb8888 => {
                self.blend_line_codec::<Argb8888>(x1, y1, x2, y2, mode, color, true)
            }
            _ => warn!("dc_blend_line(): unsupported pixel format {:?}", format),
        }
    }

    /// Composite a polyline
    ///
    /// Segments are drawn without their end pixel so shared vertices are
    /// touched once; the final vertex is drawn as a point when the
    /// polyline is not closed.
    pub fn blend_lines(&mut self, points: &[Point], mode: BlendMode, color: Rgba8) {
        if points.is_empty() {
            return;
        }
        if !self.visible() || !self.has_pixels() {
            return;
        }
        let format = self.pixel_format();
        match format {
            PixelFormat::Rgb565 => self.blend_lines_codec::<Rgb565>(points, mode, color),
            PixelFormat::Bgr565 => self.blend_lines_codec::<Bgr565>(points, mode, color),
            PixelFormat::Rgb888 => self.blend_lines_codec::<Rgb888>(points, mode, color),
            PixelFormat::Argb8888 => self.blend_lines_codec::<Argb8888>(points, mode, color),
            _ => {
                warn!("dc_blend_lines(): unsupported pixel format {:?}", format);
                return;
            }
        }
        let first = points[0];
        let last = points[points.len() - 1];
        if first != last {
            self.blend_point(last.x, last.y, mode, color);
        }
    }

    fn blend_lines_codec<C: PixelCodec>(&mut self, points: &[Point], mode: BlendMode, color: Rgba8) {
        for w in points.windows(2) {
            self.blend_line_codec::<C>(w[0].x, w[0].y, w[1].x, w[1].y, mode, color, false);
        }
    }

    fn blend_line_codec<C: PixelCodec>(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        mode: BlendMode,
        color: Rgba8,
        draw_end: bool,
    ) {
        let c = match mode {
            BlendMode::Blend | BlendMode::Add => color.premultiply(),
            _ => color,
        };
        let (mut x1, mut y1, mut x2, mut y2) = (x1, y1, x2, y2);
        match &self.kind {
            DcKind::Hardware { extent, .. } | DcKind::Client { extent, .. } => {
                x1 += extent.x1;
                x2 += extent.x1;
                y1 += extent.y1;
                y2 += extent.y1;
                if y1 > y2 {
                    std::mem::swap(&mut y1, &mut y2);
                }
                if x1 > x2 {
                    std::mem::swap(&mut x1, &mut x2);
                }
            }
            DcKind::Buffer(_) => {}
        }
        let rects = self.clip_rects();
        let mut view = match self.view() {
            Some(v) => v,
            None => return,
        };
        for rect in &rects {
            if let Some((cx1, cy1, cx2, cy2)) = intersect_rect_line(rect, x1, y1, x2, y2) {
                line_raster::<C>(&mut view, mode, cx1, cy1, cx2, cy2, c, draw_end);
            }
        }
    }

    /// Draw a line in the foreground color
    ///
    /// Dispatches on bytes per pixel like the blend entry points dispatch
    /// on format; general slopes fall back to plain Bresenham plotting at
    /// the color's own alpha, so only ellipses get coverage weighting.
    /// The end pixel is omitted.
    pub fn draw_aa_line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        if !self.visible() || !self.has_pixels() {
            return;
        }
        if self.bits_per_pixel() < 8 {
            return;
        }
        let color = self.foreground();
        self.draw_aa_segment(x1, y1, x2, y2, color, false);
    }

    /// Draw a polyline in the foreground color
    pub fn draw_aa_lines(&mut self, points: &[Point]) {
        if points.is_empty() {
            return;
        }
        if !self.visible() || !self.has_pixels() {
            return;
        }
        if self.bits_per_pixel() < 8 {
            return;
        }
        let color = self.foreground();
        for w in points.windows(2) {
            self.draw_aa_segment(w[0].x, w[0].y, w[1].x, w[1].y, color, false);
        }
        let first = points[0];
        let last = points[points.len() - 1];
        if first != last {
            self.draw_point(last.x, last.y);
        }
    }

    fn draw_aa_segment(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, color: Rgba8, draw_end: bool) {
        match self.bits_per_pixel() / 8 {
            1 => self.blend_line_codec::<Raw8>(x1, y1, x2, y2, BlendMode::None, color, draw_end),
            2 => match self.pixel_format() {
                PixelFormat::Rgb565 => {
                    self.blend_line_codec::<Rgb565>(x1, y1, x2, y2, BlendMode::None, color, draw_end)
                }
                // any other 16-bit format packs as BGR
                _ => self.blend_line_codec::<Bgr565>(x1, y1, x2, y2, BlendMode::None, color, draw_end),
            },
            4 => match self.pixel_format() {
                PixelFormat::Rgb888 => {
                    self.blend_line_codec::<Rgb888>(x1, y1, x2, y2, BlendMode::None, color, draw_end)
                }
                PixelFormat::Argb8888 => self.blend_line_codec::<Argb8888>(
                    x1, y1, x2, y2,
                    BlendMode::None,
                    color,
                    draw_end,
                ),
                _ => {}
            },
            _ => warn!("dc_draw_line(): unsupported pixel format"),
        }
    }

    /// Horizontal line in the foreground color, both endpoints inclusive
    pub fn draw_hline(&mut self, x1: i32, x2: i32, y: i32) {
        let fg = self.foreground();
        self.blend_line(x1, y, x2, y, BlendMode::None, fg);
    }

    /// Vertical line in the foreground color, both endpoints inclusive
    pub fn draw_vline(&mut self, x: i32, y1: i32, y2: i32) {
        let fg = self.foreground();
        self.blend_line(x, y1, x, y2, BlendMode::None, fg);
    }
}
