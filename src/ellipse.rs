//! Anti-aliased ellipses
//!
//! Midpoint stepping over one quadrant, mirrored into all four by
//! reflection around the center. Each step derives a coverage fraction
//! from the ratio of the error terms and splits the foreground alpha
//! between the two pixels straddling the true boundary, which is where
//! the anti-aliasing comes from. The driving axis switches from x to y
//! once the step count passes `rx^2 / sqrt(rx^2 + ry^2)` plus a small
//! overdraw margin, keeping per-step pixel spacing at one or less.

use crate::color::Rgba8;
use crate::dc::Dc;
use crate::math::scale_u8;
use crate::pixfmt::BlendMode;

impl Dc<'_> {
    /// Draw an anti-aliased ellipse centered at (`x`, `y`) in the
    /// foreground color
    ///
    /// A negative radius draws nothing. `rx == 0` degenerates to a
    /// vertical line, `ry == 0` to a horizontal one.
    pub fn draw_aa_ellipse(&mut self, x: i32, y: i32, rx: i32, ry: i32) {
        if rx < 0 || ry < 0 {
            return;
        }
        if rx == 0 {
            self.draw_vline(x, y - ry, y + ry);
            return;
        }
        if ry == 0 {
            self.draw_hline(x - rx, x + rx, y);
            return;
        }

        let fg = self.foreground();

        let a2 = i64::from(rx) * i64::from(rx);
        let b2 = i64::from(ry) * i64::from(ry);
        let ds = 2 * a2;
        let dt = 2 * b2;

        let xc2 = 2 * x;
        let yc2 = 2 * y;

        let sab = ((a2 + b2) as f64).sqrt();
        let od = (sab * 0.01).round() as i32 + 1; // introduce some overdraw
        let dxt = (a2 as f64 / sab).round() as i32 + od;

        let mut t: i64 = 0;
        let mut s: i64 = -2 * a2 * i64::from(ry);
        let mut d: i64 = 0;

        let mut xp = x;
        let mut yp = y - ry;

        // End points
        self.blend_point(xp, yp, BlendMode::None, fg);
        self.blend_point(xc2 - xp, yp, BlendMode::None, fg);
        self.blend_point(xp, yc2 - yp, BlendMode::None, fg);
        self.blend_point(xc2 - xp, yc2 - yp, BlendMode::None, fg);

        for _ in 1..=dxt {
            xp -= 1;
            d += t - b2;

            let ys;
            if d >= 0 {
                ys = yp - 1;
            } else if (d - s - a2) > 0 {
                if (2 * d - s - a2) >= 0 {
                    ys = yp + 1;
                } else {
                    ys = yp;
                    yp += 1;
                    d -= s + a2;
                    s += ds;
                }
            } else {
                yp += 1;
                ys = yp + 1;
                d -= s + a2;
                s += ds;
            }

            t -= dt;

            let cp = if s != 0 {
                let v = d.abs() as f32 / s.abs() as f32;
                if v > 1.0 {
                    1.0
                } else {
                    v
                }
            } else {
                1.0
            };

            let weight = (cp * 255.0) as u32;
            let iweight = 255 - weight;

            // Upper half
            let xx = xc2 - xp;
            self.draw_pixel_weight(xp, yp, fg, iweight);
            self.draw_pixel_weight(xx, yp, fg, iweight);

            self.draw_pixel_weight(xp, ys, fg, weight);
            self.draw_pixel_weight(xx, ys, fg, weight);

            // Lower half
            let yy = yc2 - yp;
            self.draw_pixel_weight(xp, yy, fg, iweight);
            self.draw_pixel_weight(xx, yy, fg, iweight);

            let yy = yc2 - ys;
            self.draw_pixel_weight(xp, yy, fg, weight);
            self.draw_pixel_weight(xx, yy, fg, weight);
        }

        let dyt = (b2 as f64 / sab).round() as i32 + od;
        for _ in 1..=dyt {
            yp += 1;
            d -= s + a2;

            let xs;
            if d <= 0 {
                xs = xp + 1;
            } else if (d + t - b2) < 0 {
                if (2 * d + t - b2) <= 0 {
                    xs = xp - 1;
                } else {
                    xs = xp;
                    xp -= 1;
                    d += t - b2;
                    t -= dt;
                }
            } else {
                xp -= 1;
                xs = xp - 1;
                d += t - b2;
                t -= dt;
            }

            s += ds;

            let cp = if t != 0 {
                let v = d.abs() as f32 / t.abs() as f32;
                if v > 1.0 {
                    1.0
                } else {
                    v
                }
            } else {
                1.0
            };

            let weight = (cp * 255.0) as u32;
            let iweight = 255 - weight;

            // Left half
            let xx = xc2 - xp;
            let yy = yc2 - yp;
            self.draw_pixel_weight(xp, yp, fg, iweight);
            self.draw_pixel_weight(xx, yp, fg, iweight);

            self.draw_pixel_weight(xp, yy, fg, iweight);
            self.draw_pixel_weight(xx, yy, fg, iweight);

            // Right half
            let xx = xc2 - xs;
            self.draw_pixel_weight(xs, yp, fg, weight);
            self.draw_pixel_weight(xx, yp, fg, weight);

            self.draw_pixel_weight(xs, yy, fg, weight);
            self.draw_pixel_weight(xx, yy, fg, weight);
        }
    }

    /// Draw an anti-aliased circle of radius `r` centered at (`x`, `y`)
    pub fn draw_aa_circle(&mut self, x: i32, y: i32, r: i32) {
        self.draw_aa_ellipse(x, y, r, r);
    }

    /// Blend one boundary pixel with its alpha scaled by a coverage weight
    fn draw_pixel_weight(&mut self, x: i32, y: i32, c: Rgba8, weight: u32) {
        let a = scale_u8(c.a, weight);
        self.blend_point(x, y, BlendMode::Blend, Rgba8::new(c.r, c.g, c.b, a));
    }
}
