//! Clipped, alpha-blended 2D software rasterization for GUI drawing contexts
//!
//! How a draw call flows:
//!
//! ```text
//! dc = Dc::client( driver, extent, clip )
//! dc.blend_line(...)
//!   pixel format -> codec            -- pixfmt
//!   for rect in clip rects           -- dc
//!     intersect_rect_line()          -- clip
//!     hline/vline/dline/bline        -- line
//!       compose_pixel()              -- pixfmt
//! ```
//!
//! Every primitive bottoms out in [compose_pixel], one pixel at a time,
//! so the four pixel encodings and four blend modes stay orthogonal to
//! the geometry loops.
//!
//!     use dcblend::{Dc, DcBuffer, PixelFormat, BlendMode, Rgba8, Rect};
//!
//!     let mut buf = DcBuffer::new(PixelFormat::Argb8888, 64, 64);
//!     let mut dc = Dc::buffer(&mut buf);
//!     dc.blend_fill_rect(&Rect::new(8, 8, 56, 56), BlendMode::Blend,
//!                        Rgba8::new(200, 60, 60, 128));
//!     dc.set_foreground(Rgba8::white());
//!     dc.draw_aa_circle(32, 32, 20);

pub mod buffer;
pub mod clip;
pub mod color;
pub mod dc;
pub mod driver;
pub mod ellipse;
pub mod fill;
pub mod line;
pub mod math;
pub mod pixfmt;
pub mod ppm;

pub use crate::buffer::*;
pub use crate::clip::*;
pub use crate::color::*;
pub use crate::dc::*;
pub use crate::driver::*;
pub use crate::pixfmt::*;
