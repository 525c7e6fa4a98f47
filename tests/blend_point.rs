extern crate dcblend;

use dcblend::{BlendMode, ClipRegion, Dc, DcBuffer, Driver, PixelFormat, Point, Rect, Rgba8};

#[test]
fn blend_point_composes_over_background() {
    let mut buf = DcBuffer::new(PixelFormat::Rgb888, 4, 4);
    {
        let mut dc = Dc::buffer(&mut buf);
        dc.blend_point(1, 1, BlendMode::Blend, Rgba8::new(255, 255, 255, 128));
    }
    assert_eq!(buf.get_pixel(1, 1), Rgba8::opaque(128, 128, 128));
    assert_eq!(buf.get_pixel(0, 0), Rgba8::opaque(0, 0, 0));
}

#[test]
fn blend_points_reach_argb8888() {
    // the point batch dispatch must resolve ARGB8888 to its own compositor
    let mut buf = DcBuffer::new(PixelFormat::Argb8888, 4, 1);
    let pts = [Point::new(0, 0), Point::new(2, 0)];
    {
        let mut dc = Dc::buffer(&mut buf);
        dc.blend_points(&pts, BlendMode::Blend, Rgba8::new(255, 255, 255, 128));
    }
    assert_eq!(buf.get_pixel(0, 0), Rgba8::new(128, 128, 128, 128));
    assert_eq!(buf.get_pixel(1, 0), Rgba8::new(0, 0, 0, 0));
    assert_eq!(buf.get_pixel(2, 0), Rgba8::new(128, 128, 128, 128));
}

#[test]
fn blend_points_all_four_formats_write() {
    for &format in &[
        PixelFormat::Rgb565,
        PixelFormat::Bgr565,
        PixelFormat::Rgb888,
        PixelFormat::Argb8888,
    ] {
        let mut buf = DcBuffer::new(format, 2, 1);
        {
            let mut dc = Dc::buffer(&mut buf);
            dc.blend_points(&[Point::new(0, 0)], BlendMode::None, Rgba8::white());
        }
        assert_ne!(buf.get_pixel(0, 0), Rgba8::opaque(0, 0, 0), "{:?}", format);
    }
}

#[test]
fn client_points_hit_test_the_region() {
    let mut drv = Driver::new(PixelFormat::Rgb888, 16, 16);
    let clip = ClipRegion::Multiple(vec![Rect::new(2, 2, 5, 5), Rect::new(8, 8, 10, 10)]);
    let pts = [
        Point::new(2, 2),  // inside first rect
        Point::new(6, 6),  // gap between rects
        Point::new(9, 9),  // inside second rect
        Point::new(20, 1), // off surface
    ];
    {
        let mut dc = Dc::client(&mut drv, Rect::new(0, 0, 16, 16), &clip);
        dc.blend_points(&pts, BlendMode::None, Rgba8::white());
    }
    assert_eq!(drv.get_pixel(2, 2), Some(Rgba8::white()));
    assert_eq!(drv.get_pixel(6, 6), Some(Rgba8::opaque(0, 0, 0)));
    assert_eq!(drv.get_pixel(9, 9), Some(Rgba8::white()));
}

#[test]
fn point_on_proxy_driver_is_noop() {
    let mut drv = Driver::proxy(PixelFormat::Rgb888, 8, 8);
    let mut dc = Dc::hardware(&mut drv, Rect::new(0, 0, 8, 8));
    dc.blend_point(1, 1, BlendMode::None, Rgba8::white());
    dc.blend_points(&[Point::new(2, 2)], BlendMode::None, Rgba8::white());
    dc.draw_aa_line(0, 0, 7, 7);
    dc.blend_line(0, 0, 7, 0, BlendMode::None, Rgba8::white());
    // nothing to observe; reaching here without a panic is the point
    assert!(drv.framebuffer.is_none());
}

#[test]
fn invisible_surface_point_is_noop() {
    let mut buf = DcBuffer::new(PixelFormat::Rgb888, 4, 4);
    {
        let mut dc = Dc::buffer(&mut buf);
        dc.set_visible(false);
        dc.blend_point(1, 1, BlendMode::None, Rgba8::white());
        dc.blend_points(&[Point::new(2, 2)], BlendMode::None, Rgba8::white());
    }
    assert!(buf.data.iter().all(|&v| v == 0));
}

#[test]
fn out_of_bounds_point_is_dropped() {
    let mut buf = DcBuffer::new(PixelFormat::Rgb888, 4, 4);
    {
        let mut dc = Dc::buffer(&mut buf);
        dc.blend_point(-1, 0, BlendMode::None, Rgba8::white());
        dc.blend_point(4, 0, BlendMode::None, Rgba8::white());
        dc.blend_point(0, 4, BlendMode::None, Rgba8::white());
    }
    assert!(buf.data.iter().all(|&v| v == 0));
}

#[test]
fn mod_point_ignores_alpha() {
    let mut buf = DcBuffer::new(PixelFormat::Rgb888, 2, 1);
    {
        let mut dc = Dc::buffer(&mut buf);
        dc.blend_point(0, 0, BlendMode::None, Rgba8::white());
        // alpha 0 must not matter for MOD
        dc.blend_point(0, 0, BlendMode::Mod, Rgba8::new(128, 64, 32, 0));
    }
    assert_eq!(buf.get_pixel(0, 0), Rgba8::opaque(128, 64, 32));
}
