extern crate dcblend;

use dcblend::{Dc, DcBuffer, PixelFormat, Rgba8};

fn new_canvas() -> DcBuffer {
    DcBuffer::new(PixelFormat::Argb8888, 32, 32)
}

#[test]
fn zero_rx_matches_vline() {
    let mut ellipse = new_canvas();
    let mut vline = new_canvas();
    {
        let mut dc = Dc::buffer(&mut ellipse);
        dc.set_foreground(Rgba8::white());
        dc.draw_aa_ellipse(16, 16, 0, 10);
    }
    {
        let mut dc = Dc::buffer(&mut vline);
        dc.set_foreground(Rgba8::white());
        dc.draw_vline(16, 6, 26);
    }
    assert_eq!(ellipse.data, vline.data);
}

#[test]
fn zero_ry_matches_hline() {
    let mut ellipse = new_canvas();
    let mut hline = new_canvas();
    {
        let mut dc = Dc::buffer(&mut ellipse);
        dc.set_foreground(Rgba8::white());
        dc.draw_aa_ellipse(16, 16, 10, 0);
    }
    {
        let mut dc = Dc::buffer(&mut hline);
        dc.set_foreground(Rgba8::white());
        dc.draw_hline(6, 26, 16);
    }
    assert_eq!(ellipse.data, hline.data);
}

#[test]
fn negative_radius_is_noop() {
    let mut buf = new_canvas();
    {
        let mut dc = Dc::buffer(&mut buf);
        dc.set_foreground(Rgba8::white());
        dc.draw_aa_ellipse(16, 16, -1, 10);
        dc.draw_aa_ellipse(16, 16, 10, -1);
    }
    assert!(buf.data.iter().all(|&v| v == 0));
}

#[test]
fn ellipse_is_symmetric() {
    let mut buf = new_canvas();
    {
        let mut dc = Dc::buffer(&mut buf);
        dc.set_foreground(Rgba8::white());
        dc.draw_aa_ellipse(16, 16, 9, 6);
    }
    // quadrants mirror around the center
    for y in 1..32 {
        for x in 1..32 {
            let p = buf.get_pixel(x, y);
            assert_eq!(p, buf.get_pixel(32 - x, y), "x mirror ({},{})", x, y);
            assert_eq!(p, buf.get_pixel(x, 32 - y), "y mirror ({},{})", x, y);
        }
    }
}

#[test]
fn ellipse_writes_cardinal_points() {
    let mut buf = new_canvas();
    {
        let mut dc = Dc::buffer(&mut buf);
        dc.set_foreground(Rgba8::white());
        dc.draw_aa_ellipse(16, 16, 8, 5);
    }
    // top and bottom points are written opaque, unweighted
    assert_eq!(buf.get_pixel(16, 11), Rgba8::white());
    assert_eq!(buf.get_pixel(16, 21), Rgba8::white());
    // the interior stays empty
    assert_eq!(buf.get_pixel(16, 16), Rgba8::new(0, 0, 0, 0));
}

#[test]
fn circle_is_ellipse_with_equal_radii() {
    let mut circle = new_canvas();
    let mut ellipse = new_canvas();
    {
        let mut dc = Dc::buffer(&mut circle);
        dc.set_foreground(Rgba8::opaque(0, 200, 0));
        dc.draw_aa_circle(16, 16, 7);
    }
    {
        let mut dc = Dc::buffer(&mut ellipse);
        dc.set_foreground(Rgba8::opaque(0, 200, 0));
        dc.draw_aa_ellipse(16, 16, 7, 7);
    }
    assert_eq!(circle.data, ellipse.data);
}

#[test]
fn ellipse_blends_with_translucent_foreground() {
    let mut buf = new_canvas();
    {
        let mut dc = Dc::buffer(&mut buf);
        dc.set_foreground(Rgba8::new(255, 0, 0, 128));
        dc.draw_aa_ellipse(16, 16, 6, 6);
    }
    // only red was composed anywhere, and the boundary did light up
    let mut lit = 0;
    for y in 0..32 {
        for x in 0..32 {
            let p = buf.get_pixel(x, y);
            assert_eq!(p.g, 0, "({},{}) = {:?}", x, y, p);
            assert_eq!(p.b, 0, "({},{}) = {:?}", x, y, p);
            if p.r > 0 {
                lit += 1;
            }
        }
    }
    assert!(lit > 0);
    // the interior stays empty
    assert_eq!(buf.get_pixel(16, 16), Rgba8::new(0, 0, 0, 0));
}
