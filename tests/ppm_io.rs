extern crate dcblend;

use dcblend::ppm;
use dcblend::{BlendMode, Dc, DcBuffer, PixelFormat, Rect, Rgba8};

#[test]
fn write_and_read_back() {
    let mut buf = DcBuffer::new(PixelFormat::Rgb888, 8, 4);
    {
        let mut dc = Dc::buffer(&mut buf);
        dc.blend_fill_rect(&Rect::new(0, 0, 4, 4), BlendMode::None, Rgba8::opaque(255, 0, 0));
        dc.blend_fill_rect(&Rect::new(4, 0, 8, 4), BlendMode::None, Rgba8::opaque(0, 0, 255));
    }

    let path = std::env::temp_dir().join("dcblend_ppm_io.png");
    ppm::write_file(&buf, &path).unwrap();

    let (data, w, h) = ppm::read_file(&path).unwrap();
    assert_eq!((w, h), (8, 4));
    assert_eq!(data, buf.to_rgb());

    assert!(ppm::img_diff(&path, &path).unwrap());
}
