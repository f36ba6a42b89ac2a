use std::io::Cursor;

use super::*;

fn encode_png(width: u32, height: u32, rgba: Vec<u8>) -> Vec<u8> {
    let img = image::RgbaImage::from_raw(width, height, rgba).unwrap();
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn decode_frame_png_dimensions_and_premul() {
    let buf = encode_png(1, 1, vec![100u8, 50u8, 200u8, 128u8]);

    let frame = decode_frame(&buf).unwrap();
    assert_eq!((frame.width(), frame.height()), (1, 1));
    assert!(frame.is_ready());
    assert_eq!(
        frame.rgba8_premul(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn decode_frame_keeps_opaque_pixels_untouched() {
    let buf = encode_png(2, 1, vec![10, 20, 30, 255, 9, 9, 9, 0]);
    let frame = decode_frame(&buf).unwrap();
    assert_eq!(frame.rgba8_premul(), &[10, 20, 30, 255, 0, 0, 0, 0]);
}

#[test]
fn decode_frame_rejects_garbage() {
    let err = decode_frame(b"definitely not an image").unwrap_err();
    assert!(err.to_string().contains("decode frame"));
}
