use super::*;

#[test]
fn frame_index_displays_zero_padded() {
    assert_eq!(FrameIndex(7).to_string(), "007");
    assert_eq!(FrameIndex(79).to_string(), "079");
    assert_eq!(FrameIndex(1234).to_string(), "1234");
}

#[test]
fn viewport_empty_and_u16_bounds() {
    assert!(Viewport::new(0, 10).is_empty());
    assert!(Viewport::new(10, 0).is_empty());
    assert!(!Viewport::new(1, 1).is_empty());

    assert_eq!(Viewport::new(800, 600).to_u16().unwrap(), (800, 600));
    assert!(Viewport::new(70_000, 10).to_u16().is_err());
}

#[test]
fn premul_roundtrips_opaque_and_rounds_translucent() {
    let c = Rgba8Premul::from_straight_rgba(200, 100, 50, 255);
    assert_eq!(c.to_array(), [200, 100, 50, 255]);

    let half = Rgba8Premul::from_straight_rgba(200, 100, 0, 128);
    assert_eq!(half.r, ((200u16 * 128 + 127) / 255) as u8);
    assert!((i32::from(unpremul(half.r, half.a)) - 200).abs() <= 1);
    assert_eq!(unpremul(10, 0), 0);
}
