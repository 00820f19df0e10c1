use super::*;

#[test]
fn rgb_roundtrips_through_array() {
    let c = Rgb8::from([255, 127, 0]);
    assert_eq!(c, Rgb8::new(255, 127, 0));
    assert_eq!(c.to_array(), [255, 127, 0]);
}

#[test]
fn opaque_premul_keeps_channels() {
    assert_eq!(Rgb8::new(1, 2, 3).to_premul_rgba(), [1, 2, 3, 255]);
    assert_eq!(image::Rgb::<u8>::from(Rgb8::black()).0, [0, 0, 0]);
}
