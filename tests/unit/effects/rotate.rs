use super::*;

fn block_image() -> RgbImage {
    RgbImage::from_fn(20, 20, |x, y| {
        if (14..18).contains(&x) && (8..12).contains(&y) {
            image::Rgb([255, 255, 255])
        } else {
            image::Rgb([0, 0, 0])
        }
    })
}

#[test]
fn cubic_weights_interpolate_at_integers() {
    assert_eq!(cubic_weight(0.0), 1.0);
    assert_eq!(cubic_weight(1.0), 0.0);
    assert_eq!(cubic_weight(2.0), 0.0);
    let sum: f64 = [-1.0, 0.0, 1.0, 2.0]
        .iter()
        .map(|i| cubic_weight(0.3 - i))
        .sum();
    assert!((sum - 1.0).abs() < 1e-12);
}

#[test]
fn full_turns_are_identity() {
    let src = block_image();
    assert_eq!(rotate_bicubic(&src, 0.0), src);
    assert_eq!(rotate_bicubic(&src, 360.0), src);
}

#[test]
fn quarter_turn_is_counter_clockwise() {
    let out = rotate_bicubic(&block_image(), 90.0);
    // The block right of center ends up above it.
    assert!(out.get_pixel(10, 4).0.iter().all(|&c| c > 250));
    assert!(out.get_pixel(15, 10).0.iter().all(|&c| c < 5));
}

#[test]
fn uncovered_corners_are_black() {
    let white = RgbImage::from_pixel(20, 20, image::Rgb([255, 255, 255]));
    let out = rotate_bicubic(&white, 45.0);
    assert_eq!(out.get_pixel(0, 0).0, [0, 0, 0]);
    assert_eq!(out.get_pixel(10, 10).0, [255, 255, 255]);
    assert_eq!(out.dimensions(), (20, 20));
}
