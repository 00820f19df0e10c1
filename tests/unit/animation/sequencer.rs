use super::*;
use crate::progress::NoProgress;

fn arrow_canvas() -> RgbImage {
    RgbImage::from_fn(32, 32, |x, y| {
        if x >= 16 && (14..18).contains(&y) {
            image::Rgb([255, 0, 0])
        } else {
            image::Rgb([0, 0, 0])
        }
    })
}

#[test]
fn zero_frames_or_size_is_rejected() {
    assert!(FrameSequencer::new(0, 16, 33).is_err());
    assert!(FrameSequencer::new(4, 0, 33).is_err());
}

#[test]
fn rotation_steps_divide_the_circle() {
    let s = FrameSequencer::new(60, 16, 33).unwrap();
    assert_eq!(s.step_degrees(), 6);
    assert_eq!(s.rotation_for(0), 0);
    assert_eq!(s.rotation_for(59), 354);
}

#[test]
fn produces_n_frames_in_index_order() {
    let s = FrameSequencer::new(8, 16, 33).unwrap();
    let frames = s.sequence(&arrow_canvas(), &NoProgress).unwrap();
    assert_eq!(frames.len(), 8);
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f.index, i);
        assert_eq!(f.delay_ms, 33);
        assert_eq!((f.image.width, f.image.height), (16, 16));
    }
    assert!(frames.windows(2).all(|w| w[0].rotation_deg < w[1].rotation_deg));
}

#[test]
fn parallel_frames_match_sequential_ones() {
    let s = FrameSequencer::new(4, 16, 33).unwrap();
    let src = arrow_canvas();
    let frames = s.sequence(&src, &NoProgress).unwrap();
    for (i, f) in frames.iter().enumerate() {
        assert_eq!(f, &s.frame(&src, i).unwrap());
    }
}

#[test]
fn quarter_turn_frame_points_up() {
    let s = FrameSequencer::new(4, 16, 33).unwrap();
    let frame = s.frame(&arrow_canvas(), 1).unwrap();
    assert_eq!(frame.rotation_deg, 90);
    let rgb = frame.image.to_rgb();
    assert!(rgb.get_pixel(8, 2).0[0] > 128);
    assert!(rgb.get_pixel(14, 8).0[0] < 64);
}
