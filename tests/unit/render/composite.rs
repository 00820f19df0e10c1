use super::*;

#[test]
fn over_transparent_src_is_identity() {
    let dst = [10, 20, 30, 255];
    assert_eq!(over(dst, [0, 0, 0, 0]), dst);
}

#[test]
fn over_opaque_src_replaces() {
    assert_eq!(over([10, 20, 30, 255], [1, 2, 3, 255]), [1, 2, 3, 255]);
}

#[test]
fn over_half_alpha_on_black_keeps_premul_color() {
    let out = over([0, 0, 0, 255], [128, 0, 0, 128]);
    assert_eq!(out, [128, 0, 0, 255]);
}

#[test]
fn region_lands_at_origin_only() {
    let (w, h) = (4u32, 3u32);
    let mut dst = [0u8, 0, 0, 255].repeat((w * h) as usize);
    let src = [9u8, 8, 7, 255].repeat(2);

    over_region_in_place(&mut dst, w, &src, 2, (1, 2)).unwrap();

    let px = |x: u32, y: u32| {
        let i = ((y * w + x) * 4) as usize;
        [dst[i], dst[i + 1], dst[i + 2], dst[i + 3]]
    };
    assert_eq!(px(1, 2), [9, 8, 7, 255]);
    assert_eq!(px(2, 2), [9, 8, 7, 255]);
    assert_eq!(px(0, 2), [0, 0, 0, 255]);
    assert_eq!(px(3, 2), [0, 0, 0, 255]);
    assert_eq!(px(1, 1), [0, 0, 0, 255]);
}

#[test]
fn region_out_of_bounds_is_rejected() {
    let mut dst = vec![0u8; 4 * 4 * 4];
    let src = vec![0u8; 2 * 2 * 4];
    assert!(over_region_in_place(&mut dst, 4, &src, 2, (3, 0)).is_err());
    assert!(over_region_in_place(&mut dst, 4, &src, 2, (0, 3)).is_err());
}
