use super::*;

#[test]
fn standard_palette_has_sixty_entries() {
    let p = ColorPalette::standard();
    assert_eq!(p.len(), 60);
    assert!(!p.is_empty());
}

#[test]
fn standard_palette_repeats_base_hues_in_order() {
    let p = ColorPalette::standard();
    for (i, c) in p.iter().enumerate() {
        assert_eq!(c, BASE_HUES[i % BASE_HUES.len()], "entry {i}");
    }
    assert_eq!(p.get(0), Some(Rgb8::new(255, 0, 0)));
    assert_eq!(p.get(11), Some(Rgb8::new(255, 0, 127)));
    assert_eq!(p.get(12), Some(Rgb8::new(255, 0, 0)));
    assert_eq!(p.get(60), None);
}

#[test]
fn repeated_zero_times_is_empty() {
    assert!(ColorPalette::repeated(&BASE_HUES, 0).is_empty());
}
