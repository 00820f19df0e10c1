use super::*;

fn many_colors(w: u32, h: u32) -> RgbImage {
    RgbImage::from_fn(w, h, |x, y| image::Rgb([(x * 8) as u8, (y * 8) as u8, ((x ^ y) * 4) as u8]))
}

#[test]
fn few_colors_are_indexed_exactly() {
    let img = RgbImage::from_fn(4, 4, |x, _| {
        if x < 2 {
            image::Rgb([255, 0, 0])
        } else {
            image::Rgb([0, 0, 255])
        }
    });
    let q = quantize_dithered(&img).unwrap();
    assert_eq!(q.palette.len(), 2);
    assert_eq!(q.to_rgb(), img);
}

#[test]
fn rich_images_are_reduced_to_256_colors() {
    let img = many_colors(32, 32);
    let q = quantize_dithered(&img).unwrap();
    assert!(q.palette.len() <= MAX_COLORS);
    assert_eq!(q.indices.len(), 32 * 32);
    assert!(q.indices.iter().all(|&i| usize::from(i) < q.palette.len()));
}

#[test]
fn dithering_preserves_average_color() {
    let img = many_colors(32, 32);
    let q = quantize_dithered(&img).unwrap().to_rgb();
    let mean = |im: &RgbImage, c: usize| {
        im.pixels().map(|p| f64::from(p.0[c])).sum::<f64>() / f64::from(im.width() * im.height())
    };
    for c in 0..3 {
        assert!((mean(&img, c) - mean(&q, c)).abs() < 4.0, "channel {c}");
    }
}

struct BlackWhite;

impl ColorMap for BlackWhite {
    type Color = image::Rgba<u8>;

    fn index_of(&self, color: &Self::Color) -> usize {
        usize::from(color.0[0] >= 128)
    }

    fn map_color(&self, color: &mut Self::Color) {
        let v = if color.0[0] >= 128 { 255 } else { 0 };
        color.0 = [v, v, v, 255];
    }
}

#[test]
fn error_diffusion_dithers_flat_gray_between_two_levels() {
    let mut img = RgbaImage::from_pixel(8, 8, image::Rgba([128, 128, 128, 255]));
    let idx = dither_to_indices(&mut img, &BlackWhite);
    assert_eq!(idx.len(), 64);
    let whites = idx.iter().filter(|&&i| i == 1).count();
    assert!(whites > 24 && whites < 40, "whites = {whites}");
}

#[test]
fn neuquant_path_indexes_every_pixel_into_a_full_palette() {
    // 17 * 16 = 272 distinct colors, just over the exact-palette limit.
    let img = RgbImage::from_fn(17, 16, |x, y| image::Rgb([(x * 15) as u8, (y * 16) as u8, 77]));
    let q = quantize_dithered(&img).unwrap();
    assert_eq!(q.palette.len(), MAX_COLORS);
    assert_eq!(q.indices.len(), 17 * 16);
}

#[test]
fn empty_image_is_rejected() {
    assert!(quantize_dithered(&RgbImage::new(0, 3)).is_err());
}
