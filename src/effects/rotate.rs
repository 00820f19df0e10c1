use image::RgbImage;

/// Keys cubic convolution parameter used for bicubic sampling.
const CUBIC_A: f64 = -0.5;

fn cubic_weight(t: f64) -> f64 {
    let t = t.abs();
    if t <= 1.0 {
        ((CUBIC_A + 2.0) * t - (CUBIC_A + 3.0)) * t * t + 1.0
    } else if t < 2.0 {
        (((t - 5.0) * t + 8.0) * t - 4.0) * CUBIC_A
    } else {
        0.0
    }
}

/// Rotate `src` counter-clockwise by `degrees` about its center, keeping its size.
///
/// Output pixels whose source position falls outside the image are black. Interior samples
/// use a 4×4 bicubic kernel with edge-clamped taps.
pub fn rotate_bicubic(src: &RgbImage, degrees: f64) -> RgbImage {
    let (w, h) = src.dimensions();
    if w == 0 || h == 0 || degrees.rem_euclid(360.0) == 0.0 {
        return src.clone();
    }

    let (sin, cos) = degrees.to_radians().sin_cos();
    let (cx, cy) = (f64::from(w) / 2.0, f64::from(h) / 2.0);
    let (wf, hf) = (f64::from(w), f64::from(h));

    RgbImage::from_fn(w, h, |x, y| {
        let dx = f64::from(x) + 0.5 - cx;
        let dy = f64::from(y) + 0.5 - cy;
        let sx = dx * cos - dy * sin + cx;
        let sy = dx * sin + dy * cos + cy;
        if sx < 0.0 || sy < 0.0 || sx >= wf || sy >= hf {
            return image::Rgb([0, 0, 0]);
        }
        image::Rgb(sample_bicubic(src, sx - 0.5, sy - 0.5))
    })
}

fn sample_bicubic(src: &RgbImage, fx: f64, fy: f64) -> [u8; 3] {
    let (w, h) = src.dimensions();
    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = fx - x0;
    let ty = fy - y0;
    let (x0, y0) = (x0 as i64, y0 as i64);

    let mut acc = [0f64; 3];
    for j in -1..=2i64 {
        let wy = cubic_weight(ty - j as f64);
        if wy == 0.0 {
            continue;
        }
        let py = (y0 + j).clamp(0, i64::from(h) - 1) as u32;
        for i in -1..=2i64 {
            let wx = cubic_weight(tx - i as f64);
            if wx == 0.0 {
                continue;
            }
            let px = (x0 + i).clamp(0, i64::from(w) - 1) as u32;
            let p = src.get_pixel(px, py).0;
            let wt = wx * wy;
            for c in 0..3 {
                acc[c] += wt * f64::from(p[c]);
            }
        }
    }
    acc.map(|v| v.round().clamp(0.0, 255.0) as u8)
}

#[cfg(test)]
#[path = "../../tests/unit/effects/rotate.rs"]
mod tests;
