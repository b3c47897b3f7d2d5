use crate::core::base::*;
use crate::core::error::*;
use crate::core::geometry::*;
use crate::core::misc::*;

use image::*;

impl From<image::ImageError> for SampleError {
    fn from(value: image::ImageError) -> Self {
        let msg = value.to_string();
        return SampleError::io(&msg);
    }
}

/// Decodes an image into linear RGB floats. LDR formats are converted out
/// of sRGB; float formats are taken as already linear. Negative channels
/// are clamped to zero.
pub fn read_image(path: &str) -> Result<(Vec<[Float; 3]>, Point2i), SampleError> {
    let img = image::open(path)?;
    let linear = matches!(img.color(), ColorType::Rgb32F | ColorType::Rgba32F);
    let rgb = img.to_rgb32f();
    let (width, height) = rgb.dimensions();
    let mut pixels = vec![[0.0; 3]; (width * height) as usize];
    for y in 0..height {
        for x in 0..width {
            let index = (y * width + x) as usize;
            let pixel = rgb[(x, y)];
            for c in 0..3 {
                let mut v = pixel[c] as Float;
                if !linear {
                    v = inverse_gamma_correct(v);
                }
                pixels[index][c] = Float::max(v, 0.0);
            }
        }
    }
    return Ok((pixels, Point2i::from((width as i32, height as i32))));
}
