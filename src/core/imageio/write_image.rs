use crate::core::base::*;
use crate::core::error::*;
use crate::core::geometry::*;
use crate::core::misc::*;

use image::*;

fn to_byte(v: Float) -> u8 {
    Float::clamp(255.0 * gamma_correct(v), 0.0, 255.0) as u8
}

fn to_byte_image(pixels: &[[Float; 3]], resolution: &Point2i) -> Vec<u8> {
    let width = resolution.x as usize;
    let height = resolution.y as usize;
    let mut byte_img: Vec<u8> = vec![0; width * height * 3];
    for i in 0..width * height {
        byte_img[3 * i + 0] = to_byte(pixels[i][0]);
        byte_img[3 * i + 1] = to_byte(pixels[i][1]);
        byte_img[3 * i + 2] = to_byte(pixels[i][2]);
    }
    return byte_img;
}

fn save_rgb(name: &str, byte_img: Vec<u8>, resolution: &Point2i) -> Result<(), SampleError> {
    let img = RgbImage::from_vec(resolution.x as u32, resolution.y as u32, byte_img).unwrap();
    match img.save(name) {
        Ok(()) => {
            return Ok(());
        }
        Err(e) => {
            return Err(SampleError::from(e));
        }
    }
}

/// Writes linear RGB pixels as a gamma-corrected 8-bit image.
pub fn write_image(
    name: &str,
    pixels: &[[Float; 3]],
    resolution: &Point2i,
) -> Result<(), SampleError> {
    let byte_img = to_byte_image(pixels, resolution);
    return save_rgb(name, byte_img, resolution);
}

/// Writes the gamma-corrected preview with sample points splatted in red,
/// a 3x3 dot per sample.
pub fn write_overlay(
    name: &str,
    pixels: &[[Float; 3]],
    resolution: &Point2i,
    samples: &[Point2i],
) -> Result<(), SampleError> {
    let width = resolution.x;
    let height = resolution.y;
    let mut byte_img = to_byte_image(pixels, resolution);
    for s in samples {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let x = s.x + dx;
                let y = s.y + dy;
                if x < 0 || x >= width || y < 0 || y >= height {
                    continue;
                }
                let index = (y * width + x) as usize;
                byte_img[3 * index + 0] = 255;
                byte_img[3 * index + 1] = 0;
                byte_img[3 * index + 2] = 0;
            }
        }
    }
    return save_rgb(name, byte_img, resolution);
}

/// Writes a nonnegative scalar grid as a grayscale heatmap, scaled so the
/// peak value maps to white.
pub fn write_heatmap(
    name: &str,
    values: &[Float],
    resolution: &Point2i,
) -> Result<(), SampleError> {
    let width = resolution.x as usize;
    let height = resolution.y as usize;
    if values.len() != width * height {
        return Err(SampleError::invalid_input(&format!(
            "{} values for a {}x{} resolution.",
            values.len(),
            width,
            height
        )));
    }
    let peak = values.iter().cloned().fold(0.0, Float::max);
    if peak <= 0.0 {
        return Err(SampleError::degenerate("Heatmap has no positive values."));
    }
    let mut byte_img: Vec<u8> = vec![0; width * height];
    for i in 0..width * height {
        byte_img[i] = to_byte(values[i] / peak);
    }
    let img = GrayImage::from_vec(width as u32, height as u32, byte_img).unwrap();
    match img.save(name) {
        Ok(()) => {
            return Ok(());
        }
        Err(e) => {
            return Err(SampleError::from(e));
        }
    }
}
