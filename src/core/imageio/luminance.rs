use crate::core::base::*;
use crate::core::error::*;
use crate::core::geometry::*;
use crate::core::grid::*;

/// Default channel weighting for deriving sampling luminance from RGB.
pub const DEFAULT_LUMA_WEIGHTS: [Float; 3] = [0.2, 0.6, 0.1];

#[inline]
pub fn luminance(rgb: &[Float; 3], weights: &[Float; 3]) -> Float {
    let mut y = 0.0;
    for i in 0..3 {
        y += Float::max(rgb[i], 0.0) * weights[i];
    }
    return y;
}

/// Collapses RGB pixels into the luminance weight grid that drives
/// distribution construction.
pub fn luminance_grid(
    pixels: &[[Float; 3]],
    resolution: &Point2i,
    weights: &[Float; 3],
) -> Result<WeightGrid, SampleError> {
    let width = resolution.x as usize;
    let height = resolution.y as usize;
    if pixels.len() != width * height {
        return Err(SampleError::invalid_input(&format!(
            "{} pixels for a {}x{} resolution.",
            pixels.len(),
            width,
            height
        )));
    }
    let mut w = Vec::with_capacity(pixels.len());
    for p in pixels {
        w.push(luminance(p, weights));
    }
    return WeightGrid::new(w, width, height);
}
