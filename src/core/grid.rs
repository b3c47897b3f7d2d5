use crate::core::base::*;
use crate::core::error::*;
use crate::core::geometry::*;

/// Immutable H x W matrix of nonnegative weights, row-major. The input
/// density shape for distribution construction; arbitrary scale.
#[derive(Debug, Clone)]
pub struct WeightGrid {
    weights: Vec<Float>,
    resolution: Point2i,
}

impl WeightGrid {
    pub fn new(weights: Vec<Float>, width: usize, height: usize) -> Result<Self, SampleError> {
        if width == 0 || height == 0 {
            return Err(SampleError::invalid_input(&format!(
                "Weight grid resolution must be nonzero: {}x{}.",
                width, height
            )));
        }
        if weights.len() != width * height {
            return Err(SampleError::invalid_input(&format!(
                "Weight grid has {} entries for a {}x{} resolution.",
                weights.len(),
                width,
                height
            )));
        }
        for (i, w) in weights.iter().enumerate() {
            if !w.is_finite() {
                return Err(SampleError::invalid_input(&format!(
                    "Weight at ({}, {}) is not finite.",
                    i % width,
                    i / width
                )));
            }
            if *w < 0.0 {
                return Err(SampleError::invalid_input(&format!(
                    "Weight at ({}, {}) is negative.",
                    i % width,
                    i / width
                )));
            }
        }
        Ok(WeightGrid {
            weights,
            resolution: Point2i::new(width as i32, height as i32),
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        return self.resolution.x as usize;
    }

    #[inline]
    pub fn height(&self) -> usize {
        return self.resolution.y as usize;
    }

    pub fn resolution(&self) -> Point2i {
        return self.resolution;
    }

    #[inline]
    pub fn at(&self, x: usize, y: usize) -> Float {
        return self.weights[y * self.width() + x];
    }

    pub fn row(&self, y: usize) -> &[Float] {
        let w = self.width();
        return &self.weights[y * w..(y + 1) * w];
    }

    pub fn as_slice(&self) -> &[Float] {
        return &self.weights;
    }

    pub fn total(&self) -> Float {
        return self.weights.iter().sum();
    }
}
