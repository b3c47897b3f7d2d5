use crate::core::error::*;
use crate::core::geometry::*;
use crate::core::rng::RandomSource;

use super::distribution::*;

/// Draws pixel coordinates from a prebuilt 2D distribution, row first, then
/// column within the row. The tables are never mutated; every draw pulls
/// fresh uniforms from the injected source, so re-invoking over the same
/// tables yields a new independent sample set.
pub struct ImportanceSampler<'a> {
    dist: &'a Distribution2D,
}

impl<'a> ImportanceSampler<'a> {
    pub fn new(dist: &'a Distribution2D) -> Self {
        ImportanceSampler { dist }
    }

    /// One draw: u_y selects the row, u_x the column within it.
    pub fn sample(&self, source: &mut dyn RandomSource) -> Result<Point2i, SampleError> {
        let u_y = source.uniform_float();
        let y = self.dist.marginal().sample_index(u_y);
        if y >= self.dist.height() {
            return Err(SampleError::out_of_range(&format!(
                "Marginal lookup produced row {} for a grid of height {}.",
                y,
                self.dist.height()
            )));
        }
        let u_x = source.uniform_float();
        let x = self.dist.conditional(y).sample_index(u_x);
        if x >= self.dist.width() {
            return Err(SampleError::out_of_range(&format!(
                "Conditional lookup produced column {} for a grid of width {}.",
                x,
                self.dist.width()
            )));
        }
        return Ok(Point2i::new(x as i32, y as i32));
    }

    /// Draws n i.i.d. samples in draw order.
    pub fn generate_samples(
        &self,
        n: usize,
        source: &mut dyn RandomSource,
    ) -> Result<Vec<Point2i>, SampleError> {
        let mut samples = Vec::with_capacity(n);
        for _ in 0..n {
            samples.push(self.sample(source)?);
        }
        return Ok(samples);
    }
}
