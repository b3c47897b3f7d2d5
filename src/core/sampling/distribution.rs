use crate::core::base::*;
use crate::core::error::*;
use crate::core::geometry::*;
use crate::core::grid::*;

use rayon::iter::IntoParallelIterator;
use rayon::iter::ParallelIterator;

/// Piecewise-constant 1D distribution: a normalized PDF and its inclusive
/// prefix-sum CDF, both of length n. The last cumulative entry is pinned to
/// exactly 1.0 so a draw near the tail cannot fall past the final bucket.
#[derive(Debug, Clone)]
pub struct Distribution1D {
    pdf: Vec<Float>,
    cdf: Vec<Float>,
}

/// Returns the index of the cumulative bucket containing u: the number of
/// cdf entries <= u, clamped to the last index. A zero-probability bucket
/// has zero cumulative width and is never selected.
#[inline(always)]
pub fn find_interval_cdf(cdf: &[Float], u: Float) -> usize {
    let mut first = 0usize;
    let mut len = cdf.len();
    while len > 0 {
        let half = len >> 1;
        let middle = first + half;
        if cdf[middle] <= u {
            first = middle + 1;
            len -= half + 1;
        } else {
            len = half;
        }
    }
    return usize::min(first, cdf.len() - 1);
}

fn prefix_sum(pdf: &[Float]) -> Vec<Float> {
    let n = pdf.len();
    let mut cdf = vec![0.0; n];
    let mut acc = 0.0;
    for i in 0..n {
        acc += pdf[i];
        cdf[i] = Float::min(acc, 1.0);
    }
    cdf[n - 1] = 1.0;
    return cdf;
}

impl Distribution1D {
    /// Normalizes a nonnegative function into a PDF/CDF pair.
    pub fn new(f: &[Float]) -> Result<Self, SampleError> {
        if f.is_empty() {
            return Err(SampleError::invalid_input("Function must be non-empty."));
        }
        for (i, v) in f.iter().enumerate() {
            if !v.is_finite() || *v < 0.0 {
                return Err(SampleError::invalid_input(&format!(
                    "Function value at index {} must be finite and nonnegative.",
                    i
                )));
            }
        }
        let func_int: Float = f.iter().sum();
        if func_int <= 0.0 {
            return Err(SampleError::degenerate("Function integrates to zero."));
        }
        let pdf: Vec<Float> = f.iter().map(|v| v / func_int).collect();
        let cdf = prefix_sum(&pdf);
        Ok(Distribution1D { pdf, cdf })
    }

    /// The equal-probability table over n buckets.
    pub fn uniform(n: usize) -> Self {
        assert!(n > 0);
        let pdf = vec![1.0 / (n as Float); n];
        let mut cdf: Vec<Float> = (0..n).map(|i| ((i + 1) as Float) / (n as Float)).collect();
        cdf[n - 1] = 1.0;
        Distribution1D { pdf, cdf }
    }

    pub fn count(&self) -> usize {
        return self.pdf.len();
    }

    pub fn pdf(&self) -> &[Float] {
        return &self.pdf;
    }

    pub fn cdf(&self) -> &[Float] {
        return &self.cdf;
    }

    /// Inverse-CDF lookup of a uniform draw u in [0, 1).
    #[inline(always)]
    pub fn sample_index(&self, u: Float) -> usize {
        return find_interval_cdf(&self.cdf, u);
    }
}

/// The built product of distribution construction over a weight grid: the
/// normalized PDF grid, the marginal distribution over rows, and one
/// conditional distribution over columns per row. Built once, immutable
/// thereafter; sampling only reads it.
pub struct Distribution2D {
    pdf: Vec<Float>,
    resolution: Point2i,
    marginal: Distribution1D,
    conditional: Vec<Distribution1D>,
}

impl Distribution2D {
    pub fn new(grid: &WeightGrid) -> Result<Self, SampleError> {
        let width = grid.width();
        let height = grid.height();
        let total = grid.total();
        if total <= 0.0 {
            return Err(SampleError::degenerate(
                "Weight grid integrates to zero; there is no energy to sample.",
            ));
        }
        let pdf: Vec<Float> = grid.as_slice().iter().map(|w| w / total).collect();

        let mut marginal_pdf = Vec::with_capacity(height);
        for y in 0..height {
            let row = &pdf[y * width..(y + 1) * width];
            marginal_pdf.push(row.iter().sum::<Float>());
        }
        let marginal = Distribution1D::new(&marginal_pdf)?;

        // Rows are independent given the marginal, so they build in parallel.
        // A row with zero marginal probability occupies a zero-width
        // cumulative bucket and is unreachable through marginal sampling; it
        // gets a uniform table instead of a NaN-producing division.
        let conditional: Vec<Distribution1D> = (0..height)
            .into_par_iter()
            .map(|y| -> Result<Distribution1D, SampleError> {
                if marginal_pdf[y] > 0.0 {
                    let row = &pdf[y * width..(y + 1) * width];
                    Distribution1D::new(row)
                } else {
                    Ok(Distribution1D::uniform(width))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Distribution2D {
            pdf,
            resolution: Point2i::new(width as i32, height as i32),
            marginal,
            conditional,
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

    /// The normalized PDF grid, row-major. Read-only; exposed for
    /// visualization consumers.
    pub fn pdf_grid(&self) -> &[Float] {
        return &self.pdf;
    }

    pub fn pdf_at(&self, x: usize, y: usize) -> Float {
        return self.pdf[y * self.width() + x];
    }

    pub fn marginal(&self) -> &Distribution1D {
        return &self.marginal;
    }

    pub fn conditional(&self, y: usize) -> &Distribution1D {
        return &self.conditional[y];
    }

    /// Maps a pair of uniform draws to a pixel: the y component selects the
    /// row through the marginal CDF, the x component selects the column
    /// through that row's conditional CDF.
    pub fn sample_discrete(&self, u: &Point2f) -> Point2i {
        let y = self.marginal.sample_index(u.y);
        let x = self.conditional[y].sample_index(u.x);
        return Point2i::new(x as i32, y as i32);
    }
}
