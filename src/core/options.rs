use crate::core::base::*;
use crate::core::error::*;
use crate::core::imageio::luminance::DEFAULT_LUMA_WEIGHTS;

use serde::{Deserialize, Serialize};
use std::fs::read_to_string;

/// Pipeline configuration: how many samples to draw, how the generator is
/// seeded, and how luminance is derived from the image channels. Owned by
/// the caller; the core components take plain values.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SampleOptions {
    pub sample_count: usize,
    pub rng_seed: Option<u64>,
    pub channel_weights: [Float; 3],
}

impl Default for SampleOptions {
    fn default() -> Self {
        SampleOptions {
            sample_count: 500,
            rng_seed: None,
            channel_weights: DEFAULT_LUMA_WEIGHTS,
        }
    }
}

impl SampleOptions {
    pub fn from_file(path: &str) -> Result<Self, SampleError> {
        let s = read_to_string(path)
            .map_err(|_| SampleError::io(&format!("Unable to open file \"{}\".", path)))?;
        let options: SampleOptions =
            serde_json::from_str(&s).map_err(|e| SampleError::invalid_input(&e.to_string()))?;
        options.validate()?;
        return Ok(options);
    }

    pub fn validate(&self) -> Result<(), SampleError> {
        if self.sample_count == 0 {
            return Err(SampleError::invalid_input("Sample count must be positive."));
        }
        for w in self.channel_weights.iter() {
            if !w.is_finite() || *w < 0.0 {
                return Err(SampleError::invalid_input(
                    "Channel weights must be finite and nonnegative.",
                ));
            }
        }
        return Ok(());
    }
}
