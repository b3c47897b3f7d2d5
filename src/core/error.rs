use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleErrorKind {
    /// The weight grid (or a required row) carries no energy to sample.
    DegenerateDistribution,
    /// Negative, non-finite, or mis-shaped input data.
    InvalidInput,
    /// An inverse-CDF lookup produced an index outside the table. This is an
    /// internal-invariant violation, not a recoverable condition.
    OutOfRangeSample,
    Io,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleError {
    pub kind: SampleErrorKind,
    pub message: String,
}

impl SampleError {
    pub fn degenerate(msg: &str) -> Self {
        SampleError {
            kind: SampleErrorKind::DegenerateDistribution,
            message: String::from(msg),
        }
    }

    pub fn invalid_input(msg: &str) -> Self {
        SampleError {
            kind: SampleErrorKind::InvalidInput,
            message: String::from(msg),
        }
    }

    pub fn out_of_range(msg: &str) -> Self {
        SampleError {
            kind: SampleErrorKind::OutOfRangeSample,
            message: String::from(msg),
        }
    }

    pub fn io(msg: &str) -> Self {
        SampleError {
            kind: SampleErrorKind::Io,
            message: String::from(msg),
        }
    }
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            SampleErrorKind::DegenerateDistribution => {
                write!(f, "degenerate distribution: {}", self.message)
            }
            SampleErrorKind::InvalidInput => write!(f, "invalid input: {}", self.message),
            SampleErrorKind::OutOfRangeSample => {
                write!(f, "out-of-range sample: {}", self.message)
            }
            SampleErrorKind::Io => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for SampleError {}

impl From<std::io::Error> for SampleError {
    fn from(value: std::io::Error) -> Self {
        let msg = value.to_string();
        return SampleError::io(&msg);
    }
}

impl From<String> for SampleError {
    fn from(value: String) -> Self {
        return SampleError::io(&value);
    }
}
