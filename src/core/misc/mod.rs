pub mod misc;
pub mod progressreporter;

pub use misc::*;
pub use progressreporter::*;
