pub mod luminance;
pub mod read_image;
pub mod write_image;

pub use luminance::*;
pub use read_image::*;
pub use write_image::*;
