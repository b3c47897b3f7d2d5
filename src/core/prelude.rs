pub use super::base::*;
pub use super::error::*;
pub use super::geometry::*;
pub use super::grid::*;
pub use super::imageio::*;
pub use super::misc::*;
pub use super::options::*;
pub use super::rng::*;
pub use super::sampling::*;
