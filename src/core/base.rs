/// Scalar type for all distribution tables. The cumulative tables carry
/// prefix sums that must stay within 1e-9 of one, so doubles throughout.
pub type Float = f64;

pub const DOUBLE_ONE_MINUS_EPSILON: f64 = 0.99999999999999989;
pub const FLOAT_ONE_MINUS_EPSILON: f32 = 0.99999994;

pub const ONE_MINUS_EPSILON: Float = DOUBLE_ONE_MINUS_EPSILON;
