// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Absolute tolerance for the degeneracy checks: a cross product shorter than
/// this does not define a plane, and an axis whose dot product with the plane
/// normal is smaller in magnitude than this is treated as parallel to it.
///
/// The tolerance is absolute, not scaled by input magnitude. Inputs far from
/// unit scale may pass or fail the checks earlier than a relative tolerance
/// would; callers working at extreme scales should pre-scale their points.
pub const EPSILON: Real = 1e-6;
