//! Flatten a quad onto a plane by relocating one of its vertices.
//!
//! Three of the quad's vertices define a plane; the fourth (the *target*) is
//! moved onto that plane either by orthogonal projection along the plane
//! normal, or by sliding it along a single world axis until it meets the
//! plane. The crate is the pure geometric core of that operation: the caller
//! supplies the four points (and an optional axis constraint) and receives
//! either the replacement coordinate plus the displacement magnitude, or a
//! typed failure.
//!
//! # Features
//! - **f64**: use f64 as Real (default)
//! - **f32**: use f32 as Real, this conflicts with f64
//!
//! # Example
//! ```
//! use nalgebra::Point3;
//! use quadflat::PlaneProjectionRequest;
//!
//! let request = PlaneProjectionRequest {
//!     p1: Point3::new(0.0, 0.0, 0.0),
//!     p2: Point3::new(1.0, 0.0, 0.0),
//!     p3: Point3::new(0.0, 1.0, 0.0),
//!     target: Point3::new(3.0, 3.0, 3.0),
//!     axis: None,
//! };
//! let result = request.project().unwrap();
//! assert_eq!(result.projected, Point3::new(3.0, 3.0, 0.0));
//! assert_eq!(result.distance, 3.0);
//! ```

#![forbid(unsafe_code)]
#![deny(unused)]
#![warn(clippy::missing_const_for_fn, clippy::approx_constant, clippy::all)]

pub mod errors;
pub mod float_types;
pub mod plane;
pub mod projector;

#[cfg(any(all(feature = "f64", feature = "f32"), not(any(feature = "f64", feature = "f32"))))]
compile_error!("Either 'f64' or 'f32' feature must be specified, but not both");

pub use errors::ProjectionError;
pub use plane::Plane;
pub use projector::{Axis, PlaneProjectionRequest, PlaneProjectionResult, project};
