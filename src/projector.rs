//! The projection surface: a request of four points and an optional axis
//! constraint, and the result that relocates the target onto the plane.

use crate::errors::ProjectionError;
use crate::float_types::Real;
use crate::plane::Plane;
use nalgebra::{Point3, Vector3};
use std::fmt::Display;

/// World axis along which a constrained projection moves the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Exact unit vector along the axis.
    pub fn direction(self) -> Vector3<Real> {
        match self {
            Axis::X => Vector3::x(),
            Axis::Y => Vector3::y(),
            Axis::Z => Vector3::z(),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

/// One flattening request: three plane-defining points, the target point to
/// relocate, and the optional axis constraint.
///
/// The caller is responsible for the selection contract: exactly three
/// plane-defining points and exactly one target. With `axis: None` the
/// target is projected along the plane normal; with `axis: Some(..)` it is
/// moved only along that world axis until it meets the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneProjectionRequest {
    pub p1: Point3<Real>,
    pub p2: Point3<Real>,
    pub p3: Point3<Real>,
    pub target: Point3<Real>,
    pub axis: Option<Axis>,
}

/// Outcome of a successful projection.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneProjectionResult {
    /// Replacement coordinate for the target point
    pub projected: Point3<Real>,
    /// Magnitude of the displacement applied to the target
    pub distance: Real,
}

impl PlaneProjectionRequest {
    /// Compute the replacement coordinate for `target`.
    ///
    /// Pure and side-effect free: applying the result to whatever vertex
    /// storage the points came from is the caller's job.
    pub fn project(&self) -> Result<PlaneProjectionResult, ProjectionError> {
        let plane = Plane::from_points(self.p1, self.p2, self.p3)?;

        match self.axis {
            None => {
                let signed_distance = plane.signed_distance(&self.target);
                Ok(PlaneProjectionResult {
                    projected: plane.project_point(&self.target),
                    distance: signed_distance.abs(),
                })
            },
            Some(axis) => {
                let t = plane.intersect_axis(&self.target, axis)?;
                // Off-axis direction components are exact zeros, so the
                // other two coordinates of the target survive bitwise.
                Ok(PlaneProjectionResult {
                    projected: self.target + axis.direction() * t,
                    distance: t.abs(),
                })
            },
        }
    }
}

/// Free-function form of [`PlaneProjectionRequest::project`].
pub fn project(
    request: &PlaneProjectionRequest,
) -> Result<PlaneProjectionResult, ProjectionError> {
    request.project()
}
