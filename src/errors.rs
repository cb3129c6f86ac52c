//! Projection errors

use crate::float_types::Real;
use crate::projector::Axis;
use nalgebra::Point3;
use std::fmt::Display;

/// All the ways a projection request can fail to produce a result.
///
/// Both kinds are terminal for the invocation: they mean no valid result is
/// computable for the given input, and the caller decides how to surface
/// them. Nothing is retried and nothing is mutated on the failure paths.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProjectionError {
    /// (CollinearPlanePoints) The three plane-defining points are collinear
    CollinearPlanePoints(Point3<Real>, Point3<Real>, Point3<Real>),
    /// (AxisParallelToPlane) The constraint axis lies within or parallel to the plane
    AxisParallelToPlane(Axis),
}

impl Display for ProjectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectionError::CollinearPlanePoints(p1, p2, p3) => write!(
                f,
                "(CollinearPlanePoints) The points {}, {} and {} are collinear and do not define a plane",
                p1, p2, p3
            ),
            ProjectionError::AxisParallelToPlane(axis) => write!(
                f,
                "(AxisParallelToPlane) The {} axis is parallel to the plane, no unique intersection exists",
                axis
            ),
        }
    }
}
