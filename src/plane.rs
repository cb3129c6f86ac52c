//! Struct and functions for working with a `Plane` in Hessian normal form.

use crate::errors::ProjectionError;
use crate::float_types::{EPSILON, Real};
use crate::projector::Axis;
use nalgebra::{Point3, Vector3};

/// A plane in Hessian normal form (plane equation: `n · p = w`).
#[derive(Debug, Clone, PartialEq)]
pub struct Plane {
    /// Unit normal vector of the plane
    normal: Vector3<Real>,
    /// Distance from origin along normal
    w: Real,
}

impl Plane {
    /// Create a new plane from a normal vector and distance from origin.
    /// The normal is normalized; `w` is kept verbatim.
    pub fn from_normal(normal: Vector3<Real>, w: Real) -> Self {
        Plane {
            normal: normal.normalize(),
            w,
        }
    }

    /// Create a plane from three points.
    /// The normal direction follows the right-hand rule: `(p2 - p1) × (p3 - p1)`.
    ///
    /// Collinear points leave the cross product shorter than [`EPSILON`] and
    /// are rejected with [`ProjectionError::CollinearPlanePoints`].
    pub fn from_points(
        p1: Point3<Real>,
        p2: Point3<Real>,
        p3: Point3<Real>,
    ) -> Result<Self, ProjectionError> {
        let edge1 = p2 - p1;
        let edge2 = p3 - p1;
        let cross = edge1.cross(&edge2);

        if cross.norm() < EPSILON {
            return Err(ProjectionError::CollinearPlanePoints(p1, p2, p3));
        }

        let normal = cross.normalize();
        let w = normal.dot(&p1.coords);
        Ok(Plane { normal, w })
    }

    /// Get the plane normal
    pub const fn normal(&self) -> Vector3<Real> {
        self.normal
    }

    /// Get the offset (distance from origin)
    pub const fn offset(&self) -> Real {
        self.w
    }

    /// Flip the plane (reverse normal and distance)
    pub fn flip(&mut self) {
        self.normal = -self.normal;
        self.w = -self.w;
    }

    /// Signed distance from `point` to the plane.
    /// Positive on the side the normal points toward, negative on the other.
    pub fn signed_distance(&self, point: &Point3<Real>) -> Real {
        self.normal.dot(&point.coords) - self.w
    }

    /// Orthogonal projection of `point` onto the plane.
    pub fn project_point(&self, point: &Point3<Real>) -> Point3<Real> {
        *point - self.normal * self.signed_distance(point)
    }

    /// Parameter `t` such that `point + t * axis.direction()` lies on the
    /// plane.
    ///
    /// When the axis direction is (near) perpendicular to the normal, the
    /// line along it never crosses the plane (or lies inside it) and there is
    /// no unique intersection, so [`ProjectionError::AxisParallelToPlane`] is
    /// returned.
    pub fn intersect_axis(
        &self,
        point: &Point3<Real>,
        axis: Axis,
    ) -> Result<Real, ProjectionError> {
        let denominator = self.normal.dot(&axis.direction());
        if denominator.abs() < EPSILON {
            return Err(ProjectionError::AxisParallelToPlane(axis));
        }
        Ok(-self.signed_distance(point) / denominator)
    }
}
