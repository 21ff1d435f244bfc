use crate::{Point3, Vector3};
use serde::{Deserialize, Serialize};

/// A plane in 3D space defined by a point and normal.
///
/// Drop lines start on a horizontal plane built with [`Plane::base`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3,
    pub normal: Vector3,
}

impl Plane {
    pub fn new(origin: Point3, normal: Vector3) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
        }
    }

    /// Horizontal plane `z = height`.
    pub fn base(height: f64) -> Self {
        Self::new(Point3::new(0.0, 0.0, height), Vector3::Z)
    }

    /// Height of the plane along +Z, if it is horizontal.
    pub fn height(&self) -> Option<f64> {
        let horizontal = self.normal.x == 0.0 && self.normal.y == 0.0;
        horizontal.then_some(self.origin.z)
    }

    /// Signed distance from a point to this plane.
    pub fn signed_distance(&self, point: Point3) -> f64 {
        (point - self.origin).dot(self.normal)
    }

    /// Project a point onto this plane.
    pub fn project_point(&self, point: Point3) -> Point3 {
        point - self.normal * self.signed_distance(point)
    }
}
