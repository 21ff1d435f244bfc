pub mod aabb;
pub mod plane;

pub use glam::{dvec3, DVec3};
pub use aabb::Aabb3;
pub use plane::Plane;

pub type Point3 = DVec3;
pub type Vector3 = DVec3;
