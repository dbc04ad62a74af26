mod mesh;
mod plane;
mod sphere;
mod triangle;

use std::fmt::Debug;

use crate::{
    error::TraceError,
    material::Material,
    math::{Matrix, Ray, Vector3},
};

pub use mesh::*;
pub use plane::*;
pub use sphere::*;
pub use triangle::*;

/// The result of a ray intersection: where the ray struck, and how far along
/// the ray (in multiples of its direction) that point is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub point: Vector3,
    pub t: f64,
}

impl Hit {
    pub fn new(point: Vector3, t: f64) -> Self {
        Self { point, t }
    }
}

/// A trait that represents any type that can be intersected by a Ray.
pub trait Intersect {
    /// Find the intersection, if any, between the ray provided and this shape.
    fn intersect(&self, ray: &Ray) -> Option<Hit>;

    /// The unit surface normal at a point on this shape.
    fn normal_at(&self, point: Vector3) -> Vector3;
}

/// A shape that can be moved and rotated in place about its own pivot.
pub trait Transform {
    /// Rotate (radians, composed Z then Y then X) about the pivot, then translate.
    fn transform(&mut self, translation: Vector3, rotation: Vector3);
}

/// A trait that represents any type that is a scene object, and can thus be viewed in the final render.
pub trait SceneObject: Intersect + Transform + Debug + Send + Sync {
    /// Grab this scene object's material.
    fn material(&self) -> &Material;

    /// Check the object's invariants before rendering.
    fn validate(&self) -> Result<(), TraceError> {
        self.material().validate()
    }
}

/// Move a point with `matrix`, treating `pivot` as the origin.
pub(crate) fn about_pivot(matrix: &Matrix, point: Vector3, pivot: Vector3) -> Vector3 {
    matrix.transform_point(point - pivot) + pivot
}
