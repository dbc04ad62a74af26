use crate::{
    error::TraceError,
    material::Material,
    math::{Matrix, Ray, Vector3},
    scene::EPSILON,
};

use super::{about_pivot, Hit, Intersect, SceneObject, Transform};

/// A sphere.
#[derive(Debug, Clone)]
pub struct Sphere {
    pub position: Vector3,
    pub radius: f64,

    /// The point rotations are applied about. Starts at the sphere's center.
    pub pivot: Vector3,
    pub material: Material,
}

impl Sphere {
    pub fn new(position: Vector3, radius: f64, material: Material) -> Self {
        Self {
            position,
            radius,
            pivot: position,
            material,
        }
    }

    pub fn with_pivot(mut self, pivot: Vector3) -> Self {
        self.pivot = pivot;
        self
    }
}

impl Intersect for Sphere {
    /// Only the near root is considered. A ray starting inside the sphere
    /// therefore never hits it.
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let a = ray.direction.dot(ray.direction);
        let b = (ray.origin - self.position).dot(ray.direction) * 2.;
        let c = ray.origin.dot(ray.origin) - 2. * self.position.dot(ray.origin)
            + self.position.dot(self.position)
            - self.radius * self.radius;

        let discriminant = b * b - 4. * a * c;
        if discriminant < 0. {
            return None;
        }

        let t = (-b - discriminant.sqrt()) / (2. * a);
        if t <= EPSILON {
            return None;
        }

        Some(Hit::new(ray.along(t), t))
    }

    fn normal_at(&self, point: Vector3) -> Vector3 {
        (point - self.position).normalize()
    }
}

impl Transform for Sphere {
    fn transform(&mut self, translation: Vector3, rotation: Vector3) {
        let m = Matrix::transformation(translation, rotation);
        self.position = about_pivot(&m, self.position, self.pivot);
        self.pivot = about_pivot(&m, self.pivot, self.pivot);
    }
}

impl SceneObject for Sphere {
    fn material(&self) -> &Material {
        &self.material
    }

    fn validate(&self) -> Result<(), TraceError> {
        if !(self.radius > 0.) {
            return Err(TraceError::InvalidRadius(self.radius));
        }
        self.material.validate()
    }
}
