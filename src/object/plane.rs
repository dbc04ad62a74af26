use crate::{
    material::Material,
    math::{Matrix, Ray, Vector3},
    scene::EPSILON,
};

use super::{about_pivot, Hit, Intersect, SceneObject, Transform};

/// An infinite plane.
#[derive(Debug, Clone)]
pub struct Plane {
    /// Any point on the plane.
    pub point: Vector3,

    /// The normal of the plane. Does not need to be normalized.
    pub normal: Vector3,

    /// The point rotations are applied about. Starts at `point`.
    pub pivot: Vector3,

    /// The plane's material.
    pub material: Material,
}

impl Plane {
    pub fn new(point: Vector3, normal: Vector3, material: Material) -> Self {
        Self {
            point,
            normal,
            pivot: point,
            material,
        }
    }

    pub fn with_pivot(mut self, pivot: Vector3) -> Self {
        self.pivot = pivot;
        self
    }
}

impl Default for Plane {
    fn default() -> Self {
        Self::new(Vector3::zero(), Vector3::up(), Material::default())
    }
}

/// Solve `n·(o + t·d - q) = 0` for `t`. Shared with [`Triangle`](super::Triangle),
/// which first intersects its supporting plane.
pub(crate) fn plane_hit(point: Vector3, normal: Vector3, ray: &Ray) -> Option<Hit> {
    let denom = normal.dot(ray.direction);
    if denom == 0. {
        return None;
    }

    let t = -normal.dot(ray.origin - point) / denom;
    if t <= EPSILON {
        return None;
    }

    Some(Hit::new(ray.along(t), t))
}

impl Intersect for Plane {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        plane_hit(self.point, self.normal, ray)
    }

    fn normal_at(&self, _point: Vector3) -> Vector3 {
        self.normal.normalize()
    }
}

impl Transform for Plane {
    fn transform(&mut self, translation: Vector3, rotation: Vector3) {
        let m = Matrix::transformation(translation, rotation);
        self.point = about_pivot(&m, self.point, self.pivot);
        self.normal = m.transform_direction(self.normal);
        self.pivot = about_pivot(&m, self.pivot, self.pivot);
    }
}

impl SceneObject for Plane {
    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_parallel_ray_never_hits() {
        let plane = Plane::new(
            Vector3::new(0., -200., -100.),
            Vector3::new(0., 3., 0.),
            Material::default(),
        );

        let origins = [
            Vector3::zero(),
            Vector3::new(0., -200., 0.),
            Vector3::new(10., -500., 3.),
            Vector3::new(-7., 1e6, 42.),
        ];
        let directions = [
            Vector3::new(1., 0., 0.),
            Vector3::new(0., 0., -1.),
            Vector3::new(2., 0., 5.),
        ];

        for o in origins {
            for d in directions {
                assert!(plane.intersect(&Ray::new(o, d)).is_none());
            }
        }
    }

    #[test]
    fn test_hit_floor() {
        let plane = Plane::new(Vector3::new(0., -2., 0.), Vector3::up(), Material::default());
        let ray = Ray::new(Vector3::new(1., 2., 0.), Vector3::new(0., -1., 0.));
        let hit = plane.intersect(&ray).unwrap();

        assert_eq!(hit.t, 4.);
        assert_eq!(hit.point, Vector3::new(1., -2., 0.));
    }

    #[test]
    fn test_hit_from_below_and_behind() {
        let plane = Plane::default();

        // the plane is two-sided
        let below = Ray::new(Vector3::new(0., -1., 0.), Vector3::new(0., 1., 0.));
        assert!(plane.intersect(&below).is_some());

        let away = Ray::new(Vector3::new(0., 1., 0.), Vector3::new(0., 1., 0.));
        assert!(plane.intersect(&away).is_none());
    }

    #[test]
    fn test_normal_is_renormalized() {
        let plane = Plane::new(Vector3::zero(), Vector3::new(0., 0., 5.), Material::default());
        assert_eq!(plane.normal_at(Vector3::new(4., 4., 0.)), Vector3::new(0., 0., 1.));
    }

    #[test]
    fn test_transform_rotates_normal_without_translating_it() {
        let mut plane = Plane::default();
        plane.transform(Vector3::new(0., 10., 0.), Vector3::new(FRAC_PI_2, 0., 0.));

        assert!((plane.normal - Vector3::new(0., 0., -1.)).magnitude() < 1e-12);
        assert!((plane.point - Vector3::new(0., 10., 0.)).magnitude() < 1e-12);
    }
}
