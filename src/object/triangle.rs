use crate::{
    material::Material,
    math::{triangle_area, Matrix, Ray, Vector3},
};

use super::{about_pivot, plane::plane_hit, Hit, Intersect, SceneObject, Transform};

/// How far the summed sub-triangle areas may drift from the triangle's own
/// area before a point counts as outside.
pub const AREA_TOLERANCE: f64 = 1e-10;

/// A single triangle.
#[derive(Clone, Debug)]
pub struct Triangle {
    vertices: [Vector3; 3],

    /// `(v2 - v1) x (v3 - v1)`, deliberately left un-normalized: its magnitude
    /// is twice the triangle's area.
    normal: Vector3,

    centroid: Vector3,

    /// Rotations happen about this point when set, otherwise about the centroid.
    pivot: Option<Vector3>,

    pub material: Material,
}

impl Triangle {
    pub fn new(vertices: [Vector3; 3], material: Material) -> Self {
        let (normal, centroid) = Self::derive(&vertices);
        Self {
            vertices,
            normal,
            centroid,
            pivot: None,
            material,
        }
    }

    /// Rotate about `pivot` instead of the centroid. The pivot follows translations.
    pub fn with_pivot(mut self, pivot: Vector3) -> Self {
        self.pivot = Some(pivot);
        self
    }

    fn derive([v1, v2, v3]: &[Vector3; 3]) -> (Vector3, Vector3) {
        let normal = (*v2 - *v1).cross(*v3 - *v1);
        let centroid = (*v1 + *v2 + *v3) * (1. / 3.);
        (normal, centroid)
    }

    pub fn vertices(&self) -> &[Vector3; 3] {
        &self.vertices
    }

    pub fn centroid(&self) -> Vector3 {
        self.centroid
    }

    pub fn pivot(&self) -> Vector3 {
        self.pivot.unwrap_or(self.centroid)
    }

    pub fn area(&self) -> f64 {
        self.normal.magnitude() * 0.5
    }

    /// Area method: a point on the supporting plane is inside when the three
    /// sub-triangles it forms with the edges add up to the full area.
    fn contains(&self, p: Vector3) -> bool {
        let [v1, v2, v3] = self.vertices;
        let sum = triangle_area(p, v1, v2) + triangle_area(p, v2, v3) + triangle_area(p, v3, v1);
        (sum - self.area()).abs() < AREA_TOLERANCE
    }
}

impl Intersect for Triangle {
    fn intersect(&self, ray: &Ray) -> Option<Hit> {
        let hit = plane_hit(self.vertices[0], self.normal, ray)?;
        if self.contains(hit.point) {
            Some(hit)
        } else {
            None
        }
    }

    fn normal_at(&self, _point: Vector3) -> Vector3 {
        self.normal.normalize()
    }
}

impl Transform for Triangle {
    fn transform(&mut self, translation: Vector3, rotation: Vector3) {
        let m = Matrix::transformation(translation, rotation);
        let pivot = self.pivot();
        for v in self.vertices.iter_mut() {
            *v = about_pivot(&m, *v, pivot);
        }
        if let Some(p) = self.pivot.as_mut() {
            *p = about_pivot(&m, *p, *p);
        }

        let (normal, centroid) = Self::derive(&self.vertices);
        self.normal = normal;
        self.centroid = centroid;
    }
}

impl SceneObject for Triangle {
    fn material(&self) -> &Material {
        &self.material
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    fn xy_triangle() -> Triangle {
        // Triangle in XY plane at z=-1
        Triangle::new(
            [
                Vector3::new(-1., -1., -1.),
                Vector3::new(1., -1., -1.),
                Vector3::new(0., 1., -1.),
            ],
            Material::default(),
        )
    }

    #[test]
    fn test_normal_encodes_area() {
        let tri = xy_triangle();
        assert_eq!(tri.area(), 2.);
        assert_eq!(tri.normal_at(tri.centroid()), Vector3::new(0., 0., 1.));
    }

    #[test]
    fn test_centroid_is_inside() {
        let tri = xy_triangle();
        let c = tri.centroid();
        let ray = Ray::new(c + Vector3::new(0., 0., 5.), Vector3::new(0., 0., -1.));
        let hit = tri.intersect(&ray).unwrap();

        assert!((hit.t - 5.).abs() < 1e-12);
        assert!((hit.point - c).magnitude() < 1e-12);
    }

    #[test]
    fn test_outside_point_misses() {
        let tri = xy_triangle();
        let ray = Ray::new(Vector3::new(2., 2., 0.), Vector3::new(0., 0., -1.));
        assert!(tri.intersect(&ray).is_none());

        // on the supporting plane, but just past the slanted edge
        let ray = Ray::new(Vector3::new(0.6, 0.3, 0.), Vector3::new(0., 0., -1.));
        assert!(tri.intersect(&ray).is_none());
    }

    #[test]
    fn test_edge_on_and_backwards_rays_miss() {
        let tri = xy_triangle();
        let parallel = Ray::new(Vector3::new(-5., 0., -1.), Vector3::new(1., 0., 0.));
        assert!(tri.intersect(&parallel).is_none());

        let away = Ray::new(Vector3::new(0., 0., 0.), Vector3::new(0., 0., 1.));
        assert!(tri.intersect(&away).is_none());
    }

    #[test]
    fn test_transform_rederives_normal_and_centroid() {
        let mut tri = xy_triangle();
        let before = tri.centroid();
        tri.transform(Vector3::new(0., 0., -4.), Vector3::new(0., FRAC_PI_2, 0.));

        // rotated about its own centroid, so the centroid only moves by the translation
        assert!((tri.centroid() - (before + Vector3::new(0., 0., -4.))).magnitude() < 1e-12);
        assert!((tri.normal_at(tri.centroid()) - Vector3::new(1., 0., 0.)).magnitude() < 1e-12);
        assert!((tri.area() - 2.).abs() < 1e-12);

        let ray = Ray::new(
            tri.centroid() + Vector3::new(3., 0., 0.),
            Vector3::new(-1., 0., 0.),
        );
        assert!(tri.intersect(&ray).is_some());
    }

    #[test]
    fn test_transform_about_custom_pivot() {
        let mut tri = xy_triangle().with_pivot(Vector3::new(0., 0., -3.));
        tri.transform(Vector3::zero(), Vector3::new(0., PI, 0.));

        // half a turn about y swings the triangle from z = -1 over to z = -5
        assert!((tri.centroid() - Vector3::new(0., -1. / 3., -5.)).magnitude() < 1e-9);
        assert!((tri.normal_at(tri.centroid()) - Vector3::new(0., 0., -1.)).magnitude() < 1e-9);
        assert_eq!(tri.pivot(), Vector3::new(0., 0., -3.));

        tri.transform(Vector3::new(1., 0., 0.), Vector3::zero());
        assert!((tri.pivot() - Vector3::new(1., 0., -3.)).magnitude() < 1e-12);
        assert!((tri.centroid() - Vector3::new(1., -1. / 3., -5.)).magnitude() < 1e-9);
    }
}
