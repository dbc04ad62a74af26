use std::ops::Mul;

use super::{Vector3, Vector4};

/// A 4x4 row-major matrix, used to move and rotate shapes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    rows: [[f64; 4]; 4],
}

impl Matrix {
    pub fn new(rows: [[f64; 4]; 4]) -> Self {
        Self { rows }
    }

    #[rustfmt::skip]
    pub fn identity() -> Self {
        Self::new([
            [1., 0., 0., 0.],
            [0., 1., 0., 0.],
            [0., 0., 1., 0.],
            [0., 0., 0., 1.],
        ])
    }

    #[rustfmt::skip]
    fn euler_matrices(x: f64, y: f64, z: f64) -> (Self, Self, Self) {
        (
            Matrix::new([[1., 0., 0., 0.], [0., x.cos(), x.sin(), 0.], [0., -x.sin(), x.cos(), 0.], [0., 0., 0., 1.]]),
            Matrix::new([[y.cos(), 0., y.sin(), 0.], [0., 1., 0., 0.], [-y.sin(), 0., y.cos(), 0.], [0., 0., 0., 1.]]),
            Matrix::new([[z.cos(), z.sin(), 0., 0.], [-z.sin(), z.cos(), 0., 0.], [0., 0., 1., 0.], [0., 0., 0., 1.]]),
        )
    }

    /// Create a rigid transform: rotation about Z, then Y, then X composed as
    /// `Rz * Ry * Rx`, followed by a translation. Angles are in radians.
    ///
    /// Renders depend on this exact order and sign layout, so don't "fix" it.
    pub fn transformation(translation: Vector3, rotation: Vector3) -> Self {
        let (rx, ry, mut rz) = Self::euler_matrices(rotation.x, rotation.y, rotation.z);
        rz.rows[0][3] = translation.x;
        rz.rows[1][3] = translation.y;
        rz.rows[2][3] = translation.z;
        rz * ry * rx
    }

    pub fn row(&self, i: usize) -> Vector4 {
        let r = self.rows[i];
        Vector4::new(r[0], r[1], r[2], r[3])
    }

    pub fn column(&self, j: usize) -> Vector4 {
        Vector4::new(
            self.rows[0][j],
            self.rows[1][j],
            self.rows[2][j],
            self.rows[3][j],
        )
    }

    /// Apply this matrix to a point (translation included).
    pub fn transform_point(&self, point: Vector3) -> Vector3 {
        (*self * Vector4::point(point)).xyz()
    }

    /// Apply this matrix to a direction (translation ignored).
    pub fn transform_direction(&self, direction: Vector3) -> Vector3 {
        (*self * Vector4::direction(direction)).xyz()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mul for Matrix {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        let a = self.rows;
        let b = rhs.rows;
        let mut o = [[0.; 4]; 4];

        for i in 0..4 {
            for j in 0..4 {
                for k in 0..4 {
                    o[i][j] += a[i][k] * b[k][j];
                }
            }
        }

        Self::new(o)
    }
}

impl Mul<Vector4> for Matrix {
    type Output = Vector4;

    fn mul(self, rhs: Vector4) -> Self::Output {
        Vector4::new(
            self.row(0).dot(rhs),
            self.row(1).dot(rhs),
            self.row(2).dot(rhs),
            self.row(3).dot(rhs),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;

    fn close(a: Vector3, b: Vector3) -> bool {
        (a - b).magnitude() < 1e-9
    }

    #[test]
    fn test_identity_is_neutral() {
        let m = Matrix::transformation(Vector3::new(1., 2., 3.), Vector3::new(0.3, 0.2, 0.1));
        assert_eq!(m * Matrix::identity(), m);
        assert_eq!(Matrix::identity() * m, m);
    }

    #[test]
    fn test_translation_only_moves_points() {
        let m = Matrix::transformation(Vector3::new(5., -2., 1.), Vector3::zero());
        let v = Vector3::new(1., 1., 1.);

        assert_eq!(m.transform_point(v), Vector3::new(6., -1., 2.));
        assert_eq!(m.transform_direction(v), v);
    }

    #[test]
    fn test_rotation_sign_layout() {
        // the Z rotation carries +sin in the first row
        let m = Matrix::transformation(Vector3::zero(), Vector3::new(0., 0., FRAC_PI_2));
        assert!(close(
            m.transform_direction(Vector3::new(1., 0., 0.)),
            Vector3::new(0., -1., 0.)
        ));

        let m = Matrix::transformation(Vector3::zero(), Vector3::new(FRAC_PI_2, 0., 0.));
        assert!(close(
            m.transform_direction(Vector3::new(0., 1., 0.)),
            Vector3::new(0., 0., -1.)
        ));

        let m = Matrix::transformation(Vector3::zero(), Vector3::new(0., FRAC_PI_2, 0.));
        assert!(close(
            m.transform_direction(Vector3::new(0., 0., 1.)),
            Vector3::new(1., 0., 0.)
        ));
    }

    #[test]
    fn test_composition_order_is_z_y_x() {
        let (rx, ry, rz) = (0.4, -1.1, 2.3);
        let m = Matrix::transformation(Vector3::zero(), Vector3::new(rx, ry, rz));
        let only = |r: Vector3| Matrix::transformation(Vector3::zero(), r);
        let expected = only(Vector3::new(0., 0., rz))
            * only(Vector3::new(0., ry, 0.))
            * only(Vector3::new(rx, 0., 0.));

        let v = Vector3::new(0.7, -3., 12.);
        assert!(close(m.transform_point(v), expected.transform_point(v)));
    }

    #[test]
    fn test_rows_and_columns() {
        let m = Matrix::transformation(Vector3::new(1., 2., 3.), Vector3::zero());
        assert_eq!(m.column(3), Vector4::new(1., 2., 3., 1.));
        assert_eq!(m.row(3), Vector4::new(0., 0., 0., 1.));
    }
}
