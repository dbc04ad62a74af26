mod matrix;
mod ray;
mod vector;

pub use matrix::*;
pub use ray::*;
pub use vector::*;

/// A type that can be linearly interpolated between two values of itself.
pub trait Lerp {
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for Vector3 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self * (1. - t) + other * t
    }
}

/// Area of the triangle spanned by three points.
pub fn triangle_area(a: Vector3, b: Vector3, c: Vector3) -> f64 {
    (b - a).cross(c - a).magnitude() * 0.5
}
