use crate::math::{Ray, Vector3};

/// A pinhole camera. Camera space is world space: the camera always looks
/// down -Z, and `direction` is informational only.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vector3,
    pub direction: Vector3,

    /// Distance from the camera to the lens plane, in pixels.
    pub focal_length: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vector3::new(0., 0., 1100.),
            direction: Vector3::new(0., 0., -1.),
            focal_length: 600.,
        }
    }
}

impl Camera {
    pub fn new(position: Vector3, focal_length: f64) -> Self {
        Self {
            position,
            focal_length,
            ..Default::default()
        }
    }

    /// The ray through the lens-plane point `(x, y)`, where `(0, 0)` is the
    /// center of the image and +y is up.
    pub fn primary_ray(&self, x: f64, y: f64) -> Ray {
        let on_lens = Vector3::new(x, y, -self.focal_length);
        Ray::new(self.position, on_lens.normalize())
    }
}
