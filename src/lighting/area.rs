use std::f64::consts::PI;

use crate::math::Vector3;

/// An area light, approximated by a ring of point lights around a center.
/// Sampling is deterministic, so renders are reproducible.
#[derive(Clone, Debug, PartialEq)]
pub struct Area {
    pub center: Vector3,

    /// Radius of the sampling ring, in the XZ plane.
    pub radius: f64,

    pub intensity: f64,

    /// The number of point samples each primary ray is shaded against.
    pub samples: u32,
}

impl Area {
    pub fn new(center: Vector3, radius: f64, intensity: f64) -> Self {
        Self {
            center,
            radius,
            intensity,
            ..Default::default()
        }
    }

    /// The position of sample `index`, evenly spaced around the ring.
    pub fn sample(&self, index: u32) -> Vector3 {
        let angle = 2. * PI * index as f64 / self.samples as f64;
        self.center + Vector3::new(angle.cos(), 0., angle.sin()) * self.radius
    }
}

impl Default for Area {
    fn default() -> Self {
        Self {
            center: Vector3::new(1000., 1000., 1000.),
            radius: 100.,
            intensity: 1.,
            samples: 50,
        }
    }
}
