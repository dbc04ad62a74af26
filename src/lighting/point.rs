use crate::math::Vector3;

/// A point light, which is a light that emits in all directions from a specified position.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    /// The position in space of this light.
    pub position: Vector3,

    /// Multiplier applied to the Phong illumination. There is no falloff with distance.
    pub intensity: f64,
}

impl Point {
    pub fn new(position: Vector3, intensity: f64) -> Self {
        Self {
            position,
            intensity,
        }
    }
}

impl Default for Point {
    fn default() -> Self {
        Self {
            position: Vector3::new(1000., 1000., 1000.),
            intensity: 1.,
        }
    }
}
