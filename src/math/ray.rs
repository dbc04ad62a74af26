use super::Vector3;

/// A ray. The direction does not have to be normalized; shadow rays rely on
/// an un-normalized direction so that `t = 1` lands exactly on the light.
#[derive(Clone, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vector3,
    pub direction: Vector3,
}

impl Ray {
    /// Instantiate a new Ray.
    pub fn new(origin: Vector3, direction: Vector3) -> Self {
        Self { origin, direction }
    }

    pub fn along(&self, t: f64) -> Vector3 {
        self.origin + self.direction * t
    }

    /// Mirror this ray off of a surface at `pos`.
    pub fn reflect(&self, pos: Vector3, normal: Vector3) -> Ray {
        Ray::new(pos, (-self.direction).reflect(normal))
    }
}
