mod area;
mod point;

use crate::{error::TraceError, math::Vector3};

pub use area::*;
pub use point::*;

/// The single light source of a scene.
#[derive(Clone, Debug)]
pub enum Light {
    /// Hard shadows from one position.
    Point(Point),

    /// Soft shadows from a ring of point samples.
    Area(Area),
}

impl Light {
    pub fn intensity(&self) -> f64 {
        match self {
            Self::Point(p) => p.intensity,
            Self::Area(a) => a.intensity,
        }
    }

    /// How many light positions each primary ray is shaded against.
    pub fn sample_count(&self) -> u32 {
        match self {
            Self::Point(_) => 1,
            Self::Area(a) => a.samples,
        }
    }

    /// The light position used for sample `index`.
    pub fn sample_position(&self, index: u32) -> Vector3 {
        match self {
            Self::Point(p) => p.position,
            Self::Area(a) => a.sample(index),
        }
    }

    pub fn validate(&self) -> Result<(), TraceError> {
        let intensity = self.intensity();
        if !intensity.is_finite() || intensity < 0. {
            return Err(TraceError::InvalidIntensity(intensity));
        }

        if let Self::Area(a) = self {
            if !a.radius.is_finite() || a.radius < 0. {
                return Err(TraceError::InvalidLightRadius(a.radius));
            }
        }

        if self.sample_count() == 0 {
            return Err(TraceError::NoLightSamples);
        }

        Ok(())
    }
}

impl From<Point> for Light {
    fn from(p: Point) -> Self {
        Self::Point(p)
    }
}

impl From<Area> for Light {
    fn from(a: Area) -> Self {
        Self::Area(a)
    }
}
