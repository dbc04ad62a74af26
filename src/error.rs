use thiserror::Error;

/// Everything that can go wrong while setting up or rendering a scene.
#[derive(Error, Debug)]
pub enum TraceError {
    #[error("vector component index {index} is out of range for a vector of length {len}")]
    ComponentIndex { index: usize, len: usize },

    #[error("material {field} must be {expected}, got {value}")]
    InvalidMaterial {
        field: &'static str,
        expected: &'static str,
        value: f64,
    },

    #[error("sphere radius must be positive, got {0}")]
    InvalidRadius(f64),

    #[error("camera focal length must be positive, got {0}")]
    InvalidFocalLength(f64),

    #[error("light intensity must be a non-negative finite number, got {0}")]
    InvalidIntensity(f64),

    #[error("area light radius must be a non-negative finite number, got {0}")]
    InvalidLightRadius(f64),

    #[error("area light needs at least one sample")]
    NoLightSamples,

    #[error("cannot render an image of size {0}x{1}")]
    InvalidDimensions(u32, u32),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("obj error: {0}")]
    Obj(#[from] tobj::LoadError),
}
