use crate::{error::TraceError, math::Vector3};

/// A 24-bit color, RGB.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub fn white() -> Self {
        Self::new(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0)
    }

    pub fn gray() -> Self {
        Self::new(128, 128, 128)
    }

    /// Instantiate a new Color.
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Sum of the three channels, handy for comparing brightness.
    pub fn luma(self) -> u32 {
        self.r as u32 + self.g as u32 + self.b as u32
    }
}

/// Clamp a shaded channel to 0..=255. NaN (e.g. a negative base raised to a
/// fractional shininess) counts as no light.
pub fn clamp_channel(c: f64) -> f64 {
    if c.is_nan() {
        0.
    } else {
        c.clamp(0., 255.)
    }
}

/// Shading happens in 0..255 space on Vector3s; converting truncates.
impl From<Vector3> for Color {
    fn from(v: Vector3) -> Self {
        Self {
            r: clamp_channel(v.x) as u8,
            g: clamp_channel(v.y) as u8,
            b: clamp_channel(v.z) as u8,
        }
    }
}

impl From<Color> for Vector3 {
    fn from(c: Color) -> Self {
        Vector3::new(c.r as f64, c.g as f64, c.b as f64)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(c: Color) -> Self {
        image::Rgb([c.r, c.g, c.b])
    }
}

/// The Phong reflectance parameters of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Weight of the specular highlight.
    pub specularity: f64,

    /// Lambertian weight.
    pub diffusion: f64,

    /// Phong exponent applied to the specular term.
    pub shininess: f64,

    /// The fraction (0 to 1) of the final color that comes from a mirror reflection.
    pub reflectivity: f64,

    /// Base color of the surface.
    pub color: Color,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            specularity: 0.,
            diffusion: 1.,
            shininess: 0.,
            reflectivity: 0.,
            color: Color::gray(),
        }
    }
}

impl Material {
    /// Reject values that would silently produce wrong pixels.
    pub fn validate(&self) -> Result<(), TraceError> {
        let non_negative = [
            ("specularity", self.specularity),
            ("diffusion", self.diffusion),
            ("shininess", self.shininess),
        ];

        for (field, value) in non_negative {
            if !value.is_finite() || value < 0. {
                return Err(TraceError::InvalidMaterial {
                    field,
                    expected: "a non-negative finite number",
                    value,
                });
            }
        }

        if !(0. ..=1.).contains(&self.reflectivity) {
            return Err(TraceError::InvalidMaterial {
                field: "reflectivity",
                expected: "within [0, 1]",
                value: self.reflectivity,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_material() {
        let m = Material::default();
        assert_eq!(m.specularity, 0.);
        assert_eq!(m.diffusion, 1.);
        assert_eq!(m.shininess, 0.);
        assert_eq!(m.reflectivity, 0.);
        assert_eq!(m.color, Color::new(128, 128, 128));
        assert!(m.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_reflectivity() {
        let m = Material {
            reflectivity: -0.1,
            ..Default::default()
        };
        assert!(matches!(
            m.validate(),
            Err(TraceError::InvalidMaterial {
                field: "reflectivity",
                ..
            })
        ));

        let m = Material {
            reflectivity: 1.5,
            ..Default::default()
        };
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_weights() {
        let m = Material {
            diffusion: -1.,
            ..Default::default()
        };
        assert!(matches!(
            m.validate(),
            Err(TraceError::InvalidMaterial {
                field: "diffusion",
                ..
            })
        ));
    }

    #[test]
    fn test_color_conversion_clamps_and_truncates() {
        let c: Color = Vector3::new(300., -5., 127.9).into();
        assert_eq!(c, Color::new(255, 0, 127));

        let c: Color = Vector3::new(f64::NAN, 1., 2.).into();
        assert_eq!(c, Color::new(0, 1, 2));
    }
}
