use std::{
    ops::{Add, AddAssign},
    path::Path,
    time::Instant,
};

use rayon::prelude::*;

use crate::{
    camera::Camera,
    error::TraceError,
    lighting::Light,
    material::{clamp_channel, Color},
    math::{Lerp, Ray, Vector3},
    object::{Hit, SceneObject},
    output::PixelSink,
};

/// A very small value, close to zero, to prevent rays from striking their own origin.
pub const EPSILON: f64 = 1e-10;

/// Sub-pixel offsets averaged for every output pixel.
const SUBSAMPLES: [(f64, f64); 4] = [(0., 0.), (0.5, 0.), (0.5, 0.5), (0., 0.5)];

/// Scene options. Defaults are provided.
#[derive(Debug, Clone)]
pub struct SceneOptions {
    /// The maximum number of mirror bounces from a primary ray.
    pub reflection_depth: u32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            reflection_depth: 3,
        }
    }
}

/// Counters gathered while tracing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub primary_rays: u64,
    pub shadow_rays: u64,

    /// Number of surface hits that went through shading, reflections included.
    pub shading_evaluations: u64,
}

impl Add for RenderStats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            primary_rays: self.primary_rays + rhs.primary_rays,
            shadow_rays: self.shadow_rays + rhs.shadow_rays,
            shading_evaluations: self.shading_evaluations + rhs.shading_evaluations,
        }
    }
}

impl AddAssign for RenderStats {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// A scene, which contains a list of objects, a light, and a camera to render from.
pub struct Scene {
    pub objects: Vec<Box<dyn SceneObject>>,
    pub light: Light,
    pub camera: Camera,
    pub options: SceneOptions,
}

impl Scene {
    pub fn new(camera: Camera, light: impl Into<Light>) -> Self {
        Self {
            objects: Vec::new(),
            light: light.into(),
            camera,
            options: SceneOptions::default(),
        }
    }

    /// Hand an object over to the scene.
    pub fn add<O: SceneObject + 'static>(&mut self, object: O) {
        self.objects.push(Box::new(object));
    }

    /// Check everything a render relies on, failing on the first bad value.
    pub fn validate(&self) -> Result<(), TraceError> {
        if !(self.camera.focal_length > 0.) {
            return Err(TraceError::InvalidFocalLength(self.camera.focal_length));
        }

        self.light.validate()?;
        for object in self.objects.iter() {
            object.validate()?;
        }

        Ok(())
    }

    /// Find the object struck closest to the ray's origin.
    pub fn nearest_hit(&self, ray: &Ray) -> Option<(&dyn SceneObject, Hit)> {
        let mut nearest: Option<(&dyn SceneObject, Hit, f64)> = None;

        for object in self.objects.iter() {
            let hit = match object.intersect(ray) {
                Some(hit) => hit,
                None => continue,
            };

            let offset = hit.point - ray.origin;
            let dist2 = offset.dot(offset);
            if nearest.map_or(true, |(_, _, best)| dist2 < best) {
                nearest = Some((object.as_ref(), hit, dist2));
            }
        }

        nearest.map(|(object, hit, _)| (object, hit))
    }

    /// Whether anything sits between `point` and `light_position`.
    fn occluded(&self, point: Vector3, light_position: Vector3, stats: &mut RenderStats) -> bool {
        stats.shadow_rays += 1;

        // not normalized: the light sits at t = 1
        let shadow_ray = Ray::new(point, light_position - point);
        self.objects
            .iter()
            .filter_map(|object| object.intersect(&shadow_ray))
            .any(|hit| hit.t < 1.)
    }

    /// Trace out a ray against every light sample and average the results.
    /// Colors are in 0..255 space. The scene is validated first.
    pub fn cast_ray(&self, ray: &Ray, depth: u32) -> Result<Vector3, TraceError> {
        self.validate()?;
        Ok(self.cast_ray_counted(ray, depth, &mut RenderStats::default()))
    }

    fn cast_ray_counted(&self, ray: &Ray, depth: u32, stats: &mut RenderStats) -> Vector3 {
        let samples = self.light.sample_count();
        let mut sum = Vector3::zero();
        for i in 0..samples {
            sum += self.cast_ray_with(ray, depth, self.light.sample_position(i), stats);
        }

        sum * (1. / samples as f64)
    }

    /// Trace out a ray lit from a single light position, recursing into
    /// mirror reflections until `reflection_depth`. Assumes a validated scene.
    fn cast_ray_with(
        &self,
        ray: &Ray,
        depth: u32,
        light_position: Vector3,
        stats: &mut RenderStats,
    ) -> Vector3 {
        let (object, hit) = match self.nearest_hit(ray) {
            Some(r) => r,
            None => return Vector3::zero(),
        };

        stats.shading_evaluations += 1;

        // no ambient term, shadows are pitch black
        if self.occluded(hit.point, light_position, stats) {
            return Vector3::zero();
        }

        let material = object.material();
        let to_light = (light_position - hit.point).normalize();
        let normal = object.normal_at(hit.point);

        let diffuse = to_light.dot(normal);
        let mut illumination = 0.;
        if diffuse > 0. {
            illumination = material.diffusion * diffuse;

            if material.specularity != 0. {
                let to_viewer = (self.camera.position - hit.point).normalize();
                let specular = to_viewer
                    .dot(to_light.reflect(normal))
                    .powf(material.shininess);
                illumination += material.specularity * specular;
            }
        }
        illumination *= self.light.intensity();

        let base: Vector3 = material.color.into();
        let lit = base * illumination;
        let color = Vector3::new(
            clamp_channel(lit.x),
            clamp_channel(lit.y),
            clamp_channel(lit.z),
        );

        if depth < self.options.reflection_depth && material.reflectivity != 0. {
            let reflected = self.cast_ray_with(
                &ray.reflect(hit.point, normal),
                depth + 1,
                light_position,
                stats,
            );

            return color.lerp(reflected, material.reflectivity);
        }

        color
    }

    /// The color seen through the lens-plane point `(x, y)`. The scene is
    /// validated first; `render` validates once and skips the per-pixel check.
    pub fn color_at(&self, x: f64, y: f64) -> Result<Vector3, TraceError> {
        self.validate()?;
        Ok(self.color_at_counted(x, y, &mut RenderStats::default()))
    }

    fn color_at_counted(&self, x: f64, y: f64, stats: &mut RenderStats) -> Vector3 {
        stats.primary_rays += 1;
        self.cast_ray_counted(&self.camera.primary_ray(x, y), 0, stats)
    }

    /// Trace out a pixel, where top-left of the image is (0, 0) and the image
    /// center sits on the camera axis.
    fn trace_pixel(&self, px: u32, py: u32, width: u32, height: u32, stats: &mut RenderStats) -> Color {
        let x = px as f64 - (width / 2) as f64;
        let y = (height / 2) as f64 - 1. - py as f64;

        let mut sum = Vector3::zero();
        for (dx, dy) in SUBSAMPLES {
            sum += self.color_at_counted(x + dx, y + dy, stats);
        }

        (sum * (1. / SUBSAMPLES.len() as f64)).into()
    }

    /// Render the image out as a row-major list of Colors.
    pub fn render(&self, width: u32, height: u32) -> Result<Vec<Color>, TraceError> {
        let pixels = pixel_count(width, height)?;
        self.validate()?;

        log::info!(
            "Rendering {}x{} with {} objects, {} light samples, reflection depth {}",
            width,
            height,
            self.objects.len(),
            self.light.sample_count(),
            self.options.reflection_depth
        );
        let start = Instant::now();

        // every pixel is independent, so hand them all to rayon
        let traced = (0..pixels)
            .into_par_iter()
            .map(|i| {
                let mut stats = RenderStats::default();
                let color = self.trace_pixel(i % width, i / width, width, height, &mut stats);
                (color, stats)
            })
            .collect::<Vec<_>>();

        let mut stats = RenderStats::default();
        let colors = traced
            .into_iter()
            .map(|(color, s)| {
                stats += s;
                color
            })
            .collect();

        log::info!("Render complete in {:.3}s", start.elapsed().as_secs_f64());
        log::debug!("{:?}", stats);

        Ok(colors)
    }

    /// Render into any pixel sink.
    pub fn render_into<S: PixelSink>(
        &self,
        sink: &mut S,
        width: u32,
        height: u32,
    ) -> Result<(), TraceError> {
        for (i, color) in self.render(width, height)?.into_iter().enumerate() {
            let i = i as u32;
            sink.set_pixel(i % width, i / width, color);
        }

        Ok(())
    }

    /// Render the image out to the desired file. The format follows the
    /// extension (`.png`, `.ppm`, ...).
    pub fn render_to<P: AsRef<Path>>(&self, path: P, width: u32, height: u32) -> Result<(), TraceError> {
        pixel_count(width, height)?;

        let mut imgbuf = image::RgbImage::new(width, height);
        self.render_into(&mut imgbuf, width, height)?;
        imgbuf.save(path.as_ref())?;

        log::info!("Saved render to {}", path.as_ref().display());
        Ok(())
    }
}

/// `width * height`, rejecting empty images and sizes that overflow.
fn pixel_count(width: u32, height: u32) -> Result<u32, TraceError> {
    match width.checked_mul(height) {
        Some(n) if n > 0 => Ok(n),
        _ => Err(TraceError::InvalidDimensions(width, height)),
    }
}
