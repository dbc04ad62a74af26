use std::path::Path;

use crate::{error::TraceError, material::Material, math::Vector3};

use super::Triangle;

/// Build one triangle per face of an already triangulated mesh.
pub fn triangles_from_mesh(mesh: &tobj::Mesh, material: &Material) -> Vec<Triangle> {
    let vertex = |i: u32| {
        let i = i as usize * 3;
        Vector3::new(
            mesh.positions[i] as f64,
            mesh.positions[i + 1] as f64,
            mesh.positions[i + 2] as f64,
        )
    };

    mesh.indices
        .chunks_exact(3)
        .map(|face| {
            Triangle::new(
                [vertex(face[0]), vertex(face[1]), vertex(face[2])],
                material.clone(),
            )
        })
        .collect()
}

/// Load every model in a Wavefront OBJ file as a flat list of triangles
/// sharing one material. Texture coordinates and OBJ materials are ignored.
pub fn load_obj<P: AsRef<Path>>(path: P, material: Material) -> Result<Vec<Triangle>, TraceError> {
    let (models, _) = tobj::load_obj(
        path.as_ref(),
        &tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        },
    )?;

    let triangles = models
        .iter()
        .flat_map(|model| triangles_from_mesh(&model.mesh, &material))
        .collect::<Vec<_>>();

    log::info!(
        "Loaded {} triangles from {} models in {}",
        triangles.len(),
        models.len(),
        path.as_ref().display()
    );

    Ok(triangles)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;
    use crate::{
        math::Ray,
        object::Intersect,
    };

    const QUAD: &str = "\
v -1 -1 0
v 1 -1 0
v 1 1 0
v -1 1 0
f 1 2 3 4
";

    #[test]
    fn test_load_obj_triangulates_quad() {
        let path = std::env::temp_dir().join(format!("raycaster-quad-{}.obj", std::process::id()));
        fs::write(&path, QUAD).unwrap();

        let triangles = load_obj(&path, Material::default()).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(triangles.len(), 2);
        let total: f64 = triangles.iter().map(|t| t.area()).sum();
        assert!((total - 4.).abs() < 1e-9);

        let ray = Ray::new(Vector3::new(0.5, -0.5, 3.), Vector3::new(0., 0., -1.));
        assert_eq!(
            triangles.iter().filter(|t| t.intersect(&ray).is_some()).count(),
            1
        );
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_obj("/definitely/not/here.obj", Material::default());
        assert!(matches!(result, Err(TraceError::Obj(_))));
    }
}
