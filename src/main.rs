use std::{f64::consts::PI, time::Instant};

use clap::{value_t, App, Arg, ArgMatches};
use raycaster::{
    camera::Camera,
    lighting::{Area, Light, Point},
    material::{Color, Material},
    math::Vector3,
    object::{self, Plane, Sphere, Transform, Triangle},
    Scene, TraceError,
};

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let matches = App::new("Raycaster")
        .version("0.1")
        .about("Renders a scene with Phong shading, shadows, and mirror reflections")
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .help("The output file; the format follows the extension")
                .default_value("render.png"),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .value_name("PIXELS")
                .default_value("500"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .value_name("PIXELS")
                .default_value("500"),
        )
        .arg(
            Arg::with_name("depth")
                .short("d")
                .long("depth")
                .value_name("BOUNCES")
                .help("Maximum number of mirror reflections per ray")
                .default_value("3"),
        )
        .arg(
            Arg::with_name("area-radius")
                .long("area-radius")
                .value_name("RADIUS")
                .help("Use a ring-shaped area light of this radius for soft shadows"),
        )
        .arg(
            Arg::with_name("samples")
                .long("samples")
                .value_name("COUNT")
                .help("Number of area light samples")
                .default_value("50"),
        )
        .arg(
            Arg::with_name("obj")
                .long("obj")
                .value_name("FILE")
                .help("A Wavefront OBJ mesh to add to the scene"),
        )
        .get_matches();

    if let Err(e) = run(&matches) {
        log::error!("Failed to render: {}", e);
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> Result<(), TraceError> {
    let width = value_t!(matches, "width", u32).unwrap_or_else(|e| e.exit());
    let height = value_t!(matches, "height", u32).unwrap_or_else(|e| e.exit());
    let depth = value_t!(matches, "depth", u32).unwrap_or_else(|e| e.exit());

    let light_position = Vector3::new(1000., 1000., 1000.);
    let light: Light = if matches.is_present("area-radius") {
        Area {
            samples: value_t!(matches, "samples", u32).unwrap_or_else(|e| e.exit()),
            ..Area::new(
                light_position,
                value_t!(matches, "area-radius", f64).unwrap_or_else(|e| e.exit()),
                1.,
            )
        }
        .into()
    } else {
        Point::new(light_position, 1.).into()
    };

    let now = Instant::now();
    let mut scene = demo_scene(light);
    scene.options.reflection_depth = depth;

    if let Some(path) = matches.value_of("obj") {
        let material = Material {
            color: Color::new(200, 200, 200),
            ..Default::default()
        };
        for triangle in object::load_obj(path, material)? {
            scene.add(triangle);
        }
    }

    log::info!("Scene constructed in {}s", now.elapsed().as_secs_f32());

    let output = matches.value_of("output").unwrap_or("render.png");
    scene.render_to(output, width, height)?;

    log::info!("Operation complete in {}s", now.elapsed().as_secs_f32());
    Ok(())
}

/// Four spheres of varying shininess and reflectivity over a slightly
/// reflective floor, with a tilted triangle in the back.
fn demo_scene(light: Light) -> Scene {
    let mut scene = Scene::new(
        Camera {
            position: Vector3::new(0., 0., 1100.),
            direction: Vector3::new(0., 0., -1.),
            focal_length: 600.,
        },
        light,
    );

    let blue = Material {
        specularity: 1.,
        shininess: 100.,
        color: Color::new(50, 50, 200),
        ..Default::default()
    };
    let green_mirror = Material {
        specularity: 1.,
        shininess: 100.,
        reflectivity: 1.,
        color: Color::new(50, 200, 50),
        ..Default::default()
    };
    let red = Material {
        color: Color::new(200, 50, 50),
        ..Default::default()
    };
    let green_glossy = Material {
        specularity: 0.5,
        shininess: 100.,
        reflectivity: 0.9,
        color: Color::new(50, 200, 50),
        ..Default::default()
    };
    let floor = Material {
        reflectivity: 0.1,
        color: Color::white(),
        ..Default::default()
    };

    scene.add(Sphere::new(Vector3::new(100., -150., 300.), 50., green_glossy));
    scene.add(Sphere::new(Vector3::new(-50., -100., 150.), 100., red));
    scene.add(Sphere::new(Vector3::new(300., -100., 150.), 100., green_mirror));
    scene.add(Sphere::new(Vector3::new(100., -100., 0.), 100., blue));
    scene.add(Plane::new(
        Vector3::new(0., -200., -100.),
        Vector3::up(),
        floor,
    ));

    let mut backdrop = Triangle::new(
        [
            Vector3::new(-400., -200., -400.),
            Vector3::new(0., -200., -400.),
            Vector3::new(-200., 150., -400.),
        ],
        Material {
            specularity: 0.3,
            shininess: 20.,
            color: Color::new(220, 180, 60),
            ..Default::default()
        },
    );
    backdrop.transform(Vector3::new(0., 0., 50.), Vector3::new(0., PI / 8., 0.));
    scene.add(backdrop);

    scene
}
