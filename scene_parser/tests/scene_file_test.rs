use std::fs;
use std::path::Path;

use math::assert_close;
use math::hcm::{point3, vec3, Vec3};
use radiometry::color::Color;
use scene::Scene;
use scene_parser::{ParseError, Parser};
use shape::Shape;

const TETRA: &str = "\
# tetrahedron spanning x in [-2, 6]
v -2 0 0
v 6 0 0
v 2 1 0
v 2 0 1
f 1 2 3
f 1 2 4
f 1 3 4
f 2 3 4
";

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).unwrap();
}

fn parse_file(path: &Path) -> Result<Scene, ParseError> {
    let mut scene = Scene::new();
    Parser::new().parse_into(path, &mut scene)?;
    Ok(scene)
}

#[test]
fn full_scene() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "room.txt",
        "# A small room\n\
         Define WHITE { material { diffuse <1, 1, 1> } }\n\
         BGColor 0.5 * <0, 0, 1>\n\
         Camera { translate <0, 1, -10> }\n\
         Light { <0, 5, 0> <1, 1, 1> intensity 3 }\n\
         Plane { <0, 0, 0> <0, 1, 0> WHITE }\n\
         Box { <1, 1, 1> <-1, 0, -1> WHITE rotate y 45 }\n\
         Sphere { <3, 1, 0> 1 material { reflective <0.9, 0.9, 0.9> } }\n\
         Cone { nocaps scale <0.5, 1, 0.5> translate <-3, 1, 0> }\n\
         Triangle { <0, 0, 0> <1, 0, 0> <0, 1, 0> }\n\
         EOF\n\
         anything after the EOF marker is ignored {{{\n",
    );
    let scene = parse_file(&dir.path().join("room.txt")).unwrap();

    assert_eq!(scene.background, Color::new(0.0, 0.0, 0.5));
    assert_eq!(scene.camera.origin(), point3(0.0, 1.0, -10.0));
    assert_eq!(scene.lights.len(), 1);
    assert_eq!(scene.lights[0].intensity, 3.0);

    let names: Vec<_> = scene.objects.iter().map(|o| o.shape.name()).collect();
    assert_eq!(names, vec!["Plane", "Box", "Sphere", "Cone", "Triangle"]);
    assert_eq!(scene.objects[0].material.diffuse, Color::white());
    assert_eq!(scene.objects[1].material.diffuse, Color::white());
    assert_eq!(scene.objects[3].shape, Shape::Cone { has_caps: false });

    // The box is rotated by 45 degrees about y, so its footprint grows to sqrt(2).
    let b = scene.objects[1].bounds();
    assert_close!(Vec3::from(b.max()), vec3(2f32.sqrt(), 1.0, 2f32.sqrt()));

    let summary = scene.to_string();
    assert!(summary.contains("Objects (5):"));
    assert!(summary.contains("Lights (1):"));
}

#[test]
fn mesh_import_relative_to_scene_file() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("meshes")).unwrap();
    write(&dir.path().join("meshes"), "tetra.obj", TETRA);
    write(
        dir.path(),
        "scene.txt",
        "OBJ { \"meshes/tetra.obj\" unit x material { twosided } }",
    );
    let scene = parse_file(&dir.path().join("scene.txt")).unwrap();

    assert_eq!(scene.objects.len(), 4);
    assert!(scene.objects.iter().all(|o| o.material.twosided));
    assert!(scene
        .objects
        .iter()
        .all(|o| matches!(o.shape, Shape::Triangle(_))));

    // unit scales about the origin: x in [-2, 6] becomes [-0.5, 1.5].
    let b = scene.bounds();
    assert_close!(Vec3::from(b.min()), vec3(-0.5, 0.0, 0.0));
    assert_close!(Vec3::from(b.max()), vec3(1.5, 0.25, 0.25));
}

#[test]
fn mesh_center_and_modifiers() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "tetra.obj", TETRA);
    write(
        dir.path(),
        "scene.txt",
        "OBJ { tetra.obj unit x center translate <0, 10, 0> }",
    );
    let scene = parse_file(&dir.path().join("scene.txt")).unwrap();
    let b = scene.bounds();
    assert_close!(Vec3::from(b.min()), vec3(-1.0, 9.875, -0.125));
    assert_close!(Vec3::from(b.max()), vec3(1.0, 10.125, 0.125));
}

#[test]
fn flat_mesh_cannot_be_unit_along_its_normal() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "flat.obj", "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n");
    write(dir.path(), "scene.txt", "OBJ { flat.obj\n unit z }");
    match parse_file(&dir.path().join("scene.txt")) {
        Err(ParseError::Syntax {
            expected,
            actual,
            line,
        }) => {
            assert_eq!(expected, "_NonZeroExtent_");
            assert_eq!(actual, "z");
            assert_eq!(line, 2);
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn missing_mesh_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "scene.txt", "OBJ { nowhere.obj }");
    match parse_file(&dir.path().join("scene.txt")) {
        Err(ParseError::Io { path, .. }) => assert!(path.ends_with("nowhere.obj")),
        other => panic!("{:?}", other),
    }
}

#[test]
fn missing_scene_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.txt");
    match parse_file(&path) {
        Err(e @ ParseError::Io { .. }) => {
            assert_eq!(e.line(), None);
            assert!(e.to_string().contains("absent.txt"));
        }
        other => panic!("{:?}", other),
    }
}

#[test]
fn constants_reach_the_file() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "scene.txt", "Sphere { <0, 0, 0> SIZE / 2 }");

    let mut parser = Parser::new();
    parser.set_constant("SIZE", "6").unwrap();
    let mut scene = Scene::new();
    parser
        .parse_into(dir.path().join("scene.txt"), &mut scene)
        .unwrap();
    assert_eq!(scene.objects[0].bounds().max(), point3(3.0, 3.0, 3.0));

    // A negative constant lexes to two tokens and still reads as one number.
    parser.set_constant("SIZE", "-6").unwrap();
    let mut scene = Scene::new();
    parser
        .parse_into(dir.path().join("scene.txt"), &mut scene)
        .unwrap();
    assert_eq!(scene.objects[0].bounds().max(), point3(3.0, 3.0, 3.0));
}

#[test]
fn error_lines_count_from_one() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "scene.txt",
        "Sphere { <0, 0, 0> 1 }\n\n# comment\nSphere { <0, 0, 0> 1.2.3 }\n",
    );
    match parse_file(&dir.path().join("scene.txt")) {
        Err(ParseError::Syntax {
            expected,
            actual,
            line,
        }) => {
            assert_eq!(expected, "_Real_");
            assert_eq!(actual, "1.2.3");
            assert_eq!(line, 4);
        }
        other => panic!("{:?}", other),
    }
}
