//! Render every scene under `demos/` and check the output structure

use std::fs;
use std::path::Path;

use tinysvg::{render_scene, Scene, Style};

#[test]
fn test_all_demo_scenes_render() {
    let demos_dir = Path::new("demos");

    if !demos_dir.exists() {
        panic!("Demos directory not found at {:?}", demos_dir);
    }

    let mut tested = 0;
    let mut failures = Vec::new();

    for entry in fs::read_dir(demos_dir).expect("Failed to read demos directory") {
        let path = entry.expect("Failed to read entry").path();

        if path.extension().map_or(false, |ext| ext == "toml") {
            let source = fs::read_to_string(&path).expect("Failed to read scene");

            match render_scene(&source) {
                Ok(svg) => {
                    if !svg.contains("<svg xmlns=") {
                        failures.push(format!("{}: missing <svg> tag", path.display()));
                    }
                    if !svg.ends_with("</svg>") {
                        failures.push(format!("{}: missing </svg> footer", path.display()));
                    }
                    tested += 1;
                }
                Err(e) => {
                    failures.push(format!("Failed to render {}: {}", path.display(), e));
                }
            }
        }
    }

    if !failures.is_empty() {
        panic!("Scene failures:\n{}", failures.join("\n"));
    }
    assert!(tested >= 3, "expected at least 3 demo scenes, found {}", tested);
}

#[test]
fn test_shapes_demo_content() {
    let scene = Scene::from_file(Path::new("demos/shapes.toml")).expect("Should load");
    let doc = scene.build().expect("Should build");
    let drawing = doc.drawing();

    assert_eq!(drawing.len(), 6);
    assert_eq!(
        drawing[0],
        r#"<circle cx="20" cy="20" r="15" style="fill:none;stroke:black;stroke-linecap:round" />"#
    );
    assert_eq!(
        drawing[3],
        r#"<polyline points="150,35 160,5 170,35 180,5" style="fill:none;stroke:black;stroke-linecap:round" />"#
    );
    assert_eq!(
        drawing[5],
        r#"<image x="250" y="5" width="30" height="30" xlink:href="logo.png" />"#
    );
}

#[test]
fn test_badge_demo_is_standalone() {
    let source = fs::read_to_string("demos/badge.toml").unwrap();
    let svg = render_scene(&source).unwrap();
    assert!(svg.starts_with("<?xml version=\"1.0\"?>"));
    assert!(svg.contains(r##"stop-color="#e3f2fd""##));
    assert!(svg.contains("\ntinysvg\n</text>"));
}

#[test]
fn test_pattern_demo_viewport() {
    let scene = Scene::from_file(Path::new("demos/pattern.toml")).unwrap();
    let doc = scene.build().unwrap();
    assert_eq!(doc.viewport(), (0.0, 0.0, 200.0, 200.0));
    assert!(doc.render().contains(r#"viewPort="0 0 1000 1000""#));
}

#[test]
fn test_style_file_loading() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("style.toml");
    fs::write(&path, "stroke = \"black\"\nstroke_dasharray = \"4,2\"\n").unwrap();

    let style = Style::from_file(&path).expect("Should load style");
    assert_eq!(style.to_string(), "stroke:black;stroke-dasharray:4,2");
}
