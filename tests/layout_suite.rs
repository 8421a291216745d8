use std::path::Path;

use maplabel::{
    Category, LabelBox, LayoutConfig, LayoutDump, Theme, build_label_boxes, layout_labels,
    parse_scene, render_svg,
};

fn load_fixture(name: &str) -> maplabel::Scene {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    let scene = parse_scene(&input).expect("fixture parse failed");
    scene.validate().expect("fixture validate failed");
    scene
}

fn resolve(scene: &maplabel::Scene, config: &LayoutConfig) -> Vec<LabelBox> {
    let canvas = scene.canvas.expect("fixture canvas missing");
    let boxes = build_label_boxes(scene, &Theme::satellite_default(), config);
    layout_labels(&boxes, canvas.width, canvas.height, config)
}

fn assert_valid_svg(svg: &str, fixture: &str) {
    assert!(svg.contains("<svg"), "{fixture}: missing <svg tag");
    assert!(svg.contains("</svg>"), "{fixture}: missing </svg tag");
}

#[test]
fn render_all_fixtures() {
    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        ("backyard.json", 8),
        ("crowded_corner.json", 5),
        ("spread_out.json", 4),
    ];
    let config = LayoutConfig::default();
    let theme = Theme::satellite_default();

    for (name, expected_labels) in candidates {
        let scene = load_fixture(name);
        let canvas = scene.canvas.expect("fixture canvas missing");
        let labels = resolve(&scene, &config);
        assert_eq!(labels.len(), expected_labels, "{name}: label count");
        for label in &labels {
            let (x, y) = label
                .final_position
                .unwrap_or_else(|| panic!("{name}: `{}` unresolved", label.id));
            assert!(x.is_finite() && y.is_finite(), "{name}: `{}`", label.id);
        }
        let svg = render_svg(
            &scene,
            &labels,
            (canvas.width, canvas.height),
            &theme,
            &config,
        );
        assert_valid_svg(&svg, name);
    }
}

#[test]
fn spread_out_scene_is_untouched() {
    let scene = load_fixture("spread_out.json");
    let labels = resolve(&scene, &LayoutConfig::default());
    for label in &labels {
        assert_eq!(label.final_position, Some(label.anchor_px), "{}", label.id);
        assert!(!label.needs_leader, "{}", label.id);
    }
}

#[test]
fn crowded_corner_keeps_priority_label_in_place() {
    let scene = load_fixture("crowded_corner.json");
    let labels = resolve(&scene, &LayoutConfig::default());

    // The longest lawn edge is processed first and keeps its anchor spot.
    let top = labels.iter().find(|l| l.id == "e1").unwrap();
    assert_eq!(top.final_position, Some(top.anchor_px));

    // Everyone else got moved and flagged for a leader.
    let moved = labels.iter().filter(|l| l.needs_leader).count();
    assert!(moved >= 3, "expected most labels displaced, got {moved}");
}

fn synthetic_box(id: usize, x: f32, y: f32) -> LabelBox {
    LabelBox {
        id: format!("s{id:03}"),
        x,
        y,
        width: 50.0,
        height: 20.0,
        text: String::new(),
        anchor: None,
        anchor_px: (x, y),
        measure: (id % 37) as f32 * 0.7,
        category: if id % 3 == 0 {
            Category::Garden
        } else {
            Category::Lawn
        },
        outward: None,
        final_position: None,
        needs_leader: false,
    }
}

#[test]
fn total_over_two_hundred_overlapping_boxes() {
    // A 20x10 grid at 15px spacing in a 320x240 canvas: everything overlaps
    // everything nearby, far more density than any real map produces.
    let boxes: Vec<LabelBox> = (0..200)
        .map(|i| {
            let col = (i % 20) as f32;
            let row = (i / 20) as f32;
            synthetic_box(i, 20.0 + col * 15.0, 30.0 + row * 15.0)
        })
        .collect();

    let placed = layout_labels(&boxes, 320.0, 240.0, &LayoutConfig::default());
    assert_eq!(placed.len(), 200);
    for label in &placed {
        let (x, y) = label.final_position.expect("unresolved label");
        assert!(x.is_finite() && y.is_finite(), "{}", label.id);
    }
}

#[test]
fn layout_is_deterministic() {
    let boxes: Vec<LabelBox> = (0..60)
        .map(|i| {
            let col = (i % 10) as f32;
            let row = (i / 10) as f32;
            synthetic_box(i, 40.0 + col * 30.0, 40.0 + row * 30.0)
        })
        .collect();

    let config = LayoutConfig::default();
    let first = layout_labels(&boxes, 640.0, 480.0, &config);
    let second = layout_labels(&boxes, 640.0, 480.0, &config);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.id, b.id);
        assert_eq!(a.final_position, b.final_position);
        assert_eq!(a.needs_leader, b.needs_leader);
    }
}

#[test]
fn layout_dump_round_trips_through_json() {
    let scene = load_fixture("backyard.json");
    let canvas = scene.canvas.unwrap();
    let labels = resolve(&scene, &LayoutConfig::default());
    let dump = LayoutDump::from_labels(&labels, (canvas.width, canvas.height));

    let json = serde_json::to_string(&dump).expect("dump serialize failed");
    let value: serde_json::Value = serde_json::from_str(&json).expect("dump reparse failed");
    assert_eq!(value["labels"].as_array().unwrap().len(), labels.len());
    assert_eq!(value["canvas_width"], 960.0);
    let first = &value["labels"][0];
    assert!(first["id"].is_string());
    assert!(first["needs_leader"].is_boolean());
    assert!(first["anchor_px"].is_array());
}
