use crate::config::LayoutConfig;
use crate::layout::LabelBox;
use crate::scene::{Category, Scene};
use crate::theme::Theme;
use anyhow::Result;
use std::path::Path;

/// Render a resolved layout as a standalone SVG preview: drawn areas, anchor
/// dots, leader lines for displaced labels, and the label chips on top.
pub fn render_svg(
    scene: &Scene,
    labels: &[LabelBox],
    canvas: (f32, f32),
    theme: &Theme,
    config: &LayoutConfig,
) -> String {
    let (width, height) = canvas;
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">",
    ));
    svg.push_str(&format!(
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        theme.background
    ));

    for polygon in &scene.polygons {
        let points = polygon
            .ring_px
            .iter()
            .map(|p| format!("{:.2},{:.2}", p[0], p[1]))
            .collect::<Vec<_>>()
            .join(" ");
        let color = category_color(polygon.category, theme);
        svg.push_str(&format!(
            "<polygon points=\"{points}\" fill=\"{color}\" fill-opacity=\"0.15\" stroke=\"{color}\" stroke-width=\"2\"/>",
        ));
    }

    for edge in &scene.edges {
        if let Some([a, b]) = edge.endpoints_px {
            let color = category_color(edge.category, theme);
            svg.push_str(&format!(
                "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{color}\" stroke-width=\"2\"/>",
                a[0], a[1], b[0], b[1],
            ));
        }
    }

    // Leaders and anchor dots go under the chips so displaced labels read as
    // attached to their edges.
    for label in labels {
        if !label.needs_leader {
            continue;
        }
        let (ax, ay) = label.anchor_px;
        let (cx, cy) = label.resolved_position();
        svg.push_str(&format!(
            "<line x1=\"{ax:.2}\" y1=\"{ay:.2}\" x2=\"{cx:.2}\" y2=\"{cy:.2}\" stroke=\"{}\" stroke-width=\"1\" stroke-dasharray=\"3 2\" stroke-opacity=\"0.85\"/>",
            theme.leader_color
        ));
        svg.push_str(&format!(
            "<circle cx=\"{ax:.2}\" cy=\"{ay:.2}\" r=\"2.5\" fill=\"{}\"/>",
            theme.anchor_dot_color
        ));
    }

    for label in labels {
        let (cx, cy) = label.resolved_position();
        let rect_x = cx - label.width / 2.0;
        let rect_y = cy - label.height / 2.0;
        let color = category_color(label.category, theme);
        svg.push_str(&format!(
            "<rect x=\"{rect_x:.2}\" y=\"{rect_y:.2}\" width=\"{:.2}\" height=\"{:.2}\" rx=\"4\" ry=\"4\" fill=\"{}\" stroke=\"{color}\" stroke-width=\"1.2\"/>",
            label.width, label.height, theme.chip_background,
        ));
        let text_y = cy + config.label.font_size * 0.35;
        svg.push_str(&format!(
            "<text x=\"{cx:.2}\" y=\"{text_y:.2}\" text-anchor=\"middle\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\">{}</text>",
            theme.font_family,
            config.label.font_size,
            theme.chip_text_color,
            escape_xml(&label.text)
        ));
    }

    svg.push_str("</svg>");
    svg
}

fn category_color(category: Category, theme: &Theme) -> &str {
    match category {
        Category::Lawn => &theme.lawn_color,
        Category::Garden => &theme.garden_color,
    }
}

pub fn write_output_svg(svg: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, svg)?;
        }
        None => {
            print!("{}", svg);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, theme: &Theme) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.font_family = theme
        .font_family
        .split(',')
        .next()
        .unwrap_or("sans-serif")
        .trim()
        .to_string();

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let size = tree.size().to_int_size();
    let mut pixmap = resvg::tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(&tree, resvg::tiny_skia::Transform::default(), &mut pixmap_mut);
    pixmap.save_png(output)?;
    Ok(())
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
