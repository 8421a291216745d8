use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::LayoutConfig;
use crate::label::{estimate_label_box, format_measure};
use crate::layout::LabelBox;
use crate::theme::Theme;

/// Which kind of drawn area an edge belongs to. Only affects placement
/// priority and chip colors, never placement geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Lawn,
    Garden,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Lawn => "lawn",
            Category::Garden => "garden",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

/// One measured polygon edge, already projected to canvas pixels by the
/// caller's geometry layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeMark {
    pub id: String,
    pub category: Category,
    /// Real-world edge length in meters.
    pub measure: f32,
    /// Geographic anchor (lng, lat). Carried opaquely for consumers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<[f64; 2]>,
    /// Projected anchor in canvas pixels. Never moved by layout.
    pub anchor_px: [f32; 2],
    /// Candidate label center. Defaults to `anchor_px`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<[f32; 2]>,
    /// Unit vector pointing away from the enclosing polygon's centroid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outward: Option<[f32; 2]>,
    /// Segment endpoints in canvas pixels, used only by the preview renderer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoints_px: Option<[[f32; 2]; 2]>,
}

/// A drawn polygon in canvas pixel space with one measure per ring edge.
/// The ring is open: `ring_px[i] -> ring_px[(i + 1) % n]` are the edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Polygon {
    pub id: String,
    pub category: Category,
    pub ring_px: Vec<[f32; 2]>,
    pub measures: Vec<f32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scene {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub canvas: Option<Canvas>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<EdgeMark>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub polygons: Vec<Polygon>,
}

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scene contains no edges or polygons")]
    Empty,
    #[error("canvas dimensions must be positive and finite")]
    InvalidCanvas,
    #[error("edge `{id}`: {reason}")]
    InvalidEdge { id: String, reason: String },
    #[error("polygon `{id}`: {reason}")]
    InvalidPolygon { id: String, reason: String },
}

pub fn parse_scene(input: &str) -> Result<Scene, SceneError> {
    let scene: Scene = serde_json::from_str(input)?;
    Ok(scene)
}

impl Scene {
    /// Check the preconditions the layout engine leaves undefined: finite
    /// coordinates, non-negative measures, one measure per ring edge.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.edges.is_empty() && self.polygons.is_empty() {
            return Err(SceneError::Empty);
        }
        if let Some(canvas) = self.canvas
            && !(canvas.width.is_finite()
                && canvas.height.is_finite()
                && canvas.width > 0.0
                && canvas.height > 0.0)
        {
            return Err(SceneError::InvalidCanvas);
        }
        for edge in &self.edges {
            edge.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        Ok(())
    }
}

impl EdgeMark {
    fn validate(&self) -> Result<(), SceneError> {
        let fail = |reason: &str| {
            Err(SceneError::InvalidEdge {
                id: self.id.clone(),
                reason: reason.to_string(),
            })
        };
        if !(self.measure.is_finite() && self.measure >= 0.0) {
            return fail("measure must be finite and non-negative");
        }
        if !point_finite(self.anchor_px) {
            return fail("anchorPx must be finite");
        }
        if let Some(position) = self.position
            && !point_finite(position)
        {
            return fail("position must be finite");
        }
        if let Some(outward) = self.outward
            && !point_finite(outward)
        {
            return fail("outward must be finite");
        }
        if let Some([a, b]) = self.endpoints_px
            && !(point_finite(a) && point_finite(b))
        {
            return fail("endpointsPx must be finite");
        }
        Ok(())
    }
}

impl Polygon {
    fn validate(&self) -> Result<(), SceneError> {
        let fail = |reason: String| {
            Err(SceneError::InvalidPolygon {
                id: self.id.clone(),
                reason,
            })
        };
        if self.ring_px.len() < 3 {
            return fail("ring needs at least 3 vertices".to_string());
        }
        if self.measures.len() != self.ring_px.len() {
            return fail(format!(
                "expected {} measures (one per ring edge), got {}",
                self.ring_px.len(),
                self.measures.len()
            ));
        }
        if self.ring_px.iter().any(|p| !point_finite(*p)) {
            return fail("ring vertices must be finite".to_string());
        }
        if self
            .measures
            .iter()
            .any(|m| !(m.is_finite() && *m >= 0.0))
        {
            return fail("measures must be finite and non-negative".to_string());
        }
        Ok(())
    }

    /// Vertex-mean centroid of the ring, in canvas pixels.
    pub fn centroid_px(&self) -> (f32, f32) {
        let n = self.ring_px.len().max(1) as f32;
        let sum = self
            .ring_px
            .iter()
            .fold((0.0f32, 0.0f32), |acc, p| (acc.0 + p[0], acc.1 + p[1]));
        (sum.0 / n, sum.1 / n)
    }
}

fn point_finite(p: [f32; 2]) -> bool {
    p[0].is_finite() && p[1].is_finite()
}

fn normalize(x: f32, y: f32) -> Option<(f32, f32)> {
    let len = (x * x + y * y).sqrt();
    if !len.is_finite() || len <= 1e-6 {
        return None;
    }
    Some((x / len, y / len))
}

/// Build the layout engine's input from a validated scene. Direct edges pass
/// through; polygons contribute one box per ring edge with a midpoint anchor
/// and a centroid-outward direction.
pub fn build_label_boxes(scene: &Scene, theme: &Theme, config: &LayoutConfig) -> Vec<LabelBox> {
    let mut boxes = Vec::with_capacity(
        scene.edges.len() + scene.polygons.iter().map(|p| p.ring_px.len()).sum::<usize>(),
    );

    for edge in &scene.edges {
        let text = format_measure(edge.measure);
        let (width, height) = estimate_label_box(&text, theme, &config.label);
        let position = edge.position.unwrap_or(edge.anchor_px);
        boxes.push(LabelBox {
            id: edge.id.clone(),
            x: position[0],
            y: position[1],
            width,
            height,
            text,
            anchor: edge.anchor,
            anchor_px: (edge.anchor_px[0], edge.anchor_px[1]),
            measure: edge.measure,
            category: edge.category,
            outward: edge.outward.and_then(|v| normalize(v[0], v[1])),
            final_position: None,
            needs_leader: false,
        });
    }

    for polygon in &scene.polygons {
        let centroid = polygon.centroid_px();
        let n = polygon.ring_px.len();
        for i in 0..n {
            let a = polygon.ring_px[i];
            let b = polygon.ring_px[(i + 1) % n];
            let mid = ((a[0] + b[0]) / 2.0, (a[1] + b[1]) / 2.0);
            let measure = polygon.measures[i];
            let text = format_measure(measure);
            let (width, height) = estimate_label_box(&text, theme, &config.label);
            boxes.push(LabelBox {
                id: format!("{}-e{}", polygon.id, i),
                x: mid.0,
                y: mid.1,
                width,
                height,
                text,
                anchor: None,
                anchor_px: mid,
                measure,
                category: polygon.category,
                outward: normalize(mid.0 - centroid.0, mid.1 - centroid.1),
                final_position: None,
                needs_leader: false,
            });
        }
    }

    boxes
}
