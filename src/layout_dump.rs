use crate::layout::LabelBox;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Machine-readable form of a resolved layout, for downstream renderers and
/// golden tests.
#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub canvas_width: f32,
    pub canvas_height: f32,
    pub labels: Vec<LabelDump>,
}

#[derive(Debug, Serialize)]
pub struct LabelDump {
    pub id: String,
    pub text: String,
    pub category: String,
    pub measure: f32,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub anchor_px: [f32; 2],
    pub needs_leader: bool,
}

impl LayoutDump {
    pub fn from_labels(labels: &[LabelBox], canvas: (f32, f32)) -> Self {
        let labels = labels
            .iter()
            .map(|label| {
                let (x, y) = label.resolved_position();
                LabelDump {
                    id: label.id.clone(),
                    text: label.text.clone(),
                    category: label.category.as_str().to_string(),
                    measure: label.measure,
                    x,
                    y,
                    width: label.width,
                    height: label.height,
                    anchor_px: [label.anchor_px.0, label.anchor_px.1],
                    needs_leader: label.needs_leader,
                }
            })
            .collect();
        LayoutDump {
            canvas_width: canvas.0,
            canvas_height: canvas.1,
            labels,
        }
    }
}

pub fn write_layout_dump(
    labels: &[LabelBox],
    canvas: (f32, f32),
    output: Option<&Path>,
) -> anyhow::Result<()> {
    let dump = LayoutDump::from_labels(labels, canvas);
    match output {
        Some(path) => {
            let file = File::create(path)?;
            let writer = BufWriter::new(file);
            serde_json::to_writer_pretty(writer, &dump)?;
        }
        None => {
            let out = serde_json::to_string_pretty(&dump)?;
            println!("{out}");
        }
    }
    Ok(())
}
