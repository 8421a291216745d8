use std::f32::consts::TAU;

use super::LabelBox;
use crate::config::LayoutConfig;

/// Mean of the cluster members' anchor pixels.
pub(super) fn anchor_centroid(cluster: &[LabelBox]) -> (f32, f32) {
    let n = cluster.len().max(1) as f32;
    let sum = cluster.iter().fold((0.0f32, 0.0f32), |acc, b| {
        (acc.0 + b.anchor_px.0, acc.1 + b.anchor_px.1)
    });
    (sum.0 / n, sum.1 / n)
}

/// Re-place a whole cluster of labels on a circle around `centroid`.
///
/// The radius grows with cluster size so small clusters stay near their
/// anchors while large ones spread visibly. Members keep their input order:
/// member `i` lands at angle `i * 2π/N`. Centers are clamped so each box's
/// full extent stays inside the canvas, and every member is flagged for a
/// leader line. Total for any non-empty cluster.
pub fn radial_spread_cluster(
    cluster: &mut [LabelBox],
    centroid: (f32, f32),
    canvas_width: f32,
    canvas_height: f32,
    config: &LayoutConfig,
) {
    let n = cluster.len();
    if n == 0 {
        return;
    }
    let radius = config.cluster_radius_base + n as f32 * config.cluster_radius_per_label;
    let angle_step = TAU / n as f32;

    for (index, label) in cluster.iter_mut().enumerate() {
        let angle = index as f32 * angle_step;
        let half_w = label.width / 2.0;
        let half_h = label.height / 2.0;
        let x = (centroid.0 + radius * angle.cos())
            .clamp(half_w, (canvas_width - half_w).max(half_w));
        let y = (centroid.1 + radius * angle.sin())
            .clamp(half_h, (canvas_height - half_h).max(half_h));
        label.x = x;
        label.y = y;
        label.final_position = Some((x, y));
        label.needs_leader = true;
    }
}
