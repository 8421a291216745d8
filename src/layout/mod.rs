// Collision-avoidance layout for map measurement labels.
//
// Priority-ordered greedy placement: every label first tries its own
// candidate spot, then a ring of offset positions, then a radial cluster
// spread shared with its neighbours, and finally accepts the overlap. The
// pass is total: no label is ever dropped or left unresolved.

mod cluster;
mod collision;
mod placement;
mod types;

use std::cmp::Ordering;

pub use cluster::radial_spread_cluster;
pub use collision::boxes_overlap;
pub use types::LabelBox;

use crate::config::LayoutConfig;
use cluster::anchor_centroid;
use collision::extent_in_bounds;
use placement::ordered_offsets;

/// Resolve final positions for every label against the canvas bounds.
///
/// Returns structurally equivalent copies of the input boxes, each with
/// `final_position` and `needs_leader` set, in placement-priority order.
/// Pure: the input slice is never mutated and no state survives the call.
pub fn layout_labels(
    boxes: &[LabelBox],
    canvas_width: f32,
    canvas_height: f32,
    config: &LayoutConfig,
) -> Vec<LabelBox> {
    let mut sorted: Vec<LabelBox> = boxes.to_vec();
    sorted.sort_by(placement_priority);

    let mut positioned: Vec<LabelBox> = Vec::with_capacity(sorted.len());
    let padding = config.collision_padding;

    for mut label in sorted {
        let origin = (label.x, label.y);
        label.final_position = Some(origin);
        label.needs_leader = false;

        // Zero-cost: the candidate spot is free.
        if !positioned
            .iter()
            .any(|p| boxes_overlap(&label, p, padding))
        {
            positioned.push(label);
            continue;
        }

        // Directional search: the label is leaving its anchor either way.
        label.needs_leader = true;
        let mut placed = false;
        for (dx, dy) in ordered_offsets(config.offset_distance, label.outward) {
            let (x, y) = (origin.0 + dx, origin.1 + dy);
            if !extent_in_bounds(x, y, label.width, label.height, canvas_width, canvas_height) {
                continue;
            }
            label.x = x;
            label.y = y;
            if !positioned
                .iter()
                .any(|p| boxes_overlap(&label, p, padding))
            {
                label.final_position = Some((x, y));
                positioned.push(label.clone());
                placed = true;
                break;
            }
        }
        if placed {
            continue;
        }

        // Back at the candidate spot, accepting the overlap for now.
        label.x = origin.0;
        label.y = origin.1;
        label.final_position = Some(origin);

        let overlapping: Vec<usize> = positioned
            .iter()
            .enumerate()
            .filter(|(_, p)| boxes_overlap(&label, p, padding))
            .map(|(i, _)| i)
            .collect();

        positioned.push(label);
        let candidate_idx = positioned.len() - 1;

        // Dense knot: re-place the whole offending group radially around the
        // centroid of its anchors.
        if overlapping.len() + 1 >= config.cluster_min_size {
            let indices: Vec<usize> = overlapping
                .iter()
                .copied()
                .chain(std::iter::once(candidate_idx))
                .collect();
            let mut cluster: Vec<LabelBox> =
                indices.iter().map(|&i| positioned[i].clone()).collect();
            let centroid = anchor_centroid(&cluster);
            radial_spread_cluster(
                &mut cluster,
                centroid,
                canvas_width,
                canvas_height,
                config,
            );
            for (&i, member) in indices.iter().zip(cluster) {
                positioned[i] = member;
            }
        }
    }

    positioned
}

/// Category first (lawn claims spots before garden), then longer edges, then
/// id so the order is total and reproducible across runs.
fn placement_priority(a: &LabelBox, b: &LabelBox) -> Ordering {
    a.category
        .cmp(&b.category)
        .then_with(|| {
            b.measure
                .partial_cmp(&a.measure)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.id.cmp(&b.id))
}
