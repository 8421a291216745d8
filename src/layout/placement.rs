use std::cmp::Ordering;

/// The eight candidate displacement directions, clockwise from straight up.
/// Diagonals keep the raw (offset, offset) step of the reference ring rather
/// than a normalized magnitude.
const DIRECTION_RING: [(f32, f32); 8] = [
    (0.0, -1.0),
    (1.0, -1.0),
    (1.0, 0.0),
    (1.0, 1.0),
    (0.0, 1.0),
    (-1.0, 1.0),
    (-1.0, 0.0),
    (-1.0, -1.0),
];

/// Displacement offsets in the order they should be tried. With an outward
/// direction the ring is reordered by descending dot product, so offsets
/// pointing away from the polygon interior come first; the sort is stable,
/// leaving the default ring order intact between ties.
pub(super) fn ordered_offsets(offset: f32, outward: Option<(f32, f32)>) -> Vec<(f32, f32)> {
    let mut offsets: Vec<(f32, f32)> = DIRECTION_RING
        .iter()
        .map(|(dx, dy)| (dx * offset, dy * offset))
        .collect();
    if let Some((ox, oy)) = outward {
        offsets.sort_by(|a, b| {
            let dot_a = a.0 * ox + a.1 * oy;
            let dot_b = b.0 * ox + b.1 * oy;
            dot_b.partial_cmp(&dot_a).unwrap_or(Ordering::Equal)
        });
    }
    offsets
}
