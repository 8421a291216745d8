use super::LabelBox;

/// Padded AABB overlap test. Each box is treated as its footprint expanded by
/// `padding` on all sides, so labels that merely crowd each other still count
/// as colliding. Closed-interval separation: no overlap only when one padded
/// far edge sits strictly before the other's near edge on some axis.
pub fn boxes_overlap(a: &LabelBox, b: &LabelBox, padding: f32) -> bool {
    !(a.x + a.width / 2.0 + padding < b.x - b.width / 2.0
        || a.x - a.width / 2.0 - padding > b.x + b.width / 2.0
        || a.y + a.height / 2.0 + padding < b.y - b.height / 2.0
        || a.y - a.height / 2.0 - padding > b.y + b.height / 2.0)
}

/// True when the box's full extent at center (x, y) stays inside the canvas.
pub(super) fn extent_in_bounds(
    x: f32,
    y: f32,
    width: f32,
    height: f32,
    canvas_width: f32,
    canvas_height: f32,
) -> bool {
    x - width / 2.0 >= 0.0
        && x + width / 2.0 <= canvas_width
        && y - height / 2.0 >= 0.0
        && y + height / 2.0 <= canvas_height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Category;

    fn label(x: f32, y: f32, width: f32, height: f32) -> LabelBox {
        LabelBox {
            id: String::new(),
            x,
            y,
            width,
            height,
            text: String::new(),
            anchor: None,
            anchor_px: (x, y),
            measure: 0.0,
            category: Category::Lawn,
            outward: None,
            final_position: None,
            needs_leader: false,
        }
    }

    #[test]
    fn detects_overlapping_labels() {
        let a = label(100.0, 100.0, 50.0, 20.0);
        let b = label(110.0, 105.0, 50.0, 20.0);
        assert!(boxes_overlap(&a, &b, 8.0));
    }

    #[test]
    fn padding_threshold_is_exact() {
        // Half-widths 25 + 25 plus 8px padding: the gap closes at a center
        // distance of 59. At x=159 the padded far edge (133) is strictly
        // before the near edge (134); at x=158 it is not.
        let a = label(100.0, 100.0, 50.0, 20.0);
        let clear = label(159.0, 100.0, 50.0, 20.0);
        let touching = label(158.0, 100.0, 50.0, 20.0);
        assert!(!boxes_overlap(&a, &clear, 8.0));
        assert!(boxes_overlap(&a, &touching, 8.0));
    }

    #[test]
    fn overlap_is_symmetric() {
        let pairs = [
            (label(100.0, 100.0, 50.0, 20.0), label(120.0, 96.0, 30.0, 14.0)),
            (label(0.0, 0.0, 10.0, 10.0), label(300.0, 4.0, 80.0, 24.0)),
            (label(50.0, 50.0, 64.0, 18.0), label(58.0, 61.0, 12.0, 40.0)),
        ];
        for (a, b) in &pairs {
            assert_eq!(boxes_overlap(a, b, 8.0), boxes_overlap(b, a, 8.0));
        }
    }

    #[test]
    fn distant_boxes_never_interfere() {
        let a = label(100.0, 100.0, 50.0, 20.0);
        let b = label(200.0, 100.0, 50.0, 20.0);
        assert!(!boxes_overlap(&a, &b, 8.0));
        let c = label(40.0, 300.0, 44.0, 16.0);
        let d = label(40.0, 180.0, 50.0, 18.0);
        assert!(!boxes_overlap(&c, &d, 8.0));
    }

    #[test]
    fn extent_bounds_check() {
        assert!(extent_in_bounds(100.0, 100.0, 50.0, 20.0, 640.0, 480.0));
        assert!(!extent_in_bounds(20.0, 100.0, 50.0, 20.0, 640.0, 480.0));
        assert!(!extent_in_bounds(630.0, 100.0, 50.0, 20.0, 640.0, 480.0));
        assert!(!extent_in_bounds(100.0, 475.0, 50.0, 20.0, 640.0, 480.0));
    }
}
