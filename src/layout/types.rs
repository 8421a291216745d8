use crate::scene::Category;

/// One measurement label moving through a single layout pass.
///
/// `x`/`y` hold the current candidate center and are the only coordinates the
/// engine moves; `anchor_px` stays fixed for the whole pass. Boxes are built
/// fresh on every invocation and never survive it.
#[derive(Debug, Clone)]
pub struct LabelBox {
    pub id: String,
    /// Current candidate center, canvas pixel space.
    pub x: f32,
    pub y: f32,
    /// Estimated chip footprint in pixels (text metrics, not exact glyphs).
    pub width: f32,
    pub height: f32,
    /// Formatted measure text the chip displays.
    pub text: String,
    /// Geographic anchor (lng, lat), carried opaquely for consumers.
    pub anchor: Option<[f64; 2]>,
    /// Projected anchor in canvas pixels. Never relocated by layout.
    pub anchor_px: (f32, f32),
    /// Real-world edge length in meters; the placement sort key.
    pub measure: f32,
    pub category: Category,
    /// Unit vector away from the enclosing polygon's centroid.
    pub outward: Option<(f32, f32)>,
    /// Resolved center after layout. Set for every box once a pass finishes.
    pub final_position: Option<(f32, f32)>,
    /// True once the box left its anchor-adjacent candidate position.
    pub needs_leader: bool,
}

impl LabelBox {
    /// Resolved center, falling back to the current candidate position for
    /// boxes that have not been through a layout pass.
    pub fn resolved_position(&self) -> (f32, f32) {
        self.final_position.unwrap_or((self.x, self.y))
    }
}
