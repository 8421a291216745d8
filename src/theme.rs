use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub font_family: String,
    pub chip_background: String,
    pub chip_text_color: String,
    pub lawn_color: String,
    pub garden_color: String,
    pub leader_color: String,
    pub anchor_dot_color: String,
    pub background: String,
}

impl Theme {
    /// Chip palette tuned for satellite imagery: white chips, bright category
    /// strokes, white leaders.
    pub fn satellite_default() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            chip_background: "#FFFFFF".to_string(),
            chip_text_color: "#1C2430".to_string(),
            lawn_color: "#16A34A".to_string(),
            garden_color: "#EA580C".to_string(),
            leader_color: "#FFFFFF".to_string(),
            anchor_dot_color: "#FFFFFF".to_string(),
            background: "#20301F".to_string(),
        }
    }

    /// Darker strokes for plain light backdrops (tests, docs).
    pub fn light() -> Self {
        Self {
            font_family: "Inter, Segoe UI, system-ui, -apple-system, sans-serif".to_string(),
            chip_background: "#F8FAFF".to_string(),
            chip_text_color: "#1C2430".to_string(),
            lawn_color: "#15803D".to_string(),
            garden_color: "#C2410C".to_string(),
            leader_color: "#7A8AA6".to_string(),
            anchor_dot_color: "#7A8AA6".to_string(),
            background: "#FFFFFF".to_string(),
        }
    }
}
