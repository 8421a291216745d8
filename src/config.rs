use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Chip text sizing used to estimate label footprints before placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    pub font_size: f32,
    pub padding_x: f32,
    pub padding_y: f32,
    /// Width-per-character fraction of the font size, used when no system
    /// font face can be resolved.
    pub char_width_ratio: f32,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_size: 11.0,
            padding_x: 6.0,
            padding_y: 3.0,
            char_width_ratio: 0.6,
        }
    }
}

/// Tunables of the collision-avoidance pass. The cluster constants are
/// empirical: small clusters should stay near their anchors, large ones
/// spread visibly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Magnitude of each displacement step in the direction ring.
    pub offset_distance: f32,
    /// Margin added around every box in the overlap test.
    pub collision_padding: f32,
    /// Overlapping group size (candidate included) that switches from
    /// accepted overlap to radial spreading.
    pub cluster_min_size: usize,
    pub cluster_radius_base: f32,
    pub cluster_radius_per_label: f32,
    pub label: LabelConfig,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            offset_distance: 40.0,
            collision_padding: 8.0,
            cluster_min_size: 3,
            cluster_radius_base: 60.0,
            cluster_radius_per_label: 10.0,
            label: LabelConfig::default(),
        }
    }
}

/// Canvas fallback and page background for the preview renderer. The scene's
/// own canvas wins when present; CLI flags win over both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub background: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
            background: "#20301F".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        let theme = Theme::satellite_default();
        let render = RenderConfig {
            background: theme.background.clone(),
            ..Default::default()
        };
        Self {
            theme,
            layout: LayoutConfig::default(),
            render,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    font_family: Option<String>,
    chip_background: Option<String>,
    chip_text_color: Option<String>,
    lawn_color: Option<String>,
    garden_color: Option<String>,
    leader_color: Option<String>,
    anchor_dot_color: Option<String>,
    background: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LabelConfigFile {
    font_size: Option<f32>,
    padding_x: Option<f32>,
    padding_y: Option<f32>,
    char_width_ratio: Option<f32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    offset_distance: Option<f32>,
    collision_padding: Option<f32>,
    cluster_min_size: Option<usize>,
    cluster_radius_base: Option<f32>,
    cluster_radius_per_label: Option<f32>,
    label: Option<LabelConfigFile>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    background: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
    render: Option<RenderConfigFile>,
}

/// Load a config file (JSON5: comments and trailing commas allowed) and merge
/// it over the defaults. A missing path yields the defaults unchanged.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    let parsed: ConfigFile = json5::from_str(&contents)?;
    Ok(apply_config_file(Config::default(), parsed))
}

fn apply_config_file(mut config: Config, file: ConfigFile) -> Config {
    if let Some(theme_name) = file.theme.as_deref() {
        if theme_name == "light" {
            config.theme = Theme::light();
        } else if theme_name == "satellite" || theme_name == "default" {
            config.theme = Theme::satellite_default();
        }
        config.render.background = config.theme.background.clone();
    }

    if let Some(vars) = file.theme_variables {
        if let Some(v) = vars.font_family {
            config.theme.font_family = v;
        }
        if let Some(v) = vars.chip_background {
            config.theme.chip_background = v;
        }
        if let Some(v) = vars.chip_text_color {
            config.theme.chip_text_color = v;
        }
        if let Some(v) = vars.lawn_color {
            config.theme.lawn_color = v;
        }
        if let Some(v) = vars.garden_color {
            config.theme.garden_color = v;
        }
        if let Some(v) = vars.leader_color {
            config.theme.leader_color = v;
        }
        if let Some(v) = vars.anchor_dot_color {
            config.theme.anchor_dot_color = v;
        }
        if let Some(v) = vars.background {
            config.theme.background = v.clone();
            config.render.background = v;
        }
    }

    if let Some(layout) = file.layout {
        if let Some(v) = layout.offset_distance {
            config.layout.offset_distance = v;
        }
        if let Some(v) = layout.collision_padding {
            config.layout.collision_padding = v;
        }
        if let Some(v) = layout.cluster_min_size {
            config.layout.cluster_min_size = v;
        }
        if let Some(v) = layout.cluster_radius_base {
            config.layout.cluster_radius_base = v;
        }
        if let Some(v) = layout.cluster_radius_per_label {
            config.layout.cluster_radius_per_label = v;
        }
        if let Some(label) = layout.label {
            if let Some(v) = label.font_size {
                config.layout.label.font_size = v;
            }
            if let Some(v) = label.padding_x {
                config.layout.label.padding_x = v;
            }
            if let Some(v) = label.padding_y {
                config.layout.label.padding_y = v;
            }
            if let Some(v) = label.char_width_ratio {
                config.layout.label.char_width_ratio = v;
            }
        }
    }

    if let Some(render) = file.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
        if let Some(v) = render.background {
            config.render.background = v;
        }
    }

    config
}
