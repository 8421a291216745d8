#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod label;
pub mod layout;
pub mod layout_dump;
pub mod render;
pub mod scene;
pub mod text_metrics;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{Config, LabelConfig, LayoutConfig, load_config};
pub use label::{estimate_label_box, format_measure};
pub use layout::{LabelBox, boxes_overlap, layout_labels, radial_spread_cluster};
pub use layout_dump::LayoutDump;
pub use render::render_svg;
pub use scene::{Category, Scene, SceneError, build_label_boxes, parse_scene};
pub use theme::Theme;
