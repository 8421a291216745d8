use crate::config::{Config, load_config};
use crate::layout::layout_labels;
use crate::layout_dump::write_layout_dump;
use crate::render::{render_svg, write_output_svg};
use crate::scene::{Scene, build_label_boxes, parse_scene};
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "mlab", version, about = "Map measurement-label layout engine")]
pub struct Args {
    /// Input scene (.json) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file (svg/png/json). Defaults to stdout for SVG/JSON if omitted.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "svg")]
    pub output_format: OutputFormat,

    /// Config file (JSON5 allowed)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Canvas width override
    #[arg(short = 'w', long = "width")]
    pub width: Option<f32>,

    /// Canvas height override
    #[arg(short = 'H', long = "height")]
    pub height: Option<f32>,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Svg,
    Png,
    Json,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let input = read_input(args.input.as_deref())?;
    let scene = parse_scene(&input)?;
    scene.validate()?;

    let canvas = resolve_canvas(&args, &scene, &config);
    let boxes = build_label_boxes(&scene, &config.theme, &config.layout);
    let labels = layout_labels(&boxes, canvas.0, canvas.1, &config.layout);

    match args.output_format {
        OutputFormat::Svg => {
            let svg = render_svg(&scene, &labels, canvas, &config.theme, &config.layout);
            write_output_svg(&svg, args.output.as_deref())?;
        }
        OutputFormat::Png => {
            let svg = render_svg(&scene, &labels, canvas, &config.theme, &config.layout);
            let output = ensure_output(&args.output, "png")?;
            write_png(&svg, &output, &config)?;
        }
        OutputFormat::Json => {
            write_layout_dump(&labels, canvas, args.output.as_deref())?;
        }
    }

    Ok(())
}

/// CLI flags beat the scene's own canvas, which beats the config fallback.
fn resolve_canvas(args: &Args, scene: &Scene, config: &Config) -> (f32, f32) {
    let width = args
        .width
        .or(scene.canvas.map(|c| c.width))
        .unwrap_or(config.render.width);
    let height = args
        .height
        .or(scene.canvas.map(|c| c.height))
        .unwrap_or(config.render.height);
    (width, height)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn ensure_output(output: &Option<PathBuf>, ext: &str) -> Result<PathBuf> {
    if let Some(path) = output {
        return Ok(path.clone());
    }
    Err(anyhow::anyhow!("Output path required for {} output", ext))
}

#[cfg(feature = "png")]
fn write_png(svg: &str, output: &Path, config: &Config) -> Result<()> {
    crate::render::write_output_png(svg, output, &config.theme)
}

#[cfg(not(feature = "png"))]
fn write_png(_svg: &str, _output: &Path, _config: &Config) -> Result<()> {
    Err(anyhow::anyhow!(
        "PNG output requires building with the `png` feature"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Canvas;

    fn args() -> Args {
        Args {
            input: None,
            output: None,
            output_format: OutputFormat::Svg,
            config: None,
            width: None,
            height: None,
        }
    }

    #[test]
    fn canvas_resolution_precedence() {
        let config = Config::default();
        let mut scene = parse_scene(
            r#"{"edges": [{"id": "e", "category": "lawn", "measure": 5.0, "anchorPx": [10, 10]}]}"#,
        )
        .unwrap();

        // Config fallback when nothing else specifies a canvas.
        assert_eq!(
            resolve_canvas(&args(), &scene, &config),
            (config.render.width, config.render.height)
        );

        // Scene canvas beats the config.
        scene.canvas = Some(Canvas {
            width: 640.0,
            height: 480.0,
        });
        assert_eq!(resolve_canvas(&args(), &scene, &config), (640.0, 480.0));

        // CLI flags beat the scene.
        let mut flags = args();
        flags.width = Some(320.0);
        assert_eq!(resolve_canvas(&flags, &scene, &config), (320.0, 480.0));
    }

    #[test]
    fn missing_png_output_path_is_an_error() {
        assert!(ensure_output(&None, "png").is_err());
        assert!(ensure_output(&Some(PathBuf::from("out.png")), "png").is_ok());
    }
}
