//! Host pipeline: config → renderer → generator → output

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tribox_camtools::{
    to_gcode, to_svg, BoxGenerator, CamToolError, OutputFormat, Part, PathRenderer,
    ThicknessAdjuster, TriangleBoxGenerator,
};
use tribox_settings::Config;

use crate::cli::RenderArgs;

/// Result of one render. `error` is set when rendering stopped early; the
/// parts drawn before the failure are still in `parts`.
#[derive(Debug)]
pub struct Layout {
    pub parts: Vec<Part>,
    pub header: Vec<String>,
    pub error: Option<CamToolError>,
}

/// Render the box described by `config`.
///
/// Fails only when the material settings cannot build a joint geometry;
/// panel errors are reported through [`Layout::error`].
pub fn render_layout(config: &Config) -> Result<Layout> {
    let joints = config
        .joint_geometry()
        .context("Invalid material or finger joint settings")?;

    let mut generator = TriangleBoxGenerator::default();
    generator.configure(config.triangle_box.clone());

    let mut header = generator.summary();
    header.extend(joints.summary());

    let sizing = ThicknessAdjuster::new(config.material.thickness);
    let mut renderer = PathRenderer::new(joints, config.output.spacing);
    let error = generator.render(&mut renderer, &sizing).err();

    Ok(Layout {
        parts: renderer.into_parts(),
        header,
        error,
    })
}

/// Serialize a layout in the configured output format.
pub fn format_layout(config: &Config, layout: &Layout) -> Result<String> {
    let text = match config.output.format {
        OutputFormat::Svg => to_svg(&layout.parts, config.output.spacing, config.output.labels)?,
        OutputFormat::Gcode => to_gcode(&layout.parts, &config.output.laser, &layout.header)?,
    };
    Ok(text)
}

fn write_output(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// `tribox render`
pub fn run_render(args: &RenderArgs) -> Result<()> {
    let mut config = Config::load(args.config.as_deref()).context("Failed to load config")?;
    args.apply(&mut config);
    config.validate().context("Invalid configuration")?;

    let layout = render_layout(&config)?;

    if !layout.parts.is_empty() {
        if layout.error.is_some() {
            warn!(
                "Rendering stopped after {} panel(s); writing partial layout",
                layout.parts.len()
            );
        }
        let text = format_layout(&config, &layout)?;
        write_output(&text, args.output.as_deref())?;
    }

    match layout.error {
        Some(err) => Err(err).context("Failed to render box"),
        None => Ok(()),
    }
}

/// `tribox init-config`
pub fn run_init_config(path: Option<PathBuf>, force: bool) -> Result<PathBuf> {
    let path = match path {
        Some(path) => path,
        None => Config::default_path()?,
    };

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save_to_file(&path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Wrote default config to {}", path.display());
    Ok(path)
}
