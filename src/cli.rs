//! Command line interface

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tribox_camtools::OutputFormat;
use tribox_settings::Config;

#[derive(Parser, Debug)]
#[command(name = "tribox")]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
#[command(about = "Closed box with a right-angled triangular cross-section, laid out for laser cutting", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lay out the box panels as SVG or G-code
    Render(RenderArgs),
    /// Write the default configuration file
    InitConfig {
        /// Target file (.toml or .json); defaults to the user config directory
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Options for `render`. Anything given here overrides the config file.
#[derive(Args, Debug, Default, Clone)]
pub struct RenderArgs {
    /// Config file (.toml or .json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Length of the base edge (horizontal leg) in mm
    #[arg(long)]
    pub base: Option<f64>,
    /// Height of the triangle (vertical leg) in mm
    #[arg(long)]
    pub height: Option<f64>,
    /// Depth of the box (extends the triangle into 3D) in mm
    #[arg(long)]
    pub depth: Option<f64>,
    /// Treat the dimensions as outside measurements
    #[arg(long, conflicts_with = "inside")]
    pub outside: bool,
    /// Treat the dimensions as inside measurements
    #[arg(long)]
    pub inside: bool,

    /// Edge type for the bottom triangle
    #[arg(long)]
    pub bottom_edge: Option<char>,
    /// Edge type for the top triangle
    #[arg(long)]
    pub top_edge: Option<char>,
    /// Edge type for the rectangular walls
    #[arg(long)]
    pub wall_edge: Option<char>,

    /// Material thickness in mm
    #[arg(short, long)]
    pub thickness: Option<f64>,
    /// Burn correction (kerf width) in mm
    #[arg(long)]
    pub burn: Option<f64>,
    /// Finger width in multiples of the thickness
    #[arg(long)]
    pub finger: Option<f64>,
    /// Space between fingers in multiples of the thickness
    #[arg(long)]
    pub space: Option<f64>,

    /// Output format
    #[arg(short, long)]
    pub format: Option<OutputFormat>,
    /// Gap between panels in mm
    #[arg(long)]
    pub spacing: Option<f64>,
    /// Leave panel labels out of the SVG
    #[arg(long)]
    pub no_labels: bool,
    /// Output file; stdout when omitted
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

impl RenderArgs {
    /// Apply command line overrides on top of `config`.
    pub fn apply(&self, config: &mut Config) {
        let tb = &mut config.triangle_box;
        if let Some(v) = self.base {
            tb.base = v;
        }
        if let Some(v) = self.height {
            tb.height = v;
        }
        if let Some(v) = self.depth {
            tb.depth = v;
        }
        if self.outside {
            tb.outside = true;
        }
        if self.inside {
            tb.outside = false;
        }
        if let Some(c) = self.bottom_edge {
            tb.bottom_edge = c;
        }
        if let Some(c) = self.top_edge {
            tb.top_edge = c;
        }
        if let Some(c) = self.wall_edge {
            tb.wall_edge = c;
        }

        if let Some(v) = self.thickness {
            config.material.thickness = v;
        }
        if let Some(v) = self.burn {
            config.material.burn = v;
        }
        if let Some(v) = self.finger {
            config.finger_joint.finger = v;
        }
        if let Some(v) = self.space {
            config.finger_joint.space = v;
        }

        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(v) = self.spacing {
            config.output.spacing = v;
        }
        if self.no_labels {
            config.output.labels = false;
        }
    }
}
