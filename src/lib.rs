//! # Tribox
//!
//! Laser-cut layout generator for a closed box with a right-angled
//! triangular cross-section.
//!
//! ## Architecture
//!
//! Tribox is organized as a workspace with multiple crates:
//!
//! 1. **tribox-camtools** - Finger joints, edge styles, panel layout, SVG/G-code output
//! 2. **tribox-settings** - Configuration files (JSON/TOML) and validation
//! 3. **tribox** - Command line binary that wires the two together
//!
//! The box itself has two triangular end caps and three rectangular walls,
//! all joined with finger joints.

pub mod app;
pub mod cli;

pub use tribox_camtools::{
    BoxGenerator, CamToolError, FingerJointSettings, OutputFormat, Part, PathRenderer,
    TriangleBoxGenerator, TriangleBoxParameters,
};
pub use tribox_settings::{Config, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, keeping stdout free for the generated layout
/// - RUST_LOG environment variable support (default `warn`)
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
