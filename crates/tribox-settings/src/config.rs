//! Configuration file handling for tribox
//!
//! Supports JSON and TOML file formats. Every section and field is optional;
//! missing values fall back to their defaults.
//!
//! Configuration is organized into logical sections:
//! - Box parameters (dimensions, edge codes)
//! - Material (thickness, burn)
//! - Finger joint settings
//! - Output (format, layout spacing, labels, laser settings)

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use tribox_camtools::{
    FingerJointSettings, JointGeometry, LaserSettings, OutputFormat, ParameterResult,
    TriangleBoxParameters,
};

use crate::error::{SettingsError, SettingsResult};

/// Material settings supplied to every panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSettings {
    /// Material thickness in mm
    pub thickness: f64,
    /// Burn correction (kerf width) in mm
    pub burn: f64,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            thickness: 3.0,
            burn: 0.1,
        }
    }
}

/// Output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    pub format: OutputFormat,
    /// Gap between panels in mm
    pub spacing: f64,
    /// Print panel labels in SVG output
    pub labels: bool,
    pub laser: LaserSettings,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Svg,
            spacing: 5.0,
            labels: true,
            laser: LaserSettings::default(),
        }
    }
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub triangle_box: TriangleBoxParameters,
    pub material: MaterialSettings,
    pub finger_joint: FingerJointSettings,
    pub output: OutputSettings,
}

enum FileKind {
    Json,
    Toml,
}

fn file_kind(path: &Path) -> SettingsResult<FileKind> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => Ok(FileKind::Json),
        Some("toml") => Ok(FileKind::Toml),
        other => Err(SettingsError::UnsupportedFormat(format!(
            "config file must be .json or .toml, got {}",
            other.unwrap_or("no extension")
        ))),
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config location: `<config dir>/tribox/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("tribox").join("config.toml"))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no configuration directory on this platform".to_string())
            })
    }

    /// Load the config at `path`, or the default location when `path` is
    /// `None`. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> SettingsResult<Self> {
        if let Some(path) = path {
            return Self::load_from_file(path);
        }

        match Self::default_path() {
            Ok(default) if default.exists() => Self::load_from_file(&default),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let kind = file_kind(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| {
            SettingsError::LoadError(format!("failed to read {}: {}", path.display(), e))
        })?;

        let config: Self = match kind {
            FileKind::Json => serde_json::from_str(&content)?,
            FileKind::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML), creating parent directories
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = match file_kind(path)? {
            FileKind::Json => serde_json::to_string_pretty(self)?,
            FileKind::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                SettingsError::SaveError(format!("failed to create {}: {}", parent.display(), e))
            })?;
        }

        std::fs::write(path, content).map_err(|e| {
            SettingsError::SaveError(format!("failed to write {}: {}", path.display(), e))
        })?;

        Ok(())
    }

    /// Validate configuration
    ///
    /// Box dimensions are left to the panel renderer, which rejects
    /// degenerate panels when they are drawn.
    pub fn validate(&self) -> SettingsResult<()> {
        let material = &self.material;
        if !(material.thickness.is_finite() && material.thickness > 0.0) {
            return Err(SettingsError::invalid("material.thickness", "must be > 0"));
        }

        if !(material.burn >= 0.0 && material.burn < material.thickness) {
            return Err(SettingsError::invalid(
                "material.burn",
                "must be >= 0 and smaller than the thickness",
            ));
        }

        let fj = &self.finger_joint;
        if fj.finger < 0.0 || fj.space < 0.0 || fj.surrounding_spaces < 0.0 {
            return Err(SettingsError::invalid(
                "finger_joint",
                "finger, space and surrounding_spaces must not be negative",
            ));
        }

        if fj.finger + fj.space < 0.1 {
            return Err(SettingsError::invalid(
                "finger_joint",
                "finger + space must not be close to zero",
            ));
        }

        if !(self.output.spacing.is_finite() && self.output.spacing >= 0.0) {
            return Err(SettingsError::invalid("output.spacing", "must be >= 0"));
        }

        let laser = &self.output.laser;
        if laser.passes == 0 {
            return Err(SettingsError::invalid("output.laser.passes", "must be > 0"));
        }

        if laser.feed_rate <= 0.0 {
            return Err(SettingsError::invalid("output.laser.feed_rate", "must be > 0"));
        }

        Ok(())
    }

    /// Finger joint geometry for the configured material
    pub fn joint_geometry(&self) -> ParameterResult<JointGeometry> {
        JointGeometry::new(
            self.finger_joint.clone(),
            self.material.thickness,
            self.material.burn,
        )
    }
}
