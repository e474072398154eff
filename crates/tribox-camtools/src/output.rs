//! Layout output
//!
//! Turns placed [`Part`]s into an SVG drawing for laser software or into
//! G-code that drives a GRBL-style laser directly.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CamToolError, CamToolResult};
use crate::panel::Part;
use crate::types::Bounds;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Svg,
    Gcode,
}

impl OutputFormat {
    /// File extension conventionally used for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Gcode => "gcode",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => write!(f, "svg"),
            Self::Gcode => write!(f, "gcode"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "gcode" | "nc" | "ngc" => Ok(Self::Gcode),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaserSettings {
    pub passes: u32,
    /// Z step down between passes (mm)
    pub z_step_down: f64,
    /// Spindle/laser power (S value)
    pub power: u32,
    /// Cutting feed rate (mm/min)
    pub feed_rate: f64,
    /// Work origin offset (mm)
    pub offset_x: f64,
    pub offset_y: f64,
}

impl Default for LaserSettings {
    fn default() -> Self {
        Self {
            passes: 1,
            z_step_down: 0.5,
            power: 1000,
            feed_rate: 500.0,
            offset_x: 10.0,
            offset_y: 10.0,
        }
    }
}

fn layout_bounds(parts: &[Part]) -> CamToolResult<Bounds> {
    parts
        .iter()
        .filter_map(Part::bounds)
        .reduce(|a, b| a.union(&b))
        .ok_or_else(|| CamToolError::GenerationFailed("layout contains no panels".to_string()))
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Render the layout as an SVG document in millimetres.
///
/// The layout's y axis points up, so it is flipped for SVG. `margin` is kept
/// free around the drawing.
pub fn to_svg(parts: &[Part], margin: f64, labels: bool) -> CamToolResult<String> {
    let bounds = layout_bounds(parts)?;
    let margin = margin.max(0.0);
    let width = bounds.width() + 2.0 * margin;
    let height = bounds.height() + 2.0 * margin;

    let sx = |x: f64| x - bounds.min_x + margin;
    let sy = |y: f64| bounds.max_y - y + margin;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="no"?>
<svg width="{w:.3}mm" height="{h:.3}mm" viewBox="0 0 {w:.3} {h:.3}" xmlns="http://www.w3.org/2000/svg">
"#,
        w = width,
        h = height
    ));

    let style = "fill:none;stroke:black;stroke-width:0.1";
    for part in parts {
        let mut points = part.outline.iter();
        let Some(first) = points.next() else {
            continue;
        };

        let mut d = format!("M {:.3} {:.3}", sx(first.x), sy(first.y));
        for p in points {
            d.push_str(&format!(" L {:.3} {:.3}", sx(p.x), sy(p.y)));
        }
        d.push_str(" Z");

        svg.push_str(&format!(
            "  <path id=\"{}\" d=\"{}\" style=\"{}\" />\n",
            escape_xml(&part.label),
            d,
            style
        ));

        if labels {
            if let Some(b) = part.bounds() {
                let c = b.center();
                let font_size = (b.height().min(b.width()) / 8.0).clamp(2.0, 6.0);
                svg.push_str(&format!(
                    "  <text x=\"{:.3}\" y=\"{:.3}\" font-size=\"{:.2}\" text-anchor=\"middle\" style=\"fill:blue;stroke:none\">{}</text>\n",
                    sx(c.x),
                    sy(c.y),
                    font_size,
                    escape_xml(&part.label)
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    Ok(svg)
}

/// Render the layout as laser G-code. `header` lines are emitted as comments.
pub fn to_gcode(parts: &[Part], laser: &LaserSettings, header: &[String]) -> CamToolResult<String> {
    let bounds = layout_bounds(parts)?;
    let shift_x = laser.offset_x - bounds.min_x;
    let shift_y = laser.offset_y - bounds.min_y;

    let mut gcode = String::new();

    gcode.push_str("; Right Triangle Box G-code\n");
    gcode.push_str(";\n");
    for line in header {
        gcode.push_str(&format!("; {}\n", line));
    }
    gcode.push_str(";\n");

    gcode.push_str("; --- Laser Settings ---\n");
    gcode.push_str(&format!("; Laser passes: {}\n", laser.passes));
    gcode.push_str(&format!("; Laser power: S{}\n", laser.power));
    gcode.push_str(&format!("; Feed rate: {:.0} mm/min\n", laser.feed_rate));
    gcode.push_str(&format!("; Offset X: {} mm\n", laser.offset_x));
    gcode.push_str(&format!("; Offset Y: {} mm\n", laser.offset_y));
    gcode.push_str(";\n");

    gcode.push_str("; Initialization\n");
    gcode.push_str("G21 ; Set units to millimeters\n");
    gcode.push_str("G90 ; Absolute positioning\n");
    gcode.push_str("G17 ; XY plane selection\n");
    gcode.push('\n');

    gcode.push_str("; Home and set work coordinate system\n");
    gcode.push_str("$H ; Home all axes\n");
    gcode.push_str("G10 L2 P1 X0 Y0 Z0 ; Clear G54 offset\n");
    gcode.push_str("G54 ; Select work coordinate system 1\n");
    gcode.push_str(&format!(
        "G0 Z{:.2} F{:.0} ; Move to safe height\n\n",
        5.0, laser.feed_rate
    ));

    for (i, part) in parts.iter().enumerate() {
        gcode.push_str(&format!("; Panel {}: {}\n", i + 1, part.label));

        let Some(first_point) = part.outline.first() else {
            gcode.push('\n');
            continue;
        };

        gcode.push_str(&format!(
            "G0 X{:.2} Y{:.2} ; Rapid to start\n",
            first_point.x + shift_x,
            first_point.y + shift_y
        ));

        for pass_num in 1..=laser.passes {
            let z_depth = -(pass_num as f64 - 1.0) * laser.z_step_down;
            gcode.push_str(&format!(
                "; Pass {}/{} at Z{:.2}\n",
                pass_num, laser.passes, z_depth
            ));

            if pass_num > 1 {
                gcode.push_str(&format!("G0 Z{:.2} ; Move to pass depth\n", z_depth));
            }

            gcode.push_str(&format!("M3 S{} ; Laser on\n", laser.power));

            for (idx, point) in part.outline.iter().skip(1).enumerate() {
                if idx == 0 {
                    gcode.push_str(&format!(
                        "G1 X{:.2} Y{:.2} F{:.0}\n",
                        point.x + shift_x,
                        point.y + shift_y,
                        laser.feed_rate
                    ));
                } else {
                    gcode.push_str(&format!(
                        "G1 X{:.2} Y{:.2}\n",
                        point.x + shift_x,
                        point.y + shift_y
                    ));
                }
            }

            gcode.push_str("M5 ; Laser off\n");

            if pass_num < laser.passes {
                gcode.push_str(&format!(
                    "G0 X{:.2} Y{:.2} ; Return to start\n",
                    first_point.x + shift_x,
                    first_point.y + shift_y
                ));
            }
        }

        gcode.push('\n');
    }

    gcode.push_str("M5 ; Ensure laser off\n");
    gcode.push_str("G0 Z10.0 ; Move to safe height\n");
    gcode.push_str("G0 X0 Y0 ; Return to origin\n");
    gcode.push_str("M2 ; Program end\n");

    Ok(gcode)
}
