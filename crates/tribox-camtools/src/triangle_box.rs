//! Right Triangle Box
//!
//! A closed box with a right-angled triangular cross-section: two triangular
//! end caps and three rectangular walls joining the triangle edges.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CamToolResult;
use crate::panel::{Move, PanelRenderer};
use crate::sizing::SizeAdjuster;

/// A generator that lays out the panels of one box.
pub trait BoxGenerator {
    type Parameters;

    fn name(&self) -> &'static str;

    fn configure(&mut self, params: Self::Parameters);

    /// Draw every panel through `renderer`. Panels drawn before a failing
    /// call stay drawn.
    fn render(
        &self,
        renderer: &mut dyn PanelRenderer,
        sizing: &dyn SizeAdjuster,
    ) -> CamToolResult<()>;

    /// Human readable description of the configured parameters.
    fn summary(&self) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriangleBoxParameters {
    /// Length of the base edge (horizontal leg) in mm
    pub base: f64,
    /// Height of the triangle (vertical leg) in mm
    pub height: f64,
    /// Depth of the box, extruding the triangle, in mm
    pub depth: f64,
    /// Dimensions are outer measurements
    pub outside: bool,
    /// Edge type of the bottom triangle
    pub bottom_edge: char,
    /// Edge type of the top triangle
    pub top_edge: char,
    /// Edge type of the rectangular walls
    pub wall_edge: char,
}

impl Default for TriangleBoxParameters {
    fn default() -> Self {
        Self {
            base: 100.0,
            height: 80.0,
            depth: 50.0,
            outside: false,
            bottom_edge: 'f',
            top_edge: 'F',
            wall_edge: 'f',
        }
    }
}

/// Length of the diagonal wall.
pub fn hypotenuse(base: f64, height: f64) -> f64 {
    (base * base + height * height).sqrt()
}

#[derive(Debug, Clone, Default)]
pub struct TriangleBoxGenerator {
    params: TriangleBoxParameters,
}

impl TriangleBoxGenerator {
    pub fn new(params: TriangleBoxParameters) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &TriangleBoxParameters {
        &self.params
    }
}

impl BoxGenerator for TriangleBoxGenerator {
    type Parameters = TriangleBoxParameters;

    fn name(&self) -> &'static str {
        "Right Triangle Box"
    }

    fn configure(&mut self, params: TriangleBoxParameters) {
        debug!("Configuring {} with {:?}", self.name(), params);
        self.params = params;
    }

    fn render(
        &self,
        renderer: &mut dyn PanelRenderer,
        sizing: &dyn SizeAdjuster,
    ) -> CamToolResult<()> {
        let p = &self.params;
        let (mut base, mut height, mut depth) = (p.base, p.height, p.depth);

        if p.outside {
            base = sizing.to_inside(base);
            height = sizing.to_inside(height);
            depth = sizing.to_inside(depth);
        }

        let hypotenuse = hypotenuse(base, height);
        info!(
            "Rendering {}: base {:.3}, height {:.3}, depth {:.3}, hypotenuse {:.3}",
            self.name(),
            base,
            height,
            depth,
            hypotenuse
        );

        let wall_edges = format!(
            "{}{}{}{}",
            p.bottom_edge, p.wall_edge, p.top_edge, p.wall_edge
        );
        let bottom_edges = format!("{}{}{}", p.bottom_edge, p.wall_edge, p.wall_edge);
        let top_edges = format!("{}{}{}", p.top_edge, p.wall_edge, p.wall_edge);

        renderer.draw_rectangle(base, depth, &wall_edges, Move::Right, "Wall 1 (base)")?;
        renderer.draw_rectangle(height, depth, &wall_edges, Move::Right, "Wall 2 (height)")?;
        renderer.draw_rectangle(
            hypotenuse,
            depth,
            &wall_edges,
            Move::Right,
            "Wall 3 (hypotenuse)",
        )?;
        renderer.draw_right_triangle(base, height, &bottom_edges, Move::Right, "Bottom triangle")?;
        renderer.draw_right_triangle(base, height, &top_edges, Move::Right, "Top triangle")?;

        Ok(())
    }

    fn summary(&self) -> Vec<String> {
        let p = &self.params;
        vec![
            format!("Generator: {}", self.name()),
            format!("Dimensions: base {} x height {} x depth {} mm", p.base, p.height, p.depth),
            format!("Outside Dimensions: {}", p.outside),
            format!(
                "Edges: bottom '{}', top '{}', walls '{}'",
                p.bottom_edge, p.top_edge, p.wall_edge
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_parameters() {
        let p = TriangleBoxParameters::default();
        assert_eq!(p.base, 100.0);
        assert_eq!(p.height, 80.0);
        assert_eq!(p.depth, 50.0);
        assert!(!p.outside);
        assert_eq!((p.bottom_edge, p.top_edge, p.wall_edge), ('f', 'F', 'f'));
    }

    #[test]
    fn test_hypotenuse() {
        assert!((hypotenuse(3.0, 4.0) - 5.0).abs() < 1e-9);
        assert!((hypotenuse(100.0, 80.0) - 128.062_484_748_656_8).abs() < 1e-9);

        for (b, h) in [(1.0, 1.0), (0.5, 250.0), (1234.5, 0.25), (20.0, 20.0)] {
            let c = hypotenuse(b, h);
            assert!((c - (b * b + h * h).sqrt()).abs() < 1e-9);
            assert!(c > b.max(h));
        }
    }

    #[test]
    fn test_configure_replaces_parameters() {
        let mut generator = TriangleBoxGenerator::default();
        generator.configure(TriangleBoxParameters {
            base: 60.0,
            ..Default::default()
        });
        assert_eq!(generator.params().base, 60.0);
        assert_eq!(generator.params().height, 80.0);
    }

    #[test]
    fn test_summary_mentions_parameters() {
        let generator = TriangleBoxGenerator::default();
        let summary = generator.summary().join("\n");
        assert!(summary.contains("Right Triangle Box"));
        assert!(summary.contains("base 100 x height 80 x depth 50 mm"));
        assert!(summary.contains("top 'F'"));
    }

    #[test]
    fn test_parameters_deserialize_with_defaults() {
        let p: TriangleBoxParameters =
            serde_json::from_str(r#"{"base": 120.0, "wall_edge": "e"}"#).unwrap();
        assert_eq!(p.base, 120.0);
        assert_eq!(p.height, 80.0);
        assert_eq!(p.wall_edge, 'e');
    }
}
