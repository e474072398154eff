//! # Tribox CAM Tools
//!
//! Panel generation for laser-cut boxes with a right-triangle cross-section.
//!
//! ## Building blocks
//!
//! - **Joints**: finger count calculation and finger edge tracing with kerf
//! - **Edges**: single character edge codes resolved into edge profiles
//! - **Panels**: rectangle and right triangle outlines placed by a layout cursor
//! - **Sizing**: outside-to-inside dimension adjustment
//! - **Triangle Box**: the generator that draws the five panels of the box
//! - **Output**: SVG and laser G-code emission

pub mod edges;
pub mod error;
pub mod joints;
pub mod output;
pub mod panel;
pub mod sizing;
pub mod triangle_box;
pub mod types;

// Re-export commonly used items
pub use edges::{EdgeProfile, EdgeStyleRegistry, StandardEdges};
pub use error::{CamToolError, CamToolResult, ParameterError, ParameterResult};
pub use joints::{FingerJointSettings, FingerStyle, JointGeometry};
pub use output::{to_gcode, to_svg, LaserSettings, OutputFormat};
pub use panel::{Move, PanelRenderer, PanelShape, Part, PathRenderer};
pub use sizing::{SizeAdjuster, ThicknessAdjuster};
pub use triangle_box::{hypotenuse, BoxGenerator, TriangleBoxGenerator, TriangleBoxParameters};
pub use types::{Bounds, Point};
