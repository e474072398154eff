//! Edge styles
//!
//! Panels describe each side with a single character edge code. A registry
//! turns the code into an [`EdgeProfile`] which knows how to trace itself.

use crate::error::{CamToolError, CamToolResult};
use crate::joints::JointGeometry;
use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeProfile {
    /// 'e': flat edge
    Straight,
    /// 'E': flat edge pushed out by one material thickness
    Outset,
    /// 'f': finger joint, fingers out
    Fingers,
    /// 'F': finger joint counterpart, notches in
    FingerCounterpart,
}

impl EdgeProfile {
    pub fn code(&self) -> char {
        match self {
            Self::Straight => 'e',
            Self::Outset => 'E',
            Self::Fingers => 'f',
            Self::FingerCounterpart => 'F',
        }
    }

    /// Trace this edge in the local edge frame (see [`JointGeometry::finger_edge`]).
    pub fn trace(&self, length: f64, joints: &JointGeometry) -> Vec<Point> {
        let half_kerf = joints.burn() / 2.0;
        match self {
            Self::Straight => vec![
                Point::new(0.0, -half_kerf),
                Point::new(length, -half_kerf),
            ],
            Self::Outset => {
                let y = -joints.thickness() - half_kerf;
                vec![Point::new(0.0, y), Point::new(length, y)]
            }
            Self::Fingers => joints.finger_edge(length, true),
            Self::FingerCounterpart => joints.finger_edge(length, false),
        }
    }
}

/// Resolves edge codes into profiles.
pub trait EdgeStyleRegistry {
    fn resolve(&self, code: char) -> CamToolResult<EdgeProfile>;

    /// Resolve every code in `codes`, failing on the first unknown one.
    fn resolve_all(&self, codes: &str) -> CamToolResult<Vec<EdgeProfile>> {
        codes.chars().map(|c| self.resolve(c)).collect()
    }
}

/// The built-in edge codes: `e`, `E`, `f` and `F`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardEdges;

impl EdgeStyleRegistry for StandardEdges {
    fn resolve(&self, code: char) -> CamToolResult<EdgeProfile> {
        match code {
            'e' => Ok(EdgeProfile::Straight),
            'E' => Ok(EdgeProfile::Outset),
            'f' => Ok(EdgeProfile::Fingers),
            'F' => Ok(EdgeProfile::FingerCounterpart),
            other => Err(CamToolError::UnknownEdgeType(other)),
        }
    }
}
