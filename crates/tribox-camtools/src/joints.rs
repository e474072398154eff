//! Finger joint geometry
//!
//! Finger and space widths are multiples of the material thickness, so the
//! finger count for an edge follows from its length automatically.

use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ParameterResult};
use crate::types::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerStyle {
    #[default]
    Rectangular,
    /// Overcut notch corners so a round tool leaves square inner corners
    Dogbone,
}

impl std::str::FromStr for FingerStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rectangular" => Ok(Self::Rectangular),
            "dogbone" => Ok(Self::Dogbone),
            _ => Err(format!("Unknown finger style: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FingerJointSettings {
    /// Width of fingers in multiples of thickness
    pub finger: f64,
    /// Space between fingers in multiples of thickness
    pub space: f64,
    /// Space at start and end in multiples of normal spaces
    pub surrounding_spaces: f64,
    /// Extra space to allow fingers to move in/out (multiples of thickness)
    pub play: f64,
    /// Extra material for burn marks (multiples of thickness)
    pub extra_length: f64,
    /// Style of fingers
    pub style: FingerStyle,
    /// Height of dimple (friction fit bump)
    pub dimple_height: f64,
    /// Length of dimple
    pub dimple_length: f64,
}

impl Default for FingerJointSettings {
    fn default() -> Self {
        Self {
            finger: 2.0,
            space: 2.0,
            surrounding_spaces: 2.0,
            play: 0.0,
            extra_length: 0.0,
            style: FingerStyle::Rectangular,
            dimple_height: 0.0,
            dimple_length: 0.0,
        }
    }
}

/// Finger joint settings resolved against a concrete material.
#[derive(Debug, Clone, PartialEq)]
pub struct JointGeometry {
    settings: FingerJointSettings,
    thickness: f64,
    burn: f64,
}

impl JointGeometry {
    pub fn new(settings: FingerJointSettings, thickness: f64, burn: f64) -> ParameterResult<Self> {
        if !(thickness.is_finite() && thickness > 0.0) {
            return Err(ParameterError::InvalidValue {
                name: "thickness".to_string(),
                reason: format!("material thickness must be positive, got {}", thickness),
            });
        }

        if !(burn.is_finite() && burn >= 0.0 && burn < thickness) {
            return Err(ParameterError::OutOfRange {
                name: "burn".to_string(),
                value: burn,
                min: 0.0,
                max: thickness,
            });
        }

        if settings.finger < 0.0 || settings.space < 0.0 {
            return Err(ParameterError::InvalidValue {
                name: "finger_joint".to_string(),
                reason: "finger and space must not be negative".to_string(),
            });
        }

        if (settings.space + settings.finger).abs() < 0.1 {
            return Err(ParameterError::InvalidValue {
                name: "finger_joint".to_string(),
                reason: "finger + space must not be close to zero".to_string(),
            });
        }

        Ok(Self {
            settings,
            thickness,
            burn,
        })
    }

    pub fn settings(&self) -> &FingerJointSettings {
        &self.settings
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn burn(&self) -> f64 {
        self.burn
    }

    /// Material and finger settings as comment lines for output headers
    pub fn summary(&self) -> Vec<String> {
        let s = &self.settings;
        let t = self.thickness;
        vec![
            format!("Material thickness: {} mm", t),
            format!("Burn / Tool Dia: {} mm", self.burn),
            format!("Finger width: {} * thickness = {} mm", s.finger, s.finger * t),
            format!("Space width: {} * thickness = {} mm", s.space, s.space * t),
            format!("Surrounding spaces: {}", s.surrounding_spaces),
            format!("Play: {} mm", s.play * t),
            format!("Finger Style: {:?}", s.style),
        ]
    }

    /// Calculate number of fingers and leftover space for a given length
    pub fn calc_fingers(&self, length: f64) -> (usize, f64) {
        let settings = &self.settings;
        let t = self.thickness;

        let space = settings.space * t;
        let finger = settings.finger * t;

        let raw = ((length - (settings.surrounding_spaces - 1.0) * space) / (space + finger)).floor();
        let mut fingers = if raw > 0.0 { raw as usize } else { 0 };

        if fingers == 0 && length > finger + t {
            fingers = 1;
        }

        if finger == 0.0 {
            fingers = 0;
        }

        let leftover = if fingers > 0 {
            length - (fingers as f64) * (space + finger) + space
        } else {
            length
        };

        (fingers, leftover)
    }

    /// Trace a finger joint edge of `length` in the local edge frame.
    ///
    /// x runs along the edge from 0 to `length`, negative y points out of the
    /// panel. `positive` edges grow fingers outward, the others cut notches
    /// inward for the mating panel.
    pub fn finger_edge(&self, length: f64, positive: bool) -> Vec<Point> {
        let mut path = Vec::new();
        let settings = &self.settings;
        let t = self.thickness;

        let mut space = settings.space * t;
        let mut finger = settings.finger * t;
        let play = settings.play * t;
        let extra = settings.extra_length * t;
        let kerf = self.burn;
        let half_kerf = kerf / 2.0;
        let dogbone = settings.style == FingerStyle::Dogbone;
        let dimple_h = settings.dimple_height;
        let dimple_l = settings.dimple_length;
        let overcut = half_kerf;

        let (fingers, mut leftover) = self.calc_fingers(length);

        if !positive {
            finger += play;
            space -= play;
            leftover -= play;
        }

        let base_y = -half_kerf;
        let (finger_draw, space_draw, leftover_draw, tip_y) = if positive {
            (finger + kerf, space - kerf, leftover - kerf, -t - extra - half_kerf)
        } else {
            (finger - kerf, space + kerf, leftover + kerf, t - half_kerf)
        };

        // Side of a finger or notch from (x, y1) to (x, y2). The dimple widens
        // fingers and narrows notches for a friction fit.
        let draw_side = |path: &mut Vec<Point>, x: f64, y1: f64, y2: f64| {
            if dimple_h > 0.0 && dimple_l > 0.0 && (y2 - y1).abs() > dimple_l {
                let mid_y = (y1 + y2) / 2.0;
                let half_l = dimple_l / 2.0;
                let dir = if y2 > y1 { 1.0 } else { -1.0 };
                let leaving_base = (y2 - y1) * (tip_y - base_y) > 0.0;
                let bulge_dir = match (leaving_base, positive) {
                    (true, true) | (false, false) => -1.0,
                    (true, false) | (false, true) => 1.0,
                };

                path.push(Point::new(x, y1));
                path.push(Point::new(x, mid_y - half_l * dir));
                path.push(Point::new(x + dimple_h * bulge_dir, mid_y));
                path.push(Point::new(x, mid_y + half_l * dir));
                path.push(Point::new(x, y2));
            } else {
                path.push(Point::new(x, y1));
                path.push(Point::new(x, y2));
            }
        };

        let mut x = 0.0;
        path.push(Point::new(x, base_y));
        x += leftover_draw / 2.0;
        path.push(Point::new(x, base_y));

        for i in 0..fingers {
            if !positive && dogbone {
                path.push(Point::new(x, base_y));
                path.push(Point::new(x, tip_y + overcut));
                path.push(Point::new(x - overcut, tip_y + overcut));
                path.push(Point::new(x, tip_y));
            } else {
                draw_side(&mut path, x, base_y, tip_y);
            }

            x += finger_draw;
            path.push(Point::new(x, tip_y));

            if !positive && dogbone {
                path.push(Point::new(x + overcut, tip_y + overcut));
                path.push(Point::new(x, tip_y + overcut));
                path.push(Point::new(x, base_y));
            } else {
                draw_side(&mut path, x, tip_y, base_y);
            }

            if i < fingers - 1 {
                x += space_draw;
                path.push(Point::new(x, base_y));
            }
        }

        x += leftover_draw / 2.0;
        path.push(Point::new(x, base_y));

        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry(burn: f64) -> JointGeometry {
        JointGeometry::new(FingerJointSettings::default(), 3.0, burn).unwrap()
    }

    #[test]
    fn test_calc_fingers() {
        let g = geometry(0.0);
        // finger = space = 6mm: floor((100 - 6) / 12) = 7
        let (fingers, leftover) = g.calc_fingers(100.0);
        assert_eq!(fingers, 7);
        assert!((leftover - 22.0).abs() < 1e-9);
    }

    #[test]
    fn test_calc_fingers_short_edge() {
        let g = geometry(0.0);
        let (fingers, _) = g.calc_fingers(10.0);
        assert_eq!(fingers, 1);

        let (fingers, leftover) = g.calc_fingers(5.0);
        assert_eq!(fingers, 0);
        assert_eq!(leftover, 5.0);
    }

    #[test]
    fn test_finger_edge_spans_length() {
        for burn in [0.0, 0.1, 0.5] {
            let g = geometry(burn);
            for positive in [true, false] {
                let path = g.finger_edge(100.0, positive);
                let first = path.first().unwrap();
                let last = path.last().unwrap();
                assert!(first.x.abs() < 1e-9);
                assert!((last.x - 100.0).abs() < 1e-9, "burn {} positive {}", burn, positive);
            }
        }
    }

    #[test]
    fn test_finger_depth() {
        let g = geometry(0.2);
        let out = g.finger_edge(100.0, true);
        let min_y = out.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        assert!((min_y - (-3.1)).abs() < 1e-9);

        let notches = g.finger_edge(100.0, false);
        let max_y = notches.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        assert!((max_y - 2.9).abs() < 1e-9);
    }

    #[test]
    fn test_dogbone_overcuts_notches() {
        let settings = FingerJointSettings {
            style: FingerStyle::Dogbone,
            ..Default::default()
        };
        let g = JointGeometry::new(settings, 3.0, 0.4).unwrap();
        let rectangular = geometry(0.4).finger_edge(100.0, false);
        let dogbone = g.finger_edge(100.0, false);
        assert!(dogbone.len() > rectangular.len());
    }

    #[test]
    fn test_dimples_add_points() {
        let settings = FingerJointSettings {
            dimple_height: 0.2,
            dimple_length: 1.0,
            ..Default::default()
        };
        let g = JointGeometry::new(settings, 3.0, 0.0).unwrap();
        let plain = geometry(0.0).finger_edge(100.0, true);
        let dimpled = g.finger_edge(100.0, true);
        // 7 fingers, two sides each, three extra points per side
        assert_eq!(dimpled.len(), plain.len() + 7 * 2 * 3);
    }

    #[test]
    fn test_invalid_material() {
        let s = FingerJointSettings::default();
        assert!(JointGeometry::new(s.clone(), 0.0, 0.0).is_err());
        assert!(JointGeometry::new(s.clone(), 3.0, -0.1).is_err());
        assert!(JointGeometry::new(s.clone(), 3.0, 3.0).is_err());

        let zero = FingerJointSettings {
            finger: 0.0,
            space: 0.0,
            ..Default::default()
        };
        assert!(JointGeometry::new(zero, 3.0, 0.1).is_err());
    }

    #[test]
    fn test_finger_style_from_str() {
        assert_eq!("dogbone".parse::<FingerStyle>().unwrap(), FingerStyle::Dogbone);
        assert_eq!(
            "Rectangular".parse::<FingerStyle>().unwrap(),
            FingerStyle::Rectangular
        );
        assert!("springs".parse::<FingerStyle>().is_err());
    }
}
