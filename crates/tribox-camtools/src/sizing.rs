//! Outside-to-inside size adjustment

/// Converts an outer (finished) box measurement into the inner frame length
/// the panels are drawn from.
pub trait SizeAdjuster {
    fn to_inside(&self, outside_length: f64) -> f64;
}

/// Removes one material thickness for the wall on each side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessAdjuster {
    pub thickness: f64,
}

impl ThicknessAdjuster {
    pub fn new(thickness: f64) -> Self {
        Self { thickness }
    }
}

impl SizeAdjuster for ThicknessAdjuster {
    fn to_inside(&self, outside_length: f64) -> f64 {
        outside_length - 2.0 * self.thickness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thickness_adjuster() {
        let adjuster = ThicknessAdjuster::new(3.0);
        assert_eq!(adjuster.to_inside(100.0), 94.0);
        assert_eq!(adjuster.to_inside(6.0), 0.0);
    }
}
