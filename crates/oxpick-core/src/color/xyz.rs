//! CIE 1931 XYZ
//!
//! Only used at the ICC boundary: colorant tags, the media white point and
//! the D50 to D65 adaptation of an imported profile.

/// Tristimulus values, Y normalized to 1.0 for the reference white
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    /// ICC profile connection space white
    pub const D50: Self = Self::new(0.96422, 1.0, 0.82521);

    /// White of sRGB, Display P3 and OKLab
    pub const D65: Self = Self::new(0.95047, 1.0, 1.08883);

    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// CIE xy chromaticity, `(0, 0)` for black
    pub fn chromaticity(self) -> (f64, f64) {
        match self.x + self.y + self.z {
            sum if sum > 0.0 => (self.x / sum, self.y / sum),
            _ => (0.0, 0.0),
        }
    }
}

impl From<[f64; 3]> for Xyz {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whites_chromaticity() {
        let (x, y) = Xyz::D65.chromaticity();
        assert!((x - 0.3127).abs() < 1e-3 && (y - 0.3290).abs() < 1e-3);

        let (x, y) = Xyz::D50.chromaticity();
        assert!((x - 0.3457).abs() < 1e-3 && (y - 0.3585).abs() < 1e-3);

        assert_eq!(Xyz::default().chromaticity(), (0.0, 0.0));
    }

    #[test]
    fn test_from_array() {
        assert_eq!(Xyz::from([0.1, 0.2, 0.3]).to_array(), [0.1, 0.2, 0.3]);
    }
}
