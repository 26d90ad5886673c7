//! OKLab and OKLCH
//!
//! Björn Ottosson's perceptual color space and its polar form. OKLab is
//! defined relative to linear sRGB, so every working space funnels through
//! [`oklab_to_linear_srgb`] / [`linear_srgb_to_oklab`].
//!
//! Reference: <https://bottosson.github.io/posts/oklab/>

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

use super::rgb::LinearRgb;
use crate::math::matrix::Matrix3x3;

/// Linear sRGB → LMS
const LINEAR_SRGB_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Cube-root LMS → OKLab
const LMS_TO_OKLAB: Matrix3x3 = Matrix3x3::new([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// OKLab → cube-root LMS, the exact inverse of [`LMS_TO_OKLAB`] rounded to f64
///
/// The published 10-digit inverses only agree with the forward matrices to
/// about 1e-10, which the cube in between magnifies to 1e-3 near the edges
/// of the a/b working range.
const OKLAB_TO_LMS: Matrix3x3 = Matrix3x3::new([
    [0.9999999984505198, 0.39633779217376786, 0.2158037580607588],
    [1.0000000088817609, -0.10556134232365635, -0.06385417477170591],
    [1.0000000546724108, -0.08948418209496575, -1.2914855378640917],
]);

/// LMS → linear sRGB, the exact inverse of [`LINEAR_SRGB_TO_LMS`]
const LMS_TO_LINEAR_SRGB: Matrix3x3 = Matrix3x3::new([
    [4.076741661347994, -3.3077115904081933, 0.2309699287294279],
    [-1.268438004092176, 2.6097574006633715, -0.3413193963102196],
    [-0.004196086541837109, -0.7034186144594496, 1.7076147009309448],
]);

/// OKLab color
///
/// L is nominally in [0, 1]; a and b are unbounded with a working range of
/// about ±0.4.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Oklab {
    /// Lightness
    pub l: f64,
    /// Green–red axis
    pub a: f64,
    /// Blue–yellow axis
    pub b: f64,
}

impl Oklab {
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Polar form
    #[inline]
    pub fn to_oklch(&self) -> Oklch {
        let (c, h) = oklab_to_oklch(self.a, self.b);
        Oklch::new(self.l, c, h)
    }

    /// Chroma (distance from the neutral axis)
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Euclidean distance, a perceptual difference estimate
    #[inline]
    pub fn distance(&self, other: &Self) -> f64 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        (dl * dl + da * da + db * db).sqrt()
    }
}

/// OKLCH color: lightness, chroma and hue in degrees
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable, Serialize, Deserialize)]
pub struct Oklch {
    /// Lightness
    pub l: f64,
    /// Chroma
    pub c: f64,
    /// Hue angle in degrees, [0, 360)
    pub h: f64,
}

impl Oklch {
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }

    /// Cartesian form
    #[inline]
    pub fn to_oklab(&self) -> Oklab {
        let (a, b) = oklch_to_oklab(self.c, self.h);
        Oklab::new(self.l, a, b)
    }
}

impl From<Oklch> for Oklab {
    fn from(lch: Oklch) -> Self {
        lch.to_oklab()
    }
}

impl From<Oklab> for Oklch {
    fn from(lab: Oklab) -> Self {
        lab.to_oklch()
    }
}

/// OKLab → linear sRGB
///
/// Total: out-of-gamut results are returned as-is.
#[inline]
pub fn oklab_to_linear_srgb(lab: Oklab) -> LinearRgb {
    let [l_, m_, s_] = OKLAB_TO_LMS.multiply_vec(lab.to_array());
    let lms = [l_ * l_ * l_, m_ * m_ * m_, s_ * s_ * s_];
    LinearRgb::from_array(LMS_TO_LINEAR_SRGB.multiply_vec(lms))
}

/// Linear sRGB → OKLab
#[inline]
pub fn linear_srgb_to_oklab(rgb: LinearRgb) -> Oklab {
    let [l, m, s] = LINEAR_SRGB_TO_LMS.multiply_vec(rgb.to_array());
    let lms_ = [l.cbrt(), m.cbrt(), s.cbrt()];
    let [l, a, b] = LMS_TO_OKLAB.multiply_vec(lms_);
    Oklab::new(l, a, b)
}

/// (a, b) → (chroma, hue°)
///
/// Hue is normalized to [0, 360) and is 0 when chroma is 0.
#[inline]
pub fn oklab_to_oklch(a: f64, b: f64) -> (f64, f64) {
    let c = a.hypot(b);
    if c == 0.0 {
        return (0.0, 0.0);
    }
    (c, normalize_hue(b.atan2(a).to_degrees()))
}

/// (chroma, hue°) → (a, b)
#[inline]
pub fn oklch_to_oklab(c: f64, h: f64) -> (f64, f64) {
    let (sin, cos) = h.to_radians().sin_cos();
    (c * cos, c * sin)
}

/// Wrap an angle in degrees into [0, 360)
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Smallest absolute difference between two hues, in degrees
#[inline]
pub fn hue_distance(h1: f64, h2: f64) -> f64 {
    let d = (h1 - h2).rem_euclid(360.0);
    d.min(360.0 - d)
}
