//! Bradford chromatic adaptation
//!
//! ICC colorants live in the D50 connection space; everything the engine
//! computes with is D65. The fixed matrices below are what the import path
//! uses. [`bradford`] derives the same transform for arbitrary whites.

use crate::color::Xyz;
use crate::math::Matrix3x3;

/// XYZ to Bradford cone response
const CONE_RESPONSE: Matrix3x3 = Matrix3x3::new([
    [0.8951, 0.2664, -0.1614],
    [-0.7502, 1.7135, 0.0367],
    [0.0389, -0.0685, 1.0296],
]);

/// Cone response back to XYZ
const CONE_RESPONSE_INV: Matrix3x3 = Matrix3x3::new([
    [0.9869929, -0.1470543, 0.1599627],
    [0.4323053, 0.5183603, 0.0492912],
    [-0.0085287, 0.0400428, 0.9684867],
]);

/// Applied to imported colorants before the XYZ to sRGB matrix
pub const D50_TO_D65_BRADFORD: Matrix3x3 = Matrix3x3::new([
    [0.9555766, -0.0230393, 0.0631636],
    [-0.0282895, 1.0099416, 0.0210077],
    [0.0122982, -0.0204830, 1.3299098],
]);

/// Inverse of [`D50_TO_D65_BRADFORD`]
pub const D65_TO_D50_BRADFORD: Matrix3x3 = Matrix3x3::new([
    [1.0478112, 0.0228866, -0.0501270],
    [0.0295424, 0.9904844, -0.0170491],
    [-0.0092345, 0.0150436, 0.7521316],
]);

/// Adaptation taking colors seen under `from` to colors seen under `to`
///
/// Each cone channel is scaled by the ratio of the two whites' responses.
/// A zero source response leaves that channel unscaled.
pub fn bradford(from: Xyz, to: Xyz) -> Matrix3x3 {
    let src = CONE_RESPONSE * from.to_array();
    let dst = CONE_RESPONSE * to.to_array();
    let gain = |i: usize| if src[i].abs() > 1e-10 { dst[i] / src[i] } else { 1.0 };
    let diagonal = Matrix3x3::new([
        [gain(0), 0.0, 0.0],
        [0.0, gain(1), 0.0],
        [0.0, 0.0, gain(2)],
    ]);
    CONE_RESPONSE_INV * diagonal * CONE_RESPONSE
}

/// Move a single XYZ value between whites
pub fn adapt_xyz(xyz: Xyz, from: Xyz, to: Xyz) -> Xyz {
    Xyz::from(bradford(from, to) * xyz.to_array())
}
