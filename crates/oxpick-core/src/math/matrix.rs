//! Row-major 3x3 matrices
//!
//! Every primaries transform in the engine is one of these: the OKLab LMS
//! stages, sRGB to Display P3, imported ICC colorants and Bradford
//! adaptation.

use std::ops::{Index, Mul};

/// Determinant magnitude below which a matrix is treated as singular
pub const SINGULAR_EPSILON: f64 = 1e-15;

#[inline]
fn dot(a: [f64; 3], b: [f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(a: [f64; 3], b: [f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

/// `m[row][col]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    pub m: [[f64; 3]; 3],
}

impl Matrix3x3 {
    pub const IDENTITY: Self = Self::new([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    #[inline]
    pub const fn new(m: [[f64; 3]; 3]) -> Self {
        Self { m }
    }

    /// Matrix whose columns are `c0`, `c1`, `c2`
    ///
    /// ICC colorants are assembled this way, one primary per column.
    #[inline]
    pub const fn from_columns(c0: [f64; 3], c1: [f64; 3], c2: [f64; 3]) -> Self {
        Self::new([
            [c0[0], c1[0], c2[0]],
            [c0[1], c1[1], c2[1]],
            [c0[2], c1[2], c2[2]],
        ])
    }

    #[inline]
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        let [r0, r1, r2] = self.m;
        Self::from_columns(r0, r1, r2)
    }

    /// `self · v`
    #[inline]
    pub fn multiply_vec(&self, v: [f64; 3]) -> [f64; 3] {
        self.m.map(|row| dot(row, v))
    }

    /// `self · other`
    #[inline]
    pub fn multiply(&self, other: &Self) -> Self {
        let cols = other.transpose().m;
        Self::new(self.m.map(|row| cols.map(|col| dot(row, col))))
    }

    /// Scalar triple product of the rows
    #[inline]
    pub fn determinant(&self) -> f64 {
        let [r0, r1, r2] = self.m;
        dot(r0, cross(r1, r2))
    }

    /// Inverse, or `None` when the determinant is not finite or its
    /// magnitude is below [`SINGULAR_EPSILON`]
    ///
    /// The columns of the inverse are the pairwise cross products of the
    /// rows, divided by the determinant.
    pub fn inverse(&self) -> Option<Self> {
        let [r0, r1, r2] = self.m;
        let det = self.determinant();
        if !det.is_finite() || det.abs() < SINGULAR_EPSILON {
            return None;
        }
        let scale = |v: [f64; 3]| v.map(|x| x / det);
        Some(Self::from_columns(
            scale(cross(r1, r2)),
            scale(cross(r2, r0)),
            scale(cross(r0, r1)),
        ))
    }

    /// Elementwise comparison within `epsilon`
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.m
            .iter()
            .flatten()
            .zip(other.m.iter().flatten())
            .all(|(a, b)| (a - b).abs() <= epsilon)
    }

    pub fn is_identity(&self, epsilon: f64) -> bool {
        self.approx_eq(&Self::IDENTITY, epsilon)
    }
}

impl Index<usize> for Matrix3x3 {
    type Output = [f64; 3];

    fn index(&self, row: usize) -> &[f64; 3] {
        &self.m[row]
    }
}

impl Mul for Matrix3x3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<[f64; 3]> for Matrix3x3 {
    type Output = [f64; 3];

    fn mul(self, rhs: [f64; 3]) -> [f64; 3] {
        self.multiply_vec(rhs)
    }
}

// D65 primaries

/// Linear sRGB to XYZ, IEC 61966-2-1
pub const SRGB_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4124564, 0.3575761, 0.1804375],
    [0.2126729, 0.7151522, 0.0721750],
    [0.0193339, 0.1191920, 0.9503041],
]);

/// Inverse of [`SRGB_TO_XYZ`]
pub const XYZ_TO_SRGB: Matrix3x3 = Matrix3x3::new([
    [3.2404542, -1.5371385, -0.4985314],
    [-0.9692660, 1.8760108, 0.0415560],
    [0.0556434, -0.2040259, 1.0572252],
]);

/// Linear Display P3 to XYZ
pub const DISPLAY_P3_TO_XYZ: Matrix3x3 = Matrix3x3::new([
    [0.4865709, 0.2656677, 0.1982173],
    [0.2289746, 0.6917385, 0.0792869],
    [0.0000000, 0.0451134, 1.0439444],
]);

/// Linear sRGB to linear Display P3
///
/// Both share the D65 white; only the primaries change.
pub const LINEAR_SRGB_TO_LINEAR_P3: Matrix3x3 = Matrix3x3::new([
    [0.8224621, 0.1775380, 0.0000000],
    [0.0331941, 0.9668058, 0.0000000],
    [0.0170827, 0.0723974, 0.9105199],
]);

/// Inverse of [`LINEAR_SRGB_TO_LINEAR_P3`]
pub const LINEAR_P3_TO_LINEAR_SRGB: Matrix3x3 = Matrix3x3::new([
    [1.2249401, -0.2249404, 0.0000000],
    [-0.0420569, 1.0420571, 0.0000000],
    [-0.0196376, -0.0786361, 1.0982735],
]);
