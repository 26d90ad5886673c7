//! Transfer functions
//!
//! The sRGB curve (IEC 61966-2-1), plain power laws and the ICC `para`
//! function types 0, 3 and 4. The sRGB pair is also the Display P3 curve.

/// Linear-light threshold of the sRGB encode function
pub const SRGB_LINEAR_THRESHOLD: f64 = 0.0031308;

/// Encoded-value threshold of the sRGB decode function
pub const SRGB_ENCODED_THRESHOLD: f64 = 0.04045;

/// sRGB gamma decode (encoded → linear)
///
/// Not clamped: values outside [0, 1] pass through the matching segment.
#[inline]
pub fn srgb_gamma_decode(encoded: f64) -> f64 {
    if encoded <= SRGB_ENCODED_THRESHOLD {
        encoded / 12.92
    } else {
        ((encoded + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB gamma encode (linear → encoded)
///
/// Not clamped; see [`linear_to_gamma`] for the clamping variant.
#[inline]
pub fn srgb_gamma_encode(linear: f64) -> f64 {
    if linear <= SRGB_LINEAR_THRESHOLD {
        linear * 12.92
    } else {
        1.055 * linear.powf(1.0 / 2.4) - 0.055
    }
}

/// Encode linear light with the sRGB curve after clamping to [0, 1]
#[inline]
pub fn linear_to_gamma(linear: f64) -> f64 {
    srgb_gamma_encode(linear.clamp(0.0, 1.0))
}

/// Decode an sRGB-encoded value to linear light, without clamping
#[inline]
pub fn gamma_to_linear(encoded: f64) -> f64 {
    srgb_gamma_decode(encoded)
}

/// Simple gamma power function (decode)
///
/// y = x^gamma
#[inline]
pub fn gamma_decode(encoded: f64, gamma: f64) -> f64 {
    if encoded <= 0.0 {
        0.0
    } else {
        encoded.powf(gamma)
    }
}

/// Simple gamma power function (encode)
///
/// y = x^(1/gamma); a zero gamma leaves the value untouched
#[inline]
pub fn gamma_encode(linear: f64, gamma: f64) -> f64 {
    if linear <= 0.0 {
        0.0
    } else if gamma == 0.0 {
        linear
    } else {
        linear.powf(1.0 / gamma)
    }
}

/// ICC parametric curve (`para` tag), restricted to the function types the
/// engine evaluates exactly
///
/// As defined in ICC.1:2022 Section 10.18. Function types other than 0, 3
/// and 4 are mapped to [`ParametricCurve::Gamma`] by the tag parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParametricCurve {
    /// Type 0: Y = X^g
    Gamma {
        /// Exponent
        g: f64,
    },
    /// Type 3: Y = (aX + b)^g if X >= d, else cX
    Piecewise {
        g: f64,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
    },
    /// Type 4: Y = (aX + b)^g + e if X >= d, else cX + f
    PiecewiseOffset {
        g: f64,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        e: f64,
        f: f64,
    },
}

impl ParametricCurve {
    /// Create a simple gamma curve (type 0)
    pub const fn gamma(g: f64) -> Self {
        Self::Gamma { g }
    }

    /// The sRGB transfer function as a type 3 curve
    pub fn srgb() -> Self {
        Self::Piecewise {
            g: 2.4,
            a: 1.0 / 1.055,
            b: 0.055 / 1.055,
            c: 1.0 / 12.92,
            d: SRGB_ENCODED_THRESHOLD,
        }
    }

    /// Build from an ICC function type and its parameters
    ///
    /// Returns the curve and whether the function type was one of 0, 3, 4.
    /// Any other type, or a parameter list too short for its type, becomes a
    /// pure gamma curve using the first parameter only.
    pub fn from_icc(function_type: u16, params: &[f64]) -> (Self, bool) {
        let g = params.first().copied().unwrap_or(1.0);
        match (function_type, params) {
            (0, _) => (Self::Gamma { g }, true),
            (3, &[g, a, b, c, d, ..]) => (Self::Piecewise { g, a, b, c, d }, true),
            (4, &[g, a, b, c, d, e, f, ..]) => (
                Self::PiecewiseOffset {
                    g,
                    a,
                    b,
                    c,
                    d,
                    e,
                    f,
                },
                true,
            ),
            _ => (Self::Gamma { g }, false),
        }
    }

    /// Evaluate the curve (encoded → linear)
    pub fn decode(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        match *self {
            Self::Gamma { g } => x.powf(g),
            Self::Piecewise { g, a, b, c, d } => {
                if x >= d {
                    (a * x + b).max(0.0).powf(g)
                } else {
                    c * x
                }
            }
            Self::PiecewiseOffset {
                g,
                a,
                b,
                c,
                d,
                e,
                f,
            } => {
                if x >= d {
                    (a * x + b).max(0.0).powf(g) + e
                } else {
                    c * x + f
                }
            }
        }
    }

    /// Evaluate the algebraic inverse (linear → encoded)
    ///
    /// The branch is chosen by comparing against the breakpoint expressed in
    /// output space (`c·d`, or `c·d + f` for type 4). When `c` is zero the
    /// linear segment carries no information and the power branch is taken.
    pub fn encode(&self, y: f64) -> f64 {
        let y = y.clamp(0.0, 1.0);
        let encoded = match *self {
            Self::Gamma { g } => gamma_encode(y, g),
            Self::Piecewise { g, a, b, c, d } => {
                if c != 0.0 && y < c * d {
                    y / c
                } else {
                    invert_power(y, g, a, b)
                }
            }
            Self::PiecewiseOffset {
                g,
                a,
                b,
                c,
                d,
                e,
                f,
            } => {
                if c != 0.0 && y < c * d + f {
                    (y - f) / c
                } else {
                    invert_power(y - e, g, a, b)
                }
            }
        };
        encoded.clamp(0.0, 1.0)
    }
}

/// Solve (aX + b)^g = y for X
#[inline]
fn invert_power(y: f64, g: f64, a: f64, b: f64) -> f64 {
    if a == 0.0 || g == 0.0 {
        return y;
    }
    (y.max(0.0).powf(1.0 / g) - b) / a
}
