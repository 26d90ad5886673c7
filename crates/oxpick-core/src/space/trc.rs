//! Tone Response Curves
//!
//! A [`ToneCurve`] maps encoded channel values to linear light (`decode`)
//! and back (`encode`). A working space carries either one curve shared by
//! all channels or one curve per channel, see [`Trc`].

use tracing::{debug, warn};

use crate::icc::{CurveData, TagData, TagSignature, TypeSignature};
use crate::math::gamma::{
    ParametricCurve, gamma_decode, gamma_encode, gamma_to_linear, linear_to_gamma,
};
use crate::math::interpolation::{INVERSE_LUT_SIZE, build_inverse_lut, lut1d_interp};

/// RGB channel selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Channels in R, G, B order
    pub const ALL: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Channel for index 0/1/2
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Index 0/1/2
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A single tone response curve
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ToneCurve {
    /// IEC 61966-2-1 sRGB curve; also stands in for unreadable curves
    #[default]
    Srgb,
    /// Linear
    Identity,
    /// Pure power law
    Gamma(f64),
    /// Sampled curve with its precomputed inverse
    Table { forward: Vec<f64>, inverse: Vec<f64> },
    /// ICC parametric function
    Parametric(ParametricCurve),
}

impl ToneCurve {
    /// Sampled curve from 16-bit samples
    ///
    /// Fewer than two samples cannot describe a curve and yield identity.
    pub fn table(samples: &[u16]) -> Self {
        if samples.len() < 2 {
            return ToneCurve::Identity;
        }
        let forward: Vec<f64> = samples.iter().map(|&v| v as f64 / 65535.0).collect();
        let inverse = build_inverse_lut(&forward, INVERSE_LUT_SIZE);
        ToneCurve::Table { forward, inverse }
    }

    /// Create from `curv` tag data
    pub fn from_curve_data(curve: &CurveData) -> Self {
        match curve {
            CurveData::Identity => ToneCurve::Identity,
            CurveData::Gamma(g) => ToneCurve::Gamma(*g),
            CurveData::Table(samples) => ToneCurve::table(samples),
        }
    }

    /// Create from an optional TRC tag
    ///
    /// An absent tag, an unknown tag type or an unreadable payload all
    /// yield [`ToneCurve::Srgb`].
    pub fn from_tag(tag: Option<&TagData>, sig: TagSignature) -> Self {
        let curve = match tag {
            None => {
                debug!(tag = %sig, "TRC tag absent, using sRGB curve");
                ToneCurve::Srgb
            }
            Some(TagData::Curve(curve)) => ToneCurve::from_curve_data(curve),
            Some(TagData::ParametricCurve(para)) => {
                if !para.exact {
                    warn!(
                        tag = %sig,
                        function_type = para.function_type,
                        "unsupported parametric function, using pure gamma"
                    );
                }
                ToneCurve::Parametric(para.curve)
            }
            Some(other) => {
                warn!(
                    tag = %sig,
                    type_sig = %TypeSignature(other.type_signature()),
                    "unsupported TRC type, using sRGB curve"
                );
                ToneCurve::Srgb
            }
        };
        debug!(tag = %sig, kind = curve.kind(), "parsed TRC");
        curve
    }

    /// Short name of the curve kind
    pub fn kind(&self) -> &'static str {
        match self {
            ToneCurve::Srgb => "srgb",
            ToneCurve::Identity => "identity",
            ToneCurve::Gamma(_) => "gamma",
            ToneCurve::Table { .. } => "table",
            ToneCurve::Parametric(_) => "parametric",
        }
    }

    /// Encoded → linear
    ///
    /// The sRGB curve is not clamped; every other kind clamps its input to
    /// [0, 1].
    pub fn decode(&self, x: f64) -> f64 {
        match self {
            ToneCurve::Srgb => gamma_to_linear(x),
            ToneCurve::Identity => x.clamp(0.0, 1.0),
            ToneCurve::Gamma(g) => gamma_decode(x.clamp(0.0, 1.0), *g),
            ToneCurve::Table { forward, .. } => lut1d_interp(forward, x),
            ToneCurve::Parametric(curve) => curve.decode(x),
        }
    }

    /// Linear → encoded, input clamped to [0, 1]
    pub fn encode(&self, y: f64) -> f64 {
        match self {
            ToneCurve::Srgb => linear_to_gamma(y),
            ToneCurve::Identity => y.clamp(0.0, 1.0),
            ToneCurve::Gamma(g) => gamma_encode(y.clamp(0.0, 1.0), *g),
            ToneCurve::Table { inverse, .. } => lut1d_interp(inverse, y),
            ToneCurve::Parametric(curve) => curve.encode(y),
        }
    }
}

/// Transfer functions of a working space
#[derive(Debug, Clone, PartialEq)]
pub enum Trc {
    /// One curve for all channels
    Uniform(ToneCurve),
    /// Independent curves for R, G and B
    PerChannel([ToneCurve; 3]),
}

impl Trc {
    /// Curve applied to `channel`
    #[inline]
    pub fn curve(&self, channel: Channel) -> &ToneCurve {
        match self {
            Trc::Uniform(curve) => curve,
            Trc::PerChannel(curves) => &curves[channel.index()],
        }
    }

    #[inline]
    pub fn decode(&self, channel: Channel, x: f64) -> f64 {
        self.curve(channel).decode(x)
    }

    #[inline]
    pub fn encode(&self, channel: Channel, y: f64) -> f64 {
        self.curve(channel).encode(y)
    }

    pub fn is_per_channel(&self) -> bool {
        matches!(self, Trc::PerChannel(_))
    }
}
