//! Working Color Space
//!
//! A working space is the device RGB space colors are checked against and
//! encoded into. It is described by a pair of matrices to and from linear
//! sRGB plus its transfer functions. Three kinds exist: sRGB, Display P3,
//! and spaces imported from matrix/TRC ICC profiles.

use tracing::debug;

use super::trc::{Channel, ToneCurve, Trc};
use crate::color::oklab::{Oklab, linear_srgb_to_oklab, oklab_to_linear_srgb};
use crate::color::rgb::{LinearRgb, Rgb, Rgb8};
use crate::icc::{IccError, IccProfile, TagSignature};
use crate::math::matrix::{LINEAR_P3_TO_LINEAR_SRGB, LINEAR_SRGB_TO_LINEAR_P3, Matrix3x3};

/// Where a working space came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceKind {
    Srgb,
    DisplayP3,
    Icc,
}

/// An immutable working color space
#[derive(Debug, Clone, PartialEq)]
pub struct WorkingColorSpace {
    name: String,
    kind: SpaceKind,
    /// Device linear RGB → linear sRGB
    to_srgb: Matrix3x3,
    /// Linear sRGB → device linear RGB
    from_srgb: Matrix3x3,
    trc: Trc,
}

impl Default for WorkingColorSpace {
    fn default() -> Self {
        Self::srgb()
    }
}

impl WorkingColorSpace {
    /// sRGB: identity matrices and the shared sRGB curve
    pub fn srgb() -> Self {
        Self {
            name: "sRGB".to_string(),
            kind: SpaceKind::Srgb,
            to_srgb: Matrix3x3::identity(),
            from_srgb: Matrix3x3::identity(),
            trc: Trc::Uniform(ToneCurve::Srgb),
        }
    }

    /// Display P3: P3 primaries with the D65 white and the sRGB curve
    pub fn display_p3() -> Self {
        Self {
            name: "Display P3".to_string(),
            kind: SpaceKind::DisplayP3,
            to_srgb: LINEAR_P3_TO_LINEAR_SRGB,
            from_srgb: LINEAR_SRGB_TO_LINEAR_P3,
            trc: Trc::Uniform(ToneCurve::Srgb),
        }
    }

    /// The startup default: Display P3 on wide-gamut displays, else sRGB
    pub fn default_for_display(wide_gamut: bool) -> Self {
        if wide_gamut {
            Self::display_p3()
        } else {
            Self::srgb()
        }
    }

    /// Build from raw ICC profile bytes
    pub fn from_icc(bytes: &[u8]) -> Result<Self, IccError> {
        Self::from_icc_profile(&IccProfile::parse(bytes)?)
    }

    /// Build from a parsed matrix/TRC profile
    pub fn from_icc_profile(profile: &IccProfile) -> Result<Self, IccError> {
        let (to_srgb, from_srgb) = profile.srgb_matrices()?;
        let trc = Trc::PerChannel(
            [
                TagSignature::RED_TRC,
                TagSignature::GREEN_TRC,
                TagSignature::BLUE_TRC,
            ]
            .map(|sig| ToneCurve::from_tag(profile.get_tag(sig), sig)),
        );
        let name = profile.name();
        let white = profile.media_white_point().map(|w| w.chromaticity());
        debug!(name = %name, ?white, "built working space from ICC profile");

        Ok(Self {
            name,
            kind: SpaceKind::Icc,
            to_srgb,
            from_srgb,
            trc,
        })
    }

    /// Custom space from explicit parts
    ///
    /// Fails if `to_srgb` cannot be inverted.
    pub fn from_parts(
        name: impl Into<String>,
        to_srgb: Matrix3x3,
        trc: Trc,
    ) -> Result<Self, IccError> {
        let from_srgb = to_srgb.inverse().ok_or(IccError::SingularMatrix {
            determinant: to_srgb.determinant(),
        })?;
        Ok(Self {
            name: name.into(),
            kind: SpaceKind::Icc,
            to_srgb,
            from_srgb,
            trc,
        })
    }

    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> SpaceKind {
        self.kind
    }

    /// True if R, G and B have independent transfer functions
    pub fn is_per_channel(&self) -> bool {
        self.trc.is_per_channel()
    }

    /// Transfer functions
    pub fn trc(&self) -> &Trc {
        &self.trc
    }

    /// Device linear RGB → linear sRGB matrix
    pub fn to_linear_srgb_matrix(&self) -> &Matrix3x3 {
        &self.to_srgb
    }

    /// Linear sRGB → device linear RGB matrix
    pub fn from_linear_srgb_matrix(&self) -> &Matrix3x3 {
        &self.from_srgb
    }

    /// Device linear RGB → linear sRGB
    #[inline]
    pub fn to_linear_srgb(&self, rgb: LinearRgb) -> LinearRgb {
        LinearRgb::from_array(self.to_srgb.multiply_vec(rgb.to_array()))
    }

    /// Linear sRGB → device linear RGB
    #[inline]
    pub fn from_linear_srgb(&self, rgb: LinearRgb) -> LinearRgb {
        LinearRgb::from_array(self.from_srgb.multiply_vec(rgb.to_array()))
    }

    /// Decode one encoded channel value to linear light
    #[inline]
    pub fn decode(&self, channel: Channel, v: f64) -> f64 {
        self.trc.decode(channel, v)
    }

    /// Encode one linear channel value
    #[inline]
    pub fn encode(&self, channel: Channel, v: f64) -> f64 {
        self.trc.encode(channel, v)
    }

    /// Decode an encoded device triple
    pub fn decode_rgb(&self, rgb: Rgb) -> LinearRgb {
        LinearRgb::new(
            self.decode(Channel::Red, rgb.r),
            self.decode(Channel::Green, rgb.g),
            self.decode(Channel::Blue, rgb.b),
        )
    }

    /// Encode a linear device triple
    pub fn encode_rgb(&self, rgb: LinearRgb) -> Rgb {
        Rgb::new(
            self.encode(Channel::Red, rgb.r),
            self.encode(Channel::Green, rgb.g),
            self.encode(Channel::Blue, rgb.b),
        )
    }

    /// OKLab → device linear RGB (unclamped)
    #[inline]
    pub fn oklab_to_device(&self, lab: Oklab) -> LinearRgb {
        self.from_linear_srgb(oklab_to_linear_srgb(lab))
    }

    /// Device linear RGB → OKLab
    #[inline]
    pub fn device_to_oklab(&self, rgb: LinearRgb) -> Oklab {
        linear_srgb_to_oklab(self.to_linear_srgb(rgb))
    }

    /// Encoded device color for an OKLab value, clamped into the cube
    pub fn oklab_to_rgb8(&self, lab: Oklab) -> Rgb8 {
        self.encode_rgb(self.oklab_to_device(lab)).to_rgb8()
    }

    /// `#rrggbb` of an OKLab value in this space
    pub fn oklab_to_hex(&self, lab: Oklab) -> String {
        self.oklab_to_rgb8(lab).to_hex()
    }

    /// OKLab of an `#rrggbb` device color; `None` on malformed input
    pub fn hex_to_oklab(&self, hex: &str) -> Option<Oklab> {
        let rgb = Rgb8::from_hex(hex)?.to_unit();
        Some(self.device_to_oklab(self.decode_rgb(rgb)))
    }
}
