//! ICC profile construction
//!
//! [`ProfileBuilder`] assembles synthetic matrix/TRC profiles byte by byte,
//! including deliberately broken ones. The `lcms2_*` helpers produce
//! profiles serialized by a reference CMS.

use lcms2::{CIExyY, CIExyYTRIPLE, Intent, PixelFormat, Profile, ToneCurve, Transform};
use oxpick_core::Matrix3x3;
use oxpick_core::math::chromatic_adaptation::D65_TO_D50_BRADFORD;
use oxpick_core::math::matrix::{DISPLAY_P3_TO_XYZ, SRGB_TO_XYZ};
use thiserror::Error;

/// Failures from the reference CMS
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("lcms2 profile: {0}")]
    Profile(String),

    #[error("lcms2 transform: {0}")]
    Transform(String),
}

/// Tag contents, encoded to the ICC byte layout by [`TagPayload::to_bytes`]
#[derive(Debug, Clone, PartialEq)]
pub enum TagPayload {
    /// `XYZ ` with one s15Fixed16 triple
    Xyz([f64; 3]),
    /// `curv` with no entries
    CurveIdentity,
    /// `curv` with a single u8Fixed8 gamma
    CurveGamma(f64),
    /// `curv` with sampled entries
    CurveTable(Vec<u16>),
    /// `para` with the given function number and parameters
    Para { function_type: u16, params: Vec<f64> },
    /// ICC v2 `desc`
    Desc(String),
    /// ICC v4 `mluc` with a single en-US record
    Mluc(String),
    /// Plain `text`
    Text(String),
    /// Bytes written as-is
    Raw(Vec<u8>),
}

impl TagPayload {
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            TagPayload::Xyz(xyz) => {
                let mut data = type_header(b"XYZ ");
                for v in xyz {
                    data.extend_from_slice(&s15_fixed16(*v));
                }
                data
            }
            TagPayload::CurveIdentity => {
                let mut data = type_header(b"curv");
                data.extend_from_slice(&0u32.to_be_bytes());
                data
            }
            TagPayload::CurveGamma(gamma) => {
                let mut data = type_header(b"curv");
                data.extend_from_slice(&1u32.to_be_bytes());
                data.extend_from_slice(&((gamma * 256.0).round() as u16).to_be_bytes());
                data
            }
            TagPayload::CurveTable(samples) => {
                let mut data = type_header(b"curv");
                data.extend_from_slice(&(samples.len() as u32).to_be_bytes());
                for s in samples {
                    data.extend_from_slice(&s.to_be_bytes());
                }
                data
            }
            TagPayload::Para {
                function_type,
                params,
            } => {
                let mut data = type_header(b"para");
                data.extend_from_slice(&function_type.to_be_bytes());
                data.extend_from_slice(&[0, 0]);
                for p in params {
                    data.extend_from_slice(&s15_fixed16(*p));
                }
                data
            }
            TagPayload::Desc(text) => {
                let mut data = type_header(b"desc");
                data.extend_from_slice(&(text.len() as u32 + 1).to_be_bytes());
                data.extend_from_slice(text.as_bytes());
                data.push(0);
                // Unicode language code and count, ScriptCode code, count and string
                data.extend_from_slice(&[0; 8]);
                data.extend_from_slice(&[0; 3 + 67]);
                data
            }
            TagPayload::Mluc(text) => {
                let utf16: Vec<u8> = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
                let mut data = type_header(b"mluc");
                data.extend_from_slice(&1u32.to_be_bytes());
                data.extend_from_slice(&12u32.to_be_bytes());
                data.extend_from_slice(b"enUS");
                data.extend_from_slice(&(utf16.len() as u32).to_be_bytes());
                data.extend_from_slice(&28u32.to_be_bytes());
                data.extend_from_slice(&utf16);
                data
            }
            TagPayload::Text(text) => {
                let mut data = type_header(b"text");
                data.extend_from_slice(text.as_bytes());
                data.push(0);
                data
            }
            TagPayload::Raw(bytes) => bytes.clone(),
        }
    }

    /// The sRGB curve as `para` function 3
    pub fn srgb_para() -> Self {
        TagPayload::Para {
            function_type: 3,
            params: vec![2.4, 1.0 / 1.055, 0.055 / 1.055, 1.0 / 12.92, 0.04045],
        }
    }
}

/// Synthetic profile: header, tag table and 4-byte aligned tag data
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    version: (u8, u8),
    device_class: [u8; 4],
    color_space: [u8; 4],
    signature: [u8; 4],
    tags: Vec<([u8; 4], TagPayload)>,
}

impl Default for ProfileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileBuilder {
    /// Empty v4.3 RGB display profile
    pub fn new() -> Self {
        Self {
            version: (4, 0x30),
            device_class: *b"mntr",
            color_space: *b"RGB ",
            signature: *b"acsp",
            tags: Vec::new(),
        }
    }

    /// Matrix/TRC profile with the given D50 colorants and one curve per channel
    pub fn matrix_trc(colorants: [[f64; 3]; 3], trc: [TagPayload; 3]) -> Self {
        let [r, g, b] = colorants;
        let [r_trc, g_trc, b_trc] = trc;
        Self::new()
            .tag(b"rXYZ", TagPayload::Xyz(r))
            .tag(b"gXYZ", TagPayload::Xyz(g))
            .tag(b"bXYZ", TagPayload::Xyz(b))
            .tag(b"rTRC", r_trc)
            .tag(b"gTRC", g_trc)
            .tag(b"bTRC", b_trc)
    }

    /// sRGB primaries with `trc` on every channel
    pub fn srgb(trc: TagPayload) -> Self {
        Self::matrix_trc(colorants_d50(&SRGB_TO_XYZ), [trc.clone(), trc.clone(), trc])
    }

    /// Display P3 primaries with `trc` on every channel
    pub fn display_p3(trc: TagPayload) -> Self {
        Self::matrix_trc(colorants_d50(&DISPLAY_P3_TO_XYZ), [trc.clone(), trc.clone(), trc])
    }

    pub fn version(mut self, major: u8, minor: u8) -> Self {
        self.version = (major, minor);
        self
    }

    pub fn color_space(mut self, sig: &[u8; 4]) -> Self {
        self.color_space = *sig;
        self
    }

    pub fn signature(mut self, sig: &[u8; 4]) -> Self {
        self.signature = *sig;
        self
    }

    /// Add a tag, replacing any existing tag with the same signature
    pub fn tag(mut self, sig: &[u8; 4], payload: TagPayload) -> Self {
        self.tags.retain(|(s, _)| s != sig);
        self.tags.push((*sig, payload));
        self
    }

    pub fn without(mut self, sig: &[u8; 4]) -> Self {
        self.tags.retain(|(s, _)| s != sig);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let table_end = 128 + 4 + 12 * self.tags.len();
        let mut table = Vec::with_capacity(12 * self.tags.len());
        let mut body = Vec::new();

        for (sig, payload) in &self.tags {
            let data = payload.to_bytes();
            table.extend_from_slice(sig);
            table.extend_from_slice(&((table_end + body.len()) as u32).to_be_bytes());
            table.extend_from_slice(&(data.len() as u32).to_be_bytes());
            body.extend_from_slice(&data);
            body.resize(body.len().next_multiple_of(4), 0);
        }

        let mut out = vec![0u8; 128];
        out[0..4].copy_from_slice(&((table_end + body.len()) as u32).to_be_bytes());
        out[8] = self.version.0;
        out[9] = self.version.1;
        out[12..16].copy_from_slice(&self.device_class);
        out[16..20].copy_from_slice(&self.color_space);
        out[20..24].copy_from_slice(b"XYZ ");
        out[36..40].copy_from_slice(&self.signature);
        out.extend_from_slice(&(self.tags.len() as u32).to_be_bytes());
        out.extend_from_slice(&table);
        out.extend_from_slice(&body);
        out
    }
}

/// Columns of a D65 RGB→XYZ matrix, adapted to D50, one per channel
pub fn colorants_d50(rgb_to_xyz: &Matrix3x3) -> [[f64; 3]; 3] {
    let m = D65_TO_D50_BRADFORD.multiply(rgb_to_xyz).m;
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

fn type_header(sig: &[u8; 4]) -> Vec<u8> {
    let mut data = sig.to_vec();
    data.extend_from_slice(&[0; 4]);
    data
}

fn s15_fixed16(v: f64) -> [u8; 4] {
    ((v * 65536.0).round() as i32).to_be_bytes()
}

// ============================================================================
// lcms2 reference profiles
// ============================================================================

pub const D65_XYY: CIExyY = CIExyY {
    x: 0.3127,
    y: 0.3290,
    Y: 1.0,
};

pub const SRGB_PRIMARIES: CIExyYTRIPLE = CIExyYTRIPLE {
    Red: CIExyY {
        x: 0.64,
        y: 0.33,
        Y: 1.0,
    },
    Green: CIExyY {
        x: 0.30,
        y: 0.60,
        Y: 1.0,
    },
    Blue: CIExyY {
        x: 0.15,
        y: 0.06,
        Y: 1.0,
    },
};

pub const DISPLAY_P3_PRIMARIES: CIExyYTRIPLE = CIExyYTRIPLE {
    Red: CIExyY {
        x: 0.680,
        y: 0.320,
        Y: 1.0,
    },
    Green: CIExyY {
        x: 0.265,
        y: 0.690,
        Y: 1.0,
    },
    Blue: CIExyY {
        x: 0.150,
        y: 0.060,
        Y: 1.0,
    },
};

/// lcms2's built-in sRGB, serialized
pub fn lcms2_srgb() -> Result<Vec<u8>, ProfileError> {
    Profile::new_srgb()
        .icc()
        .map_err(|e| ProfileError::Profile(e.to_string()))
}

/// D65 RGB profile with a pure gamma on every channel, serialized by lcms2
pub fn lcms2_rgb(primaries: &CIExyYTRIPLE, gamma: f64) -> Result<Vec<u8>, ProfileError> {
    let curve = ToneCurve::new(gamma);
    Profile::new_rgb(&D65_XYY, primaries, &[&curve, &curve, &curve])
        .and_then(|profile| profile.icc())
        .map_err(|e| ProfileError::Profile(e.to_string()))
}

/// Convert encoded RGB in `profile` to encoded sRGB with lcms2
pub fn lcms2_to_srgb(profile: &[u8], pixels: &[[f64; 3]]) -> Result<Vec<[f64; 3]>, ProfileError> {
    let src = Profile::new_icc(profile).map_err(|e| ProfileError::Profile(e.to_string()))?;
    let dst = Profile::new_srgb();

    let transform = Transform::<[f64; 3], [f64; 3]>::new(
        &src,
        PixelFormat::RGB_DBL,
        &dst,
        PixelFormat::RGB_DBL,
        Intent::RelativeColorimetric,
    )
    .map_err(|e| ProfileError::Transform(e.to_string()))?;

    let mut out = vec![[0.0; 3]; pixels.len()];
    transform.transform_pixels(pixels, &mut out);
    Ok(out)
}
