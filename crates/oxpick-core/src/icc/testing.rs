//! Synthetic ICC profile builder for unit tests
//!
//! Kept to what the parser and working-space unit tests need. The fuller
//! `oxpick_tests::profiles::ProfileBuilder` depends on this crate, so unit
//! tests here cannot reach it.

use super::header::PROFILE_SIGNATURE;
use crate::math::chromatic_adaptation::D65_TO_D50_BRADFORD;
use crate::math::matrix::SRGB_TO_XYZ;

/// Assembles a header, tag table and 4-byte aligned tag data
pub(crate) struct TestProfile {
    tags: Vec<([u8; 4], Vec<u8>)>,
    pub color_space: [u8; 4],
    pub signature: u32,
}

impl TestProfile {
    pub fn new() -> Self {
        Self {
            tags: Vec::new(),
            color_space: *b"RGB ",
            signature: PROFILE_SIGNATURE,
        }
    }

    /// Matrix/TRC profile with sRGB primaries and one curve on all channels
    pub fn srgb_primaries(trc: Vec<u8>) -> Self {
        let [r, g, b] = srgb_colorants_d50();
        Self::new()
            .tag(b"rXYZ", xyz_tag(r))
            .tag(b"gXYZ", xyz_tag(g))
            .tag(b"bXYZ", xyz_tag(b))
            .tag(b"rTRC", trc.clone())
            .tag(b"gTRC", trc.clone())
            .tag(b"bTRC", trc)
    }

    pub fn tag(mut self, sig: &[u8; 4], data: Vec<u8>) -> Self {
        self.tags.push((*sig, data));
        self
    }

    pub fn without(mut self, sig: &[u8; 4]) -> Self {
        self.tags.retain(|(s, _)| s != sig);
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let table_end = 132 + 12 * self.tags.len();
        let mut body = Vec::new();
        let mut table = Vec::new();
        for (sig, data) in &self.tags {
            let offset = table_end + body.len();
            table.extend_from_slice(sig);
            table.extend_from_slice(&(offset as u32).to_be_bytes());
            table.extend_from_slice(&(data.len() as u32).to_be_bytes());
            body.extend_from_slice(data);
            while body.len() % 4 != 0 {
                body.push(0);
            }
        }

        let total = table_end + body.len();
        let mut out = vec![0u8; 128];
        out[0..4].copy_from_slice(&(total as u32).to_be_bytes());
        out[8] = 4;
        out[9] = 0x30;
        out[12..16].copy_from_slice(b"mntr");
        out[16..20].copy_from_slice(&self.color_space);
        out[20..24].copy_from_slice(b"XYZ ");
        out[36..40].copy_from_slice(&self.signature.to_be_bytes());
        out.extend_from_slice(&(self.tags.len() as u32).to_be_bytes());
        out.extend_from_slice(&table);
        out.extend_from_slice(&body);
        out
    }
}

fn s15(v: f64) -> [u8; 4] {
    ((v * 65536.0).round() as i32).to_be_bytes()
}

/// sRGB primaries adapted to the D50 connection space, one per channel
pub(crate) fn srgb_colorants_d50() -> [[f64; 3]; 3] {
    let m = D65_TO_D50_BRADFORD.multiply(&SRGB_TO_XYZ);
    [
        [m.m[0][0], m.m[1][0], m.m[2][0]],
        [m.m[0][1], m.m[1][1], m.m[2][1]],
        [m.m[0][2], m.m[1][2], m.m[2][2]],
    ]
}

pub(crate) fn xyz_tag(xyz: [f64; 3]) -> Vec<u8> {
    let mut data = b"XYZ \0\0\0\0".to_vec();
    for v in xyz {
        data.extend_from_slice(&s15(v));
    }
    data
}

pub(crate) fn curv_gamma(gamma: f64) -> Vec<u8> {
    let mut data = b"curv\0\0\0\0".to_vec();
    data.extend_from_slice(&1u32.to_be_bytes());
    data.extend_from_slice(&((gamma * 256.0).round() as u16).to_be_bytes());
    data
}

pub(crate) fn curv_table(samples: &[u16]) -> Vec<u8> {
    let mut data = b"curv\0\0\0\0".to_vec();
    data.extend_from_slice(&(samples.len() as u32).to_be_bytes());
    for s in samples {
        data.extend_from_slice(&s.to_be_bytes());
    }
    data
}

pub(crate) fn para(function_type: u16, params: &[f64]) -> Vec<u8> {
    let mut data = b"para\0\0\0\0".to_vec();
    data.extend_from_slice(&function_type.to_be_bytes());
    data.extend_from_slice(&[0, 0]);
    for &p in params {
        data.extend_from_slice(&s15(p));
    }
    data
}

pub(crate) fn desc_tag(text: &str) -> Vec<u8> {
    let mut data = b"desc\0\0\0\0".to_vec();
    data.extend_from_slice(&(text.len() as u32 + 1).to_be_bytes());
    data.extend_from_slice(text.as_bytes());
    data.push(0);
    // Empty Unicode and ScriptCode parts
    data.extend_from_slice(&[0; 12]);
    data.extend_from_slice(&[0; 67]);
    data
}

pub(crate) fn mluc_tag(text: &str) -> Vec<u8> {
    let encoded: Vec<u8> = text.encode_utf16().flat_map(|c| c.to_be_bytes()).collect();
    let mut data = b"mluc\0\0\0\0".to_vec();
    data.extend_from_slice(&1u32.to_be_bytes());
    data.extend_from_slice(&12u32.to_be_bytes());
    data.extend_from_slice(b"enUS");
    data.extend_from_slice(&(encoded.len() as u32).to_be_bytes());
    data.extend_from_slice(&28u32.to_be_bytes());
    data.extend_from_slice(&encoded);
    data
}

pub(crate) fn text_tag(text: &str) -> Vec<u8> {
    let mut data = b"text\0\0\0\0".to_vec();
    data.extend_from_slice(text.as_bytes());
    data.push(0);
    data
}
