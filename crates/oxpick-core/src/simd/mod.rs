//! Slice conversions for picker planes and sliders
//!
//! A rendered plane is thousands of OKLab samples converted and classified
//! with the same working space. These loops are compiled per
//! instruction set by `multiversion` (AVX2 and SSE4.1 on x86-64, NEON on
//! ARM64) and the best one is picked at runtime. The `_interleaved` variants
//! view flat `f64` buffers as color slices without copying.

mod batch;

pub use batch::{
    gamut_mask_batch, linear_srgb_to_oklab_batch, linear_srgb_to_oklab_interleaved,
    oklab_to_linear_srgb_batch, oklab_to_linear_srgb_interleaved,
};
