//! Gamut Service
//!
//! Gamut tests and chroma reduction against a working space. Mapping holds
//! OKLCH lightness and hue fixed and bisects on chroma.
//!
//! The search assumes in-gamut-ness is monotonically non-increasing in
//! chroma at fixed lightness and hue. That holds for convex device gamuts.
//! For an imported profile with a non-convex effective gamut the result is
//! still in gamut but may not be the largest such chroma.

use tracing::trace;

use crate::color::oklab::{Oklab, oklch_to_oklab};
use crate::color::rgb::is_in_gamut_with;
use crate::options::GamutOptions;
use crate::space::WorkingColorSpace;

/// True if `lab` lies inside the working space's tolerant unit cube
#[inline]
pub fn is_in_working_gamut(space: &WorkingColorSpace, lab: Oklab) -> bool {
    is_in_working_gamut_with(space, lab, &GamutOptions::default())
}

/// [`is_in_working_gamut`] with explicit options
#[inline]
pub fn is_in_working_gamut_with(
    space: &WorkingColorSpace,
    lab: Oklab,
    options: &GamutOptions,
) -> bool {
    let rgb = space.oklab_to_device(lab);
    is_in_gamut_with(rgb.r, rgb.g, rgb.b, options.tolerance)
}

/// Largest in-gamut chroma in [0, `max_search`] at lightness `l` and `hue`
///
/// Returns `max_search` directly when it is already in gamut. Otherwise
/// bisects a fixed number of times and returns the last in-gamut bound,
/// which is 0 if nothing larger qualified.
pub fn find_max_in_gamut_chroma(
    space: &WorkingColorSpace,
    l: f64,
    hue: f64,
    max_search: f64,
) -> f64 {
    find_max_in_gamut_chroma_with(space, l, hue, max_search, &GamutOptions::default())
}

/// [`find_max_in_gamut_chroma`] with explicit options
pub fn find_max_in_gamut_chroma_with(
    space: &WorkingColorSpace,
    l: f64,
    hue: f64,
    max_search: f64,
    options: &GamutOptions,
) -> f64 {
    let fits = |chroma: f64| {
        let (a, b) = oklch_to_oklab(chroma, hue);
        is_in_working_gamut_with(space, Oklab::new(l, a, b), options)
    };

    if fits(max_search) {
        return max_search;
    }

    let mut lo = 0.0;
    let mut hi = max_search;
    for _ in 0..options.iterations {
        let mid = (lo + hi) / 2.0;
        if fits(mid) {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    trace!(l, hue, max_search, chroma = lo, "max in-gamut chroma");
    lo
}

/// Reduce chroma until `lab` fits the working space
///
/// In-gamut colors are returned unchanged. Otherwise lightness and hue are
/// kept and chroma is lowered to the largest in-gamut value found.
pub fn clamp_to_working_gamut(space: &WorkingColorSpace, lab: Oklab) -> Oklab {
    clamp_to_working_gamut_with(space, lab, &GamutOptions::default())
}

/// [`clamp_to_working_gamut`] with explicit options
///
/// The search ceiling is the color's own chroma, lowered to
/// `options.max_chroma` when that is set.
pub fn clamp_to_working_gamut_with(
    space: &WorkingColorSpace,
    lab: Oklab,
    options: &GamutOptions,
) -> Oklab {
    if is_in_working_gamut_with(space, lab, options) {
        return lab;
    }

    let lch = lab.to_oklch();
    let ceiling = options.max_chroma.map_or(lch.c, |cap| lch.c.min(cap));
    let chroma = find_max_in_gamut_chroma_with(space, lch.l, lch.h, ceiling, options);
    let (a, b) = oklch_to_oklab(chroma, lch.h);
    Oklab::new(lab.l, a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::oklab::{hue_distance, linear_srgb_to_oklab};
    use crate::color::rgb::LinearRgb;
    use crate::math::matrix::{Matrix3x3, XYZ_TO_SRGB};
    use crate::space::{ToneCurve, Trc};

    /// ITU-R BT.2020 primaries, wider than the ±0.4 a/b working range
    fn rec2020() -> WorkingColorSpace {
        const REC2020_TO_XYZ: Matrix3x3 = Matrix3x3::new([
            [0.6369580, 0.1446169, 0.1688810],
            [0.2627002, 0.6779981, 0.0593017],
            [0.0000000, 0.0280727, 1.0609851],
        ]);
        WorkingColorSpace::from_parts(
            "Rec. 2020",
            XYZ_TO_SRGB * REC2020_TO_XYZ,
            Trc::Uniform(ToneCurve::Srgb),
        )
        .unwrap()
    }

    #[test]
    fn test_primaries_in_gamut() {
        let srgb = WorkingColorSpace::srgb();
        for rgb in [
            LinearRgb::new(1.0, 0.0, 0.0),
            LinearRgb::new(0.0, 1.0, 0.0),
            LinearRgb::new(0.0, 0.0, 1.0),
            LinearRgb::new(1.0, 1.0, 1.0),
            LinearRgb::new(0.0, 0.0, 0.0),
        ] {
            assert!(is_in_working_gamut(&srgb, linear_srgb_to_oklab(rgb)), "{:?}", rgb);
        }
    }

    #[test]
    fn test_p3_is_wider() {
        let srgb = WorkingColorSpace::srgb();
        let p3 = WorkingColorSpace::display_p3();
        // Saturated green beyond sRGB, inside P3
        let lab = p3.device_to_oklab(LinearRgb::new(0.0, 1.0, 0.0));
        assert!(is_in_working_gamut(&p3, lab));
        assert!(!is_in_working_gamut(&srgb, lab));
    }

    #[test]
    fn test_find_max_short_circuit() {
        let srgb = WorkingColorSpace::srgb();
        assert_eq!(find_max_in_gamut_chroma(&srgb, 0.5, 30.0, 0.01), 0.01);
    }

    #[test]
    fn test_find_max_is_boundary() {
        let srgb = WorkingColorSpace::srgb();
        for hue in [0.0, 45.0, 140.0, 200.0, 265.0, 330.0] {
            let c = find_max_in_gamut_chroma(&srgb, 0.6, hue, 0.4);
            assert!(c > 0.0 && c < 0.4, "hue {}: {}", hue, c);

            let (a, b) = oklch_to_oklab(c, hue);
            assert!(is_in_working_gamut(&srgb, Oklab::new(0.6, a, b)));

            // A little more chroma leaves the gamut
            let (a, b) = oklch_to_oklab(c + 1e-3, hue);
            assert!(!is_in_working_gamut(&srgb, Oklab::new(0.6, a, b)), "hue {}", hue);
        }
    }

    #[test]
    fn test_find_max_lightness_out_of_range() {
        let srgb = WorkingColorSpace::srgb();
        assert_eq!(find_max_in_gamut_chroma(&srgb, 1.5, 90.0, 0.3), 0.0);
    }

    #[test]
    fn test_iterations_option() {
        let srgb = WorkingColorSpace::srgb();
        let coarse = GamutOptions::new().with_iterations(1);
        // One step: either half the range or nothing
        let c = find_max_in_gamut_chroma_with(&srgb, 0.6, 30.0, 0.4, &coarse);
        assert!(c == 0.0 || c == 0.2, "{}", c);
    }

    #[test]
    fn test_clamp_in_gamut_unchanged() {
        let srgb = WorkingColorSpace::srgb();
        let lab = Oklab::new(0.5, 0.05, -0.05);
        assert_eq!(clamp_to_working_gamut(&srgb, lab), lab);
    }

    #[test]
    fn test_clamp_preserves_lightness_and_hue() {
        let srgb = WorkingColorSpace::srgb();
        let lab = Oklab::new(0.7, 0.3, 0.3);
        assert!(!is_in_working_gamut(&srgb, lab));

        let clamped = clamp_to_working_gamut(&srgb, lab);
        assert_eq!(clamped.l, lab.l);
        assert!(is_in_working_gamut(&srgb, clamped));

        let before = lab.to_oklch();
        let after = clamped.to_oklch();
        assert!(after.c <= before.c);
        assert!(hue_distance(after.h, before.h) < 1e-9, "{} vs {}", after.h, before.h);
    }

    #[test]
    fn test_clamp_unreachable_lightness() {
        let srgb = WorkingColorSpace::srgb();
        let clamped = clamp_to_working_gamut(&srgb, Oklab::new(1.3, 0.1, 0.1));
        assert_eq!(clamped.l, 1.3);
        assert_eq!(clamped.chroma(), 0.0);
    }

    #[test]
    fn test_clamp_respects_ceiling() {
        let p3 = WorkingColorSpace::display_p3();
        let options = GamutOptions::new().with_max_chroma(0.05);
        let clamped = clamp_to_working_gamut_with(&p3, Oklab::new(0.6, 0.5, 0.0), &options);
        assert!((clamped.chroma() - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_finds_boundary_past_working_range() {
        let space = rec2020();
        // Bright green reaches well past 0.4 in Rec. 2020
        let boundary = find_max_in_gamut_chroma(&space, 0.8, 155.0, 1.0);
        assert!(boundary > 0.4, "{}", boundary);

        let (a, b) = oklch_to_oklab(boundary + 0.1, 155.0);
        let clamped = clamp_to_working_gamut(&space, Oklab::new(0.8, a, b));
        assert!(is_in_working_gamut(&space, clamped));
        assert!(
            (clamped.chroma() - boundary).abs() < 1e-5,
            "clamped to {}, boundary {}",
            clamped.chroma(),
            boundary
        );
    }
}
