//! Parity tests against lcms2
//!
//! Profiles serialized by lcms2 are imported as working spaces and their
//! conversions compared with lcms2 transforms of the same profile. lcms2
//! stores colorants as s15Fixed16 and derives them with its own primaries
//! math, so matrices agree to about 1e-4.

use oxpick_core::icc::IccProfile;
use oxpick_core::math::{linear_to_gamma, srgb_gamma_decode};
use oxpick_core::{Channel, Oklab, Rgb, WorkingColorSpace};
use oxpick_tests::Sampler;
use oxpick_tests::profiles::{
    DISPLAY_P3_PRIMARIES, SRGB_PRIMARIES, lcms2_rgb, lcms2_srgb, lcms2_to_srgb,
};

/// Matrix agreement with an identity or built-in matrix
const MATRIX_TOLERANCE: f64 = 2e-3;

/// Encoded sRGB agreement with an lcms2 float transform
const TRANSFORM_TOLERANCE: f64 = 5e-3;

#[test]
fn test_lcms2_srgb_profile() -> anyhow::Result<()> {
    let bytes = lcms2_srgb()?;
    let profile = IccProfile::parse(&bytes)?;

    assert!(profile.is_matrix_shaper());
    assert!(!profile.is_lut_based());
    assert!(profile.name().contains("sRGB"), "name: {}", profile.name());
    assert!(profile.skipped_tags().is_empty(), "{:?}", profile.skipped_tags());

    let wtpt = profile.media_white_point().expect("lcms2 writes wtpt");
    assert!((wtpt.y - 1.0).abs() < 1e-3, "{:?}", wtpt);

    let space = WorkingColorSpace::from_icc_profile(&profile)?;
    assert!(space.is_per_channel());
    assert!(
        space.to_linear_srgb_matrix().is_identity(MATRIX_TOLERANCE),
        "{:?}",
        space.to_linear_srgb_matrix()
    );

    for i in 0..=100 {
        let x = i as f64 / 100.0;
        for channel in Channel::ALL {
            let ours = space.decode(channel, x);
            let expected = srgb_gamma_decode(x);
            assert!(
                (ours - expected).abs() < 1e-4,
                "{:?} decode {}: {} vs {}",
                channel,
                x,
                ours,
                expected
            );
        }
    }
    Ok(())
}

#[test]
fn test_lcms2_gamma_profile() -> anyhow::Result<()> {
    let bytes = lcms2_rgb(&SRGB_PRIMARIES, 2.2)?;
    let space = WorkingColorSpace::from_icc(&bytes)?;

    assert!(space.to_linear_srgb_matrix().is_identity(MATRIX_TOLERANCE));
    assert!(space.from_linear_srgb_matrix().is_identity(MATRIX_TOLERANCE));

    for channel in Channel::ALL {
        let decoded = space.decode(channel, 0.5);
        assert!((decoded - 0.5f64.powf(2.2)).abs() < 1e-3, "{}", decoded);

        let back = space.decode(channel, space.encode(channel, 0.5));
        assert!((back - 0.5).abs() < 1e-6, "{}", back);
    }
    Ok(())
}

#[test]
fn test_lcms2_display_p3_matrix() -> anyhow::Result<()> {
    let bytes = lcms2_rgb(&DISPLAY_P3_PRIMARIES, 2.2)?;
    let imported = WorkingColorSpace::from_icc(&bytes)?;
    let builtin = WorkingColorSpace::display_p3();

    assert!(
        imported
            .to_linear_srgb_matrix()
            .approx_eq(builtin.to_linear_srgb_matrix(), MATRIX_TOLERANCE),
        "imported {:?}\nbuilt-in {:?}",
        imported.to_linear_srgb_matrix(),
        builtin.to_linear_srgb_matrix()
    );
    Ok(())
}

/// Encoded P3 → encoded sRGB through oxpick and through lcms2
#[test]
fn test_lcms2_transform_parity() -> anyhow::Result<()> {
    let bytes = lcms2_rgb(&DISPLAY_P3_PRIMARIES, 2.2)?;
    let space = WorkingColorSpace::from_icc(&bytes)?;

    let mut sampler = Sampler::new(2024);
    let pixels: Vec<[f64; 3]> = (0..5000)
        .map(|_| [sampler.unit(), sampler.unit(), sampler.unit()])
        .collect();
    let reference = lcms2_to_srgb(&bytes, &pixels)?;

    let mut compared = 0;
    let mut max_diff: f64 = 0.0;
    for (pixel, theirs) in pixels.iter().zip(&reference) {
        let linear = space.to_linear_srgb(space.decode_rgb(Rgb::from_array(*pixel)));
        // Colors lcms2 would clip are not comparable
        if !linear.to_array().iter().all(|v| (0.001..=0.999).contains(v)) {
            continue;
        }
        compared += 1;

        let ours = linear.to_array().map(linear_to_gamma);
        for c in 0..3 {
            let diff = (ours[c] - theirs[c]).abs();
            max_diff = max_diff.max(diff);
            assert!(
                diff < TRANSFORM_TOLERANCE,
                "{:?}: oxpick={:?}, lcms2={:?}",
                pixel,
                ours,
                theirs
            );
        }
    }

    eprintln!("P3 -> sRGB: {} pixels compared, max diff {:.2e}", compared, max_diff);
    assert!(compared > 500, "only {} comparable pixels", compared);
    Ok(())
}

/// Hex output through the imported lcms2 sRGB matches the built-in sRGB
#[test]
fn test_lcms2_srgb_hex_agreement() -> anyhow::Result<()> {
    let imported = WorkingColorSpace::from_icc(&lcms2_srgb()?)?;
    let builtin = WorkingColorSpace::srgb();

    let mut sampler = Sampler::new(5);
    for _ in 0..2000 {
        let lab: Oklab = sampler.oklab();
        let a = imported.oklab_to_rgb8(lab);
        let b = builtin.oklab_to_rgb8(lab);
        for (x, y) in [(a.r, b.r), (a.g, b.g), (a.b, b.b)] {
            assert!(x.abs_diff(y) <= 1, "{:?}: {:?} vs {:?}", lab, a, b);
        }
    }
    Ok(())
}
