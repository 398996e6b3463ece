use lensprofile_rs::prelude::*;

use approx::assert_relative_eq;

const M200: f64 = 1.0e15;
const C200: f64 = 4.0;

fn cosmo() -> Cosmology<f64> {
    Cosmology::new(0.27, 0.045, 0.7)
}

// ============================================================================
// Density Profiles
// ============================================================================

#[test]
fn test_density_profile() {
    let r = [0.05, 0.2, 1.0, 3.0];
    let rho = get_3d_density_profile(&r, M200, C200, &cosmo(), DEFAULT_DELTA, Nfw).unwrap();

    assert_eq!(rho.len(), 4);
    assert!(rho.iter().all(|&v| v > 0.0));
    assert!(rho.windows(2).all(|w| w[1] < w[0]));
}

#[test]
fn test_surface_and_excess_surface_density() {
    let r = [0.1, 0.5, 1.0, 2.0, 5.0];
    let sigma = calculate_surface_density(&r, M200, C200, &cosmo(), DEFAULT_DELTA, Nfw).unwrap();
    let delta_sigma =
        calculate_excess_surface_density(&r, M200, C200, &cosmo(), DEFAULT_DELTA, Nfw).unwrap();

    let expected_sigma = [855.0115, 225.8519, 93.7891, 32.5583, 6.5854];
    let expected_delta_sigma = [258.2810, 169.9298, 108.7795, 57.0757, 18.6753];
    for i in 0..r.len() {
        assert_relative_eq!(sigma[i], expected_sigma[i], max_relative = 1e-5);
        assert_relative_eq!(delta_sigma[i], expected_delta_sigma[i], max_relative = 1e-5);
    }
}

/// Test that a pre-normalized cosmology gives identical profiles.
#[test]
fn test_profiles_independent_of_normalization() {
    let r = [0.3, 1.0, 4.0];
    let raw = calculate_surface_density(&r, M200, C200, &cosmo(), 200, Nfw).unwrap();
    let normalized = calculate_surface_density(&r, M200, C200, &get_om(&cosmo()), 200, Nfw).unwrap();
    assert_eq!(raw, normalized);
}

/// Test that a larger overdensity gives a more compact halo.
#[test]
fn test_overdensity_definition() {
    let r = [0.05, 5.0];
    let sigma_200 = calculate_surface_density(&r, M200, C200, &cosmo(), 200, Nfw).unwrap();
    let sigma_500 = calculate_surface_density(&r, M200, C200, &cosmo(), 500, Nfw).unwrap();
    assert!(sigma_500[0] > 1.5 * sigma_200[0]);
    assert!(sigma_500[1] > sigma_200[1]);
}

/// Test ΔΣ at small radii, where it flattens to r_s δ_c ρ_m.
#[test]
fn test_excess_surface_density_small_radii() {
    let r = [1.0e-2, 1.0e-3, 1.0e-5, 1.0e-7];
    let delta_sigma =
        calculate_excess_surface_density(&r, M200, C200, &cosmo(), DEFAULT_DELTA, Nfw).unwrap();

    let expected = [274.924_803_98, 275.346_097_14, 275.353_039_87, 275.353_041_10];
    for i in 0..r.len() {
        assert_relative_eq!(delta_sigma[i], expected[i], max_relative = 1e-8);
    }
}

/// Test that single precision tracks double precision down to 1 kpc/h.
#[test]
fn test_excess_surface_density_single_precision() {
    let r64 = [1.0e-3, 1.0e-2, 0.1, 2.0];
    let r32: Vec<f32> = r64.iter().map(|&r| r as f32).collect();

    let ds64 =
        calculate_excess_surface_density(&r64, M200, C200, &cosmo(), DEFAULT_DELTA, Nfw).unwrap();
    let ds32 = calculate_excess_surface_density(
        &r32,
        1.0e15_f32,
        4.0,
        &Cosmology::new(0.27_f32, 0.045, 0.7),
        DEFAULT_DELTA,
        Nfw,
    )
    .unwrap();

    for i in 0..r64.len() {
        assert!(ds32[i] > 0.0);
        assert_relative_eq!(ds32[i] as f64, ds64[i], max_relative = 1e-4);
    }
}

// ============================================================================
// Critical Surface Density
// ============================================================================

#[test]
fn test_critical_surface_density_reference() {
    let sigma_crit = get_critical_surface_density(&cosmo(), 0.3, 1.0).unwrap();
    assert_relative_eq!(sigma_crit, 3135.1323, max_relative = 1e-6);
}

/// Test that Σ_crit falls as the source moves behind the lens.
#[test]
fn test_critical_surface_density_source_distance() {
    let near = get_critical_surface_density(&cosmo(), 0.3, 0.6).unwrap();
    let far = get_critical_surface_density(&cosmo(), 0.3, 2.0).unwrap();
    assert!(near > far);
    assert!(far > 0.0);
}

/// Test degenerate geometry: lens on the source plane or at the observer.
#[test]
fn test_critical_surface_density_degenerate() {
    let same_plane = get_critical_surface_density(&cosmo(), 0.5, 0.5).unwrap();
    assert!(same_plane.is_infinite() && same_plane > 0.0);

    let at_observer = get_critical_surface_density(&cosmo(), 0.0, 1.0).unwrap();
    assert!(at_observer.is_infinite() && at_observer > 0.0);

    let both_at_observer = get_critical_surface_density(&cosmo(), 0.0, 0.0).unwrap();
    assert!(both_at_observer.is_infinite() && both_at_observer > 0.0);
}

// ============================================================================
// Shear and Convergence
// ============================================================================

#[test]
fn test_tangential_shear_and_convergence() {
    let r = [0.1, 0.5, 1.0, 2.0, 5.0];
    let c = cosmo();

    let gamma_t =
        compute_tangential_shear_profile(&r, M200, C200, 0.3, 1.0, &c, 200, Nfw, SinglePlane)
            .unwrap();
    let kappa =
        compute_convergence_profile(&r, M200, C200, 0.3, 1.0, &c, 200, Nfw, SinglePlane).unwrap();

    let expected_gamma = [0.082383, 0.054202, 0.034697, 0.018205, 0.005957];
    let expected_kappa = [0.272719, 0.072039, 0.029916, 0.010385, 0.002101];
    for i in 0..r.len() {
        assert_relative_eq!(gamma_t[i], expected_gamma[i], max_relative = 1e-4);
        assert_relative_eq!(kappa[i], expected_kappa[i], max_relative = 1e-3);
    }
}

/// Test g_t = γ_t / (1 − κ) element-wise.
#[test]
fn test_reduced_shear_identity() {
    let r = [0.05, 0.2, 0.7, 2.5];
    let c = cosmo();

    let gamma_t =
        compute_tangential_shear_profile(&r, M200, C200, 0.4, 1.5, &c, 200, Nfw, SinglePlane)
            .unwrap();
    let kappa =
        compute_convergence_profile(&r, M200, C200, 0.4, 1.5, &c, 200, Nfw, SinglePlane).unwrap();
    let g_t = compute_reduced_tangential_shear_profile(
        &r,
        M200,
        C200,
        0.4,
        1.5,
        &c,
        200,
        Nfw,
        SinglePlane,
    )
    .unwrap();

    for i in 0..r.len() {
        assert_relative_eq!(g_t[i], gamma_t[i] / (1.0 - kappa[i]), max_relative = 1e-14);
        assert!(g_t[i] > gamma_t[i]);
    }
}

/// Test that a source on the lens plane sees no shear.
#[test]
fn test_shear_vanishes_on_lens_plane() {
    let r = [0.5, 1.0];
    let c = cosmo();
    let gamma_t =
        compute_tangential_shear_profile(&r, M200, C200, 0.5, 0.5, &c, 200, Nfw, SinglePlane)
            .unwrap();
    let g_t = compute_reduced_tangential_shear_profile(
        &r,
        M200,
        C200,
        0.5,
        0.5,
        &c,
        200,
        Nfw,
        SinglePlane,
    )
    .unwrap();
    assert!(gamma_t.iter().all(|&g| g == 0.0));
    assert!(g_t.iter().all(|&g| g == 0.0));
}

/// Test that a lens and source both at the observer give zero signal, not NaN.
#[test]
fn test_shear_vanishes_with_lens_and_source_at_observer() {
    let r = [0.5, 1.0];
    let c = cosmo();

    let gamma_t =
        compute_tangential_shear_profile(&r, M200, C200, 0.0, 0.0, &c, 200, Nfw, SinglePlane)
            .unwrap();
    let kappa =
        compute_convergence_profile(&r, M200, C200, 0.0, 0.0, &c, 200, Nfw, SinglePlane).unwrap();
    let g_t = compute_reduced_tangential_shear_profile(
        &r,
        M200,
        C200,
        0.0,
        0.0,
        &c,
        200,
        Nfw,
        SinglePlane,
    )
    .unwrap();

    assert_eq!(gamma_t, vec![0.0, 0.0]);
    assert_eq!(kappa, vec![0.0, 0.0]);
    assert_eq!(g_t, vec![0.0, 0.0]);
}

/// Test the reduced shear across κ = 1: infinite at the pole, sign flip past it.
#[cfg(feature = "dev")]
#[test]
fn test_reduced_shear_at_unit_convergence() {
    use lensprofile_rs::internals::engine::evaluator::reduced_shear;

    let g_t: Vec<f64> = reduced_shear(&[0.1, 0.1, 0.1], &[1.0, 1.5, 0.5]);

    assert!(g_t[0].is_infinite() && g_t[0] > 0.0);
    assert_relative_eq!(g_t[1], -0.2, max_relative = 1e-14);
    assert_relative_eq!(g_t[2], 0.2, max_relative = 1e-14);

    let g_t: Vec<f64> = reduced_shear(&[-0.1], &[1.0]);
    assert!(g_t[0].is_infinite() && g_t[0] < 0.0);
}

/// Test that unimplemented source models fail in every high-level evaluator.
#[test]
fn test_unimplemented_source_models() {
    let r = [0.5, 1.0];
    let c = cosmo();

    for (model, name) in [(KnownZSrc, "known_z_src"), (ZSrcDistribution, "z_src_distribution")] {
        let expected = Err(LensingError::UnimplementedSourceModel(name));
        assert_eq!(
            compute_tangential_shear_profile(&r, M200, C200, 0.3, 1.0, &c, 200, Nfw, model),
            expected
        );
        assert_eq!(
            compute_convergence_profile(&r, M200, C200, 0.3, 1.0, &c, 200, Nfw, model),
            expected
        );
        assert_eq!(
            compute_reduced_tangential_shear_profile(&r, M200, C200, 0.3, 1.0, &c, 200, Nfw, model),
            expected
        );

        // Checked before any input validation
        assert_eq!(
            compute_tangential_shear_profile(&[], M200, C200, 0.3, 1.0, &c, 200, Nfw, model),
            expected
        );
    }
}

#[test]
fn test_source_model_parsing() {
    assert_eq!("single_plane".parse::<SourceRedshiftModel>(), Ok(SinglePlane));
    assert_eq!("known_z_src".parse::<SourceRedshiftModel>(), Ok(KnownZSrc));
    assert_eq!(
        "z_src_distribution".parse::<SourceRedshiftModel>(),
        Ok(ZSrcDistribution)
    );
    assert_eq!(
        "photo_z".parse::<SourceRedshiftModel>(),
        Err(LensingError::UnknownSourceModel("photo_z".to_string()))
    );
    assert_eq!(SourceRedshiftModel::default(), SinglePlane);
}

// ============================================================================
// Input Validation
// ============================================================================

#[test]
fn test_invalid_inputs() {
    let c = cosmo();

    assert_eq!(
        calculate_surface_density(&[], M200, C200, &c, 200, Nfw),
        Err(LensingError::EmptyInput)
    );
    assert_eq!(
        calculate_surface_density(&[1.0, -0.5], M200, C200, &c, 200, Nfw),
        Err(LensingError::InvalidRadius {
            index: 1,
            value: -0.5
        })
    );
    assert!(matches!(
        calculate_surface_density(&[1.0, f64::NAN], M200, C200, &c, 200, Nfw),
        Err(LensingError::InvalidNumericValue(_))
    ));
    assert_eq!(
        get_3d_density_profile(&[1.0], 0.0, C200, &c, 200, Nfw),
        Err(LensingError::InvalidMass(0.0))
    );
    assert_eq!(
        get_3d_density_profile(&[1.0], M200, -1.0, &c, 200, Nfw),
        Err(LensingError::InvalidConcentration(-1.0))
    );
    assert_eq!(
        calculate_excess_surface_density(&[1.0], M200, C200, &c, 0, Nfw),
        Err(LensingError::InvalidOverdensity(0))
    );
    assert_eq!(
        get_critical_surface_density(&c, -0.1, 1.0),
        Err(LensingError::InvalidRedshift(-0.1))
    );
    assert!(matches!(
        get_critical_surface_density(&Cosmology::new(0.27, 0.045, 0.0), 0.3, 1.0),
        Err(LensingError::InvalidCosmology(_))
    ));
    assert!(matches!(
        calculate_surface_density(&[1.0], M200, C200, &Cosmology::new(0.0, 0.0, 0.7), 200, Nfw),
        Err(LensingError::InvalidCosmology(_))
    ));
}

/// Test that closed cosmologies are rejected only when E(a)² turns negative.
#[test]
fn test_closed_cosmology_expansion_history() {
    let recollapsing = Cosmology::new(0.27, 0.045, 0.7).omega_k(-2.0);
    assert!(matches!(
        get_critical_surface_density(&recollapsing, 0.3, 1.0),
        Err(LensingError::InvalidCosmology(_))
    ));
    assert!(matches!(
        calculate_surface_density(&[1.0], M200, C200, &recollapsing, 200, Nfw),
        Err(LensingError::InvalidCosmology(_))
    ));

    for omega_k in [-0.1, -0.5, -1.0] {
        let closed = Cosmology::new(0.27, 0.045, 0.7).omega_k(omega_k);
        let sigma_crit: f64 = get_critical_surface_density(&closed, 0.3, 1.0).unwrap();
        assert!(sigma_crit.is_finite() && sigma_crit > 0.0);
    }
}
