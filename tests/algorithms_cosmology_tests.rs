#![cfg(feature = "dev")]

use lensprofile_rs::internals::algorithms::cosmology::{scale_factor, Cosmology};
use lensprofile_rs::internals::engine::evaluator::{
    comoving_angular_distance_aexp1_aexp2, get_om,
};
use lensprofile_rs::internals::primitives::constants::HUBBLE_DISTANCE;
use lensprofile_rs::internals::primitives::errors::LensingError;

use approx::assert_relative_eq;

fn planck_like() -> Cosmology<f64> {
    Cosmology::new(0.27, 0.045, 0.7)
}

// ============================================================================
// Parameters
// ============================================================================

/// Test that the matter density is derived from its components.
#[test]
fn test_get_om_derives_matter_density() {
    let cosmo = planck_like();
    let normalized = get_om(&cosmo);

    assert_eq!(normalized.derived_omega_m(), Some(0.27_f64 + 0.045));
    assert_eq!(normalized.omega_m(), 0.27_f64 + 0.045);

    // The caller's value is untouched
    assert_eq!(cosmo.derived_omega_m(), None);
    assert_eq!(cosmo.omega_c, 0.27);
}

/// Test that normalizing twice is the same as normalizing once.
#[test]
fn test_get_om_idempotent() {
    let once = get_om(&planck_like());
    let twice = get_om(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_omega_lambda_closes_budget() {
    let cosmo = Cosmology::new(0.25, 0.05, 0.7).omega_k(0.1).omega_r(1e-4);
    assert_relative_eq!(
        cosmo.omega_m() + cosmo.omega_k + cosmo.omega_r + cosmo.omega_lambda(),
        1.0,
        epsilon = 1e-15
    );
    // E(a = 1) = 1 for any budget that closes
    assert_relative_eq!(cosmo.hubble_ratio(1.0), 1.0, epsilon = 1e-14);
}

#[test]
fn test_from_params() {
    let cosmo = Cosmology::from_params([
        ("Omega_c", 0.27),
        ("Omega_b", 0.045),
        ("h", 0.7),
        ("Omega_m", 0.9),
        ("n_s", 0.96),
    ])
    .unwrap();
    assert_eq!(cosmo, planck_like());
    assert_eq!(cosmo.omega_m(), 0.27_f64 + 0.045);

    let curved = Cosmology::from_params([
        ("Omega_c", 0.25),
        ("Omega_b", 0.05),
        ("h", 0.7),
        ("Omega_k", -0.05),
    ])
    .unwrap();
    assert_eq!(curved.omega_k, -0.05);
    assert_eq!(curved.omega_r, 0.0);
}

#[test]
fn test_from_params_missing() {
    let result = Cosmology::from_params([("Omega_b", 0.045), ("h", 0.7)]);
    assert_eq!(
        result,
        Err(LensingError::MissingParameter("Omega_c".to_string()))
    );

    let result = Cosmology::from_params([("Omega_c", 0.27), ("Omega_b", 0.045)]);
    assert_eq!(result, Err(LensingError::MissingParameter("h".to_string())));
}

// ============================================================================
// Distances
// ============================================================================

/// Test comoving distances against a high-resolution reference integral.
#[test]
fn test_comoving_radial_distance_reference() {
    let cosmo = planck_like();
    assert_relative_eq!(
        cosmo.comoving_radial_distance(scale_factor(0.3)),
        833.363_453_6,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        cosmo.comoving_radial_distance(scale_factor(1.0)),
        2292.451_206,
        max_relative = 1e-8
    );
    assert_relative_eq!(
        cosmo.comoving_radial_distance(scale_factor(2.0)),
        3580.338_815,
        max_relative = 1e-8
    );
}

#[test]
fn test_comoving_distance_today_is_zero() {
    let cosmo = planck_like();
    assert_eq!(cosmo.comoving_radial_distance(1.0), 0.0);
    assert_eq!(cosmo.comoving_angular_distance(1.0), 0.0);
}

/// Test the Hubble-law limit at low redshift.
#[test]
fn test_low_redshift_hubble_law() {
    let cosmo = planck_like();
    let z = 1e-3;
    let chi = cosmo.comoving_radial_distance(scale_factor(z));
    assert_relative_eq!(chi, HUBBLE_DISTANCE * z, max_relative = 1e-3);
}

/// Test that in a flat universe distances between epochs are differences.
#[test]
fn test_flat_distance_between_epochs() {
    let cosmo = planck_like();
    let (a1, a2) = (scale_factor(0.3), scale_factor(1.2));

    let between = comoving_angular_distance_aexp1_aexp2(&cosmo, a1, a2).unwrap();
    let difference = cosmo.comoving_radial_distance(a2) - cosmo.comoving_radial_distance(a1);
    assert_relative_eq!(between, difference, max_relative = 1e-12);

    // Equal epochs and swapped order
    assert_eq!(comoving_angular_distance_aexp1_aexp2(&cosmo, a1, a1).unwrap(), 0.0);
    assert_relative_eq!(
        comoving_angular_distance_aexp1_aexp2(&cosmo, a2, a1).unwrap(),
        -between,
        max_relative = 1e-12
    );
}

#[test]
fn test_distance_between_epochs_rejects_bad_scale_factors() {
    let cosmo = planck_like();
    assert_eq!(
        comoving_angular_distance_aexp1_aexp2(&cosmo, 0.0, 0.5),
        Err(LensingError::InvalidScaleFactor(0.0))
    );
    assert_eq!(
        comoving_angular_distance_aexp1_aexp2(&cosmo, 0.5, -1.0),
        Err(LensingError::InvalidScaleFactor(-1.0))
    );
}

#[test]
fn test_angular_diameter_distances() {
    let cosmo = planck_like();
    let (a1, a2) = (scale_factor(0.3), scale_factor(1.0));

    assert_relative_eq!(
        cosmo.angular_diameter_distance(a2),
        a2 * cosmo.comoving_angular_distance(a2),
        max_relative = 1e-14
    );
    assert_relative_eq!(
        cosmo.angular_diameter_distance_between(a1, a2),
        a2 * cosmo.comoving_angular_distance_between(a1, a2),
        max_relative = 1e-14
    );
}

/// Test the S_k mapping for open and closed geometries.
#[test]
fn test_curved_transverse_distance() {
    let a = scale_factor(1.0);

    let open = Cosmology::new(0.25, 0.05, 0.7).omega_k(0.1);
    let chi = open.comoving_radial_distance(a);
    assert_relative_eq!(chi, 2246.848_590, max_relative = 1e-8);
    let sk = 0.1_f64.sqrt();
    assert_relative_eq!(
        open.comoving_angular_distance(a),
        HUBBLE_DISTANCE / sk * (sk * chi / HUBBLE_DISTANCE).sinh(),
        max_relative = 1e-12
    );
    assert!(open.comoving_angular_distance(a) > chi);

    let closed = Cosmology::new(0.25, 0.05, 0.7).omega_k(-0.1);
    let chi = closed.comoving_radial_distance(a);
    assert_relative_eq!(chi, 2386.255_914, max_relative = 1e-8);
    assert!(closed.comoving_angular_distance(a) < chi);
}

#[test]
fn test_scale_factor() {
    assert_eq!(scale_factor(0.0), 1.0);
    assert_eq!(scale_factor(1.0), 0.5);
    assert_relative_eq!(scale_factor(3.0_f32), 0.25_f32);
}
