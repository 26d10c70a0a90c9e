use std::f64::consts::{PI, TAU};

use approx::assert_relative_eq;
use proptest::prelude::*;
use units::Length;

use crate::orbit::{clamp_eccentricity, OrbitGeometry, MAX_ECCENTRICITY, ORBIT_PATH_SEGMENTS};

#[test]
fn circular_orbit_has_constant_radius() {
    let orbit = OrbitGeometry::circular(Length::from_au(1.0));

    for i in 0..16 {
        let phase = i as f64 * TAU / 16.0;
        assert_relative_eq!(orbit.radius_at_phase(phase).to_au(), 1.0);
    }

    let start = orbit.position_at_phase(0.0);
    assert_eq!((start.x, start.y, start.z), (1.0, 0.0, 0.0));

    let quarter = orbit.position_at_phase(PI / 2.0);
    assert_relative_eq!(quarter.x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(quarter.z, 1.0);
}

#[test]
fn eccentric_orbit_extremes() {
    let orbit = OrbitGeometry::new(Length::from_au(2.0), 0.5);

    assert_relative_eq!(orbit.periapsis().to_au(), 1.0);
    assert_relative_eq!(orbit.apoapsis().to_au(), 3.0);
    assert_relative_eq!(orbit.semi_latus_rectum().to_au(), 1.5);

    // Periapsis at t = 0, apoapsis at t = π
    assert_relative_eq!(orbit.radius_at_phase(0.0).to_au(), 1.0);
    assert_relative_eq!(orbit.radius_at_phase(PI).to_au(), 3.0, epsilon = 1e-12);

    let apo = orbit.position_at_phase(PI);
    assert_relative_eq!(apo.x, -3.0, epsilon = 1e-12);
    assert_relative_eq!(apo.z, 0.0, epsilon = 1e-12);
}

#[test]
fn eccentricity_is_clamped() {
    assert_eq!(clamp_eccentricity(1.5), MAX_ECCENTRICITY);
    assert_eq!(clamp_eccentricity(-0.2), 0.0);
    assert_eq!(clamp_eccentricity(f64::NAN), 0.0);
    assert_eq!(clamp_eccentricity(0.3), 0.3);

    let orbit = OrbitGeometry::new(Length::from_au(1.0), 1.0);
    assert_eq!(orbit.eccentricity(), MAX_ECCENTRICITY);
}

#[test]
fn path_is_closed_with_one_extra_point() {
    let orbit = OrbitGeometry::new(Length::from_au(1.3), 0.2);
    let path = orbit.path(ORBIT_PATH_SEGMENTS);

    assert_eq!(path.len(), 65);
    let first = path[0];
    let last = path[64];
    assert_relative_eq!(first.x, last.x, epsilon = 1e-12);
    assert_relative_eq!(first.z, last.z, epsilon = 1e-12);
    assert!(path.iter().all(|p| p.y == 0.0));

    // Each point matches a direct evaluation at its phase
    let tenth = orbit.position_at_phase(TAU * 10.0 / 64.0);
    assert_relative_eq!(path[10].x, tenth.x);
    assert_relative_eq!(path[10].z, tenth.z);
}

#[test]
fn zero_segment_path_still_has_two_points() {
    let orbit = OrbitGeometry::circular(Length::from_au(1.0));
    assert_eq!(orbit.path(0).len(), 2);
}

proptest! {
    #[test]
    fn prop_position_is_planar_and_off_origin(
        a in 0.01f64..100.0,
        e in 0.0f64..=0.99,
        phase in -1.0e4f64..1.0e4,
    ) {
        let orbit = OrbitGeometry::new(Length::from_au(a), e);
        let p = orbit.position_at_phase(phase);
        prop_assert_eq!(p.y, 0.0);
        prop_assert!((p.x * p.x + p.z * p.z).sqrt() > 0.0);
    }

    #[test]
    fn prop_radius_between_periapsis_and_apoapsis(
        a in 0.01f64..100.0,
        e in 0.0f64..=0.99,
        phase in 0.0f64..TAU,
    ) {
        let orbit = OrbitGeometry::new(Length::from_au(a), e);
        let r = orbit.radius_at_phase(phase).to_au();
        let tolerance = 1e-9 * a;
        prop_assert!(r >= orbit.periapsis().to_au() - tolerance);
        prop_assert!(r <= orbit.apoapsis().to_au() + tolerance);
    }

    #[test]
    fn prop_position_is_periodic(
        e in 0.0f64..=0.99,
        phase in 0.0f64..TAU,
    ) {
        let orbit = OrbitGeometry::new(Length::from_au(1.0), e);
        let p = orbit.position_at_phase(phase);
        let q = orbit.position_at_phase(phase + TAU);
        prop_assert!((p.x - q.x).abs() < 1e-6);
        prop_assert!((p.z - q.z).abs() < 1e-6);
    }
}
