use approx::assert_relative_eq;
use serde_json::json;

use goldilocks::{HabitableZoneStatus, RawRecord, SimulationConfig, DEFAULT_PHASE_STEP};

use crate::session::Sessions;

fn record(semi_major_axis: f64) -> RawRecord {
    [
        ("pl_name", json!("b")),
        ("pl_orbsmax", json!(semi_major_axis)),
        ("pl_orbper", json!(100.0)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn sessions_get_distinct_ids() {
    let mut sessions = Sessions::default();
    let a = sessions.create(&record(1.0));
    let b = sessions.create(&record(0.3));

    assert_ne!(a, b);
    assert_eq!(sessions.len(), 2);
    assert_eq!(
        sessions.get(b).unwrap().parameters().habitable_zone_status,
        HabitableZoneStatus::TooClose
    );
}

#[test]
fn sessions_advance_independently() {
    let mut sessions = Sessions::default();
    let a = sessions.create(&record(1.0));
    let b = sessions.create(&record(1.0));

    sessions.advance(a, 0.5).unwrap();
    sessions.tick(b).unwrap();

    assert_eq!(sessions.get(a).unwrap().phase(), 0.5);
    assert_eq!(sessions.get(b).unwrap().phase(), DEFAULT_PHASE_STEP);
}

#[test]
fn tick_uses_configured_step() {
    let config = SimulationConfig {
        phase_step: 0.1,
        ..Default::default()
    };
    let mut sessions = Sessions::new(config);
    let id = sessions.create(&record(1.0));

    for _ in 0..10 {
        sessions.tick(id);
    }
    assert_relative_eq!(sessions.get(id).unwrap().phase(), 1.0, epsilon = 1e-12);
}

#[test]
fn new_config_applies_to_later_sessions_only() {
    let mut sessions = Sessions::default();
    let before = sessions.create(&record(1.0));

    let mut config = SimulationConfig::default();
    config.display.min_planet_radius_au = 0.5;
    sessions.set_config(config);
    let after = sessions.create(&record(1.0));

    let radius = |id| {
        sessions
            .get(id)
            .unwrap()
            .parameters()
            .planet_radius_display
            .to_au()
    };
    assert_relative_eq!(radius(before), 0.02);
    assert_relative_eq!(radius(after), 0.5);
}

#[test]
fn unknown_sessions_are_reported() {
    let mut sessions = Sessions::default();
    assert!(sessions.get(7).is_none());
    assert!(sessions.advance(7, 1.0).is_none());
    assert!(!sessions.remove(7));

    let id = sessions.create(&record(1.0));
    assert!(sessions.remove(id));
    assert!(sessions.is_empty());
    assert!(sessions.get(id).is_none());
}

#[test]
fn existing_sessions_keep_their_phase_step() {
    let mut sessions = Sessions::default();
    let before = sessions.create(&record(1.0));

    sessions.set_config(SimulationConfig {
        phase_step: 0.1,
        ..Default::default()
    });
    let after = sessions.create(&record(1.0));

    sessions.tick(before).unwrap();
    sessions.tick(after).unwrap();

    assert_eq!(sessions.get(before).unwrap().phase(), DEFAULT_PHASE_STEP);
    assert_eq!(sessions.get(after).unwrap().phase(), 0.1);
}

#[test]
fn invalid_configs_are_replaced_by_defaults() {
    let mut broken = SimulationConfig {
        phase_step: -1.0,
        ..Default::default()
    };
    broken.display.min_star_radius_au = 0.0;

    let mut sessions = Sessions::new(broken.clone());
    assert_eq!(sessions.config(), &SimulationConfig::default());

    sessions.set_config(broken);
    assert_eq!(sessions.config(), &SimulationConfig::default());

    let id = sessions.create(&record(1.0));
    let params = sessions.get(id).unwrap().parameters();
    assert!(params.star_radius_display.to_au() > 0.0);
    assert!(params.planet_radius_display.to_au() > 0.0);
}

#[test]
fn wrapped_ids_skip_live_sessions() {
    let mut sessions = Sessions::default();
    let first = sessions.create(&record(1.0));
    assert_eq!(first, 0);

    sessions.set_next_id(u32::MAX);
    let last = sessions.create(&record(2.0));
    assert_eq!(last, u32::MAX);

    // The counter wraps to 0, which is still live
    let wrapped = sessions.create(&record(3.0));
    assert_eq!(wrapped, 1);
    assert_eq!(sessions.len(), 3);
    assert_eq!(
        sessions.get(first).unwrap().parameters().semi_major_axis.to_au(),
        1.0
    );
    assert_eq!(
        sessions.get(wrapped).unwrap().parameters().semi_major_axis.to_au(),
        3.0
    );
}
