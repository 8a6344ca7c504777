// Host-side tests for the pure control helpers.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod controls {
    include!("../src/controls.rs");
}

use controls::*;
use donut_core::{Action, ConfigError, ConfigKey, DonutConfig};

#[test]
fn every_option_has_a_control() {
    let ids: Vec<_> = control_ids().map(|(id, _)| id).collect();
    assert_eq!(
        ids,
        [
            "inner-radius",
            "outer-radius",
            "frosting-coverage",
            "frosting-thickness",
            "sprinkle-coverage"
        ]
    );
}

#[test]
fn control_input_becomes_a_set_action() {
    assert_eq!(
        action_for_control("frosting-thickness", "0.35"),
        Ok(Action::Set(ConfigKey::FrostingThickness, 0.35))
    );
    assert_eq!(
        action_for_control("inner-radius", " 0.2 "),
        Ok(Action::Set(ConfigKey::InnerRadius, 0.2))
    );
}

#[test]
fn unusable_control_input_is_an_error() {
    assert!(matches!(
        action_for_control("glaze", "0.5"),
        Err(ConfigError::UnknownKey(_))
    ));
    assert!(matches!(
        action_for_control("outer-radius", ""),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn control_values_round_to_step() {
    let config = DonutConfig {
        sprinkle_coverage: 0.456,
        ..DonutConfig::default()
    };
    assert_eq!(
        control_value(&config, ConfigKey::SprinkleCoverage),
        "0.46"
    );
}

#[test]
fn control_ranges_cover_the_unit_interval() {
    for (_, key) in control_ids() {
        let range = control_range(key);
        assert_eq!(range.min, 0.0);
        assert!(range.max >= 1.0);
        assert!(range.step > 0.0 && range.step < range.max);
    }
    assert_eq!(
        control_range(ConfigKey::OuterRadius).max,
        donut_core::MAX_RADIUS_SCALE
    );
}
