use crate::constants::{CONTROL_STEP, FRACTION_CONTROL_MAX, RADIUS_CONTROL_MAX};
use donut_core::{parse_pair, Action, ConfigError, ConfigKey, DonutConfig};

/// Bounds for one range input.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

#[inline]
pub fn control_range(key: ConfigKey) -> ControlRange {
    let max = match key {
        ConfigKey::InnerRadius | ConfigKey::OuterRadius => RADIUS_CONTROL_MAX,
        ConfigKey::FrostingCoverage
        | ConfigKey::FrostingThickness
        | ConfigKey::SprinkleCoverage => FRACTION_CONTROL_MAX,
    };
    ControlRange {
        min: 0.0,
        max,
        step: CONTROL_STEP,
    }
}

/// Translate an `input` event on control `control_id` into a store action.
pub fn action_for_control(control_id: &str, value: &str) -> Result<Action, ConfigError> {
    let (key, parsed) = parse_pair(control_id, value)?;
    Ok(Action::Set(key, parsed))
}

/// Text written back into a control so it reflects `config`.
#[inline]
pub fn control_value(config: &DonutConfig, key: ConfigKey) -> String {
    format!("{:.2}", config.get(key))
}

/// `(element id, key)` for every control, in display order.
pub fn control_ids() -> impl Iterator<Item = (&'static str, ConfigKey)> {
    ConfigKey::ALL.into_iter().map(|k| (k.short_name(), k))
}
