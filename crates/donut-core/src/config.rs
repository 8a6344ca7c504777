use crate::constants::MAX_RADIUS_SCALE;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown donut option `{0}`")]
    UnknownKey(String),
    #[error("option `{key}` expects a number, got `{value}`: {source}")]
    InvalidValue {
        key: String,
        value: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("expected KEY=VALUE, got `{0}`")]
    MissingValue(String),
}

/// The recognised donut options.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigKey {
    InnerRadius,
    OuterRadius,
    FrostingCoverage,
    FrostingThickness,
    SprinkleCoverage,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 5] = [
        ConfigKey::InnerRadius,
        ConfigKey::OuterRadius,
        ConfigKey::FrostingCoverage,
        ConfigKey::FrostingThickness,
        ConfigKey::SprinkleCoverage,
    ];

    /// Upper-case option name, e.g. `DONUT_INNER_RADIUS`.
    pub fn option_name(self) -> &'static str {
        match self {
            ConfigKey::InnerRadius => "DONUT_INNER_RADIUS",
            ConfigKey::OuterRadius => "DONUT_OUTER_RADIUS",
            ConfigKey::FrostingCoverage => "DONUT_FROSTING_COVERAGE",
            ConfigKey::FrostingThickness => "DONUT_FROSTING_THICKNESS",
            ConfigKey::SprinkleCoverage => "DONUT_SPRINKLE_COVERAGE",
        }
    }

    /// Kebab-case alias, also used as the DOM id of the matching control.
    pub fn short_name(self) -> &'static str {
        match self {
            ConfigKey::InnerRadius => "inner-radius",
            ConfigKey::OuterRadius => "outer-radius",
            ConfigKey::FrostingCoverage => "frosting-coverage",
            ConfigKey::FrostingThickness => "frosting-thickness",
            ConfigKey::SprinkleCoverage => "sprinkle-coverage",
        }
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        ConfigKey::ALL
            .into_iter()
            .find(|k| {
                trimmed.eq_ignore_ascii_case(k.option_name())
                    || trimmed.eq_ignore_ascii_case(k.short_name())
            })
            .ok_or_else(|| ConfigError::UnknownKey(trimmed.to_string()))
    }
}

/// Inputs of one donut render.
///
/// Radii are scales: `1.0` reaches the edge of the view box. The other
/// three fields are fractions in `[0, 1]`. Values are stored as given;
/// [`DonutConfig::sanitized`] clamps them before use.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutConfig {
    pub inner_radius_scale: f32,
    pub outer_radius_scale: f32,
    pub frosting_coverage: f32,
    pub frosting_thickness: f32,
    pub sprinkle_coverage: f32,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            inner_radius_scale: 0.3,
            outer_radius_scale: 0.9,
            frosting_coverage: 0.8,
            frosting_thickness: 0.9,
            sprinkle_coverage: 0.4,
        }
    }
}

impl DonutConfig {
    pub fn get(&self, key: ConfigKey) -> f32 {
        match key {
            ConfigKey::InnerRadius => self.inner_radius_scale,
            ConfigKey::OuterRadius => self.outer_radius_scale,
            ConfigKey::FrostingCoverage => self.frosting_coverage,
            ConfigKey::FrostingThickness => self.frosting_thickness,
            ConfigKey::SprinkleCoverage => self.sprinkle_coverage,
        }
    }

    pub fn set(&mut self, key: ConfigKey, value: f32) {
        let slot = match key {
            ConfigKey::InnerRadius => &mut self.inner_radius_scale,
            ConfigKey::OuterRadius => &mut self.outer_radius_scale,
            ConfigKey::FrostingCoverage => &mut self.frosting_coverage,
            ConfigKey::FrostingThickness => &mut self.frosting_thickness,
            ConfigKey::SprinkleCoverage => &mut self.sprinkle_coverage,
        };
        *slot = value;
    }

    /// Clamp every field into its valid range. Non-finite values become 0,
    /// radii are held to `[0, MAX_RADIUS_SCALE]` and the outer radius never
    /// drops below the inner one.
    pub fn sanitized(&self) -> Self {
        let unit = |v: f32| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 };
        let radius = |v: f32| {
            if v.is_finite() {
                v.clamp(0.0, MAX_RADIUS_SCALE)
            } else {
                0.0
            }
        };
        let inner = radius(self.inner_radius_scale);
        Self {
            inner_radius_scale: inner,
            outer_radius_scale: radius(self.outer_radius_scale).max(inner),
            frosting_coverage: unit(self.frosting_coverage),
            frosting_thickness: unit(self.frosting_thickness),
            sprinkle_coverage: unit(self.sprinkle_coverage),
        }
    }

    /// Parse `key` and `value` and store the result.
    pub fn apply_pair(&mut self, key: &str, value: &str) -> Result<ConfigKey, ConfigError> {
        let (parsed_key, parsed_value) = parse_pair(key, value)?;
        self.set(parsed_key, parsed_value);
        Ok(parsed_key)
    }

    /// Apply a single `KEY=VALUE` assignment.
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<ConfigKey, ConfigError> {
        let (key, value) = parse_assignment(assignment)?;
        self.set(key, value);
        Ok(key)
    }

    /// Build a config from a URL query string such as
    /// `?inner-radius=0.25&DONUT_SPRINKLE_COVERAGE=0.6`, starting from the
    /// defaults. Empty segments are ignored.
    pub fn from_query(query: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        for segment in query.trim_start_matches('?').split('&') {
            if segment.is_empty() {
                continue;
            }
            config.apply_assignment(segment)?;
        }
        Ok(config)
    }
}

pub fn parse_pair(key: &str, value: &str) -> Result<(ConfigKey, f32), ConfigError> {
    let parsed_key: ConfigKey = key.parse()?;
    let parsed_value = value
        .trim()
        .parse::<f32>()
        .map_err(|source| ConfigError::InvalidValue {
            key: key.trim().to_string(),
            value: value.trim().to_string(),
            source,
        })?;
    Ok((parsed_key, parsed_value))
}

/// Split and parse a `KEY=VALUE` assignment.
pub fn parse_assignment(assignment: &str) -> Result<(ConfigKey, f32), ConfigError> {
    let (key, value) = assignment
        .split_once('=')
        .ok_or_else(|| ConfigError::MissingValue(assignment.to_string()))?;
    parse_pair(key, value)
}
