//! Quality rating shown beside the donut.
//!
//! Scores come from an [`Indicator`] (a classifier judging the current
//! configuration); each score is mapped to one of three moods.

use crate::config::DonutConfig;
use crate::constants::{CONFIDENT_ABOVE, NEUTRAL_ABOVE};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Mood {
    Confident,
    Neutral,
    Concerned,
}

impl Mood {
    /// Strict thresholds: exactly `0.9` is neutral, exactly `0.8` concerned.
    pub fn from_score(score: f32) -> Self {
        if score > CONFIDENT_ABOVE {
            Mood::Confident
        } else if score > NEUTRAL_ABOVE {
            Mood::Neutral
        } else {
            Mood::Concerned
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Mood::Confident => "😎",
            Mood::Neutral => "😐",
            Mood::Concerned => "😱",
        }
    }
}

/// The five named scores produced by an [`Indicator`], each in `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IndicatorScores {
    pub overall: f32,
    pub frosting_coverage: f32,
    pub frosting_thickness: f32,
    pub radius: f32,
    pub sprinkle_coverage: f32,
}

/// Classifier seam: judges a configuration.
pub trait Indicator {
    fn scores(&self, config: &DonutConfig) -> IndicatorScores;
}

impl<F> Indicator for F
where
    F: Fn(&DonutConfig) -> IndicatorScores,
{
    fn scores(&self, config: &DonutConfig) -> IndicatorScores {
        self(config)
    }
}

/// Scores each parameter by its distance from a reference donut.
///
/// A parameter at its ideal value scores 1.0; the score falls linearly to
/// 0.0 at `tolerance` away. `overall` is the mean of the four parts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IdealDonut {
    pub ideal: DonutConfig,
    pub tolerance: f32,
}

impl Default for IdealDonut {
    fn default() -> Self {
        Self {
            ideal: DonutConfig::default(),
            tolerance: 0.5,
        }
    }
}

impl IdealDonut {
    fn closeness(&self, value: f32, ideal: f32) -> f32 {
        if self.tolerance <= 0.0 {
            return if value == ideal { 1.0 } else { 0.0 };
        }
        (1.0 - (value - ideal).abs() / self.tolerance).clamp(0.0, 1.0)
    }
}

impl Indicator for IdealDonut {
    fn scores(&self, config: &DonutConfig) -> IndicatorScores {
        let c = config.sanitized();
        let ideal = &self.ideal;
        let frosting_coverage = self.closeness(c.frosting_coverage, ideal.frosting_coverage);
        let frosting_thickness = self.closeness(c.frosting_thickness, ideal.frosting_thickness);
        // Radius is judged on the ring proportions, not absolute size.
        let radius = self.closeness(
            c.inner_radius_scale / c.outer_radius_scale.max(f32::EPSILON),
            ideal.inner_radius_scale / ideal.outer_radius_scale.max(f32::EPSILON),
        );
        let sprinkle_coverage = self.closeness(c.sprinkle_coverage, ideal.sprinkle_coverage);
        IndicatorScores {
            overall: (frosting_coverage + frosting_thickness + radius + sprinkle_coverage) / 4.0,
            frosting_coverage,
            frosting_thickness,
            radius,
            sprinkle_coverage,
        }
    }
}

/// One labelled line of the rating block.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RatingEntry {
    pub label: &'static str,
    pub score: f32,
    pub mood: Mood,
}

impl RatingEntry {
    pub fn emoji(&self) -> &'static str {
        self.mood.emoji()
    }
}

/// Rating block in display order.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Rating {
    pub entries: Vec<RatingEntry>,
}

impl Rating {
    pub fn from_scores(scores: &IndicatorScores) -> Self {
        let entry = |label: &'static str, score: f32| RatingEntry {
            label,
            score,
            mood: Mood::from_score(score),
        };
        Self {
            entries: vec![
                entry("Overall:", scores.overall),
                entry("Frosting coverage:", scores.frosting_coverage),
                entry("Frosting thickness:", scores.frosting_thickness),
                entry("Radius:", scores.radius),
                entry("Sprinkles:", scores.sprinkle_coverage),
            ],
        }
    }

    pub fn overall(&self) -> Option<Mood> {
        self.entries.first().map(|e| e.mood)
    }
}
