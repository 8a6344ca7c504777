// Tests for option parsing, sanitizing and the rating block.

use donut_core::*;

#[test]
fn mood_thresholds_are_strict() {
    assert_eq!(Mood::from_score(1.0), Mood::Confident);
    assert_eq!(Mood::from_score(0.95), Mood::Confident);
    assert_eq!(Mood::from_score(0.9), Mood::Neutral);
    assert_eq!(Mood::from_score(0.85), Mood::Neutral);
    assert_eq!(Mood::from_score(0.8), Mood::Concerned);
    assert_eq!(Mood::from_score(0.5), Mood::Concerned);
    assert_eq!(Mood::from_score(f32::NAN), Mood::Concerned);
}

#[test]
fn moods_map_to_emoji() {
    assert_eq!(Mood::Confident.emoji(), "😎");
    assert_eq!(Mood::Neutral.emoji(), "😐");
    assert_eq!(Mood::Concerned.emoji(), "😱");
}

#[test]
fn rating_entries_keep_display_order() {
    let rating = Rating::from_scores(&IndicatorScores {
        overall: 0.95,
        frosting_coverage: 0.1,
        frosting_thickness: 0.2,
        radius: 0.3,
        sprinkle_coverage: 0.4,
    });
    let labels: Vec<_> = rating.entries.iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        [
            "Overall:",
            "Frosting coverage:",
            "Frosting thickness:",
            "Radius:",
            "Sprinkles:"
        ]
    );
    assert_eq!(rating.overall(), Some(Mood::Confident));
    assert_eq!(rating.entries[4].score, 0.4);
}

#[test]
fn ideal_donut_scores_its_reference_as_perfect() {
    let classifier = IdealDonut::default();
    let scores = classifier.scores(&DonutConfig::default());
    assert_eq!(scores.overall, 1.0);
    assert_eq!(Rating::from_scores(&scores).overall(), Some(Mood::Confident));
}

#[test]
fn ideal_donut_penalizes_distance() {
    let classifier = IdealDonut::default();
    let mut config = DonutConfig::default();
    config.frosting_coverage = 0.0;
    config.sprinkle_coverage = 1.0;
    let scores = classifier.scores(&config);
    assert_eq!(scores.frosting_coverage, 0.0);
    assert!(scores.sprinkle_coverage < 0.01);
    assert_eq!(scores.frosting_thickness, 1.0);
    assert!(scores.overall < 0.8);
    for s in [
        scores.overall,
        scores.frosting_coverage,
        scores.frosting_thickness,
        scores.radius,
        scores.sprinkle_coverage,
    ] {
        assert!((0.0..=1.0).contains(&s));
    }
}

#[test]
fn closures_can_stand_in_for_the_classifier() {
    let fixed = |_: &DonutConfig| IndicatorScores {
        overall: 0.85,
        ..IndicatorScores::default()
    };
    let scores = fixed.scores(&DonutConfig::default());
    assert_eq!(Mood::from_score(scores.overall), Mood::Neutral);
}

#[test]
fn keys_parse_from_option_and_short_names() {
    assert_eq!(
        "DONUT_INNER_RADIUS".parse::<ConfigKey>(),
        Ok(ConfigKey::InnerRadius)
    );
    assert_eq!(
        "sprinkle-coverage".parse::<ConfigKey>(),
        Ok(ConfigKey::SprinkleCoverage)
    );
    assert_eq!(
        " donut_frosting_thickness ".parse::<ConfigKey>(),
        Ok(ConfigKey::FrostingThickness)
    );
    assert_eq!(
        "glaze".parse::<ConfigKey>(),
        Err(ConfigError::UnknownKey("glaze".into()))
    );
}

#[test]
fn query_string_overrides_defaults() {
    let config =
        DonutConfig::from_query("?inner-radius=0.25&DONUT_SPRINKLE_COVERAGE=0.6&").unwrap();
    assert_eq!(config.inner_radius_scale, 0.25);
    assert_eq!(config.sprinkle_coverage, 0.6);
    assert_eq!(
        config.outer_radius_scale,
        DonutConfig::default().outer_radius_scale
    );
    assert_eq!(DonutConfig::from_query("").unwrap(), DonutConfig::default());
}

#[test]
fn bad_assignments_are_reported() {
    let mut config = DonutConfig::default();
    assert!(matches!(
        config.apply_assignment("outer-radius"),
        Err(ConfigError::MissingValue(_))
    ));
    let err = config.apply_assignment("outer-radius=wide").unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref key, ref value, .. }
        if key == "outer-radius" && value == "wide"));
    assert!(err.to_string().contains("expects a number"));
    assert_eq!(config, DonutConfig::default());
}

#[test]
fn sanitized_clamps_out_of_range_values() {
    let config = DonutConfig {
        inner_radius_scale: 0.8,
        outer_radius_scale: 0.4,
        frosting_coverage: 1.5,
        frosting_thickness: -0.2,
        sprinkle_coverage: f32::NAN,
    }
    .sanitized();
    assert_eq!(config.inner_radius_scale, 0.8);
    assert_eq!(config.outer_radius_scale, 0.8);
    assert_eq!(config.frosting_coverage, 1.0);
    assert_eq!(config.frosting_thickness, 0.0);
    assert_eq!(config.sprinkle_coverage, 0.0);

    let negative = DonutConfig {
        inner_radius_scale: -1.0,
        ..DonutConfig::default()
    }
    .sanitized();
    assert_eq!(negative.inner_radius_scale, 0.0);

    let huge = DonutConfig {
        inner_radius_scale: 5_000.0,
        outer_radius_scale: 10_000.0,
        ..DonutConfig::default()
    }
    .sanitized();
    assert_eq!(huge.inner_radius_scale, MAX_RADIUS_SCALE);
    assert_eq!(huge.outer_radius_scale, MAX_RADIUS_SCALE);
}

#[test]
fn get_and_set_cover_every_key() {
    let mut config = DonutConfig::default();
    for (i, key) in ConfigKey::ALL.into_iter().enumerate() {
        let value = 0.1 * (i + 1) as f32;
        config.set(key, value);
        assert_eq!(config.get(key), value);
    }
}
