// Host-side tests for the donut markup.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod view {
    include!("../src/view.rs");
}

use donut_core::DonutConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use view::*;

#[test]
fn markup_wraps_picture_and_rating() {
    let scene = donut_scene(&DonutConfig::default(), &mut StdRng::seed_from_u64(1));
    let html = donut_markup(&scene);
    assert!(html.starts_with(r#"<div class="Donut"><svg"#));
    assert!(html.contains("</svg><dl>"));
    assert!(html.ends_with("</dl></div>"));
    assert!(html.contains("<dt>Sprinkles:</dt>"));
}

#[test]
fn seeded_scenes_are_reproducible() {
    let config = DonutConfig {
        sprinkle_coverage: 0.9,
        ..DonutConfig::default()
    };
    let a = donut_scene(&config, &mut StdRng::seed_from_u64(17));
    let b = donut_scene(&config, &mut StdRng::seed_from_u64(17));
    assert_eq!(a, b);
    assert_eq!(donut_markup(&a), donut_markup(&b));
}
