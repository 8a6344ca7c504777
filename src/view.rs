use crate::constants::DONUT_CLASS;
use donut_core::{
    build_scene, render_rating_html, render_svg, AngularWalk, DonutConfig, IdealDonut, Scene,
};
use rand::Rng;

/// Build the scene shown for `config`. Recomputed in full on every change.
pub fn donut_scene<R: Rng + ?Sized>(config: &DonutConfig, rng: &mut R) -> Scene {
    build_scene(config, &IdealDonut::default(), rng, AngularWalk::Inclusive)
}

/// Markup for the donut block: the SVG picture followed by the rating list.
pub fn donut_markup(scene: &Scene) -> String {
    format!(
        r#"<div class="{DONUT_CLASS}">{}{}</div>"#,
        render_svg(scene),
        render_rating_html(&scene.rating)
    )
}
