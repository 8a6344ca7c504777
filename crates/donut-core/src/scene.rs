//! Data-only description of one donut render.
//!
//! The core emits a [`Scene`]; front ends turn it into SVG markup or DOM
//! nodes. Shapes are listed back to front.

use crate::config::DonutConfig;
use crate::constants::{
    DOUGH_FILL, FROSTING_STROKE, HOLE_FILL, MIN_FROSTING_THICKNESS_FOR_SPRINKLES,
    OUTLINE_STROKE, OUTLINE_STROKE_WIDTH, RADIUS_SCALE, SPRINKLE_DOT_RADIUS, VIEW_BOX_CENTER,
    VIEW_BOX_SIZE,
};
use crate::layout::{layout_sprinkles, Annulus, AngularWalk};
use crate::rating::{Indicator, Rating};
use glam::Vec2;
use rand::Rng;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stroke {
    pub color: &'static str,
    pub width: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Shape {
    /// A circle in view-box coordinates. `fill: None` draws no fill.
    Circle {
        role: CircleRole,
        center: Vec2,
        radius: f32,
        fill: Option<&'static str>,
        stroke: Option<Stroke>,
        opacity: f32,
    },
    /// A sprinkle positioned relative to [`Scene::sprinkle_origin`].
    Sprinkle {
        position: Vec2,
        rotation_degrees: f32,
        radius: f32,
        color: &'static str,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CircleRole {
    Dough,
    Hole,
    Frosting,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Scene {
    /// `[min_x, min_y, width, height]`
    pub view_box: [f32; 4],
    pub sprinkle_origin: Vec2,
    pub shapes: Vec<Shape>,
    pub rating: Rating,
}

impl Scene {
    pub fn sprinkles(&self) -> impl Iterator<Item = &Shape> {
        self.shapes
            .iter()
            .filter(|s| matches!(s, Shape::Sprinkle { .. }))
    }

    pub fn circle(&self, role: CircleRole) -> Option<&Shape> {
        self.shapes
            .iter()
            .find(|s| matches!(s, Shape::Circle { role: r, .. } if *r == role))
    }
}

/// Ring geometry derived from a config, in scene units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DonutGeometry {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub frosting_radius: f32,
    pub frosting_stroke_width: f32,
}

impl DonutGeometry {
    pub fn from_config(config: &DonutConfig) -> Self {
        let c = config.sanitized();
        let inner_radius = c.inner_radius_scale * RADIUS_SCALE;
        let outer_radius = c.outer_radius_scale * RADIUS_SCALE;
        Self {
            inner_radius,
            outer_radius,
            frosting_radius: (outer_radius + inner_radius) / 2.0,
            frosting_stroke_width: (outer_radius - inner_radius) * c.frosting_coverage,
        }
    }

    /// The band actually covered by frosting, where sprinkles go.
    pub fn frosting_annulus(&self) -> Annulus {
        let half = self.frosting_stroke_width / 2.0;
        Annulus::new(self.frosting_radius - half, self.frosting_radius + half)
    }
}

/// Build the full scene for `config`.
///
/// Sprinkles are omitted when sprinkle coverage is zero or the frosting is
/// too thin to hold them.
pub fn build_scene<I, R>(
    config: &DonutConfig,
    indicator: &I,
    rng: &mut R,
    walk: AngularWalk,
) -> Scene
where
    I: Indicator + ?Sized,
    R: Rng + ?Sized,
{
    let c = config.sanitized();
    let geometry = DonutGeometry::from_config(&c);
    let center = Vec2::from(VIEW_BOX_CENTER);
    let outline = Some(Stroke {
        color: OUTLINE_STROKE,
        width: OUTLINE_STROKE_WIDTH,
    });

    let mut shapes = vec![
        Shape::Circle {
            role: CircleRole::Dough,
            center,
            radius: geometry.outer_radius,
            fill: Some(DOUGH_FILL),
            stroke: outline,
            opacity: 1.0,
        },
        Shape::Circle {
            role: CircleRole::Hole,
            center,
            radius: geometry.inner_radius,
            fill: Some(HOLE_FILL),
            stroke: outline,
            opacity: 1.0,
        },
        Shape::Circle {
            role: CircleRole::Frosting,
            center,
            radius: geometry.frosting_radius,
            fill: None,
            stroke: Some(Stroke {
                color: FROSTING_STROKE,
                width: geometry.frosting_stroke_width,
            }),
            opacity: c.frosting_thickness,
        },
    ];

    let sprinkles_visible =
        c.sprinkle_coverage > 0.0 && c.frosting_thickness >= MIN_FROSTING_THICKNESS_FOR_SPRINKLES;
    if sprinkles_visible {
        let layout = layout_sprinkles(geometry.frosting_annulus(), c.sprinkle_coverage, rng, walk);
        shapes.extend(layout.marks.iter().map(|m| Shape::Sprinkle {
            position: m.placement.position,
            rotation_degrees: m.placement.rotation_degrees,
            radius: SPRINKLE_DOT_RADIUS,
            color: m.color(),
        }));
    }

    let scores = indicator.scores(&c);
    Scene {
        view_box: [0.0, 0.0, VIEW_BOX_SIZE, VIEW_BOX_SIZE],
        sprinkle_origin: center,
        shapes,
        rating: Rating::from_scores(&scores),
    }
}
