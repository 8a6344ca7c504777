//! Serializes a [`Scene`] to standalone SVG and its rating to an HTML
//! definition list.

use crate::rating::Rating;
use crate::scene::{Scene, Shape};
use std::fmt::Write;

/// Render the scene's shapes as an SVG document string.
pub fn render_svg(scene: &Scene) -> String {
    let [x, y, w, h] = scene.view_box;
    let mut svg = String::with_capacity(256 + scene.shapes.len() * 96);
    _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{x} {y} {w} {h}">"#
    );

    let mut in_sprinkle_group = false;
    for shape in &scene.shapes {
        match shape {
            Shape::Circle {
                center,
                radius,
                fill,
                stroke,
                opacity,
                ..
            } => {
                close_group(&mut svg, &mut in_sprinkle_group);
                _ = write!(
                    svg,
                    r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
                    center.x,
                    center.y,
                    radius,
                    fill.unwrap_or("transparent")
                );
                if let Some(stroke) = stroke {
                    _ = write!(
                        svg,
                        r#" stroke="{}" stroke-width="{}""#,
                        stroke.color, stroke.width
                    );
                }
                if *opacity < 1.0 {
                    _ = write!(svg, r#" opacity="{opacity}""#);
                }
                svg.push_str("/>");
            }
            Shape::Sprinkle {
                position,
                radius,
                color,
                ..
            } => {
                if !in_sprinkle_group {
                    _ = write!(
                        svg,
                        r#"<g transform="translate({}, {})">"#,
                        scene.sprinkle_origin.x, scene.sprinkle_origin.y
                    );
                    in_sprinkle_group = true;
                }
                _ = write!(
                    svg,
                    r#"<circle transform="translate({}, {})" r="{radius}" fill="{color}"/>"#,
                    position.x, position.y
                );
            }
        }
    }
    close_group(&mut svg, &mut in_sprinkle_group);

    svg.push_str("</svg>");
    svg
}

fn close_group(svg: &mut String, open: &mut bool) {
    if *open {
        svg.push_str("</g>");
        *open = false;
    }
}

/// Render the rating block as `<dl>` markup.
pub fn render_rating_html(rating: &Rating) -> String {
    let mut html = String::from("<dl>");
    for entry in &rating.entries {
        _ = write!(
            html,
            "<dt>{}</dt><dd>{}</dd>",
            escape_xml(entry.label),
            entry.emoji()
        );
    }
    html.push_str("</dl>");
    html
}

pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_xml_entities() {
        assert_eq!(escape_xml("a<b & 'c'"), "a&lt;b &amp; &apos;c&apos;");
    }

    #[test]
    fn rating_block_lists_every_entry() {
        let rating = Rating::from_scores(&crate::rating::IndicatorScores {
            overall: 1.0,
            frosting_coverage: 0.85,
            frosting_thickness: 0.5,
            radius: 0.95,
            sprinkle_coverage: 0.0,
        });
        let html = render_rating_html(&rating);
        assert!(html.starts_with("<dl><dt>Overall:</dt><dd>😎</dd>"));
        assert!(html.contains("<dt>Frosting coverage:</dt><dd>😐</dd>"));
        assert!(html.contains("<dt>Frosting thickness:</dt><dd>😱</dd>"));
        assert_eq!(html.matches("<dt>").count(), 5);
        assert!(html.ends_with("</dl>"));
    }
}
