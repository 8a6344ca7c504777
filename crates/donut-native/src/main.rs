use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use donut_core::{
    build_scene, parse_assignment, render_rating_html, render_svg, Action, AngularWalk, AppState,
    ConfigKey, DonutConfig, IdealDonut, LoggerMiddleware, Scene, Store,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Parser, Debug)]
#[command(name = "donut", about = "Render a sprinkled donut as SVG, HTML or JSON")]
struct Cli {
    /// Inner radius scale (1.0 reaches the edge of the picture)
    #[arg(long, env = "DONUT_INNER_RADIUS")]
    inner_radius: Option<f32>,

    /// Outer radius scale
    #[arg(long, env = "DONUT_OUTER_RADIUS")]
    outer_radius: Option<f32>,

    /// Fraction of the ring covered by frosting, 0..1
    #[arg(long, env = "DONUT_FROSTING_COVERAGE")]
    frosting_coverage: Option<f32>,

    /// Frosting opacity, 0..1
    #[arg(long, env = "DONUT_FROSTING_THICKNESS")]
    frosting_thickness: Option<f32>,

    /// Fraction of the frosting covered by sprinkles, 0..1
    #[arg(long, env = "DONUT_SPRINKLE_COVERAGE")]
    sprinkle_coverage: Option<f32>,

    /// Extra option assignments, e.g. `--set DONUT_OUTER_RADIUS=0.8`
    #[arg(long = "set", value_name = "KEY=VALUE")]
    assignments: Vec<String>,

    /// Seed for sprinkle placement; random when omitted
    #[arg(long, env = "DONUT_SEED")]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value_t = Walk::Inclusive)]
    walk: Walk,

    #[arg(long, value_enum, default_value_t = Format::Svg)]
    format: Format,

    /// Output file; stdout when omitted
    #[arg(long, short)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Walk {
    Inclusive,
    HalfOpen,
}

impl From<Walk> for AngularWalk {
    fn from(walk: Walk) -> Self {
        match walk {
            Walk::Inclusive => AngularWalk::Inclusive,
            Walk::HalfOpen => AngularWalk::HalfOpen,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Svg,
    Html,
    Json,
}

impl Cli {
    fn actions(&self) -> anyhow::Result<Vec<Action>> {
        let flags = [
            (ConfigKey::InnerRadius, self.inner_radius),
            (ConfigKey::OuterRadius, self.outer_radius),
            (ConfigKey::FrostingCoverage, self.frosting_coverage),
            (ConfigKey::FrostingThickness, self.frosting_thickness),
            (ConfigKey::SprinkleCoverage, self.sprinkle_coverage),
        ];
        let mut actions: Vec<Action> = flags
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| Action::Set(key, v)))
            .collect();
        for assignment in &self.assignments {
            let (key, value) = parse_assignment(assignment)
                .with_context(|| format!("invalid --set `{assignment}`"))?;
            actions.push(Action::Set(key, value));
        }
        Ok(actions)
    }
}

fn render(scene: &Scene, format: Format) -> anyhow::Result<String> {
    Ok(match format {
        Format::Svg => render_svg(scene),
        Format::Html => format!(
            "<!doctype html>\n<html><head><meta charset=\"utf-8\"><title>Donut</title></head>\
             <body><div class=\"Donut\">{}{}</div></body></html>\n",
            render_svg(scene),
            render_rating_html(&scene.rating)
        ),
        Format::Json => serde_json::to_string_pretty(scene)?,
    })
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    log::debug!("{cli:?}");

    let mut store = Store::new(AppState::new(DonutConfig::default()))
        .with_middleware(LoggerMiddleware::new(true));
    for action in cli.actions()? {
        store.dispatch(action);
    }
    let config = store.state().donut;
    if config != config.sanitized() {
        log::warn!("options out of range were clamped: {:?}", config.sanitized());
    }

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let scene = build_scene(&config, &IdealDonut::default(), &mut rng, cli.walk.into());
    log::info!(
        "[donut] sprinkles={} overall={}",
        scene.sprinkles().count(),
        scene.rating.overall().map(|m| m.emoji()).unwrap_or("-")
    );

    let output = render(&scene, cli.format)?;
    match &cli.out {
        Some(path) => fs::write(path, output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            if !output.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }
    Ok(())
}
