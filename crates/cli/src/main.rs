mod provenance;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use serde_json::json;
use shapes::prelude::*;
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Build shapes and report their areas")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Report a circle given its radius
    Circle {
        #[arg(long)]
        radius: f64,
    },
    /// Report a triangle given its three sides
    Triangle {
        #[arg(long)]
        a: f64,
        #[arg(long)]
        b: f64,
        #[arg(long)]
        c: f64,
    },
    /// Draw seeded random shapes and write them as JSON (plus provenance sidecar)
    Sample {
        #[arg(long, value_enum, default_value_t = Kind::Triangle)]
        kind: Kind,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 10)]
        count: u64,
        #[arg(long, default_value_t = 0.1)]
        min_len: f64,
        #[arg(long, default_value_t = 10.0)]
        max_len: f64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Circle,
    Triangle,
    Right,
}

/// JSON view of a constructed shape.
#[derive(Debug, Serialize)]
struct ShapeReport {
    shape: &'static str,
    display: String,
    area: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_right: Option<bool>,
}

impl From<&AnyShape> for ShapeReport {
    fn from(s: &AnyShape) -> Self {
        let is_right = match s {
            AnyShape::Triangle(t) => Some(t.is_right()),
            AnyShape::Circle(_) => None,
        };
        Self {
            shape: s.name(),
            display: s.to_string(),
            area: s.area(),
            is_right,
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Circle { radius } => circle(radius),
        Action::Triangle { a, b, c } => triangle(a, b, c),
        Action::Sample {
            kind,
            seed,
            count,
            min_len,
            max_len,
            out,
        } => sample(kind, seed, count, SampleCfg { min_len, max_len }, out),
        Action::Report => report(),
    }
}

fn print_report(shape: AnyShape) -> Result<()> {
    let report = ShapeReport::from(&shape);
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn circle(radius: f64) -> Result<()> {
    tracing::info!(radius, "circle");
    let c = Circle::new(radius).context("constructing circle")?;
    print_report(c.into())
}

fn triangle(a: f64, b: f64, c: f64) -> Result<()> {
    tracing::info!(a, b, c, "triangle");
    let t = Triangle::new(a, b, c).context("constructing triangle")?;
    print_report(t.into())
}

fn draw(kind: Kind, cfg: SampleCfg, tok: ReplayToken) -> shapes::Result<AnyShape> {
    Ok(match kind {
        Kind::Circle => draw_circle(cfg, tok)?.into(),
        Kind::Triangle => draw_triangle(cfg, tok)?.into(),
        Kind::Right => draw_right_triangle(cfg, tok)?.into(),
    })
}

fn right_flag_at_risk(kind: Kind, cfg: SampleCfg) -> bool {
    matches!(kind, Kind::Right) && !cfg.right_flag_reliable()
}

fn sample_reports(kind: Kind, seed: u64, count: u64, cfg: SampleCfg) -> Result<Vec<ShapeReport>> {
    (0..count)
        .map(|index| {
            let shape = draw(kind, cfg, ReplayToken::new(seed, index))
                .with_context(|| format!("drawing sample {index}"))?;
            Ok(ShapeReport::from(&shape))
        })
        .collect()
}

fn sample(kind: Kind, seed: u64, count: u64, cfg: SampleCfg, out: String) -> Result<()> {
    tracing::info!(kind = ?kind, seed, count, out, "sample");
    if right_flag_at_risk(kind, cfg) {
        tracing::warn!(
            max_len = cfg.max_len,
            limit = RIGHT_DRAW_MAX_LEN,
            "right-triangle draws above the limit may report is_right = false"
        );
    }
    let reports = sample_reports(kind, seed, count, cfg)?;
    let total: f64 = reports.iter().map(|r| r.area).sum();
    tracing::info!(samples = reports.len(), total_area = total, "sampled");

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(out_path, serde_json::to_vec_pretty(&reports)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = provenance::Payload::new(json!({
        "kind": format!("{kind:?}").to_lowercase(),
        "seed": seed,
        "count": count,
        "min_len": cfg.min_len,
        "max_len": cfg.max_len
    }));
    provenance::write_sidecar(out_path, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "version": shapes::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
