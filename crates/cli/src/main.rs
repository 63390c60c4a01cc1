use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use polycut::api::{
    classify_point_with, draw_chord, draw_convex_polygon, draw_star_polygon,
    split_polygon_with, CutCfg, Point2, PolygonReplay, ShapeCfg, SideCount, DEFAULT_EPS,
};
use std::path::PathBuf;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use io::{ShapeFile, SplitReport};
use provenance::RunRecord;

#[derive(Parser)]
#[command(name = "polycut")]
#[command(about = "Cut simple polygons along a straight segment")]
struct Cmd {
    /// Absolute tolerance for coordinate comparisons
    #[arg(long, global = true, default_value_t = DEFAULT_EPS)]
    eps: f64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Split the polygon in a JSON file along its cut segment
    Split {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Omit output loops with fewer than 3 vertices
        #[arg(long)]
        drop_degenerate: bool,
    },
    /// Classify a point against the polygon in a JSON file
    Classify {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        x: f64,
        #[arg(long, allow_hyphen_values = true)]
        y: f64,
    },
    /// Draw a random polygon and chord, split, and write the result
    Random {
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = 12)]
        vertices: usize,
        /// Star-shaped (possibly concave) instead of convex
        #[arg(long)]
        concave: bool,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    if !(cmd.eps.is_finite() && cmd.eps >= 0.0) {
        bail!("--eps must be a finite, non-negative number");
    }
    let cfg = CutCfg::with_eps(cmd.eps);
    match cmd.action {
        Action::Split {
            input,
            out,
            drop_degenerate,
        } => split(input, out, drop_degenerate, cfg),
        Action::Classify { polygon, x, y } => classify(polygon, x, y, cfg),
        Action::Random {
            seed,
            index,
            vertices,
            concave,
            out,
        } => random(seed, index, vertices, concave, out, cfg),
        Action::Report => report(cfg),
    }
}

fn split(input: PathBuf, out: PathBuf, drop_degenerate: bool, cfg: CutCfg) -> Result<()> {
    tracing::info!(input = %input.display(), out = %out.display(), eps = cfg.eps, "split");
    let shape = ShapeFile::read(&input)?;
    let polygon = shape.polygon()?;
    let cut = shape.cut()?;
    let res = split_polygon_with(cut, &polygon, cfg)?;
    if !res.is_cut() {
        tracing::warn!(
            intersections = res.intersections.len(),
            "cut does not cross the polygon twice; returning input"
        );
    }
    let report = SplitReport::from_result(&res, drop_degenerate);
    tracing::info!(
        vertices = polygon.len(),
        pieces = report.pieces.len(),
        "split_done"
    );
    report.write(&out)?;
    let params = serde_json::json!({
        "input": input.to_string_lossy(),
        "drop_degenerate": drop_degenerate,
    });
    let record = RunRecord::command("split", params, cfg.eps).write_beside(&out)?;
    tracing::debug!(record = %record.display(), "run_record");
    Ok(())
}

fn classify(polygon: PathBuf, x: f64, y: f64, cfg: CutCfg) -> Result<()> {
    tracing::info!(polygon = %polygon.display(), x, y, "classify");
    let shape = ShapeFile::read(&polygon)?;
    let poly = shape.polygon()?;
    let relation = classify_point_with(Point2::new(x, y), &poly, cfg)?;
    println!("{relation:?}");
    Ok(())
}

fn random(
    seed: u64,
    index: u64,
    vertices: usize,
    concave: bool,
    out: PathBuf,
    cfg: CutCfg,
) -> Result<()> {
    tracing::info!(seed, index, vertices, concave, out = %out.display(), "random");
    let tok = PolygonReplay { seed, index };
    let radial = ShapeCfg {
        sides: SideCount::Fixed(vertices),
        radius_wobble: if concave { 0.5 } else { 0.25 },
        ..ShapeCfg::default()
    };
    let polygon = if concave {
        draw_star_polygon(radial, tok)?
    } else {
        draw_convex_polygon(radial, tok)?
    };
    let cut = draw_chord(&polygon, tok)?;
    let res = split_polygon_with(cut, &polygon, cfg)?;
    let report = SplitReport::from_result(&res, false);
    tracing::info!(
        vertices = polygon.len(),
        pieces = report.pieces.len(),
        input_area = polygon.area(),
        "random_done"
    );
    report.write(&out)?;
    let params = serde_json::json!({
        "seed": seed,
        "index": index,
        "vertices": vertices,
        "concave": concave,
        "polygon": polygon.vertices().iter().map(|v| [v.x, v.y]).collect::<Vec<_>>(),
        "cut": [[cut.start.x, cut.start.y], [cut.end.x, cut.end.y]],
    });
    RunRecord::command("random", params, cfg.eps).write_beside(&out)?;
    Ok(())
}

fn report(cfg: CutCfg) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(&RunRecord::build(cfg.eps))?
    );
    Ok(())
}
