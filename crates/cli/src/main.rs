use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull3::rand3::{sample_in_ball, sample_in_box, sample_on_sphere, ReplayToken};
use hull3::Hull;
use nalgebra::Vector3;
use serde_json::json;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

#[derive(Parser)]
#[command(name = "hull3")]
#[command(about = "Incremental 3D convex hull runner")]
struct Cmd {
    /// Log every expansion step
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the hull of a point file (CSV or Parquet with x,y,z columns)
    Run {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
        /// Safety cap on expansion steps
        #[arg(long)]
        max_iter: Option<usize>,
    },
    /// Write a seeded point cloud as CSV
    Sample {
        #[arg(long, value_enum, default_value_t = Shape::Ball)]
        shape: Shape,
        #[arg(long, default_value_t = 100)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    /// Uniform inside the unit ball
    Ball,
    /// Uniform on the unit sphere
    Sphere,
    /// Uniform in [-1, 1]^3
    Cube,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Run {
            input,
            out,
            max_iter,
        } => run(input, out, max_iter),
        Action::Sample {
            shape,
            count,
            seed,
            out,
        } => sample(shape, count, seed, out),
        Action::Report => report(),
    }
}

fn run(input: String, out: String, max_iter: Option<usize>) -> Result<()> {
    tracing::info!(input, out, max_iter = ?max_iter, "run");
    let pts = io::read_points(Path::new(&input))?;
    tracing::info!(points = pts.len(), "input_points");

    let mut hull = Hull::new(&pts).with_context(|| format!("bootstrapping hull of {input}"))?;
    let steps = hull
        .expand_loop(max_iter.unwrap_or(usize::MAX))
        .with_context(|| format!("expanding hull of {input}"))?;
    if !hull.is_converged() {
        tracing::warn!(
            outside = hull.outside_len(),
            "iteration cap reached before convergence"
        );
    }

    let doc = io::HullDoc::from_hull(&hull, steps);
    tracing::info!(
        faces = doc.faces,
        vertices = doc.vertices.len(),
        steps,
        "hull"
    );
    io::write_json(Path::new(&out), &doc)?;

    let payload = provenance::Payload::new(json!({
        "command": "run",
        "input": input,
        "points": pts.len(),
        "max_iter": max_iter,
    }))
    .with_hull(&hull, steps);
    let prov = provenance::write_sidecar(&out, payload)?;
    tracing::info!(provenance = %prov.display(), "wrote");
    Ok(())
}

fn sample(shape: Shape, count: usize, seed: u64, out: String) -> Result<()> {
    tracing::info!(?shape, count, seed, out, "sample");
    let tok = ReplayToken::new(seed, 0);
    let pts = match shape {
        Shape::Ball => sample_in_ball(count, 1.0, tok),
        Shape::Sphere => sample_on_sphere(count, 1.0, tok),
        Shape::Cube => sample_in_box(count, Vector3::new(1.0, 1.0, 1.0), tok),
    };
    io::write_points(Path::new(&out), &pts)?;

    let payload = provenance::Payload::new(json!({
        "command": "sample",
        "shape": format!("{shape:?}").to_lowercase(),
        "count": count,
        "seed": seed,
    }));
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "hull3": hull3::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
