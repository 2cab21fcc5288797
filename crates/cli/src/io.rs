//! Point files in, hull documents out.

use anyhow::{bail, Context, Result};
use hull3::Hull;
use nalgebra::Vector3;
use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Read `x,y,z` columns from a CSV or Parquet file (by extension).
pub fn read_points(path: &Path) -> Result<Vec<Vector3<f64>>> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())?,
        _ => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()?,
    };
    let df = lf
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
            col("z").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading x,y,z columns from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let zs = df.column("z")?.f64()?;

    let mut out = Vec::with_capacity(df.height());
    for (row, ((x, y), z)) in xs.into_iter().zip(ys).zip(zs).enumerate() {
        match (x, y, z) {
            (Some(x), Some(y), Some(z)) => out.push(Vector3::new(x, y, z)),
            _ => bail!("row {row} of {} has a missing coordinate", path.display()),
        }
    }
    Ok(out)
}

/// Write points as a CSV with an `x,y,z` header.
pub fn write_points(path: &Path, pts: &[Vector3<f64>]) -> Result<()> {
    ensure_parent(path)?;
    let column = |name: &str, f: fn(&Vector3<f64>) -> f64| {
        Series::new(name.into(), pts.iter().map(f).collect::<Vec<f64>>())
    };
    let mut df = DataFrame::new(vec![
        column("x", |p| p.x),
        column("y", |p| p.y),
        column("z", |p| p.z),
    ])?;
    let mut file =
        fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)?;
    Ok(())
}

/// Indexed triangle mesh plus run statistics, as written by `run`.
#[derive(Debug, Serialize)]
pub struct HullDoc {
    pub vertices: Vec<[f64; 3]>,
    /// Outward-wound vertex indices, one triple per face in node order.
    pub triangles: Vec<[usize; 3]>,
    pub faces: usize,
    pub steps: usize,
    pub converged: bool,
    pub volume: f64,
    pub area: f64,
}

impl HullDoc {
    pub fn from_hull(hull: &Hull, steps: usize) -> Self {
        let (verts, triangles) = hull.to_indexed_mesh();
        Self {
            vertices: verts.iter().map(|v| [v.x, v.y, v.z]).collect(),
            faces: triangles.len(),
            triangles,
            steps,
            converged: hull.is_converged(),
            volume: hull.volume(),
            area: hull.surface_area(),
        }
    }
}

pub fn write_json(path: &Path, doc: &HullDoc) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}
