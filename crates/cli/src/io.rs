//! JSON shapes for CLI input and output.

use anyhow::{Context, Result};
use polycut::api::{CutSegment, Point2, Polygon, SplitResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Input file: a polygon and, for `split`, the cut segment.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct ShapeFile {
    pub polygon: Vec<[f64; 2]>,
    #[serde(default)]
    pub cut: Option<[[f64; 2]; 2]>,
}

impl ShapeFile {
    pub fn read(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_slice(&bytes).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn polygon(&self) -> Result<Polygon> {
        let pts = self.polygon.iter().map(|&p| to_point(p)).collect();
        Ok(Polygon::new(pts)?)
    }

    pub fn cut(&self) -> Result<CutSegment> {
        let [a, b] = self.cut.context("input has no \"cut\" segment")?;
        Ok(CutSegment::new(to_point(a), to_point(b)))
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Piece {
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
}

/// Output file written by `split` and `random`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SplitReport {
    pub cut: bool,
    pub pieces: Vec<Piece>,
    /// Nearest and farthest intersection from the cut start.
    pub extremes: Option<[[f64; 2]; 2]>,
}

impl SplitReport {
    pub fn from_result(res: &SplitResult, drop_degenerate: bool) -> Self {
        let pieces = res
            .pieces
            .iter()
            .filter(|p| !drop_degenerate || p.len() >= 3)
            .map(|p| Piece {
                vertices: p.vertices().iter().map(|&v| from_point(v)).collect(),
                area: p.area(),
            })
            .collect();
        Self {
            cut: res.is_cut(),
            pieces,
            extremes: res
                .extremes
                .map(|(a, b)| [from_point(a.point), from_point(b.point)]),
        }
    }

    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating output dir {}", parent.display()))?;
            }
        }
        fs::write(path, serde_json::to_vec_pretty(self)?)
            .with_context(|| format!("writing {}", path.display()))
    }
}

#[inline]
fn to_point(p: [f64; 2]) -> Point2 {
    Point2::new(p[0], p[1])
}

#[inline]
fn from_point(p: Point2) -> [f64; 2] {
    [p.x, p.y]
}
