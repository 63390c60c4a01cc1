//! Run records written next to every output file.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// What produced an output: build identity, tolerance, and the command inputs.
#[derive(Debug, Serialize)]
pub struct RunRecord {
    pub polycut_version: &'static str,
    pub code_rev: String,
    pub eps: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command: Option<&'static str>,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub params: Value,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
}

impl RunRecord {
    /// Build identity only; printed by `report`.
    pub fn build(eps: f64) -> Self {
        Self {
            polycut_version: polycut::VERSION,
            code_rev: code_rev(),
            eps,
            command: None,
            params: Value::Null,
            outputs: Vec::new(),
        }
    }

    pub fn command(command: &'static str, params: Value, eps: f64) -> Self {
        Self {
            command: Some(command),
            params,
            ..Self::build(eps)
        }
    }

    /// Writes `<stem>.run.json` beside `output` and returns its path.
    pub fn write_beside(mut self, output: &Path) -> Result<PathBuf> {
        let path = record_path(output);
        self.outputs.push(output.display().to_string());
        fs::write(&path, serde_json::to_vec_pretty(&self)?)
            .with_context(|| format!("writing {}", path.display()))?;
        Ok(path)
    }
}

fn record_path(output: &Path) -> PathBuf {
    let stem = output.file_stem().unwrap_or_else(|| "output".as_ref());
    let mut name = stem.to_os_string();
    name.push(".run.json");
    output.with_file_name(name)
}

/// Commit baked in at build time, else from the environment.
fn code_rev() -> String {
    option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty())
        .unwrap_or_else(|| "unknown".to_string())
}
