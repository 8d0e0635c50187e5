use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::Outline;

#[derive(Debug, Serialize)]
struct OutlineReport<'a> {
    outlines: Vec<OutlineEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct OutlineEntry<'a> {
    points: &'a [(f64, f64)],
    area: f64,
}

/// Render outlines as `{ "outlines": [ { "points": [[x, y], ...], "area": a } ] }`
pub fn outlines_to_json(outlines: &[Outline]) -> Result<String> {
    let report = OutlineReport {
        outlines: outlines
            .iter()
            .map(|outline| OutlineEntry {
                points: &outline.points,
                area: outline.area(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&report).context("Failed to serialize outlines")
}

pub fn write_json(path: &Path, outlines: &[Outline]) -> Result<()> {
    let json = outlines_to_json(outlines)?;

    let file = File::create(path)
        .with_context(|| format!("Failed to create JSON file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writer.write_all(json.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;

    Ok(())
}
