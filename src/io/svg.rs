use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::domain::{Outline, Polygon};
use crate::geometry::Bounds;

/// Blank space around the drawing, in screen units
const MARGIN: f64 = 4.0;

/// Write silhouettes and their outlines as a standalone SVG document.
///
/// Silhouettes are drawn as translucent fills, outlines as closed strokes on
/// top. The view box covers everything plus a small margin.
pub fn write_svg(path: &Path, polygons: &[Polygon], outlines: &[Outline]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create SVG file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    render_svg(&mut writer, polygons, outlines)?;
    writer.flush()?;

    Ok(())
}

pub fn render_svg<W: Write>(
    writer: &mut W,
    polygons: &[Polygon],
    outlines: &[Outline],
) -> Result<()> {
    let bounds = drawing_bounds(polygons, outlines).unwrap_or(Bounds {
        min_x: 0.0,
        max_x: 0.0,
        min_y: 0.0,
        max_y: 0.0,
    });

    writeln!(
        writer,
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="{} {} {} {}">"#,
        bounds.min_x - MARGIN,
        bounds.min_y - MARGIN,
        bounds.width() + 2.0 * MARGIN,
        bounds.height() + 2.0 * MARGIN
    )?;

    for polygon in polygons {
        writeln!(
            writer,
            r##"  <polygon points="{}" fill="#4a90d9" fill-opacity="0.3" stroke="none"/>"##,
            format_points(&polygon.points)
        )?;
    }

    for outline in outlines.iter().filter(|o| !o.is_empty()) {
        writeln!(
            writer,
            r##"  <polygon points="{}" fill="none" stroke="#f5a623" stroke-width="0.25"/>"##,
            format_points(&outline.points)
        )?;
    }

    writeln!(writer, "</svg>")?;

    Ok(())
}

fn drawing_bounds(polygons: &[Polygon], outlines: &[Outline]) -> Option<Bounds> {
    let mut bounds = Bounds::from_polygons(polygons);

    for outline in outlines {
        match bounds.as_mut() {
            Some(b) => b.expand(&outline.points),
            None => bounds = outline.bounds(),
        }
    }

    bounds
}

fn format_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|&(x, y)| format!("{},{}", x, y))
        .collect::<Vec<_>>()
        .join(" ")
}
