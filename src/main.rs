use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use hulltrace::config::FileConfig;
use hulltrace::io::{Scene, outlines_to_json, render_svg, write_json, write_svg};
use hulltrace::{Outline, OutlineContext, OutlineParams, TraceMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Svg,
}

/// Trace one closed outline around the union of projected object silhouettes
///
/// Examples:
///   # Outline a scene, print the points as JSON
///   hulltrace scene.json
///
///   # Finer grid, write an SVG preview
///   hulltrace scene.json --step 0.5 --format svg -o outline.svg
///
///   # Outline every separate cluster, with collinear corners removed
///   hulltrace scene.toml --all-regions --simplify 0.01
#[derive(Parser, Debug)]
#[command(name = "hulltrace")]
#[command(version, about, long_about = None)]
struct Args {
    /// Scene file (.json or .toml) listing objects and their projected points
    input: PathBuf,

    /// Path to config file (optional, auto-searches hulltrace.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Grid cell size in screen units (default 1)
    #[arg(long)]
    step: Option<f64>,

    /// Margin around the silhouettes (default: two cells)
    #[arg(long)]
    padding: Option<f64>,

    /// Outline every separate cluster instead of only the first one found
    #[arg(long)]
    all_regions: bool,

    /// Treat each object's points as an already-convex polygon
    #[arg(long)]
    no_hull: bool,

    /// Drop outline corners closer than this to a straight run
    #[arg(long)]
    simplify: Option<f64>,

    /// Refuse grids with more cells than this
    #[arg(long)]
    max_cells: Option<usize>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            let contents = std::fs::read_to_string(config_path)
                .context(format!("Failed to read config file: {:?}", config_path))?;
            toml::from_str(&contents).context("Failed to parse config file")?
        } else {
            bail!("Config file not found: {:?}", config_path);
        }
    } else {
        FileConfig::load().unwrap_or_default()
    };

    let step = args.step.or(file_config.step);
    let padding = args.padding.or(file_config.padding);
    let all_regions = args.all_regions || file_config.all_regions;
    let hull = !args.no_hull && file_config.hull;
    let simplify = args.simplify.or(file_config.simplify);
    let max_cells = args.max_cells.unwrap_or(file_config.max_cells);
    let verbose = args.verbose || file_config.verbose;

    if let Some(eps) = simplify
        && (!eps.is_finite() || eps < 0.0)
    {
        bail!("--simplify must be a finite, non-negative distance (got {})", eps);
    }

    let mode = if all_regions {
        TraceMode::AllRegions
    } else {
        TraceMode::FirstRegion
    };

    let mut params = OutlineParams::default()
        .with_mode(mode)
        .with_max_cells(max_cells);
    params.step = step;
    params.padding = padding;

    if verbose {
        eprintln!("Configuration:");
        eprintln!("  Input: {}", args.input.display());
        eprintln!("  Step: {}", step.map_or("default".to_string(), |s| s.to_string()));
        eprintln!(
            "  Padding: {}",
            padding.map_or("default".to_string(), |p| p.to_string())
        );
        eprintln!("  Mode: {:?}", mode);
        eprintln!("  Convex hull: {}", if hull { "enabled" } else { "disabled" });
        if let Some(eps) = simplify {
            eprintln!("  Simplify: {}", eps);
        }
        eprintln!("  Max cells: {}", max_cells);
        eprintln!();
    }

    let spinner = create_spinner("Loading scene...");
    let start = Instant::now();
    let scene = Scene::load(&args.input).context("Failed to load scene")?;
    let polygons = scene.silhouettes(hull);
    spinner.finish_with_message(format!(
        "Loaded {} objects, {} usable silhouettes [{:.1}s]",
        scene.objects.len(),
        polygons.len(),
        start.elapsed().as_secs_f32()
    ));

    let spinner = create_spinner("Tracing outline...");
    let start = Instant::now();
    let mut ctx = OutlineContext::new();
    let mut outlines = ctx
        .outlines(&polygons, &params)
        .context("Failed to compute outline")?;
    spinner.finish_with_message(format!(
        "Traced {} outline(s) over a {}x{} grid [{:.1}s]",
        outlines.len(),
        ctx.grid().width(),
        ctx.grid().height(),
        start.elapsed().as_secs_f32()
    ));

    if verbose {
        eprintln!("  Occupied cells: {}", ctx.grid().occupied_count());
        for (i, outline) in outlines.iter().enumerate() {
            eprintln!(
                "  Outline {}: {} points, area {:.2}",
                i,
                outline.len(),
                outline.area()
            );
        }
    }

    if let Some(eps) = simplify {
        outlines = outlines
            .iter()
            .map(|outline| outline.simplify(eps))
            .collect::<Vec<Outline>>();
        if verbose {
            let total: usize = outlines.iter().map(|o| o.len()).sum();
            eprintln!("  Simplified to {} points", total);
        }
    }

    match (&args.output, args.format) {
        (Some(path), OutputFormat::Json) => {
            write_json(path, &outlines).context("Failed to write JSON output")?
        }
        (Some(path), OutputFormat::Svg) => {
            write_svg(path, &polygons, &outlines).context("Failed to write SVG output")?
        }
        (None, OutputFormat::Json) => println!("{}", outlines_to_json(&outlines)?),
        (None, OutputFormat::Svg) => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            render_svg(&mut handle, &polygons, &outlines)?;
            handle.flush()?;
        }
    }

    if let Some(ref path) = args.output {
        eprintln!("Output: {}", path.display());
    }
    eprintln!(
        "Done! Total time: {:.1}s",
        total_start.elapsed().as_secs_f32()
    );

    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
