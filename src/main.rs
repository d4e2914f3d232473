use anyhow::{Context, Result, bail};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use tangentpath::config::FileConfig;
use tangentpath::output::{OutputFormat, render_grid, write_report, write_report_file};
use tangentpath::planner::{Plan, Planner};
use tangentpath::scene::{Scene, load_scene, validate_scene};
use tangentpath::{Point, SearchConfig};

/// Find a short collision-free route around polygonal obstacles
///
/// Examples:
///   # Plan across the built-in demo layout and draw it
///   tangentpath --grid
///
///   # Plan across a scene file with new endpoints
///   tangentpath --scene office.toml --start 0,0 --end 42,17
///
///   # Write a JSON report with a tighter search budget
///   tangentpath --scene office.json --max-nodes 50000 --format json -o plan.json
///
///   # Use a config file
///   tangentpath --config my-settings.toml
#[derive(Parser, Debug)]
#[command(name = "tangentpath")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to config file (optional, auto-searches tangentpath.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Scene file (.toml or .json); defaults to the built-in demo layout
    #[arg(long)]
    scene: Option<PathBuf>,

    /// Start point as X,Y (overrides the scene)
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    start: Option<Point>,

    /// End point as X,Y (overrides the scene)
    #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
    end: Option<Point>,

    /// Deepest tree level the search may expand
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_depth: Option<u64>,

    /// Total route-tree nodes the search may build
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_nodes: Option<u64>,

    /// Take obstacle vertex order as given instead of making it counter-clockwise
    #[arg(long)]
    keep_winding: bool,

    /// Report format
    #[arg(long)]
    format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Draw the scene and the chosen path on the integer grid
    #[arg(long)]
    grid: bool,

    /// Grid width in cells
    #[arg(long)]
    grid_width: Option<u32>,

    /// Grid height in cells
    #[arg(long)]
    grid_height: Option<u32>,

    /// Enable verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let x: f64 = x
        .trim()
        .parse()
        .map_err(|e| format!("invalid x coordinate '{}': {}", x.trim(), e))?;
    let y: f64 = y
        .trim()
        .parse()
        .map_err(|e| format!("invalid y coordinate '{}': {}", y.trim(), e))?;
    Ok(Point::new(x, y))
}

fn main() -> Result<()> {
    let args = Args::parse();
    let total_start = Instant::now();

    let file_config: FileConfig = if let Some(ref config_path) = args.config {
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

    let scene_path = args.scene.clone().or_else(|| file_config.scene.clone());
    let start = args.start.or(file_config.start);
    let end = args.end.or(file_config.end);
    let search_config = SearchConfig::default()
        .with_max_depth(
            args.max_depth
                .map(|d| d as usize)
                .unwrap_or(file_config.max_depth),
        )
        .with_max_nodes(
            args.max_nodes
                .map(|n| n as usize)
                .unwrap_or(file_config.max_nodes),
        )
        .with_normalize_winding(!args.keep_winding && file_config.normalize_winding);
    let format = args.format.unwrap_or(file_config.format);
    let output = args.output.clone().or_else(|| file_config.output.clone());
    let grid = args.grid || file_config.grid;
    let grid_width = args.grid_width.unwrap_or(file_config.grid_width);
    let grid_height = args.grid_height.unwrap_or(file_config.grid_height);
    let verbose = args.verbose || file_config.verbose;

    let mut scene = match scene_path {
        Some(ref path) => load_scene(path)
            .with_context(|| format!("Failed to load scene: {}", path.display()))?,
        None => Scene::demo(),
    };
    if let Some(start) = start {
        scene = scene.with_start(start);
    }
    if let Some(end) = end {
        scene = scene.with_end(end);
    }

    if verbose {
        eprintln!("Configuration:");
        match scene_path {
            Some(ref path) => eprintln!("  Scene: {}", path.display()),
            None => eprintln!("  Scene: built-in demo"),
        }
        eprintln!("  Obstacles: {}", scene.obstacles.len());
        eprintln!("  Start: {}", scene.start);
        eprintln!("  End: {}", scene.end);
        eprintln!("  Max depth: {}", search_config.max_depth);
        eprintln!("  Max nodes: {}", search_config.max_nodes);
        eprintln!(
            "  Winding: {}",
            if search_config.normalize_winding {
                "normalized to counter-clockwise"
            } else {
                "as given"
            }
        );
        eprintln!("  Format: {:?}", format);
        if let Some(ref path) = output {
            eprintln!("  Output: {}", path.display());
        }
        eprintln!();
    }

    let validation = validate_scene(&scene);
    for warning in &validation.warnings {
        eprintln!("Warning: {}", warning);
    }
    if verbose {
        eprintln!("{}", validation.summary());
    }
    if !validation.is_valid() {
        bail!("Scene has non-finite coordinates; refusing to plan");
    }

    let spinner = create_spinner("Searching routes...");
    let start_time = Instant::now();
    let plan = Planner::new(search_config)
        .plan(&scene.obstacles, scene.start, scene.end)
        .context("Route search failed")?;
    spinner.finish_with_message(format!(
        "Explored {} routes over {} nodes [{:.1}s]",
        plan.routes,
        plan.nodes,
        start_time.elapsed().as_secs_f32()
    ));

    match output {
        Some(ref path) => {
            write_report_file(path, &plan, format).context("Failed to write report")?;
            if verbose {
                eprintln!("Wrote report to {}", path.display());
            }
        }
        None => write_report(std::io::stdout().lock(), &plan, format)
            .context("Failed to write report")?,
    }

    if grid {
        print_grid(&scene, &plan, grid_width, grid_height, format, output.is_none())?;
    }

    if verbose {
        eprintln!(
            "Done! Total time: {:.1}s",
            total_start.elapsed().as_secs_f32()
        );
    }

    Ok(())
}

/// Grid goes to stdout unless a JSON report already occupies it
fn print_grid(
    scene: &Scene,
    plan: &Plan,
    width: u32,
    height: u32,
    format: OutputFormat,
    report_on_stdout: bool,
) -> Result<()> {
    let grid = render_grid(width, height, &scene.obstacles, scene.start, scene.end, &plan.path);

    if report_on_stdout && format == OutputFormat::Json {
        eprint!("{}", grid);
    } else {
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout)?;
        stdout.write_all(grid.as_bytes())?;
        writeln!(stdout)?;
        writeln!(
            stdout,
            "S start  E end  + obstacle vertex  # obstacle  * path"
        )?;
    }
    Ok(())
}

fn create_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}
