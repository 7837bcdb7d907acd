//! Convex CLI
//!
//! Drive a convex bar without a window: simulate taps, dump curve paths and
//! check configuration files.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod simulate;

use convex_bar::{BarConfig, CurvePathGenerator, TabStyle};
use convex_core::Size;
use simulate::Simulation;

#[derive(Parser)]
#[command(name = "convex")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convex bottom bar driver", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a tap sequence and print the curve position per frame
    Simulate {
        /// Bar configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the configured style (fixed, fixed_circle, react, react_circle)
        #[arg(short, long)]
        style: Option<String>,

        /// Number of tabs
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,

        /// Bar width
        #[arg(short, long, default_value = "360")]
        width: f32,

        /// Frames per second
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Tab indices to tap, in order
        #[arg(value_delimiter = ',')]
        taps: Vec<usize>,
    },

    /// Print the SVG path data of a curve
    Path {
        /// Curve center as a fraction of the bar width
        #[arg(default_value = "0.5")]
        fraction: f32,

        /// Bar width
        #[arg(short, long, default_value = "360")]
        width: f32,

        /// Bar configuration file supplying the curve dimensions
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the whole bar outline instead of the bump alone
        #[arg(long)]
        outline: bool,
    },

    /// Validate a bar configuration file
    Check {
        /// Configuration file (TOML)
        config: PathBuf,
    },

    /// Print the default configuration as TOML
    Defaults,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("convex=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("convex=info"))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::Simulate {
            config,
            style,
            count,
            width,
            fps,
            json,
            taps,
        } => cmd_simulate(
            config.as_deref(),
            style.as_deref(),
            count,
            width,
            fps,
            json,
            &taps,
        ),
        Commands::Path {
            fraction,
            width,
            config,
            outline,
        } => cmd_path(fraction, width, config.as_deref(), outline),
        Commands::Check { config } => cmd_check(&config),
        Commands::Defaults => cmd_defaults(),
    }
}

fn load_config(path: Option<&Path>) -> Result<BarConfig> {
    match path {
        Some(path) => BarConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(BarConfig::default()),
    }
}

fn parse_style(name: &str) -> Result<TabStyle> {
    let style = match name {
        "fixed" => TabStyle::Fixed,
        "fixed_circle" => TabStyle::FixedCircle,
        "react" => TabStyle::React,
        "react_circle" => TabStyle::ReactCircle,
        _ => anyhow::bail!(
            "Invalid style '{}'. Valid styles: fixed, fixed_circle, react, react_circle",
            name
        ),
    };
    Ok(style)
}

fn cmd_simulate(
    config: Option<&Path>,
    style: Option<&str>,
    count: usize,
    width: f32,
    fps: u32,
    json: bool,
    taps: &[usize],
) -> Result<()> {
    let mut config = load_config(config)?;
    if let Some(style) = style {
        config.style = parse_style(style)?;
    }
    info!(
        "Simulating {} taps on {} tabs ({:?}, {} fps)",
        taps.len(),
        count,
        config.style,
        fps
    );

    let simulation = Simulation {
        config,
        count,
        width,
        fps,
    };
    let samples = simulation.run(taps)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&samples)?);
        return Ok(());
    }

    println!(
        "{:>10}  {:>4}  {:>6}  {:>6}  {:>8}  animating",
        "time_ms", "tap", "active", "convex", "fraction"
    );
    for sample in &samples {
        let tap = sample
            .tap
            .map(|t| t.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:>10.2}  {:>4}  {:>6}  {:>6}  {:>8.4}  {}",
            sample.time_ms,
            tap,
            sample.active,
            sample.convex,
            sample.center_fraction,
            sample.animating
        );
    }
    Ok(())
}

fn cmd_path(fraction: f32, width: f32, config: Option<&Path>, outline: bool) -> Result<()> {
    let config = load_config(config)?;
    let shape = CurvePathGenerator::new(config.curve_size, config.curve_height, config.top);

    let path = if outline {
        shape.bar_outline(
            fraction,
            Size::new(width, config.height),
            config.corner_radius,
        )
    } else {
        shape.generate(fraction, width)
    };
    println!("{}", path.to_svg_data());
    Ok(())
}

fn cmd_check(path: &Path) -> Result<()> {
    let config = load_config(Some(path))?;
    config
        .validate()
        .with_context(|| format!("{} is not a valid bar config", path.display()))?;

    if config.style.is_fixed_center() == Some(true) {
        info!("Fixed-center style: the tab count must be odd");
    }
    println!(
        "{}: ok ({:?}, {} ms transitions)",
        path.display(),
        config.style,
        config.transition_ms
    );
    Ok(())
}

fn cmd_defaults() -> Result<()> {
    let text = toml::to_string_pretty(&BarConfig::default())
        .context("failed to serialize default config")?;
    print!("{}", text);
    Ok(())
}
