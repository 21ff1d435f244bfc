//! Dropline demo CLI
//!
//! Builds two 3D curves with vertical drop lines down to a base plane and
//! writes the result as a JSON scene for a plotting frontend.
//!
//! # Usage
//!
//! ```bash
//! # Default parameters, writes dropline_scene.json
//! dropline-demo
//!
//! # Custom output path and parameters
//! dropline-demo --config demo.json figure.json
//! ```

mod config;
mod figure;

use std::path::{Path, PathBuf};
use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::DemoConfig;

const DEFAULT_OUTPUT: &str = "dropline_scene.json";

fn print_usage() {
    eprintln!(
        r#"Dropline demo

USAGE:
    dropline-demo [--config <config.json>] [output.json]

ARGS:
    [output.json]   Output path (defaults to {DEFAULT_OUTPUT})

OPTIONS:
    --config        JSON file with eps, drop_count, x_start, x_stop, x_step
    --help          Show this help message

ENVIRONMENT:
    RUST_LOG        Log filter (defaults to info)
"#
    );
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let mut config_path: Option<PathBuf> = None;
    let mut output_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            "--config" => match args.next() {
                Some(path) => config_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("Error: --config requires a file path\n");
                    print_usage();
                    process::exit(1);
                }
            },
            _ if output_path.is_none() && !arg.starts_with('-') => {
                output_path = Some(PathBuf::from(arg));
            }
            _ => {
                eprintln!("Error: Unexpected argument '{arg}'\n");
                print_usage();
                process::exit(1);
            }
        }
    }

    let output_path = output_path.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
    if let Err(e) = run(config_path.as_deref(), &output_path) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(config_path: Option<&Path>, output_path: &Path) -> dropline_core::Result<()> {
    let config = match config_path {
        Some(path) => {
            info!(path = %path.display(), "loading config");
            DemoConfig::load(path)?
        }
        None => DemoConfig::default(),
    };

    let scene = figure::build_scene(&config)?;
    scene.write_json(output_path)?;

    info!(
        lines = scene.lines.len(),
        vertices = scene.total_vertices(),
        output = %output_path.display(),
        "scene exported"
    );
    if let Some(bounds) = scene.bounds() {
        info!(
            center = ?bounds.center(),
            extents = ?bounds.extents(),
            "scene bounds"
        );
    }
    Ok(())
}
