//! pawn-scan: print declaration intel for Pawn source files.
//!
//! Supports two modes:
//!
//! - **stdin mode**: `pawn-scan < file.inc`
//! - **path mode**: `pawn-scan -f summary include/ gamemodes/*.pwn`
//!
//! Directories are walked recursively; files, directories and glob matches
//! are all merged into one intel structure in argument order.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use pawn_scanner::{render, scan, scan_dir_into, scan_file_into, Intel, ScanOptions, WalkOptions};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pawn-scan",
    about = "Extract function, macro and enum declarations from Pawn sources"
)]
struct Cli {
    /// Input files, directories, or glob patterns. If omitted, reads from stdin.
    paths: Vec<String>,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Output format: json (default), summary
    #[arg(short = 'f', long, default_value = "json")]
    format: String,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Leave comments in place; declarations inside them are reported too
    #[arg(long)]
    scan_comments: bool,

    /// File extensions picked up when walking directories
    #[arg(short = 'e', long = "ext", value_delimiter = ',', default_values = ["inc", "pwn"])]
    extensions: Vec<String>,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG takes precedence.
    #[arg(short = 'v', long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let renderer = render::create_renderer(&cli.format, cli.pretty)?;
    let options = ScanOptions {
        scan_comments: cli.scan_comments,
    };

    let intel = if cli.paths.is_empty() {
        stdin_mode(&options)?
    } else {
        let walk = WalkOptions::with_extensions(&cli.extensions);
        path_mode(&cli.paths, &options, &walk)?
    };

    let output = renderer.render(&intel)?;
    match cli.output {
        Some(ref path) => fs::write(path, &output)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{}", output),
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// stdin mode: scan one source text read from stdin.
fn stdin_mode(options: &ScanOptions) -> Result<Intel> {
    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read stdin")?;
    Ok(scan(&input, options))
}

/// path mode: scan every file, directory and glob match into one intel.
fn path_mode(paths: &[String], options: &ScanOptions, walk: &WalkOptions) -> Result<Intel> {
    let mut intel = Intel::default();
    for pattern in paths {
        let path = Path::new(pattern);
        if path.is_dir() {
            intel = scan_dir_into(path, options, walk, intel)?;
            continue;
        }
        if !is_glob_pattern(pattern) {
            intel = scan_file_into(path, options, intel)?;
            continue;
        }
        let matches = expand_glob(pattern)?;
        if matches.is_empty() {
            tracing::warn!("no files matched: {}", pattern);
        }
        for file in matches {
            intel = scan_file_into(&file, options, intel)?;
        }
    }
    Ok(intel)
}

fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand a glob pattern into matching files, sorted for deterministic output.
fn expand_glob(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = glob::glob(pattern)
        .with_context(|| format!("invalid glob pattern: {}", pattern))?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files.dedup();
    Ok(files)
}
