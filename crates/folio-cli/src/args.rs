//! Command-line argument definitions for the Folio CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, the output format,
//! configuration file selection, layout overrides and logging verbosity.

use std::path::Path;

use clap::{Parser, ValueEnum};

use folio::config::LayoutMode;

/// Command-line arguments for the Folio layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input content JSON file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Container width in pixels, overriding the configuration
    #[arg(short, long)]
    pub width: Option<f64>,

    /// Layout mode (simple, pattern), overriding the configuration
    #[arg(short, long)]
    pub mode: Option<LayoutMode>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The requested format, or the one implied by the output path.
    pub fn output_format(&self) -> OutputFormat {
        self.format
            .unwrap_or_else(|| OutputFormat::from_path(&self.output))
    }
}

/// Documents the CLI can write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// SVG preview
    Svg,
    /// JSON placements
    Json,
}

impl OutputFormat {
    /// `.json` files get JSON, everything else SVG.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Svg,
        }
    }
}
