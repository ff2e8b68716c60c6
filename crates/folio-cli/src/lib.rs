//! CLI logic for the Folio layout tool.
//!
//! This module reads a content document, lays it out with the configured
//! options and writes the result as SVG or JSON.

pub mod error_adapter;

mod args;
mod config;

pub use args::{Args, OutputFormat};

use std::fs;

use log::info;

use folio::{FolioError, LayoutBuilder, config::AppConfig};

/// Run the Folio CLI application
///
/// This function processes the input file through the Folio pipeline and
/// writes the rendered layout to the output file.
///
/// # Errors
///
/// Returns `FolioError` for:
/// - File I/O errors
/// - Configuration loading or validation errors
/// - Content parsing errors
/// - Rendering errors
pub fn run(args: &Args) -> Result<(), FolioError> {
    let format = args.output_format();
    info!(
        input_path = args.input,
        output_path = args.output,
        format:?;
        "Processing content"
    );

    let app_config = apply_overrides(config::load_config(args.config.as_ref())?, args);

    let source = fs::read_to_string(&args.input)?;

    let builder = LayoutBuilder::new(app_config);
    let items = builder.prepare(builder.parse(&source)?);
    let layout = builder.layout(&items)?;
    let output = match format {
        OutputFormat::Svg => builder.render_svg(&layout)?,
        OutputFormat::Json => builder.render_json(&layout)?,
    };

    fs::write(&args.output, output)?;

    info!(output_file = args.output; "Layout exported successfully");

    Ok(())
}

/// Applies command-line overrides on top of the loaded configuration.
fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    let mut layout = config.layout().clone();
    if let Some(mode) = args.mode {
        layout = layout.with_mode(mode);
    }
    if let Some(width) = args.width {
        layout = layout.with_container_width(width);
    }
    config.with_layout(layout)
}
