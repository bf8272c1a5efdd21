// webpdrop/src/cli.rs
use std::path::PathBuf;

use clap::Parser;

/// Drag-and-drop image to WebP converter.
#[derive(Parser, Debug)]
#[command(name = "webpdrop", version, about)]
pub struct Cli {
    /// Files or directories queued for conversion at startup
    pub inputs: Vec<PathBuf>,

    /// Start with the optimize toggle enabled (quality 80 instead of 95)
    #[arg(long)]
    pub optimize: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}
