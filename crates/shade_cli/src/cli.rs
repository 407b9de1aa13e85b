//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Theme configuration record for utility-class stylesheet builds
#[derive(Parser)]
#[command(name = "shade", about, version, propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Theme config file (default: $SHADE_CONFIG, else shade.toml / shade.json found upward)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format: text (human-readable) or json (machine-readable)
    #[arg(short, long, global = true, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Colored terminal output for humans
    #[default]
    Text,
    /// Structured JSON for machine consumption
    Json,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ExportFormat {
    /// CSS custom properties on :root
    #[default]
    Css,
    Json,
    Toml,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse and validate the theme config
    Check,
    /// Print the theme config record
    Show,
    /// Look up one color, e.g. `shade color blue 600`
    Color {
        /// Color family (e.g. blue)
        family: String,
        /// Shade key (e.g. 600, or DEFAULT)
        shade: String,
        /// Look in the resolved palette (defaults + extension) instead of theme.extend.colors
        #[arg(long)]
        resolved: bool,
    },
    /// Show the resolved palette: base colors with the extension merged over them
    Palette,
    /// Scan content files for color utilities and plan the build
    Scan {
        /// Directory the content globs are relative to (default: the config file's directory)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Stop after this many files
        #[arg(long)]
        max_files: Option<usize>,
        /// Directory or file names to skip (repeatable)
        #[arg(short, long)]
        exclude: Vec<String>,
    },
    /// Write the resolved palette to stdout
    Export {
        #[arg(short, long, default_value = "css")]
        format: ExportFormat,
    },
    /// Create a theme config with the project defaults
    Init {
        /// Where to write it (default: ./shade.toml)
        #[arg(long)]
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
