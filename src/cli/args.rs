//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Append cache-busting query strings to url() references in a stylesheet
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Stylesheet to process
    #[arg(value_hint = clap::ValueHint::FilePath)]
    pub input: PathBuf,

    /// Write the result here instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Config file path (default: url-version.toml, if present)
    #[arg(short = 'C', long, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Query-parameter name to inject
    #[arg(long)]
    pub variable: Option<String>,

    /// Path used to resolve relative asset URLs (default: INPUT)
    #[arg(long, value_hint = clap::ValueHint::FilePath)]
    pub from: Option<PathBuf>,

    /// Leave http(s) and protocol-relative URLs untouched
    #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub skip_external: Option<bool>,

    /// Print how each URL was versioned
    #[arg(short, long)]
    pub verbose: bool,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,
}
