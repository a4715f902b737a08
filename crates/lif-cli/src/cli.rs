//! CLI argument definitions for the LIF layout tools.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lif",
    version,
    about = "LIF layout tools - convert and inspect VDA 5050 layout files",
    long_about = "Convert and inspect VDA 5050 Layout Interchange Format (LIF) files.\n\n\
                  Re-exports LIF documents and builds ROS route graphs in GeoJSON form."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Editor config file (default: the per-user config location).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Re-export a LIF file with current positions.
    Convert(ConvertArgs),

    /// Export the ROS route graph of one layout as GeoJSON.
    Geo(GeoArgs),

    /// Print a per-layout summary of a LIF file.
    Inspect(InspectArgs),
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// LIF file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output directory (default: the input file's directory).
    #[arg(long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Strip background images from the export.
    #[arg(long = "no-background")]
    pub no_background: bool,

    /// Stamp the export timestamp with the current time.
    #[arg(long = "touch")]
    pub touch: bool,
}

#[derive(Parser)]
pub struct GeoArgs {
    /// LIF file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Layout to export (default: the first layout).
    #[arg(long = "layout", value_name = "ID")]
    pub layout: Option<String>,

    /// Output directory (default: the input file's directory).
    #[arg(long = "output", value_name = "DIR")]
    pub output: Option<PathBuf>,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// LIF file to read.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
