//! LIF layout tools CLI.

use std::io::{self, IsTerminal};

use anyhow::Result;
use clap::{ColorChoice, Parser};
use lif_cli::commands::{ConvertOptions, run_convert, run_geo, run_inspect};
use lif_cli::logging::{LogConfig, LogFormat, init_logging};
use lif_cli::summary::{print_inspect, print_written};
use lif_editor::EditorConfig;

mod cli;

use crate::cli::{Cli, Command, LogFormatArg};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(&cli) {
        Ok(()) => 0,
        Err(error) => {
            tracing::error!(error = %error, "command failed");
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => EditorConfig::load_from(path)?,
        None => EditorConfig::load()?,
    };
    match &cli.command {
        Command::Convert(args) => {
            let options = ConvertOptions {
                input: args.input.clone(),
                output_dir: args.output.clone(),
                include_background: !args.no_background,
                touch: args.touch,
            };
            let path = run_convert(&config, &options)?;
            print_written("LIF", &path);
        }
        Command::Geo(args) => {
            let path = run_geo(
                &config,
                &args.input,
                args.layout.as_deref(),
                args.output.as_deref(),
            )?;
            print_written("Route graph", &path);
        }
        Command::Inspect(args) => {
            let result = run_inspect(&config, &args.input)?;
            print_inspect(&result);
        }
    }
    Ok(())
}

/// Build logging configuration from CLI flags.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    let mut config = LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        ..LogConfig::default()
    };
    config.format = match cli.log_format {
        LogFormatArg::Pretty => LogFormat::Pretty,
        LogFormatArg::Compact => LogFormat::Compact,
        LogFormatArg::Json => LogFormat::Json,
    };
    config.log_file = cli.log_file.clone();
    config.with_ansi = match cli.color.color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
    };
    config
}
