//! Kiln CLI - incremental compilation driver
//!
//! Usage: kiln [OPTIONS] <FILES>...

use std::process::ExitCode;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use kiln::{Compiler, Config, ConfigWarning, ConsoleDiagnostics, DeclFrontend};

mod cli;

use cli::Cli;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (mut config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            (config.with_env_overrides(), warnings)
        }
        None => {
            let cwd = std::env::current_dir().context("cannot determine working directory")?;
            Config::load_or_default(Some(&cwd))?
        }
    };
    print_config_warnings(&warnings);
    cli.apply_to(&mut config);

    let compiler = Compiler::from_config(&config, Rc::new(DeclFrontend::new()));
    let mut diagnostics = ConsoleDiagnostics::stderr();

    match compiler.compile(&cli.files, &mut diagnostics) {
        Ok(outcome) if outcome.succeeded() => {
            tracing::info!(
                units = outcome.units_compiled,
                artifacts = outcome.artifacts.len(),
                warnings = outcome.warnings,
                "done"
            );
            Ok(ExitCode::SUCCESS)
        }
        Ok(outcome) => {
            eprintln!(
                "{} error(s), {} warning(s); no artifacts written after the first error",
                outcome.errors, outcome.warnings
            );
            Ok(ExitCode::FAILURE)
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// `-v` enables debug output, `-vv` trace; `RUST_LOG` wins when set.
fn init_tracing(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default = match verbose {
        0 => "kiln=warn",
        1 => "kiln=debug",
        _ => "kiln=trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .without_time(),
        )
        .with(filter)
        .init();
}

fn print_config_warnings(warnings: &[ConfigWarning]) {
    for warning in warnings {
        let location = match warning.line {
            Some(line) => format!("{}:{}", warning.file.display(), line),
            None => warning.file.display().to_string(),
        };
        match &warning.suggestion {
            Some(suggestion) => eprintln!(
                "Warning: {}: unknown config key '{}' (did you mean '{}'?)",
                location, warning.key, suggestion
            ),
            None => eprintln!("Warning: {}: unknown config key '{}'", location, warning.key),
        }
    }
}
