//! CLI entry point for idguard.
//!
//! This module is intentionally thin: it handles argument parsing, logging setup, output,
//! and exit codes. All business logic lives in the `idguard-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use idguard_app::{
    CheckInput, ExplainOutput, render_annotations, render_text, run_check, run_explain,
    runtime_error_report, serialize_report, verdict_exit_code,
};
use idguard_render::Palette;
use idguard_settings::{DEFAULT_EXCLUSION_FILE, Overrides, resolve_settings};
use std::io::{IsTerminal, Write};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "idguard",
    version,
    about = "Logical-ID naming compliance checker for infrastructure-as-code templates"
)]
struct Cli {
    /// Exclusion list: one logical ID per line, resolved from the working directory.
    #[arg(long, global = true, default_value = DEFAULT_EXCLUSION_FILE)]
    exclusions: Utf8PathBuf,

    /// When to color text output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Increase log verbosity on stderr (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check every template under ROOT (the default command).
    Check {
        /// Directory to scan.
        root: Option<Utf8PathBuf>,

        /// Output format.
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Explain a check_id or code with remediation guidance.
    Explain {
        /// The check_id (e.g., "template.logical_id") or code (e.g., "invalid_resource_type").
        identifier: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Github,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn palette(self) -> Palette {
        let enabled = match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        };
        if enabled {
            Palette::ansi()
        } else {
            Palette::plain()
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.cmd {
        Some(Commands::Explain { ref identifier }) => cmd_explain(identifier),
        Some(Commands::Check { ref root, format }) => cmd_check(&cli, root.clone(), format),
        None => cmd_check(&cli, None, OutputFormat::Text),
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false)
                .compact(),
        )
        .try_init();
}

fn cmd_check(cli: &Cli, root: Option<Utf8PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let settings = resolve_settings(Overrides {
        root,
        exclusion_file: Some(cli.exclusions.clone()),
    });
    tracing::debug!(root = %settings.root, exclusions = %settings.exclusion_file, "resolved settings");

    let result = (|| -> anyhow::Result<i32> {
        let output = run_check(CheckInput { settings })?;
        let report = &output.report;

        let lines = match format {
            OutputFormat::Text => render_text(report, &cli.color.palette()),
            OutputFormat::Json => {
                let data = serialize_report(report)?;
                vec![String::from_utf8(data).context("report is not UTF-8")?]
            }
            OutputFormat::Github => render_annotations(report),
        };
        write_lines(&lines).context("write output")?;

        Ok(verdict_exit_code(report.verdict))
    })();

    match result {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
            Ok(())
        }
        Err(err) => {
            if format == OutputFormat::Json {
                let report = runtime_error_report(cli.exclusions.as_str(), &format!("{err:#}"));
                if let Ok(data) = serialize_report(&report) {
                    let _ = write_lines(&[String::from_utf8_lossy(&data).into_owned()]);
                }
            }
            eprintln!("idguard error: {err:#}");
            std::process::exit(1);
        }
    }
}

fn write_lines(lines: &[String]) -> std::io::Result<()> {
    let mut out = std::io::stdout().lock();
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}

fn cmd_explain(identifier: &str) -> anyhow::Result<()> {
    match run_explain(identifier) {
        ExplainOutput::Found(exp) => {
            print!("{}", idguard_app::format_explanation(&exp));
            Ok(())
        }
        ExplainOutput::NotFound {
            identifier,
            available_check_ids,
            available_codes,
        } => {
            eprint!(
                "{}",
                idguard_app::format_not_found(&identifier, available_check_ids, available_codes)
            );
            std::process::exit(1);
        }
    }
}
