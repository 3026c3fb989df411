//! CLI definition and entrypoint to executable

use crate::commands::{list, run};
use clap::{ArgAction, Args, Parser, Subcommand};
use plate_tracing::{
    tracing::metadata::LevelFilter,
    ColorMode, FileInfo, LayerInfo, LogFormat, PlateTracer, Tracer, TracerHandle,
    PLATE_LOG_FILE_NAME,
};
use std::path::PathBuf;

/// Parse CLI options, set up logging and run the chosen command.
pub fn run() -> eyre::Result<()> {
    let opt = Cli::parse();

    let _guard = opt.logs.init_tracing(&opt.verbosity)?;

    match opt.command {
        Commands::Run(command) => command.execute(),
        Commands::List(command) => command.execute(),
    }
}

/// Commands to be executed
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the case catalogue and report the results.
    #[command(name = "run")]
    Run(run::Command),
    /// List suites and their cases without running them.
    #[command(name = "list")]
    List(list::Command),
}

/// The `plate` command line.
#[derive(Debug, Parser)]
#[command(author, version, about = "Fluent assertion demonstrations", long_about = None)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    logs: Logs,

    #[command(flatten)]
    verbosity: Verbosity,
}

#[derive(Debug, Args)]
#[command(next_help_heading = "Logging")]
struct Logs {
    /// The format to use for logs written to stdout.
    #[arg(
        long = "log.format",
        value_name = "FORMAT",
        global = true,
        default_value_t = LogFormat::Terminal,
        value_enum
    )]
    format: LogFormat,

    /// Additional filter directives for logs written to stdout.
    #[arg(long = "log.filter", value_name = "FILTER", global = true, default_value = "")]
    filter: String,

    /// The directory to put the log file in. No log file is written if unset.
    #[arg(long = "log.file.directory", value_name = "PATH", global = true)]
    file_directory: Option<PathBuf>,

    /// The filter to use for logs written to the log file.
    #[arg(
        long = "log.file.filter",
        value_name = "FILTER",
        global = true,
        default_value = "debug"
    )]
    file_filter: String,

    /// Sets whether or not the formatter emits ANSI terminal escape codes.
    #[arg(
        long,
        value_name = "COLOR",
        global = true,
        default_value_t = ColorMode::Auto,
        value_enum
    )]
    color: ColorMode,
}

impl Logs {
    /// Installs the global subscriber; the returned handle keeps the log file writer alive.
    fn init_tracing(&self, verbosity: &Verbosity) -> eyre::Result<TracerHandle> {
        let mut tracer = PlateTracer::new().with_stdout(LayerInfo::new(
            self.format,
            verbosity.directive().to_string(),
            self.filter.clone(),
            self.color,
        ));

        if let Some(directory) = &self.file_directory {
            let info = LayerInfo::new(
                LogFormat::Terminal,
                LevelFilter::DEBUG.to_string(),
                self.file_filter.clone(),
                ColorMode::Never,
            );
            tracer = tracer.with_file(info, FileInfo::new(directory.clone(), PLATE_LOG_FILE_NAME));
        }

        tracer.init()
    }
}

#[derive(Debug, Args)]
#[command(next_help_heading = "Display")]
struct Verbosity {
    /// Set the minimum log level.
    ///
    /// -v      Errors
    /// -vv     Warnings
    /// -vvv    Info
    /// -vvvv   Debug
    /// -vvvvv  Traces (warning: very verbose!)
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true,
        default_value_t = 3,
        verbatim_doc_comment,
        help_heading = "Display"
    )]
    verbosity: u8,

    /// Silence all log output.
    #[arg(long, alias = "silent", short = 'q', global = true, help_heading = "Display")]
    quiet: bool,
}

impl Verbosity {
    /// Get the corresponding level filter for the given verbosity, or `OFF` if the verbosity
    /// corresponds to silent.
    fn directive(&self) -> LevelFilter {
        if self.quiet {
            return LevelFilter::OFF
        }
        match self.verbosity.saturating_sub(1) {
            0 => LevelFilter::ERROR,
            1 => LevelFilter::WARN,
            2 => LevelFilter::INFO,
            3 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_run() {
        let cli = Cli::try_parse_from([
            "plate",
            "run",
            "--group",
            "iterable",
            "--filter",
            "sequence",
            "--show-passed",
        ])
        .unwrap();
        let Commands::Run(command) = cli.command else { panic!("expected run command") };
        assert_eq!(command.group.as_deref(), Some("iterable"));
        assert_eq!(command.filter.as_deref(), Some("sequence"));
        assert!(command.show_passed);
    }

    #[test]
    fn parse_log_args() {
        let cli =
            Cli::try_parse_from(["plate", "list", "--log.format", "json", "--color", "never", "-q"])
                .unwrap();
        assert_eq!(cli.logs.format, LogFormat::Json);
        assert_eq!(cli.logs.color, ColorMode::Never);
        assert_eq!(cli.verbosity.directive(), LevelFilter::OFF);
    }

    #[test]
    fn verbosity_levels() {
        let directive = |args: &[&str]| {
            Cli::try_parse_from(["plate", "list"].iter().chain(args)).unwrap().verbosity.directive()
        };
        assert_eq!(directive(&[]), LevelFilter::INFO);
        assert_eq!(directive(&["-v"]), LevelFilter::ERROR);
        assert_eq!(directive(&["-vvvv"]), LevelFilter::DEBUG);
        assert_eq!(directive(&["-vvvvvv"]), LevelFilter::TRACE);
    }
}
