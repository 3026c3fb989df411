//! Command that runs the case catalogue.

use clap::Parser;
use eyre::WrapErr;
use plate_assert::{set_default_representation, Representation};
use plate_config::Config;
use plate_harness::{cases::catalogue, categorize_results, print_results, CaseResult};
use std::{panic, path::PathBuf};
use tracing::{debug, info, warn};

/// `plate run` command
#[derive(Debug, Parser)]
pub struct Command {
    /// Only run the cases of this suite.
    #[arg(long, value_name = "SUITE")]
    pub group: Option<String>,

    /// Only run the cases whose name contains this text.
    #[arg(long, value_name = "TEXT")]
    pub filter: Option<String>,

    /// The path to the configuration file to use.
    ///
    /// A missing file is created with the default configuration.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print a line for every passed case.
    #[arg(long)]
    pub show_passed: bool,
}

impl Command {
    /// Execute `run` command
    pub fn execute(self) -> eyre::Result<()> {
        let config = self.load_config()?;

        let representation = Representation::from(config.representation);
        if let Err(current) = set_default_representation(representation) {
            warn!(target: "plate::cli", ?current, "Representation already installed, keeping it");
        }

        let cases = catalogue().filter(self.group.as_deref(), self.filter.as_deref());
        if cases.is_empty() {
            eyre::bail!("no cases match the given group and filter");
        }

        info!(target: "plate::cli", cases = cases.len(), "Running cases");
        let results = with_captured_panics(|| cases.run());

        let failed = report(&results, self.show_passed || config.report.show_passed);
        if failed > 0 {
            eyre::bail!("{failed} case(s) failed");
        }
        Ok(())
    }

    fn load_config(&self) -> eyre::Result<Config> {
        let Some(path) = &self.config else { return Ok(Config::default()) };
        debug!(target: "plate::cli", path = %path.display(), "Loading config");
        Config::from_path(path)
            .wrap_err_with(|| format!("Could not load config file {}", path.display()))
    }
}

/// Prints one report per suite, returning the number of failed cases.
fn report(results: &[CaseResult], show_passed: bool) -> usize {
    let mut failed_total = 0;
    for suite in results.chunk_by(|a, b| a.group == b.group) {
        let (passed, failed, skipped) = categorize_results(suite);
        print_results(suite[0].group, &passed, &failed, &skipped, show_passed);
        failed_total += failed.len();
    }
    failed_total
}

/// Runs `f` with a panic hook that logs panics instead of printing them.
///
/// Every failing assertion under test panics, so the default hook would flood stderr.
fn with_captured_panics<T>(f: impl FnOnce() -> T) -> T {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(|info| {
        debug!(target: "plate::harness", %info, "Captured panic");
    }));
    let output = f();
    panic::set_hook(previous);
    output
}
