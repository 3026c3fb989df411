//! Command that prints the case catalogue.

use clap::Parser;
use plate_harness::{cases::catalogue, Expectation};

/// `plate list` command
#[derive(Debug, Parser)]
pub struct Command {
    /// Only list the cases of this suite.
    #[arg(long, value_name = "SUITE")]
    pub group: Option<String>,
}

impl Command {
    /// Execute `list` command
    pub fn execute(self) -> eyre::Result<()> {
        let cases = catalogue().filter(self.group.as_deref(), None);
        for case in &cases.cases {
            let kind = match case.expectation {
                Expectation::Pass(_) => "pass",
                Expectation::Fail { .. } => "fail",
                Expectation::Skip(_) => "skip",
            };
            println!("{}::{} [{kind}]", case.group, case.name);
        }
        Ok(())
    }
}
