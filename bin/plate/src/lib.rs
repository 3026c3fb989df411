//! `plate` command line interface.
//!
//! Runs the assertion case catalogue of `plate-harness` and prints a report per suite.

#![doc(issue_tracker_base_url = "https://github.com/plate-rs/plate/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod cli;
pub mod commands;
