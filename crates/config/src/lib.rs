//! Standalone crate for plate configuration types.

#![doc(issue_tracker_base_url = "https://github.com/plate-rs/plate/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

pub mod config;
pub use config::{Config, ConfigError, ReportConfig, RepresentationConfig};
