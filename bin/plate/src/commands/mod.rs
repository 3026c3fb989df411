//! Commands of the `plate` binary.

pub mod list;
pub mod run;
