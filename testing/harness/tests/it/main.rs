#![allow(missing_docs)]
//! Root module for test modules, so that the tests are built into a single binary.

mod assertions;
mod catalogue;
mod harness;

const fn main() {}
