//! Fluent assertions with AssertJ-style failure messages.
//!
//! An assertion chain starts with [`assert_that`] (or [`assert_that_iter`] for iterators) and
//! continues with the capability traits re-exported from [`prelude`]:
//!
//! - [`EqualityAssertions`]: equality and membership of a single value
//! - [`StrAssertions`]: text containment, affixes and length
//! - [`IterableAssertions`]: containment, ordering, set-equality and sequences
//! - [`ExtractingAssertions`]: pulling values out of collection elements
//!
//! A failed assertion panics with its formatted message:
//!
//! ```should_panic
//! use plate_assert::prelude::*;
//!
//! // panics with:
//! // expected: "bye"
//! // but was : "hi"
//! assert_that("hi").is_equal_to("bye");
//! ```
//!
//! [`Assert::all`] runs a block of assertions and reports every failure at once.

#![doc(issue_tracker_base_url = "https://github.com/plate-rs/plate/issues/")]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod error;
mod extract;
mod iterable;
mod messages;
mod object;
mod representation;
mod string;
mod subject;

pub use error::{AssertionError, AssertionResult};
pub use extract::{ExtractingAssertions, FieldValue, Tuple};
pub use iterable::{Elements, IterableAssertions};
pub use object::EqualityAssertions;
pub use representation::{set_default_representation, Representation};
pub use string::StrAssertions;
pub use subject::{assert_that, assert_that_iter, Assert};

/// Everything needed to write assertions.
pub mod prelude {
    pub use crate::{
        assert_that, assert_that_iter, tuple, Assert, EqualityAssertions, ExtractingAssertions,
        IterableAssertions, StrAssertions,
    };
}

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}
