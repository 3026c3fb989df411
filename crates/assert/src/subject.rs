//! The assertion subject and its failure routing.

use crate::{AssertionError, AssertionResult, Representation};
use std::{cell::RefCell, rc::Rc};
use tracing::{debug, trace};

/// Starts an assertion chain on `actual`.
///
/// ```
/// use plate_assert::prelude::*;
///
/// assert_that("hi").is_equal_to("hi").contains("h").has_size(2);
/// assert_that(vec!["one", "two", "three"]).contains(["three", "one"]);
/// ```
pub fn assert_that<S>(actual: S) -> Assert<S> {
    Assert::new(actual)
}

/// Starts an assertion chain on the items of an iterator.
///
/// The iterator is drained into a `Vec` first, so assertions can look at the items more than
/// once.
///
/// ```
/// use plate_assert::prelude::*;
///
/// assert_that_iter("one two three".split(' ')).contains_exactly(["one", "two", "three"]);
/// ```
pub fn assert_that_iter<I: IntoIterator>(items: I) -> Assert<Vec<I::Item>> {
    Assert::new(items.into_iter().collect())
}

/// A value under test.
///
/// Assertions are provided by the capability traits in [`crate::prelude`]. Each assertion
/// either returns `&Self` so further assertions can be chained, or fails. A failure panics
/// with the formatted message, unless the assertion runs inside [`Assert::all`], which
/// collects failures and reports them together.
#[derive(Debug)]
pub struct Assert<S> {
    actual: S,
    description: Option<String>,
    representation: Representation,
    collector: Collector,
}

impl<S> Assert<S> {
    fn new(actual: S) -> Self {
        Self {
            actual,
            description: None,
            representation: Representation::current(),
            collector: Collector::default(),
        }
    }

    /// Names the subject; failure messages are prefixed with `[description] `.
    pub fn described_as(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Overrides how values are printed in failure messages.
    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.representation = representation;
        self
    }

    /// The value under test.
    pub const fn actual(&self) -> &S {
        &self.actual
    }

    /// The description set with [`Assert::described_as`].
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The active representation.
    pub const fn representation(&self) -> &Representation {
        &self.representation
    }

    /// Runs every assertion in `block`, then reports all of their failures at once.
    ///
    /// ```should_panic
    /// use plate_assert::prelude::*;
    ///
    /// // both the `contains` and the `has_size` failure are reported
    /// assert_that("hi").all(|it| {
    ///     it.is_equal_to("hi");
    ///     it.contains("aye");
    ///     it.has_size(1);
    /// });
    /// ```
    #[track_caller]
    pub fn all<F>(&self, block: F) -> &Self
    where
        F: FnOnce(&Self),
    {
        let soft = SoftBlock::start(&self.collector);
        block(self);
        let failures = soft.finish();
        trace!(target: "plate::assert", failures = failures.len(), "soft assertion block finished");
        if !failures.is_empty() {
            self.collector.report(AssertionError::multiple(failures));
        }
        self
    }

    /// Reports `result` if it is an error.
    #[track_caller]
    pub fn check(&self, result: AssertionResult) -> &Self {
        if let Err(error) = result {
            self.fail(error);
        }
        self
    }

    /// Reports a failure of this subject.
    #[track_caller]
    pub fn fail(&self, error: AssertionError) {
        let error = match &self.description {
            Some(description) => error.described_as(description),
            None => error,
        };
        self.collector.report(error);
    }

    /// A subject for a value derived from this one, e.g. extracted fields.
    ///
    /// The derived subject shares the description, the representation and the failure
    /// routing, so its failures land in an enclosing [`Assert::all`] block.
    pub fn derive<T>(&self, actual: T) -> Assert<T> {
        Assert {
            actual,
            description: self.description.clone(),
            representation: self.representation,
            collector: self.collector.clone(),
        }
    }

    /// A subject whose failures are only collected, never raised.
    ///
    /// Used to evaluate per-element requirements; drain it with [`Assert::take_failures`].
    pub(crate) fn detached<T>(&self, actual: T) -> Assert<T> {
        let collector = Collector(Rc::new(RefCell::new(Some(Vec::new()))));
        Assert { actual, description: None, representation: self.representation, collector }
    }

    /// Drains the failures collected by a [detached](Assert::detached) subject.
    pub(crate) fn take_failures(&self) -> Vec<AssertionError> {
        self.collector.finish(None)
    }
}

/// Routes failures either into a panic or into the innermost soft assertion block.
///
/// `None` means failures are raised immediately.
#[derive(Debug, Clone, Default)]
struct Collector(Rc<RefCell<Option<Vec<AssertionError>>>>);

impl Collector {
    /// Starts collecting, returning the state of an enclosing block.
    fn start(&self) -> Option<Vec<AssertionError>> {
        self.0.replace(Some(Vec::new()))
    }

    /// Stops collecting, restoring `previous`, and returns what was collected.
    fn finish(&self, previous: Option<Vec<AssertionError>>) -> Vec<AssertionError> {
        self.0.replace(previous).unwrap_or_default()
    }

    #[track_caller]
    fn report(&self, error: AssertionError) {
        if let Some(collected) = self.0.borrow_mut().as_mut() {
            trace!(target: "plate::assert", %error, "collected soft assertion failure");
            collected.push(error);
            return
        }

        debug!(target: "plate::assert", %error, "assertion failed");
        panic!("{error}");
    }
}

/// An open [`Assert::all`] block.
///
/// Dropping it without [`SoftBlock::finish`], e.g. while unwinding out of the block, restores
/// the enclosing state and discards what was collected.
struct SoftBlock<'a> {
    collector: &'a Collector,
    previous: Option<Option<Vec<AssertionError>>>,
}

impl<'a> SoftBlock<'a> {
    fn start(collector: &'a Collector) -> Self {
        Self { collector, previous: Some(collector.start()) }
    }

    fn finish(mut self) -> Vec<AssertionError> {
        self.collector.finish(self.previous.take().flatten())
    }
}

impl Drop for SoftBlock<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            self.collector.finish(previous);
        }
    }
}
