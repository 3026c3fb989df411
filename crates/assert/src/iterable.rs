//! Assertions on collections.

use crate::{
    messages::{self, ElementFailure},
    Assert, AssertionError,
};
use std::{
    collections::{BTreeSet, HashSet, VecDeque},
    fmt::Debug,
    hash::BuildHasher,
};

/// A collection whose elements can be inspected in iteration order.
pub trait Elements {
    /// The element type.
    type Item;

    /// References to all elements, in iteration order.
    fn elements(&self) -> Vec<&Self::Item>;
}

impl<T> Elements for [T] {
    type Item = T;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T, const N: usize> Elements for [T; N] {
    type Item = T;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T> Elements for Vec<T> {
    type Item = T;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T> Elements for VecDeque<T> {
    type Item = T;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T> Elements for BTreeSet<T> {
    type Item = T;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<T, H: BuildHasher> Elements for HashSet<T, H> {
    type Item = T;

    fn elements(&self) -> Vec<&T> {
        self.iter().collect()
    }
}

impl<E: Elements + ?Sized> Elements for &E {
    type Item = E::Item;

    fn elements(&self) -> Vec<&Self::Item> {
        (**self).elements()
    }
}

/// Assertions available on collections.
///
/// Expected values only need to be comparable with the element type, so a `Vec<String>` can
/// be checked against `&str` literals.
pub trait IterableAssertions {
    /// The element type.
    type Item;

    /// Verifies that every one of `values` is present, in any order.
    fn contains<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        Self::Item: PartialEq<U>;

    /// Verifies that none of `values` is present.
    fn does_not_contain<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        Self::Item: PartialEq<U>;

    /// Verifies that the collection holds exactly `values`, in the same order.
    fn contains_exactly<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        Self::Item: PartialEq<U>;

    /// Verifies that the collection holds exactly `values` with the same multiplicities, in
    /// any order.
    fn contains_exactly_in_any_order<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        Self::Item: PartialEq<U>;

    /// Verifies that the collection holds `values` and nothing else, ignoring order and
    /// duplicates.
    fn contains_only<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        Self::Item: PartialEq<U>;

    /// Verifies that at least one of `values` is present.
    fn contains_any_of<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        Self::Item: PartialEq<U>;

    /// Verifies that `values` appear as a contiguous run, in order.
    fn contains_sequence<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        Self::Item: PartialEq<U>;

    /// Verifies that `values` appear in order, other elements allowed in between.
    fn contains_subsequence<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        Self::Item: PartialEq<U>;

    /// Verifies the number of elements.
    fn has_size(&self, expected: usize) -> &Self;

    /// Verifies that the collection has no elements.
    fn is_empty(&self) -> &Self;

    /// Verifies that the collection has at least one element.
    fn is_not_empty(&self) -> &Self;

    /// Verifies that at least one element passes every assertion in `requirements`.
    fn any_satisfy<F>(&self, requirements: F) -> &Self
    where
        Self::Item: Clone,
        F: Fn(&Assert<Self::Item>);

    /// Verifies that every element passes every assertion in `requirements`.
    fn all_satisfy<F>(&self, requirements: F) -> &Self
    where
        Self::Item: Clone,
        F: Fn(&Assert<Self::Item>);
}

impl<S> IterableAssertions for Assert<S>
where
    S: Elements,
    S::Item: Debug,
{
    type Item = S::Item;

    #[track_caller]
    fn contains<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        S::Item: PartialEq<U>,
    {
        let actual = self.actual().elements();
        let values: Vec<U> = values.into_iter().collect();
        let missing: Vec<&U> =
            values.iter().filter(|value| !actual.iter().any(|a| **a == **value)).collect();
        if missing.is_empty() {
            return self
        }

        let repr = self.representation();
        self.check(Err(messages::should_contain(
            &repr.elements(actual),
            &repr.elements(&values),
            Some(repr.elements(missing).as_str()),
        )))
    }

    #[track_caller]
    fn does_not_contain<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        S::Item: PartialEq<U>,
    {
        let actual = self.actual().elements();
        let values: Vec<U> = values.into_iter().collect();
        let found: Vec<&U> =
            values.iter().filter(|value| actual.iter().any(|a| **a == **value)).collect();
        if found.is_empty() {
            return self
        }

        let repr = self.representation();
        self.check(Err(messages::should_not_contain(
            &repr.elements(actual),
            &repr.elements(&values),
            Some(repr.elements(found).as_str()),
        )))
    }

    #[track_caller]
    fn contains_exactly<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        S::Item: PartialEq<U>,
    {
        let actual = self.actual().elements();
        let values: Vec<U> = values.into_iter().collect();
        let diff = MultisetDiff::new(&actual, &values);
        let repr = self.representation();

        if diff.is_empty() {
            let out_of_order =
                actual.iter().zip(&values).position(|(actual, expected)| **actual != *expected);
            return match out_of_order {
                None => self,
                Some(index) => self.check(Err(messages::should_have_same_order(
                    index,
                    &repr.value(actual[index]),
                    &repr.value(&values[index]),
                ))),
            }
        }

        self.check(Err(messages::should_contain_exactly(
            &repr.elements(actual),
            &repr.elements(&values),
            diff.missing(|missing| repr.elements(missing)).as_deref(),
            diff.unexpected(|unexpected| repr.elements(unexpected)).as_deref(),
        )))
    }

    #[track_caller]
    fn contains_exactly_in_any_order<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        S::Item: PartialEq<U>,
    {
        let actual = self.actual().elements();
        let values: Vec<U> = values.into_iter().collect();
        let diff = MultisetDiff::new(&actual, &values);
        if diff.is_empty() {
            return self
        }

        let repr = self.representation();
        self.check(Err(messages::should_contain_exactly_in_any_order(
            &repr.elements(actual),
            &repr.elements(&values),
            diff.missing(|missing| repr.elements(missing)).as_deref(),
            diff.unexpected(|unexpected| repr.elements(unexpected)).as_deref(),
        )))
    }

    #[track_caller]
    fn contains_only<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        S::Item: PartialEq<U>,
    {
        let actual = self.actual().elements();
        let values: Vec<U> = values.into_iter().collect();
        let missing: Vec<&U> =
            values.iter().filter(|value| !actual.iter().any(|a| **a == **value)).collect();
        let unexpected: Vec<&S::Item> =
            actual.iter().copied().filter(|a| !values.iter().any(|value| **a == *value)).collect();
        if missing.is_empty() && unexpected.is_empty() {
            return self
        }

        let repr = self.representation();
        self.check(Err(messages::should_contain_only(
            &repr.elements(actual.iter().copied()),
            &repr.elements(&values),
            (!missing.is_empty()).then(|| repr.elements(missing)).as_deref(),
            (!unexpected.is_empty()).then(|| repr.elements(unexpected)).as_deref(),
        )))
    }

    #[track_caller]
    fn contains_any_of<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        S::Item: PartialEq<U>,
    {
        let actual = self.actual().elements();
        let values: Vec<U> = values.into_iter().collect();
        if values.iter().any(|value| actual.iter().any(|a| **a == *value)) {
            return self
        }

        let repr = self.representation();
        self.check(Err(messages::should_contain_any_of(
            &repr.elements(actual),
            &repr.elements(&values),
        )))
    }

    #[track_caller]
    fn contains_sequence<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        S::Item: PartialEq<U>,
    {
        let actual = self.actual().elements();
        let values: Vec<U> = values.into_iter().collect();
        let found = values.is_empty() ||
            actual.windows(values.len()).any(|window| {
                window.iter().zip(&values).all(|(actual, expected)| **actual == *expected)
            });
        if found {
            return self
        }

        let repr = self.representation();
        self.check(Err(messages::should_contain_sequence(
            &repr.elements(actual),
            &repr.elements(&values),
        )))
    }

    #[track_caller]
    fn contains_subsequence<U, I>(&self, values: I) -> &Self
    where
        I: IntoIterator<Item = U>,
        U: Debug,
        S::Item: PartialEq<U>,
    {
        let actual = self.actual().elements();
        let values: Vec<U> = values.into_iter().collect();
        let mut remaining = values.iter().peekable();
        for element in &actual {
            if remaining.peek().is_some_and(|expected| **element == **expected) {
                remaining.next();
            }
        }
        if remaining.peek().is_none() {
            return self
        }

        let repr = self.representation();
        self.check(Err(messages::should_contain_subsequence(
            &repr.elements(actual),
            &repr.elements(&values),
        )))
    }

    #[track_caller]
    fn has_size(&self, expected: usize) -> &Self {
        let actual = self.actual().elements();
        if actual.len() == expected {
            return self
        }
        let size = actual.len();
        self.check(Err(messages::should_have_size(
            &self.representation().elements(actual),
            expected,
            size,
        )))
    }

    #[track_caller]
    fn is_empty(&self) -> &Self {
        let actual = self.actual().elements();
        if actual.is_empty() {
            return self
        }
        self.check(Err(messages::should_be_empty(&self.representation().elements(actual))))
    }

    #[track_caller]
    fn is_not_empty(&self) -> &Self {
        if !self.actual().elements().is_empty() {
            return self
        }
        self.check(Err(messages::should_not_be_empty()))
    }

    #[track_caller]
    fn any_satisfy<F>(&self, requirements: F) -> &Self
    where
        S::Item: Clone,
        F: Fn(&Assert<S::Item>),
    {
        let actual = self.actual().elements();
        let mut failures = Vec::with_capacity(actual.len());
        for (index, element) in actual.iter().copied().enumerate() {
            match self.evaluate(index, element, &requirements) {
                None => return self,
                Some(failure) => failures.push(failure),
            }
        }

        self.check(Err(messages::should_have_any_satisfying(
            &self.representation().elements(actual),
            &failures,
        )))
    }

    #[track_caller]
    fn all_satisfy<F>(&self, requirements: F) -> &Self
    where
        S::Item: Clone,
        F: Fn(&Assert<S::Item>),
    {
        let actual = self.actual().elements();
        let failures: Vec<ElementFailure> = actual
            .iter()
            .copied()
            .enumerate()
            .filter_map(|(index, element)| self.evaluate(index, element, &requirements))
            .collect();
        if failures.is_empty() {
            return self
        }

        self.check(Err(messages::should_have_all_satisfying(
            &self.representation().elements(actual),
            &failures,
        )))
    }
}

impl<S> Assert<S> {
    /// Runs `requirements` against one element, returning its failures if it did not pass.
    fn evaluate<T, F>(&self, index: usize, element: &T, requirements: &F) -> Option<ElementFailure>
    where
        T: Clone + Debug,
        F: Fn(&Assert<T>),
    {
        let subject = self.detached(element.clone());
        requirements(&subject);
        let failures = subject.take_failures();
        (!failures.is_empty()).then(|| ElementFailure {
            index,
            element: self.representation().value(element),
            error: AssertionError::multiple(failures),
        })
    }
}

/// Elements left over after pairing actual and expected elements one to one.
struct MultisetDiff<'a, T, U> {
    missing: Vec<&'a U>,
    unexpected: Vec<&'a T>,
}

impl<'a, T: PartialEq<U>, U> MultisetDiff<'a, T, U> {
    fn new(actual: &[&'a T], expected: &'a [U]) -> Self {
        let mut matched = vec![false; actual.len()];
        let mut missing = Vec::new();
        for value in expected {
            let slot = actual
                .iter()
                .zip(matched.iter_mut())
                .find(|(element, taken)| !**taken && ***element == *value);
            match slot {
                Some((_, taken)) => *taken = true,
                None => missing.push(value),
            }
        }
        let unexpected = actual
            .iter()
            .zip(&matched)
            .filter(|(_, taken)| !**taken)
            .map(|(element, _)| *element)
            .collect();
        Self { missing, unexpected }
    }

    fn is_empty(&self) -> bool {
        self.missing.is_empty() && self.unexpected.is_empty()
    }

    fn missing(&self, render: impl FnOnce(&[&'a U]) -> String) -> Option<String> {
        (!self.missing.is_empty()).then(|| render(&self.missing))
    }

    fn unexpected(&self, render: impl FnOnce(&[&'a T]) -> String) -> Option<String> {
        (!self.unexpected.is_empty()).then(|| render(&self.unexpected))
    }
}
