//! Extraction of values out of collection elements.
//!
//! Values can be pulled out of each element either with an accessor closure, keeping their
//! type, or by field name. Field names are resolved on the element's `serde` serialization,
//! so any `Serialize` record works; nested fields use dotted paths such as `type.course`.

use crate::{iterable::Elements, messages, Assert};
use serde::Serialize;
use serde_json::Value;
use std::fmt::{self, Debug, Display};

/// A value extracted by field name.
///
/// Compares equal to anything whose serialization is the same JSON value, so extracted fields
/// can be checked against plain literals or against typed records.
#[derive(Clone)]
pub struct FieldValue(Value);

impl FieldValue {
    /// Wraps a JSON value.
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// The underlying JSON value.
    pub const fn as_json(&self) -> &Value {
        &self.0
    }
}

impl<T: Serialize + ?Sized> PartialEq<T> for FieldValue {
    fn eq(&self, other: &T) -> bool {
        serde_json::to_value(other).is_ok_and(|other| other == self.0)
    }
}

impl Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Several fields extracted from one element, in the order they were requested.
///
/// Renders as `("Keropok", "Appetizer")`. Build expected tuples with [`tuple!`](crate::tuple).
#[derive(Clone, PartialEq, Eq)]
pub struct Tuple(Vec<Value>);

impl Tuple {
    /// Creates a tuple from its values.
    pub const fn new(values: Vec<Value>) -> Self {
        Self(values)
    }

    /// The values of the tuple.
    pub fn values(&self) -> &[Value] {
        &self.0
    }
}

impl Debug for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (idx, value) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(value, f)?;
        }
        f.write_str(")")
    }
}

/// Builds a [`Tuple`] from expressions that serialize to JSON.
///
/// ```
/// use plate_assert::tuple;
///
/// let expected = tuple!("Keropok", "Appetizer");
/// assert_eq!(format!("{expected:?}"), r#"("Keropok", "Appetizer")"#);
/// ```
#[macro_export]
macro_rules! tuple {
    ($($value:expr),* $(,)?) => {
        $crate::Tuple::new(vec![$($crate::__private::serde_json::json!($value)),*])
    };
}

/// Extraction of values out of every element of a collection.
///
/// Extraction starts a new assertion chain on the extracted values. The new chain keeps the
/// description of the original subject and reports into the same soft assertion block.
pub trait ExtractingAssertions {
    /// The element type.
    type Item;

    /// Maps every element through `extractor`.
    fn extracting<U, F>(&self, extractor: F) -> Assert<Vec<U>>
    where
        F: Fn(&Self::Item) -> U;

    /// Maps every element to a pair of values.
    fn extracting_pair<U, V, F, G>(&self, first: F, second: G) -> Assert<Vec<(U, V)>>
    where
        F: Fn(&Self::Item) -> U,
        G: Fn(&Self::Item) -> V;

    /// Maps every element to several values and concatenates them.
    fn flat_extracting<U, I, F>(&self, extractor: F) -> Assert<Vec<U>>
    where
        I: IntoIterator<Item = U>,
        F: Fn(&Self::Item) -> I;

    /// Extracts the field at the dotted `path` from every element.
    ///
    /// A missing field fails; assertions chained after that failure report nothing.
    fn extracting_field(&self, path: &str) -> Assert<Vec<FieldValue>>
    where
        Self::Item: Serialize + Debug;

    /// Extracts several fields from every element, one [`Tuple`] per element.
    fn extracting_fields(&self, paths: &[&str]) -> Assert<Vec<Tuple>>
    where
        Self::Item: Serialize + Debug;

    /// Extracts the field at `path` from every element and flattens array values.
    fn flat_extracting_field(&self, path: &str) -> Assert<Vec<FieldValue>>
    where
        Self::Item: Serialize + Debug;
}

impl<S: Elements> ExtractingAssertions for Assert<S> {
    type Item = S::Item;

    fn extracting<U, F>(&self, extractor: F) -> Assert<Vec<U>>
    where
        F: Fn(&S::Item) -> U,
    {
        self.derive(self.actual().elements().into_iter().map(extractor).collect())
    }

    fn extracting_pair<U, V, F, G>(&self, first: F, second: G) -> Assert<Vec<(U, V)>>
    where
        F: Fn(&S::Item) -> U,
        G: Fn(&S::Item) -> V,
    {
        let elements = self.actual().elements().into_iter();
        self.derive(elements.map(|element| (first(element), second(element))).collect())
    }

    fn flat_extracting<U, I, F>(&self, extractor: F) -> Assert<Vec<U>>
    where
        I: IntoIterator<Item = U>,
        F: Fn(&S::Item) -> I,
    {
        self.derive(self.actual().elements().into_iter().flat_map(extractor).collect())
    }

    #[track_caller]
    fn extracting_field(&self, path: &str) -> Assert<Vec<FieldValue>>
    where
        S::Item: Serialize + Debug,
    {
        let mut values = Vec::new();
        for element in self.actual().elements() {
            match self.field(element, path) {
                Some(value) => values.push(FieldValue(value)),
                None => return self.stopped(),
            }
        }
        self.derive(values)
    }

    #[track_caller]
    fn extracting_fields(&self, paths: &[&str]) -> Assert<Vec<Tuple>>
    where
        S::Item: Serialize + Debug,
    {
        let mut tuples = Vec::new();
        for element in self.actual().elements() {
            let mut values = Vec::with_capacity(paths.len());
            for path in paths {
                match self.field(element, path) {
                    Some(value) => values.push(value),
                    None => return self.stopped(),
                }
            }
            tuples.push(Tuple(values));
        }
        self.derive(tuples)
    }

    #[track_caller]
    fn flat_extracting_field(&self, path: &str) -> Assert<Vec<FieldValue>>
    where
        S::Item: Serialize + Debug,
    {
        let mut values = Vec::new();
        for element in self.actual().elements() {
            match self.field(element, path) {
                Some(Value::Array(items)) => values.extend(items.into_iter().map(FieldValue)),
                Some(value) => values.push(FieldValue(value)),
                None => return self.stopped(),
            }
        }
        self.derive(values)
    }
}

impl<S> Assert<S> {
    /// The rest of a chain whose extraction already failed; its assertions report nothing.
    fn stopped<T>(&self) -> Assert<Vec<T>> {
        self.detached(Vec::new())
    }

    /// Resolves `path` on the serialized `element`, reporting a failure if it cannot.
    #[track_caller]
    fn field<T: Serialize + Debug>(&self, element: &T, path: &str) -> Option<Value> {
        let rendered = || self.representation().value(element);
        let root = match serde_json::to_value(element) {
            Ok(root) => root,
            Err(err) => {
                self.fail(messages::field_not_extractable(path, &rendered(), &err.to_string()));
                return None
            }
        };

        match lookup(root, path) {
            Some(value) => Some(value),
            None => {
                self.fail(messages::field_not_found(path, &rendered()));
                None
            }
        }
    }
}

/// Walks a dotted path through objects, using numeric segments as array indices.
fn lookup(mut value: Value, path: &str) -> Option<Value> {
    for segment in path.split('.') {
        value = match value {
            Value::Object(mut fields) => fields.remove(segment)?,
            Value::Array(mut items) => {
                let index: usize = segment.parse().ok()?;
                if index >= items.len() {
                    return None
                }
                items.swap_remove(index)
            }
            _ => return None,
        };
    }
    Some(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prelude::*;
    use serde_json::json;

    #[derive(Debug, Clone, Serialize)]
    struct Point {
        x: i32,
        label: Label,
        tags: Vec<&'static str>,
    }

    #[derive(Debug, Clone, Serialize)]
    struct Label {
        text: &'static str,
    }

    fn points() -> Vec<Point> {
        vec![
            Point { x: 1, label: Label { text: "a" }, tags: vec!["p", "q"] },
            Point { x: 2, label: Label { text: "b" }, tags: vec!["r"] },
        ]
    }

    #[test]
    fn lookup_nested_paths() {
        let value = json!({"a": {"b": [10, 20]}});
        assert_eq!(lookup(value.clone(), "a.b.1"), Some(json!(20)));
        assert_eq!(lookup(value.clone(), "a.c"), None);
        assert_eq!(lookup(value, "a.b.7"), None);
    }

    #[test]
    fn extract_by_closure() {
        assert_that(points()).extracting(|p| p.x).contains_exactly([1, 2]);
        assert_that(points())
            .extracting_pair(|p| p.x, |p| p.label.text)
            .contains_exactly([(1, "a"), (2, "b")]);
        assert_that(points()).flat_extracting(|p| p.tags.clone()).contains_exactly(["p", "q", "r"]);
    }

    #[test]
    fn extract_by_name() {
        assert_that(points()).extracting_field("label.text").contains_exactly(["a", "b"]);
        assert_that(points()).extracting_field("x").contains_exactly([1, 2]);
        assert_that(points())
            .extracting_fields(&["x", "label.text"])
            .contains_exactly([tuple!(1, "a"), tuple!(2, "b")]);
        assert_that(points()).flat_extracting_field("tags").contains_exactly(["p", "q", "r"]);
    }

    #[test]
    #[should_panic(expected = "Can't find any field or property with name 'colour' in:")]
    fn unknown_field_fails() {
        assert_that(points()).extracting_field("colour");
    }

    #[test]
    fn unknown_field_stops_the_chain() {
        let payload = std::panic::catch_unwind(|| {
            assert_that(points()).all(|it| {
                it.extracting_field("colour").contains([1]);
                it.extracting_fields(&["x", "colour"]).has_size(5);
                it.flat_extracting_field("colour").is_not_empty();
            });
        })
        .unwrap_err();
        let message = payload.downcast_ref::<String>().unwrap();
        assert!(message.starts_with("Multiple Failures (3 failures)"), "{message}");
        assert_eq!(message.matches("Can't find any field or property").count(), 3, "{message}");
        assert!(!message.contains("Expecting actual:\n  []"), "{message}");
    }

    #[test]
    fn field_values_render_as_json() {
        assert_eq!(format!("{:?}", FieldValue::new(json!("Keropok"))), r#""Keropok""#);
        assert_eq!(format!("{:?}", tuple!("Keropok", 3)), r#"("Keropok", 3)"#);
    }
}
