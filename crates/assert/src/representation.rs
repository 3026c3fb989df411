//! Rendering of values inside failure messages.

use plate_config::RepresentationConfig;
use std::{fmt::Debug, sync::OnceLock};

static DEFAULT: OnceLock<Representation> = OnceLock::new();

/// Controls how actual and expected values are printed in failure messages.
///
/// Single values use their [`Debug`] form, so strings render quoted (`"hi"`). Element lists
/// render as `["one", "two"]`; lists longer than `max_elements_for_printing` keep their first
/// and last halves around a `...` marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Representation {
    max_elements_for_printing: usize,
}

impl Representation {
    /// Creates a representation that prints at most `max_elements_for_printing` elements.
    ///
    /// A limit of zero is treated as one.
    pub const fn new(max_elements_for_printing: usize) -> Self {
        let max_elements_for_printing =
            if max_elements_for_printing == 0 { 1 } else { max_elements_for_printing };
        Self { max_elements_for_printing }
    }

    /// The representation new assertions start with.
    ///
    /// This is the process wide default if one was installed with
    /// [`set_default_representation`], the built-in default otherwise.
    pub fn current() -> Self {
        DEFAULT.get().copied().unwrap_or_default()
    }

    /// Maximum number of elements printed for a collection.
    pub const fn max_elements_for_printing(&self) -> usize {
        self.max_elements_for_printing
    }

    /// Renders a single value.
    pub fn value<T: Debug + ?Sized>(&self, value: &T) -> String {
        format!("{value:?}")
    }

    /// Renders a list of elements, eliding the middle of long lists.
    pub fn elements<'a, T, I>(&self, elements: I) -> String
    where
        T: Debug + ?Sized + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        let rendered: Vec<String> = elements.into_iter().map(|e| self.value(e)).collect();
        if rendered.len() <= self.max_elements_for_printing {
            return format!("[{}]", rendered.join(", "))
        }

        let head = self.max_elements_for_printing.div_ceil(2);
        let tail = self.max_elements_for_printing / 2;
        let mut shown: Vec<&str> = rendered[..head].iter().map(String::as_str).collect();
        shown.push("...");
        shown.extend(rendered[rendered.len() - tail..].iter().map(String::as_str));
        format!("[{}]", shown.join(", "))
    }
}

impl Default for Representation {
    fn default() -> Self {
        Self::from(RepresentationConfig::default())
    }
}

impl From<RepresentationConfig> for Representation {
    fn from(config: RepresentationConfig) -> Self {
        Self::new(config.max_elements_for_printing)
    }
}

/// Installs the representation used by every assertion created afterwards.
///
/// Can only be set once per process; returns the rejected value if a default is already set.
pub fn set_default_representation(representation: Representation) -> Result<(), Representation> {
    DEFAULT.set(representation)
}
