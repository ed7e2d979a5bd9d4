// ============================================================================
// Conversion Result
// One parsed value rendered into several radices
// ============================================================================

use crate::numeric::{ExactRational, Radix};
use std::collections::btree_map::{self, BTreeMap};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Rendered columns for a single input, keyed and ordered by radix
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Conversion {
    /// Radix the input was written in
    source: Radix,

    /// Exact parsed value
    value: ExactRational,

    /// Rendered text per target radix
    rendered: BTreeMap<Radix, String>,
}

impl Conversion {
    pub fn new(source: Radix, value: ExactRational) -> Self {
        Self {
            source,
            value,
            rendered: BTreeMap::new(),
        }
    }

    /// Record the rendering for `radix`, replacing any earlier one
    pub fn insert(&mut self, radix: Radix, text: String) {
        self.rendered.insert(radix, text);
    }

    #[inline]
    pub fn source(&self) -> Radix {
        self.source
    }

    #[inline]
    pub fn value(&self) -> &ExactRational {
        &self.value
    }

    /// Rendered text for `radix`, if it was a target
    pub fn get(&self, radix: Radix) -> Option<&str> {
        self.rendered.get(&radix).map(String::as_str)
    }

    /// Iterate `(radix, text)` pairs in ascending radix order
    pub fn iter(&self) -> btree_map::Iter<'_, Radix, String> {
        self.rendered.iter()
    }

    pub fn len(&self) -> usize {
        self.rendered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }

    /// Consume into the plain radix → text mapping
    pub fn into_map(self) -> BTreeMap<Radix, String> {
        self.rendered
    }
}

impl<'a> IntoIterator for &'a Conversion {
    type Item = (&'a Radix, &'a String);
    type IntoIter = btree_map::Iter<'a, Radix, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
