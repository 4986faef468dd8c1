//! Options accepted by freeze and equality.
//!
//! Composite records use the skip set to leave named fields out of a freeze
//! or comparison. Scalar streams have no fields, so they accept the options
//! and ignore them.

use std::collections::BTreeSet;

/// Options for [`Stream::freeze`](crate::Stream::freeze).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FreezeOptions {
    /// Field names to leave out of the frozen form.
    pub skip: BTreeSet<String>,
}

impl FreezeOptions {
    /// Options that skip nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field name to the skip set.
    pub fn skip(mut self, field: impl Into<String>) -> Self {
        self.skip.insert(field.into());
        self
    }
}

/// Options for [`Stream::equals`](crate::Stream::equals).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EqOptions {
    /// Field names to leave out of the comparison.
    pub skip: BTreeSet<String>,
}

impl EqOptions {
    /// Options that skip nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field name to the skip set.
    pub fn skip(mut self, field: impl Into<String>) -> Self {
        self.skip.insert(field.into());
        self
    }
}
