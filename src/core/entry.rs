//! # Entry Model
//!
//! One navigable `label: value` line, tagged with the group it belongs to.
//!
//! The tag type `G` is whatever the screen uses to categorize its stats
//! (see [`crate::core::screens`]). The engine only ever compares tags for
//! equality and looks them up in a display-name table, so any
//! `Clone + Eq + Hash + Debug` type works.

use std::fmt::Debug;
use std::hash::Hash;

/// Bound for anything usable as a group tag.
pub trait GroupTag: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> GroupTag for T {}

/// An immutable `(label, value, group)` triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<G> {
    label: String,
    value: String,
    group: G,
}

impl<G: GroupTag> Entry<G> {
    pub fn new(label: impl Into<String>, value: impl Into<String>, group: G) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            group,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn group(&self) -> &G {
        &self.group
    }
}
