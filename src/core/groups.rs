//! # Group Index
//!
//! `GroupBounds` is the list of indices where a new group *run* begins.
//!
//! ```text
//! groups:  A  A  B  B  B  C
//! index:   0  1  2  3  4  5
//! bounds: [0,    2,       5]
//! ```
//!
//! Runs are contiguous: a tag that reappears later in the buffer (A, B, A)
//! starts a new run and gets its own bound. Callers present entries
//! pre-grouped; nothing here sorts or merges.
//!
//! Bounds are strictly increasing and `bounds[0] == 0` whenever the source
//! buffer is non-empty. They are always rebuilt in full, never patched.

use super::entry::{Entry, GroupTag};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupBounds(Vec<usize>);

impl GroupBounds {
    /// Scans `entries` once, recording index 0 and every index whose group
    /// differs from its predecessor.
    pub fn build<G: GroupTag>(entries: &[Entry<G>]) -> Self {
        let mut bounds = Vec::new();
        for (i, entry) in entries.iter().enumerate() {
            if i == 0 || entry.group() != entries[i - 1].group() {
                bounds.push(i);
            }
        }
        Self(bounds)
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn first(&self) -> Option<usize> {
        self.0.first().copied()
    }

    pub fn last(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// Smallest bound strictly greater than `cursor`, wrapping to the first
    /// bound when there is none. `None` only when there are no bounds.
    pub fn next_after(&self, cursor: usize) -> Option<usize> {
        self.0
            .iter()
            .copied()
            .find(|&b| b > cursor)
            .or_else(|| self.first())
    }

    /// Largest bound strictly less than `cursor`, wrapping to the last bound
    /// when there is none.
    pub fn previous_before(&self, cursor: usize) -> Option<usize> {
        self.0
            .iter()
            .rev()
            .copied()
            .find(|&b| b < cursor)
            .or_else(|| self.last())
    }

    /// Start of the run containing `index`.
    pub fn run_start(&self, index: usize) -> Option<usize> {
        self.0.iter().rev().copied().find(|&b| b <= index)
    }

    pub fn is_run_start(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }
}
