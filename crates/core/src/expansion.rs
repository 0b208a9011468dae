// SPDX-License-Identifier: MIT

//!
//! Single expansion: at most one thing is expanded at a time
//!

use serde::Serialize;

/// Tracks the one expanded item (if any).  Expanding an item collapses
/// whatever was expanded before.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct Expansion<K> {
    expanded: Option<K>,
}

impl<K> Default for Expansion<K> {
    fn default() -> Self {
        Self { expanded: None }
    }
}

impl<K: PartialEq> Expansion<K> {
    /// Nothing expanded
    pub fn new() -> Self {
        Self::default()
    }

    /// Collapse `key` if it's expanded, otherwise expand it
    pub fn toggle(&mut self, key: K) {
        if self.expanded.as_ref() == Some(&key) {
            self.expanded = None;
        } else {
            self.expanded = Some(key);
        }
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    pub fn is_expanded(&self, key: &K) -> bool {
        self.expanded.as_ref() == Some(key)
    }

    pub fn expanded(&self) -> Option<&K> {
        self.expanded.as_ref()
    }
}
