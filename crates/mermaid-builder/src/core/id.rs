//! Identifier sources
//!
//! Every node and subgraph in a diagram gets its identifier from one
//! [`IdSource`]. The diagram owns the source and hands a shared handle to each
//! subgraph it creates, so nested subgraphs keep drawing from the same
//! sequence instead of restarting.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opaque identifier of a node or subgraph
///
/// Links refer to their endpoints by this value, never by object.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ElementId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&ElementId> for ElementId {
    fn from(value: &ElementId) -> Self {
        value.clone()
    }
}

/// Source of unique element identifiers
///
/// Implementations must never return the same identifier twice from one
/// instance, including when called from several threads.
pub trait IdSource: Send + Sync + fmt::Debug {
    /// Issue the next identifier and advance the sequence
    fn next_id(&self) -> ElementId;
}

/// Numeric sequence: `0`, `1`, `2`, ...
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Create a sequence starting at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a sequence whose first identifier is `start`
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> ElementId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ElementId(n.to_string())
    }
}

/// Prefixed sequence: `<prefix>0`, `<prefix>1`, ...
#[derive(Debug)]
pub struct PrefixedIds {
    prefix: String,
    next: AtomicU64,
}

impl PrefixedIds {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: AtomicU64::new(0),
        }
    }
}

impl IdSource for PrefixedIds {
    fn next_id(&self) -> ElementId {
        let n = self.next.fetch_add(1, Ordering::Relaxed);
        ElementId(format!("{}{}", self.prefix, n))
    }
}
