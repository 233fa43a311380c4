//! Undirected weighted edges and their normalized comparison key.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// An undirected edge between two vertex labels with a non-negative weight.
///
/// Equality and hashing ignore endpoint order, so `(A, B, 4)` and
/// `(B, A, 4)` are the same edge.
///
/// # Examples
/// ```
/// use mstbench_core::Edge;
///
/// let forward = Edge::new("A", "B", 4);
/// let backward = Edge::new("B", "A", 4);
/// assert_eq!(forward, backward);
/// assert_ne!(forward, Edge::new("A", "B", 5));
/// ```
#[derive(Clone, Debug)]
pub struct Edge {
    from: String,
    to: String,
    weight: u32,
}

impl Edge {
    /// Creates an edge between `from` and `to`.
    #[must_use]
    pub fn new(from: impl Into<String>, to: impl Into<String>, weight: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Returns the endpoint the edge was declared from.
    #[must_use]
    #[rustfmt::skip]
    pub fn from(&self) -> &str { &self.from }

    /// Returns the endpoint the edge was declared to.
    #[must_use]
    #[rustfmt::skip]
    pub fn to(&self) -> &str { &self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> u32 { self.weight }

    /// Returns the order-insensitive key used for equality and hashing.
    #[must_use]
    pub fn key(&self) -> EdgeKey<'_> {
        let (low, high) = if self.from <= self.to {
            (self.from.as_str(), self.to.as_str())
        } else {
            (self.to.as_str(), self.from.as_str())
        };
        EdgeKey {
            low,
            high,
            weight: self.weight,
        }
    }

    /// Returns `true` when the edge joins `left` and `right` in either
    /// direction.
    #[must_use]
    pub fn connects(&self, left: &str, right: &str) -> bool {
        (self.from == left && self.to == right) || (self.from == right && self.to == left)
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{} ({})", self.from, self.to, self.weight)
    }
}

/// Normalized edge identity: endpoints sorted, weight included.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct EdgeKey<'a> {
    low: &'a str,
    high: &'a str,
    weight: u32,
}

impl<'a> EdgeKey<'a> {
    /// Returns the lexicographically smaller endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn low(&self) -> &'a str { self.low }

    /// Returns the lexicographically larger endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub fn high(&self) -> &'a str { self.high }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> u32 { self.weight }
}
