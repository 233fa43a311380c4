//! Disjoint-set (union-find) with path compression and union by rank.
//!
//! Elements must be registered with [`DisjointSet::make_set`] before they can
//! take part in `find` or `union`; touching an unregistered element is an
//! error rather than an implicit singleton. Every logical step is counted so
//! Kruskal's engine can report an empirical operation count.

use std::{collections::HashMap, fmt, hash::Hash};

use crate::error::UnionFindError;

/// Disjoint-set forest keyed by vertex identifiers.
///
/// # Examples
/// ```
/// use mstbench_core::DisjointSet;
///
/// let mut set = DisjointSet::new();
/// for vertex in ["A", "B", "C"] {
///     set.make_set(vertex)?;
/// }
/// assert!(set.union(&"A", &"B")?);
/// assert!(!set.union(&"B", &"A")?);
/// assert_eq!(set.find(&"B")?, set.find(&"A")?);
/// assert_eq!(set.components(), 2);
/// # Ok::<(), mstbench_core::UnionFindError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DisjointSet<K> {
    parent: HashMap<K, K>,
    rank: HashMap<K, u32>,
    components: usize,
    operations: u64,
}

impl<K> Default for DisjointSet<K> {
    fn default() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
            components: 0,
            operations: 0,
        }
    }
}

impl<K> DisjointSet<K>
where
    K: Clone + Eq + Hash + fmt::Display,
{
    /// Creates an empty disjoint-set forest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty forest with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            parent: HashMap::with_capacity(capacity),
            rank: HashMap::with_capacity(capacity),
            components: 0,
            operations: 0,
        }
    }

    /// Registers `element` as a singleton component of rank zero.
    ///
    /// # Errors
    /// Returns [`UnionFindError::AlreadyRegistered`] when `element` was
    /// registered before.
    pub fn make_set(&mut self, element: K) -> Result<(), UnionFindError> {
        if self.parent.contains_key(&element) {
            return Err(UnionFindError::AlreadyRegistered {
                vertex: element.to_string(),
            });
        }
        self.operations += 1;
        self.rank.insert(element.clone(), 0);
        self.parent.insert(element.clone(), element);
        self.components += 1;
        Ok(())
    }

    /// Returns the root of the component containing `element`.
    ///
    /// Every element on the traversed chain is re-pointed directly at the
    /// root. One operation is counted per element visited, root included.
    ///
    /// # Errors
    /// Returns [`UnionFindError::UnregisteredVertex`] when `element` was never
    /// registered.
    pub fn find(&mut self, element: &K) -> Result<K, UnionFindError> {
        let mut chain = Vec::new();
        let mut current = element.clone();
        loop {
            self.operations += 1;
            let parent = self.parent_of(&current)?;
            if parent == current {
                break;
            }
            chain.push(current);
            current = parent;
        }

        for node in chain {
            self.parent.insert(node, current.clone());
        }
        Ok(current)
    }

    /// Merges the components of `left` and `right`.
    ///
    /// Returns `false` when both already share a component, meaning an edge
    /// between them would close a cycle. The lower-rank root is attached
    /// beneath the higher-rank root; on a tie the root of `left` becomes the
    /// parent and its rank grows by one.
    ///
    /// # Errors
    /// Returns [`UnionFindError::UnregisteredVertex`] when either element was
    /// never registered.
    pub fn union(&mut self, left: &K, right: &K) -> Result<bool, UnionFindError> {
        let left_root = self.find(left)?;
        let right_root = self.find(right)?;

        self.operations += 1;
        if left_root == right_root {
            return Ok(false);
        }

        let left_rank = self.rank_of(&left_root);
        let right_rank = self.rank_of(&right_root);

        self.operations += 1;
        let (parent, child) = if left_rank < right_rank {
            (right_root, left_root)
        } else {
            (left_root, right_root)
        };
        if left_rank == right_rank {
            self.rank.insert(parent.clone(), left_rank.saturating_add(1));
        }
        self.parent.insert(child, parent);
        self.components -= 1;
        Ok(true)
    }

    /// Returns `true` when `element` has been registered.
    #[must_use]
    pub fn contains(&self, element: &K) -> bool {
        self.parent.contains_key(element)
    }

    /// Returns the number of disjoint components.
    #[must_use]
    #[rustfmt::skip]
    pub fn components(&self) -> usize { self.components }

    /// Returns the number of registered elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no element has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the number of counted operations so far.
    #[must_use]
    #[rustfmt::skip]
    pub fn operations(&self) -> u64 { self.operations }

    fn parent_of(&self, element: &K) -> Result<K, UnionFindError> {
        self.parent
            .get(element)
            .cloned()
            .ok_or_else(|| UnionFindError::UnregisteredVertex {
                vertex: element.to_string(),
            })
    }

    fn rank_of(&self, root: &K) -> u32 {
        self.rank.get(root).copied().unwrap_or_default()
    }

    #[cfg(test)]
    fn raw_parent(&self, element: &K) -> Option<&K> {
        self.parent.get(element)
    }

    #[cfg(test)]
    fn raw_rank(&self, element: &K) -> Option<u32> {
        self.rank.get(element).copied()
    }
}
