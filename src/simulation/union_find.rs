//! Disjoint-set (union-find) structure used by the MST builder.
//!
//! Weighted quick-union with path compression, generic over any element type
//! usable as a map key. Elements are registered lazily: querying an unseen
//! element makes it its own singleton set rather than failing, so the
//! structure is safe to use in any insertion order and before any union.

use std::collections::HashMap;
use std::hash::Hash;

/// Union-find over opaque element identifiers.
#[derive(Debug, Default)]
pub struct UnionFind<T: Eq + Hash + Copy> {
    parent: HashMap<T, T>,
    size: HashMap<T, usize>,
    sets: usize,
}

impl<T: Eq + Hash + Copy> UnionFind<T> {
    pub fn new() -> Self {
        UnionFind {
            parent: HashMap::new(),
            size: HashMap::new(),
            sets: 0,
        }
    }

    /// Build a union-find with every element pre-registered as a singleton.
    pub fn with_elements(elements: impl IntoIterator<Item = T>) -> Self {
        let mut uf = Self::new();
        for element in elements {
            uf.add(element);
        }
        uf
    }

    /// Register `element` as a singleton set. No-op if already present.
    pub fn add(&mut self, element: T) {
        if !self.parent.contains_key(&element) {
            self.parent.insert(element, element);
            self.size.insert(element, 1);
            self.sets += 1;
        }
    }

    /// Root of the set containing `element`, with path compression.
    ///
    /// Unseen elements are lazily added as their own singleton set.
    pub fn find(&mut self, element: T) -> T {
        if !self.parent.contains_key(&element) {
            self.add(element);
            return element;
        }

        let mut root = element;
        while self.parent[&root] != root {
            root = self.parent[&root];
        }

        // Compress the path walked above
        let mut current = element;
        while current != root {
            let next = self.parent[&current];
            self.parent.insert(current, root);
            current = next;
        }

        root
    }

    /// Merge the sets containing `a` and `b` using union by size.
    ///
    /// Returns `true` if a merge occurred, `false` if the elements were
    /// already connected.
    pub fn union(&mut self, a: T, b: T) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }

        // Attach the smaller tree under the larger one
        let size_a = self.size[&root_a];
        let size_b = self.size[&root_b];
        if size_a < size_b {
            self.parent.insert(root_a, root_b);
            self.size.insert(root_b, size_a + size_b);
        } else {
            self.parent.insert(root_b, root_a);
            self.size.insert(root_a, size_a + size_b);
        }
        self.sets -= 1;
        true
    }

    /// Whether `a` and `b` belong to the same set.
    pub fn connected(&mut self, a: T, b: T) -> bool {
        self.find(a) == self.find(b)
    }

    /// Number of disjoint sets currently tracked.
    pub fn len(&self) -> usize {
        self.sets
    }

    pub fn is_empty(&self) -> bool {
        self.sets == 0
    }

    pub fn contains(&self, element: T) -> bool {
        self.parent.contains_key(&element)
    }
}
