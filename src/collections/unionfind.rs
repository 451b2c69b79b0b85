/*
 * Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Union-Find data structure.

/// State of an element.
#[derive(Clone, Copy, Debug)]
enum Component {
    /// The root element with the size of its set.
    Root(usize),
    /// An inner node with the parent node.
    Node(usize),
}

/// Disjoint sets over the elements `0..n`.
///
/// `find` compresses the path to the root and `union` attaches the root of
/// the smaller set to the root of the larger one, so all trees have
/// logarithmic height.
///
/// Elements are not validated: passing an element `>= n` panics.
///
/// # Example
///
/// ```
/// use ewgraph::collections::UnionFind;
///
/// let mut uf = UnionFind::new(5);
/// assert_eq!(uf.count(), 5);
/// assert!(uf.union(0, 1));
/// assert!(uf.union(3, 4));
/// assert!(uf.union(1, 4));
/// assert!(!uf.union(0, 3));
///
/// assert!(uf.connected(0, 4));
/// assert!(!uf.connected(2, 4));
/// assert_eq!(uf.count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct UnionFind {
    comps: Vec<Component>,
    count: usize,
}

impl UnionFind {
    /// Create `n` singleton sets.
    pub fn new(n: usize) -> Self {
        UnionFind {
            comps: vec![Component::Root(1); n],
            count: n,
        }
    }

    /// Return the number of elements.
    pub fn len(&self) -> usize {
        self.comps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comps.is_empty()
    }

    /// Return the number of disjoint sets.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Return the root element of the set containing `u`.
    pub fn find(&mut self, u: usize) -> usize {
        let (root, _) = find_root(&self.comps, u);

        // compress the path
        let mut v = u;
        while let Component::Node(parent) = self.comps[v] {
            self.comps[v] = Component::Node(root);
            v = parent;
        }

        root
    }

    /// Return the size of the set containing `u`.
    pub fn size(&self, u: usize) -> usize {
        let (_, size) = find_root(&self.comps, u);
        size
    }

    /// Return `true` if `u` and `v` are in the same set.
    pub fn connected(&mut self, u: usize, v: usize) -> bool {
        self.find(u) == self.find(v)
    }

    /// Merge the sets containing `u` and `v`.
    ///
    /// Returns `false` if both have already been in the same set.
    pub fn union(&mut self, u: usize, v: usize) -> bool {
        let uroot = self.find(u);
        let vroot = self.find(v);
        if uroot == vroot {
            return false;
        }

        let size_u = self.root_size(uroot);
        let size_v = self.root_size(vroot);
        if size_u < size_v {
            self.comps[uroot] = Component::Node(vroot);
            self.comps[vroot] = Component::Root(size_u + size_v);
        } else {
            self.comps[vroot] = Component::Node(uroot);
            self.comps[uroot] = Component::Root(size_u + size_v);
        }
        self.count -= 1;
        true
    }

    fn root_size(&self, root: usize) -> usize {
        match self.comps[root] {
            Component::Root(size) => size,
            Component::Node(_) => unreachable!("not a root node"),
        }
    }
}

/// Return the root node and the size of the set of node `u`.
fn find_root(comps: &[Component], u: usize) -> (usize, usize) {
    let mut v = u;
    loop {
        match comps[v] {
            Component::Node(parent) => v = parent,
            Component::Root(size) => return (v, size),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::UnionFind;

    #[test]
    fn test_tiny_uf() {
        let pairs = [
            (4, 3),
            (3, 8),
            (6, 5),
            (9, 4),
            (2, 1),
            (8, 9),
            (5, 0),
            (7, 2),
            (6, 1),
            (1, 0),
            (6, 7),
        ];
        let mut uf = UnionFind::new(10);
        let joined: Vec<_> = pairs.iter().map(|&(p, q)| uf.union(p, q)).collect();
        assert_eq!(
            joined,
            vec![true, true, true, true, true, false, true, true, true, false, false]
        );
        assert_eq!(uf.count(), 2);
        assert_eq!(uf.size(3), 4);
        assert_eq!(uf.size(7), 6);
        for &(p, q) in &pairs {
            assert!(uf.connected(p, q));
        }
        assert!(!uf.connected(0, 9));
    }

    #[test]
    fn test_compression() {
        let mut uf = UnionFind::new(64);
        for i in 1..64 {
            uf.union(i - 1, i);
        }
        let root = uf.find(63);
        for i in 0..64 {
            assert_eq!(uf.find(i), root);
            // after compression every node points to the root directly
            assert_eq!(uf.find(i), root);
        }
        assert_eq!(uf.count(), 1);
        assert_eq!(uf.size(0), 64);
        assert_eq!(uf.len(), 64);
    }
}
