/*
 * Copyright (c) 2017, 2018, 2020, 2021 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Depth-first-search orders.
//!
//! # Example
//!
//! ```
//! use ewgraph::{Buildable, EdgeWeightedDigraph};
//! use ewgraph::search::DepthFirstOrder;
//!
//! let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 1.0), (0, 2, 1.0), (2, 1, 1.0)]).unwrap();
//! let order = DepthFirstOrder::new(&g);
//!
//! assert_eq!(order.pre(), &[0, 1, 2]);
//! assert_eq!(order.post(), &[1, 2, 0]);
//! assert_eq!(order.reverse_post().cloned().collect::<Vec<_>>(), vec![0, 2, 1]);
//! ```

use crate::traits::{Directed, IncidenceIter, WeightedEdge};

use std::iter::Rev;
use std::slice::Iter as SliceIter;

/// The node orders of a complete depth-first search of a directed graph.
///
/// The search visits the nodes in index order as start nodes and traverses
/// the outgoing edges of each node in insertion order. It uses an explicit
/// stack, so arbitrarily deep graphs can be handled.
pub struct DepthFirstOrder {
    pre: Vec<usize>,
    post: Vec<usize>,
    pre_index: Vec<usize>,
    post_index: Vec<usize>,
}

impl DepthFirstOrder {
    /// Run a depth-first search on all nodes of `g`.
    pub fn new<G>(g: &G) -> Self
    where
        G: Directed,
    {
        let n = g.num_vertices();
        let mut order = DepthFirstOrder {
            pre: Vec::with_capacity(n),
            post: Vec::with_capacity(n),
            pre_index: vec![usize::MAX; n],
            post_index: vec![usize::MAX; n],
        };

        let mut stack: Vec<(usize, IncidenceIter<G::Edge>)> = Vec::new();
        for s in g.vertices() {
            if order.is_visited(s) {
                continue;
            }
            order.visit(s);
            stack.push((s, g.out_edges(s)));

            while let Some((u, mut it)) = stack.pop() {
                if let Some((_, e)) = it.next() {
                    stack.push((u, it));
                    let (_, v) = e.ends();
                    if !order.is_visited(v) {
                        order.visit(v);
                        stack.push((v, g.out_edges(v)));
                    }
                } else {
                    order.post_index[u] = order.post.len();
                    order.post.push(u);
                }
            }
        }

        order
    }

    fn is_visited(&self, u: usize) -> bool {
        self.pre_index[u] != usize::MAX
    }

    fn visit(&mut self, u: usize) {
        self.pre_index[u] = self.pre.len();
        self.pre.push(u);
    }

    /// The nodes in preorder.
    pub fn pre(&self) -> &[usize] {
        &self.pre
    }

    /// The nodes in postorder.
    pub fn post(&self) -> &[usize] {
        &self.post
    }

    /// The nodes in reverse postorder.
    pub fn reverse_post(&self) -> Rev<SliceIter<usize>> {
        self.post.iter().rev()
    }

    /// The position of `u` in preorder.
    pub fn pre_index(&self, u: usize) -> usize {
        self.pre_index[u]
    }

    /// The position of `u` in postorder.
    pub fn post_index(&self, u: usize) -> usize {
        self.post_index[u]
    }
}
