// Copyright (c) 2016, 2017, 2018, 2020, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Lazy implementation of Prim's algorithm

use super::{other, total_weight, SpanningForest};
use crate::collections::MinPQ;
use crate::error::Result;
use crate::num::traits::{Float, ToPrimitive};
use crate::traits::{EdgeId, Undirected, WeightedEdge};

use tracing::debug;

/// Prim's algorithm with a priority queue of edges.
///
/// The priority queue contains all edges leaving the current tree. Edges
/// that do not cross the cut anymore are not removed from the queue but
/// skipped when they are extracted. This needs O(E log E) time and O(E)
/// space.
///
/// # Example
///
/// ```
/// use ewgraph::{Buildable, EdgeWeightedGraph};
/// use ewgraph::mst::{LazyPrimMST, SpanningForest};
///
/// let g = EdgeWeightedGraph::from_edges(vec![
///     (0, 1, 4.0), (0, 2, 1.0), (1, 2, 2.0), (1, 3, 5.0), (2, 3, 8.0),
/// ]).unwrap();
///
/// let mst = LazyPrimMST::with_start(&g, 3).unwrap();
/// assert_eq!(mst.weight(), 8.0);
/// assert!(mst.is_spanning_tree());
/// assert_eq!(mst.edges().iter().map(|e| e.index()).collect::<Vec<_>>(), vec![3, 2, 1]);
/// # use ewgraph::traits::Indexable;
/// ```
pub struct LazyPrimMST<W = f64> {
    edges: Vec<EdgeId>,
    weight: W,
    num_vertices: usize,
}

impl<W> LazyPrimMST<W>
where
    W: Float,
{
    /// Compute a minimum spanning forest.
    ///
    /// The search starts at node 0 and is restarted at the smallest
    /// unvisited node as long as there is one.
    pub fn new<G>(g: &G) -> Self
    where
        G: Undirected<Weight = W>,
    {
        let mut prim = LazyPrim::new(g);
        for s in g.vertices() {
            if !prim.marked[s] {
                prim.run(s);
            }
        }
        prim.into_result()
    }

    /// Compute a minimum spanning tree of the component containing `s`.
    pub fn with_start<G>(g: &G, s: usize) -> Result<Self>
    where
        G: Undirected<Weight = W>,
    {
        g.validate_vertex(s)?;
        let mut prim = LazyPrim::new(g);
        prim.run(s);
        Ok(prim.into_result())
    }
}

impl<W> SpanningForest<W> for LazyPrimMST<W>
where
    W: Float,
{
    fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    fn weight(&self) -> W {
        self.weight
    }

    fn num_vertices(&self) -> usize {
        self.num_vertices
    }
}

/// The state of the algorithm while it is running.
struct LazyPrim<'a, G>
where
    G: Undirected,
{
    g: &'a G,
    marked: Vec<bool>,
    pq: MinPQ<EdgeId, G::Weight>,
    tree: Vec<EdgeId>,
}

impl<'a, G> LazyPrim<'a, G>
where
    G: Undirected,
{
    fn new(g: &'a G) -> Self {
        LazyPrim {
            g,
            marked: vec![false; g.num_vertices()],
            pq: MinPQ::with_capacity(g.num_edges()),
            tree: Vec::with_capacity(g.num_vertices().saturating_sub(1)),
        }
    }

    fn run(&mut self, s: usize) {
        self.visit(s);
        while let Some((e, _)) = self.pq.pop_min() {
            let (u, v) = self.g.edge(e).ends();
            if self.marked[u] && self.marked[v] {
                // not a crossing edge anymore
                continue;
            }
            self.tree.push(e);
            if !self.marked[u] {
                self.visit(u);
            }
            if !self.marked[v] {
                self.visit(v);
            }
        }
    }

    /// Add `u` to the tree and push all edges to unmarked nodes.
    fn visit(&mut self, u: usize) {
        let g = self.g;
        self.marked[u] = true;
        for (e, edge) in g.adjacent_edges(u) {
            if !self.marked[other(g, e, u)] {
                self.pq.push(e, edge.weight());
            }
        }
    }

    fn into_result(self) -> LazyPrimMST<G::Weight> {
        let weight = total_weight(self.g, self.tree.iter().cloned());
        debug!(
            num_edges = self.tree.len(),
            weight = weight.to_f64().unwrap_or(f64::NAN),
            "lazy Prim finished"
        );
        LazyPrimMST {
            edges: self.tree,
            weight,
            num_vertices: self.g.num_vertices(),
        }
    }
}
