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

//! Implementation of Prim's algorithm

use super::{other, total_weight, SpanningForest};
use crate::collections::{IndexMinPQ, IndexPriQueue};
use crate::error::Result;
use crate::num::traits::{Float, ToPrimitive, Zero};
use crate::traits::{EdgeId, Undirected, WeightedEdge};

use tracing::debug;

/// Prim's algorithm with an indexed priority queue of nodes.
///
/// For each node not in the tree the queue contains the weight of the
/// cheapest edge connecting it to the tree. This needs O(E log V) time and
/// O(V) extra space.
///
/// The edges are returned in the order of their (non-tree) end nodes.
///
/// # Example
///
/// ```
/// use ewgraph::{Buildable, EdgeWeightedGraph};
/// use ewgraph::mst::{PrimMST, SpanningForest};
///
/// let g = EdgeWeightedGraph::from_edges(vec![
///     (0, 1, 4.0), (0, 2, 1.0), (1, 2, 2.0), (1, 3, 5.0), (2, 3, 8.0),
/// ]).unwrap();
///
/// let mst = PrimMST::new(&g);
/// assert_eq!(mst.weight(), 8.0);
/// assert_eq!(mst.num_edges(), 3);
/// assert_eq!(mst.edge_to(3), Some(ewgraph::traits::EdgeId::new(3)));
/// assert_eq!(mst.edge_to(0), None);
/// ```
pub struct PrimMST<W = f64> {
    edge_to: Vec<Option<EdgeId>>,
    edges: Vec<EdgeId>,
    weight: W,
}

impl<W> PrimMST<W>
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
        let mut prim = Prim::new(g);
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
        let mut prim = Prim::new(g);
        prim.run(s);
        Ok(prim.into_result())
    }

    /// Return the tree edge connecting `u` to its parent.
    ///
    /// This is `None` for the start nodes of the search and for nodes that
    /// have not been reached.
    pub fn edge_to(&self, u: usize) -> Option<EdgeId> {
        self.edge_to.get(u).cloned().flatten()
    }
}

impl<W> SpanningForest<W> for PrimMST<W>
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
        self.edge_to.len()
    }
}

struct Prim<'a, G>
where
    G: Undirected,
{
    g: &'a G,
    marked: Vec<bool>,
    dist_to: Vec<G::Weight>,
    edge_to: Vec<Option<EdgeId>>,
    pq: IndexMinPQ<G::Weight>,
}

impl<'a, G> Prim<'a, G>
where
    G: Undirected,
{
    fn new(g: &'a G) -> Self {
        let n = g.num_vertices();
        Prim {
            g,
            marked: vec![false; n],
            dist_to: vec![G::Weight::infinity(); n],
            edge_to: vec![None; n],
            pq: IndexMinPQ::with_capacity(n),
        }
    }

    fn run(&mut self, s: usize) {
        self.dist_to[s] = G::Weight::zero();
        self.pq.insert(s, G::Weight::zero());
        while let Some((u, _)) = self.pq.pop_min() {
            self.visit(u);
        }
    }

    /// Add `u` to the tree and update the best connections of its
    /// neighbors.
    fn visit(&mut self, u: usize) {
        let g = self.g;
        self.marked[u] = true;
        for (e, edge) in g.adjacent_edges(u) {
            let v = other(g, e, u);
            if self.marked[v] {
                continue;
            }
            let weight = edge.weight();
            // the first edge reaching `v` is taken even if its weight is infinite
            if self.edge_to[v].is_none() || weight < self.dist_to[v] {
                self.dist_to[v] = weight;
                self.edge_to[v] = Some(e);
                if self.pq.contains(v) {
                    self.pq.decrease_key(v, weight);
                } else {
                    self.pq.insert(v, weight);
                }
            }
        }
    }

    fn into_result(self) -> PrimMST<G::Weight> {
        let edges: Vec<_> = self.edge_to.iter().filter_map(|&e| e).collect();
        let weight = total_weight(self.g, edges.iter().cloned());
        debug!(
            num_edges = edges.len(),
            weight = weight.to_f64().unwrap_or(f64::NAN),
            "Prim finished"
        );
        PrimMST {
            edge_to: self.edge_to,
            edges,
            weight,
        }
    }
}
