/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Directed edge-weighted graphs.
//!
//! # Example
//!
//! ```
//! use ewgraph::EdgeWeightedDigraph;
//! use ewgraph::traits::*;
//!
//! let mut g = EdgeWeightedDigraph::new();
//! g.add_edge(0, 1, 0.5).unwrap();
//! g.add_edge(1, 0, -0.25).unwrap();
//! g.add_edge(1, 1, 1.0).unwrap();
//!
//! assert_eq!(g.num_vertices(), 2);
//! assert_eq!(g.num_edges(), 3);
//! assert_eq!(g.outdegree(1), 2);
//! assert_eq!(g.indegree(1), 2);
//! ```

use crate::builder::Buildable;
use crate::error::{Error, Result};
use crate::num::traits::Float;
use crate::traits::{Directed, EdgeId, FiniteGraph, IncidenceIter, WeightedEdge};

use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// A directed weighted edge.
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct DirectedEdge<W = f64> {
    from: usize,
    to: usize,
    weight: W,
}

impl<W> DirectedEdge<W>
where
    W: Copy,
{
    pub fn new(from: usize, to: usize, weight: W) -> Self {
        DirectedEdge { from, to, weight }
    }

    /// The source node.
    pub fn from(&self) -> usize {
        self.from
    }

    /// The sink node.
    pub fn to(&self) -> usize {
        self.to
    }
}

impl<W> WeightedEdge<W> for DirectedEdge<W>
where
    W: Copy,
{
    fn weight(&self) -> W {
        self.weight
    }

    fn ends(&self) -> (usize, usize) {
        (self.from, self.to)
    }
}

impl<W> fmt::Display for DirectedEdge<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}->{} {}", self.from, self.to, self.weight)
    }
}

/// A directed graph with weighted edges.
///
/// Each edge is contained in the outgoing list of its source node only.
/// Self-loops and parallel edges are allowed.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EdgeWeightedDigraph<W = f64> {
    adj: Vec<Vec<EdgeId>>,
    indegree: Vec<usize>,
    edges: Vec<DirectedEdge<W>>,
}

impl<W> EdgeWeightedDigraph<W>
where
    W: Float,
{
    /// Create an empty digraph.
    pub fn new() -> Self {
        Self::with_vertices(0)
    }

    /// Create a digraph with `n` isolated nodes.
    pub fn with_vertices(n: usize) -> Self {
        EdgeWeightedDigraph {
            adj: vec![vec![]; n],
            indegree: vec![0; n],
            edges: vec![],
        }
    }

    /// Add a new edge from `from` to `to`.
    ///
    /// The node set grows as needed. Fails only if the weight is NaN.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> Result<EdgeId> {
        if weight.is_nan() {
            return Err(Error::InvalidWeight { v: from, w: to });
        }

        Ok(self.push_edge(from, to, weight))
    }

    /// Add an edge whose weight is known to be valid.
    pub(crate) fn push_edge(&mut self, from: usize, to: usize, weight: W) -> EdgeId {
        let n = from.max(to) + 1;
        if self.adj.len() < n {
            self.adj.resize(n, vec![]);
            self.indegree.resize(n, 0);
        }

        let e = EdgeId(self.edges.len());
        self.edges.push(DirectedEdge::new(from, to, weight));
        self.adj[from].push(e);
        self.indegree[to] += 1;
        e
    }

    /// Return the number of edges entering `v`.
    pub fn indegree(&self, v: usize) -> usize {
        self.indegree[v]
    }

    /// Return `true` if there is at least one edge from `from` to `to`.
    pub fn has_edge(&self, from: usize, to: usize) -> bool {
        from < self.adj.len() && self.out_edges(from).any(|(_, e)| e.to == to)
    }

    /// Return an iterator over all edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &DirectedEdge<W>)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Return the reverse digraph.
    ///
    /// The reverse digraph has the same nodes and, for each edge `u->v`,
    /// the edge `v->u` with the same weight and the same id.
    pub fn reverse(&self) -> Self {
        let mut h = EdgeWeightedDigraph::with_vertices(self.num_vertices());
        for e in &self.edges {
            h.push_edge(e.to, e.from, e.weight);
        }
        h
    }
}

impl<W> Default for EdgeWeightedDigraph<W>
where
    W: Float,
{
    fn default() -> Self {
        EdgeWeightedDigraph::new()
    }
}

impl<W> FiniteGraph for EdgeWeightedDigraph<W>
where
    W: Float,
{
    type Weight = W;
    type Edge = DirectedEdge<W>;

    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn edge(&self, e: EdgeId) -> &DirectedEdge<W> {
        &self.edges[e.0]
    }
}

impl<W> Directed for EdgeWeightedDigraph<W>
where
    W: Float,
{
    fn out_edges(&self, v: usize) -> IncidenceIter<DirectedEdge<W>> {
        IncidenceIter {
            ids: self.adj[v].iter(),
            edges: &self.edges,
        }
    }
}

impl<W> Buildable for EdgeWeightedDigraph<W>
where
    W: Float,
{
    fn with_vertices(n: usize) -> Self {
        EdgeWeightedDigraph::with_vertices(n)
    }

    fn add_edge(&mut self, v: usize, w: usize, weight: W) -> Result<EdgeId> {
        EdgeWeightedDigraph::add_edge(self, v, w, weight)
    }
}

impl<W> fmt::Display for EdgeWeightedDigraph<W>
where
    W: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.num_vertices(), self.num_edges())?;
        for v in self.vertices() {
            write!(f, "{}:", v)?;
            for (i, (_, e)) in self.out_edges(v).enumerate() {
                write!(f, "{} {}", if i == 0 { "" } else { "," }, e)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::EdgeWeightedDigraph;
    use crate::classes::TINY_EWD;
    use crate::traits::*;
    use crate::Buildable;

    #[test]
    fn test_sizes() {
        let g = EdgeWeightedDigraph::from_edges(TINY_EWD.iter().cloned()).unwrap();
        assert_eq!(g.num_vertices(), 8);
        assert_eq!(g.num_edges(), 15);
        assert_eq!(g.vertices().map(|v| g.outdegree(v)).sum::<usize>(), 15);
        assert_eq!(g.vertices().map(|v| g.indegree(v)).sum::<usize>(), 15);

        let mut out5: Vec<_> = g.out_edges(5).map(|(_, e)| e.to()).collect();
        out5.sort();
        assert_eq!(out5, vec![1, 4, 7]);
        assert!(g.has_edge(7, 3));
        assert!(!g.has_edge(3, 7));
    }

    #[test]
    fn test_reverse() {
        let g = EdgeWeightedDigraph::from_edges(TINY_EWD.iter().cloned()).unwrap();
        let h = g.reverse();
        assert_eq!(h.num_vertices(), g.num_vertices());
        assert_eq!(h.num_edges(), g.num_edges());
        for e in g.edge_ids() {
            assert_eq!(g.edge(e).from(), h.edge(e).to());
            assert_eq!(g.edge(e).to(), h.edge(e).from());
            assert_eq!(g.edge(e).weight(), h.edge(e).weight());
        }
        for v in g.vertices() {
            assert_eq!(g.indegree(v), h.outdegree(v));
            assert_eq!(g.outdegree(v), h.indegree(v));
        }
    }

    #[test]
    fn test_display() {
        let mut g = EdgeWeightedDigraph::new();
        g.add_edge(0, 2, 0.26).unwrap();
        g.add_edge(0, 4, 0.38).unwrap();
        g.add_edge(2, 0, -1.5).unwrap();
        assert_eq!(
            g.to_string(),
            "5 vertices, 3 edges\n0: 0->2 0.26, 0->4 0.38\n1:\n2: 2->0 -1.5\n3:\n4:\n"
        );
    }

    #[test]
    fn test_nan() {
        let mut g = EdgeWeightedDigraph::new();
        assert!(g.add_edge(0, 1, f64::NAN).is_err());
        assert_eq!(g.num_vertices(), 0);
    }
}
