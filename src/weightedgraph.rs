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

//! Undirected edge-weighted graphs.
//!
//! # Example
//!
//! ```
//! use ewgraph::EdgeWeightedGraph;
//! use ewgraph::traits::*;
//!
//! let mut g = EdgeWeightedGraph::new();
//! g.add_edge(0, 1, 0.5).unwrap();
//! g.add_edge(1, 2, 0.25).unwrap();
//!
//! assert_eq!(g.num_vertices(), 3);
//! assert_eq!(g.num_edges(), 2);
//! assert_eq!(g.degree(1), 2);
//!
//! // self-loops and parallel edges are rejected
//! assert!(g.add_edge(2, 2, 1.0).is_err());
//! assert!(g.add_edge(2, 1, 1.0).is_err());
//! ```

use crate::builder::Buildable;
use crate::error::{Error, Result};
use crate::num::traits::Float;
use crate::traits::{EdgeId, FiniteGraph, IncidenceIter, Undirected, WeightedEdge};

use std::collections::HashSet;
use std::fmt;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// An undirected weighted edge.
#[derive(PartialEq, Clone, Copy, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Edge<W = f64> {
    v: usize,
    w: usize,
    weight: W,
}

impl<W> Edge<W>
where
    W: Copy,
{
    /// Create a new edge between `v` and `w`.
    pub fn new(v: usize, w: usize, weight: W) -> Self {
        Edge { v, w, weight }
    }

    /// Return one of the end nodes.
    pub fn either(&self) -> usize {
        self.v
    }

    /// Return the end node that is not `u`.
    ///
    /// Returns `None` if `u` is not an end node of this edge.
    pub fn other(&self, u: usize) -> Option<usize> {
        if u == self.v {
            Some(self.w)
        } else if u == self.w {
            Some(self.v)
        } else {
            None
        }
    }
}

impl<W> WeightedEdge<W> for Edge<W>
where
    W: Copy,
{
    fn weight(&self) -> W {
        self.weight
    }

    fn ends(&self) -> (usize, usize) {
        (self.v, self.w)
    }
}

impl<W> fmt::Display for Edge<W>
where
    W: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{} {}", self.v, self.w, self.weight)
    }
}

/// An undirected graph with weighted edges.
///
/// The edges are stored in an arena, the incidence list of each node
/// contains the ids of the incident edges in insertion order. Each edge
/// is contained in exactly two incidence lists.
///
/// The graph is simple: self-loops and parallel edges are rejected by
/// [`add_edge`](EdgeWeightedGraph::add_edge).
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EdgeWeightedGraph<W = f64> {
    adj: Vec<Vec<EdgeId>>,
    edges: Vec<Edge<W>>,
    /// The end nodes `(min, max)` of all edges.
    pairs: HashSet<(usize, usize)>,
}

impl<W> EdgeWeightedGraph<W>
where
    W: Float,
{
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::with_vertices(0)
    }

    /// Create a graph with `n` isolated nodes.
    pub fn with_vertices(n: usize) -> Self {
        EdgeWeightedGraph {
            adj: vec![vec![]; n],
            edges: vec![],
            pairs: HashSet::new(),
        }
    }

    /// Add a new edge between `v` and `w`.
    ///
    /// The node set grows as needed so that both `v` and `w` are nodes of the
    /// graph afterwards. The function fails if the edge would be a self-loop,
    /// parallel to an existing edge or if its weight is NaN. In this case the
    /// graph is not modified.
    pub fn add_edge(&mut self, v: usize, w: usize, weight: W) -> Result<EdgeId> {
        if weight.is_nan() {
            return Err(Error::InvalidWeight { v, w });
        }
        if v == w {
            return Err(Error::SelfLoop { vertex: v });
        }
        if !self.pairs.insert((v.min(w), v.max(w))) {
            return Err(Error::ParallelEdge { v, w });
        }

        let n = v.max(w) + 1;
        if self.adj.len() < n {
            self.adj.resize(n, vec![]);
        }

        let e = EdgeId(self.edges.len());
        self.edges.push(Edge::new(v, w, weight));
        self.adj[v].push(e);
        self.adj[w].push(e);
        Ok(e)
    }

    /// Return `true` if there is an edge between `v` and `w`.
    pub fn has_edge(&self, v: usize, w: usize) -> bool {
        self.pairs.contains(&(v.min(w), v.max(w)))
    }

    /// Return an iterator over all edges.
    ///
    /// Each edge is returned exactly once, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge<W>)> + '_ {
        self.edges.iter().enumerate().map(|(i, e)| (EdgeId(i), e))
    }

    /// Return the sum of all edge weights.
    pub fn total_weight(&self) -> W {
        self.edges.iter().fold(W::zero(), |sum, e| sum + e.weight)
    }
}

impl<W> Default for EdgeWeightedGraph<W>
where
    W: Float,
{
    fn default() -> Self {
        EdgeWeightedGraph::new()
    }
}

impl<W> FiniteGraph for EdgeWeightedGraph<W>
where
    W: Float,
{
    type Weight = W;
    type Edge = Edge<W>;

    fn num_vertices(&self) -> usize {
        self.adj.len()
    }

    fn num_edges(&self) -> usize {
        self.edges.len()
    }

    fn edge(&self, e: EdgeId) -> &Edge<W> {
        &self.edges[e.0]
    }
}

impl<W> Undirected for EdgeWeightedGraph<W>
where
    W: Float,
{
    fn adjacent_edges(&self, v: usize) -> IncidenceIter<Edge<W>> {
        IncidenceIter {
            ids: self.adj[v].iter(),
            edges: &self.edges,
        }
    }
}

impl<W> Buildable for EdgeWeightedGraph<W>
where
    W: Float,
{
    fn with_vertices(n: usize) -> Self {
        EdgeWeightedGraph::with_vertices(n)
    }

    fn add_edge(&mut self, v: usize, w: usize, weight: W) -> Result<EdgeId> {
        EdgeWeightedGraph::add_edge(self, v, w, weight)
    }
}

impl<W> fmt::Display for EdgeWeightedGraph<W>
where
    W: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{} vertices, {} edges", self.num_vertices(), self.num_edges())?;
        for v in self.vertices() {
            write!(f, "{}:", v)?;
            for (i, (_, e)) in self.adjacent_edges(v).enumerate() {
                write!(f, "{} {}", if i == 0 { "" } else { "," }, e)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Edge, EdgeWeightedGraph};
    use crate::traits::*;
    use crate::Error;

    fn tiny() -> EdgeWeightedGraph {
        let mut g = EdgeWeightedGraph::new();
        for &(v, w, weight) in crate::classes::TINY_EWG.iter() {
            g.add_edge(v, w, weight).unwrap();
        }
        g
    }

    #[test]
    fn test_sizes() {
        let g = tiny();
        assert_eq!(g.num_vertices(), 8);
        assert_eq!(g.num_edges(), 16);
        assert_eq!(g.edges().count(), 16);
        assert_eq!(g.vertices().map(|v| g.degree(v)).sum::<usize>(), 32);
    }

    #[test]
    fn test_incidence() {
        let g = tiny();
        for v in g.vertices() {
            for (e, edge) in g.adjacent_edges(v) {
                assert_eq!(g.edge(e), edge);
                let w = edge.other(v).unwrap();
                assert!(g.adjacent_edges(w).any(|(f, _)| f == e));
            }
        }
        let mut adj5: Vec<_> = g.adjacent_edges(5).map(|(_, e)| e.other(5).unwrap()).collect();
        adj5.sort();
        assert_eq!(adj5, vec![1, 4, 7]);
    }

    #[test]
    fn test_other() {
        let e = Edge::new(3, 7, 0.5);
        assert_eq!(e.either(), 3);
        assert_eq!(e.other(3), Some(7));
        assert_eq!(e.other(7), Some(3));
        assert_eq!(e.other(4), None);
        assert_eq!(e.weight(), 0.5);
        assert_eq!(e.ends(), (3, 7));
    }

    #[test]
    fn test_rejects() {
        let mut g = EdgeWeightedGraph::new();
        g.add_edge(0, 1, 1.0).unwrap();
        assert_eq!(g.add_edge(1, 1, 1.0), Err(Error::SelfLoop { vertex: 1 }));
        assert_eq!(g.add_edge(1, 0, 2.0), Err(Error::ParallelEdge { v: 1, w: 0 }));
        assert_eq!(g.add_edge(1, 2, f64::NAN), Err(Error::InvalidWeight { v: 1, w: 2 }));
        // nothing has been modified
        assert_eq!(g.num_vertices(), 2);
        assert_eq!(g.num_edges(), 1);
        assert!(g.has_edge(1, 0));
        assert!(!g.has_edge(1, 2));
    }

    #[test]
    fn test_isolated() {
        let mut g = EdgeWeightedGraph::<f64>::with_vertices(5);
        assert_eq!(g.num_vertices(), 5);
        g.add_edge(1, 2, -1.0).unwrap();
        assert_eq!(g.num_vertices(), 5);
        assert_eq!(g.degree(0), 0);
        assert_eq!(g.total_weight(), -1.0);
    }

    #[test]
    fn test_display() {
        let mut g = EdgeWeightedGraph::new();
        g.add_edge(0, 1, 0.5).unwrap();
        g.add_edge(2, 0, 0.25).unwrap();
        assert_eq!(
            g.to_string(),
            "3 vertices, 2 edges\n0: 0-1 0.5, 2-0 0.25\n1: 0-1 0.5\n2: 2-0 0.25\n"
        );
    }

    #[cfg(feature = "serialize")]
    #[test]
    fn test_serde() {
        let g = tiny();
        let serialized = serde_json::to_string(&g).unwrap();
        let h: EdgeWeightedGraph = serde_json::from_str(&serialized).unwrap();
        assert_eq!(g.num_vertices(), h.num_vertices());
        assert_eq!(g.num_edges(), h.num_edges());
        for e in g.edge_ids() {
            assert_eq!(g.edge(e), h.edge(e));
        }
    }
}
