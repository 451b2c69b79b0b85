/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Traits shared by the edge-weighted graph data structures.
//!
//! Nodes are always the dense indices `0..n`. Edges are stored in an
//! arena inside the graph and referenced by an [`EdgeId`], the position of
//! the edge in insertion order. There are two levels of information:
//!
//! 1. [`FiniteGraph`]: the number of nodes and edges and access to the
//!    edge data by id.
//! 2. [`Undirected`] and [`Directed`]: the incidence lists, i.e. all edges
//!    incident to a node resp. all edges leaving a node.

use crate::error::Result;
use crate::num::traits::Float;

use std::fmt;
use std::ops::Range;

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// Objects with a unique dense index.
pub trait Indexable {
    fn index(&self) -> usize;
}

/// Identifier of an edge of a graph.
///
/// This is the index of the edge in the edge arena of the graph it has
/// been added to. An id is only meaningful with respect to its graph.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug, Hash)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EdgeId(pub(crate) usize);

impl EdgeId {
    /// Create an edge id from its index.
    pub fn new(index: usize) -> Self {
        EdgeId(index)
    }
}

impl Indexable for EdgeId {
    fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// An edge with a weight.
pub trait WeightedEdge<W> {
    /// Return the weight of this edge.
    fn weight(&self) -> W;

    /// Return the two end nodes of this edge.
    ///
    /// For a directed edge the first node is the source.
    fn ends(&self) -> (usize, usize);
}

/// A finite graph with dense node and edge indices.
pub trait FiniteGraph {
    /// The weight type.
    type Weight: Float;

    /// The edge data stored for each edge.
    type Edge: WeightedEdge<Self::Weight>;

    /// Return the number of nodes.
    fn num_vertices(&self) -> usize;

    /// Return the number of edges.
    fn num_edges(&self) -> usize;

    /// Return the data of an edge.
    ///
    /// Panics if the id does not belong to this graph.
    fn edge(&self, e: EdgeId) -> &Self::Edge;

    /// Return an iterator over all nodes.
    fn vertices(&self) -> Range<usize> {
        0..self.num_vertices()
    }

    /// Return an iterator over all edge ids in insertion order.
    fn edge_ids(&self) -> EdgeIdIter {
        EdgeIdIter(0..self.num_edges())
    }

    /// Return the weight of an edge.
    fn weight(&self, e: EdgeId) -> Self::Weight {
        self.edge(e).weight()
    }

    /// Return `Ok(())` if `v` is a node of this graph.
    fn validate_vertex(&self, v: usize) -> Result<()> {
        if v < self.num_vertices() {
            Ok(())
        } else {
            Err(crate::Error::VertexOutOfRange {
                vertex: v,
                num_vertices: self.num_vertices(),
            })
        }
    }
}

/// Iterator over a contiguous range of edge ids.
#[derive(Clone, Debug)]
pub struct EdgeIdIter(Range<usize>);

impl Iterator for EdgeIdIter {
    type Item = EdgeId;

    fn next(&mut self) -> Option<EdgeId> {
        self.0.next().map(EdgeId)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl ExactSizeIterator for EdgeIdIter {}

/// Iterator over the incidence list of some node.
///
/// The iterator returns the edge id together with a reference to the
/// edge data.
pub struct IncidenceIter<'a, E> {
    pub(crate) ids: std::slice::Iter<'a, EdgeId>,
    pub(crate) edges: &'a [E],
}

impl<'a, E> Clone for IncidenceIter<'a, E> {
    fn clone(&self) -> Self {
        IncidenceIter {
            ids: self.ids.clone(),
            edges: self.edges,
        }
    }
}

impl<'a, E> Iterator for IncidenceIter<'a, E> {
    type Item = (EdgeId, &'a E);

    fn next(&mut self) -> Option<Self::Item> {
        let edges = self.edges;
        self.ids.next().map(move |&e| (e, &edges[e.0]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'a, E> ExactSizeIterator for IncidenceIter<'a, E> {}

/// A graph with access to the undirected incident edges of each node.
pub trait Undirected: FiniteGraph {
    /// Return an iterator over the edges incident with `v`.
    fn adjacent_edges(&self, v: usize) -> IncidenceIter<Self::Edge>;

    /// Return the number of edges incident with `v`.
    fn degree(&self, v: usize) -> usize {
        self.adjacent_edges(v).len()
    }
}

/// A graph with access to the outgoing edges of each node.
pub trait Directed: FiniteGraph {
    /// Return an iterator over the edges leaving `v`.
    fn out_edges(&self, v: usize) -> IncidenceIter<Self::Edge>;

    /// Return the number of edges leaving `v`.
    fn outdegree(&self, v: usize) -> usize {
        self.out_edges(v).len()
    }
}
