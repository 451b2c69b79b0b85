// Copyright (c) 2016-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Minimum spanning tree algorithms.
//!
//! All algorithms work on undirected graphs and solve the minimum spanning
//! *forest* problem if the graph is not connected (except when explicitly
//! started at a given node, in which case only the component of that node
//! is spanned). Whether the result is a spanning tree can be checked with
//! [`SpanningForest::is_spanning_tree`].
//!
//! On a connected graph all algorithms return a tree of the same total
//! weight. If the edge weights are distinct, the tree is unique.

use crate::num::traits::{Float, Zero};
use crate::traits::{EdgeId, FiniteGraph};

pub mod kruskal;
pub use self::kruskal::KruskalMST;

pub mod lazyprim;
pub use self::lazyprim::LazyPrimMST;

pub mod prim;
pub use self::prim::PrimMST;

/// The result of a minimum spanning tree algorithm.
pub trait SpanningForest<W>
where
    W: Float,
{
    /// Return the edges of the spanning forest.
    fn edges(&self) -> &[EdgeId];

    /// Return the total weight of the spanning forest.
    fn weight(&self) -> W;

    /// Return the number of nodes of the graph.
    fn num_vertices(&self) -> usize;

    /// Return the number of edges of the spanning forest.
    fn num_edges(&self) -> usize {
        self.edges().len()
    }

    /// Return `true` if the forest is a spanning tree, i.e. if it connects
    /// all nodes of the graph.
    fn is_spanning_tree(&self) -> bool {
        self.num_vertices() == 0 || self.num_edges() + 1 == self.num_vertices()
    }
}

/// Return the sum of the weights of some edges.
fn total_weight<G, I>(g: &G, edges: I) -> G::Weight
where
    G: FiniteGraph,
    I: IntoIterator<Item = EdgeId>,
{
    edges.into_iter().fold(G::Weight::zero(), |sum, e| sum + g.weight(e))
}

/// Return the end node of `edge` that is not `v`.
fn other<G>(g: &G, e: EdgeId, v: usize) -> usize
where
    G: FiniteGraph,
{
    use crate::traits::WeightedEdge;
    let (a, b) = g.edge(e).ends();
    if a == v {
        b
    } else {
        a
    }
}
