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

//! Implementation of Kruskal's algorithm

use super::{total_weight, SpanningForest};
use crate::collections::{MinPQ, UnionFind};
use crate::num::traits::Float;
use crate::traits::{EdgeId, Undirected, WeightedEdge};

use tracing::debug;

/// Kruskal's algorithm.
///
/// The edges are considered in order of increasing weight (edges of equal
/// weight in insertion order) and added to the forest if they connect two
/// different components. The algorithm stops early once `n-1` edges have
/// been chosen. This needs O(E log E) time.
///
/// The edges are returned in the order in which they have been added, so
/// their weights are non-decreasing.
///
/// # Example
///
/// ```
/// use ewgraph::{Buildable, EdgeWeightedGraph};
/// use ewgraph::mst::{KruskalMST, SpanningForest};
/// use ewgraph::traits::*;
///
/// let g = EdgeWeightedGraph::from_edges(vec![
///     (0, 1, 4.0), (0, 2, 1.0), (1, 2, 2.0), (1, 3, 5.0), (2, 3, 8.0),
/// ]).unwrap();
///
/// let mst = KruskalMST::new(&g);
/// assert_eq!(mst.weight(), 8.0);
/// let weights: Vec<_> = mst.edges().iter().map(|&e| g.weight(e)).collect();
/// assert_eq!(weights, vec![1.0, 2.0, 5.0]);
/// ```
pub struct KruskalMST<W = f64> {
    edges: Vec<EdgeId>,
    weight: W,
    num_vertices: usize,
}

impl<W> KruskalMST<W>
where
    W: Float,
{
    /// Compute a minimum spanning forest.
    pub fn new<G>(g: &G) -> Self
    where
        G: Undirected<Weight = W>,
    {
        let n = g.num_vertices();

        let mut pq = MinPQ::with_capacity(g.num_edges());
        pq.extend(g.edge_ids().map(|e| (e, g.weight(e))));

        let mut uf = UnionFind::new(n);
        let mut tree = Vec::with_capacity(n.saturating_sub(1));
        while tree.len() + 1 < n {
            let e = match pq.pop_min() {
                Some((e, _)) => e,
                None => break,
            };
            let (u, v) = g.edge(e).ends();
            if uf.union(u, v) {
                tree.push(e);
            }
        }

        let weight = total_weight(g, tree.iter().cloned());
        debug!(
            num_edges = tree.len(),
            components = uf.count(),
            weight = weight.to_f64().unwrap_or(f64::NAN),
            "Kruskal finished"
        );

        KruskalMST {
            edges: tree,
            weight,
            num_vertices: n,
        }
    }
}

impl<W> SpanningForest<W> for KruskalMST<W>
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

#[cfg(test)]
mod tests {
    use super::KruskalMST;
    use crate::classes::{self, TINY_EWG};
    use crate::mst::SpanningForest;
    use crate::traits::*;
    use crate::{Buildable, EdgeWeightedGraph};

    #[test]
    fn test_tiny_ewg() {
        let g = EdgeWeightedGraph::from_edges(TINY_EWG.iter().cloned()).unwrap();
        let mst = KruskalMST::new(&g);
        assert!((mst.weight() - 1.81).abs() < 1e-12);
        assert!(mst.is_spanning_tree());

        let edges: Vec<_> = mst
            .edges()
            .iter()
            .map(|&e| {
                let (u, v) = g.edge(e).ends();
                (u.min(v), u.max(v))
            })
            .collect();
        assert_eq!(edges, vec![(0, 7), (2, 3), (1, 7), (0, 2), (5, 7), (4, 5), (2, 6)]);
    }

    #[test]
    fn test_forest() {
        let g = EdgeWeightedGraph::from_edges(vec![(0, 1, 1.0), (1, 2, 2.0), (0, 2, 0.5), (3, 4, 3.0)]).unwrap();
        let mst = KruskalMST::new(&g);
        assert_eq!(mst.num_edges(), 3);
        assert_eq!(mst.weight(), 4.5);
        assert!(!mst.is_spanning_tree());
    }

    #[test]
    fn test_equal_weights() {
        let g: EdgeWeightedGraph = classes::complete_graph(6, |_, _| 1.0).unwrap();
        let mst = KruskalMST::new(&g);
        assert_eq!(mst.weight(), 5.0);
        // ties are broken by insertion order, which is a star around node 0
        for &e in mst.edges() {
            assert_eq!(g.edge(e).ends().0, 0);
        }
    }

    #[test]
    fn test_isolated() {
        let mut g = EdgeWeightedGraph::with_vertices(3);
        g.add_edge(0, 1, -2.0).unwrap();
        let mst = KruskalMST::new(&g);
        assert_eq!(mst.weight(), -2.0);
        assert!(!mst.is_spanning_tree());
    }
}
