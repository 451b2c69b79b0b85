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

//! Single-source shortest path algorithms on directed graphs.
//!
//! All algorithms compute, for a fixed source node `s`, the distance
//! `dist_to(v)` of each node and the last edge `edge_to(v)` of a shortest
//! path from `s` to `v`. The incoming edges form a shortest path tree
//! rooted at `s`. The results are accessed through the [`ShortestPaths`]
//! trait.
//!
//! | Algorithm         | Weights            | Graph         | Running time |
//! |-------------------|--------------------|---------------|--------------|
//! | [`DijkstraSP`]    | non-negative       | any           | O(E log V)   |
//! | [`AcyclicSP`]     | arbitrary          | acyclic       | O(V + E)     |
//! | [`AcyclicLP`]     | arbitrary          | acyclic       | O(V + E)     |
//! | [`BellmanFordSP`] | arbitrary          | any           | O(V E)       |

use crate::num::traits::Float;
use crate::search::path_from_incomings;
use crate::traits::{Directed, EdgeId, FiniteGraph, WeightedEdge};

pub mod acyclic;
pub use self::acyclic::{critical_path, AcyclicLP, AcyclicSP, CriticalPath};

pub mod bellmanford;
pub use self::bellmanford::BellmanFordSP;

pub mod dijkstra;
pub use self::dijkstra::DijkstraSP;

/// Relax the edge `e` with respect to the current distances.
///
/// If the path to the source node of `edge` extended by `edge` is shorter
/// than the current distance of its sink node, the distance label and the
/// incoming edge of the sink node are updated and `true` is returned.
///
/// # Example
///
/// ```
/// use ewgraph::DirectedEdge;
/// use ewgraph::shortestpath::relax;
/// use ewgraph::traits::EdgeId;
///
/// let mut dist_to = vec![0.0, 2.0];
/// let mut edge_to = vec![None, None];
///
/// assert!(relax(EdgeId::new(0), &DirectedEdge::new(0, 1, 1.5), &mut dist_to, &mut edge_to));
/// assert_eq!(dist_to[1], 1.5);
/// assert_eq!(edge_to[1], Some(EdgeId::new(0)));
///
/// assert!(!relax(EdgeId::new(1), &DirectedEdge::new(0, 1, 1.5), &mut dist_to, &mut edge_to));
/// assert_eq!(edge_to[1], Some(EdgeId::new(0)));
/// ```
pub fn relax<W, E>(e: EdgeId, edge: &E, dist_to: &mut [W], edge_to: &mut [Option<EdgeId>]) -> bool
where
    W: Float,
    E: WeightedEdge<W>,
{
    let (u, v) = edge.ends();
    let d = dist_to[u] + edge.weight();
    if d < dist_to[v] {
        dist_to[v] = d;
        edge_to[v] = Some(e);
        true
    } else {
        false
    }
}

/// Relax the edge `e` for a longest path computation.
///
/// This is [`relax`] with the comparison reversed: the labels are updated
/// if the path via `edge` is *longer*.
pub fn relax_longest<W, E>(e: EdgeId, edge: &E, dist_to: &mut [W], edge_to: &mut [Option<EdgeId>]) -> bool
where
    W: Float,
    E: WeightedEdge<W>,
{
    let (u, v) = edge.ends();
    let d = dist_to[u] + edge.weight();
    if d > dist_to[v] {
        dist_to[v] = d;
        edge_to[v] = Some(e);
        true
    } else {
        false
    }
}

/// The result of a single-source shortest path algorithm.
pub trait ShortestPaths<W>
where
    W: Float,
{
    /// The graph type the algorithm has been run on.
    type Graph: Directed<Weight = W>;

    /// Return the graph.
    fn graph(&self) -> &Self::Graph;

    /// Return the source node.
    fn source(&self) -> usize;

    /// Return the distance label of `v`.
    ///
    /// This is `+inf` if `v` is not reachable from the source and `-inf` if
    /// `v` is reachable from a negative cycle.
    fn dist_to(&self, v: usize) -> W;

    /// Return the last edge on the path from the source to `v`.
    ///
    /// This is `None` for the source and for unreachable nodes.
    fn edge_to(&self, v: usize) -> Option<EdgeId>;

    /// Return `true` if there is a path from the source to `v`.
    fn has_path_to(&self, v: usize) -> bool {
        self.dist_to(v) < W::infinity()
    }

    /// Return the edges of a path from the source to `v`.
    ///
    /// The edges are returned in order from the source to `v`. The path to
    /// the source itself is empty. Returns `None` if there is no path.
    fn path_to(&self, v: usize) -> Option<Vec<EdgeId>> {
        if !self.has_path_to(v) {
            return None;
        }
        let g = self.graph();
        let mut path: Vec<_> = path_from_incomings(v, |u| self.edge_to(u).map(|e| (e, g.edge(e).ends().0))).collect();
        path.reverse();
        Some(path)
    }
}

#[cfg(test)]
mod tests {
    use super::{relax, relax_longest};
    use crate::traits::EdgeId;
    use crate::DirectedEdge;

    #[test]
    fn test_relax_infinite() {
        let inf = f64::INFINITY;
        let mut dist_to = vec![inf, inf];
        let mut edge_to = vec![None, None];
        let edge = DirectedEdge::new(0, 1, -5.0);
        assert!(!relax(EdgeId::new(0), &edge, &mut dist_to, &mut edge_to));
        assert_eq!(edge_to, vec![None, None]);

        let mut dist_to = vec![-inf, -inf];
        assert!(!relax_longest(EdgeId::new(0), &edge, &mut dist_to, &mut edge_to));

        dist_to[0] = 0.0;
        assert!(relax_longest(EdgeId::new(0), &edge, &mut dist_to, &mut edge_to));
        assert_eq!(dist_to[1], -5.0);
        assert_eq!(edge_to[1], Some(EdgeId::new(0)));
    }
}
