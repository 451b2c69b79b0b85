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

//! The shortest-path algorithm by Moore-Bellman-Ford.

use super::{relax, ShortestPaths};
use crate::error::Result;
use crate::num::traits::{Float, Zero};
use crate::search::DirectedCycle;
use crate::traits::{Directed, EdgeId, Indexable, WeightedEdge};
use crate::weighteddigraph::EdgeWeightedDigraph;

use std::collections::VecDeque;
use tracing::{debug, trace};

/// Shortest paths with arbitrary edge weights.
///
/// This is the queue-based variant of the algorithm: only the out-edges of
/// nodes whose distance label has been decreased are relaxed, and each node
/// is contained in the queue at most once.
///
/// After every `n` node relaxations the graph of incoming edges is checked
/// for a directed cycle. Such a cycle is always a negative cycle. If one
/// is found, the algorithm stops. In this case there is no shortest path
/// to any node reachable from a negative cycle: [`has_path_to`] returns
/// `false` and [`dist_to`] returns `-inf` for these nodes. The labels of
/// the remaining nodes are valid paths from the source but not necessarily
/// shortest ones.
///
/// [`has_path_to`]: ShortestPaths::has_path_to
/// [`dist_to`]: ShortestPaths::dist_to
///
/// # Example
///
/// ```
/// use ewgraph::{Buildable, EdgeWeightedDigraph};
/// use ewgraph::shortestpath::{BellmanFordSP, ShortestPaths};
/// use ewgraph::traits::*;
///
/// let g = EdgeWeightedDigraph::from_edges(vec![
///     (0, 1, 4.0), (0, 2, 1.0), (2, 1, -2.0), (1, 3, 1.0),
/// ]).unwrap();
/// let sp = BellmanFordSP::new(&g, 0).unwrap();
/// assert!(!sp.has_negative_cycle());
/// assert_eq!(sp.dist_to(3), 0.0);
///
/// // 1 -> 3 -> 1 has weight -1
/// let g = EdgeWeightedDigraph::from_edges(vec![
///     (0, 1, 4.0), (0, 2, 1.0), (1, 3, 1.0), (3, 1, -2.0),
/// ]).unwrap();
/// let sp = BellmanFordSP::new(&g, 0).unwrap();
/// assert!(sp.has_negative_cycle());
/// assert_eq!(sp.negative_cycle().map(|c| c.len()), Some(2));
/// assert!(sp.has_path_to(2));
/// assert!(!sp.has_path_to(1));
/// assert_eq!(sp.dist_to(1), f64::NEG_INFINITY);
/// assert_eq!(sp.path_to(3), None);
/// ```
pub struct BellmanFordSP<'a, G>
where
    G: Directed,
{
    g: &'a G,
    src: usize,
    dist_to: Vec<G::Weight>,
    edge_to: Vec<Option<EdgeId>>,
    cycle: Option<Vec<EdgeId>>,
    /// Nodes reachable from a negative cycle.
    unbounded: Vec<bool>,
}

impl<'a, G> BellmanFordSP<'a, G>
where
    G: Directed,
{
    /// Run the algorithm on `g` from `src`.
    pub fn new(g: &'a G, src: usize) -> Result<Self> {
        g.validate_vertex(src)?;

        let n = g.num_vertices();
        let mut sp = BellmanFordSP {
            g,
            src,
            dist_to: vec![G::Weight::infinity(); n],
            edge_to: vec![None; n],
            cycle: None,
            unbounded: vec![false; n],
        };

        let mut on_queue = vec![false; n];
        let mut queue = VecDeque::with_capacity(n);
        sp.dist_to[src] = G::Weight::zero();
        queue.push_back(src);
        on_queue[src] = true;

        let mut cost = 0;
        while let Some(u) = queue.pop_front() {
            on_queue[u] = false;
            for (e, edge) in g.out_edges(u) {
                if relax(e, edge, &mut sp.dist_to, &mut sp.edge_to) {
                    let v = edge.ends().1;
                    if !on_queue[v] {
                        queue.push_back(v);
                        on_queue[v] = true;
                    }
                }
            }

            cost += 1;
            if cost % n == 0 {
                trace!(cost, "checking for a negative cycle");
                if let Some(cycle) = sp.find_negative_cycle() {
                    sp.cycle = Some(cycle);
                    break;
                }
            }
        }

        if sp.cycle.is_some() {
            sp.mark_unbounded();
        }

        debug!(
            src,
            relaxations = cost,
            negative_cycle = sp.cycle.is_some(),
            "Bellman-Ford finished"
        );

        Ok(sp)
    }

    /// Search the graph of incoming edges for a directed cycle.
    fn find_negative_cycle(&self) -> Option<Vec<EdgeId>> {
        let mut spt = EdgeWeightedDigraph::with_vertices(self.g.num_vertices());
        let mut ids = Vec::with_capacity(self.g.num_vertices());
        for e in self.edge_to.iter().filter_map(|&e| e) {
            let (u, v) = self.g.edge(e).ends();
            spt.push_edge(u, v, self.g.weight(e));
            ids.push(e);
        }

        DirectedCycle::new(&spt)
            .cycle()
            .map(|cycle| cycle.iter().map(|e| ids[e.index()]).collect())
    }

    /// Mark all nodes reachable from some cycle of incoming edges.
    fn mark_unbounded(&mut self) {
        let g = self.g;
        let n = g.num_vertices();

        // Each node has at most one incoming edge, so following them from
        // any node either ends at a root or runs into a cycle.
        let mut state = vec![0u8; n];
        let mut stack = vec![];
        for s in 0..n {
            let mut walk = vec![];
            let mut u = s;
            while state[u] == 0 {
                state[u] = 1;
                walk.push(u);
                match self.edge_to[u] {
                    Some(e) => u = g.edge(e).ends().0,
                    None => break,
                }
            }
            if state[u] == 1 && self.edge_to[u].is_some() && !self.unbounded[u] {
                // `u` closes a cycle of the current walk
                let start = u;
                loop {
                    self.unbounded[u] = true;
                    stack.push(u);
                    u = match self.edge_to[u] {
                        Some(e) => g.edge(e).ends().0,
                        None => break,
                    };
                    if u == start {
                        break;
                    }
                }
            }
            for w in walk {
                state[w] = 2;
            }
        }

        while let Some(u) = stack.pop() {
            for (_, edge) in g.out_edges(u) {
                let v = edge.ends().1;
                if !self.unbounded[v] {
                    self.unbounded[v] = true;
                    stack.push(v);
                }
            }
        }
    }

    /// Return `true` if a negative cycle reachable from the source has been
    /// found.
    pub fn has_negative_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Return the edges of the negative cycle in traversal order.
    pub fn negative_cycle(&self) -> Option<&[EdgeId]> {
        self.cycle.as_deref()
    }
}

impl<'a, G> ShortestPaths<G::Weight> for BellmanFordSP<'a, G>
where
    G: Directed,
{
    type Graph = G;

    fn graph(&self) -> &G {
        self.g
    }

    fn source(&self) -> usize {
        self.src
    }

    fn dist_to(&self, v: usize) -> G::Weight {
        if self.unbounded[v] {
            G::Weight::neg_infinity()
        } else {
            self.dist_to[v]
        }
    }

    fn edge_to(&self, v: usize) -> Option<EdgeId> {
        self.edge_to[v]
    }

    fn has_path_to(&self, v: usize) -> bool {
        !self.unbounded[v] && self.dist_to[v] < G::Weight::infinity()
    }
}

#[cfg(test)]
mod tests {
    use super::BellmanFordSP;
    use crate::classes::{TINY_EWD, TINY_EWDN};
    use crate::shortestpath::{DijkstraSP, ShortestPaths};
    use crate::traits::*;
    use crate::{Buildable, EdgeWeightedDigraph};

    #[test]
    fn test_tiny_ewdn() {
        let g = EdgeWeightedDigraph::from_edges(TINY_EWDN.iter().cloned()).unwrap();
        let sp = BellmanFordSP::new(&g, 0).unwrap();
        assert!(!sp.has_negative_cycle());
        assert_eq!(sp.negative_cycle(), None);

        let expected = [0.0, 0.93, 0.26, 0.99, 0.26, 0.61, 1.51, 0.60];
        for v in g.vertices() {
            assert!((sp.dist_to(v) - expected[v]).abs() < 1e-12, "dist_to({})", v);
            assert!(sp.has_path_to(v));
        }

        let path: Vec<_> = sp.path_to(1).unwrap().into_iter().map(|e| g.edge(e).to()).collect();
        assert_eq!(path, vec![2, 7, 3, 6, 4, 5, 1]);
    }

    #[test]
    fn test_same_as_dijkstra() {
        let g = EdgeWeightedDigraph::from_edges(TINY_EWD.iter().cloned()).unwrap();
        for s in g.vertices() {
            let bf = BellmanFordSP::new(&g, s).unwrap();
            let dijkstra = DijkstraSP::new(&g, s).unwrap();
            for v in g.vertices() {
                assert!((bf.dist_to(v) - dijkstra.dist_to(v)).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_negative_cycle() {
        let mut edges = TINY_EWDN.to_vec();
        edges[1] = (5, 4, -0.66);
        let g = EdgeWeightedDigraph::from_edges(edges).unwrap();
        let sp = BellmanFordSP::new(&g, 0).unwrap();
        assert!(sp.has_negative_cycle());

        let cycle = sp.negative_cycle().unwrap();
        for w in cycle.windows(2) {
            assert_eq!(g.edge(w[0]).to(), g.edge(w[1]).from());
        }
        assert_eq!(g.edge(cycle[cycle.len() - 1]).to(), g.edge(cycle[0]).from());
        assert!(cycle.iter().map(|&e| g.weight(e)).sum::<f64>() < 0.0);

        // every node is reachable from 4 and 5
        for v in g.vertices() {
            assert!(!sp.has_path_to(v));
            assert_eq!(sp.dist_to(v), f64::NEG_INFINITY);
            assert_eq!(sp.path_to(v), None);
        }
    }

    #[test]
    fn test_unbounded_labels() {
        // 1 -> 2 -> 1 has weight -2, node 3 is only reachable from the source
        let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 1.0), (1, 2, -3.0), (2, 1, 1.0), (0, 3, 4.0)]).unwrap();
        let sp = BellmanFordSP::new(&g, 0).unwrap();
        assert!(sp.has_negative_cycle());
        assert_eq!(sp.dist_to(0), 0.0);
        assert_eq!(sp.dist_to(3), 4.0);
        for v in 1..3 {
            assert!(!sp.has_path_to(v));
            assert_eq!(sp.dist_to(v), f64::NEG_INFINITY);
        }
    }

    #[test]
    fn test_unreachable_negative_cycle() {
        let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 1.0), (2, 3, -1.0), (3, 2, -1.0)]).unwrap();
        let sp = BellmanFordSP::new(&g, 0).unwrap();
        assert!(!sp.has_negative_cycle());
        assert!(sp.has_path_to(1));
        assert!(!sp.has_path_to(2));
    }

    #[test]
    fn test_negative_self_loop() {
        let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 1.0), (1, 1, -0.5), (0, 2, 2.0)]).unwrap();
        let sp = BellmanFordSP::new(&g, 0).unwrap();
        assert!(sp.has_negative_cycle());
        assert_eq!(sp.negative_cycle(), Some(&[EdgeId::new(1)][..]));
        assert!(!sp.has_path_to(1));
        assert!(sp.has_path_to(2));
        assert_eq!(sp.dist_to(2), 2.0);
    }
}
