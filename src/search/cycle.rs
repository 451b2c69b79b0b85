/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Detection of directed cycles.

use crate::search::path_from_incomings;
use crate::traits::{Directed, EdgeId, IncidenceIter, WeightedEdge};

/// Find a directed cycle with a depth-first search.
///
/// A node is *on the stack* while the search is exploring its outgoing
/// edges. An edge leading to a node on the stack closes a cycle, which is
/// reconstructed from the incoming tree edges of the search.
///
/// # Example
///
/// ```
/// use ewgraph::{Buildable, EdgeWeightedDigraph};
/// use ewgraph::search::DirectedCycle;
/// use ewgraph::traits::*;
///
/// let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 1.0), (1, 2, 1.0), (2, 0, 1.0), (2, 3, 1.0)]).unwrap();
/// let finder = DirectedCycle::new(&g);
/// assert!(finder.has_cycle());
/// assert_eq!(finder.vertices(&g), Some(vec![0, 1, 2, 0]));
///
/// let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 1.0), (1, 2, 1.0), (0, 2, 1.0)]).unwrap();
/// assert!(!DirectedCycle::new(&g).has_cycle());
/// ```
pub struct DirectedCycle {
    cycle: Option<Vec<EdgeId>>,
}

impl DirectedCycle {
    pub fn new<G>(g: &G) -> Self
    where
        G: Directed,
    {
        let n = g.num_vertices();
        let mut marked = vec![false; n];
        let mut on_stack = vec![false; n];
        let mut edge_to: Vec<Option<EdgeId>> = vec![None; n];

        let mut stack: Vec<(usize, IncidenceIter<G::Edge>)> = Vec::new();
        for s in g.vertices() {
            if marked[s] {
                continue;
            }
            marked[s] = true;
            on_stack[s] = true;
            stack.push((s, g.out_edges(s)));

            while let Some((u, mut it)) = stack.pop() {
                if let Some((e, edge)) = it.next() {
                    stack.push((u, it));
                    let (_, v) = edge.ends();
                    if on_stack[v] {
                        // walk back from `u` to `v` along the tree edges
                        let mut cycle: Vec<_> = path_from_incomings(u, |x| {
                            if x == v {
                                None
                            } else {
                                edge_to[x].map(|f| (f, g.edge(f).ends().0))
                            }
                        })
                        .collect();
                        cycle.reverse();
                        cycle.push(e);
                        return DirectedCycle { cycle: Some(cycle) };
                    } else if !marked[v] {
                        marked[v] = true;
                        on_stack[v] = true;
                        edge_to[v] = Some(e);
                        stack.push((v, g.out_edges(v)));
                    }
                } else {
                    on_stack[u] = false;
                }
            }
        }

        DirectedCycle { cycle: None }
    }

    /// Return `true` if the graph contains a directed cycle.
    pub fn has_cycle(&self) -> bool {
        self.cycle.is_some()
    }

    /// Return the edges of the cycle in traversal order.
    ///
    /// The sink of the last edge is the source of the first edge.
    pub fn cycle(&self) -> Option<&[EdgeId]> {
        self.cycle.as_deref()
    }

    /// Return the nodes of the cycle in traversal order.
    ///
    /// The first node is repeated at the end.
    pub fn vertices<G>(&self, g: &G) -> Option<Vec<usize>>
    where
        G: Directed,
    {
        self.cycle.as_ref().map(|cycle| {
            let mut nodes: Vec<_> = cycle.iter().map(|&e| g.edge(e).ends().0).collect();
            if let Some(&last) = cycle.last() {
                nodes.push(g.edge(last).ends().1);
            }
            nodes
        })
    }
}

#[cfg(test)]
mod tests {
    use super::DirectedCycle;
    use crate::classes::{TINY_DAG, TINY_DG};
    use crate::traits::*;
    use crate::{Buildable, EdgeWeightedDigraph};

    fn check_cycle(g: &EdgeWeightedDigraph, cycle: &[EdgeId]) {
        assert!(!cycle.is_empty());
        for w in cycle.windows(2) {
            assert_eq!(g.edge(w[0]).to(), g.edge(w[1]).from());
        }
        assert_eq!(g.edge(cycle[cycle.len() - 1]).to(), g.edge(cycle[0]).from());
    }

    #[test]
    fn test_tiny_dg() {
        let g = EdgeWeightedDigraph::from_edges(TINY_DG.iter().map(|&(u, v)| (u, v, 1.0))).unwrap();
        let finder = DirectedCycle::new(&g);
        assert!(finder.has_cycle());
        check_cycle(&g, finder.cycle().unwrap());
        assert_eq!(finder.vertices(&g), Some(vec![2, 3, 2]));
    }

    #[test]
    fn test_dag() {
        let g = EdgeWeightedDigraph::from_edges(TINY_DAG.iter().map(|&(u, v)| (u, v, 1.0))).unwrap();
        let finder = DirectedCycle::new(&g);
        assert!(!finder.has_cycle());
        assert_eq!(finder.cycle(), None);
        assert_eq!(finder.vertices(&g), None);
    }

    #[test]
    fn test_self_loop() {
        let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 1.0), (1, 1, -1.0)]).unwrap();
        let finder = DirectedCycle::new(&g);
        assert_eq!(finder.cycle(), Some(&[EdgeId::new(1)][..]));
        assert_eq!(finder.vertices(&g), Some(vec![1, 1]));
    }
}
