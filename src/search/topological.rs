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

//! Topological order of a directed acyclic graph.

use crate::error::{Error, Result};
use crate::search::{DepthFirstOrder, DirectedCycle};
use crate::traits::Directed;

/// A topological order of the nodes of a directed graph.
///
/// If the graph contains a directed cycle, there is no topological order and
/// [`order`](Topological::order) returns `None`.
///
/// # Example
///
/// ```
/// use ewgraph::{Buildable, EdgeWeightedDigraph};
/// use ewgraph::search::Topological;
///
/// let g = EdgeWeightedDigraph::from_edges(vec![(2, 0, 1.0), (0, 1, 1.0), (2, 1, 1.0)]).unwrap();
/// let topo = Topological::new(&g);
/// assert!(topo.is_dag());
/// assert_eq!(topo.order(), Some(&[2, 0, 1][..]));
/// assert_eq!(topo.rank(1), Some(2));
///
/// let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 1.0), (1, 0, 1.0)]).unwrap();
/// let topo = Topological::new(&g);
/// assert!(!topo.is_dag());
/// assert_eq!(topo.order(), None);
/// ```
pub struct Topological {
    order: Option<Vec<usize>>,
    rank: Vec<usize>,
    cycle: DirectedCycle,
}

impl Topological {
    pub fn new<G>(g: &G) -> Self
    where
        G: Directed,
    {
        let cycle = DirectedCycle::new(g);
        if cycle.has_cycle() {
            return Topological {
                order: None,
                rank: vec![],
                cycle,
            };
        }

        let order: Vec<_> = DepthFirstOrder::new(g).reverse_post().cloned().collect();
        let mut rank = vec![0; order.len()];
        for (i, &u) in order.iter().enumerate() {
            rank[u] = i;
        }

        Topological {
            order: Some(order),
            rank,
            cycle,
        }
    }

    /// Compute the topological order of `g` or fail if `g` has a cycle.
    ///
    /// The error contains the nodes of a directed cycle.
    pub fn try_new<G>(g: &G) -> Result<Self>
    where
        G: Directed,
    {
        let topo = Topological::new(g);
        match topo.cycle.vertices(g) {
            Some(cycle) => Err(Error::NotAcyclic { cycle }),
            None => Ok(topo),
        }
    }

    /// Return `true` if the graph is acyclic.
    pub fn is_dag(&self) -> bool {
        self.order.is_some()
    }

    /// Return the nodes in topological order.
    ///
    /// For each edge `u -> v` the node `u` comes before `v`.
    pub fn order(&self) -> Option<&[usize]> {
        self.order.as_deref()
    }

    /// Return the position of `u` in the topological order.
    pub fn rank(&self, u: usize) -> Option<usize> {
        self.order.as_ref().map(|_| self.rank[u])
    }

    /// Return the cycle detector that has been run on the graph.
    pub fn cycle(&self) -> &DirectedCycle {
        &self.cycle
    }
}
