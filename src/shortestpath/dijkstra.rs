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

//! Dijkstra's shortest path algorithm.
//!
//! Dijkstra's algorithm computes the shortest path from some start node $s \in
//! V$ to all other nodes in a directed graph. Each edge is assigned a
//! non-negative weight (or length) $w \colon E \to \mathbb{R}_+$.
//!
//! # Example
//!
//! ```
//! use ewgraph::{Buildable, EdgeWeightedDigraph};
//! use ewgraph::shortestpath::{DijkstraSP, ShortestPaths};
//! use ewgraph::traits::*;
//!
//! let g = EdgeWeightedDigraph::from_edges(vec![
//!     (0, 1, 9.0), (0, 2, 2.0), (2, 1, 6.0), (1, 3, 6.0), (2, 3, 8.0), (3, 4, 1.0),
//! ]).unwrap();
//!
//! let sp = DijkstraSP::new(&g, 0).unwrap();
//! assert_eq!(sp.dist_to(1), 8.0);
//! assert_eq!(sp.dist_to(4), 11.0);
//!
//! let path: Vec<_> = sp.path_to(4).unwrap().into_iter().map(|e| g.edge(e).to()).collect();
//! assert_eq!(path, vec![2, 3, 4]);
//! ```

use super::{relax, ShortestPaths};
use crate::collections::{IndexMinPQ, IndexPriQueue};
use crate::error::{Error, Result};
use crate::num::traits::{Float, ToPrimitive, Zero};
use crate::traits::{Directed, EdgeId, WeightedEdge};

use tracing::debug;

/// Shortest paths computed by Dijkstra's algorithm.
///
/// The nodes are settled in order of increasing distance using an indexed
/// priority queue of the unsettled nodes with a finite distance label.
///
/// Negative edge weights are not allowed. They are reported as an error
/// before the search starts, even if the edge is not reachable from the
/// source.
pub struct DijkstraSP<'a, G>
where
    G: Directed,
{
    g: &'a G,
    src: usize,
    dist_to: Vec<G::Weight>,
    edge_to: Vec<Option<EdgeId>>,
}

impl<'a, G> DijkstraSP<'a, G>
where
    G: Directed,
{
    /// Run Dijkstra's algorithm on `g` from `src`.
    pub fn new(g: &'a G, src: usize) -> Result<Self> {
        g.validate_vertex(src)?;
        for e in g.edge_ids() {
            let weight = g.weight(e);
            if weight < G::Weight::zero() {
                let (from, to) = g.edge(e).ends();
                return Err(Error::NegativeWeight {
                    from,
                    to,
                    weight: weight.to_f64().unwrap_or(f64::NEG_INFINITY),
                });
            }
        }

        let n = g.num_vertices();
        let mut dist_to = vec![G::Weight::infinity(); n];
        let mut edge_to = vec![None; n];
        let mut pq = IndexMinPQ::<G::Weight>::with_capacity(n);

        dist_to[src] = G::Weight::zero();
        pq.insert(src, G::Weight::zero());

        let mut num_settled = 0;
        while let Some((u, _)) = pq.pop_min() {
            num_settled += 1;
            for (e, edge) in g.out_edges(u) {
                if relax(e, edge, &mut dist_to, &mut edge_to) {
                    let v = edge.ends().1;
                    let d = dist_to[v];
                    if !pq.decrease_key(v, d) {
                        pq.insert(v, d);
                    }
                }
            }
        }

        debug!(src, num_settled, "Dijkstra finished");

        Ok(DijkstraSP { g, src, dist_to, edge_to })
    }
}

impl<'a, G> ShortestPaths<G::Weight> for DijkstraSP<'a, G>
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
        self.dist_to[v]
    }

    fn edge_to(&self, v: usize) -> Option<EdgeId> {
        self.edge_to[v]
    }
}
