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

//! Some common graph classes and small test instances.
//!
//! The generators create the edges in a fixed order and ask a callback for
//! the weight of each edge `(v, w)`. They fail only if the graph type
//! rejects an edge, e.g. an undirected cycle of length 1 or 2.

use crate::builder::Buildable;
use crate::error::Result;

/// The undirected graph `tinyEWG` with 8 nodes and 16 edges.
///
/// Its minimum spanning tree has weight 1.81.
pub const TINY_EWG: [(usize, usize, f64); 16] = [
    (4, 5, 0.35),
    (4, 7, 0.37),
    (5, 7, 0.28),
    (0, 7, 0.16),
    (1, 5, 0.32),
    (0, 4, 0.38),
    (2, 3, 0.17),
    (1, 7, 0.19),
    (0, 2, 0.26),
    (1, 2, 0.36),
    (1, 3, 0.29),
    (2, 7, 0.34),
    (6, 2, 0.40),
    (3, 6, 0.52),
    (6, 0, 0.58),
    (6, 4, 0.93),
];

/// The directed graph `tinyEWD` with 8 nodes and 15 edges.
pub const TINY_EWD: [(usize, usize, f64); 15] = [
    (4, 5, 0.35),
    (5, 4, 0.35),
    (4, 7, 0.37),
    (5, 7, 0.28),
    (7, 5, 0.28),
    (5, 1, 0.32),
    (0, 4, 0.38),
    (0, 2, 0.26),
    (7, 3, 0.39),
    (1, 3, 0.29),
    (2, 7, 0.34),
    (6, 2, 0.40),
    (3, 6, 0.52),
    (6, 0, 0.58),
    (6, 4, 0.93),
];

/// The directed graph `tinyEWDn`, i.e. `tinyEWD` with negative weights on
/// the edges leaving node 6. It contains no negative cycle.
pub const TINY_EWDN: [(usize, usize, f64); 15] = [
    (4, 5, 0.35),
    (5, 4, 0.35),
    (4, 7, 0.37),
    (5, 7, 0.28),
    (7, 5, 0.28),
    (5, 1, 0.32),
    (0, 4, 0.38),
    (0, 2, 0.26),
    (7, 3, 0.39),
    (1, 3, 0.29),
    (2, 7, 0.34),
    (6, 2, -1.20),
    (3, 6, 0.52),
    (6, 0, -1.40),
    (6, 4, -1.25),
];

/// The directed acyclic graph `tinyEWDAG` with 8 nodes and 13 edges.
pub const TINY_EWDAG: [(usize, usize, f64); 13] = [
    (5, 4, 0.35),
    (4, 7, 0.37),
    (5, 7, 0.28),
    (5, 1, 0.32),
    (4, 0, 0.38),
    (0, 2, 0.26),
    (3, 7, 0.39),
    (1, 3, 0.29),
    (7, 2, 0.34),
    (6, 2, 0.40),
    (3, 6, 0.52),
    (6, 0, 0.58),
    (6, 4, 0.93),
];

/// The unweighted directed acyclic graph `tinyDAG` with 13 nodes.
pub const TINY_DAG: [(usize, usize); 15] = [
    (2, 3),
    (0, 6),
    (0, 1),
    (2, 0),
    (11, 12),
    (9, 12),
    (9, 10),
    (9, 11),
    (3, 5),
    (8, 7),
    (5, 4),
    (0, 5),
    (6, 4),
    (6, 9),
    (7, 6),
];

/// The unweighted directed graph `tinyDG` with 13 nodes and several cycles.
pub const TINY_DG: [(usize, usize); 22] = [
    (4, 2),
    (2, 3),
    (3, 2),
    (6, 0),
    (0, 1),
    (2, 0),
    (11, 12),
    (12, 9),
    (9, 10),
    (9, 11),
    (8, 9),
    (10, 12),
    (11, 4),
    (4, 3),
    (3, 5),
    (7, 8),
    (8, 7),
    (5, 4),
    (0, 5),
    (6, 4),
    (6, 9),
    (7, 6),
];

/// Returns a path with `m` edges.
///
/// The path is directed if G is a digraph.
///
/// # Example
///
/// ```
/// use ewgraph::{classes, EdgeWeightedDigraph};
/// use ewgraph::traits::*;
///
/// let g: EdgeWeightedDigraph = classes::path(3, |v, _| v as f64).unwrap();
/// assert_eq!(g.num_vertices(), 4);
/// assert_eq!(g.num_edges(), 3);
/// assert!(g.has_edge(2, 3));
/// assert!(!g.has_edge(3, 2));
/// ```
pub fn path<G, F>(m: usize, weight: F) -> Result<G>
where
    G: Buildable,
    F: Fn(usize, usize) -> G::Weight,
{
    let mut g = G::with_vertices(m + 1);
    for v in 0..m {
        g.add_edge(v, v + 1, weight(v, v + 1))?;
    }
    Ok(g)
}

/// Returns a cycle with length `n`.
///
/// The cycle is directed if G is directed.
pub fn cycle<G, F>(n: usize, weight: F) -> Result<G>
where
    G: Buildable,
    F: Fn(usize, usize) -> G::Weight,
{
    let mut g = G::with_vertices(n);
    for v in 0..n {
        let w = (v + 1) % n;
        g.add_edge(v, w, weight(v, w))?;
    }
    Ok(g)
}

/// Returns the complete graph on `n` nodes.
///
/// The edges are created in lexicographic order of `(v, w)` with `v < w`.
/// If G is a digraph, the edges run from smaller to larger nodes.
pub fn complete_graph<G, F>(n: usize, weight: F) -> Result<G>
where
    G: Buildable,
    F: Fn(usize, usize) -> G::Weight,
{
    let mut g = G::with_vertices(n);
    for v in 0..n {
        for w in v + 1..n {
            g.add_edge(v, w, weight(v, w))?;
        }
    }
    Ok(g)
}

/// Return a grid graph with `n` columns and `m` rows.
///
/// The nodes are numbered from left to right and from bottom to top. The
/// following is a grid graph with 5 columns and 4 rows.
///
///   15 - 16 - 17 - 18 - 19
///    |    |    |    |    |
///   10 - 11 - 12 - 13 - 14
///    |    |    |    |    |
///    5 -- 6 -- 7 -- 8 -- 9
///    |    |    |    |    |
///    0 -- 1 -- 2 -- 3 -- 4
///
/// If G is a digraph, the edges point right and up.
///
/// ```
/// use ewgraph::{classes, EdgeWeightedGraph};
/// use ewgraph::traits::*;
///
/// let g: EdgeWeightedGraph = classes::grid(5, 4, |_, _| 1.0).unwrap();
/// assert_eq!(g.num_vertices(), 20);
/// assert_eq!(g.num_edges(), 4 * 4 + 5 * 3);
///
/// assert_eq!(g.vertices().filter(|&u| g.degree(u) == 2).count(), 4);
/// assert_eq!(g.vertices().filter(|&u| g.degree(u) == 3).count(), 10);
/// assert_eq!(g.vertices().filter(|&u| g.degree(u) == 4).count(), 6);
/// ```
pub fn grid<G, F>(n: usize, m: usize, weight: F) -> Result<G>
where
    G: Buildable,
    F: Fn(usize, usize) -> G::Weight,
{
    let mut g = G::with_vertices(n * m);
    for y in 0..m {
        for x in 1..n {
            let (u, v) = (y * n + x - 1, y * n + x);
            g.add_edge(u, v, weight(u, v))?;
        }
    }
    for y in 1..m {
        for x in 0..n {
            let (u, v) = (y * n + x - n, y * n + x);
            g.add_edge(u, v, weight(u, v))?;
        }
    }
    Ok(g)
}

#[cfg(test)]
mod tests {
    use super::{complete_graph, cycle, grid, path};
    use crate::traits::*;
    use crate::{EdgeWeightedDigraph, EdgeWeightedGraph, Error};
    use std::cmp::{max, min};

    #[test]
    fn test_path() {
        let g: EdgeWeightedGraph = path(5, |v, w| (v + w) as f64).unwrap();
        assert_eq!(g.num_vertices(), 6);
        assert_eq!(g.num_edges(), 5);
        for (_, e) in g.edges() {
            let (u, v) = e.ends();
            assert_eq!(min(u, v) + 1, max(u, v));
            assert_eq!(e.weight(), (u + v) as f64);
        }
        assert_eq!(g.vertices().filter(|&u| g.degree(u) == 1).count(), 2);
        assert_eq!(g.vertices().filter(|&u| g.degree(u) == 2).count(), 4);

        let g: EdgeWeightedGraph = path(0, |_, _| 1.0).unwrap();
        assert_eq!(g.num_vertices(), 1);
        assert_eq!(g.num_edges(), 0);
    }

    #[test]
    fn test_cycle() {
        let g: EdgeWeightedGraph = cycle(42, |_, _| 1.0).unwrap();
        assert_eq!(g.num_vertices(), 42);
        assert_eq!(g.num_edges(), 42);
        assert!(g.vertices().all(|u| g.degree(u) == 2));
        assert!(g.has_edge(0, 41));

        let g: EdgeWeightedDigraph = cycle(2, |_, _| 1.0).unwrap();
        assert!(g.has_edge(0, 1) && g.has_edge(1, 0));

        let g: EdgeWeightedDigraph = cycle(1, |_, _| 1.0).unwrap();
        assert!(g.has_edge(0, 0));

        assert_eq!(
            cycle::<EdgeWeightedGraph, _>(2, |_, _| 1.0).unwrap_err(),
            Error::ParallelEdge { v: 1, w: 0 }
        );
        assert_eq!(
            cycle::<EdgeWeightedGraph, _>(1, |_, _| 1.0).unwrap_err(),
            Error::SelfLoop { vertex: 0 }
        );
    }

    #[test]
    fn test_complete() {
        let n = 12;
        let g: EdgeWeightedGraph = complete_graph(n, |_, _| 0.5).unwrap();
        assert_eq!(g.num_vertices(), n);
        assert_eq!(g.num_edges(), n * (n - 1) / 2);
        assert!(g.vertices().all(|u| g.degree(u) == n - 1));
        assert_eq!(g.total_weight(), 0.5 * (n * (n - 1) / 2) as f64);
    }

    #[test]
    fn test_grid() {
        let g: EdgeWeightedDigraph = grid(3, 2, |u, v| (10 * u + v) as f64).unwrap();
        assert_eq!(g.num_vertices(), 6);
        let edges: Vec<_> = g.edges().map(|(_, e)| (e.from(), e.to(), e.weight())).collect();
        assert_eq!(
            edges,
            vec![
                (0, 1, 1.0),
                (1, 2, 12.0),
                (3, 4, 34.0),
                (4, 5, 45.0),
                (0, 3, 3.0),
                (1, 4, 14.0),
                (2, 5, 25.0),
            ]
        );
    }
}
