// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Shortest and longest paths in directed acyclic graphs.
//!
//! In an acyclic graph the nodes can be processed in topological order:
//! when a node is processed, the distance labels of all its predecessors
//! are final. Hence each edge has to be relaxed only once. Negative
//! weights are allowed, and longest paths can be computed the same way.

use super::{relax, relax_longest, ShortestPaths};
use crate::error::{Error, Result};
use crate::num::traits::{Float, ToPrimitive, Zero};
use crate::search::Topological;
use crate::traits::{Directed, EdgeId, FiniteGraph, WeightedEdge};
use crate::weighteddigraph::EdgeWeightedDigraph;

use tracing::debug;

/// Relax all edges of `g` in topological order.
fn relax_in_order<G, R>(g: &G, src: usize, init: G::Weight, relax_edge: R) -> Result<(Vec<G::Weight>, Vec<Option<EdgeId>>)>
where
    G: Directed,
    R: Fn(EdgeId, &G::Edge, &mut [G::Weight], &mut [Option<EdgeId>]) -> bool,
{
    g.validate_vertex(src)?;
    let topo = Topological::try_new(g)?;

    let n = g.num_vertices();
    let mut dist_to = vec![init; n];
    let mut edge_to = vec![None; n];
    dist_to[src] = G::Weight::zero();

    for &u in topo.order().unwrap_or(&[]) {
        for (e, edge) in g.out_edges(u) {
            relax_edge(e, edge, &mut dist_to, &mut edge_to);
        }
    }

    Ok((dist_to, edge_to))
}

/// Shortest paths in a directed acyclic graph.
///
/// # Example
///
/// ```
/// use ewgraph::{Buildable, EdgeWeightedDigraph, Error};
/// use ewgraph::shortestpath::{AcyclicSP, ShortestPaths};
///
/// let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 5.0), (0, 2, 1.0), (2, 1, -3.0)]).unwrap();
/// let sp = AcyclicSP::new(&g, 0).unwrap();
/// assert_eq!(sp.dist_to(1), -2.0);
///
/// let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 1.0), (1, 0, 1.0)]).unwrap();
/// assert_eq!(AcyclicSP::new(&g, 0).err(), Some(Error::NotAcyclic { cycle: vec![0, 1, 0] }));
/// ```
pub struct AcyclicSP<'a, G>
where
    G: Directed,
{
    g: &'a G,
    src: usize,
    dist_to: Vec<G::Weight>,
    edge_to: Vec<Option<EdgeId>>,
}

impl<'a, G> AcyclicSP<'a, G>
where
    G: Directed,
{
    /// Compute shortest paths from `src`.
    ///
    /// Fails with [`Error::NotAcyclic`] if `g` contains a directed cycle.
    pub fn new(g: &'a G, src: usize) -> Result<Self> {
        let (dist_to, edge_to) = relax_in_order(g, src, G::Weight::infinity(), relax::<G::Weight, G::Edge>)?;
        debug!(src, "acyclic shortest paths finished");
        Ok(AcyclicSP { g, src, dist_to, edge_to })
    }
}

impl<'a, G> ShortestPaths<G::Weight> for AcyclicSP<'a, G>
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

/// Longest paths in a directed acyclic graph.
///
/// The distance label of nodes not reachable from the source is `-inf`.
///
/// # Example
///
/// ```
/// use ewgraph::{Buildable, EdgeWeightedDigraph};
/// use ewgraph::shortestpath::{AcyclicLP, ShortestPaths};
///
/// let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 5.0), (0, 2, 1.0), (2, 1, -3.0), (3, 0, 1.0)]).unwrap();
/// let lp = AcyclicLP::new(&g, 0).unwrap();
/// assert_eq!(lp.dist_to(1), 5.0);
/// assert_eq!(lp.dist_to(3), f64::NEG_INFINITY);
/// assert!(!lp.has_path_to(3));
/// assert_eq!(lp.path_to(1).map(|p| p.len()), Some(1));
/// ```
pub struct AcyclicLP<'a, G>
where
    G: Directed,
{
    g: &'a G,
    src: usize,
    dist_to: Vec<G::Weight>,
    edge_to: Vec<Option<EdgeId>>,
}

impl<'a, G> AcyclicLP<'a, G>
where
    G: Directed,
{
    /// Compute longest paths from `src`.
    ///
    /// Fails with [`Error::NotAcyclic`] if `g` contains a directed cycle.
    pub fn new(g: &'a G, src: usize) -> Result<Self> {
        let (dist_to, edge_to) = relax_in_order(g, src, G::Weight::neg_infinity(), relax_longest::<G::Weight, G::Edge>)?;
        debug!(src, "acyclic longest paths finished");
        Ok(AcyclicLP { g, src, dist_to, edge_to })
    }
}

impl<'a, G> ShortestPaths<G::Weight> for AcyclicLP<'a, G>
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

    fn has_path_to(&self, v: usize) -> bool {
        self.dist_to[v] > G::Weight::neg_infinity()
    }
}

/// A schedule computed by the critical path method.
#[derive(Clone, Debug)]
pub struct CriticalPath<W = f64> {
    start: Vec<W>,
    durations: Vec<W>,
    critical: Vec<usize>,
    makespan: W,
}

impl<W> CriticalPath<W>
where
    W: Float,
{
    /// Return the number of jobs.
    pub fn num_jobs(&self) -> usize {
        self.start.len()
    }

    /// Return the earliest start time of job `i`.
    pub fn start(&self, i: usize) -> W {
        self.start[i]
    }

    /// Return the earliest finish time of job `i`.
    pub fn finish(&self, i: usize) -> W {
        self.start[i] + self.durations[i]
    }

    /// Return the finish time of the whole schedule.
    pub fn makespan(&self) -> W {
        self.makespan
    }

    /// Return the jobs on a critical path in order of execution.
    ///
    /// Delaying any of these jobs delays the whole schedule.
    pub fn critical_jobs(&self) -> &[usize] {
        &self.critical
    }
}

/// Solve the parallel job scheduling problem with precedence constraints.
///
/// Job `i` takes `durations[i]` time units. Each pair `(a, b)` in
/// `precedence` requires that job `a` is finished before job `b` starts.
/// There is no limit on the number of jobs running at the same time.
///
/// The problem is reduced to a longest path problem in an acyclic graph
/// with `2n + 2` nodes: a start node `i` and an end node `n + i` for each
/// job connected by an edge of length `durations[i]`, a global source
/// `2n` and a global sink `2n + 1`, and an edge of length zero from the
/// end node of `a` to the start node of `b` for each constraint.
///
/// Fails with [`Error::EmptyGraph`] if there are no jobs,
/// [`Error::VertexOutOfRange`] if a constraint refers to an unknown job,
/// and with [`Error::NotAcyclic`] if the constraints are cyclic; in this
/// case the cycle contains the job numbers.
///
/// # Example
///
/// ```
/// use ewgraph::shortestpath::critical_path;
///
/// let cpm = critical_path(&[3.0, 2.0, 4.0, 1.0], &[(0, 1), (0, 2), (1, 3), (2, 3)]).unwrap();
/// assert_eq!(cpm.makespan(), 8.0);
/// assert_eq!(cpm.start(1), 3.0);
/// assert_eq!(cpm.start(3), 7.0);
/// assert_eq!(cpm.critical_jobs(), &[0, 2, 3]);
/// ```
pub fn critical_path<W>(durations: &[W], precedence: &[(usize, usize)]) -> Result<CriticalPath<W>>
where
    W: Float,
{
    let n = durations.len();
    if n == 0 {
        return Err(Error::EmptyGraph);
    }
    let (src, snk) = (2 * n, 2 * n + 1);

    let mut g = EdgeWeightedDigraph::with_vertices(2 * n + 2);
    for (i, &duration) in durations.iter().enumerate() {
        g.add_edge(src, i, W::zero())?;
        g.add_edge(i, n + i, duration)?;
        g.add_edge(n + i, snk, W::zero())?;
    }
    for &(a, b) in precedence {
        for &job in &[a, b] {
            if job >= n {
                return Err(Error::VertexOutOfRange {
                    vertex: job,
                    num_vertices: n,
                });
            }
        }
        g.add_edge(n + a, b, W::zero())?;
    }

    let lp = match AcyclicLP::new(&g, src) {
        Ok(lp) => lp,
        Err(Error::NotAcyclic { cycle }) => {
            let mut cycle: Vec<_> = cycle.into_iter().map(|u| u % n).collect();
            cycle.dedup();
            if cycle.len() == 1 {
                cycle.push(cycle[0]);
            }
            return Err(Error::NotAcyclic { cycle });
        }
        Err(err) => return Err(err),
    };

    let critical = lp
        .path_to(snk)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|e| {
            let (u, v) = g.edge(e).ends();
            if u < n && v == n + u {
                Some(u)
            } else {
                None
            }
        })
        .collect();

    let makespan = lp.dist_to(snk);
    debug!(
        num_jobs = n,
        makespan = makespan.to_f64().unwrap_or(f64::NAN),
        "critical path computed"
    );

    Ok(CriticalPath {
        start: (0..n).map(|i| lp.dist_to(i)).collect(),
        durations: durations.to_vec(),
        critical,
        makespan,
    })
}
