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

use ewgraph::classes::{TINY_EWD, TINY_EWDAG, TINY_EWDN};
use ewgraph::shortestpath::{critical_path, AcyclicLP, AcyclicSP, BellmanFordSP, DijkstraSP, ShortestPaths};
use ewgraph::traits::*;
use ewgraph::{Buildable, EdgeWeightedDigraph, Error};

use std::thread;

/// Check the optimality conditions of the distance labels.
///
/// No edge between reachable nodes can be relaxed, and the edges returned
/// by `path_to` add up to the distance label.
fn check_labels<S>(sp: &S)
where
    S: ShortestPaths<f64, Graph = EdgeWeightedDigraph>,
{
    let g = sp.graph();
    for (_, e) in g.edges() {
        if sp.has_path_to(e.from()) {
            assert!(
                sp.dist_to(e.to()) <= sp.dist_to(e.from()) + e.weight() + 1e-12,
                "edge {} -> {} is not relaxed",
                e.from(),
                e.to()
            );
        }
    }

    for v in g.vertices() {
        if !sp.has_path_to(v) {
            assert_eq!(sp.path_to(v), None);
            continue;
        }
        let path = sp.path_to(v).unwrap();
        let mut u = sp.source();
        let mut length = 0.0;
        for &e in &path {
            assert_eq!(g.edge(e).from(), u);
            u = g.edge(e).to();
            length += g.weight(e);
        }
        assert_eq!(u, v);
        assert!((length - sp.dist_to(v)).abs() < 1e-12);
        // nothing is consumed by asking twice
        assert_eq!(sp.path_to(v), Some(path));
    }
}

fn targets(g: &EdgeWeightedDigraph, path: Option<Vec<EdgeId>>) -> Option<Vec<usize>> {
    path.map(|p| p.into_iter().map(|e| g.edge(e).to()).collect())
}

#[test]
fn test_dijkstra_labels() {
    let g = EdgeWeightedDigraph::from_edges(TINY_EWD.iter().cloned()).unwrap();
    for s in g.vertices() {
        check_labels(&DijkstraSP::new(&g, s).unwrap());
    }
}

#[test]
fn test_bellmanford_labels() {
    let g = EdgeWeightedDigraph::from_edges(TINY_EWDN.iter().cloned()).unwrap();
    for s in g.vertices() {
        let sp = BellmanFordSP::new(&g, s).unwrap();
        assert!(!sp.has_negative_cycle());
        check_labels(&sp);
    }
}

#[test]
fn test_acyclic_labels() {
    let g = EdgeWeightedDigraph::from_edges(TINY_EWDAG.iter().cloned()).unwrap();
    for s in g.vertices() {
        let sp = AcyclicSP::new(&g, s).unwrap();
        check_labels(&sp);

        // agrees with the general algorithms
        let dijkstra = DijkstraSP::new(&g, s).unwrap();
        let bf = BellmanFordSP::new(&g, s).unwrap();
        for v in g.vertices() {
            assert_eq!(sp.has_path_to(v), dijkstra.has_path_to(v));
            if sp.has_path_to(v) {
                assert!((sp.dist_to(v) - dijkstra.dist_to(v)).abs() < 1e-12);
                assert!((sp.dist_to(v) - bf.dist_to(v)).abs() < 1e-12);
            }
        }
    }
}

#[test]
fn test_longest_paths() {
    let g = EdgeWeightedDigraph::from_edges(TINY_EWDAG.iter().cloned()).unwrap();
    let lp = AcyclicLP::new(&g, 5).unwrap();

    // longest paths are shortest paths with negated weights
    let neg = EdgeWeightedDigraph::from_edges(TINY_EWDAG.iter().map(|&(u, v, w)| (u, v, -w))).unwrap();
    let sp = BellmanFordSP::new(&neg, 5).unwrap();
    assert!(!sp.has_negative_cycle());

    for v in g.vertices() {
        assert!(lp.has_path_to(v));
        assert!((lp.dist_to(v) + sp.dist_to(v)).abs() < 1e-12);
        assert_eq!(targets(&g, lp.path_to(v)), targets(&neg, sp.path_to(v)));
    }
}

#[test]
fn test_dijkstra_zero_weight() {
    let mut edges = TINY_EWD.to_vec();
    edges[10] = (2, 7, 0.0);
    let g0 = EdgeWeightedDigraph::from_edges(edges.iter().cloned()).unwrap();
    edges[10] = (2, 7, 1e-9);
    let g1 = EdgeWeightedDigraph::from_edges(edges).unwrap();

    for s in g0.vertices() {
        let sp0 = DijkstraSP::new(&g0, s).unwrap();
        let sp1 = DijkstraSP::new(&g1, s).unwrap();
        check_labels(&sp0);
        for v in g0.vertices() {
            assert!((sp0.dist_to(v) - sp1.dist_to(v)).abs() < 1e-8);
            assert_eq!(sp0.path_to(v), sp1.path_to(v));
        }
    }
}

#[test]
fn test_negative_weights() {
    let g = EdgeWeightedDigraph::from_edges(TINY_EWDN.iter().cloned()).unwrap();
    assert_eq!(
        DijkstraSP::new(&g, 0).err(),
        Some(Error::NegativeWeight {
            from: 6,
            to: 2,
            weight: -1.2
        })
    );

    let sp = BellmanFordSP::new(&g, 0).unwrap();
    assert!(!sp.has_negative_cycle());
    assert_eq!(targets(&g, sp.path_to(1)), Some(vec![2, 7, 3, 6, 4, 5, 1]));
}

#[test]
fn test_negative_cycle() {
    let mut edges = TINY_EWDN.to_vec();
    edges[1] = (5, 4, -0.66);
    let g = EdgeWeightedDigraph::from_edges(edges).unwrap();

    for s in g.vertices() {
        let sp = BellmanFordSP::new(&g, s).unwrap();
        assert!(sp.has_negative_cycle());
        let cycle = sp.negative_cycle().unwrap();
        assert!(!cycle.is_empty());
        assert!(cycle.iter().map(|&e| g.weight(e)).sum::<f64>() < 0.0);
        for v in g.vertices() {
            assert!(!sp.has_path_to(v));
            assert_eq!(sp.dist_to(v), f64::NEG_INFINITY);
        }
    }
}

#[test]
fn test_not_acyclic() {
    let g = EdgeWeightedDigraph::from_edges(TINY_EWD.iter().cloned()).unwrap();
    match AcyclicSP::new(&g, 0).err() {
        Some(Error::NotAcyclic { cycle }) => {
            assert!(cycle.len() >= 2);
            assert_eq!(cycle.first(), cycle.last());
            for w in cycle.windows(2) {
                assert!(g.has_edge(w[0], w[1]));
            }
        }
        _ => panic!("the graph contains cycles"),
    }
    assert!(AcyclicLP::new(&g, 0).is_err());
}

#[test]
fn test_critical_path() {
    // 0 and 1 may run in parallel, 2 waits for both, 3 waits for 1
    let cpm = critical_path(&[4.0, 6.0, 2.0, 1.0], &[(0, 2), (1, 2), (1, 3)]).unwrap();
    assert_eq!(cpm.num_jobs(), 4);
    assert_eq!(cpm.makespan(), 8.0);
    assert_eq!(cpm.start(2), 6.0);
    assert_eq!(cpm.finish(3), 7.0);
    assert_eq!(cpm.critical_jobs(), &[1, 2]);

    assert_eq!(critical_path::<f64>(&[], &[]).err(), Some(Error::EmptyGraph));
    assert_eq!(
        critical_path(&[1.0, 2.0], &[(0, 2)]).err(),
        Some(Error::VertexOutOfRange {
            vertex: 2,
            num_vertices: 2
        })
    );
}

#[test]
fn test_shared_graph() {
    let g = EdgeWeightedDigraph::from_edges(TINY_EWD.iter().cloned()).unwrap();
    let dists: Vec<Vec<f64>> = thread::scope(|scope| {
        let handles: Vec<_> = g
            .vertices()
            .map(|s| {
                let g = &g;
                scope.spawn(move || {
                    let sp = DijkstraSP::new(g, s).unwrap();
                    g.vertices().map(|v| sp.dist_to(v)).collect::<Vec<_>>()
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for s in g.vertices() {
        let sp = DijkstraSP::new(&g, s).unwrap();
        for v in g.vertices() {
            assert_eq!(dists[s][v], sp.dist_to(v));
        }
    }
}
