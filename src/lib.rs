// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

#![forbid(unsafe_code)]

//! Edge-weighted graphs and the classic algorithms on them.
//!
//! The crate provides an undirected [`EdgeWeightedGraph`] and a directed
//! [`EdgeWeightedDigraph`] together with
//!
//! - minimum spanning tree algorithms (lazy and eager Prim, Kruskal) in
//!   [`mst`],
//! - single-source shortest path algorithms (Dijkstra, acyclic shortest
//!   and longest paths, Bellman-Ford with negative cycle detection) in
//!   [`shortestpath`],
//! - depth-first orders, cycle detection and topological sorting in
//!   [`search`].
//!
//! All algorithms run completely when they are constructed and provide
//! read-only access to their results afterwards.
//!
//! # Example
//!
//! ```
//! use ewgraph::{Buildable, EdgeWeightedDigraph, EdgeWeightedGraph};
//! use ewgraph::mst::{KruskalMST, SpanningForest};
//! use ewgraph::shortestpath::{DijkstraSP, ShortestPaths};
//!
//! let g = EdgeWeightedGraph::from_edges(ewgraph::classes::TINY_EWG.iter().cloned()).unwrap();
//! let mst = KruskalMST::new(&g);
//! assert!((mst.weight() - 1.81).abs() < 1e-12);
//!
//! let g = EdgeWeightedDigraph::from_edges(ewgraph::classes::TINY_EWD.iter().cloned()).unwrap();
//! let sp = DijkstraSP::new(&g, 0).unwrap();
//! assert!((sp.dist_to(6) - 1.51).abs() < 1e-12);
//! assert_eq!(sp.path_to(6).map(|p| p.len()), Some(4));
//! ```

mod num {
    pub use num_traits as traits;
}

pub mod error;
pub use self::error::{Error, Result};

// # Data structures

pub mod traits;

pub mod builder;
pub use self::builder::Buildable;

pub mod weightedgraph;
pub use self::weightedgraph::{Edge, EdgeWeightedGraph};

pub mod weighteddigraph;
pub use self::weighteddigraph::{DirectedEdge, EdgeWeightedDigraph};

/// Graph classes
pub mod classes;

pub mod collections;

// # Algorithms

pub mod mst;
pub mod search;
pub mod shortestpath;
