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

//! Errors reported by graph construction and the algorithms.
//!
//! All variants describe invalid input passed by the caller. Structural
//! properties of a valid input (a disconnected graph, an unreachable node, a
//! negative cycle) are *not* errors, they are part of the algorithm results.

/// Invalid input to a graph or an algorithm.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("vertex {vertex} is not in 0..{num_vertices}")]
    VertexOutOfRange { vertex: usize, num_vertices: usize },

    #[error("self-loop at vertex {vertex} is not allowed in an undirected graph")]
    SelfLoop { vertex: usize },

    #[error("parallel edge {v}-{w} is not allowed in an undirected graph")]
    ParallelEdge { v: usize, w: usize },

    #[error("edge {v}-{w} has an invalid weight (NaN)")]
    InvalidWeight { v: usize, w: usize },

    #[error("edge {from}->{to} has negative weight {weight}")]
    NegativeWeight { from: usize, to: usize, weight: f64 },

    /// The nodes of the detected cycle, first node repeated at the end.
    #[error("graph is not acyclic, found cycle {cycle:?}")]
    NotAcyclic { cycle: Vec<usize> },

    #[error("graph has no vertices")]
    EmptyGraph,
}

pub type Result<T> = std::result::Result<T, Error>;
