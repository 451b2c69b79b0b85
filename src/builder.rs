/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Traits for constructing graphs.

use crate::error::Result;
use crate::traits::{EdgeId, FiniteGraph};

/// A graph that can be constructed by inserting edges.
///
/// Graphs are built once by repeated edge insertion and afterwards only
/// borrowed immutably by the algorithms.
pub trait Buildable: FiniteGraph + Sized {
    /// Create a new graph with `n` isolated nodes.
    fn with_vertices(n: usize) -> Self;

    /// Add a new edge.
    ///
    /// If the graph is directed, the edge runs from `v` to `w`.
    fn add_edge(&mut self, v: usize, w: usize, weight: Self::Weight) -> Result<EdgeId>;

    /// Create a new graph by passing it to the callback `f`.
    ///
    /// The first error returned by the callback is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use ewgraph::{Buildable, EdgeWeightedGraph};
    /// use ewgraph::traits::FiniteGraph;
    ///
    /// let g = EdgeWeightedGraph::new_with(|g| {
    ///     g.add_edge(0, 1, 1.0)?;
    ///     g.add_edge(1, 2, 2.0)?;
    ///     Ok(())
    /// }).unwrap();
    ///
    /// assert_eq!(g.num_vertices(), 3);
    /// assert_eq!(g.num_edges(), 2);
    /// ```
    fn new_with<F>(f: F) -> Result<Self>
    where
        F: FnOnce(&mut Self) -> Result<()>,
    {
        let mut g = Self::with_vertices(0);
        f(&mut g)?;
        Ok(g)
    }

    /// Create a new graph from a list of edges `(v, w, weight)`.
    ///
    /// # Example
    ///
    /// ```
    /// use ewgraph::{Buildable, EdgeWeightedDigraph, Error};
    /// use ewgraph::traits::FiniteGraph;
    ///
    /// let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 1.0), (1, 2, -2.0)]).unwrap();
    /// assert_eq!(g.num_edges(), 2);
    ///
    /// assert_eq!(
    ///     EdgeWeightedDigraph::from_edges(vec![(0, 1, f64::NAN)]).unwrap_err(),
    ///     Error::InvalidWeight { v: 0, w: 1 }
    /// );
    /// ```
    fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, Self::Weight)>,
    {
        let mut g = Self::with_vertices(0);
        for (v, w, weight) in edges {
            g.add_edge(v, w, weight)?;
        }
        Ok(g)
    }
}
