/*
 * Copyright (c) 2019 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! # Graph search algorithms.
//!
//! This module contains the depth-first based algorithms on directed
//! graphs: the standard node orders of a depth-first search, the detection
//! of directed cycles and the topological order of a directed acyclic graph.
//!
//! All algorithms run completely when they are constructed and provide
//! read-only access to their results afterwards.

pub mod cycle;
pub mod dfs;
pub mod topological;

pub use self::cycle::DirectedCycle;
pub use self::dfs::DepthFirstOrder;
pub use self::topological::Topological;

use std::iter::Iterator;
use std::marker::PhantomData;

/// Compute a path from a map of incoming edges for each node.
///
/// # Parameters
/// - `dst`: the destination node
/// - `incomings(v)`: return the incoming edge and preceding node for node `v`
///   (or `None` if it does not exist)
///
/// # Return
/// An iterator over the incoming edges starting from the last one.
///
/// # Example
///
/// ```
/// use ewgraph::{Buildable, EdgeWeightedDigraph};
/// use ewgraph::traits::*;
/// use ewgraph::search::path_from_incomings;
///
/// // the path 0 -> 1 -> 2 -> 3
/// let g = EdgeWeightedDigraph::from_edges(vec![(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0)]).unwrap();
/// let incomings = vec![None, Some(EdgeId::new(0)), Some(EdgeId::new(1)), Some(EdgeId::new(2))];
///
/// let path: Vec<_> = path_from_incomings(3, |u| incomings[u].map(|e| (e, g.edge(e).from())))
///     .map(|e| e.index())
///     .collect();
/// assert_eq!(path, vec![2, 1, 0]);
/// ```
pub fn path_from_incomings<N, E, I>(dst: N, incomings: I) -> impl Iterator<Item = E>
where
    N: Copy,
    E: Clone,
    I: Fn(N) -> Option<(E, N)>,
{
    PathIter {
        incomings,
        u: dst,
        phantom: PhantomData,
    }
}

#[doc(hidden)]
struct PathIter<N, E, I>
where
    I: Fn(N) -> Option<(E, N)>,
{
    incomings: I,
    u: N,
    phantom: PhantomData<E>,
}

impl<N, E, I> Iterator for PathIter<N, E, I>
where
    N: Clone,
    I: Fn(N) -> Option<(E, N)>,
{
    type Item = E;

    fn next(&mut self) -> Option<E> {
        if let Some((e, v)) = (self.incomings)(self.u.clone()) {
            self.u = v;
            Some(e)
        } else {
            None
        }
    }
}
