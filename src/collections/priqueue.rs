/*
 * Copyright (c) 2018 Frank Fischer <frank-fischer@shadow-soft.de>
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

mod indexminpq;
pub use self::indexminpq::IndexMinPQ;

mod minpq;
pub use self::minpq::MinPQ;

/// A priority queue whose elements are identified by a dense index.
///
/// Each index `0..n` may be contained in the queue at most once. The
/// priority of a contained index can be decreased.
pub trait IndexPriQueue<P> {
    /// Return `true` iff the queue contains no element.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return the number of elements in the queue.
    fn len(&self) -> usize;

    /// Remove all elements from the queue.
    fn clear(&mut self);

    /// Return `true` if `idx` is contained in the queue.
    fn contains(&self, idx: usize) -> bool;

    /// Insert `idx` with the given priority.
    ///
    /// The index must not be contained in the queue already.
    fn insert(&mut self, idx: usize, priority: P);

    /// Decrease the priority of some index in the queue.
    ///
    /// Returns `true` if `idx` is contained in the queue and the new priority
    /// is smaller than the old one. Otherwise the queue is not modified and
    /// `false` is returned.
    fn decrease_key(&mut self, idx: usize, priority: P) -> bool;

    /// Remove and return the index with the smallest priority or `None` if
    /// the queue is empty.
    fn pop_min(&mut self) -> Option<(usize, P)>;

    /// Return the current priority of `idx` if it is contained in the queue.
    fn priority(&self, idx: usize) -> Option<&P>;
}
