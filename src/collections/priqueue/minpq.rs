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

//! Plain binary min-heap with floating point priorities.

use crate::num::traits::Float;

use ordered_float::OrderedFloat;

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A heap entry. Ordered by priority, then by insertion number.
struct Entry<T, W>
where
    W: Float,
{
    priority: OrderedFloat<W>,
    seq: usize,
    item: T,
}

impl<T, W> PartialEq for Entry<T, W>
where
    W: Float,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, W> Eq for Entry<T, W> where W: Float {}

impl<T, W> PartialOrd for Entry<T, W>
where
    W: Float,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, W> Ord for Entry<T, W>
where
    W: Float,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority.cmp(&other.priority).then(self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue of arbitrary items with float priorities.
///
/// In contrast to [`IndexMinPQ`](super::IndexMinPQ) an item may be
/// contained several times and priorities cannot be changed. Items with
/// equal priorities are returned in insertion order.
///
/// # Example
///
/// ```
/// use ewgraph::collections::MinPQ;
///
/// let mut pq = MinPQ::new();
/// pq.push('a', 0.5);
/// pq.push('b', 0.25);
/// pq.push('c', 0.5);
///
/// assert_eq!(pq.len(), 3);
/// assert_eq!(pq.pop_min(), Some(('b', 0.25)));
/// assert_eq!(pq.pop_min(), Some(('a', 0.5)));
/// assert_eq!(pq.pop_min(), Some(('c', 0.5)));
/// assert!(pq.is_empty());
/// ```
pub struct MinPQ<T, W = f64>
where
    W: Float,
{
    heap: BinaryHeap<Reverse<Entry<T, W>>>,
    seq: usize,
}

impl<T, W> MinPQ<T, W>
where
    W: Float,
{
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(n: usize) -> Self {
        MinPQ {
            heap: BinaryHeap::with_capacity(n),
            seq: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn clear(&mut self) {
        self.heap.clear();
        self.seq = 0;
    }

    /// Push `item` with the given priority.
    pub fn push(&mut self, item: T, priority: W) {
        self.heap.push(Reverse(Entry {
            priority: OrderedFloat(priority),
            seq: self.seq,
            item,
        }));
        self.seq += 1;
    }

    /// Remove and return the item with the smallest priority.
    pub fn pop_min(&mut self) -> Option<(T, W)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.item, entry.priority.into_inner()))
    }

    /// Return the item with the smallest priority without removing it.
    pub fn peek_min(&self) -> Option<(&T, W)> {
        self.heap
            .peek()
            .map(|Reverse(entry)| (&entry.item, entry.priority.into_inner()))
    }
}

impl<T, W> Default for MinPQ<T, W>
where
    W: Float,
{
    fn default() -> Self {
        MinPQ::new()
    }
}

impl<T, W> Extend<(T, W)> for MinPQ<T, W>
where
    W: Float,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (T, W)>,
    {
        for (item, priority) in iter {
            self.push(item, priority);
        }
    }
}
