// Copyright (c) 2016, 2017, 2020 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Indexed binary heap implementation

use crate::collections::IndexPriQueue;

use crate::num::traits::{FromPrimitive, ToPrimitive};

/// Indexed binary min-heap.
///
/// The heap stores indices `0..n`, each with a priority. Besides the heap
/// array the data structure maintains the position of each index on the
/// heap, which allows `decrease_key` and `contains` in O(log n) and O(1).
///
/// The type parameter `ID` is the integer type used for storing indices
/// and heap positions.
///
/// # Example
///
/// ```
/// use ewgraph::collections::{IndexMinPQ, IndexPriQueue};
///
/// let mut pq = IndexMinPQ::<f64>::with_capacity(4);
/// pq.insert(0, 3.0);
/// pq.insert(2, 1.0);
/// pq.insert(3, 2.0);
/// assert!(pq.decrease_key(0, 0.5));
/// assert!(!pq.decrease_key(1, 0.0));
/// assert!(!pq.decrease_key(3, 5.0));
///
/// assert_eq!(pq.pop_min(), Some((0, 0.5)));
/// assert_eq!(pq.pop_min(), Some((2, 1.0)));
/// assert_eq!(pq.pop_min(), Some((3, 2.0)));
/// assert_eq!(pq.pop_min(), None);
/// ```
pub struct IndexMinPQ<P, ID = u32> {
    /// The heap elements.
    heap: Vec<ID>,
    /// The priority of each index.
    priority: Vec<Option<P>>,
    /// Position of each index on the heap, `None` if it is not contained.
    pos: Vec<Option<ID>>,
}

impl<P, ID> IndexMinPQ<P, ID>
where
    P: PartialOrd + Clone,
    ID: FromPrimitive + ToPrimitive + Copy,
{
    /// Create an empty heap for indices `0..n`.
    pub fn with_capacity(n: usize) -> Self {
        IndexMinPQ {
            heap: Vec::with_capacity(n),
            priority: vec![None; n],
            pos: vec![None; n],
        }
    }

    /// Return the index with the smallest priority without removing it.
    pub fn peek_min(&self) -> Option<(usize, &P)> {
        self.heap.first().and_then(|&item| {
            let idx = Self::idx(item);
            self.priority[idx].as_ref().map(|p| (idx, p))
        })
    }

    fn idx(item: ID) -> usize {
        item.to_usize().unwrap()
    }

    fn id(idx: usize) -> ID {
        ID::from_usize(idx).unwrap()
    }

    /// Return `true` if the element at heap position `a` has a smaller
    /// priority than the one at position `b`.
    fn less(&self, a: usize, b: usize) -> bool {
        self.priority[Self::idx(self.heap[a])] < self.priority[Self::idx(self.heap[b])]
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.pos[Self::idx(self.heap[a])] = Some(Self::id(a));
        self.pos[Self::idx(self.heap[b])] = Some(Self::id(b));
    }

    /// Move the element at position `cur_pos` up in the heap until its parent
    /// does not have a larger priority or the root is reached.
    fn upheap(&mut self, mut cur_pos: usize) {
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            if !self.less(cur_pos, parent_pos) {
                break;
            }
            self.swap(cur_pos, parent_pos);
            cur_pos = parent_pos;
        }
    }

    /// Move the element at position `cur_pos` down in the heap until both
    /// children have a larger priority.
    fn downheap(&mut self, mut cur_pos: usize) {
        let n = self.heap.len();
        loop {
            let left_pos = 2 * cur_pos + 1;
            let right_pos = left_pos + 1;
            let next_pos = if left_pos >= n {
                break;
            } else if right_pos >= n || self.less(left_pos, right_pos) {
                left_pos
            } else {
                right_pos
            };

            if !self.less(next_pos, cur_pos) {
                break;
            }

            self.swap(cur_pos, next_pos);
            cur_pos = next_pos;
        }
    }

    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.heap.len()).all(|i| !self.less(i, (i - 1) / 2))
            && self
                .heap
                .iter()
                .enumerate()
                .all(|(i, &item)| self.pos[Self::idx(item)].map(Self::idx) == Some(i))
    }
}

impl<P, ID> IndexPriQueue<P> for IndexMinPQ<P, ID>
where
    P: PartialOrd + Clone,
    ID: FromPrimitive + ToPrimitive + Copy,
{
    fn len(&self) -> usize {
        self.heap.len()
    }

    fn clear(&mut self) {
        for &item in &self.heap {
            let idx = Self::idx(item);
            self.pos[idx] = None;
            self.priority[idx] = None;
        }
        self.heap.clear();
    }

    fn contains(&self, idx: usize) -> bool {
        self.pos.get(idx).map_or(false, Option::is_some)
    }

    fn insert(&mut self, idx: usize, priority: P) {
        debug_assert!(!self.contains(idx), "Index {} is already on the heap", idx);
        if idx >= self.pos.len() {
            self.pos.resize(idx + 1, None);
            self.priority.resize(idx + 1, None);
        }
        let n = self.heap.len();
        self.heap.push(Self::id(idx));
        self.pos[idx] = Some(Self::id(n));
        self.priority[idx] = Some(priority);
        self.upheap(n);
    }

    fn decrease_key(&mut self, idx: usize, priority: P) -> bool {
        let cur_pos = match self.pos.get(idx) {
            Some(&Some(pos)) => Self::idx(pos),
            _ => return false,
        };
        match self.priority[idx] {
            Some(ref old) if *old > priority => {}
            _ => return false,
        }
        self.priority[idx] = Some(priority);
        self.upheap(cur_pos);
        true
    }

    fn pop_min(&mut self) -> Option<(usize, P)> {
        if self.heap.is_empty() {
            return None;
        }

        // remove the smallest element from the heap
        let min_item = self.heap.swap_remove(0);
        let min_idx = Self::idx(min_item);
        self.pos[min_idx] = None;

        if !self.heap.is_empty() {
            let first = Self::idx(self.heap[0]);
            self.pos[first] = Some(Self::id(0));
            self.downheap(0);
        }

        self.priority[min_idx].take().map(|p| (min_idx, p))
    }

    fn priority(&self, idx: usize) -> Option<&P> {
        self.priority.get(idx).and_then(Option::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::IndexMinPQ;
    use crate::collections::IndexPriQueue;

    #[test]
    fn test_heapsort() {
        let values = [5.0, 1.5, 9.0, 3.25, 0.0, 7.5, 3.0, 8.0, 2.0, 6.0];
        let mut pq = IndexMinPQ::<f64>::with_capacity(values.len());
        for (i, &x) in values.iter().enumerate() {
            pq.insert(i, x);
            assert!(pq.is_heap());
        }
        assert_eq!(pq.len(), values.len());

        let mut sorted = vec![];
        while let Some((i, x)) = pq.pop_min() {
            assert!(pq.is_heap());
            assert!(!pq.contains(i));
            assert_eq!(values[i], x);
            sorted.push(x);
        }
        assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
        assert!(pq.is_empty());
    }

    #[test]
    fn test_decrease_key() {
        let mut pq = IndexMinPQ::<i32, usize>::with_capacity(0);
        for i in 0..20 {
            pq.insert(i, 100 + i as i32);
        }
        for i in (0..20).filter(|i| i % 3 == 0) {
            assert!(pq.decrease_key(i, 50 - i as i32));
            assert!(pq.is_heap());
        }
        assert_eq!(pq.priority(18), Some(&32));
        assert!(!pq.decrease_key(18, 32));
        assert!(!pq.decrease_key(25, 0));
        assert_eq!(pq.pop_min(), Some((18, 32)));
        assert_eq!(pq.peek_min(), Some((15, &35)));
        assert_eq!(pq.priority(18), None);
        assert!(!pq.decrease_key(18, 0));
    }

    #[test]
    fn test_reinsert() {
        let mut pq = IndexMinPQ::<f64>::with_capacity(3);
        pq.insert(1, 1.0);
        pq.insert(2, 2.0);
        assert_eq!(pq.pop_min(), Some((1, 1.0)));
        pq.insert(1, 3.0);
        assert!(pq.contains(1));
        assert_eq!(pq.pop_min(), Some((2, 2.0)));
        pq.clear();
        assert!(pq.is_empty());
        assert!(!pq.contains(1));
        pq.insert(1, 0.0);
        assert_eq!(pq.pop_min(), Some((1, 0.0)));
    }
}
