//! Bounded FIFO memory of recently executed swaps.

use std::collections::{HashSet, VecDeque};

use crate::swap::canonical_pair;

/// Short-term memory of swapped customer pairs.
///
/// Pairs are stored in canonical (sorted) form, so `(3, 7)` and `(7, 3)` are
/// the same move. Once more than `capacity` pairs are held, the oldest is
/// evicted.
///
/// # Examples
///
/// ```
/// use u_vrp_meta::tabu::TabuList;
///
/// let mut tabu = TabuList::new(2);
/// tabu.push(3, 1);
/// tabu.push(2, 5);
/// tabu.push(4, 6);
/// assert!(!tabu.contains(1, 3));
/// assert!(tabu.contains(5, 2));
/// assert_eq!(tabu.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TabuList {
    capacity: usize,
    queue: VecDeque<(usize, usize)>,
    set: HashSet<(usize, usize)>,
}

impl TabuList {
    /// Creates an empty list holding at most `capacity` pairs.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            queue: VecDeque::with_capacity(capacity + 1),
            set: HashSet::with_capacity(capacity + 1),
        }
    }

    /// Returns `true` if swapping `a` and `b` is currently forbidden.
    pub fn contains(&self, a: usize, b: usize) -> bool {
        self.set.contains(&canonical_pair(a, b))
    }

    /// Records a swap, evicting the oldest entry if over capacity.
    pub fn push(&mut self, a: usize, b: usize) {
        let pair = canonical_pair(a, b);
        self.queue.push_back(pair);
        self.set.insert(pair);
        while self.queue.len() > self.capacity {
            if let Some(old) = self.queue.pop_front() {
                if !self.queue.contains(&old) {
                    self.set.remove(&old);
                }
            }
        }
    }

    /// Number of pairs currently held.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` if no pair is tabu.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Pairs in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &(usize, usize)> {
        self.queue.iter()
    }
}
