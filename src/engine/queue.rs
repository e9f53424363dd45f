//! Priority queue of free proposers.
//!
//! ## Design
//!
//! A binary min-heap keyed on proposer identity, stored in a `Vec`:
//!
//! ```text
//!            [0]
//!         /       \
//!       [1]       [2]
//!      /   \     /   \
//!    [3]   [4] [5]   [6]
//! ```
//!
//! - parent of `i` is `(i - 1) / 2`
//! - children of `i` are `2i + 1` and `2i + 2`
//!
//! The smallest free identity always acts next. Any order would give a
//! stable matching; this one makes the proposal sequence reproducible without
//! remembering insertion history.
//!
//! Both sift directions are iterative, so depth never depends on `n`.

/// Min-heap over free proposer identities.
///
/// ## Example
///
/// ```
/// use stable_match::engine::ProposerQueue;
///
/// let mut queue: ProposerQueue = [4, 1, 3].into_iter().collect();
/// queue.insert(0);
///
/// assert_eq!(queue.extract_min(), Some(0));
/// assert_eq!(queue.extract_min(), Some(1));
/// assert_eq!(queue.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProposerQueue {
    heap: Vec<usize>,
}

impl ProposerQueue {
    /// Create an empty queue
    #[inline]
    pub fn new() -> Self {
        Self { heap: Vec::new() }
    }

    /// Create an empty queue with room for `capacity` proposers
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: Vec::with_capacity(capacity),
        }
    }

    /// Number of free proposers
    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Check if no proposer is free
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Smallest free proposer, without removing it
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Add a free proposer.
    ///
    /// The engine never inserts an identity that is already queued.
    pub fn insert(&mut self, proposer: usize) {
        self.heap.push(proposer);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the smallest free proposer, or `None` if empty.
    pub fn extract_min(&mut self) -> Option<usize> {
        let last = self.heap.pop()?;
        if self.heap.is_empty() {
            return Some(last);
        }

        let min = std::mem::replace(&mut self.heap[0], last);
        self.sift_down(0);
        Some(min)
    }

    /// Move the element at `i` toward the root while it is strictly smaller
    /// than its parent.
    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i] < self.heap[parent] {
                self.heap.swap(i, parent);
                i = parent;
            } else {
                break;
            }
        }
    }

    /// Move the element at `i` toward the leaves, always swapping with the
    /// strictly smaller child, until neither child is smaller.
    fn sift_down(&mut self, mut i: usize) {
        let len = self.heap.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;

            if left < len && self.heap[left] < self.heap[smallest] {
                smallest = left;
            }
            if right < len && self.heap[right] < self.heap[smallest] {
                smallest = right;
            }
            if smallest == i {
                break;
            }

            self.heap.swap(i, smallest);
            i = smallest;
        }
    }
}

impl FromIterator<usize> for ProposerQueue {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut queue = Self::with_capacity(iter.size_hint().0);
        queue.extend(iter);
        queue
    }
}

impl Extend<usize> for ProposerQueue {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for proposer in iter {
            self.insert(proposer);
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
