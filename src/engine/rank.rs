//! Constant-time rank lookup for receivers.
//!
//! ## Layout
//!
//! Ranks are stored row-major in one flat vector of `n * n` entries:
//!
//! ```text
//! ranks[receiver * n + proposer] = position of proposer in receiver's list
//! ```
//!
//! Identities are dense in `[0, n)`, so a plain array replaces a per-receiver
//! hash map.

/// Per-receiver proposer ranks, built once from the receiver table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankIndex {
    n: usize,
    ranks: Vec<usize>,
}

impl RankIndex {
    /// Build the index from receiver preference lists.
    ///
    /// O(n²). The lists are assumed to be permutations of `[0, n)`; an entry
    /// for a proposer missing from a malformed list keeps the value `n`.
    ///
    /// # Example
    ///
    /// ```
    /// use stable_match::engine::RankIndex;
    ///
    /// let index = RankIndex::new(&[vec![1, 0, 2], vec![0, 1, 2], vec![2, 1, 0]]);
    ///
    /// assert_eq!(index.rank(0, 1), 0);
    /// assert_eq!(index.rank(0, 0), 1);
    /// assert!(index.prefers(2, 1, 0));
    /// ```
    pub fn new(receiver_prefs: &[Vec<usize>]) -> Self {
        let n = receiver_prefs.len();
        let mut ranks = vec![n; n * n];

        for (receiver, list) in receiver_prefs.iter().enumerate() {
            let row = &mut ranks[receiver * n..(receiver + 1) * n];
            for (rank, &proposer) in list.iter().enumerate() {
                row[proposer] = rank;
            }
        }

        Self { n, ranks }
    }

    /// Number of receivers (and proposers)
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Position of `proposer` in `receiver`'s list (0 = most preferred)
    #[inline]
    pub fn rank(&self, receiver: usize, proposer: usize) -> usize {
        self.ranks[receiver * self.n + proposer]
    }

    /// Whether `receiver` strictly prefers proposer `a` to proposer `b`
    #[inline]
    pub fn prefers(&self, receiver: usize, a: usize, b: usize) -> bool {
        self.rank(receiver, a) < self.rank(receiver, b)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
