//! A single (proposer, receiver) engagement in a finished matching.
//!
//! ## SSZ Serialization
//!
//! Pairs derive `SimpleSerialize` so a whole matching has one canonical byte
//! encoding. The state root of a matching is computed over it, which lets two
//! runs (or two implementations) be compared by a single hash.

use std::fmt;

use ssz_rs::prelude::*;

/// One matched couple.
///
/// Identities are stored as `u64` for SSZ compatibility. Use
/// [`Pair::proposer_index`] and [`Pair::receiver_index`] to index preference
/// tables.
///
/// ## Example
///
/// ```
/// use stable_match::types::Pair;
///
/// let pair = Pair::new(1, 0);
/// assert_eq!(pair.to_string(), "1 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, SimpleSerialize)]
pub struct Pair {
    /// Proposer identity in `[0, n)`
    pub proposer: u64,

    /// Receiver identity in `[0, n)`
    pub receiver: u64,
}

impl Pair {
    /// Create a new pair
    #[inline]
    pub fn new(proposer: usize, receiver: usize) -> Self {
        Self {
            proposer: proposer as u64,
            receiver: receiver as u64,
        }
    }

    /// Proposer identity as an index
    #[inline]
    pub fn proposer_index(&self) -> usize {
        self.proposer as usize
    }

    /// Receiver identity as an index
    #[inline]
    pub fn receiver_index(&self) -> usize {
        self.receiver as usize
    }
}

/// Formats as the output-file line: `"proposer receiver"`.
impl fmt::Display for Pair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.proposer, self.receiver)
    }
}

impl From<(usize, usize)> for Pair {
    fn from((proposer, receiver): (usize, usize)) -> Self {
        Self::new(proposer, receiver)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
