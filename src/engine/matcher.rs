//! Deferred-acceptance (Gale-Shapley) matching engine.
//!
//! ## Proposal Loop
//!
//! ```text
//! free = {0..n}                      (ProposerQueue)
//! while p = free.extract_min():
//!     r = prefs[p][cursor[p]++]
//!     if r is unmatched:        engage (p, r)
//!     elif r prefers p to p':   engage (p, r), free.insert(p')
//!     else:                     free.insert(p)
//! ```
//!
//! Every proposal advances one cursor, so the loop makes at most `n²`
//! proposals. Each costs one heap operation, for O(n² log n) overall.
//!
//! ## Output Order
//!
//! Pairs are listed by receiver identity ascending: `pairs[r]` holds the
//! partner of receiver `r`.

use sha2::{Digest, Sha256};
use tracing::{debug, trace};

use crate::engine::{ProposerQueue, RankIndex};
use crate::error::MatchError;
use crate::types::Pair;

// ============================================================================
// Proposal events
// ============================================================================

/// Outcome of a single proposal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Proposal {
    /// The receiver was free and accepted.
    Engaged { proposer: usize, receiver: usize },

    /// The receiver traded up; `displaced` is free again.
    Replaced {
        proposer: usize,
        receiver: usize,
        displaced: usize,
    },

    /// The receiver kept its current partner; the proposer stays free.
    Rejected { proposer: usize, receiver: usize },
}

impl Proposal {
    /// Proposer that made this proposal
    pub fn proposer(&self) -> usize {
        match *self {
            Proposal::Engaged { proposer, .. }
            | Proposal::Replaced { proposer, .. }
            | Proposal::Rejected { proposer, .. } => proposer,
        }
    }

    /// Receiver that was proposed to
    pub fn receiver(&self) -> usize {
        match *self {
            Proposal::Engaged { receiver, .. }
            | Proposal::Replaced { receiver, .. }
            | Proposal::Rejected { receiver, .. } => receiver,
        }
    }
}

// ============================================================================
// Match result
// ============================================================================

/// A finished matching plus the work it took to find it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchResult {
    /// One pair per receiver, receiver identity ascending
    pairs: Vec<Pair>,

    /// Total proposals made
    proposals: u64,

    /// Proposals that ended in a rejection or a displacement
    rejections: u64,
}

impl MatchResult {
    /// Pairs in receiver order
    #[inline]
    pub fn pairs(&self) -> &[Pair] {
        &self.pairs
    }

    /// Take the pair list
    #[inline]
    pub fn into_pairs(self) -> Vec<Pair> {
        self.pairs
    }

    /// Number of pairs (= n)
    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Check if the matching has no pairs
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Total proposals made during the run
    #[inline]
    pub fn proposals(&self) -> u64 {
        self.proposals
    }

    /// Proposals that did not end in a fresh engagement
    #[inline]
    pub fn rejections(&self) -> u64 {
        self.rejections
    }

    /// Partner of `receiver`
    #[inline]
    pub fn partner_of_receiver(&self, receiver: usize) -> Option<usize> {
        self.pairs.get(receiver).map(Pair::proposer_index)
    }

    /// Proposer-side view: `partners[p]` is the receiver matched to `p`.
    pub fn proposer_partners(&self) -> Vec<usize> {
        let mut partners = vec![0; self.pairs.len()];
        for pair in &self.pairs {
            partners[pair.proposer_index()] = pair.receiver_index();
        }
        partners
    }

    /// SHA-256 over the SSZ encoding of the pairs, in output order.
    ///
    /// Identical matchings always have identical roots, so runs can be
    /// compared without diffing output files.
    pub fn state_root(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        for pair in &self.pairs {
            // Two fixed-width u64 fields: encoding has no failure path
            let bytes = ssz_rs::serialize(pair).expect("Pair is a fixed-size SSZ container");
            hasher.update(&bytes);
        }

        let mut root = [0u8; 32];
        root.copy_from_slice(&hasher.finalize());
        root
    }
}

// ============================================================================
// Matching engine
// ============================================================================

/// Proposal-loop state for one run.
///
/// The engine borrows the proposer table and owns everything else. It trusts
/// its input: both tables must hold `n` permutations of `[0, n)` (see
/// [`Instance::new`](crate::types::Instance::new)).
///
/// ## Example
///
/// ```
/// use stable_match::engine::MatchingEngine;
/// use stable_match::types::Pair;
///
/// let proposers = vec![vec![0, 1, 2]; 3];
/// let receivers = vec![vec![1, 0, 2], vec![0, 1, 2], vec![0, 1, 2]];
///
/// let result = MatchingEngine::new(&proposers, &receivers).run().unwrap();
///
/// assert_eq!(result.pairs(), &[Pair::new(1, 0), Pair::new(0, 1), Pair::new(2, 2)]);
/// ```
#[derive(Debug)]
pub struct MatchingEngine<'a> {
    /// proposer -> receivers, most preferred first
    proposer_prefs: &'a [Vec<usize>],

    /// receiver -> proposer -> rank
    ranks: RankIndex,

    /// Proposers without a partner
    free: ProposerQueue,

    /// Current partner of each receiver
    receiver_pairing: Vec<Option<usize>>,

    /// Index of the next receiver each proposer will try
    next_proposal: Vec<usize>,

    proposals: u64,
    rejections: u64,
}

impl<'a> MatchingEngine<'a> {
    /// Set up a run: every proposer free, every receiver unmatched, every
    /// cursor at the top of its list.
    pub fn new(proposer_prefs: &'a [Vec<usize>], receiver_prefs: &[Vec<usize>]) -> Self {
        let n = proposer_prefs.len();
        debug_assert_eq!(receiver_prefs.len(), n, "both sides must have n agents");

        Self {
            proposer_prefs,
            ranks: RankIndex::new(receiver_prefs),
            free: (0..n).collect(),
            receiver_pairing: vec![None; n],
            next_proposal: vec![0; n],
            proposals: 0,
            rejections: 0,
        }
    }

    /// Number of agents on each side
    #[inline]
    pub fn size(&self) -> usize {
        self.receiver_pairing.len()
    }

    /// Check if no proposer is left to act
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.free.is_empty()
    }

    /// Current partner of `receiver`, if any
    #[inline]
    pub fn partner_of(&self, receiver: usize) -> Option<usize> {
        self.receiver_pairing[receiver]
    }

    /// Proposals made so far
    #[inline]
    pub fn proposals(&self) -> u64 {
        self.proposals
    }

    /// Let the smallest free proposer make its next proposal.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(event))` - What happened to the proposal
    /// * `Ok(None)` - No proposer is free; the run is over
    ///
    /// # Errors
    ///
    /// [`MatchError::ExhaustedProposer`] if the chosen proposer has already
    /// proposed to everyone. Unreachable for valid input.
    pub fn step(&mut self) -> Result<Option<Proposal>, MatchError> {
        let Some(proposer) = self.free.extract_min() else {
            return Ok(None);
        };

        let cursor = self.next_proposal[proposer];
        let Some(&receiver) = self.proposer_prefs[proposer].get(cursor) else {
            return Err(MatchError::ExhaustedProposer { proposer });
        };
        self.next_proposal[proposer] = cursor + 1;
        self.proposals += 1;

        let event = match self.receiver_pairing[receiver] {
            None => {
                self.receiver_pairing[receiver] = Some(proposer);
                Proposal::Engaged { proposer, receiver }
            }
            Some(current) if self.ranks.prefers(receiver, proposer, current) => {
                self.receiver_pairing[receiver] = Some(proposer);
                self.free.insert(current);
                self.rejections += 1;
                Proposal::Replaced {
                    proposer,
                    receiver,
                    displaced: current,
                }
            }
            Some(_) => {
                self.free.insert(proposer);
                self.rejections += 1;
                Proposal::Rejected { proposer, receiver }
            }
        };

        trace!(?event, "proposal");
        Ok(Some(event))
    }

    /// Run the proposal loop to completion and collect the matching.
    pub fn run(mut self) -> Result<MatchResult, MatchError> {
        debug!(n = self.size(), "starting proposal loop");

        while self.step()?.is_some() {}

        let pairs = self
            .receiver_pairing
            .iter()
            .enumerate()
            .map(|(receiver, partner)| {
                partner
                    .map(|proposer| Pair::new(proposer, receiver))
                    .ok_or(MatchError::UnmatchedReceiver { receiver })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(
            n = pairs.len(),
            proposals = self.proposals,
            rejections = self.rejections,
            "proposal loop finished"
        );

        Ok(MatchResult {
            pairs,
            proposals: self.proposals,
            rejections: self.rejections,
        })
    }
}

/// Compute the proposer-optimal stable matching of two preference tables.
///
/// The tables are trusted, not validated. Use
/// [`Instance::new`](crate::types::Instance::new) first for untrusted input.
///
/// Both tables must have the same number of lists. Only debug builds assert
/// this; a release build sizes the run from `proposer_prefs` alone.
///
/// # Example
///
/// ```
/// use stable_match::engine::stable_matching;
/// use stable_match::types::Pair;
///
/// let pairs = stable_matching(&[vec![0]], &[vec![0]]).unwrap();
/// assert_eq!(pairs, vec![Pair::new(0, 0)]);
/// ```
pub fn stable_matching(
    proposer_prefs: &[Vec<usize>],
    receiver_prefs: &[Vec<usize>],
) -> Result<Vec<Pair>, MatchError> {
    MatchingEngine::new(proposer_prefs, receiver_prefs)
        .run()
        .map(MatchResult::into_pairs)
}

// ============================================================================
// Unit Tests
// ============================================================================
