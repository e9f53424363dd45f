//! Independent checks on a finished matching.
//!
//! [`verify`] confirms that a pair list is a perfect matching of the
//! instance and that no blocking pair exists. It does not trust the engine:
//! it works from the preference tables and the pair list alone.
//!
//! ## Blocking pairs
//!
//! `(p, r)` blocks a matching when `p` strictly prefers `r` to its partner and
//! `r` strictly prefers `p` to its partner. Only receivers that `p` ranks
//! above its partner need to be examined, so the scan walks each proposer's
//! list up to its partner and stops.

use crate::engine::RankIndex;
use crate::error::VerifyError;
use crate::types::{Instance, Pair, Side};

/// Check that `pairs` is a perfect, stable matching of `instance`.
///
/// # Errors
///
/// The first defect found: size and range problems, then repeated agents,
/// then the first blocking pair in proposer order.
///
/// # Example
///
/// ```
/// use stable_match::engine::verify;
/// use stable_match::types::{Instance, Pair};
///
/// let instance = Instance::new(
///     vec![vec![0, 1], vec![0, 1]],
///     vec![vec![1, 0], vec![1, 0]],
/// ).unwrap();
///
/// // Proposer 1 and receiver 0 both prefer each other
/// let unstable = [Pair::new(0, 0), Pair::new(1, 1)];
/// assert!(verify(&instance, &unstable).is_err());
///
/// let result = instance.solve().unwrap();
/// assert!(verify(&instance, result.pairs()).is_ok());
/// ```
pub fn verify(instance: &Instance, pairs: &[Pair]) -> Result<(), VerifyError> {
    let n = instance.size();
    let (proposer_partner, receiver_partner) = partners(n, pairs)?;

    find_blocking_pair(
        instance.proposer_prefs(),
        instance.receiver_prefs(),
        &proposer_partner,
        &receiver_partner,
    )
    .map_or(Ok(()), |(proposer, receiver)| {
        Err(VerifyError::BlockingPair { proposer, receiver })
    })
}

/// Check only that `pairs` is a stable matching, returning `false` on any
/// defect.
pub fn is_stable(instance: &Instance, pairs: &[Pair]) -> bool {
    verify(instance, pairs).is_ok()
}

/// Build both partner arrays, rejecting anything that is not a perfect
/// matching on `[0, n)`.
fn partners(n: usize, pairs: &[Pair]) -> Result<(Vec<usize>, Vec<usize>), VerifyError> {
    if pairs.len() != n {
        return Err(VerifyError::WrongSize {
            expected: n,
            found: pairs.len(),
        });
    }

    let mut proposer_partner = vec![None; n];
    let mut receiver_partner = vec![None; n];

    for pair in pairs {
        let (proposer, receiver) = (pair.proposer_index(), pair.receiver_index());
        if proposer >= n || receiver >= n {
            return Err(VerifyError::OutOfRange {
                proposer,
                receiver,
                n,
            });
        }
        if proposer_partner[proposer].replace(receiver).is_some() {
            return Err(VerifyError::Repeated {
                side: Side::Proposer,
                agent: proposer,
            });
        }
        if receiver_partner[receiver].replace(proposer).is_some() {
            return Err(VerifyError::Repeated {
                side: Side::Receiver,
                agent: receiver,
            });
        }
    }

    // n pairs with no repeats cover every agent exactly once
    let proposer_partner = proposer_partner.into_iter().flatten().collect();
    let receiver_partner = receiver_partner.into_iter().flatten().collect();
    Ok((proposer_partner, receiver_partner))
}

fn find_blocking_pair(
    proposer_prefs: &[Vec<usize>],
    receiver_prefs: &[Vec<usize>],
    proposer_partner: &[usize],
    receiver_partner: &[usize],
) -> Option<(usize, usize)> {
    let ranks = RankIndex::new(receiver_prefs);

    for (proposer, list) in proposer_prefs.iter().enumerate() {
        let current = proposer_partner[proposer];
        let better = list.iter().take_while(|&&receiver| receiver != current);
        for &receiver in better {
            if ranks.prefers(receiver, proposer, receiver_partner[receiver]) {
                return Some((proposer, receiver));
            }
        }
    }

    None
}

// ============================================================================
// Unit Tests
// ============================================================================
