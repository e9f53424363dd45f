//! Problem instances: two complete, strict preference tables of equal size.
//!
//! ## Invariants
//!
//! An [`Instance`] of size `n` always holds:
//!
//! - exactly `n` proposer lists and `n` receiver lists
//! - every list of length `n`
//! - every list a permutation of `[0, n)` (no omissions, no duplicates)
//!
//! These are checked once in [`Instance::new`]. The matching engine relies on
//! them and does not check them again.

use std::fmt;

use tracing::debug;

use crate::engine::{MatchResult, MatchingEngine};
use crate::error::{MatchError, PreferenceError};

// ============================================================================
// Side enum
// ============================================================================

/// Which side of the market an agent belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    /// Initiates proposals (hospitals, men)
    #[default]
    Proposer,
    /// Accepts or rejects proposals (residents, women)
    Receiver,
}

impl Side {
    /// Lower-case name used in messages
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Proposer => "proposer",
            Side::Receiver => "receiver",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Instance
// ============================================================================

/// A validated stable-marriage instance.
///
/// ## Example
///
/// ```
/// use stable_match::types::{Instance, Pair};
///
/// let instance = Instance::new(
///     vec![vec![0, 1], vec![1, 0]],
///     vec![vec![0, 1], vec![1, 0]],
/// ).unwrap();
///
/// let result = instance.solve().unwrap();
/// assert_eq!(result.pairs(), &[Pair::new(0, 0), Pair::new(1, 1)]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Instance {
    /// proposer -> receivers, most preferred first
    proposers: Vec<Vec<usize>>,

    /// receiver -> proposers, most preferred first
    receivers: Vec<Vec<usize>>,
}

impl Instance {
    /// Build an instance, checking that both tables are complete strict
    /// preferences over the other side.
    ///
    /// # Arguments
    ///
    /// * `proposers` - One list per proposer, ranking every receiver
    /// * `receivers` - One list per receiver, ranking every proposer
    ///
    /// # Errors
    ///
    /// Returns the first [`PreferenceError`] found, scanning proposers before
    /// receivers and each list left to right.
    pub fn new(
        proposers: Vec<Vec<usize>>,
        receivers: Vec<Vec<usize>>,
    ) -> Result<Self, PreferenceError> {
        let n = proposers.len();
        if receivers.len() != n {
            return Err(PreferenceError::WrongAgentCount {
                side: Side::Receiver,
                expected: n,
                found: receivers.len(),
            });
        }

        validate_table(Side::Proposer, &proposers, n)?;
        validate_table(Side::Receiver, &receivers, n)?;

        debug!(n, "validated preference tables");
        Ok(Self {
            proposers,
            receivers,
        })
    }

    /// Wrap tables that are permutations by construction.
    pub(crate) fn from_trusted(proposers: Vec<Vec<usize>>, receivers: Vec<Vec<usize>>) -> Self {
        debug_assert!(Self::new(proposers.clone(), receivers.clone()).is_ok());
        Self {
            proposers,
            receivers,
        }
    }

    /// Number of agents on each side
    #[inline]
    pub fn size(&self) -> usize {
        self.proposers.len()
    }

    /// Check if the instance has no agents
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.proposers.is_empty()
    }

    /// Proposer preference table
    #[inline]
    pub fn proposer_prefs(&self) -> &[Vec<usize>] {
        &self.proposers
    }

    /// Receiver preference table
    #[inline]
    pub fn receiver_prefs(&self) -> &[Vec<usize>] {
        &self.receivers
    }

    /// Preference table for one side
    #[inline]
    pub fn prefs(&self, side: Side) -> &[Vec<usize>] {
        match side {
            Side::Proposer => &self.proposers,
            Side::Receiver => &self.receivers,
        }
    }

    /// Run the matching engine on this instance.
    ///
    /// Proposers propose; the result is the proposer-optimal stable matching.
    pub fn solve(&self) -> Result<MatchResult, MatchError> {
        MatchingEngine::new(&self.proposers, &self.receivers).run()
    }
}

/// Check that `table` holds `n` permutations of `[0, n)`.
fn validate_table(side: Side, table: &[Vec<usize>], n: usize) -> Result<(), PreferenceError> {
    if table.len() != n {
        return Err(PreferenceError::WrongAgentCount {
            side,
            expected: n,
            found: table.len(),
        });
    }

    let mut seen = vec![false; n];
    for (agent, list) in table.iter().enumerate() {
        if list.len() != n {
            return Err(PreferenceError::WrongListLength {
                side,
                agent,
                expected: n,
                found: list.len(),
            });
        }

        seen.fill(false);
        for &identity in list {
            if identity >= n {
                return Err(PreferenceError::OutOfRange {
                    side,
                    agent,
                    identity,
                    n,
                });
            }
            if std::mem::replace(&mut seen[identity], true) {
                return Err(PreferenceError::Duplicate {
                    side,
                    agent,
                    identity,
                });
            }
        }
    }

    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Proposer.to_string(), "proposer");
        assert_eq!(Side::Receiver.to_string(), "receiver");
    }

    #[test]
    fn test_instance_new_valid() {
        let instance = Instance::new(
            vec![vec![0, 1, 2], vec![2, 1, 0], vec![1, 0, 2]],
            vec![vec![1, 0, 2], vec![0, 1, 2], vec![2, 0, 1]],
        )
        .unwrap();

        assert_eq!(instance.size(), 3);
        assert!(!instance.is_empty());
        assert_eq!(instance.proposer_prefs()[1], vec![2, 1, 0]);
        assert_eq!(instance.prefs(Side::Receiver)[2], vec![2, 0, 1]);
    }

    #[test]
    fn test_instance_empty() {
        let instance = Instance::new(vec![], vec![]).unwrap();
        assert!(instance.is_empty());
        assert!(instance.solve().unwrap().is_empty());
    }

    #[test]
    fn test_instance_unequal_sides() {
        let err = Instance::new(vec![vec![0]], vec![]).unwrap_err();
        assert_eq!(
            err,
            PreferenceError::WrongAgentCount {
                side: Side::Receiver,
                expected: 1,
                found: 0,
            }
        );
    }

    #[test]
    fn test_instance_short_list() {
        let err = Instance::new(vec![vec![0, 1], vec![1]], vec![vec![0, 1], vec![1, 0]]).unwrap_err();
        assert_eq!(
            err,
            PreferenceError::WrongListLength {
                side: Side::Proposer,
                agent: 1,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn test_instance_out_of_range() {
        let err = Instance::new(vec![vec![0, 1], vec![1, 0]], vec![vec![0, 2], vec![1, 0]]).unwrap_err();
        assert_eq!(
            err,
            PreferenceError::OutOfRange {
                side: Side::Receiver,
                agent: 0,
                identity: 2,
                n: 2,
            }
        );
    }

    #[test]
    fn test_instance_duplicate() {
        let err = Instance::new(vec![vec![0, 1], vec![0, 0]], vec![vec![0, 1], vec![1, 0]]).unwrap_err();
        assert_eq!(
            err,
            PreferenceError::Duplicate {
                side: Side::Proposer,
                agent: 1,
                identity: 0,
            }
        );
    }
}
