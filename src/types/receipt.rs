//! Run receipt summarising one matching run.
//!
//! The receipt ties together the size of the instance, how much work the
//! engine did, how long it took, and the state root of the resulting
//! matching.

use std::time::Duration;

use rust_decimal::Decimal;
use ssz_rs::prelude::*;

use crate::engine::MatchResult;
use crate::types::elapsed::{self, duration_to_nanos};

/// Summary of a single matching run.
///
/// ## State Root
///
/// `state_root` is the SHA-256 hash of the SSZ-encoded pair list (see
/// [`MatchResult::state_root`]). Two runs over the same instance must produce
/// the same root.
///
/// ## Example
///
/// ```
/// use std::time::Duration;
/// use stable_match::types::{Instance, MatchReceipt};
///
/// let instance = Instance::new(vec![vec![0]], vec![vec![0]]).unwrap();
/// let result = instance.solve().unwrap();
/// let receipt = MatchReceipt::from_result(&result, Duration::from_micros(15));
///
/// assert_eq!(receipt.size, 1);
/// assert_eq!(receipt.proposals, 1);
/// assert_eq!(receipt.state_root, result.state_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, SimpleSerialize)]
pub struct MatchReceipt {
    /// Number of agents on each side
    pub size: u64,

    /// Proposals made during the run
    pub proposals: u64,

    /// Proposals that ended with a rejection (including displacements)
    pub rejections: u64,

    /// Wall-clock duration of the engine run in nanoseconds
    pub elapsed_nanos: u64,

    /// SHA-256 root of the matching (32 bytes)
    pub state_root: [u8; 32],
}

impl MatchReceipt {
    /// Create a new receipt
    pub fn new(
        size: u64,
        proposals: u64,
        rejections: u64,
        elapsed_nanos: u64,
        state_root: [u8; 32],
    ) -> Self {
        Self {
            size,
            proposals,
            rejections,
            elapsed_nanos,
            state_root,
        }
    }

    /// Build a receipt from a finished run and its measured duration
    pub fn from_result(result: &MatchResult, elapsed: Duration) -> Self {
        Self::new(
            result.len() as u64,
            result.proposals(),
            result.rejections(),
            duration_to_nanos(elapsed),
            result.state_root(),
        )
    }

    /// Get the state root as a hex string
    pub fn state_root_hex(&self) -> String {
        hex::encode(self.state_root)
    }

    /// Elapsed time in seconds, rounded for reports
    pub fn elapsed_seconds(&self) -> Decimal {
        elapsed::round_seconds(elapsed::nanos_to_seconds(self.elapsed_nanos))
    }

    /// Check if this receipt is for an empty instance
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Average number of proposals per proposer
    ///
    /// Ranges from 1 (everyone got their first choice) to roughly `n`.
    /// Returns None for an empty instance.
    pub fn proposals_per_agent(&self) -> Option<f64> {
        if self.size == 0 {
            None
        } else {
            Some(self.proposals as f64 / self.size as f64)
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
