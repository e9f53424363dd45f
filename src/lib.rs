//! # stable-match
//!
//! Deterministic stable matching (Gale-Shapley deferred acceptance) between
//! two equally sized sides: proposers (hospitals, men) and receivers
//! (residents, women).
//!
//! ## Architecture
//!
//! - **Types**: Validated instances, result pairs, run receipts
//! - **Engine**: Rank index, proposer heap, proposal loop, stability check
//! - **IO**: Text reader/writer and random instance generator
//! - **CLI**: `generate`, `solve` and `sweep` commands
//!
//! ## Design Principles
//!
//! 1. **Determinism**: Identical input gives identical pairs in identical order
//! 2. **Validate at the edge**: The engine trusts [`Instance`]; the reader and
//!    [`Instance::new`] reject everything else
//! 3. **Fail fast**: Invariant violations abort the run with a [`MatchError`]
//!
//! ## Example
//!
//! ```
//! use stable_match::{stable_matching, Pair};
//!
//! let proposers = vec![vec![0, 1, 2]; 3];
//! let receivers = vec![vec![1, 0, 2], vec![0, 1, 2], vec![0, 1, 2]];
//!
//! let pairs = stable_matching(&proposers, &receivers).unwrap();
//! assert_eq!(pairs, vec![Pair::new(1, 0), Pair::new(0, 1), Pair::new(2, 2)]);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: Instance, Pair, MatchReceipt
pub mod types;

/// Matching engine: rank lookup, proposer queue, proposal loop
pub mod engine;

/// Instance and matching files, random generation
pub mod io;

/// Error types
pub mod error;

/// Command-line harness
pub mod cli;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use engine::{stable_matching, verify, MatchResult, MatchingEngine, ProposerQueue, RankIndex};
pub use error::{Error, MatchError, ParseError, PreferenceError, Result, VerifyError};
pub use types::{Instance, MatchReceipt, Pair, Side};
