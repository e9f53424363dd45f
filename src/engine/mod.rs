//! Matching engine module for stable-match.
//!
//! ## Design Principles
//!
//! The matching engine is designed for:
//!
//! 1. **Determinism**: Same input always produces the same pairs, in the same order
//! 2. **Dense identities**: Agents are array indices, no hashing in the hot loop
//! 3. **Synchronous Execution**: One owner, no locks, no I/O inside the loop
//! 4. **Fail fast**: Broken invariants abort the run instead of returning a partial matching
//!
//! ## Components
//!
//! - [`RankIndex`]: receiver -> proposer -> rank, O(1) comparisons
//! - [`ProposerQueue`]: min-heap of free proposers, smallest identity first
//! - [`MatchingEngine`]: the deferred-acceptance proposal loop
//! - [`verify`]: independent perfection and stability check
//!
//! ## Example
//!
//! ```
//! use stable_match::engine::{verify, MatchingEngine};
//! use stable_match::types::Instance;
//!
//! let instance = Instance::new(
//!     vec![vec![1, 0], vec![0, 1]],
//!     vec![vec![0, 1], vec![0, 1]],
//! ).unwrap();
//!
//! let result = MatchingEngine::new(instance.proposer_prefs(), instance.receiver_prefs())
//!     .run()
//!     .unwrap();
//!
//! assert_eq!(result.len(), 2);
//! assert!(verify(&instance, result.pairs()).is_ok());
//! ```

pub mod matcher;
pub mod queue;
pub mod rank;
pub mod stability;

pub use matcher::{stable_matching, MatchResult, MatchingEngine, Proposal};
pub use queue::ProposerQueue;
pub use rank::RankIndex;
pub use stability::{is_stable, verify};
