//! Core data types for stable-match
//!
//! ## Types
//!
//! - [`Instance`]: Two validated preference tables of equal size
//! - [`Side`]: Proposer or Receiver
//! - [`Pair`]: One (proposer, receiver) engagement in a result
//! - [`MatchReceipt`]: Run summary with the matching's state root
//!
//! ## Identities
//!
//! Agents are dense integers in `[0, n)` on both sides. Preference tables
//! store them as `usize` so they index directly; [`Pair`] stores them as
//! `u64` for SSZ encoding.

mod instance;
mod pair;
mod receipt;
pub mod elapsed;

// Re-export all types at module level
pub use instance::{Instance, Side};
pub use pair::Pair;
pub use receipt::MatchReceipt;
