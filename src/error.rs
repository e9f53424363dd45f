//! Error types for stable-match.
//!
//! ## Taxonomy
//!
//! | Error | Raised by | Meaning |
//! |-------|-----------|---------|
//! | [`ParseError`] | input reader | The text is not a well-formed instance |
//! | [`PreferenceError`] | [`Instance::new`](crate::types::Instance::new) | A table is not a set of permutations of `[0, n)` |
//! | [`MatchError`] | matching engine | An internal invariant was violated (fatal) |
//! | [`VerifyError`] | stability check | A matching is not perfect or not stable |
//!
//! The engine itself trusts its input. Everything a caller can get wrong is
//! caught by the first two kinds before the core ever runs.

use thiserror::Error;

use crate::types::Side;

/// Convenience alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Umbrella error for callers that drive the whole read → match → write pipeline.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Preference(#[from] PreferenceError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error(transparent)]
    Verify(#[from] VerifyError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

// ============================================================================
// Malformed input
// ============================================================================

/// The persisted representation could not be read as an instance.
///
/// Line numbers are 1-based and refer to the physical line in the source.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("input is empty, expected the instance size on the first line")]
    MissingSize,

    #[error("line {line}: invalid instance size {token:?}")]
    InvalidSize { line: usize, token: String },

    #[error("line {line}: {token:?} is not a valid agent identity")]
    InvalidToken { line: usize, token: String },

    #[error("line {line}: expected {expected} entries, found {found}")]
    WrongLength {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("unexpected end of input: expected {expected} preference lists, found {found}")]
    UnexpectedEof { expected: usize, found: usize },

    #[error("line {line}: unexpected data after the last preference list")]
    TrailingData { line: usize },

    #[error(transparent)]
    Preference(#[from] PreferenceError),
}

// ============================================================================
// Invalid preference tables
// ============================================================================

/// A preference table violates the permutation invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    #[error("{side} table has {found} lists, expected {expected}")]
    WrongAgentCount {
        side: Side,
        expected: usize,
        found: usize,
    },

    #[error("{side} {agent}: list has {found} entries, expected {expected}")]
    WrongListLength {
        side: Side,
        agent: usize,
        expected: usize,
        found: usize,
    },

    #[error("{side} {agent}: identity {identity} is out of range for n = {n}")]
    OutOfRange {
        side: Side,
        agent: usize,
        identity: usize,
        n: usize,
    },

    #[error("{side} {agent}: identity {identity} is ranked more than once")]
    Duplicate {
        side: Side,
        agent: usize,
        identity: usize,
    },
}

// ============================================================================
// Engine faults
// ============================================================================

/// Internal-consistency faults raised by the matching engine.
///
/// Neither variant is reachable for a valid instance. Seeing one means the
/// input bypassed validation or the engine itself is broken, so the run is
/// aborted instead of returning a partial matching.
///
/// `UnmatchedReceiver` guards the final collection step. The loop only ends
/// once every proposer holds a distinct receiver, and there are as many
/// receivers as proposers, so a broken table trips `ExhaustedProposer` (or
/// indexes out of range) before a receiver can be left empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("proposer {proposer} is free but has already proposed to every receiver")]
    ExhaustedProposer { proposer: usize },

    #[error("receiver {receiver} is unmatched after the proposal loop finished")]
    UnmatchedReceiver { receiver: usize },
}

// ============================================================================
// Verification failures
// ============================================================================

/// A matching failed verification against its instance.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerifyError {
    #[error("matching has {found} pairs, expected {expected}")]
    WrongSize { expected: usize, found: usize },

    #[error("pair ({proposer}, {receiver}) is out of range for n = {n}")]
    OutOfRange {
        proposer: usize,
        receiver: usize,
        n: usize,
    },

    #[error("{side} {agent} appears in more than one pair")]
    Repeated { side: Side, agent: usize },

    #[error("proposer {proposer} and receiver {receiver} form a blocking pair")]
    BlockingPair { proposer: usize, receiver: usize },
}
