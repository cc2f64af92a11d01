//! Pair-formation rules.
//!
//! Accepting a partnership request turns two dancers into a pair, but only
//! when every precondition below holds at that instant. The checks run in a
//! fixed order and each failure carries its own message so callers (and
//! tests) can tell them apart. The persistence layer evaluates this
//! function inside the same transaction that applies the writes, with both
//! dancer rows locked.

use crate::status::STATUS_IN_SEARCH;
use crate::types::DbId;

/// The facts about one dancer that pair formation depends on.
///
/// Built by the persistence layer from a freshly locked row.
#[derive(Debug, Clone)]
pub struct PairCandidate {
    pub id: DbId,
    pub sex: String,
    pub status: String,
}

/// A specific reason pair formation is not allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PairViolation {
    #[error("Both dancers must be in IN_SEARCH status")]
    NotInSearch,

    #[error("Sender and receiver must be different dancers")]
    SameDancer,

    #[error("Both dancers must be of different sexes")]
    SameSex,

    #[error("One or both dancers are already in a pair")]
    AlreadyPaired,
}

/// Validate that `sender` and `receiver` may form a pair.
///
/// Check order: availability, distinctness, sex, existing pair membership.
/// `either_already_paired` is whether any persisted pair references either
/// dancer in either slot.
pub fn validate_pair_formation(
    sender: &PairCandidate,
    receiver: &PairCandidate,
    either_already_paired: bool,
) -> Result<(), PairViolation> {
    if sender.status != STATUS_IN_SEARCH || receiver.status != STATUS_IN_SEARCH {
        return Err(PairViolation::NotInSearch);
    }
    if sender.id == receiver.id {
        return Err(PairViolation::SameDancer);
    }
    if sender.sex == receiver.sex {
        return Err(PairViolation::SameSex);
    }
    if either_already_paired {
        return Err(PairViolation::AlreadyPaired);
    }
    Ok(())
}
