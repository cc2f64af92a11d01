//! Status-engine vocabulary and transition rules.
//!
//! A dancer's `status` is derived state: it mirrors whether the dancer
//! currently belongs to any pair. Only the pair lifecycle (acceptance and
//! dissolution, both in `quickstep-db`) may write it; the profile-update
//! path has no status field at all. The constants here must match the
//! CHECK constraints in the `dancers` and `requests` migrations.

pub const SEX_MALE: &str = "MALE";
pub const SEX_FEMALE: &str = "FEMALE";

pub const STATUS_IN_SEARCH: &str = "IN_SEARCH";
pub const STATUS_IN_PAIR: &str = "IN_PAIR";

pub const REQUEST_PENDING: &str = "PENDING";
pub const REQUEST_ACCEPTED: &str = "ACCEPTED";
pub const REQUEST_REJECTED: &str = "REJECTED";

/// True if `sex` is one of the known vocabulary values.
pub fn is_valid_sex(sex: &str) -> bool {
    sex == SEX_MALE || sex == SEX_FEMALE
}

/// True if `status` names a request state a caller may resolve a request to.
///
/// `PENDING` is the creation state, never a transition target.
pub fn is_resolution_status(status: &str) -> bool {
    status == REQUEST_ACCEPTED || status == REQUEST_REJECTED
}

/// Status to apply after a pair referencing a dancer was removed.
///
/// Returns `Some(IN_SEARCH)` iff the dancer holds no remaining pair and is
/// currently `IN_PAIR`; `None` means no write is needed. Idempotent: a
/// dancer already `IN_SEARCH`, or one still in another pair, is left alone.
pub fn recompute_after_pair_removal(
    current_status: &str,
    remaining_pair_count: i64,
) -> Option<&'static str> {
    if remaining_pair_count == 0 && current_status == STATUS_IN_PAIR {
        Some(STATUS_IN_SEARCH)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_pair_removed_returns_to_search() {
        assert_eq!(
            recompute_after_pair_removal(STATUS_IN_PAIR, 0),
            Some(STATUS_IN_SEARCH)
        );
    }

    #[test]
    fn test_remaining_pair_keeps_in_pair() {
        assert_eq!(recompute_after_pair_removal(STATUS_IN_PAIR, 1), None);
        assert_eq!(recompute_after_pair_removal(STATUS_IN_PAIR, 3), None);
    }

    #[test]
    fn test_already_in_search_is_noop() {
        // Recompute must be idempotent when the dancer never entered a pair.
        assert_eq!(recompute_after_pair_removal(STATUS_IN_SEARCH, 0), None);
    }

    #[test]
    fn test_resolution_vocabulary() {
        assert!(is_resolution_status(REQUEST_ACCEPTED));
        assert!(is_resolution_status(REQUEST_REJECTED));
        assert!(!is_resolution_status(REQUEST_PENDING));
        assert!(!is_resolution_status("CANCELLED"));
    }

    #[test]
    fn test_sex_vocabulary() {
        assert!(is_valid_sex(SEX_MALE));
        assert!(is_valid_sex(SEX_FEMALE));
        assert!(!is_valid_sex("male"));
        assert!(!is_valid_sex(""));
    }
}
