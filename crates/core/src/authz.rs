//! Caller capability model.
//!
//! Authorization is expressed as predicates on a [`Caller`] rather than
//! role branching at call sites: handlers ask "may this caller modify this
//! entity" and the answer is uniform across admin and dancer accounts. A
//! DANCER-type account acts only on behalf of its linked dancer profile;
//! an account with no linked profile can act on nothing.

use crate::roles::USER_TYPE_ADMIN;
use crate::types::DbId;

/// The resolved identity of the caller: account id, role, and the dancer
/// profile the account is entitled to act for (if any).
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: DbId,
    pub role: String,
    pub dancer_id: Option<DbId>,
}

impl Caller {
    pub fn is_admin(&self) -> bool {
        self.role == USER_TYPE_ADMIN
    }

    /// True if the caller's linked dancer profile is `dancer_id`.
    pub fn owns_dancer(&self, dancer_id: DbId) -> bool {
        self.dancer_id == Some(dancer_id)
    }

    /// May the caller act on the dancer profile `dancer_id` (update,
    /// delete, send requests as)? Admins always; others only for their
    /// own linked profile.
    pub fn can_act_for_dancer(&self, dancer_id: DbId) -> bool {
        self.is_admin() || self.owns_dancer(dancer_id)
    }

    /// May the caller delete a request between `sender_id` and
    /// `receiver_id`? Admins always; a dancer if they are either party.
    pub fn can_modify_request(&self, sender_id: DbId, receiver_id: DbId) -> bool {
        self.is_admin() || self.owns_dancer(sender_id) || self.owns_dancer(receiver_id)
    }

    /// May the caller dissolve a pair between `dancer1_id` and
    /// `dancer2_id`? Admins always; a dancer if they are a member.
    pub fn can_modify_pair(&self, dancer1_id: DbId, dancer2_id: DbId) -> bool {
        self.is_admin() || self.owns_dancer(dancer1_id) || self.owns_dancer(dancer2_id)
    }

    /// May the caller delete the account `target_user_id`? Admins always;
    /// anyone their own account.
    pub fn can_delete_user(&self, target_user_id: DbId) -> bool {
        self.is_admin() || self.user_id == target_user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{USER_TYPE_ADMIN, USER_TYPE_DANCER};

    fn admin() -> Caller {
        Caller {
            user_id: 1,
            role: USER_TYPE_ADMIN.to_string(),
            dancer_id: None,
        }
    }

    fn dancer_user(user_id: DbId, dancer_id: Option<DbId>) -> Caller {
        Caller {
            user_id,
            role: USER_TYPE_DANCER.to_string(),
            dancer_id,
        }
    }

    #[test]
    fn test_admin_can_act_for_any_dancer() {
        assert!(admin().can_act_for_dancer(42));
        assert!(admin().can_modify_request(5, 6));
        assert!(admin().can_modify_pair(5, 6));
    }

    #[test]
    fn test_dancer_acts_only_for_linked_profile() {
        let caller = dancer_user(10, Some(5));
        assert!(caller.can_act_for_dancer(5));
        assert!(!caller.can_act_for_dancer(6));
    }

    #[test]
    fn test_unlinked_dancer_account_acts_on_nothing() {
        let caller = dancer_user(10, None);
        assert!(!caller.can_act_for_dancer(5));
        assert!(!caller.can_modify_request(5, 6));
        assert!(!caller.can_modify_pair(5, 6));
    }

    #[test]
    fn test_request_parties_may_modify() {
        assert!(dancer_user(10, Some(5)).can_modify_request(5, 6));
        assert!(dancer_user(11, Some(6)).can_modify_request(5, 6));
        assert!(!dancer_user(12, Some(7)).can_modify_request(5, 6));
    }

    #[test]
    fn test_pair_members_may_modify() {
        assert!(dancer_user(10, Some(5)).can_modify_pair(5, 6));
        assert!(dancer_user(11, Some(6)).can_modify_pair(5, 6));
        assert!(!dancer_user(12, Some(7)).can_modify_pair(5, 6));
    }

    #[test]
    fn test_user_deletion_admin_or_self() {
        assert!(admin().can_delete_user(99));
        assert!(dancer_user(10, None).can_delete_user(10));
        assert!(!dancer_user(10, None).can_delete_user(11));
    }
}
