//! Well-known user-type constants.
//!
//! These must match the CHECK constraint on `users.user_type` in
//! `20260301000004_create_users.sql`.

pub const USER_TYPE_ADMIN: &str = "ADMIN";
pub const USER_TYPE_DANCER: &str = "DANCER";

/// True if `user_type` is one of the known vocabulary values.
pub fn is_valid_user_type(user_type: &str) -> bool {
    user_type == USER_TYPE_ADMIN || user_type == USER_TYPE_DANCER
}
