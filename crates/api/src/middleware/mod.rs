//! Authentication middleware extractors.
//!
//! [`auth::AuthUser`] extracts the authenticated caller from a JWT Bearer
//! token. Finer-grained authorization (ownership, admin override) goes
//! through the capability predicates on `quickstep_core::authz::Caller`,
//! obtained via [`auth::AuthUser::caller`].

pub mod auth;
