//! Pure domain logic for the quickstep partner-matching service.
//!
//! This crate holds the rules of the system and nothing else: the status
//! vocabulary and its transitions, pair-formation validation, the caller
//! capability model, and the recommendation math. It performs no I/O --
//! persistence lives in `quickstep-db` and transport in `quickstep-api`.

pub mod authz;
pub mod error;
pub mod matching;
pub mod recommend;
pub mod roles;
pub mod status;
pub mod types;
