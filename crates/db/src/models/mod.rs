//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) where the entity
//!   supports partial updates

pub mod dancer;
pub mod pair;
pub mod request;
pub mod session;
pub mod user;
