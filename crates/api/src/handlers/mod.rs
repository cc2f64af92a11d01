//! Request handlers, one module per resource.

pub mod auth;
pub mod dancers;
pub mod pairs;
pub mod recommendations;
pub mod requests;
