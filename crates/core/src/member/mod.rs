//! Team member module
//!
//! This module contains member-related types and the member registry.

mod model;
mod store;

pub use model::*;
pub use store::MemberStore;
