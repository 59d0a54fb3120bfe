//! Permission matrix module
//!
//! Tracks which team members have access to which campaigns. The matrix is
//! keyed by (member, campaign) and holds at most one record per pair.

mod model;
mod store;

pub use model::PermissionRecord;
pub use store::PermissionStore;
