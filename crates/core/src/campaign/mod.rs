//! Campaign module
//!
//! This module contains campaign-related types, API key generation, and the
//! campaign registry.

mod model;
mod store;

pub use model::*;
pub use store::CampaignStore;
