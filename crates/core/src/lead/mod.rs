//! Lead module
//!
//! Read-only lead records, the pure filter over them, and the derived
//! metrics shown above the leads table.

mod filter;
mod model;
mod store;

pub use filter::{filter_leads, LeadMetrics, LeadQuery};
pub use model::*;
pub use store::LeadStore;
