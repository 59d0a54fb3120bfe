//! In-memory lead list
//!
//! Leads are read-only in this service: they arrive as seed data and are
//! only ever filtered. The status and opened mutation entry points are
//! deliberate stubs that log the request and change nothing, matching the
//! current dashboard behavior.

use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::filter::{filter_leads, LeadMetrics, LeadQuery};
use super::model::{Lead, LeadStatus};

/// Read-only store of submitted leads
#[derive(Clone, Default)]
pub struct LeadStore {
    state: Arc<RwLock<Vec<Lead>>>,
}

impl LeadStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the lead list with the given seed data
    pub async fn seed(&self, leads: Vec<Lead>) {
        let mut state = self.state.write().await;
        *state = leads;
    }

    /// Get a lead by ID
    pub async fn get(&self, id: Uuid) -> Option<Lead> {
        let state = self.state.read().await;
        state.iter().find(|lead| lead.id == id).cloned()
    }

    /// Get all leads in submission order
    pub async fn list(&self) -> Vec<Lead> {
        let state = self.state.read().await;
        state.clone()
    }

    /// Apply the query and derive metrics from the filtered sequence
    pub async fn query(&self, query: &LeadQuery) -> (Vec<Lead>, LeadMetrics) {
        let state = self.state.read().await;
        let filtered = filter_leads(&state, query);
        let metrics = LeadMetrics::of(&filtered);
        (filtered.into_iter().cloned().collect(), metrics)
    }

    /// Request a status change for a lead
    ///
    /// Stub: logs the request and returns the lead unchanged. Lead mutation
    /// is not persisted anywhere in this service yet.
    pub async fn set_status(&self, id: Uuid, status: LeadStatus) -> Option<Lead> {
        let lead = self.get(id).await?;
        tracing::info!(lead_id = %id, ?status, "lead status update requested; not persisted");
        Some(lead)
    }

    /// Request an opened-flag toggle for a lead
    ///
    /// Stub: logs the request and returns the lead unchanged.
    pub async fn toggle_opened(&self, id: Uuid) -> Option<Lead> {
        let lead = self.get(id).await?;
        tracing::info!(lead_id = %id, "lead opened toggle requested; not persisted");
        Some(lead)
    }
}
