//! In-memory campaign registry

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::{generate_api_key, Campaign, CampaignStatus};
use crate::{Error, Result};

/// Registry of lead generation campaigns
#[derive(Clone, Default)]
pub struct CampaignStore {
    state: Arc<RwLock<HashMap<Uuid, Campaign>>>,
}

impl CampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a campaign to the registry
    pub async fn create(&self, campaign: Campaign) -> Result<Campaign> {
        let mut state = self.state.write().await;
        if state.contains_key(&campaign.id) {
            return Err(Error::InvalidInput(format!(
                "Campaign with ID {} already exists",
                campaign.id
            )));
        }
        state.insert(campaign.id, campaign.clone());
        Ok(campaign)
    }

    /// Get a campaign by ID
    pub async fn get(&self, id: Uuid) -> Option<Campaign> {
        let state = self.state.read().await;
        state.get(&id).cloned()
    }

    /// Get all campaigns, newest first
    pub async fn list(&self) -> Vec<Campaign> {
        let state = self.state.read().await;
        let mut campaigns: Vec<Campaign> = state.values().cloned().collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }

    /// Get campaigns with the given status, newest first
    pub async fn list_by_status(&self, status: CampaignStatus) -> Vec<Campaign> {
        let state = self.state.read().await;
        let mut campaigns: Vec<Campaign> = state
            .values()
            .filter(|c| c.status == status)
            .cloned()
            .collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        campaigns
    }

    /// Replace the API key of an existing campaign
    ///
    /// The campaign id and creation date are stable across regeneration.
    pub async fn regenerate_api_key(&self, id: Uuid) -> Result<Campaign> {
        let mut state = self.state.write().await;
        let campaign = state
            .get_mut(&id)
            .ok_or_else(|| Error::CampaignNotFound(id.to_string()))?;
        campaign.api_key = generate_api_key(&campaign.name);
        Ok(campaign.clone())
    }

    /// Delete a campaign by ID
    ///
    /// Callers that own the permission matrix are responsible for cascading
    /// with `PermissionStore::remove_campaign_permissions`.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut state = self.state.write().await;
        state.remove(&id).is_some()
    }
}
