//! Application state

use std::sync::Arc;

use lm_core::campaign::CampaignStore;
use lm_core::fixtures;
use lm_core::lead::LeadStore;
use lm_core::member::MemberStore;
use lm_core::permission::PermissionStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    members: MemberStore,
    campaigns: CampaignStore,
    permissions: PermissionStore,
    leads: LeadStore,
}

impl AppState {
    /// Create a new AppState with empty stores
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                members: MemberStore::new(),
                campaigns: CampaignStore::new(),
                permissions: PermissionStore::new(),
                leads: LeadStore::new(),
            }),
        }
    }

    /// Load the demo fixture bundle into the stores
    ///
    /// All state is ephemeral, so this is how the dashboard gets its data on
    /// every start.
    pub async fn seed_demo_data(&self) -> lm_core::Result<()> {
        let data = fixtures::demo_data();
        for member in data.members {
            self.inner.members.create(member).await?;
        }
        for campaign in data.campaigns {
            self.inner.campaigns.create(campaign).await?;
        }
        for permission in data.permissions {
            self.inner.permissions.insert(permission).await;
        }
        self.inner.leads.seed(data.leads).await;
        Ok(())
    }

    pub fn members(&self) -> &MemberStore {
        &self.inner.members
    }

    pub fn campaigns(&self) -> &CampaignStore {
        &self.inner.campaigns
    }

    pub fn permissions(&self) -> &PermissionStore {
        &self.inner.permissions
    }

    pub fn leads(&self) -> &LeadStore {
        &self.inner.leads
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
