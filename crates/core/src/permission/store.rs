//! In-memory permission matrix store
//!
//! The map key is the (member, campaign) pair, so the uniqueness invariant
//! holds structurally: no call sequence can produce duplicate records.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::PermissionRecord;
use crate::campaign::Campaign;
use crate::member::Member;

/// Store of (member, campaign) access records
#[derive(Clone, Default)]
pub struct PermissionStore {
    state: Arc<RwLock<HashMap<(Uuid, Uuid), PermissionRecord>>>,
}

impl PermissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a full record; used for seeding
    pub async fn insert(&self, record: PermissionRecord) -> PermissionRecord {
        let mut state = self.state.write().await;
        state.insert((record.member_id, record.campaign_id), record.clone());
        record
    }

    /// Insert a denied record for the pair if none exists
    ///
    /// Idempotent: repeated calls with an existing pair are no-ops and do
    /// not touch the stored flag or cached names.
    pub async fn ensure_exists(
        &self,
        member_id: Uuid,
        member_name: &str,
        campaign_id: Uuid,
        campaign_name: &str,
    ) -> PermissionRecord {
        let mut state = self.state.write().await;
        state
            .entry((member_id, campaign_id))
            .or_insert_with(|| {
                PermissionRecord::denied(member_id, member_name, campaign_id, campaign_name)
            })
            .clone()
    }

    /// Whether the member has access to the campaign
    ///
    /// Returns false for unknown pairs and never creates a record.
    pub async fn has_access(&self, member_id: Uuid, campaign_id: Uuid) -> bool {
        let state = self.state.read().await;
        state
            .get(&(member_id, campaign_id))
            .map(|record| record.has_access)
            .unwrap_or(false)
    }

    /// Flip the access flag for the pair, returning the new value
    ///
    /// Silent no-op when no record exists: returns None and changes nothing.
    pub async fn toggle(&self, member_id: Uuid, campaign_id: Uuid) -> Option<bool> {
        let mut state = self.state.write().await;
        let record = state.get_mut(&(member_id, campaign_id))?;
        record.has_access = !record.has_access;
        Some(record.has_access)
    }

    /// All records for a member, sorted by campaign name
    pub async fn list_for_member(&self, member_id: Uuid) -> Vec<PermissionRecord> {
        let state = self.state.read().await;
        let mut records: Vec<PermissionRecord> = state
            .values()
            .filter(|record| record.member_id == member_id)
            .cloned()
            .collect();
        records.sort_by(|a, b| a.campaign_name.cmp(&b.campaign_name));
        records
    }

    /// Materialize the member's row of the matrix against the given campaigns
    ///
    /// Ensures one record per (member, campaign) pair, refreshes the cached
    /// display names from the owning registries, and returns the member's
    /// records sorted by campaign name. Invoked as an explicit action when a
    /// member is selected in the access matrix, never as a side effect of
    /// producing a view.
    pub async fn reconcile_member(
        &self,
        member: &Member,
        campaigns: &[Campaign],
    ) -> Vec<PermissionRecord> {
        let mut state = self.state.write().await;
        let mut records = Vec::with_capacity(campaigns.len());
        for campaign in campaigns {
            let record = state
                .entry((member.id, campaign.id))
                .or_insert_with(|| {
                    PermissionRecord::denied(member.id, &member.name, campaign.id, &campaign.name)
                });
            record.member_name = member.name.clone();
            record.campaign_name = campaign.name.clone();
            records.push(record.clone());
        }
        records.sort_by(|a, b| a.campaign_name.cmp(&b.campaign_name));
        records
    }

    /// Delete every record for the member, returning how many were removed
    ///
    /// Invoked only as the cascade step of member deletion.
    pub async fn remove_member_permissions(&self, member_id: Uuid) -> usize {
        let mut state = self.state.write().await;
        let before = state.len();
        state.retain(|(record_member_id, _), _| *record_member_id != member_id);
        before - state.len()
    }

    /// Delete every record for the campaign, returning how many were removed
    ///
    /// Invoked only as the cascade step of campaign deletion, keeping the
    /// cascade policy symmetric with member deletion.
    pub async fn remove_campaign_permissions(&self, campaign_id: Uuid) -> usize {
        let mut state = self.state.write().await;
        let before = state.len();
        state.retain(|(_, record_campaign_id), _| *record_campaign_id != campaign_id);
        before - state.len()
    }

    /// Total number of records in the matrix
    pub async fn len(&self) -> usize {
        let state = self.state.read().await;
        state.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
