//! In-memory member registry
//!
//! All state is ephemeral and reset on restart; there is no persistence
//! layer in this service.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use super::model::Member;
use crate::{Error, Result};

/// Registry of team members
#[derive(Clone, Default)]
pub struct MemberStore {
    state: Arc<RwLock<HashMap<Uuid, Member>>>,
}

impl MemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a member to the registry
    pub async fn create(&self, member: Member) -> Result<Member> {
        let mut state = self.state.write().await;
        if state.contains_key(&member.id) {
            return Err(Error::InvalidInput(format!(
                "Member with ID {} already exists",
                member.id
            )));
        }
        state.insert(member.id, member.clone());
        Ok(member)
    }

    /// Get a member by ID
    pub async fn get(&self, id: Uuid) -> Option<Member> {
        let state = self.state.read().await;
        state.get(&id).cloned()
    }

    /// Get all members, sorted by name
    pub async fn list(&self) -> Vec<Member> {
        let state = self.state.read().await;
        let mut members: Vec<Member> = state.values().cloned().collect();
        members.sort_by(|a, b| a.name.cmp(&b.name));
        members
    }

    /// Replace an existing member record wholesale
    pub async fn update(&self, member: Member) -> Result<Member> {
        let mut state = self.state.write().await;
        if !state.contains_key(&member.id) {
            return Err(Error::MemberNotFound(member.id.to_string()));
        }
        state.insert(member.id, member.clone());
        Ok(member)
    }

    /// Delete a member by ID
    ///
    /// Callers that own the permission matrix are responsible for cascading
    /// with `PermissionStore::remove_member_permissions`.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut state = self.state.write().await;
        state.remove(&id).is_some()
    }
}
