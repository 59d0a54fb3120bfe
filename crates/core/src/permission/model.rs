//! Permission record definitions

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Access record for a single (member, campaign) pair
///
/// `member_name` and `campaign_name` are cached display copies owned by the
/// member and campaign registries. They are refreshed when the matrix is
/// reconciled, not on every rename.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PermissionRecord {
    pub member_id: Uuid,
    pub member_name: String,
    pub campaign_id: Uuid,
    pub campaign_name: String,
    pub has_access: bool,
}

impl PermissionRecord {
    /// Create a record with access denied
    pub fn denied(
        member_id: Uuid,
        member_name: impl Into<String>,
        campaign_id: Uuid,
        campaign_name: impl Into<String>,
    ) -> Self {
        Self {
            member_id,
            member_name: member_name.into(),
            campaign_id,
            campaign_name: campaign_name.into(),
            has_access: false,
        }
    }
}
