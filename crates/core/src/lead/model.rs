//! Lead model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a lead sits in the follow-up pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    Unqualified,
}

impl Default for LeadStatus {
    fn default() -> Self {
        Self::New
    }
}

/// A lead submitted through a campaign form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lead {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub submitted_at: DateTime<Utc>,
    pub status: LeadStatus,
    pub opened: bool,
    pub campaign_id: Uuid,
    /// Cached display copy of the campaign name at submission time
    pub campaign_name: String,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub message: Option<String>,
}

impl Lead {
    /// Create a new lead for the given campaign
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        campaign_id: Uuid,
        campaign_name: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            submitted_at: Utc::now(),
            status: LeadStatus::default(),
            opened: false,
            campaign_id,
            campaign_name: campaign_name.into(),
            location: None,
            phone: None,
            region: None,
            message: None,
        }
    }

    pub fn with_status(mut self, status: LeadStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_opened(mut self, opened: bool) -> Self {
        self.opened = opened;
        self
    }

    pub fn with_submitted_at(mut self, submitted_at: DateTime<Utc>) -> Self {
        self.submitted_at = submitted_at;
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}
