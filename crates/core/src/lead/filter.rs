//! Pure lead filtering and derived metrics
//!
//! No mutation happens here; the table view is a derivation over the lead
//! list and the three filter dimensions.

use serde::Serialize;
use uuid::Uuid;

use super::model::{Lead, LeadStatus};

/// Filter dimensions for the leads table
///
/// Each dimension is optional; `None` bypasses it (the HTTP layer maps the
/// `"all"` sentinel and empty search strings to `None`).
#[derive(Debug, Clone, Default)]
pub struct LeadQuery {
    /// Case-insensitive substring match against name or email
    pub search: Option<String>,
    pub status: Option<LeadStatus>,
    pub campaign_id: Option<Uuid>,
}

/// Counts derived from a filtered lead sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadMetrics {
    pub total: usize,
    pub new: usize,
    pub opened: usize,
}

impl LeadMetrics {
    /// Compute metrics from an already-filtered sequence
    pub fn of(leads: &[&Lead]) -> Self {
        Self {
            total: leads.len(),
            new: leads
                .iter()
                .filter(|lead| lead.status == LeadStatus::New)
                .count(),
            opened: leads.iter().filter(|lead| lead.opened).count(),
        }
    }
}

/// Apply the query to the lead list, preserving order
pub fn filter_leads<'a>(leads: &'a [Lead], query: &LeadQuery) -> Vec<&'a Lead> {
    let search = query
        .search
        .as_deref()
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_lowercase);

    leads
        .iter()
        .filter(|lead| {
            let matches_search = match &search {
                Some(term) => {
                    lead.name.to_lowercase().contains(term)
                        || lead.email.to_lowercase().contains(term)
                }
                None => true,
            };
            let matches_status = match query.status {
                Some(status) => lead.status == status,
                None => true,
            };
            let matches_campaign = match query.campaign_id {
                Some(campaign_id) => lead.campaign_id == campaign_id,
                None => true,
            };
            matches_search && matches_status && matches_campaign
        })
        .collect()
}
