//! Leads API endpoints
//!
//! Filterable read-only view over the lead list, plus the two mutation
//! endpoints the dashboard exposes. The mutations are stubs by design:
//! they acknowledge the request without persisting anything.

use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lm_core::lead::{Lead, LeadMetrics, LeadQuery, LeadStatus};

use super::{bad_request, not_found, RouteError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LeadsListQuery {
    #[serde(default)]
    pub search: Option<String>,
    /// Lead status or the "all" sentinel (default)
    #[serde(default)]
    pub status: Option<String>,
    /// Campaign id or the "all" sentinel (default)
    #[serde(default)]
    pub campaign: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetLeadStatusRequest {
    pub status: LeadStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub submitted_at: String,
    pub status: LeadStatus,
    pub opened: bool,
    pub campaign_id: Uuid,
    pub campaign_name: String,
    pub location: Option<String>,
    pub phone: Option<String>,
    pub region: Option<String>,
    pub message: Option<String>,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id,
            name: lead.name,
            email: lead.email,
            submitted_at: lead.submitted_at.to_rfc3339(),
            status: lead.status,
            opened: lead.opened,
            campaign_id: lead.campaign_id,
            campaign_name: lead.campaign_name,
            location: lead.location,
            phone: lead.phone,
            region: lead.region,
            message: lead.message,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadsListResponse {
    pub leads: Vec<LeadResponse>,
    pub metrics: LeadMetrics,
}

fn parse_status_filter(raw: Option<&str>) -> Result<Option<LeadStatus>, RouteError> {
    match raw {
        None | Some("all") | Some("") => Ok(None),
        Some("new") => Ok(Some(LeadStatus::New)),
        Some("contacted") => Ok(Some(LeadStatus::Contacted)),
        Some("qualified") => Ok(Some(LeadStatus::Qualified)),
        Some("unqualified") => Ok(Some(LeadStatus::Unqualified)),
        Some(other) => Err(bad_request(format!("Unknown status filter '{}'", other))),
    }
}

fn parse_campaign_filter(raw: Option<&str>) -> Result<Option<Uuid>, RouteError> {
    match raw {
        None | Some("all") | Some("") => Ok(None),
        Some(raw) => Uuid::parse_str(raw)
            .map(Some)
            .map_err(|_| bad_request(format!("Invalid campaign filter '{}'", raw))),
    }
}

/// GET /api/leads - Filtered leads plus derived metrics
async fn list_leads(
    State(state): State<AppState>,
    Query(params): Query<LeadsListQuery>,
) -> Result<Json<LeadsListResponse>, RouteError> {
    let query = LeadQuery {
        search: params.search,
        status: parse_status_filter(params.status.as_deref())?,
        campaign_id: parse_campaign_filter(params.campaign.as_deref())?,
    };

    let (leads, metrics) = state.leads().query(&query).await;
    Ok(Json(LeadsListResponse {
        leads: leads.into_iter().map(LeadResponse::from).collect(),
        metrics,
    }))
}

/// POST /api/leads/:id/status - Request a status change (not persisted)
async fn set_lead_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SetLeadStatusRequest>,
) -> Result<Json<LeadResponse>, RouteError> {
    match state.leads().set_status(id, req.status).await {
        Some(lead) => Ok(Json(LeadResponse::from(lead))),
        None => Err(not_found(format!("Lead {} not found", id))),
    }
}

/// POST /api/leads/:id/opened/toggle - Request an opened toggle (not persisted)
async fn toggle_lead_opened(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<LeadResponse>, RouteError> {
    match state.leads().toggle_opened(id).await {
        Some(lead) => Ok(Json(LeadResponse::from(lead))),
        None => Err(not_found(format!("Lead {} not found", id))),
    }
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/leads", get(list_leads))
        .route("/api/leads/{id}/status", post(set_lead_status))
        .route("/api/leads/{id}/opened/toggle", post(toggle_lead_opened))
}
