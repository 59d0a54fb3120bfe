//! Permission matrix API endpoints
//!
//! Viewing a member's row of the access matrix runs reconciliation as an
//! explicit action: every (member, campaign) pair gets a record before the
//! rows are returned. Toggling goes through the same ensure step, so the
//! flip always has a target record.

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use lm_core::permission::PermissionRecord;

use super::{not_found, RouteError};
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionResponse {
    pub member_id: Uuid,
    pub member_name: String,
    pub campaign_id: Uuid,
    pub campaign_name: String,
    pub has_access: bool,
}

impl From<PermissionRecord> for PermissionResponse {
    fn from(record: PermissionRecord) -> Self {
        Self {
            member_id: record.member_id,
            member_name: record.member_name,
            campaign_id: record.campaign_id,
            campaign_name: record.campaign_name,
            has_access: record.has_access,
        }
    }
}

/// GET /api/members/:id/permissions - Reconcile and list the member's row
async fn list_member_permissions(
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
) -> Result<Json<Vec<PermissionResponse>>, RouteError> {
    let member = state
        .members()
        .get(member_id)
        .await
        .ok_or_else(|| not_found(format!("Member {} not found", member_id)))?;

    let campaigns = state.campaigns().list().await;
    let records = state
        .permissions()
        .reconcile_member(&member, &campaigns)
        .await;

    Ok(Json(
        records.into_iter().map(PermissionResponse::from).collect(),
    ))
}

/// POST /api/members/:id/permissions/:campaign_id/toggle - Flip access
async fn toggle_permission(
    State(state): State<AppState>,
    Path((member_id, campaign_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<PermissionResponse>, RouteError> {
    let member = state
        .members()
        .get(member_id)
        .await
        .ok_or_else(|| not_found(format!("Member {} not found", member_id)))?;
    let campaign = state
        .campaigns()
        .get(campaign_id)
        .await
        .ok_or_else(|| not_found(format!("Campaign {} not found", campaign_id)))?;

    state
        .permissions()
        .ensure_exists(member.id, &member.name, campaign.id, &campaign.name)
        .await;
    // The record exists after the ensure step, so the toggle cannot miss.
    let has_access = state
        .permissions()
        .toggle(member.id, campaign.id)
        .await
        .unwrap_or(false);

    Ok(Json(PermissionResponse {
        member_id: member.id,
        member_name: member.name,
        campaign_id: campaign.id,
        campaign_name: campaign.name,
        has_access,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/api/members/{id}/permissions",
            get(list_member_permissions),
        )
        .route(
            "/api/members/{id}/permissions/{campaign_id}/toggle",
            post(toggle_permission),
        )
}
