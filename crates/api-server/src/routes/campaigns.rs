//! Campaign API endpoints
//!
//! Campaign CRUD plus API key regeneration. Deleting a campaign prunes the
//! permission matrix, keeping the cascade policy symmetric with member
//! deletion.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lm_core::campaign::{Campaign, CampaignStatus};

use super::{bad_request, core_error, not_found, RouteError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCampaignRequest {
    pub name: String,
    pub website: String,
}

#[derive(Debug, Deserialize)]
pub struct ListCampaignsQuery {
    /// "active", "inactive", or the "all" sentinel (default)
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampaignResponse {
    pub id: Uuid,
    pub name: String,
    pub website: String,
    pub api_key: String,
    pub created_at: String,
    pub status: CampaignStatus,
    pub leads: u32,
}

impl From<Campaign> for CampaignResponse {
    fn from(campaign: Campaign) -> Self {
        Self {
            id: campaign.id,
            name: campaign.name,
            website: campaign.website,
            api_key: campaign.api_key,
            created_at: campaign.created_at.to_rfc3339(),
            status: campaign.status,
            leads: campaign.leads,
        }
    }
}

/// GET /api/campaigns - List campaigns, optionally by status
async fn list_campaigns(
    State(state): State<AppState>,
    Query(query): Query<ListCampaignsQuery>,
) -> Result<Json<Vec<CampaignResponse>>, RouteError> {
    let campaigns = match query.status.as_deref() {
        None | Some("all") | Some("") => state.campaigns().list().await,
        Some("active") => state.campaigns().list_by_status(CampaignStatus::Active).await,
        Some("inactive") => {
            state
                .campaigns()
                .list_by_status(CampaignStatus::Inactive)
                .await
        }
        Some(other) => {
            return Err(bad_request(format!("Unknown status filter '{}'", other)));
        }
    };

    Ok(Json(
        campaigns.into_iter().map(CampaignResponse::from).collect(),
    ))
}

/// POST /api/campaigns - Create a campaign and generate its API key
async fn create_campaign(
    State(state): State<AppState>,
    Json(req): Json<CreateCampaignRequest>,
) -> Result<(StatusCode, Json<CampaignResponse>), RouteError> {
    let campaign = Campaign::new(req.name, req.website).map_err(core_error)?;
    let created = state.campaigns().create(campaign).await.map_err(core_error)?;
    Ok((StatusCode::CREATED, Json(CampaignResponse::from(created))))
}

/// GET /api/campaigns/:id - Get a single campaign
async fn get_campaign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CampaignResponse>, RouteError> {
    match state.campaigns().get(id).await {
        Some(campaign) => Ok(Json(CampaignResponse::from(campaign))),
        None => Err(not_found(format!("Campaign {} not found", id))),
    }
}

/// POST /api/campaigns/:id/regenerate-key - Replace the API key
async fn regenerate_api_key(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CampaignResponse>, RouteError> {
    let campaign = state
        .campaigns()
        .regenerate_api_key(id)
        .await
        .map_err(core_error)?;
    Ok(Json(CampaignResponse::from(campaign)))
}

/// DELETE /api/campaigns/:id - Delete a campaign and prune its permissions
async fn delete_campaign(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, RouteError> {
    if !state.campaigns().delete(id).await {
        return Err(not_found(format!("Campaign {} not found", id)));
    }

    let removed = state.permissions().remove_campaign_permissions(id).await;
    tracing::debug!(campaign_id = %id, removed, "pruned permission records");
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/campaigns", get(list_campaigns).post(create_campaign))
        .route(
            "/api/campaigns/{id}",
            get(get_campaign).delete(delete_campaign),
        )
        .route("/api/campaigns/{id}/regenerate-key", post(regenerate_api_key))
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::state::AppState;

    fn app() -> (axum::Router, AppState) {
        let state = AppState::new();
        (super::router().with_state(state.clone()), state)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    async fn create(app: &axum::Router, name: &str, website: &str) -> axum::response::Response {
        app.clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/campaigns")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        json!({ "name": name, "website": website }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn create_campaign_generates_api_key() {
        let (app, _state) = app();

        let response = create(&app, "Summer Promo", "https://example.com").await;
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = body_json(response).await;

        let api_key = created["apiKey"].as_str().unwrap();
        assert!(api_key.starts_with("camp_summerpromo_"));
        assert_eq!(api_key.len(), "camp_summerpromo_".len() + 8);
        assert_eq!(created["status"], "active");
        assert_eq!(created["leads"], 0);
    }

    #[tokio::test]
    async fn blank_input_is_rejected_and_list_unchanged() {
        let (app, state) = app();

        let response = create(&app, "", "https://x.com").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = create(&app, "Name", "").await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        assert!(state.campaigns().list().await.is_empty());
    }

    #[tokio::test]
    async fn regenerate_key_preserves_campaign_identity() {
        let (app, _state) = app();

        let created = body_json(create(&app, "Summer Promo", "https://example.com").await).await;
        let id = created["id"].as_str().unwrap().to_string();
        let old_key = created["apiKey"].as_str().unwrap().to_string();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/campaigns/{}/regenerate-key", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let regenerated = body_json(response).await;

        assert_eq!(regenerated["id"], id.as_str());
        assert_eq!(regenerated["createdAt"], created["createdAt"]);
        assert_ne!(regenerated["apiKey"], old_key.as_str());
    }

    #[tokio::test]
    async fn status_filter_and_all_sentinel() {
        let (app, state) = app();
        state.seed_demo_data().await.unwrap();

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/campaigns?status=all")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let all = body_json(response).await;
        assert_eq!(all.as_array().unwrap().len(), 3);

        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/campaigns?status=inactive")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let inactive = body_json(response).await;
        assert_eq!(inactive.as_array().unwrap().len(), 1);
        assert_eq!(inactive[0]["name"], "Holiday Special");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/campaigns?status=archived")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn delete_campaign_prunes_permissions() {
        let (app, state) = app();
        state.seed_demo_data().await.unwrap();

        let campaigns = state.campaigns().list().await;
        let summer = campaigns
            .iter()
            .find(|c| c.name == "Summer Promotion")
            .unwrap();
        let before = state.permissions().len().await;

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/campaigns/{}", summer.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        // Two seed permissions referenced the summer campaign.
        assert_eq!(state.permissions().len().await, before - 2);
        assert!(state.campaigns().get(summer.id).await.is_none());
    }
}
