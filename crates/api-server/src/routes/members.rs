//! Team member API endpoints
//!
//! RESTful CRUD for the member registry. Deleting a member cascades into
//! the permission matrix; both writes are synchronous in-memory mutations,
//! so the cascade cannot partially fail.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use lm_core::member::{Member, MemberRole, MemberStatus};

use super::{core_error, not_found, RouteError};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub role: MemberRole,
    #[serde(default)]
    pub status: MemberStatus,
}

/// Wholesale replacement of a member record
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMemberRequest {
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub status: MemberStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    pub status: MemberStatus,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id,
            name: member.name,
            email: member.email,
            role: member.role,
            status: member.status,
        }
    }
}

/// GET /api/members - List all members
async fn list_members(State(state): State<AppState>) -> Json<Vec<MemberResponse>> {
    let members = state.members().list().await;
    Json(members.into_iter().map(MemberResponse::from).collect())
}

/// POST /api/members - Add a member
async fn create_member(
    State(state): State<AppState>,
    Json(req): Json<CreateMemberRequest>,
) -> Result<(StatusCode, Json<MemberResponse>), RouteError> {
    let member = Member::new(req.name, req.email)
        .with_role(req.role)
        .with_status(req.status);
    let created = state.members().create(member).await.map_err(core_error)?;
    Ok((StatusCode::CREATED, Json(MemberResponse::from(created))))
}

/// GET /api/members/:id - Get a single member
async fn get_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MemberResponse>, RouteError> {
    match state.members().get(id).await {
        Some(member) => Ok(Json(MemberResponse::from(member))),
        None => Err(not_found(format!("Member {} not found", id))),
    }
}

/// PUT /api/members/:id - Replace a member record
async fn update_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMemberRequest>,
) -> Result<Json<MemberResponse>, RouteError> {
    let member = Member {
        id,
        name: req.name,
        email: req.email,
        role: req.role,
        status: req.status,
    };
    let updated = state.members().update(member).await.map_err(core_error)?;
    Ok(Json(MemberResponse::from(updated)))
}

/// DELETE /api/members/:id - Delete a member and its permissions
async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, RouteError> {
    if !state.members().delete(id).await {
        return Err(not_found(format!("Member {} not found", id)));
    }

    let removed = state.permissions().remove_member_permissions(id).await;
    tracing::debug!(member_id = %id, removed, "cascaded permission removal");
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/members", get(list_members).post(create_member))
        .route(
            "/api/members/{id}",
            get(get_member).put(update_member).delete(delete_member),
        )
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

    #[tokio::test]
    async fn create_list_and_delete_member() {
        let (app, _state) = app();

        let create_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/members")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        json!({
                            "name": "John Doe",
                            "email": "john@example.com",
                            "role": "Admin"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(create_response.status(), StatusCode::CREATED);
        let created = body_json(create_response).await;
        assert_eq!(created["role"], "Admin");
        assert_eq!(created["status"], "Active");
        let id = created["id"].as_str().unwrap().to_string();

        let list_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/members")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let listed = body_json(list_response).await;
        assert_eq!(listed.as_array().unwrap().len(), 1);

        let delete_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/members/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(delete_response.status(), StatusCode::NO_CONTENT);

        let get_response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/api/members/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(get_response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn update_replaces_record_wholesale() {
        let (app, _state) = app();

        let create_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/members")
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        json!({
                            "name": "Jane Smith",
                            "email": "jane@example.com"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        let created = body_json(create_response).await;
        let id = created["id"].as_str().unwrap().to_string();

        let update_response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/api/members/{}", id))
                    .header("Content-Type", "application/json")
                    .body(Body::from(
                        json!({
                            "name": "Jane Smith",
                            "email": "jane.smith@example.com",
                            "role": "Manager",
                            "status": "Inactive"
                        })
                        .to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(update_response.status(), StatusCode::OK);
        let updated = body_json(update_response).await;
        assert_eq!(updated["email"], "jane.smith@example.com");
        assert_eq!(updated["role"], "Manager");
        assert_eq!(updated["status"], "Inactive");
    }

    #[tokio::test]
    async fn delete_member_cascades_permissions() {
        let (app, state) = app();
        state.seed_demo_data().await.unwrap();

        let members = state.members().list().await;
        let john = members.iter().find(|m| m.name == "John Doe").unwrap();
        let jane = members.iter().find(|m| m.name == "Jane Smith").unwrap();
        assert_eq!(state.permissions().list_for_member(john.id).await.len(), 2);

        let delete_response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/members/{}", john.id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(delete_response.status(), StatusCode::NO_CONTENT);

        assert!(state.permissions().list_for_member(john.id).await.is_empty());
        // Other members' records are untouched.
        assert_eq!(state.permissions().list_for_member(jane.id).await.len(), 1);
    }
}
