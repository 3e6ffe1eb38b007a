use axum::{
    Json, Router,
    extract::{Path, Query, State},
    routing::{get, patch},
};

use crate::{
    dto::feedback::{CreateFeedbackRequest, FeedbackList, MarkReadRequest, UpdateFeedbackRequest},
    error::AppResult,
    models::Feedback,
    response::ApiResponse,
    routes::params::FeedbackQuery,
    services::feedback_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_feedback).post(create_feedback))
        .route(
            "/{id}",
            get(get_feedback).put(update_feedback).delete(delete_feedback),
        )
        .route("/{id}/read", patch(mark_read))
}

#[utoipa::path(
    get,
    path = "/api/feedback",
    params(
        ("page" = Option<i64>, Query, description = "Page number, default 1"),
        ("per_page" = Option<i64>, Query, description = "Items per page, default 20"),
        ("is_read" = Option<bool>, Query, description = "Filter by read flag")
    ),
    responses(
        (status = 200, description = "List feedback, newest first", body = ApiResponse<FeedbackList>)
    ),
    tag = "Feedback"
)]
pub async fn list_feedback(
    State(state): State<AppState>,
    Query(query): Query<FeedbackQuery>,
) -> AppResult<Json<ApiResponse<FeedbackList>>> {
    let resp = feedback_service::list_feedback(&state, query).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/feedback/{id}",
    params(("id" = i32, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Feedback detail", body = ApiResponse<Feedback>),
        (status = 404, description = "Feedback not found"),
    ),
    tag = "Feedback"
)]
pub async fn get_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<Feedback>>> {
    let resp = feedback_service::get_feedback(&state, id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/feedback",
    request_body = CreateFeedbackRequest,
    responses(
        (status = 200, description = "Feedback submitted", body = ApiResponse<Feedback>),
        (status = 400, description = "Bad request"),
    ),
    tag = "Feedback"
)]
pub async fn create_feedback(
    State(state): State<AppState>,
    Json(payload): Json<CreateFeedbackRequest>,
) -> AppResult<Json<ApiResponse<Feedback>>> {
    let resp = feedback_service::create_feedback(&state, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    put,
    path = "/api/feedback/{id}",
    params(("id" = i32, Path, description = "Feedback ID")),
    request_body = UpdateFeedbackRequest,
    responses(
        (status = 200, description = "Feedback replaced", body = ApiResponse<Feedback>),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Feedback not found"),
    ),
    tag = "Feedback"
)]
pub async fn update_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateFeedbackRequest>,
) -> AppResult<Json<ApiResponse<Feedback>>> {
    let resp = feedback_service::update_feedback(&state, id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    patch,
    path = "/api/feedback/{id}/read",
    params(("id" = i32, Path, description = "Feedback ID")),
    request_body = MarkReadRequest,
    responses(
        (status = 200, description = "Read flag updated", body = ApiResponse<Feedback>),
        (status = 404, description = "Feedback not found"),
    ),
    tag = "Feedback"
)]
pub async fn mark_read(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MarkReadRequest>,
) -> AppResult<Json<ApiResponse<Feedback>>> {
    let resp = feedback_service::mark_read(&state, id, payload.read).await?;
    Ok(Json(resp))
}

/// Deleting a feedback also deletes the user who submitted it.
#[utoipa::path(
    delete,
    path = "/api/feedback/{id}",
    params(("id" = i32, Path, description = "Feedback ID")),
    responses(
        (status = 200, description = "Feedback and its user deleted", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Feedback not found"),
    ),
    tag = "Feedback"
)]
pub async fn delete_feedback(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = feedback_service::delete_feedback(&state, id).await?;
    Ok(Json(resp))
}
