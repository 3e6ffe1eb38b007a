use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get},
};

use crate::{
    dto::image::{ImageDto, ImageList},
    error::AppResult,
    response::ApiResponse,
    services::image_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/products/{product_id}/images",
            get(list_images).post(add_image),
        )
        .route("/images/{id}", delete(delete_image))
}

#[utoipa::path(
    get,
    path = "/api/products/{product_id}/images",
    params(("product_id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Images of a product in display order", body = ApiResponse<ImageList>),
        (status = 404, description = "Product not found"),
    ),
    tag = "Images"
)]
pub async fn list_images(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
) -> AppResult<Json<ApiResponse<ImageList>>> {
    let resp = image_service::list_images(&state, product_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/products/{product_id}/images",
    params(("product_id" = i64, Path, description = "Product ID")),
    request_body = ImageDto,
    responses(
        (status = 200, description = "Image stored", body = ApiResponse<ImageDto>),
        (status = 400, description = "Bad request"),
    ),
    tag = "Images"
)]
pub async fn add_image(
    State(state): State<AppState>,
    Path(product_id): Path<i64>,
    Json(payload): Json<ImageDto>,
) -> AppResult<Json<ApiResponse<ImageDto>>> {
    let resp = image_service::add_image(&state, product_id, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/images/{id}",
    params(("id" = i64, Path, description = "Image ID")),
    responses(
        (status = 200, description = "OK", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Image not found"),
    ),
    tag = "Images"
)]
pub async fn delete_image(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let resp = image_service::delete_image(&state, id).await?;
    Ok(Json(resp))
}
