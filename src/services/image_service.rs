use sea_orm::ActiveValue::NotSet;
use sea_orm::sea_query::NullOrdering;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, Order, QueryFilter, QueryOrder, Set};

use crate::{
    dto::image::{ImageDto, ImageList},
    entity::{
        ProductImages, Products,
        product_images::{ActiveModel as ImageActive, Column},
    },
    error::{AppError, AppResult},
    response::{ApiResponse, Meta},
    services::require_text,
    state::AppState,
};

pub async fn list_images(state: &AppState, product_id: i64) -> AppResult<ApiResponse<ImageList>> {
    if Products::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::NotFound);
    }

    let items = ProductImages::find()
        .filter(Column::ProductId.eq(product_id))
        .order_by_with_nulls(Column::SortOrder, Order::Asc, NullOrdering::Last)
        .order_by_asc(Column::Id)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(ImageDto::from)
        .collect();

    Ok(ApiResponse::success("OK", ImageList { items }, None))
}

/// Store a new image for a product. Any `id` or `productId` in the payload is
/// replaced: the id comes from storage, the product from the path.
pub async fn add_image(
    state: &AppState,
    product_id: i64,
    payload: ImageDto,
) -> AppResult<ApiResponse<ImageDto>> {
    require_text("url", &payload.url)?;

    if Products::find_by_id(product_id)
        .one(&state.orm)
        .await?
        .is_none()
    {
        return Err(AppError::BadRequest("product not found".to_string()));
    }

    let image = ImageActive {
        id: NotSet,
        url: Set(payload.url.trim().to_string()),
        sort_order: Set(payload.order),
        product_id: Set(Some(product_id)),
    }
    .insert(&state.orm)
    .await?;

    tracing::debug!(image_id = image.id, product_id, "image added");
    Ok(ApiResponse::success(
        "Image added",
        ImageDto::from(image),
        Some(Meta::empty()),
    ))
}

pub async fn delete_image(state: &AppState, id: i64) -> AppResult<ApiResponse<serde_json::Value>> {
    let result = ProductImages::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }
    Ok(ApiResponse::done("Deleted"))
}
