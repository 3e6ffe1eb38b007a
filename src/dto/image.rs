use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::product_images;

/// An image belonging to a product.
///
/// Every field but `url` is optional: `id` is absent until stored, and
/// `product_id` is a bare id rather than a loaded product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImageDto {
    pub id: Option<i64>,
    pub url: String,
    pub order: Option<i64>,
    pub product_id: Option<i64>,
}

impl ImageDto {
    pub fn new(
        id: Option<i64>,
        url: impl Into<String>,
        order: Option<i64>,
        product_id: Option<i64>,
    ) -> Self {
        Self {
            id,
            url: url.into(),
            order,
            product_id,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

impl From<product_images::Model> for ImageDto {
    fn from(model: product_images::Model) -> Self {
        Self {
            id: Some(model.id),
            url: model.url,
            order: model.sort_order,
            product_id: model.product_id,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct ImageList {
    #[schema(value_type = Vec<ImageDto>)]
    pub items: Vec<ImageDto>,
}
