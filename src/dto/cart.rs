use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Product, User};

/// One cart line as exchanged over the API, with product and user inlined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartItemDto {
    #[serde(alias = "idCart")]
    pub cart_id: i32,
    pub quantity: i32,
    pub product: Product,
    pub user: User,
}

impl CartItemDto {
    pub fn new(cart_id: i32, quantity: i32, product: Product, user: User) -> Self {
        Self {
            cart_id,
            quantity,
            product,
            user,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CartList {
    #[schema(value_type = Vec<CartItemDto>)]
    pub items: Vec<CartItemDto>,
}
