use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, CartItemDto, CartList},
        feedback::{CreateFeedbackRequest, FeedbackList, MarkReadRequest, UpdateFeedbackRequest},
        image::{ImageDto, ImageList},
    },
    models::{Feedback, Product, User},
    response::{ApiResponse, Meta},
    routes::{cart, feedback, health, images, params},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::readiness,
        feedback::list_feedback,
        feedback::get_feedback,
        feedback::create_feedback,
        feedback::update_feedback,
        feedback::mark_read,
        feedback::delete_feedback,
        cart::cart_list,
        cart::add_to_cart,
        cart::remove_from_cart,
        images::list_images,
        images::add_image,
        images::delete_image
    ),
    components(
        schemas(
            Product,
            User,
            Feedback,
            CartItemDto,
            CartList,
            AddToCartRequest,
            ImageDto,
            ImageList,
            CreateFeedbackRequest,
            UpdateFeedbackRequest,
            MarkReadRequest,
            FeedbackList,
            params::Pagination,
            params::FeedbackQuery,
            health::HealthData,
            Meta,
            ApiResponse<Feedback>,
            ApiResponse<FeedbackList>,
            ApiResponse<CartItemDto>,
            ApiResponse<CartList>,
            ApiResponse<ImageDto>,
            ApiResponse<ImageList>
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Feedback", description = "Customer feedback endpoints"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Images", description = "Product image endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
