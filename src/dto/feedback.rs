use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::Feedback;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFeedbackRequest {
    pub title: String,
    pub comment: String,
    pub user_id: i32,
    /// Defaults to the current date.
    pub date_created: Option<NaiveDate>,
}

/// Full replacement of a feedback record; every field is required.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFeedbackRequest {
    pub title: String,
    pub comment: String,
    pub date_created: NaiveDate,
    #[serde(alias = "isReaded")]
    pub is_read: bool,
    pub user_id: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct MarkReadRequest {
    pub read: bool,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct FeedbackList {
    #[schema(value_type = Vec<Feedback>)]
    pub items: Vec<Feedback>,
}
