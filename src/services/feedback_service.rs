use chrono::Utc;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, TransactionTrait,
};

use crate::{
    dto::feedback::{CreateFeedbackRequest, FeedbackList, UpdateFeedbackRequest},
    entity::{Feedbacks, Users, feedback::Column},
    error::{AppError, AppResult},
    models::{Feedback, User},
    repository::{self, OrmFeedbackStore},
    response::{ApiResponse, Meta},
    routes::params::FeedbackQuery,
    services::require_text,
    state::AppState,
};

pub async fn list_feedback(
    state: &AppState,
    query: FeedbackQuery,
) -> AppResult<ApiResponse<FeedbackList>> {
    let (page, limit, offset) = query.pagination().normalize();
    let mut condition = Condition::all();
    if let Some(read) = query.is_read {
        condition = condition.add(Column::IsRead.eq(read));
    }

    let finder = Feedbacks::find()
        .filter(condition)
        .order_by_desc(Column::DateCreated)
        .order_by_desc(Column::Id);

    let total = finder.clone().count(&state.orm).await? as i64;

    let items = finder
        .find_also_related(Users)
        .limit(limit as u64)
        .offset(offset as u64)
        .all(&state.orm)
        .await?
        .into_iter()
        .map(|(row, user)| Feedback::from_row(row, user))
        .collect();

    let meta = Meta::new(page, limit, total);
    Ok(ApiResponse::success("OK", FeedbackList { items }, Some(meta)))
}

pub async fn get_feedback(state: &AppState, id: i32) -> AppResult<ApiResponse<Feedback>> {
    let store = OrmFeedbackStore::new(&state.orm);
    let feedback = repository::find(&store, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(ApiResponse::success("Feedback", feedback, None))
}

pub async fn create_feedback(
    state: &AppState,
    payload: CreateFeedbackRequest,
) -> AppResult<ApiResponse<Feedback>> {
    require_text("title", &payload.title)?;
    require_text("comment", &payload.comment)?;

    let txn = state.orm.begin().await?;
    let user = load_user(&txn, payload.user_id).await?;
    let feedback = Feedback::builder()
        .title(payload.title)
        .comment(payload.comment)
        .date_created(
            payload
                .date_created
                .unwrap_or_else(|| Utc::now().date_naive()),
        )
        .user(user)
        .build();

    let saved = repository::insert(&OrmFeedbackStore::new(&txn), feedback).await?;
    txn.commit().await?;

    tracing::info!(feedback_id = ?saved.id, user_id = payload.user_id, "feedback created");
    Ok(ApiResponse::success(
        "Feedback created",
        saved,
        Some(Meta::empty()),
    ))
}

pub async fn update_feedback(
    state: &AppState,
    id: i32,
    payload: UpdateFeedbackRequest,
) -> AppResult<ApiResponse<Feedback>> {
    require_text("title", &payload.title)?;
    require_text("comment", &payload.comment)?;

    let txn = state.orm.begin().await?;
    let user = load_user(&txn, payload.user_id).await?;
    let feedback = Feedback::new(
        Some(id),
        payload.title,
        payload.comment,
        payload.date_created,
        payload.is_read,
        Some(user),
    );

    let saved = repository::update(&OrmFeedbackStore::new(&txn), feedback).await?;
    txn.commit().await?;

    Ok(ApiResponse::success("Updated", saved, Some(Meta::empty())))
}

pub async fn mark_read(state: &AppState, id: i32, read: bool) -> AppResult<ApiResponse<Feedback>> {
    let txn = state.orm.begin().await?;
    let store = OrmFeedbackStore::new(&txn);

    let mut feedback = repository::find(&store, id)
        .await?
        .ok_or(AppError::NotFound)?;
    if feedback.is_read == read {
        return Ok(ApiResponse::success("Unchanged", feedback, Some(Meta::empty())));
    }
    feedback.is_read = read;

    let saved = repository::update(&store, feedback).await?;
    txn.commit().await?;

    tracing::debug!(feedback_id = id, read, "feedback read flag changed");
    Ok(ApiResponse::success("Updated", saved, Some(Meta::empty())))
}

pub async fn delete_feedback(
    state: &AppState,
    id: i32,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let txn = state.orm.begin().await?;
    let removed = repository::delete(&OrmFeedbackStore::new(&txn), id).await?;
    txn.commit().await?;

    tracing::info!(
        feedback_id = id,
        user_id = ?removed.user_id(),
        "feedback deleted"
    );
    Ok(ApiResponse::done("Deleted"))
}

async fn load_user<C: ConnectionTrait>(conn: &C, user_id: i32) -> AppResult<User> {
    Users::find_by_id(user_id)
        .one(conn)
        .await?
        .map(User::from)
        .ok_or_else(|| AppError::BadRequest("user not found".to_string()))
}
