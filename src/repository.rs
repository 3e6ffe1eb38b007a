//! Feedback persistence.
//!
//! [`FeedbackStore`] exposes row-level primitives. The free functions on top
//! of it implement the entity operations and apply the cascade rules declared
//! in [`mapping::FEEDBACK`](crate::mapping::FEEDBACK).

use chrono::NaiveDate;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, ConnectionTrait, DbErr, EntityTrait, IntoActiveModel, SqlErr};

use crate::{
    entity::{
        Feedbacks, Users,
        feedback::{self, ActiveModel as FeedbackActive},
        users::{self, ActiveModel as UserActive},
    },
    error::{AppError, AppResult},
    mapping::{CascadeOp, FEEDBACK, FEEDBACK_USER, KeyStrategy},
    models::{Feedback, User},
};

/// Values for a feedback row about to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewFeedbackRow {
    pub id: Option<i32>,
    pub title: String,
    pub comment: String,
    pub date_created: NaiveDate,
    pub is_read: bool,
    pub user_id: i32,
}

pub trait FeedbackStore: Sync {
    fn find_row(
        &self,
        id: i32,
    ) -> impl Future<Output = AppResult<Option<feedback::Model>>> + Send;

    fn insert_row(
        &self,
        row: NewFeedbackRow,
    ) -> impl Future<Output = AppResult<feedback::Model>> + Send;

    fn update_row(
        &self,
        row: feedback::Model,
    ) -> impl Future<Output = AppResult<feedback::Model>> + Send;

    /// Returns the number of rows removed.
    fn delete_row(&self, id: i32) -> impl Future<Output = AppResult<u64>> + Send;

    fn find_user(
        &self,
        id: i32,
    ) -> impl Future<Output = AppResult<Option<users::Model>>> + Send;

    /// Overwrites the user when its id is known. Otherwise inserts it and lets
    /// storage assign the id; the returned row carries that id.
    fn save_user(&self, user: &User) -> impl Future<Output = AppResult<users::Model>> + Send;

    fn delete_user(&self, id: i32) -> impl Future<Output = AppResult<u64>> + Send;
}

/// Insert a new feedback record and return it with its assigned id.
pub async fn insert<S: FeedbackStore>(store: &S, feedback: Feedback) -> AppResult<Feedback> {
    let user = required_user(&feedback)?;
    let user_row = link_user(store, user, CascadeOp::Persist).await?;

    let id = match FEEDBACK.key_strategy {
        KeyStrategy::Identity => None,
        KeyStrategy::Assigned => Some(feedback.id.ok_or_else(|| {
            AppError::Constraint(format!(
                "{}.{} must be assigned",
                FEEDBACK.table, FEEDBACK.key_column
            ))
        })?),
    };

    let row = store
        .insert_row(NewFeedbackRow {
            id,
            title: feedback.title,
            comment: feedback.comment,
            date_created: feedback.date_created,
            is_read: feedback.is_read,
            user_id: user_row.id,
        })
        .await?;

    tracing::debug!(feedback_id = row.id, user_id = row.user_id, "feedback inserted");
    Ok(Feedback::from_row(row, Some(user_row)))
}

/// Replace every field of a stored feedback record.
pub async fn update<S: FeedbackStore>(store: &S, feedback: Feedback) -> AppResult<Feedback> {
    let id = feedback.id.ok_or(AppError::NotFound)?;
    if store.find_row(id).await?.is_none() {
        return Err(AppError::NotFound);
    }

    let user = required_user(&feedback)?;
    let user_row = link_user(store, user, CascadeOp::Merge).await?;

    let row = store
        .update_row(feedback::Model {
            id,
            title: feedback.title,
            comment: feedback.comment,
            date_created: feedback.date_created,
            is_read: feedback.is_read,
            user_id: user_row.id,
        })
        .await?;

    Ok(Feedback::from_row(row, Some(user_row)))
}

/// Delete a feedback record by id and return what was removed.
///
/// The user relation cascades removal, so the linked user is deleted as well.
pub async fn delete<S: FeedbackStore>(store: &S, id: i32) -> AppResult<Feedback> {
    let row = store.find_row(id).await?.ok_or(AppError::NotFound)?;
    let user_row = store.find_user(row.user_id).await?;
    let user_id = row.user_id;

    if store.delete_row(id).await? == 0 {
        return Err(AppError::NotFound);
    }

    if FEEDBACK_USER.cascades(CascadeOp::Remove) {
        tracing::warn!(feedback_id = id, user_id, "cascading feedback removal to its user");
        store.delete_user(user_id).await?;
    }

    Ok(Feedback::from_row(row, user_row))
}

pub async fn find<S: FeedbackStore>(store: &S, id: i32) -> AppResult<Option<Feedback>> {
    let Some(row) = store.find_row(id).await? else {
        return Ok(None);
    };
    let user = store.find_user(row.user_id).await?;
    Ok(Some(Feedback::from_row(row, user)))
}

fn required_user(feedback: &Feedback) -> AppResult<&User> {
    feedback.user.as_ref().ok_or_else(|| {
        AppError::Constraint(format!(
            "{}.{} must not be null",
            FEEDBACK.table, FEEDBACK_USER.join_column
        ))
    })
}

async fn link_user<S: FeedbackStore>(
    store: &S,
    user: &User,
    op: CascadeOp,
) -> AppResult<users::Model> {
    if FEEDBACK_USER.cascades(op) {
        return store.save_user(user).await;
    }
    store.find_user(user.id).await?.ok_or_else(|| {
        AppError::Constraint(format!(
            "{} {} does not exist",
            FEEDBACK_USER.target_table, user.id
        ))
    })
}

/// [`FeedbackStore`] backed by a SeaORM connection or transaction.
pub struct OrmFeedbackStore<'a, C> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait + Sync> OrmFeedbackStore<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }
}

impl<C: ConnectionTrait + Sync> FeedbackStore for OrmFeedbackStore<'_, C> {
    async fn find_row(&self, id: i32) -> AppResult<Option<feedback::Model>> {
        Ok(Feedbacks::find_by_id(id).one(self.conn).await?)
    }

    async fn insert_row(&self, row: NewFeedbackRow) -> AppResult<feedback::Model> {
        let active = FeedbackActive {
            id: row.id.map_or(NotSet, Set),
            title: Set(row.title),
            comment: Set(row.comment),
            date_created: Set(row.date_created),
            is_read: Set(row.is_read),
            user_id: Set(row.user_id),
        };
        active.insert(self.conn).await.map_err(constraint_error)
    }

    async fn update_row(&self, row: feedback::Model) -> AppResult<feedback::Model> {
        let active = row.into_active_model().reset_all();
        match active.update(self.conn).await {
            Ok(model) => Ok(model),
            Err(DbErr::RecordNotUpdated) => Err(AppError::NotFound),
            Err(err) => Err(constraint_error(err)),
        }
    }

    async fn delete_row(&self, id: i32) -> AppResult<u64> {
        Ok(Feedbacks::delete_by_id(id).exec(self.conn).await?.rows_affected)
    }

    async fn find_user(&self, id: i32) -> AppResult<Option<users::Model>> {
        Ok(Users::find_by_id(id).one(self.conn).await?)
    }

    async fn save_user(&self, user: &User) -> AppResult<users::Model> {
        let existing = Users::find_by_id(user.id).one(self.conn).await?;
        let model = match existing {
            Some(current) => {
                let mut active: UserActive = current.into();
                active.username = Set(user.username.clone());
                active.email = Set(user.email.clone());
                active.full_name = Set(user.full_name.clone());
                active.update(self.conn).await.map_err(constraint_error)?
            }
            None => {
                UserActive {
                    id: NotSet,
                    username: Set(user.username.clone()),
                    email: Set(user.email.clone()),
                    full_name: Set(user.full_name.clone()),
                }
                .insert(self.conn)
                .await
                .map_err(constraint_error)?
            }
        };
        Ok(model)
    }

    async fn delete_user(&self, id: i32) -> AppResult<u64> {
        Ok(Users::delete_by_id(id).exec(self.conn).await?.rows_affected)
    }
}

/// Unique and foreign-key violations become [`AppError::Constraint`].
fn constraint_error(err: DbErr) -> AppError {
    match err.sql_err() {
        Some(
            SqlErr::UniqueConstraintViolation(detail)
            | SqlErr::ForeignKeyConstraintViolation(detail),
        ) => AppError::Constraint(detail),
        _ => AppError::OrmError(err),
    }
}
