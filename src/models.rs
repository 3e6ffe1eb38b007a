use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entity::{feedback, products, users};

/// Product snapshot embedded in transfer shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
}

impl From<products::Model> for Product {
    fn from(model: products::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            price: model.price,
        }
    }
}

/// User snapshot embedded in transfer shapes and linked from feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub full_name: Option<String>,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            username: model.username,
            email: model.email,
            full_name: model.full_name,
        }
    }
}

/// Feedback submitted by a user.
///
/// `id` stays `None` until the record is first inserted. `user` is optional at
/// the type level; the repository refuses to write a record without it.
///
/// Equality is structural over every field, the linked user included. Once both
/// sides are persisted, compare with [`Feedback::same_identity`] instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: Option<i32>,
    pub title: String,
    pub comment: String,
    pub date_created: NaiveDate,
    #[serde(alias = "isReaded")]
    pub is_read: bool,
    pub user: Option<User>,
}

impl Feedback {
    pub fn new(
        id: Option<i32>,
        title: impl Into<String>,
        comment: impl Into<String>,
        date_created: NaiveDate,
        is_read: bool,
        user: Option<User>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            comment: comment.into(),
            date_created,
            is_read,
            user,
        }
    }

    pub fn builder() -> FeedbackBuilder {
        FeedbackBuilder::default()
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn user_id(&self) -> Option<i32> {
        self.user.as_ref().map(|u| u.id)
    }

    /// True when both records are persisted and share an id.
    pub fn same_identity(&self, other: &Feedback) -> bool {
        matches!((self.id, other.id), (Some(a), Some(b)) if a == b)
    }

    pub(crate) fn from_row(model: feedback::Model, user: Option<users::Model>) -> Self {
        Self {
            id: Some(model.id),
            title: model.title,
            comment: model.comment,
            date_created: model.date_created,
            is_read: model.is_read,
            user: user.map(User::from),
        }
    }
}

/// Incremental construction of a [`Feedback`]; unset fields take their defaults.
#[derive(Debug, Clone, Default)]
pub struct FeedbackBuilder {
    id: Option<i32>,
    title: Option<String>,
    comment: Option<String>,
    date_created: Option<NaiveDate>,
    is_read: Option<bool>,
    user: Option<User>,
}

impl FeedbackBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = Some(id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn date_created(mut self, date: NaiveDate) -> Self {
        self.date_created = Some(date);
        self
    }

    pub fn is_read(mut self, read: bool) -> Self {
        self.is_read = Some(read);
        self
    }

    pub fn user(mut self, user: User) -> Self {
        self.user = Some(user);
        self
    }

    pub fn build(self) -> Feedback {
        Feedback {
            id: self.id,
            title: self.title.unwrap_or_default(),
            comment: self.comment.unwrap_or_default(),
            date_created: self.date_created.unwrap_or_default(),
            is_read: self.is_read.unwrap_or(false),
            user: self.user,
        }
    }
}
