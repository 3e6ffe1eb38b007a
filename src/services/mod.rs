pub mod cart_service;
pub mod feedback_service;
pub mod image_service;

use crate::error::{AppError, AppResult};

pub(crate) fn require_text(field: &str, value: &str) -> AppResult<()> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("{field} must not be empty")));
    }
    Ok(())
}
