use uuid::Uuid;

use crate::common::error::ApiError;
use crate::domains::feedback::models::{Feedback, NewFeedback};
use crate::domains::gateway::DataGateway;

pub async fn list(data: &dyn DataGateway) -> Result<Vec<Feedback>, ApiError> {
    Ok(data.list_feedback().await?)
}

pub async fn submit(
    data: &dyn DataGateway,
    new: NewFeedback,
    author: Option<Uuid>,
) -> Result<Feedback, ApiError> {
    if new.message.trim().is_empty() {
        return Err(ApiError::Validation(
            "Feedback message is required".to_string(),
        ));
    }
    if let Some(rating) = new.rating {
        if !(1..=5).contains(&rating) {
            return Err(ApiError::Validation(
                "Rating must be between 1 and 5".to_string(),
            ));
        }
    }

    Ok(data.insert_feedback(&new, author).await?)
}
