use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: Uuid,
    pub author_profile_id: Option<Uuid>,
    pub message: String,
    /// 1-5 when provided.
    pub rating: Option<i16>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFeedback {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<i16>,
}
