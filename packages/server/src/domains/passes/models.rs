use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A visitor badge, issued at check-in and shown at the door.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pass {
    pub id: Uuid,
    pub booking_id: Uuid,
    /// Short human-readable code printed on the badge.
    pub code: String,
    pub issued_by: Option<Uuid>,
    pub issued_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewPass {
    pub booking_id: Uuid,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issued_by: Option<Uuid>,
    pub issued_at: DateTime<Utc>,
}

impl NewPass {
    /// Derive a badge code: 8 hex chars, uppercased for legibility.
    pub fn generate_code() -> String {
        let id = Uuid::new_v4().simple().to_string();
        id[..8].to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_codes_are_short_and_uppercase() {
        let code = NewPass::generate_code();
        assert_eq!(code.len(), 8);
        assert_eq!(code, code.to_uppercase());
    }

    #[test]
    fn generated_codes_differ() {
        assert_ne!(NewPass::generate_code(), NewPass::generate_code());
    }
}
