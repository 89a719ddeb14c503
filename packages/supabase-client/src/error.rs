use thiserror::Error;

pub type Result<T> = std::result::Result<T, SupabaseError>;

#[derive(Debug, Error)]
pub enum SupabaseError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Supabase API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode Supabase response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl SupabaseError {
    /// True when the upstream rejected the credentials or token.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, SupabaseError::Api { status, .. } if *status == 401 || *status == 403)
    }
}
