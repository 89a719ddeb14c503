pub mod auth;
pub mod envelope;
pub mod error;

pub use envelope::Envelope;
pub use error::{ApiError, ApiResult};
