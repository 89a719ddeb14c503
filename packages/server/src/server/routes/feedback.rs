use axum::extract::{Extension, State};
use axum::Json;

use crate::common::auth::{Actor, Capability};
use crate::common::envelope::Envelope;
use crate::common::error::ApiResult;
use crate::domains::feedback::{actions, Feedback, NewFeedback};
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

use super::require_user;

pub async fn list_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
) -> ApiResult<Vec<Feedback>> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ReviewFeedback).check()?;

    let entries = actions::list(state.data.as_ref()).await?;
    Ok(Json(Envelope::ok("Feedback loaded", entries)))
}

pub async fn submit_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
    Json(new): Json<NewFeedback>,
) -> ApiResult<Feedback> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::SubmitFeedback).check()?;

    let entry = actions::submit(state.data.as_ref(), new, Some(user.identity.id)).await?;
    Ok(Json(Envelope::ok("Feedback submitted", entry)))
}
