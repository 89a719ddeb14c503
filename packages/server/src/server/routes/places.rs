use axum::extract::{Extension, State};
use axum::Json;

use crate::common::auth::{Actor, Capability};
use crate::common::envelope::Envelope;
use crate::common::error::ApiResult;
use crate::domains::places::Place;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

use super::require_user;

pub async fn list_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
) -> ApiResult<Vec<Place>> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ViewPlaces).check()?;

    let places = state.data.list_places().await?;
    Ok(Json(Envelope::ok("Places loaded", places)))
}
