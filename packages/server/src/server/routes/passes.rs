use axum::extract::{Extension, State};
use axum::Json;

use crate::common::auth::{Actor, Capability};
use crate::common::envelope::Envelope;
use crate::common::error::ApiResult;
use crate::domains::passes::Pass;
use crate::server::app::AppState;
use crate::server::middleware::AuthUser;

use super::require_user;

pub async fn list_handler(
    State(state): State<AppState>,
    user: Option<Extension<AuthUser>>,
) -> ApiResult<Vec<Pass>> {
    let user = require_user(user)?;
    Actor::new(&user.identity).can(Capability::ViewPasses).check()?;

    let passes = state.data.list_passes().await?;
    Ok(Json(Envelope::ok("Passes loaded", passes)))
}
