//! Greeting route.

use axum::{Json, Router, extract::State, routing::get};

use crate::{dto::message::Greeting, services::message_service, state::SharedState};

#[utoipa::path(
    get,
    path = "/api/message",
    tag = "message",
    responses((status = 200, description = "Backend greeting", body = Greeting))
)]
/// Return the static greeting together with the configured environment.
pub async fn message(State(state): State<SharedState>) -> Json<Greeting> {
    Json(message_service::greeting(&state))
}

/// Configure the greeting routes subtree.
pub fn router() -> Router<SharedState> {
    Router::<SharedState>::new().route("/api/message", get(message))
}
