pub mod health;

use axum::{
    response::Html,
    routing::{delete, get, post},
    Router,
};

use crate::chat::handlers;
use crate::state::AppState;

/// GET /
/// The chat surface: password form, spoiler selector, transcript, input box.
async fn chat_page() -> Html<&'static str> {
    Html(include_str!("../../assets/chat.html"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(chat_page))
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/spoiler-levels",
            get(handlers::handle_spoiler_levels),
        )
        .route("/api/v1/sessions", post(handlers::handle_create_session))
        .route("/api/v1/sessions/:id", delete(handlers::handle_end_session))
        .route(
            "/api/v1/sessions/:id/unlock",
            post(handlers::handle_unlock),
        )
        .route(
            "/api/v1/sessions/:id/transcript",
            get(handlers::handle_transcript),
        )
        .route("/api/v1/sessions/:id/chat", post(handlers::handle_chat))
        .with_state(state)
}
