use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::chat::prompts::assemble_master_prompt;
use crate::chat::session::{Message, Session};
use crate::chat::spoiler::SpoilerLevel;
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub unlocked: bool,
    pub spoiler_level: SpoilerLevel,
}

impl From<&Session> for SessionResponse {
    fn from(session: &Session) -> Self {
        SessionResponse {
            session_id: session.id,
            unlocked: session.unlocked,
            spoiler_level: session.spoiler_level,
        }
    }
}

/// GET /api/v1/spoiler-levels
/// The fixed, ordered list of book titles for the selector.
pub async fn handle_spoiler_levels() -> Json<Vec<&'static str>> {
    Json(SpoilerLevel::ALL.iter().map(|l| l.title()).collect())
}

/// POST /api/v1/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.sessions.create().await;
    info!("Session {} created", session.id);
    Json(SessionResponse::from(&session))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_end_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(id).await {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    info!("Session {id} ended");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Deserialize)]
pub struct UnlockRequest {
    pub password: String,
}

/// POST /api/v1/sessions/:id/unlock
///
/// Plaintext equality against the configured shared password. A mismatch is
/// re-promptable; the unlock flag, once set, holds until session end.
pub async fn handle_unlock(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UnlockRequest>,
) -> Result<StatusCode, AppError> {
    if req.password != state.config.app_password {
        return Err(AppError::Unauthorized);
    }

    // The store reports whether the session still exists, so one write
    // covers both the existence check and the unlock.
    if !state.sessions.unlock(id).await {
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }
    info!("Session {id} unlocked");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
pub struct TranscriptResponse {
    pub session_id: Uuid,
    pub unlocked: bool,
    pub spoiler_level: SpoilerLevel,
    pub messages: Vec<Message>,
}

/// GET /api/v1/sessions/:id/transcript
/// Replays the full ordered message list for rendering.
pub async fn handle_transcript(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<TranscriptResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    Ok(Json(TranscriptResponse {
        session_id: session.id,
        unlocked: session.unlocked,
        spoiler_level: session.spoiler_level,
        messages: session.messages,
    }))
}

#[derive(Deserialize)]
pub struct ChatRequest {
    pub question: String,
    pub spoiler_level: SpoilerLevel,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
    pub spoiler_level: SpoilerLevel,
}

/// POST /api/v1/sessions/:id/chat
///
/// One blocking turn: assemble the master prompt, make a single model call,
/// then append both sides of the exchange. On model failure nothing is
/// appended — the transcript only ever holds completed turns.
pub async fn handle_chat(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    let session = state
        .sessions
        .get(id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

    if !session.unlocked {
        return Err(AppError::Locked);
    }

    if req.question.trim().is_empty() {
        return Err(AppError::Validation("Question must not be empty".into()));
    }

    let prompt = assemble_master_prompt(&req.question, req.spoiler_level);
    debug!(
        "Session {id}: chat turn at level '{}', prompt {} chars",
        req.spoiler_level,
        prompt.len()
    );

    // The store lock is not held across this await.
    let reply = state
        .llm
        .generate(&prompt)
        .await
        .map_err(|e| AppError::Llm(e.to_string()))?;

    if !state
        .sessions
        .append_turn(id, req.question, reply.clone(), req.spoiler_level)
        .await
    {
        // Session ended while the model call was in flight.
        return Err(AppError::NotFound(format!("Session {id} not found")));
    }

    Ok(Json(ChatResponse {
        reply,
        spoiler_level: req.spoiler_level,
    }))
}
