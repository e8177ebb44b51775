use axum::{Json, body::Bytes};

use crate::{
    error::AppError,
    message::{ChatRequest, ChatResponse},
    services::chatbot::{SUGGESTIONS, generate_reply},
};

/// `POST /api/chat/league`.
///
/// The body is read raw rather than through the `Json` extractor: a body
/// that fails to parse must surface as the service's own 500 error payload,
/// not as an extractor rejection, and an absent body is not an error at all.
pub async fn chat_handler(body: Bytes) -> Result<Json<ChatResponse>, AppError> {
    let payload = ChatRequest::from_body(&body)?;

    let reply = generate_reply(&payload.question_text(), &payload.league_id_text());

    Ok(Json(ChatResponse {
        response: reply,
        suggestions: SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
        status: "success".to_string(),
    }))
}
