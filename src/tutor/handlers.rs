use axum::{extract::State, routing::post, Json, Router};
use tracing::{instrument, warn};

use super::dto::{ChatRequest, ChatResponse};
use super::prompt::build_prompt;
use crate::auth::extractors::CurrentUser;
use crate::error::ApiError;
use crate::state::AppState;

pub fn tutor_routes() -> Router<AppState> {
    Router::new().route("/ai/chat", post(chat))
}

#[instrument(skip(state, payload), fields(user_id = %user.id))]
pub async fn chat(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let prompt = build_prompt(
        payload.category.as_deref(),
        &payload.history,
        &payload.message,
    );

    // Exactly one attempt. A failure is surfaced as a distinguishable 502
    // carrying the fixed fallback text the client renders as the chat bubble.
    match state.completions.complete(&prompt).await {
        Ok(response) => Ok(Json(ChatResponse { response })),
        Err(e) => {
            warn!(error = %e, "completion call failed");
            Err(ApiError::UpstreamFailure)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::State;
    use uuid::Uuid;

    fn fake_user() -> CurrentUser {
        CurrentUser {
            id: Uuid::new_v4(),
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
        }
    }

    #[tokio::test]
    async fn chat_returns_completion_text() {
        let state = AppState::fake();
        let payload = ChatRequest {
            message: "how do I plan revision?".into(),
            category: Some("studies".into()),
            history: vec![],
        };
        let Json(body) = chat(State(state), fake_user(), Json(payload))
            .await
            .expect("chat should succeed with the fake client");
        assert_eq!(body.response, "Study a little every day.");
    }

    #[tokio::test]
    async fn chat_surfaces_upstream_failure_with_fallback_text() {
        use crate::config::GeminiConfig;
        use crate::error::TUTOR_FALLBACK;
        use crate::tutor::client::{CompletionClient, GeminiClient};
        use std::sync::Arc;

        // A real client with no credential fails before any network I/O.
        let base = AppState::fake();
        let state = AppState::from_parts(
            base.db.clone(),
            base.config.clone(),
            Arc::new(GeminiClient::new(GeminiConfig {
                api_key: None,
                model: "gemini-1.5-flash".into(),
            })) as Arc<dyn CompletionClient>,
        );

        let payload = ChatRequest {
            message: "hello".into(),
            category: None,
            history: vec![],
        };
        let err = chat(State(state), fake_user(), Json(payload))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::UpstreamFailure));
        assert_eq!(err.to_string(), TUTOR_FALLBACK);
    }
}
