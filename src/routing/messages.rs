//! Message board routes.

use axum::{
    extract::State,
    http::{header::LOCATION, StatusCode},
    response::{Html, IntoResponse, Response},
    Form,
};
use serde::Deserialize;
use serde_json::Value;

use crate::directory::{NewMessage, Query, MESSAGES};
use crate::http::response::AppError;
use crate::routing::AppState;
use crate::views::{Template, ViewModel};

pub const MESSAGES_PATH: &str = "/berichten";

/// Fields of the message form. `afzender` is the sender's name.
#[derive(Debug, Deserialize)]
pub struct MessageForm {
    pub message: Option<String>,
    pub afzender: Option<String>,
}

/// GET /berichten
pub async fn list_messages(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let query = Query::new().filter(&["for"], &state.scope.message_scope);
    let messages: Vec<Value> = state.directory.list(MESSAGES, &query).await?;

    let model = ViewModel::new().with("messages", &messages)?;
    state.render(Template::Messages, &model)
}

/// POST /berichten
pub async fn post_message(
    State(state): State<AppState>,
    Form(form): Form<MessageForm>,
) -> Result<Response, AppError> {
    let message = NewMessage {
        scope: state.scope.message_scope.clone(),
        from: form.afzender,
        text: form.message,
    };
    state.directory.create(MESSAGES, &message).await?;

    tracing::info!(scope = %message.scope, "Message posted");
    Ok((StatusCode::FOUND, [(LOCATION, MESSAGES_PATH)]).into_response())
}
