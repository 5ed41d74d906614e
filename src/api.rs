//! API client for the Mochi chat backend
//!
//! Every operation is a single fetch, with cookie credentials wherever
//! the backend needs the session. No retries, no timeouts, no request
//! deduplication; callers convert failures into visible UI state.

use gloo_net::http::Request;
use web_sys::RequestCredentials;

use crate::types::{ChatReply, ChatRequest, User};

/// Failure taxonomy for backend calls.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ApiError {
    #[error("not authorized")]
    Unauthorized,
    #[error("request failed with status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to decode payload: {0}")]
    Decode(String),
}

/// Map a non-2xx status onto the taxonomy. 401 and 403 both mean the
/// session is missing or expired.
fn status_error(status: u16) -> ApiError {
    match status {
        401 | 403 => ApiError::Unauthorized,
        status => ApiError::Status(status),
    }
}

/// GET the health endpoint, returning whatever JSON the backend reports.
pub async fn check_health(base_url: &str) -> Result<serde_json::Value, ApiError> {
    let url = format!("{base_url}/api/chat/health");
    let resp = Request::get(&url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(status_error(resp.status()));
    }

    resp.json::<serde_json::Value>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Navigate the browser to the backend's Google OAuth entry point.
/// The backend owns the whole flow and redirects back when done.
pub fn login(base_url: &str) {
    redirect(&format!("{base_url}/oauth2/authorization/google"));
}

/// Navigate the browser to the backend logout endpoint, which clears
/// the session cookie and redirects back.
pub fn logout(base_url: &str) {
    redirect(&format!("{base_url}/logout"));
}

fn redirect(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    if let Err(err) = window.location().set_href(url) {
        tracing::error!(?err, url, "browser redirect failed");
    }
}

/// GET the current session user. Any non-2xx answer means there is no
/// usable session.
pub async fn current_user(base_url: &str) -> Result<User, ApiError> {
    let url = format!("{base_url}/api/chat/user");
    let resp = Request::get(&url)
        .credentials(RequestCredentials::Include)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(status_error(resp.status()));
    }

    resp.json::<User>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// POST a chat message and await the assistant reply payload.
pub async fn send_message(
    base_url: &str,
    message: &str,
    conversation_id: Option<&str>,
) -> Result<ChatReply, ApiError> {
    let url = format!("{base_url}/api/chat/message");
    let body = ChatRequest {
        message: message.to_string(),
        conversation_id: conversation_id.map(str::to_string),
    };

    let resp = Request::post(&url)
        .credentials(RequestCredentials::Include)
        .json(&body)
        .map_err(|e| ApiError::Decode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !resp.ok() {
        return Err(status_error(resp.status()));
    }

    resp.json::<ChatReply>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_distinguishes_unauthorized() {
        assert!(matches!(status_error(401), ApiError::Unauthorized));
        assert!(matches!(status_error(403), ApiError::Unauthorized));
    }

    #[test]
    fn test_status_error_keeps_other_codes_generic() {
        assert!(matches!(status_error(404), ApiError::Status(404)));
        assert!(matches!(status_error(500), ApiError::Status(500)));
        assert!(matches!(status_error(429), ApiError::Status(429)));
    }

    #[test]
    fn test_error_display_names_the_cause() {
        assert_eq!(ApiError::Unauthorized.to_string(), "not authorized");
        assert_eq!(
            ApiError::Status(502).to_string(),
            "request failed with status 502"
        );
        assert!(ApiError::Network("offline".to_string())
            .to_string()
            .contains("offline"));
    }
}
