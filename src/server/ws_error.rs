/// Centralized helpers for WebSocket and HTTP error responses.
///
/// Every error carries a code, a human-readable message and an optional context
/// (e.g. game_id), so clients can handle them uniformly.
use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

/// Formats a WebSocket error message as a JSON string.
///
/// # Arguments
/// - `code`: Unique error code (e.g. "INVALID_CELL").
/// - `message`: Human-readable error message.
/// - `context`: Optional context (e.g. game_id).
pub fn ws_error_message(code: &str, message: &str, context: Option<&str>) -> String {
    json!({
        "action": "Error",
        "data": {
            "code": code,
            "message": message,
            "context": context,
        }
    })
    .to_string()
}

/// Returns a WebSocket message for a connection replaced by a newer one on the same game.
pub fn ws_session_kicked_message(context: Option<&str>) -> String {
    ws_error_message(
        "SESSION_KICKED",
        "You have been disconnected because another connection has attached to this game.",
        context,
    )
}

/// Returns an HTTP error response with a JSON body.
pub fn http_error_response(
    code: &str,
    message: &str,
    context: Option<&str>,
    status: StatusCode,
) -> HttpResponse {
    let body = json!({
        "error": {
            "code": code,
            "message": message,
            "context": context,
        }
    });
    HttpResponse::build(status).json(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_ws_error_message_shape() {
        let text = ws_error_message("INVALID_CELL", "cell \"9\" is outside", Some("abc"));
        let value: Value = serde_json::from_str(&text).expect("valid json");
        assert_eq!(value["action"], "Error");
        assert_eq!(value["data"]["code"], "INVALID_CELL");
        assert_eq!(value["data"]["message"], "cell \"9\" is outside");
        assert_eq!(value["data"]["context"], "abc");
    }

    #[test]
    fn test_missing_context_is_null() {
        let value: Value = serde_json::from_str(&ws_session_kicked_message(None)).expect("valid json");
        assert_eq!(value["data"]["code"], "SESSION_KICKED");
        assert!(value["data"]["context"].is_null());
    }

    #[test]
    fn test_http_error_status() {
        let response = http_error_response("GAME_NOT_FOUND", "Game session not found", None, StatusCode::NOT_FOUND);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
