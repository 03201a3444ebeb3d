//! REST API Client
//!
//! Thin `fetch` wrappers around the task backend, organized by resource.
//! Every call is single-attempt and resolves to `Result<_, ApiError>`.

mod task;
mod stats;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::error::ApiError;
use crate::models::Envelope;

pub use task::*;
pub use stats::*;

/// Issue one request and decode the shared envelope
async fn send(method: &str, url: &str, body: Option<String>) -> Result<Envelope, ApiError> {
    let opts = RequestInit::new();
    opts.set_method(method);
    opts.set_mode(RequestMode::Cors);
    if let Some(json) = body.as_deref() {
        opts.set_body(&JsValue::from_str(json));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if body.is_some() {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;

    let body = match response.json() {
        Ok(promise) => match JsFuture::from(promise).await {
            Ok(value) => serde_wasm_bindgen::from_value::<Envelope>(value).map_err(ApiError::from),
            Err(e) => Err(ApiError::Decode(format!("{:?}", e))),
        },
        Err(e) => Err(ApiError::Decode(format!("{:?}", e))),
    };

    let result = interpret(response.status(), response.ok(), body);
    if let Err(e) = &result {
        web_sys::console::error_1(&format!("[API] {} {} failed: {}", method, url, e).into());
    }
    result
}

/// Fold HTTP status and decoded body into one outcome.
///
/// Non-2xx and `success: false` are both failures; the server's `error`
/// text is kept when present.
pub(crate) fn interpret(
    status: u16,
    ok: bool,
    body: Result<Envelope, ApiError>,
) -> Result<Envelope, ApiError> {
    match (ok, body) {
        (true, Ok(envelope)) if envelope.success => Ok(envelope),
        (_, Ok(envelope)) => match envelope.error {
            Some(message) => Err(ApiError::Rejected(message)),
            None if ok => Err(ApiError::Rejected("unknown error".to_string())),
            None => Err(ApiError::Status(status)),
        },
        (true, Err(e)) => Err(e),
        (false, Err(_)) => Err(ApiError::Status(status)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(json: &str) -> Result<Envelope, ApiError> {
        serde_json::from_str(json).map_err(ApiError::from)
    }

    #[test]
    fn test_success_envelope_passes_through() {
        let result = interpret(200, true, envelope(r#"{"success": true, "task_id": 7}"#));
        assert_eq!(result.unwrap().task_id, Some(7));
    }

    #[test]
    fn test_unsuccessful_envelope_keeps_server_message() {
        let result = interpret(400, false, envelope(r#"{"success": false, "error": "Title required"}"#));
        assert_eq!(result.unwrap_err(), ApiError::Rejected("Title required".to_string()));
    }

    #[test]
    fn test_success_false_with_2xx_is_failure() {
        let result = interpret(200, true, envelope(r#"{"success": false}"#));
        assert!(matches!(result, Err(ApiError::Rejected(_))));
    }

    #[test]
    fn test_non_2xx_without_body_reports_status() {
        let result = interpret(502, false, Err(ApiError::Decode("not json".to_string())));
        assert_eq!(result.unwrap_err(), ApiError::Status(502));
    }

    #[test]
    fn test_non_2xx_claiming_success_is_still_failure() {
        let result = interpret(500, false, envelope(r#"{"success": true}"#));
        assert_eq!(result.unwrap_err(), ApiError::Status(500));
    }

    #[test]
    fn test_undecodable_2xx_body_is_decode_error() {
        let result = interpret(200, true, Err(ApiError::Decode("eof".to_string())));
        assert!(matches!(result, Err(ApiError::Decode(_))));
    }
}
