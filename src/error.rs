//! API Error Types

/// Failure outcome of an API call or client-side check
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// Rejected before any request was issued
    #[error("{0}")]
    Validation(String),

    /// `fetch` rejected or the request could not be built
    #[error("network error: {0}")]
    Transport(String),

    /// Non-2xx response without a readable error message
    #[error("server responded with status {0}")]
    Status(u16),

    /// Envelope with `success: false`
    #[error("request rejected: {0}")]
    Rejected(String),

    /// Body did not match the expected envelope
    #[error("malformed response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Transport failures skip the visual effect; other failures may render an empty state
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

impl From<wasm_bindgen::JsValue> for ApiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        ApiError::Transport(format!("{:?}", value))
    }
}

impl From<serde_wasm_bindgen::Error> for ApiError {
    fn from(value: serde_wasm_bindgen::Error) -> Self {
        ApiError::Decode(value.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(value: serde_json::Error) -> Self {
        ApiError::Decode(value.to_string())
    }
}
