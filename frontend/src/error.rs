use shared::ErrorBody;

/// Why an analysis request did not produce a result.
///
/// The user only ever sees the generic failure alert; the variant ends up in
/// the log.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AnalyzeError {
    #[error("Failed to build request: {0}")]
    Request(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Server error: {} - {}", .status, .message.as_deref().unwrap_or("no details"))]
    Status { status: u16, message: Option<String> },
    #[error("Failed to parse response: {0}")]
    MalformedBody(String),
}

impl AnalyzeError {
    /// Builds the error for a non-2xx response, keeping the service's own
    /// `error` message when the body carries one.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .map(|body| body.error);
        Self::Status { status, message }
    }
}
