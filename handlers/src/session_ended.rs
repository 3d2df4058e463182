//! Session end notification: the platform closed the session (user exit, no answer, or an error).

use skill_core::{HandlerInput, RequestBody, RequestHandler, Response, Result};
use tracing::{debug, info, Level};

/// Handles `SessionEndedRequest`. Logs and returns an empty response.
pub struct SessionEndedRequestHandler;

impl RequestHandler for SessionEndedRequestHandler {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        matches!(input.body(), RequestBody::SessionEndedRequest { .. })
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        if let RequestBody::SessionEndedRequest { reason, error } = input.body() {
            info!(
                reason = %reason.as_deref().unwrap_or("unknown"),
                error = ?error,
                "Session ended"
            );
        }
        if tracing::enabled!(Level::DEBUG) {
            let raw = serde_json::to_string(input.envelope())?;
            debug!(envelope = %raw, "Session ended envelope");
        }
        Ok(input.response_builder().get_response())
    }
}
