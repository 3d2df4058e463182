use skill_core::{HandlerInput, MessageKey, RequestHandler, Response, Result};
use tracing::info;

pub const CANCEL_INTENT: &str = "AMAZON.CancelIntent";
pub const STOP_INTENT: &str = "AMAZON.StopIntent";

/// Handles `AMAZON.CancelIntent` and `AMAZON.StopIntent`: says goodbye and ends the session.
pub struct ExitHandler;

impl RequestHandler for ExitHandler {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        matches!(input.intent_name(), Some(CANCEL_INTENT | STOP_INTENT))
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        info!(intent = ?input.intent_name(), "Exit requested");
        Ok(input
            .response_builder()
            .speak(&input.t(MessageKey::Stop))
            .with_should_end_session(true)
            .get_response())
    }
}
