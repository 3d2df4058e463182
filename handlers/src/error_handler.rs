use skill_core::{ErrorHandler, HandlerInput, MessageKey, Response, Result, SkillError};
use tracing::error;

/// Accepts every error and apologizes with the localized generic message, reprompting the same line.
pub struct GenericErrorHandler;

impl ErrorHandler for GenericErrorHandler {
    fn can_handle(&self, _input: &HandlerInput<'_>, _error: &SkillError) -> bool {
        true
    }

    fn handle(&self, input: &HandlerInput<'_>, err: &SkillError) -> Result<Response> {
        error!(
            error = %err,
            request_type = %input.request_type(),
            request_id = %input.envelope().request.request_id,
            "Error handled"
        );
        let speech = input.t(MessageKey::Error);
        Ok(input
            .response_builder()
            .speak(&speech)
            .reprompt(&speech)
            .get_response())
    }
}
