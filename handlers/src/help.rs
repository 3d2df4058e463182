use skill_core::{HandlerInput, RequestHandler, Response, Result};

pub const HELP_INTENT: &str = "AMAZON.HelpIntent";
pub const HELP_MESSAGE: &str = "Push a button or say which sound you want played.";
pub const HELP_REPROMPT: &str = "Pick a sound.";

/// Handles `AMAZON.HelpIntent`.
pub struct HelpIntentHandler;

impl RequestHandler for HelpIntentHandler {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.intent_name() == Some(HELP_INTENT)
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        Ok(input
            .response_builder()
            .speak(HELP_MESSAGE)
            .reprompt(HELP_REPROMPT)
            .get_response())
    }
}
