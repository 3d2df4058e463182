//! Catch-all for intents: repeats the intent name back. Must be registered after every specific
//! intent handler, since it matches any `IntentRequest`.

use skill_core::{HandlerError, HandlerInput, MessageKey, RequestHandler, Response, Result};
use tracing::info;

pub struct IntentReflectorHandler;

impl RequestHandler for IntentReflectorHandler {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.intent().is_some()
    }

    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        let intent_name = input
            .intent_name()
            .ok_or(HandlerError::MissingField("request.intent.name"))?;
        info!(intent = %intent_name, "Reflecting unhandled intent");
        let speech = input.t_with(MessageKey::Reflector, &[("intentName", intent_name)]);
        Ok(input.response_builder().speak(&speech).get_response())
    }
}
