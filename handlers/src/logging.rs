//! Interceptors that log every incoming request and outgoing response.

use skill_core::{Directive, HandlerInput, RequestInterceptor, Response, ResponseInterceptor, Result};
use tracing::{debug, info, instrument, Level};

/// Logs the incoming request; full envelope at debug level.
pub struct LoggingRequestInterceptor;

impl RequestInterceptor for LoggingRequestInterceptor {
    #[instrument(skip(self, input))]
    fn process(&self, input: &HandlerInput<'_>) -> Result<()> {
        let request = &input.envelope().request;
        info!(
            request_id = %request.request_id,
            request_type = %input.request_type(),
            locale = %input.translator().locale(),
            intent = ?input.intent_name(),
            source = ?input.user_event_source_id(),
            "Incoming request"
        );
        if tracing::enabled!(Level::DEBUG) {
            let raw = serde_json::to_string(input.envelope())?;
            debug!(envelope = %raw, "Incoming request envelope");
        }
        Ok(())
    }
}

/// Logs the outgoing response; full body at debug level.
pub struct LoggingResponseInterceptor;

impl ResponseInterceptor for LoggingResponseInterceptor {
    #[instrument(skip(self, input, response))]
    fn process(&self, input: &HandlerInput<'_>, response: &Response) -> Result<()> {
        info!(
            request_id = %input.envelope().request.request_id,
            has_speech = response.output_speech.is_some(),
            has_reprompt = response.reprompt.is_some(),
            directive_tokens = ?response.directives.iter().map(Directive::token).collect::<Vec<_>>(),
            should_end_session = ?response.should_end_session,
            "Outgoing response"
        );
        if tracing::enabled!(Level::DEBUG) {
            let raw = serde_json::to_string(response)?;
            debug!(response = %raw, "Outgoing response body");
        }
        Ok(())
    }
}
