//! # Handler chain
//!
//! Dispatches one request envelope: selects the first request handler whose predicate matches, runs the
//! request interceptors, invokes the handler, then runs the response interceptors. A handler fault is
//! turned into a response by the first error handler that accepts it.

use skill_core::{
    ErrorHandler, HandlerInput, RequestEnvelope, RequestHandler, RequestInterceptor, Response,
    ResponseInterceptor, Result, SkillError,
};
use std::sync::Arc;
use tracing::{debug, error, info, instrument};

const DEFAULT_LOCALE: &str = "en-US";

/// Ordered dispatch table plus interceptor pipelines. Registration order is the only
/// disambiguation between overlapping handlers.
#[derive(Clone)]
pub struct HandlerChain {
    request_interceptors: Vec<Arc<dyn RequestInterceptor>>,
    handlers: Vec<Arc<dyn RequestHandler>>,
    response_interceptors: Vec<Arc<dyn ResponseInterceptor>>,
    error_handlers: Vec<Arc<dyn ErrorHandler>>,
    default_locale: String,
}

impl Default for HandlerChain {
    fn default() -> Self {
        Self::new()
    }
}

impl HandlerChain {
    /// Creates an empty chain with `en-US` as the locale for requests that carry none.
    pub fn new() -> Self {
        Self {
            request_interceptors: Vec::new(),
            handlers: Vec::new(),
            response_interceptors: Vec::new(),
            error_handlers: Vec::new(),
            default_locale: DEFAULT_LOCALE.to_string(),
        }
    }

    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = locale.into();
        self
    }

    /// Appends a request handler (tried in order; first match wins).
    pub fn add_request_handler(mut self, handler: Arc<dyn RequestHandler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Appends a request interceptor (runs in order before the matched handler).
    pub fn add_request_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.request_interceptors.push(interceptor);
        self
    }

    /// Appends a response interceptor (runs in order after the response is built).
    pub fn add_response_interceptor(mut self, interceptor: Arc<dyn ResponseInterceptor>) -> Self {
        self.response_interceptors.push(interceptor);
        self
    }

    /// Appends an error handler (first one accepting the error produces the response).
    pub fn add_error_handler(mut self, handler: Arc<dyn ErrorHandler>) -> Self {
        self.error_handlers.push(handler);
        self
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Dispatches one envelope. Interceptor errors propagate; handler errors (including no match)
    /// go to the error handlers, and propagate only when none accepts them.
    #[instrument(skip(self, envelope), fields(request_id = %envelope.request.request_id))]
    pub fn handle(&self, envelope: &RequestEnvelope) -> Result<Response> {
        let input = HandlerInput::new(envelope, &self.default_locale);

        info!(
            request_type = %input.request_type(),
            locale = %input.translator().locale(),
            "step: handler_chain started"
        );

        let matched = self.select(&input);

        for interceptor in &self.request_interceptors {
            let name = interceptor.name();
            debug!(interceptor = %name, "step: request interceptor");
            interceptor.process(&input)?;
        }

        let outcome = match matched {
            Some(handler) => {
                let handler_name = handler.name();
                info!(handler = %handler_name, "step: handler processing");
                handler.handle(&input)
            }
            None => Err(SkillError::NoMatchingHandler {
                request_type: input.request_type().to_string(),
            }),
        };

        let response = match outcome {
            Ok(response) => response,
            Err(err) => self.recover(&input, err)?,
        };

        for interceptor in &self.response_interceptors {
            let name = interceptor.name();
            debug!(interceptor = %name, "step: response interceptor");
            interceptor.process(&input, &response)?;
        }

        info!(
            directives = response.directives.len(),
            has_speech = response.output_speech.is_some(),
            "step: handler_chain finished"
        );

        Ok(response)
    }

    fn select(&self, input: &HandlerInput<'_>) -> Option<&Arc<dyn RequestHandler>> {
        let found = self.handlers.iter().find(|h| h.can_handle(input));
        if found.is_none() {
            error!(
                request_type = %input.request_type(),
                "No request handler registered for request"
            );
        }
        found
    }

    fn recover(&self, input: &HandlerInput<'_>, err: SkillError) -> Result<Response> {
        error!(error = %err, "step: handler failed, routing to error handlers");
        match self.error_handlers.iter().find(|h| h.can_handle(input, &err)) {
            Some(handler) => {
                let handler_name = handler.name();
                info!(handler = %handler_name, "step: error handler processing");
                handler.handle(input, &err)
            }
            None => Err(err),
        }
    }
}

// Unit/integration tests live in tests/handler_chain_test.rs
