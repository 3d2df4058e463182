//! Handler input and the handler / interceptor traits the dispatcher runs.

use crate::error::{Result, SkillError};
use crate::i18n::{MessageKey, Translator};
use crate::response::ResponseBuilder;
use crate::types::{Intent, RequestBody, RequestEnvelope, Response};

/// Per-request view handed to handlers and interceptors: the envelope plus a translator for its locale.
#[derive(Debug, Clone, Copy)]
pub struct HandlerInput<'a> {
    envelope: &'a RequestEnvelope,
    translator: Translator,
}

impl<'a> HandlerInput<'a> {
    /// Binds the translator to the request locale, or `default_locale` when the request has none.
    pub fn new(envelope: &'a RequestEnvelope, default_locale: &str) -> Self {
        let locale = envelope.request.locale.as_deref().unwrap_or(default_locale);
        Self {
            envelope,
            translator: Translator::for_locale(locale),
        }
    }

    pub fn envelope(&self) -> &'a RequestEnvelope {
        self.envelope
    }

    pub fn body(&self) -> &'a RequestBody {
        &self.envelope.request.body
    }

    /// Wire request type, as received.
    pub fn request_type(&self) -> &'a str {
        self.body().type_name()
    }

    /// Intent of an `IntentRequest`; `None` for every other request type.
    pub fn intent(&self) -> Option<&'a Intent> {
        match self.body() {
            RequestBody::IntentRequest { intent } => Some(intent),
            _ => None,
        }
    }

    pub fn intent_name(&self) -> Option<&'a str> {
        self.intent().map(|i| i.name.as_str())
    }

    /// Source component id of a UI user event.
    pub fn user_event_source_id(&self) -> Option<&'a str> {
        match self.body() {
            RequestBody::UserEvent { source, .. } => source.as_ref().map(|s| s.id.as_str()),
            _ => None,
        }
    }

    pub fn translator(&self) -> Translator {
        self.translator
    }

    pub fn t(&self, key: MessageKey) -> String {
        self.translator.t(key)
    }

    pub fn t_with(&self, key: MessageKey, params: &[(&str, &str)]) -> String {
        self.translator.t_with(key, params)
    }

    pub fn response_builder(&self) -> ResponseBuilder {
        ResponseBuilder::new()
    }
}

/// One dispatch entry: a match predicate and a responder. The chain runs the first entry whose
/// `can_handle` returns true.
pub trait RequestHandler: Send + Sync {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool;
    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response>;

    /// Concrete type name, for logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Turns a dispatch fault into a response.
pub trait ErrorHandler: Send + Sync {
    fn can_handle(&self, input: &HandlerInput<'_>, error: &SkillError) -> bool;
    fn handle(&self, input: &HandlerInput<'_>, error: &SkillError) -> Result<Response>;

    /// Concrete type name, for logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Runs before the matched handler, for effect only.
pub trait RequestInterceptor: Send + Sync {
    fn process(&self, input: &HandlerInput<'_>) -> Result<()>;

    /// Concrete type name, for logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

/// Runs after the response is built, for effect only.
pub trait ResponseInterceptor: Send + Sync {
    fn process(&self, input: &HandlerInput<'_>, response: &Response) -> Result<()>;

    /// Concrete type name, for logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
