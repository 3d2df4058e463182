//! Incremental response builder.

use crate::types::{Directive, OutputSpeech, Reprompt, Response};

/// Builds a [`Response`]: speak / reprompt / directives / end-session flag, finalized by
/// [`ResponseBuilder::get_response`].
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    response: Response,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spoken text (wrapped as SSML).
    pub fn speak(mut self, text: &str) -> Self {
        self.response.output_speech = Some(OutputSpeech::ssml(text));
        self
    }

    /// Sets the reprompt and keeps the session open.
    pub fn reprompt(mut self, text: &str) -> Self {
        self.response.reprompt = Some(Reprompt {
            output_speech: OutputSpeech::ssml(text),
        });
        self.response.should_end_session = Some(false);
        self
    }

    pub fn add_directive(mut self, directive: Directive) -> Self {
        self.response.directives.push(directive);
        self
    }

    pub fn with_should_end_session(mut self, end: bool) -> Self {
        self.response.should_end_session = Some(end);
        self
    }

    pub fn get_response(self) -> Response {
        self.response
    }
}
