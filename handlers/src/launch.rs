//! Launch: welcome prompt, plus the sound board on devices that render APL.

use serde_json::{Map, Value};
use skill_core::{
    supports_apl, Directive, DirectiveDocument, HandlerInput, RequestBody, RequestHandler,
    Response, Result,
};
use std::sync::Arc;
use tracing::{debug, instrument};

use crate::document::APL_VERSION;

pub const WELCOME_MESSAGE: &str =
    "Welcome, you can push a button or ask for a sound. Which sound would you like to try?";

/// Directive token for the rendered board.
pub const BOARD_TOKEN: &str = "soundboard";

/// Handles `LaunchRequest`. Speaks and reprompts the welcome line; attaches the board document
/// only when the device supports APL.
pub struct LaunchRequestHandler {
    board: Arc<Value>,
}

impl LaunchRequestHandler {
    /// `board` is the visual document loaded at startup.
    pub fn new(board: Arc<Value>) -> Self {
        Self { board }
    }
}

impl RequestHandler for LaunchRequestHandler {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        matches!(input.body(), RequestBody::LaunchRequest)
    }

    #[instrument(skip(self, input))]
    fn handle(&self, input: &HandlerInput<'_>) -> Result<Response> {
        let mut builder = input.response_builder();
        let apl = supports_apl(input.envelope());
        debug!(supports_apl = apl, "Launch capability probe");
        if apl {
            builder = builder.add_directive(Directive::RenderVisualDocument {
                token: BOARD_TOKEN.to_string(),
                version: APL_VERSION.to_string(),
                document: DirectiveDocument::Inline(self.board.as_ref().clone()),
                datasources: Map::new(),
            });
        }
        Ok(builder
            .speak(WELCOME_MESSAGE)
            .reprompt(WELCOME_MESSAGE)
            .get_response())
    }
}
