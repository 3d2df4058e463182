//! Wires the sound board handlers into a [`HandlerChain`].

use handler_chain::HandlerChain;
use handlers::{
    load_soundboard_document, ExitHandler, GenericErrorHandler, HelpIntentHandler,
    IntentReflectorHandler, LaunchRequestHandler, LoggingRequestInterceptor,
    LoggingResponseInterceptor, SessionEndedRequestHandler, SoundButton, SoundButtonHandler,
};
use skill_core::Result;
use std::sync::Arc;
use tracing::info;

use crate::config::SkillConfig;

/// Builds the skill's chain. Order matters: the intent reflector matches every intent and goes last.
pub fn build_soundboard_chain(config: &SkillConfig) -> Result<HandlerChain> {
    let board = load_soundboard_document()?;

    let mut chain = HandlerChain::new()
        .with_default_locale(config.default_locale.clone())
        .add_request_handler(Arc::new(LaunchRequestHandler::new(board)))
        .add_request_handler(Arc::new(HelpIntentHandler));
    for button in SoundButton::ALL {
        chain = chain.add_request_handler(Arc::new(SoundButtonHandler::new(button)));
    }
    let chain = chain
        .add_request_handler(Arc::new(ExitHandler))
        .add_request_handler(Arc::new(SessionEndedRequestHandler))
        .add_request_handler(Arc::new(IntentReflectorHandler))
        .add_request_interceptor(Arc::new(LoggingRequestInterceptor))
        .add_response_interceptor(Arc::new(LoggingResponseInterceptor))
        .add_error_handler(Arc::new(GenericErrorHandler));

    info!(handlers = chain.handler_count(), "Sound board chain assembled");
    Ok(chain)
}
