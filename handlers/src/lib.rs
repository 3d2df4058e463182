//! # Handlers for the sound board skill
//!
//! Request handlers (launch, help, board buttons, exit, session end, intent reflector), the generic
//! error handler, logging interceptors, and the bundled board document.

mod document;
mod error_handler;
mod exit;
mod help;
mod intent_reflector;
mod launch;
mod logging;
mod session_ended;
mod sound_button;

#[cfg(test)]
mod test;

pub use document::{audio_document_src, load_soundboard_document, parse_visual_document, APL_VERSION};
pub use error_handler::GenericErrorHandler;
pub use exit::{ExitHandler, CANCEL_INTENT, STOP_INTENT};
pub use help::{HelpIntentHandler, HELP_INTENT, HELP_MESSAGE, HELP_REPROMPT};
pub use intent_reflector::IntentReflectorHandler;
pub use launch::{LaunchRequestHandler, BOARD_TOKEN, WELCOME_MESSAGE};
pub use logging::{LoggingRequestInterceptor, LoggingResponseInterceptor};
pub use session_ended::SessionEndedRequestHandler;
pub use sound_button::{SoundButton, SoundButtonHandler, SOUND_TOKEN};
