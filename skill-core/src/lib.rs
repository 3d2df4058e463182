//! # skill-core
//!
//! Core types and traits for the voice skill: request/response envelopes, directives, [`ResponseBuilder`],
//! [`HandlerInput`], the [`RequestHandler`] / [`ErrorHandler`] / interceptor traits, the capability probe,
//! localized messages, and tracing initialization. Transport-agnostic; used by handler-chain and handlers.

pub mod capability;
pub mod error;
pub mod handler;
pub mod i18n;
pub mod logger;
pub mod response;
pub mod types;

pub use capability::{supports_apl, supports_interface, APL_INTERFACE};
pub use error::{HandlerError, Result, SkillError};
pub use handler::{
    ErrorHandler, HandlerInput, RequestHandler, RequestInterceptor, ResponseInterceptor,
};
pub use i18n::{MessageKey, Translator};
pub use logger::init_tracing;
pub use response::ResponseBuilder;
pub use types::{
    Context, Device, Directive, DirectiveDocument, DocumentLink, Intent, OutputSpeech, Reprompt,
    Request, RequestBody, RequestEnvelope, Response, ResponseEnvelope, Session, SystemState,
    UserEventSource,
};
