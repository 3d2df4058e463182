//! Integration tests for [`handler_chain::HandlerChain`].
//!
//! Covers: first-registered match wins, interceptor order around the handler, faults routed to the
//! error handler, interceptor errors propagating, and the no-match path.

use std::sync::{Arc, Mutex};

use handler_chain::HandlerChain;
use serde_json::json;
use skill_core::{
    ErrorHandler, HandlerError, HandlerInput, RequestEnvelope, RequestHandler, RequestInterceptor,
    Response, ResponseInterceptor, SkillError,
};

fn create_test_envelope(request_type: &str) -> RequestEnvelope {
    serde_json::from_value(json!({
        "version": "1.0",
        "request": {
            "type": request_type,
            "requestId": "test_request_id",
            "locale": "en-US",
            "intent": { "name": "TestIntent" }
        }
    }))
    .unwrap()
}

type Log = Arc<Mutex<Vec<String>>>;

/// Always matches; speaks its name and records the call.
struct NamedHandler {
    name: &'static str,
    log: Log,
}

impl RequestHandler for NamedHandler {
    fn can_handle(&self, _input: &HandlerInput<'_>) -> bool {
        true
    }

    fn handle(&self, input: &HandlerInput<'_>) -> skill_core::Result<Response> {
        self.log.lock().unwrap().push(format!("handle_{}", self.name));
        Ok(input.response_builder().speak(self.name).get_response())
    }
}

/// Matches only LaunchRequest.
struct LaunchOnly;

impl RequestHandler for LaunchOnly {
    fn can_handle(&self, input: &HandlerInput<'_>) -> bool {
        input.request_type() == "LaunchRequest"
    }

    fn handle(&self, input: &HandlerInput<'_>) -> skill_core::Result<Response> {
        Ok(input.response_builder().speak("launch").get_response())
    }
}

struct FailingHandler;

impl RequestHandler for FailingHandler {
    fn can_handle(&self, _input: &HandlerInput<'_>) -> bool {
        true
    }

    fn handle(&self, _input: &HandlerInput<'_>) -> skill_core::Result<Response> {
        Err(HandlerError::Fault("boom".to_string()).into())
    }
}

struct ApologyHandler {
    seen: Log,
}

impl ErrorHandler for ApologyHandler {
    fn can_handle(&self, _input: &HandlerInput<'_>, _error: &SkillError) -> bool {
        true
    }

    fn handle(&self, input: &HandlerInput<'_>, error: &SkillError) -> skill_core::Result<Response> {
        self.seen.lock().unwrap().push(error.to_string());
        Ok(input.response_builder().speak("sorry").reprompt("sorry").get_response())
    }
}

struct RecordingRequestInterceptor {
    name: &'static str,
    log: Log,
}

impl RequestInterceptor for RecordingRequestInterceptor {
    fn process(&self, _input: &HandlerInput<'_>) -> skill_core::Result<()> {
        self.log.lock().unwrap().push(format!("request_{}", self.name));
        Ok(())
    }
}

struct RecordingResponseInterceptor {
    name: &'static str,
    log: Log,
}

impl ResponseInterceptor for RecordingResponseInterceptor {
    fn process(&self, _input: &HandlerInput<'_>, response: &Response) -> skill_core::Result<()> {
        self.log.lock().unwrap().push(format!(
            "response_{}:{}",
            self.name,
            response.speech_text().unwrap_or_default()
        ));
        Ok(())
    }
}

struct FailingRequestInterceptor;

impl RequestInterceptor for FailingRequestInterceptor {
    fn process(&self, _input: &HandlerInput<'_>) -> skill_core::Result<()> {
        Err(SkillError::Interceptor("interceptor down".to_string()))
    }
}

/// **Test: Two handlers both match; the first registered one is selected.**
#[test]
fn test_first_registered_match_wins() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_request_handler(Arc::new(NamedHandler { name: "first", log: log.clone() }))
        .add_request_handler(Arc::new(NamedHandler { name: "second", log: log.clone() }));

    let response = chain.handle(&create_test_envelope("LaunchRequest")).unwrap();

    assert_eq!(response.speech_text(), Some("first"));
    assert_eq!(*log.lock().unwrap(), vec!["handle_first"]);
}

/// **Test: A non-matching handler is skipped in favour of a later one.**
#[test]
fn test_non_matching_handler_is_skipped() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_request_handler(Arc::new(LaunchOnly))
        .add_request_handler(Arc::new(NamedHandler { name: "fallback", log: log.clone() }));

    let launch = chain.handle(&create_test_envelope("LaunchRequest")).unwrap();
    let intent = chain.handle(&create_test_envelope("IntentRequest")).unwrap();

    assert_eq!(launch.speech_text(), Some("launch"));
    assert_eq!(intent.speech_text(), Some("fallback"));
}

/// **Test: Interceptors run in registration order around the handler.**
///
/// **Expected:** request_a, request_b, handle, response_a, response_b.
#[test]
fn test_interceptors_run_in_order_around_handler() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_request_interceptor(Arc::new(RecordingRequestInterceptor { name: "a", log: log.clone() }))
        .add_request_interceptor(Arc::new(RecordingRequestInterceptor { name: "b", log: log.clone() }))
        .add_request_handler(Arc::new(NamedHandler { name: "only", log: log.clone() }))
        .add_response_interceptor(Arc::new(RecordingResponseInterceptor { name: "a", log: log.clone() }))
        .add_response_interceptor(Arc::new(RecordingResponseInterceptor { name: "b", log: log.clone() }));

    chain.handle(&create_test_envelope("LaunchRequest")).unwrap();

    assert_eq!(
        *log.lock().unwrap(),
        vec![
            "request_a",
            "request_b",
            "handle_only",
            "response_a:only",
            "response_b:only"
        ]
    );
}

/// **Test: A handler fault is replaced wholesale by the error handler's response.**
#[test]
fn test_handler_fault_routes_to_error_handler() {
    let seen: Log = Arc::new(Mutex::new(Vec::new()));
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_request_handler(Arc::new(FailingHandler))
        .add_error_handler(Arc::new(ApologyHandler { seen: seen.clone() }))
        .add_response_interceptor(Arc::new(RecordingResponseInterceptor { name: "out", log: log.clone() }));

    let response = chain.handle(&create_test_envelope("IntentRequest")).unwrap();

    assert_eq!(response.speech_text(), Some("sorry"));
    assert_eq!(response.reprompt_text(), Some("sorry"));
    assert_eq!(seen.lock().unwrap().len(), 1);
    assert!(seen.lock().unwrap()[0].contains("boom"));
    assert_eq!(*log.lock().unwrap(), vec!["response_out:sorry"]);
}

/// **Test: A handler fault with no error handler propagates the original error.**
#[test]
fn test_handler_fault_without_error_handler_propagates() {
    let chain = HandlerChain::new().add_request_handler(Arc::new(FailingHandler));

    let result = chain.handle(&create_test_envelope("IntentRequest"));

    assert!(matches!(
        result,
        Err(SkillError::Handler(HandlerError::Fault(ref msg))) if msg == "boom"
    ));
}

/// **Test: No handler matches and no error handler is registered; NoMatchingHandler is returned.**
#[test]
fn test_no_matching_handler_is_error() {
    let chain = HandlerChain::new().add_request_handler(Arc::new(LaunchOnly));

    let result = chain.handle(&create_test_envelope("SessionEndedRequest"));

    match result {
        Err(SkillError::NoMatchingHandler { request_type }) => {
            assert_eq!(request_type, "SessionEndedRequest");
        }
        other => panic!("expected NoMatchingHandler, got {:?}", other),
    }
}

/// **Test: A failing request interceptor stops dispatch before the handler runs.**
#[test]
fn test_request_interceptor_error_propagates() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let seen: Log = Arc::new(Mutex::new(Vec::new()));
    let chain = HandlerChain::new()
        .add_request_interceptor(Arc::new(FailingRequestInterceptor))
        .add_request_handler(Arc::new(NamedHandler { name: "never", log: log.clone() }))
        .add_error_handler(Arc::new(ApologyHandler { seen: seen.clone() }));

    let result = chain.handle(&create_test_envelope("LaunchRequest"));

    assert!(matches!(result, Err(SkillError::Interceptor(_))));
    assert!(log.lock().unwrap().is_empty());
    assert!(seen.lock().unwrap().is_empty());
}

#[test]
fn test_handler_count_and_default() {
    let chain = HandlerChain::default()
        .with_default_locale("de-DE")
        .add_request_handler(Arc::new(LaunchOnly));
    assert_eq!(chain.handler_count(), 1);
}

/// **Test: An unmodelled request type is reported by its wire name, not a placeholder.**
#[test]
fn test_no_matching_handler_reports_wire_type() {
    let chain = HandlerChain::new().add_request_handler(Arc::new(LaunchOnly));
    let envelope: RequestEnvelope = serde_json::from_value(json!({
        "request": { "type": "Connections.Response", "requestId": "r" }
    }))
    .unwrap();

    let result = chain.handle(&envelope);

    match result {
        Err(SkillError::NoMatchingHandler { request_type }) => {
            assert_eq!(request_type, "Connections.Response");
        }
        other => panic!("expected NoMatchingHandler, got {:?}", other),
    }
}

/// **Test: Handlers and interceptors behind `Arc<dyn ...>` report their concrete type names.**
#[test]
fn test_names_are_concrete_types() {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let handler: Arc<dyn RequestHandler> = Arc::new(LaunchOnly);
    let error_handler: Arc<dyn ErrorHandler> = Arc::new(ApologyHandler { seen: log.clone() });
    let request_interceptor: Arc<dyn RequestInterceptor> = Arc::new(FailingRequestInterceptor);
    let response_interceptor: Arc<dyn ResponseInterceptor> =
        Arc::new(RecordingResponseInterceptor { name: "out", log: log.clone() });

    assert!(handler.name().ends_with("LaunchOnly"));
    assert!(error_handler.name().ends_with("ApologyHandler"));
    assert!(request_interceptor.name().ends_with("FailingRequestInterceptor"));
    assert!(response_interceptor.name().ends_with("RecordingResponseInterceptor"));
}
