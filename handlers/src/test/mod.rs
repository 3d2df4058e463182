//! Unit test module
//!
//! Handler unit tests live here, separate from source files.
//! Tests build request envelopes with `serde_json::json!` and call handlers through the public traits.


use std::io;
use std::sync::{Arc, Mutex};

use serde_json::{json, Value};
use skill_core::RequestEnvelope;

/// In-memory log sink for a scoped fmt subscriber.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a debug-level subscriber and returns its result with everything it logged.
pub(crate) fn with_debug_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let out = tracing::subscriber::with_default(subscriber, f);
    let text = String::from_utf8_lossy(&logs.0.lock().unwrap()).into_owned();
    (out, text)
}

pub(crate) fn envelope(request: Value, context: Option<Value>) -> RequestEnvelope {
    let mut raw = json!({ "version": "1.0", "request": request });
    if let Some(context) = context {
        raw["context"] = context;
    }
    serde_json::from_value(raw).unwrap()
}

pub(crate) fn launch_request(with_apl: bool) -> RequestEnvelope {
    let interfaces = if with_apl {
        json!({ "Alexa.Presentation.APL": { "runtime": { "maxVersion": "1.4" } } })
    } else {
        json!({})
    };
    envelope(
        json!({ "type": "LaunchRequest", "requestId": "req-launch", "locale": "en-US" }),
        Some(json!({ "System": { "device": { "supportedInterfaces": interfaces } } })),
    )
}

pub(crate) fn intent_request(name: &str, locale: &str) -> RequestEnvelope {
    envelope(
        json!({
            "type": "IntentRequest",
            "requestId": "req-intent",
            "locale": locale,
            "intent": { "name": name, "confirmationStatus": "NONE" }
        }),
        None,
    )
}

pub(crate) fn user_event(source_id: &str) -> RequestEnvelope {
    envelope(
        json!({
            "type": "Alexa.Presentation.APL.UserEvent",
            "requestId": "req-event",
            "locale": "en-US",
            "token": "soundboard",
            "source": { "type": "TouchWrapper", "handler": "Press", "id": source_id },
            "arguments": []
        }),
        None,
    )
}

pub(crate) fn session_ended(reason: &str) -> RequestEnvelope {
    envelope(
        json!({
            "type": "SessionEndedRequest",
            "requestId": "req-ended",
            "locale": "en-US",
            "reason": reason
        }),
        None,
    )
}
