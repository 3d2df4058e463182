//! Core types: request envelope, request bodies, device context, response, and directives.
//!
//! Field names follow the platform's camelCase JSON; absent optional sections deserialize to `None`
//! or empty collections rather than failing.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::ser::Error as _;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Inbound envelope delivered by the host for one invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    pub request: Request,
}

fn default_version() -> String {
    "1.0".to_string()
}

/// Session block. Only the pieces the skill echoes back are modelled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(default)]
    pub new: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

/// Device context sent alongside the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default, skip_serializing_if = "Option::is_none")]
    pub system: Option<SystemState>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SystemState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Interface name to interface descriptor. A `null` descriptor counts as unsupported.
    #[serde(default)]
    pub supported_interfaces: HashMap<String, Value>,
}

/// Request fields common to every request type, plus the type-specific body.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "RawRequest")]
pub struct Request {
    pub request_id: String,
    pub timestamp: Option<DateTime<Utc>>,
    pub locale: Option<String>,
    pub body: RequestBody,
}

/// Wire shape of a request: the `type` string kept verbatim, type-specific fields left in `rest`.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequest {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    locale: Option<String>,
    #[serde(flatten)]
    rest: Map<String, Value>,
}

impl TryFrom<RawRequest> for Request {
    type Error = serde_json::Error;

    fn try_from(raw: RawRequest) -> Result<Self, Self::Error> {
        let body = if RequestBody::is_modelled(&raw.kind) {
            let mut fields = raw.rest;
            fields.insert("type".to_string(), Value::String(raw.kind));
            serde_json::from_value(Value::Object(fields))?
        } else {
            RequestBody::Other {
                kind: raw.kind,
                fields: raw.rest,
            }
        };
        Ok(Self {
            request_id: raw.request_id,
            timestamp: raw.timestamp,
            locale: raw.locale,
            body,
        })
    }
}

impl Serialize for Request {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let (kind, rest) = match &self.body {
            RequestBody::Other { kind, fields } => (kind.clone(), fields.clone()),
            body => match serde_json::to_value(body).map_err(S::Error::custom)? {
                Value::Object(mut fields) => {
                    let kind = match fields.remove("type") {
                        Some(Value::String(kind)) => kind,
                        _ => body.type_name().to_string(),
                    };
                    (kind, fields)
                }
                _ => return Err(S::Error::custom("request body did not serialize to an object")),
            },
        };
        RawRequest {
            kind,
            request_id: self.request_id.clone(),
            timestamp: self.timestamp,
            locale: self.locale.clone(),
            rest,
        }
        .serialize(serializer)
    }
}

pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";
pub const USER_EVENT: &str = "Alexa.Presentation.APL.UserEvent";
pub const SESSION_ENDED_REQUEST: &str = "SessionEndedRequest";

/// Request body, discriminated by the wire `type` field.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RequestBody {
    LaunchRequest,
    IntentRequest {
        intent: Intent,
    },
    #[serde(rename = "Alexa.Presentation.APL.UserEvent")]
    UserEvent {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        source: Option<UserEventSource>,
        #[serde(default)]
        arguments: Vec<Value>,
    },
    SessionEndedRequest {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        reason: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        error: Option<Value>,
    },
    /// A request type the skill does not model, with its wire type and remaining fields as received.
    #[serde(skip)]
    Other {
        kind: String,
        fields: Map<String, Value>,
    },
}

impl RequestBody {
    /// Wire name of the request type, as received for unmodelled types.
    pub fn type_name(&self) -> &str {
        match self {
            RequestBody::LaunchRequest => LAUNCH_REQUEST,
            RequestBody::IntentRequest { .. } => INTENT_REQUEST,
            RequestBody::UserEvent { .. } => USER_EVENT,
            RequestBody::SessionEndedRequest { .. } => SESSION_ENDED_REQUEST,
            RequestBody::Other { kind, .. } => kind,
        }
    }

    fn is_modelled(kind: &str) -> bool {
        matches!(
            kind,
            LAUNCH_REQUEST | INTENT_REQUEST | USER_EVENT | SESSION_ENDED_REQUEST
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub slots: Map<String, Value>,
}

/// Component that raised a UI user event (e.g. a touch wrapper on the board).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserEventSource {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub handler: Option<String>,
}

/// SSML speech output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
}

impl OutputSpeech {
    /// Wraps plain text in `<speak>` unless it is already wrapped.
    pub fn ssml(text: &str) -> Self {
        let trimmed = text.trim();
        let ssml = if trimmed.starts_with("<speak>") && trimmed.ends_with("</speak>") {
            trimmed.to_string()
        } else {
            format!("<speak>{}</speak>", text)
        };
        OutputSpeech::Ssml { ssml }
    }

    /// Speech text without the `<speak>` wrapper.
    pub fn text(&self) -> &str {
        let OutputSpeech::Ssml { ssml } = self;
        ssml.strip_prefix("<speak>")
            .and_then(|s| s.strip_suffix("</speak>"))
            .unwrap_or(ssml.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

/// Document carried by a render directive: inline JSON or a link to a hosted document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DirectiveDocument {
    Link(DocumentLink),
    Inline(Value),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DocumentLink {
    Link { src: String },
}

impl DirectiveDocument {
    pub fn link(src: impl Into<String>) -> Self {
        DirectiveDocument::Link(DocumentLink::Link { src: src.into() })
    }

    /// Link target when this is a remote document.
    pub fn src(&self) -> Option<&str> {
        match self {
            DirectiveDocument::Link(DocumentLink::Link { src }) => Some(src),
            DirectiveDocument::Inline(_) => None,
        }
    }
}

/// Rendering instruction attached to a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    /// Visual (APL) document.
    #[serde(rename = "Alexa.Presentation.APL.RenderDocument")]
    RenderVisualDocument {
        token: String,
        version: String,
        document: DirectiveDocument,
        #[serde(default)]
        datasources: Map<String, Value>,
    },
    /// Audio (APLA) document.
    #[serde(rename = "Alexa.Presentation.APLA.RenderDocument")]
    RenderAudioDocument {
        token: String,
        document: DirectiveDocument,
        #[serde(default)]
        datasources: Map<String, Value>,
    },
}

impl Directive {
    pub fn token(&self) -> &str {
        match self {
            Directive::RenderVisualDocument { token, .. }
            | Directive::RenderAudioDocument { token, .. } => token,
        }
    }
}

/// Outbound response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

impl Response {
    /// Spoken text without SSML wrapper.
    pub fn speech_text(&self) -> Option<&str> {
        self.output_speech.as_ref().map(OutputSpeech::text)
    }

    pub fn reprompt_text(&self) -> Option<&str> {
        self.reprompt.as_ref().map(|r| r.output_speech.text())
    }

    /// Whether this response closes the session (only an explicit `false` keeps it open).
    pub fn ends_session(&self) -> bool {
        self.should_end_session != Some(false)
    }

    pub fn is_empty(&self) -> bool {
        self.output_speech.is_none() && self.reprompt.is_none() && self.directives.is_empty()
    }
}

/// Outbound envelope returned to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(default)]
    pub session_attributes: Map<String, Value>,
    pub response: Response,
}
