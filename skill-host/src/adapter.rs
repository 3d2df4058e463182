//! Hosting adapter: turns one inbound JSON envelope into one outbound JSON envelope.

use handler_chain::HandlerChain;
use skill_core::{RequestEnvelope, ResponseEnvelope, Result};
use tracing::{instrument, warn};

use crate::config::SkillConfig;

const RESPONSE_VERSION: &str = "1.0";

pub struct SkillAdapter {
    chain: HandlerChain,
    user_agent: String,
}

impl SkillAdapter {
    pub fn new(chain: HandlerChain, config: &SkillConfig) -> Self {
        Self {
            chain,
            user_agent: config.user_agent.clone(),
        }
    }

    /// Dispatches a parsed envelope and wraps the response for the host.
    #[instrument(skip(self, envelope))]
    pub fn invoke(&self, envelope: &RequestEnvelope) -> Result<ResponseEnvelope> {
        let response = self.chain.handle(envelope)?;
        let session_attributes = envelope
            .session
            .as_ref()
            .map(|s| s.attributes.clone())
            .unwrap_or_default();
        Ok(ResponseEnvelope {
            version: RESPONSE_VERSION.to_string(),
            user_agent: Some(self.user_agent.clone()),
            session_attributes,
            response,
        })
    }

    /// Parses `raw`, dispatches it, and serializes the response envelope.
    pub fn invoke_json(&self, raw: &str) -> Result<String> {
        let envelope: RequestEnvelope = serde_json::from_str(raw).map_err(|e| {
            warn!(error = %e, "Rejected malformed request envelope");
            e
        })?;
        let response = self.invoke(&envelope)?;
        Ok(serde_json::to_string(&response)?)
    }
}
