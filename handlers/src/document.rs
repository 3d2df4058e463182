//! Static documents the skill renders: the visual sound board and the hosted audio clips.

use serde_json::Value;
use skill_core::{Result, SkillError};
use std::sync::Arc;
use tracing::debug;

/// APL version the board document targets.
pub const APL_VERSION: &str = "1.4";

const SOUNDBOARD_JSON: &str = include_str!("../documents/SoundBoard.json");

/// Parses a visual document and checks it is an APL document.
pub fn parse_visual_document(raw: &str) -> Result<Value> {
    let document: Value = serde_json::from_str(raw)
        .map_err(|e| SkillError::Document(format!("invalid visual document JSON: {}", e)))?;
    match document.get("type").and_then(Value::as_str) {
        Some("APL") => Ok(document),
        other => Err(SkillError::Document(format!(
            "expected document type APL, found {:?}",
            other
        ))),
    }
}

/// Loads the bundled sound board document. Call once at startup and share the result.
pub fn load_soundboard_document() -> Result<Arc<Value>> {
    let document = parse_visual_document(SOUNDBOARD_JSON)?;
    debug!(bytes = SOUNDBOARD_JSON.len(), "Loaded sound board document");
    Ok(Arc::new(document))
}

/// Link to a hosted audio (APLA) document by name.
pub fn audio_document_src(name: &str) -> String {
    format!("doc://alexa/apla/documents/{}", name)
}
