//! Capability probe over the device's supported-interfaces map.

use crate::types::RequestEnvelope;

/// Interface name for the visual rendering runtime.
pub const APL_INTERFACE: &str = "Alexa.Presentation.APL";

/// True when the device lists `interface` with a non-null descriptor.
/// A missing context, device, map, or key all mean "unsupported".
pub fn supports_interface(envelope: &RequestEnvelope, interface: &str) -> bool {
    envelope
        .context
        .as_ref()
        .and_then(|c| c.system.as_ref())
        .and_then(|s| s.device.as_ref())
        .and_then(|d| d.supported_interfaces.get(interface))
        .is_some_and(|descriptor| !descriptor.is_null())
}

/// Whether the requesting device can render APL documents.
pub fn supports_apl(envelope: &RequestEnvelope) -> bool {
    supports_interface(envelope, APL_INTERFACE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn envelope_with_context(context: Value) -> RequestEnvelope {
        serde_json::from_value(json!({
            "context": context,
            "request": { "type": "LaunchRequest", "requestId": "req-1" }
        }))
        .unwrap()
    }

    #[test]
    fn test_apl_present() {
        let envelope = envelope_with_context(json!({
            "System": { "device": { "supportedInterfaces": {
                "Alexa.Presentation.APL": { "runtime": { "maxVersion": "1.4" } }
            } } }
        }));
        assert!(supports_apl(&envelope));
    }

    #[test]
    fn test_apl_empty_descriptor_counts_as_present() {
        let envelope = envelope_with_context(json!({
            "System": { "device": { "supportedInterfaces": { "Alexa.Presentation.APL": {} } } }
        }));
        assert!(supports_apl(&envelope));
    }

    #[test]
    fn test_apl_null_descriptor_is_unsupported() {
        let envelope = envelope_with_context(json!({
            "System": { "device": { "supportedInterfaces": { "Alexa.Presentation.APL": null } } }
        }));
        assert!(!supports_apl(&envelope));
    }

    #[test]
    fn test_missing_key_is_unsupported() {
        let envelope = envelope_with_context(json!({
            "System": { "device": { "supportedInterfaces": { "AudioPlayer": {} } } }
        }));
        assert!(!supports_apl(&envelope));
        assert!(supports_interface(&envelope, "AudioPlayer"));
    }

    #[test]
    fn test_missing_map_device_or_context_is_unsupported() {
        assert!(!supports_apl(&envelope_with_context(json!({ "System": { "device": {} } }))));
        assert!(!supports_apl(&envelope_with_context(json!({ "System": {} }))));
        assert!(!supports_apl(&envelope_with_context(json!({}))));

        let bare: RequestEnvelope = serde_json::from_value(json!({
            "request": { "type": "LaunchRequest", "requestId": "req-2" }
        }))
        .unwrap();
        assert!(!supports_apl(&bare));
    }
}
