//! Opaque click-event payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An event payload attached to a clickable display value.
///
/// The payload is carried verbatim on the wire and interpreted by the
/// renderer. This crate never looks inside it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct AnyEvent(serde_json::Value);

impl AnyEvent {
    /// Wrap a raw JSON payload.
    pub fn new(payload: serde_json::Value) -> Self {
        Self(payload)
    }

    /// Access the raw payload.
    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }
}

impl From<serde_json::Value> for AnyEvent {
    fn from(payload: serde_json::Value) -> Self {
        Self(payload)
    }
}
