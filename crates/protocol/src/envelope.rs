//! Request/ack envelopes for the interop channel.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::constants::Op;
use crate::invocation::Invocation;

/// Error details reported by the host shim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostError {
    pub code: i32,
    pub message: String,
}

/// Envelope carrying one invocation to the host.
///
/// `args` is omitted from the JSON when empty, so no-argument calls like
/// `console.clear` serialize to `{"id": ..., "op": "console.clear"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: String,
    pub op: Op,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub args: Vec<Value>,
}

impl Request {
    /// Frames an invocation with the given correlation id.
    pub fn new(id: impl Into<String>, call: Invocation) -> Self {
        Self {
            id: id.into(),
            op: call.op,
            args: call.args,
        }
    }
}

/// Acknowledgment from the host: success, or an error for the request id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ack {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<HostError>,
}

impl Ack {
    /// A success acknowledgment for the given request.
    pub fn ok(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            error: None,
        }
    }

    /// An error acknowledgment.
    pub fn error(id: impl Into<String>, code: i32, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            error: Some(HostError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Converts into a result, surfacing the host error if present.
    pub fn into_result(self) -> Result<(), HostError> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
