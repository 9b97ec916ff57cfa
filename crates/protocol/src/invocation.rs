//! A logical console call: operation plus positional arguments.

use serde::Serialize;
use serde_json::Value;

use crate::constants::Op;

/// One console call, before it is framed for the wire.
///
/// Arguments are passed through to the host unchanged; the bridge never
/// validates or reshapes them. Every browser console operation takes zero
/// or one argument, but the wire carries a list so the shim side stays
/// compatible with the variadic native functions.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub op: Op,
    pub args: Vec<Value>,
}

impl Invocation {
    /// A call with no arguments (`clear`, `trace`, unlabeled `groupEnd`).
    pub fn bare(op: Op) -> Self {
        Self { op, args: Vec::new() }
    }

    /// A call carrying a message string.
    pub fn message(op: Op, message: &str) -> Self {
        Self {
            op,
            args: vec![Value::String(message.to_owned())],
        }
    }

    /// A call with an optional label. An absent label sends no argument,
    /// addressing the host's default counter/group.
    pub fn labeled(op: Op, label: Option<&str>) -> Self {
        match label {
            Some(label) => Self::message(op, label),
            None => Self::bare(op),
        }
    }

    /// A call carrying one arbitrary serializable value (`dir`, `table`).
    pub fn value<T: Serialize + ?Sized>(op: Op, value: &T) -> Result<Self, serde_json::Error> {
        Ok(Self {
            op,
            args: vec![serde_json::to_value(value)?],
        })
    }
}
