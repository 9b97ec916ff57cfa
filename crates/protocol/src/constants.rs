//! Console operation names and wire limits.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Maximum WebSocket message size (1 MB). Frames above this are dropped.
pub const WS_MAX_MESSAGE_SIZE: usize = 1024 * 1024;

/// Timeout for a single invocation to be acknowledged by the host.
pub const WS_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Timeout for the WebSocket connection attempt.
pub const WS_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Interval between keepalive pings.
pub const WS_PING_PERIOD: Duration = Duration::from_secs(20);

/// How long to wait for any traffic before declaring the connection dead.
pub const WS_PONG_WAIT: Duration = Duration::from_secs(45);

/// A console operation, identified on the wire by the name of the
/// browser function it maps to (`"console.log"`, `"console.group"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Op {
    #[serde(rename = "console.log")]
    Log,
    #[serde(rename = "console.debug")]
    Debug,
    #[serde(rename = "console.error")]
    Error,
    #[serde(rename = "console.info")]
    Info,
    #[serde(rename = "console.warn")]
    Warn,
    #[serde(rename = "console.clear")]
    Clear,
    #[serde(rename = "console.count")]
    Count,
    #[serde(rename = "console.countReset")]
    CountReset,
    #[serde(rename = "console.dir")]
    Dir,
    #[serde(rename = "console.group")]
    Group,
    #[serde(rename = "console.groupCollapsed")]
    GroupCollapsed,
    #[serde(rename = "console.groupEnd")]
    GroupEnd,
    #[serde(rename = "console.table")]
    Table,
    #[serde(rename = "console.time")]
    Time,
    #[serde(rename = "console.timeEnd")]
    TimeEnd,
    #[serde(rename = "console.trace")]
    Trace,
}

impl Op {
    /// All operations, in wire-name order. Used by the wire-compat suite.
    pub const ALL: [Op; 16] = [
        Op::Log,
        Op::Debug,
        Op::Error,
        Op::Info,
        Op::Warn,
        Op::Clear,
        Op::Count,
        Op::CountReset,
        Op::Dir,
        Op::Group,
        Op::GroupCollapsed,
        Op::GroupEnd,
        Op::Table,
        Op::Time,
        Op::TimeEnd,
        Op::Trace,
    ];

    /// The wire name, i.e. the browser console function this maps to.
    pub const fn as_str(self) -> &'static str {
        match self {
            Op::Log => "console.log",
            Op::Debug => "console.debug",
            Op::Error => "console.error",
            Op::Info => "console.info",
            Op::Warn => "console.warn",
            Op::Clear => "console.clear",
            Op::Count => "console.count",
            Op::CountReset => "console.countReset",
            Op::Dir => "console.dir",
            Op::Group => "console.group",
            Op::GroupCollapsed => "console.groupCollapsed",
            Op::GroupEnd => "console.groupEnd",
            Op::Table => "console.table",
            Op::Time => "console.time",
            Op::TimeEnd => "console.timeEnd",
            Op::Trace => "console.trace",
        }
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
