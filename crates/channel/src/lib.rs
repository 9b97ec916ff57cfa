//! Interop channel to the host browser console.
//!
//! The [`InteropChannel`] trait is the seam between the typed console
//! façade and the transport: one awaitable `invoke` per console call,
//! completing when the host has acknowledged it. [`WsChannel`] is the
//! WebSocket-backed implementation used in production; tests substitute
//! a capturing fake.

mod error;
pub(crate) mod pumps;
pub mod ws;

pub use error::ChannelError;
pub use ws::{ChannelConfig, WsChannel};

use std::future::Future;

use webconsole_protocol::Invocation;

/// Transport for console invocations.
///
/// `invoke` resolves once the host has acknowledged the call, surfacing
/// host-side failures as [`ChannelError::Host`]. Callers that do not
/// care about the outcome can still discard the future's result, but the
/// completion signal is always available.
pub trait InteropChannel: Send + Sync + 'static {
    fn invoke(
        &self,
        call: Invocation,
    ) -> impl Future<Output = Result<(), ChannelError>> + Send;
}
