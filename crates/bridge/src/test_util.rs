//! Fake channels for façade tests.

use std::future::{Future, ready};
use std::sync::{Arc, Mutex};

use webconsole_channel::{ChannelError, InteropChannel};
use webconsole_protocol::Invocation;

/// Captures every invocation and acknowledges immediately.
#[derive(Clone, Default)]
pub(crate) struct RecordingChannel {
    calls: Arc<Mutex<Vec<Invocation>>>,
}

impl RecordingChannel {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The invocations seen so far, in call order.
    pub(crate) fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().unwrap().clone()
    }
}

impl InteropChannel for RecordingChannel {
    fn invoke(
        &self,
        call: Invocation,
    ) -> impl Future<Output = Result<(), ChannelError>> + Send {
        self.calls.lock().unwrap().push(call);
        ready(Ok(()))
    }
}

/// Rejects every invocation with a host error.
pub(crate) struct FailingChannel;

impl InteropChannel for FailingChannel {
    fn invoke(
        &self,
        _call: Invocation,
    ) -> impl Future<Output = Result<(), ChannelError>> + Send {
        ready(Err(ChannelError::Host {
            code: 500,
            message: "host rejected call".into(),
        }))
    }
}
