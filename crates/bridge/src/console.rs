//! The console façade.

use std::sync::Arc;

use serde::Serialize;

use webconsole_channel::{ChannelError, InteropChannel};
use webconsole_protocol::{Invocation, Op};

use crate::group::GroupScope;

/// Typed surface over the host browser's console.
///
/// Stateless beyond the shared channel handle: every method performs
/// exactly one channel invocation with its arguments passed through
/// unchanged, and resolves once the host has acknowledged the call.
/// One instance is typically created at startup and shared for the
/// application's lifetime; cloning is cheap.
pub struct Console<C: InteropChannel> {
    channel: Arc<C>,
}

impl<C: InteropChannel> Clone for Console<C> {
    fn clone(&self) -> Self {
        Self {
            channel: Arc::clone(&self.channel),
        }
    }
}

impl<C: InteropChannel> Console<C> {
    /// Wraps a channel in a console façade.
    pub fn new(channel: C) -> Self {
        Self {
            channel: Arc::new(channel),
        }
    }

    /// Wraps an already-shared channel.
    pub fn from_shared(channel: Arc<C>) -> Self {
        Self { channel }
    }

    // --- Emit-message ------------------------------------------------------

    /// `console.log(message)`
    pub async fn log(&self, message: &str) -> Result<(), ChannelError> {
        self.channel.invoke(Invocation::message(Op::Log, message)).await
    }

    /// `console.debug(message)`
    pub async fn debug(&self, message: &str) -> Result<(), ChannelError> {
        self.channel.invoke(Invocation::message(Op::Debug, message)).await
    }

    /// `console.error(message)`
    pub async fn error(&self, message: &str) -> Result<(), ChannelError> {
        self.channel.invoke(Invocation::message(Op::Error, message)).await
    }

    /// `console.info(message)`
    pub async fn info(&self, message: &str) -> Result<(), ChannelError> {
        self.channel.invoke(Invocation::message(Op::Info, message)).await
    }

    /// `console.warn(message)`
    pub async fn warn(&self, message: &str) -> Result<(), ChannelError> {
        self.channel.invoke(Invocation::message(Op::Warn, message)).await
    }

    /// `console.trace()` — the host prints a stack trace at the call site.
    pub async fn trace(&self) -> Result<(), ChannelError> {
        self.channel.invoke(Invocation::bare(Op::Trace)).await
    }

    // --- State-reset -------------------------------------------------------

    /// `console.clear()`
    pub async fn clear(&self) -> Result<(), ChannelError> {
        self.channel.invoke(Invocation::bare(Op::Clear)).await
    }

    // --- Counters ----------------------------------------------------------

    /// `console.count(label?)` — an absent label addresses the host's
    /// default counter. Counter state lives in the host, not here.
    pub async fn count(&self, label: Option<&str>) -> Result<(), ChannelError> {
        self.channel.invoke(Invocation::labeled(Op::Count, label)).await
    }

    /// `console.countReset(label?)`
    pub async fn count_reset(&self, label: Option<&str>) -> Result<(), ChannelError> {
        self.channel
            .invoke(Invocation::labeled(Op::CountReset, label))
            .await
    }

    // --- Inspection --------------------------------------------------------

    /// `console.dir(value)` — asks the host to render one value.
    pub async fn dir<T: Serialize>(&self, value: &T) -> Result<(), ChannelError> {
        self.channel.invoke(Invocation::value(Op::Dir, value)?).await
    }

    /// `console.table(rows)` — renders a sequence, element order preserved.
    pub async fn table<T: Serialize>(&self, rows: &[T]) -> Result<(), ChannelError> {
        self.channel.invoke(Invocation::value(Op::Table, rows)?).await
    }

    // --- Timers ------------------------------------------------------------

    /// `console.time(label)` — starts a named timer in the host.
    pub async fn time(&self, label: &str) -> Result<(), ChannelError> {
        self.channel.invoke(Invocation::message(Op::Time, label)).await
    }

    /// `console.timeEnd(label)` — stops it and prints the elapsed time.
    pub async fn time_end(&self, label: &str) -> Result<(), ChannelError> {
        self.channel
            .invoke(Invocation::message(Op::TimeEnd, label))
            .await
    }

    // --- Groups ------------------------------------------------------------

    /// `console.group(label?)` — begins a nesting level and returns a
    /// scope that ends it. Keep the scope alive for the duration of the
    /// grouped output and call [`GroupScope::end`] when done; dropping
    /// it unended closes the group best-effort.
    pub async fn group(&self, label: Option<&str>) -> Result<GroupScope<C>, ChannelError> {
        self.channel.invoke(Invocation::labeled(Op::Group, label)).await?;
        Ok(GroupScope::new(
            Arc::clone(&self.channel),
            label.map(String::from),
        ))
    }

    /// `console.groupCollapsed(label?)` — like [`group`](Self::group) but
    /// the host renders the level collapsed by default.
    pub async fn group_collapsed(
        &self,
        label: Option<&str>,
    ) -> Result<GroupScope<C>, ChannelError> {
        self.channel
            .invoke(Invocation::labeled(Op::GroupCollapsed, label))
            .await?;
        Ok(GroupScope::new(
            Arc::clone(&self.channel),
            label.map(String::from),
        ))
    }

    /// `console.groupEnd(label?)` — ends the innermost open level
    /// directly, bypassing scope tracking. Label validation, if any, is
    /// the host's business.
    pub async fn group_end(&self, label: Option<&str>) -> Result<(), ChannelError> {
        self.channel
            .invoke(Invocation::labeled(Op::GroupEnd, label))
            .await
    }
}
