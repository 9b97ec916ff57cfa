//! Scoped console group handle.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::warn;

use webconsole_channel::{ChannelError, InteropChannel};
use webconsole_protocol::{Invocation, Op};

/// Handle for one open console group.
///
/// Returned by [`Console::group`](crate::Console::group) and
/// [`Console::group_collapsed`](crate::Console::group_collapsed). The
/// group is ended with the same label it was started with (or none), and
/// at most once: a one-shot flag is checked-and-set before the end call
/// is issued, so a second release is a no-op.
///
/// [`end`](Self::end) is the primary path — awaitable, completing once
/// the host acknowledged the close. Dropping an unended scope spawns the
/// end call on the current runtime as a fallback, so early returns and
/// panics still close the group.
pub struct GroupScope<C: InteropChannel> {
    channel: Arc<C>,
    label: Option<String>,
    closed: AtomicBool,
}

impl<C: InteropChannel> std::fmt::Debug for GroupScope<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupScope")
            .field("label", &self.label)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}

impl<C: InteropChannel> GroupScope<C> {
    pub(crate) fn new(channel: Arc<C>, label: Option<String>) -> Self {
        Self {
            channel,
            label,
            closed: AtomicBool::new(false),
        }
    }

    /// The label this group was started with.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Ends the group, forwarding the stored label (or no argument when
    /// the group was started unlabeled). Idempotent: only the first call
    /// reaches the host, later calls return `Ok(())`.
    pub async fn end(&self) -> Result<(), ChannelError> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }
        self.channel
            .invoke(Invocation::labeled(Op::GroupEnd, self.label.as_deref()))
            .await
    }
}

impl<C: InteropChannel> Drop for GroupScope<C> {
    fn drop(&mut self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        let call = Invocation::labeled(Op::GroupEnd, self.label.as_deref());
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let channel = Arc::clone(&self.channel);
                handle.spawn(async move {
                    if let Err(e) = channel.invoke(call).await {
                        warn!("failed to close console group on drop: {e}");
                    }
                });
            }
            Err(_) => {
                warn!(label = ?self.label, "group scope dropped outside a runtime; group left open");
            }
        }
    }
}
