//! Typed façade over the host browser's console.
//!
//! [`Console`] exposes one method per console capability, each a single
//! delegation through an [`InteropChannel`](webconsole_channel::InteropChannel).
//! Group starts return a [`GroupScope`] that closes the nesting level
//! exactly once.

mod console;
mod group;

#[cfg(test)]
pub(crate) mod test_util;

pub use console::Console;
pub use group::GroupScope;
