//! Wire protocol between the application and the browser-side console shim.
//!
//! An [`Invocation`] names a console operation and carries its positional
//! JSON arguments. The channel wraps it in a [`Request`] envelope with a
//! correlation id; the shim answers with an [`Ack`] carrying either
//! success or a [`HostError`].

pub mod constants;
pub mod envelope;
pub mod invocation;

pub use constants::Op;
pub use envelope::{Ack, HostError, Request};
pub use invocation::Invocation;
