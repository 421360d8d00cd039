//! Inbound message dispatch.
//!
//! Each Pub/Sub message carries a plain-text command. The [`Dispatcher`]
//! decodes the payload, routes it by exact match to an [`Actions`]
//! implementation, and returns an [`Outcome`]. The transport derives the
//! acknowledgement from the outcome via [`Outcome::decision`]:
//!
//! | payload                  | outcome                   | decision |
//! |--------------------------|---------------------------|----------|
//! | `start`                  | `Completed(Started)`      | ack      |
//! | `stop`                   | `Completed(Stopped)`      | ack      |
//! | any other UTF-8 text     | `Completed(Unrecognized)` | ack      |
//! | invalid UTF-8            | `Failed(Decode)`          | nack     |
//! | action reported an error | `Failed(Action)`          | nack     |
//! | action panicked          | `Failed(Panicked)`        | nack     |
//!
//! Unknown text is acknowledged so that commands this agent does not
//! understand yet are not redelivered forever.

mod actions;
mod command;
mod dispatcher;
mod errors;
mod outcome;

pub use self::actions::{Actions, LoggingActions};
pub use self::command::Command;
pub use self::dispatcher::Dispatcher;
pub use self::errors::{ActionError, DispatchError};
pub use self::outcome::{AckDecision, ActionResult, Outcome};

pub(crate) const DISPATCH_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::dispatch");
