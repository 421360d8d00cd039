use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::str;

use tracing::{error, info, warn};

use crate::transport::MessageHandler;

use super::DISPATCH_TARGET;
use super::actions::Actions;
use super::command::Command;
use super::errors::{ActionError, DispatchError};
use super::outcome::{ActionResult, Outcome};

/// Routes decoded payloads to [`Actions`].
///
/// The dispatcher holds no mutable state, so a single instance can serve every
/// transport worker concurrently.
#[derive(Debug, Clone)]
pub struct Dispatcher<A> {
    actions: A,
}

impl<A> Dispatcher<A>
where
    A: Actions,
{
    /// Builds a dispatcher around the supplied actions.
    #[must_use]
    pub const fn new(actions: A) -> Self {
        Self { actions }
    }

    /// Decodes and routes one payload.
    #[must_use]
    pub fn dispatch(&self, payload: &[u8]) -> Outcome {
        let text = match str::from_utf8(payload) {
            Ok(text) => text,
            Err(source) => {
                let failure = DispatchError::Decode {
                    len: payload.len(),
                    source,
                };
                error!(
                    target: DISPATCH_TARGET,
                    error = %failure,
                    "failed to decode message"
                );
                return Outcome::Failed(failure);
            }
        };

        info!(target: DISPATCH_TARGET, payload = text, "received message");

        match text.parse::<Command>() {
            Ok(command) => self.run(command),
            Err(_) => {
                warn!(
                    target: DISPATCH_TARGET,
                    payload = text,
                    "unknown message received"
                );
                Outcome::Completed(ActionResult::Unrecognized)
            }
        }
    }

    fn run(&self, command: Command) -> Outcome {
        let attempt = panic::catch_unwind(AssertUnwindSafe(|| self.perform(command)));
        let failure = match attempt {
            Ok(Ok(())) => return Outcome::Completed(ActionResult::from(command)),
            Ok(Err(source)) => DispatchError::Action(source),
            Err(payload) => DispatchError::Panicked {
                command,
                message: panic_message(payload.as_ref()),
            },
        };
        error!(
            target: DISPATCH_TARGET,
            %command,
            error = %failure,
            "failed to process message"
        );
        Outcome::Failed(failure)
    }

    fn perform(&self, command: Command) -> Result<(), ActionError> {
        match command {
            Command::Start => self.actions.start(),
            Command::Stop => self.actions.stop(),
        }
    }
}

/// Renders a panic payload, which is a `&str` or `String` for `panic!` calls.
fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&'static str>()
        .map(|text| (*text).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned())
}

impl<A> MessageHandler for Dispatcher<A>
where
    A: Actions,
{
    fn handle(&self, payload: &[u8]) -> Outcome {
        self.dispatch(payload)
    }
}
