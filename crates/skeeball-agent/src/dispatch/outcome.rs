use super::command::Command;
use super::errors::DispatchError;

/// Observable result of a successfully processed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionResult {
    /// The start action ran.
    Started,
    /// The stop action ran.
    Stopped,
    /// The payload was text but not a known command; nothing ran.
    Unrecognized,
}

impl From<Command> for ActionResult {
    fn from(command: Command) -> Self {
        match command {
            Command::Start => Self::Started,
            Command::Stop => Self::Stopped,
        }
    }
}

/// Acknowledgement reported back to the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AckDecision {
    /// Processing succeeded; the message is not redelivered.
    Ack,
    /// Processing failed; the message is eligible for redelivery.
    Nack,
}

/// Result of handling one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The message was processed, including unrecognised text.
    Completed(ActionResult),
    /// The message could not be processed.
    Failed(DispatchError),
}

impl Outcome {
    /// Maps the outcome to the acknowledgement the transport must send.
    #[must_use]
    pub const fn decision(&self) -> AckDecision {
        match self {
            Self::Completed(_) => AckDecision::Ack,
            Self::Failed(_) => AckDecision::Nack,
        }
    }

    /// Returns the action result when processing succeeded.
    #[must_use]
    pub const fn result(&self) -> Option<ActionResult> {
        match self {
            Self::Completed(result) => Some(*result),
            Self::Failed(_) => None,
        }
    }
}
