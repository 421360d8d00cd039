//! Subscription transport for inbound commands.
//!
//! The agent consumes a managed publish/subscribe service through a narrow
//! contract: open a subscription with a [`MessageHandler`], stop it, and wait
//! for it to finish. Redelivery, flow control and delivery concurrency stay
//! with the service client. The production implementation is
//! [`PubSubTransport`].

mod errors;
mod pubsub;
pub(crate) mod settle;

use std::sync::Arc;

use skeeball_config::SubscriptionPath;

use crate::dispatch::Outcome;

pub use self::errors::TransportError;
pub use self::pubsub::{PubSubSubscription, PubSubTransport};

pub(crate) const TRANSPORT_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::transport");

/// Processes the payload of a single delivered message.
///
/// The transport acknowledges the message according to
/// [`Outcome::decision`], exactly once per delivery. Handlers may be invoked
/// concurrently.
pub trait MessageHandler: Send + Sync {
    /// Handles one payload.
    fn handle(&self, payload: &[u8]) -> Outcome;
}

impl<T> MessageHandler for Arc<T>
where
    T: MessageHandler + ?Sized,
{
    fn handle(&self, payload: &[u8]) -> Outcome {
        (**self).handle(payload)
    }
}

/// Callback invoked once when a subscription's receive loop ends.
///
/// Receives `Ok(())` when the loop stopped cleanly (including after
/// [`Subscription::shutdown`]) and an error when the receive loop gave up.
pub type ExitNotifier = Box<dyn FnOnce(Result<(), TransportError>) + Send + 'static>;

/// Opens subscriptions on a publish/subscribe service.
pub trait Transport {
    /// Handle to the running subscription.
    type Subscription: Subscription;

    /// Starts delivering messages from `path` to `handler`.
    ///
    /// Connection and authentication failures are reported synchronously.
    /// Errors that end the receive loop are reported through `on_exit`.
    /// Implementations may retry transient stream errors internally, in
    /// which case they are never surfaced.
    fn subscribe(
        &self,
        path: &SubscriptionPath,
        handler: Arc<dyn MessageHandler>,
        on_exit: ExitNotifier,
    ) -> Result<Self::Subscription, TransportError>;
}

/// Handle to a running subscription.
pub trait Subscription: Send {
    /// Asks the subscription to stop pulling new messages.
    fn shutdown(&self);

    /// Waits for the receive loop to finish.
    fn join(self) -> Result<(), TransportError>
    where
        Self: Sized;
}
