//! Acknowledgement of delivered messages.

use std::fmt::Display;
use std::future::Future;

use tracing::warn;

use crate::dispatch::{AckDecision, Outcome};

use super::{MessageHandler, TRANSPORT_TARGET};

/// A delivered message that must be acknowledged exactly once.
pub(crate) trait Delivery {
    /// Failure reported by the service when settling the message.
    type Error: Display;

    /// Service-assigned message identifier.
    fn id(&self) -> &str;

    /// Message body handed to the [`MessageHandler`].
    fn payload(&self) -> &[u8];

    /// Acknowledges the message so it is not redelivered.
    fn ack(self) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Rejects the message, making it eligible for redelivery.
    fn nack(self) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

/// Runs `handler` on the delivery and settles it according to the outcome.
///
/// Settlement failures are logged and otherwise ignored; the service
/// redelivers anything it did not record as acknowledged.
pub(crate) async fn settle<D>(handler: &dyn MessageHandler, delivery: D) -> Outcome
where
    D: Delivery,
{
    let outcome = handler.handle(delivery.payload());
    let decision = outcome.decision();
    let message_id = delivery.id().to_owned();
    let settled = match decision {
        AckDecision::Ack => delivery.ack().await,
        AckDecision::Nack => delivery.nack().await,
    };
    if let Err(error) = settled {
        warn!(
            target: TRANSPORT_TARGET,
            %message_id,
            ?decision,
            %error,
            "failed to settle message; the service will redeliver it"
        );
    }
    outcome
}
