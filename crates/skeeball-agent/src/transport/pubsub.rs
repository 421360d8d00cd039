//! Google Cloud Pub/Sub implementation of the subscription transport.
//!
//! The client library is asynchronous, so each subscription owns a Tokio
//! runtime driven from a dedicated thread. The rest of the agent stays
//! synchronous and interacts with the subscription through
//! [`PubSubSubscription`].

use std::future::Future;
use std::sync::Arc;
use std::thread;

use google_cloud_pubsub::client::{Client, ClientConfig};
use google_cloud_pubsub::subscriber::ReceivedMessage;
use tokio::runtime::{Builder, Runtime};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use skeeball_config::SubscriptionPath;

use super::settle::{Delivery, settle};
use super::{
    ExitNotifier, MessageHandler, Subscription, TRANSPORT_TARGET, Transport, TransportError,
};

/// Transport backed by the Google Cloud Pub/Sub streaming pull API.
///
/// Credentials are discovered by the client library (application default
/// credentials or `GOOGLE_APPLICATION_CREDENTIALS`). When
/// `PUBSUB_EMULATOR_HOST` is set the client talks to the emulator instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct PubSubTransport;

impl PubSubTransport {
    /// Builds a Pub/Sub transport.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transport for PubSubTransport {
    type Subscription = PubSubSubscription;

    fn subscribe(
        &self,
        path: &SubscriptionPath,
        handler: Arc<dyn MessageHandler>,
        on_exit: ExitNotifier,
    ) -> Result<Self::Subscription, TransportError> {
        let runtime = build_runtime()?;
        let client = runtime.block_on(connect(path))?;
        let subscription = client.subscription(&path.to_string());
        let cancel = CancellationToken::new();
        let receive_cancel = cancel.clone();
        let receive_path = path.clone();

        let handle = thread::Builder::new()
            .name("skeeball-subscription".to_owned())
            .spawn(move || {
                info!(
                    target: TRANSPORT_TARGET,
                    subscription = %receive_path,
                    "subscription receive loop active"
                );
                let received = runtime.block_on(subscription.receive(
                    move |message, _cancel| {
                        let handler = Arc::clone(&handler);
                        async move {
                            settle(handler.as_ref(), message).await;
                        }
                    },
                    receive_cancel,
                    None,
                ));
                let status =
                    received.map_err(|status| TransportError::receive(&receive_path, status));
                debug!(
                    target: TRANSPORT_TARGET,
                    subscription = %receive_path,
                    clean = status.is_ok(),
                    "subscription receive loop finished"
                );
                on_exit(status);
            })
            .map_err(|source| TransportError::Runtime { source })?;

        Ok(PubSubSubscription {
            cancel,
            handle: Some(handle),
        })
    }
}

/// Handle to a running Pub/Sub subscription.
///
/// The client retries streaming pull errors internally. The receive loop
/// only fails when the subscription cannot be resolved (for example it does
/// not exist or permission is denied), which is reported as
/// [`TransportError::Receive`] shortly after subscribing.
///
/// Dropping the handle cancels the subscription without waiting for it.
#[derive(Debug)]
pub struct PubSubSubscription {
    cancel: CancellationToken,
    handle: Option<thread::JoinHandle<()>>,
}

impl Subscription for PubSubSubscription {
    fn shutdown(&self) {
        self.cancel.cancel();
    }

    fn join(mut self) -> Result<(), TransportError> {
        match self.handle.take() {
            Some(handle) => handle.join().map_err(|_| TransportError::ThreadPanic),
            None => Ok(()),
        }
    }
}

impl Drop for PubSubSubscription {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

fn build_runtime() -> Result<Runtime, TransportError> {
    Builder::new_multi_thread()
        .enable_all()
        .thread_name("skeeball-pubsub")
        .build()
        .map_err(|source| TransportError::Runtime { source })
}

async fn connect(path: &SubscriptionPath) -> Result<Client, TransportError> {
    let config = ClientConfig {
        project_id: Some(path.project_id().to_owned()),
        ..ClientConfig::default()
    }
    .with_auth()
    .await
    .map_err(|error| TransportError::connect(path, error))?;
    Client::new(config)
        .await
        .map_err(|error| TransportError::connect(path, error))
}

impl Delivery for ReceivedMessage {
    type Error = String;

    fn id(&self) -> &str {
        &self.message.message_id
    }

    fn payload(&self) -> &[u8] {
        &self.message.data
    }

    fn ack(self) -> impl Future<Output = Result<(), String>> + Send {
        async move {
            ReceivedMessage::ack(&self)
                .await
                .map_err(|status| status.to_string())
        }
    }

    fn nack(self) -> impl Future<Output = Result<(), String>> + Send {
        async move {
            ReceivedMessage::nack(&self)
                .await
                .map_err(|status| status.to_string())
        }
    }
}
