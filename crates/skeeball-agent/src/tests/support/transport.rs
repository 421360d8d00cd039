//! In-memory transport that delivers queued messages synchronously.
//!
//! Messages queued before `subscribe` are handed to the handler during the
//! call, and each [`FakeMessage`] counts the acknowledgements it receives so
//! scenarios can assert that exactly one of ack/nack was issued.

use std::future::{self, Future};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use skeeball_config::SubscriptionPath;
use tokio::runtime::Builder;

use crate::dispatch::Outcome;
use crate::transport::settle::{Delivery, settle};
use crate::transport::{ExitNotifier, MessageHandler, Subscription, Transport, TransportError};

/// Delivered message exposing its payload and settlement counters.
#[derive(Debug)]
pub struct FakeMessage {
    id: String,
    payload: Vec<u8>,
    rejects_settlement: bool,
    acks: AtomicUsize,
    nacks: AtomicUsize,
}

impl FakeMessage {
    pub fn new(payload: impl Into<Vec<u8>>) -> Arc<Self> {
        Self::build(payload.into(), false)
    }

    /// Message whose ack and nack calls are counted but fail.
    pub fn rejecting_settlement(payload: impl Into<Vec<u8>>) -> Arc<Self> {
        Self::build(payload.into(), true)
    }

    fn build(payload: Vec<u8>, rejects_settlement: bool) -> Arc<Self> {
        static NEXT_ID: AtomicUsize = AtomicUsize::new(1);
        Arc::new(Self {
            id: format!("fake-{}", NEXT_ID.fetch_add(1, Ordering::SeqCst)),
            payload,
            rejects_settlement,
            acks: AtomicUsize::new(0),
            nacks: AtomicUsize::new(0),
        })
    }

    fn settled(&self, counter: &AtomicUsize) -> Result<(), &'static str> {
        counter.fetch_add(1, Ordering::SeqCst);
        if self.rejects_settlement {
            Err("settlement rejected")
        } else {
            Ok(())
        }
    }

    pub fn acks(&self) -> usize {
        self.acks.load(Ordering::SeqCst)
    }

    pub fn nacks(&self) -> usize {
        self.nacks.load(Ordering::SeqCst)
    }

    /// Hands the payload to `handler` and settles it the way the production
    /// transport does.
    pub fn deliver(self: &Arc<Self>, handler: &dyn MessageHandler) -> Outcome {
        Builder::new_current_thread()
            .build()
            .expect("build delivery runtime")
            .block_on(settle(handler, Arc::clone(self)))
    }
}

impl Delivery for Arc<FakeMessage> {
    type Error = &'static str;

    fn id(&self) -> &str {
        &self.id
    }

    fn payload(&self) -> &[u8] {
        &self.payload
    }

    fn ack(self) -> impl Future<Output = Result<(), Self::Error>> + Send {
        future::ready(self.settled(&self.acks))
    }

    fn nack(self) -> impl Future<Output = Result<(), Self::Error>> + Send {
        future::ready(self.settled(&self.nacks))
    }
}

#[derive(Default)]
struct TransportState {
    subscriptions: Mutex<Vec<SubscriptionPath>>,
    pending_exit: Mutex<Option<ExitNotifier>>,
    shutdowns: AtomicUsize,
    joins: AtomicUsize,
}

/// Fake transport recording subscriptions and lifecycle calls.
#[derive(Clone, Default)]
pub struct FakeTransport {
    state: Arc<TransportState>,
    queued: Arc<Mutex<Vec<Arc<FakeMessage>>>>,
    connect_failure: Option<String>,
    receive_failure: Option<String>,
}

impl FakeTransport {
    /// Transport whose client cannot connect.
    pub fn failing_connect(message: &str) -> Self {
        Self {
            connect_failure: Some(message.to_owned()),
            ..Self::default()
        }
    }

    /// Transport whose message stream fails right after subscribing.
    pub fn failing_receive(message: &str) -> Self {
        Self {
            receive_failure: Some(message.to_owned()),
            ..Self::default()
        }
    }

    /// Queues a message for delivery on the next subscription.
    pub fn queue(&self, message: Arc<FakeMessage>) {
        self.queued
            .lock()
            .expect("queued messages mutex poisoned")
            .push(message);
    }

    pub fn subscriptions(&self) -> Vec<String> {
        self.state
            .subscriptions
            .lock()
            .expect("subscriptions mutex poisoned")
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub fn shutdowns(&self) -> usize {
        self.state.shutdowns.load(Ordering::SeqCst)
    }

    pub fn joins(&self) -> usize {
        self.state.joins.load(Ordering::SeqCst)
    }
}

impl Transport for FakeTransport {
    type Subscription = FakeSubscription;

    fn subscribe(
        &self,
        path: &SubscriptionPath,
        handler: Arc<dyn MessageHandler>,
        on_exit: ExitNotifier,
    ) -> Result<Self::Subscription, TransportError> {
        if let Some(message) = &self.connect_failure {
            return Err(TransportError::connect(path, message));
        }
        self.state
            .subscriptions
            .lock()
            .expect("subscriptions mutex poisoned")
            .push(path.clone());

        let queued = self
            .queued
            .lock()
            .expect("queued messages mutex poisoned")
            .clone();
        for message in queued {
            message.deliver(handler.as_ref());
        }

        match &self.receive_failure {
            Some(message) => on_exit(Err(TransportError::receive(path, message))),
            None => {
                *self
                    .state
                    .pending_exit
                    .lock()
                    .expect("pending exit mutex poisoned") = Some(on_exit);
            }
        }

        Ok(FakeSubscription {
            state: Arc::clone(&self.state),
        })
    }
}

/// Handle returned by [`FakeTransport`].
pub struct FakeSubscription {
    state: Arc<TransportState>,
}

impl Subscription for FakeSubscription {
    fn shutdown(&self) {
        self.state.shutdowns.fetch_add(1, Ordering::SeqCst);
        let pending = self
            .state
            .pending_exit
            .lock()
            .expect("pending exit mutex poisoned")
            .take();
        if let Some(notify) = pending {
            notify(Ok(()));
        }
    }

    fn join(self) -> Result<(), TransportError> {
        self.state.joins.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
