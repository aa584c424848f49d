use std::cell::Cell;
use std::rc::Rc;

use log::{debug, info};
use shared::{AnalyticsSnapshot, SharedError};
use thiserror::Error;
use yew::Callback;

/// Errors an analytics provider reports through `on_error`
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProviderError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Server error: {status} - {body}")]
    Http { status: u16, body: String },

    #[error("Invalid analytics snapshot: {0}")]
    InvalidSnapshot(#[from] SharedError),
}

/// The receiving end of a subscription.
///
/// Bundles the data and error callbacks with a liveness flag shared with the
/// owning [`Subscription`]. Once the subscription is released every delivery
/// through any clone of the sink is dropped.
#[derive(Clone)]
pub struct SnapshotSink {
    on_data: Callback<AnalyticsSnapshot>,
    on_error: Callback<ProviderError>,
    live: Rc<Cell<bool>>,
}

impl SnapshotSink {
    pub fn new(on_data: Callback<AnalyticsSnapshot>, on_error: Callback<ProviderError>) -> Self {
        Self {
            on_data,
            on_error,
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Hands a snapshot to the subscriber. Returns `false` if it was discarded.
    pub fn deliver(&self, snapshot: AnalyticsSnapshot) -> bool {
        if !self.is_live() {
            debug!("Discarding analytics snapshot delivered after unsubscribe");
            return false;
        }
        self.on_data.emit(snapshot);
        true
    }

    /// Reports a provider error to the subscriber. Returns `false` if it was discarded.
    pub fn fail(&self, error: ProviderError) -> bool {
        if !self.is_live() {
            debug!("Discarding analytics error delivered after unsubscribe: {}", error);
            return false;
        }
        self.on_error.emit(error);
        true
    }

    fn close(&self) {
        self.live.set(false);
    }
}

/// Handle to an active subscription.
///
/// Releasing it (explicitly or by dropping it) first silences the sink and
/// then runs the provider's teardown exactly once.
#[must_use = "dropping a Subscription releases it immediately"]
pub struct Subscription {
    sink: SnapshotSink,
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(sink: SnapshotSink, teardown: impl FnOnce() + 'static) -> Self {
        Self {
            sink,
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.sink.is_live()
    }

    pub fn unsubscribe(mut self) {
        self.release();
    }

    fn release(&mut self) {
        self.sink.close();
        if let Some(teardown) = self.teardown.take() {
            info!("Releasing analytics subscription");
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// A source of analytics snapshots.
///
/// `subscribe` must return immediately; snapshots and errors are pushed to
/// the sink later, in the order the provider wants them displayed.
pub trait AnalyticsProvider {
    fn subscribe(&self, sink: SnapshotSink) -> Subscription;
}

/// Shared, comparable reference to a provider so it can travel through
/// component properties and contexts.
#[derive(Clone)]
pub struct ProviderHandle(Rc<dyn AnalyticsProvider>);

impl ProviderHandle {
    pub fn new<P: AnalyticsProvider + 'static>(provider: P) -> Self {
        Self(Rc::new(provider))
    }

    /// Subscribes with a pair of callbacks and returns the release handle.
    pub fn subscribe_to_analytics(
        &self,
        on_data: Callback<AnalyticsSnapshot>,
        on_error: Callback<ProviderError>,
    ) -> Subscription {
        self.0.subscribe(SnapshotSink::new(on_data, on_error))
    }
}

impl From<Rc<dyn AnalyticsProvider>> for ProviderHandle {
    fn from(provider: Rc<dyn AnalyticsProvider>) -> Self {
        Self(provider)
    }
}

impl PartialEq for ProviderHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}
