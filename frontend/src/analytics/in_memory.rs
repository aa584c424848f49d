use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, error};
use shared::{AnalyticsSnapshot, AnalyticsSnapshotDto};

use super::provider::{AnalyticsProvider, ProviderError, SnapshotSink, Subscription};

/// Callback-registry provider fed by the application itself.
///
/// `publish` fans a snapshot out to every live subscriber in subscription
/// order. New subscribers immediately receive the most recent snapshot, the
/// way a realtime document listener reports current state on attach.
#[derive(Clone, Default)]
pub struct InMemoryAnalyticsProvider {
    registry: Rc<RefCell<Registry>>,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    sinks: Vec<(u64, SnapshotSink)>,
    latest: Option<AnalyticsSnapshot>,
}

impl InMemoryAnalyticsProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that replays `snapshot` to every new subscriber.
    pub fn with_snapshot(snapshot: AnalyticsSnapshot) -> Self {
        let provider = Self::new();
        provider.registry.borrow_mut().latest = Some(snapshot);
        provider
    }

    /// Pushes a snapshot to all subscribers. Returns how many received it.
    pub fn publish(&self, snapshot: AnalyticsSnapshot) -> usize {
        let sinks = {
            let mut registry = self.registry.borrow_mut();
            registry.latest = Some(snapshot.clone());
            registry.sinks.clone()
        };
        debug!("Publishing analytics snapshot to {} subscriber(s)", sinks.len());
        sinks
            .iter()
            .filter(|(_, sink)| sink.deliver(snapshot.clone()))
            .count()
    }

    /// Decodes a raw provider payload and publishes it, or reports the
    /// decoding failure to every subscriber.
    pub fn publish_payload(&self, payload: &str) -> Result<usize, ProviderError> {
        match AnalyticsSnapshotDto::parse_snapshot(payload) {
            Ok(snapshot) => Ok(self.publish(snapshot)),
            Err(e) => {
                let err = ProviderError::from(e);
                error!("Rejected analytics payload: {}", err);
                self.fail(err.clone());
                Err(err)
            }
        }
    }

    /// Reports an error to all subscribers. Returns how many received it.
    pub fn fail(&self, error: ProviderError) -> usize {
        let sinks = self.registry.borrow().sinks.clone();
        sinks
            .iter()
            .filter(|(_, sink)| sink.fail(error.clone()))
            .count()
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.borrow().sinks.len()
    }
}

impl AnalyticsProvider for InMemoryAnalyticsProvider {
    fn subscribe(&self, sink: SnapshotSink) -> Subscription {
        let (id, latest) = {
            let mut registry = self.registry.borrow_mut();
            let id = registry.next_id;
            registry.next_id += 1;
            registry.sinks.push((id, sink.clone()));
            (id, registry.latest.clone())
        };
        debug!("Analytics subscriber {} registered", id);

        if let Some(snapshot) = latest {
            sink.deliver(snapshot);
        }

        let registry = Rc::downgrade(&self.registry);
        Subscription::new(sink, move || {
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().sinks.retain(|(sink_id, _)| *sink_id != id);
                debug!("Analytics subscriber {} removed", id);
            }
        })
    }
}
