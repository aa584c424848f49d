use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use log::{debug, info};
use wasm_bindgen_futures::spawn_local;

use super::provider::{AnalyticsProvider, SnapshotSink, Subscription};
use crate::api::analytics::{analytics_snapshot_url, fetch_analytics_snapshot};
use crate::config::Config;

/// Provider backed by the analytics snapshot endpoint.
///
/// Fetches once on subscribe and then on every tick of the poll interval.
/// Responses are applied in request order: a response that arrives after a
/// newer one has already been delivered is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpPollingProvider {
    url: String,
    interval_ms: u32,
}

impl HttpPollingProvider {
    pub fn new(url: impl Into<String>, interval_ms: u32) -> Self {
        Self {
            url: url.into(),
            interval_ms,
        }
    }

    pub fn from_config() -> Self {
        Self::new(analytics_snapshot_url(), Config::analytics_poll_interval_ms())
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }
}

/// Request sequencing shared by every poll of one subscription
#[derive(Default)]
struct PollSequence {
    issued: Cell<u64>,
    applied: Cell<u64>,
}

impl PollSequence {
    fn next(&self) -> u64 {
        let seq = self.issued.get() + 1;
        self.issued.set(seq);
        seq
    }

    /// Marks `seq` as applied unless something newer already was.
    fn try_apply(&self, seq: u64) -> bool {
        if seq <= self.applied.get() {
            return false;
        }
        self.applied.set(seq);
        true
    }
}

fn poll(url: Rc<str>, sink: SnapshotSink, sequence: Rc<PollSequence>) {
    if !sink.is_live() {
        return;
    }
    let seq = sequence.next();
    spawn_local(async move {
        let result = fetch_analytics_snapshot(&url).await;
        if !sink.is_live() {
            debug!("Analytics poll #{} finished after unsubscribe", seq);
            return;
        }
        if !sequence.try_apply(seq) {
            debug!("Dropping stale analytics poll #{}", seq);
            return;
        }
        match result {
            Ok(snapshot) => {
                sink.deliver(snapshot);
            }
            Err(e) => {
                sink.fail(e);
            }
        }
    });
}

impl AnalyticsProvider for HttpPollingProvider {
    fn subscribe(&self, sink: SnapshotSink) -> Subscription {
        info!(
            "Polling analytics snapshot from {} every {} ms",
            self.url, self.interval_ms
        );
        let url: Rc<str> = Rc::from(self.url.as_str());
        let sequence = Rc::new(PollSequence::default());

        poll(url.clone(), sink.clone(), sequence.clone());

        let interval = {
            let sink = sink.clone();
            Interval::new(self.interval_ms, move || {
                poll(url.clone(), sink.clone(), sequence.clone())
            })
        };

        // Dropping the interval cancels the timer
        Subscription::new(sink, move || drop(interval))
    }
}
