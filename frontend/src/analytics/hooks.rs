use std::rc::Rc;

use log::{error, info};
use shared::AnalyticsSnapshot;
use yew::prelude::*;

use super::provider::{ProviderError, ProviderHandle};

/// Subscribes to `provider` for the lifetime of the calling component.
///
/// Exactly one subscription is opened on mount and released on unmount; a
/// later change of `provider` does not resubscribe. Each delivered snapshot
/// replaces the returned value wholesale. Errors are logged and otherwise
/// ignored, so the last good snapshot stays on screen.
#[hook]
pub fn use_analytics_snapshot(provider: &ProviderHandle) -> Rc<AnalyticsSnapshot> {
    let snapshot = use_state(|| Rc::new(AnalyticsSnapshot::default()));

    {
        let snapshot = snapshot.clone();
        let provider = provider.clone();
        use_effect_with((), move |_| {
            let on_data = Callback::from(move |next: AnalyticsSnapshot| {
                snapshot.set(Rc::new(next));
            });
            let on_error = Callback::from(|e: ProviderError| {
                error!("Analytics Error: {}", e);
            });

            let subscription = provider.subscribe_to_analytics(on_data, on_error);
            info!("Analytics subscription established");

            move || subscription.unsubscribe()
        });
    }

    (*snapshot).clone()
}
