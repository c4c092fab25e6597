// Copyright (C) 2026 CheckMVP Contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::events::{DomainEvent, EventKind};
use async_trait::async_trait;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use tracing::debug;

/// A handler invoked for every published event of a subscribed kind.
///
/// Returning a follow-up event publishes it immediately, before the next
/// subscriber of the original event runs.
#[async_trait]
pub trait EventSubscriber: Send + Sync {
    /// Returns a stable name for logging.
    fn name(&self) -> &'static str;

    /// Handles one event.
    ///
    /// # Errors
    ///
    /// Any error aborts the dispatch of the remaining subscribers and
    /// propagates to the publisher.
    async fn handle(&self, event: &DomainEvent) -> Result<Option<DomainEvent>, CoreError>;
}

/// Synchronous in-process event bus.
///
/// Subscribers run sequentially in registration order inside the
/// publisher's call stack. The first error aborts the remaining
/// subscribers. There is no durability, retry or dead-lettering.
#[derive(Default)]
pub struct EventBus {
    subscribers: HashMap<EventKind, Vec<Arc<dyn EventSubscriber>>>,
}

impl EventBus {
    /// Creates an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber for one event kind.
    pub fn subscribe(&mut self, kind: EventKind, subscriber: Arc<dyn EventSubscriber>) {
        self.subscribers.entry(kind).or_default().push(subscriber);
    }

    /// Publishes an event to every subscriber of its kind.
    ///
    /// Follow-up events returned by subscribers are published recursively,
    /// so the future is boxed.
    ///
    /// # Errors
    ///
    /// Propagates the first subscriber error; later subscribers of the
    /// same event do not run.
    pub fn publish<'a>(
        &'a self,
        event: &'a DomainEvent,
    ) -> Pin<Box<dyn Future<Output = Result<(), CoreError>> + Send + 'a>> {
        Box::pin(async move {
            let Some(subscribers) = self.subscribers.get(&event.kind()) else {
                return Ok(());
            };
            for subscriber in subscribers {
                debug!(
                    event = %event.kind(),
                    subscriber = subscriber.name(),
                    "dispatching event"
                );
                if let Some(follow_up) = subscriber.handle(event).await? {
                    self.publish(&follow_up).await?;
                }
            }
            Ok(())
        })
    }
}
