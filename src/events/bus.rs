//! Event bus: the "state changed" notification channel.
//!
//! Hosts either subscribe a callback or poll. Every published event is
//! queued for [`EventBus::drain`], forwarded to subscribers in
//! subscription order, and bumps the revision counter.

use super::event::RoundEvent;

/// Callback invoked for each published event.
pub type Subscriber = Box<dyn FnMut(&RoundEvent)>;

/// Identifier returned by [`EventBus::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u32);

/// Publishes round events to subscribers and a polled queue.
#[derive(Default)]
pub struct EventBus {
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    queue: Vec<RoundEvent>,
    revision: u64,
    next_id: u32,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscribers.len())
            .field("queued", &self.queue.len())
            .field("revision", &self.revision)
            .finish()
    }
}

impl EventBus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback for every future event.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&RoundEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Remove a subscriber. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Publish an event.
    pub fn publish(&mut self, event: RoundEvent) {
        self.revision += 1;
        for (_, subscriber) in &mut self.subscribers {
            subscriber(&event);
        }
        self.queue.push(event);
    }

    /// Take every event queued since the last drain.
    pub fn drain(&mut self) -> Vec<RoundEvent> {
        std::mem::take(&mut self.queue)
    }

    /// Monotonic counter bumped on every publish.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_publish_queues_and_bumps_revision() {
        let mut bus = EventBus::new();
        assert_eq!(bus.revision(), 0);

        bus.publish(RoundEvent::Started);
        bus.publish(RoundEvent::Ticked { remaining: 89 });

        assert_eq!(bus.revision(), 2);
        assert_eq!(
            bus.drain(),
            vec![RoundEvent::Started, RoundEvent::Ticked { remaining: 89 }]
        );
        assert!(bus.drain().is_empty());
        assert_eq!(bus.revision(), 2, "draining is not a state change");
    }

    #[test]
    fn test_subscribers_see_every_event() {
        let mut bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = Rc::clone(&seen);
        bus.subscribe(move |event| sink.borrow_mut().push(*event));

        bus.publish(RoundEvent::Revealed { index: 4 });
        assert_eq!(*seen.borrow(), vec![RoundEvent::Revealed { index: 4 }]);
    }

    #[test]
    fn test_unsubscribe() {
        let mut bus = EventBus::new();
        let count = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&count);
        let id = bus.subscribe(move |_| *counter.borrow_mut() += 1);

        bus.publish(RoundEvent::Started);
        assert!(bus.unsubscribe(id));
        assert!(!bus.unsubscribe(id));
        bus.publish(RoundEvent::Started);

        assert_eq!(*count.borrow(), 1);
    }
}
