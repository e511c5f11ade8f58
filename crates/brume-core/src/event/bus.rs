// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use log;

/// Manages a generic, thread-safe event channel.
///
/// The bus is generic over the type `T` of event it transports, which keeps
/// this crate decoupled from event types defined in higher-level crates.
/// Producers hold cloned senders; the owner of the bus drains the receiver.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + Sync + 'static> {
    sender: flume::Sender<T>,
    receiver: flume::Receiver<T>,
}

impl<T: Clone + Send + Sync + 'static> EventBus<T> {
    /// Creates a new EventBus with an unbounded channel for a specific event type.
    pub fn new() -> Self {
        let (sender, receiver) = flume::unbounded();
        Self { sender, receiver }
    }

    /// Attempts to send an event, logging an error if the receiver is disconnected.
    ///
    /// ## Arguments
    /// * `event` - The event to be sent over the channel.
    pub fn publish(&self, event: T) {
        if let Err(e) = self.sender.send(event) {
            log::error!("Failed to send event: {e}. Receiver likely disconnected.");
        }
    }

    /// Returns a clone of the sender end of the channel.
    /// Use this to allow other parts of the system to send events.
    pub fn sender(&self) -> flume::Sender<T> {
        self.sender.clone()
    }

    /// Returns a reference to the receiver end of the channel.
    /// Intended for the owner of the bus to process events.
    pub fn receiver(&self) -> &flume::Receiver<T> {
        &self.receiver
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flume::TryRecvError;

    #[derive(Debug, Clone, PartialEq)]
    enum TestEvent {
        Imported { name: String },
        Reloaded { name: String },
    }

    #[test]
    fn publish_then_drain_preserves_order() {
        let bus = EventBus::<TestEvent>::new();

        bus.publish(TestEvent::Imported {
            name: "a.obj".into(),
        });
        bus.publish(TestEvent::Reloaded {
            name: "a.obj".into(),
        });

        let receiver = bus.receiver();
        assert_eq!(
            receiver.try_recv(),
            Ok(TestEvent::Imported {
                name: "a.obj".into()
            })
        );
        assert_eq!(
            receiver.try_recv(),
            Ok(TestEvent::Reloaded {
                name: "a.obj".into()
            })
        );
        assert_eq!(receiver.try_recv(), Err(TryRecvError::Empty));
    }

    #[test]
    fn cloned_senders_feed_the_same_channel() {
        let bus = EventBus::<TestEvent>::new();
        let sender = bus.sender();

        sender
            .send(TestEvent::Imported { name: "x".into() })
            .expect("send should succeed while the bus lives");

        assert!(bus.receiver().try_recv().is_ok());
    }

    #[test]
    fn publish_after_receiver_drop_does_not_panic() {
        let bus = EventBus::<TestEvent>::new();
        let sender = bus.sender();
        drop(bus);

        // The detached sender observes the disconnect as an error, not a panic.
        assert!(sender
            .send(TestEvent::Imported { name: "y".into() })
            .is_err());
    }
}
