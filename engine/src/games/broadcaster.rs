use std::collections::HashMap;

use tokio::sync::mpsc;

use crate::games::tictactoe::GameState;
use crate::log;

pub type StateSender = mpsc::UnboundedSender<GameState>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "subscriber-{}", self.0)
    }
}

/// Receiving end of a subscription. Yields every published snapshot in order,
/// starting with the one current when the subscription was made.
#[derive(Debug)]
pub struct StateSubscription {
    id: SubscriberId,
    receiver: mpsc::UnboundedReceiver<GameState>,
}

impl StateSubscription {
    pub fn id(&self) -> SubscriberId {
        self.id
    }

    /// `None` once the session has shut down and every queued snapshot was read.
    pub async fn recv(&mut self) -> Option<GameState> {
        self.receiver.recv().await
    }

    pub fn try_recv(&mut self) -> Option<GameState> {
        self.receiver.try_recv().ok()
    }
}

/// Fan-out of state snapshots. Owned by the session task, which is the only
/// writer, so no locking is needed.
#[derive(Debug, Default)]
pub struct Broadcaster {
    subscribers: HashMap<SubscriberId, StateSender>,
    next_id: u64,
}

impl Broadcaster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a subscriber and hands it `current` before anything else.
    pub fn subscribe(&mut self, current: GameState) -> StateSubscription {
        let (sender, receiver) = mpsc::unbounded_channel();
        let id = SubscriberId(self.next_id);
        self.next_id += 1;

        // The receiver is still in hand, so this send cannot fail.
        let _ = sender.send(current);
        self.subscribers.insert(id, sender);

        StateSubscription { id, receiver }
    }

    pub fn unsubscribe(&mut self, id: SubscriberId) {
        self.subscribers.remove(&id);
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    pub fn broadcast_state(&mut self, state: GameState) {
        self.subscribers.retain(|id, sender| match sender.send(state) {
            Ok(()) => true,
            Err(_) => {
                log!("Dropping {}: receiver closed", id);
                false
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Difficulty;

    #[test]
    fn test_subscribe_replays_current_state() {
        let mut broadcaster = Broadcaster::new();
        let current = GameState::new(Difficulty::Hard);

        let mut subscription = broadcaster.subscribe(current);

        assert_eq!(subscription.try_recv(), Some(current));
        assert_eq!(subscription.try_recv(), None);
    }

    #[test]
    fn test_broadcast_reaches_every_subscriber_in_order() {
        let mut broadcaster = Broadcaster::new();
        let initial = GameState::default();
        let mut first = broadcaster.subscribe(initial);
        let mut second = broadcaster.subscribe(initial);

        let moved = initial.apply_human_move(4).unwrap();
        broadcaster.broadcast_state(moved);

        for subscription in [&mut first, &mut second] {
            assert_eq!(subscription.try_recv(), Some(initial));
            assert_eq!(subscription.try_recv(), Some(moved));
        }
    }

    #[test]
    fn test_closed_subscribers_are_pruned() {
        let mut broadcaster = Broadcaster::new();
        let kept = broadcaster.subscribe(GameState::default());
        let dropped = broadcaster.subscribe(GameState::default());
        drop(dropped);

        broadcaster.broadcast_state(GameState::default());

        assert_eq!(broadcaster.subscriber_count(), 1);
        drop(kept);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut broadcaster = Broadcaster::new();
        let mut subscription = broadcaster.subscribe(GameState::default());
        subscription.try_recv();

        broadcaster.unsubscribe(subscription.id());
        broadcaster.broadcast_state(GameState::new(Difficulty::Medium));

        assert_eq!(subscription.try_recv(), None);
    }
}
