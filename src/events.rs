use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Domain events published by the engines and the transfer coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    CartItemAdded { customer_id: i64, item_id: i64 },
    CartItemRemoved { customer_id: i64, item_id: i64 },
    CartQuantityUpdated {
        customer_id: i64,
        item_id: i64,
        quantity: i32,
    },
    CartCleared { customer_id: i64 },
    WishlistItemAdded { customer_id: i64, item_id: i64 },
    WishlistItemRemoved { customer_id: i64, item_id: i64 },
    TransferredToWishlist { customer_id: i64, item_id: i64 },
    TransferredToCart { customer_id: i64, item_id: i64 },
}

#[derive(Debug, Clone)]
pub struct EventSender {
    sender: mpsc::Sender<Event>,
}

impl EventSender {
    pub fn new(sender: mpsc::Sender<Event>) -> Self {
        Self { sender }
    }

    /// Sends an event asynchronously.
    pub async fn send(&self, event: Event) -> Result<(), String> {
        self.sender
            .send(event)
            .await
            .map_err(|e| format!("Failed to send event: {}", e))
    }

    /// Sends an event, logging instead of failing when the channel is closed.
    /// Event publication is best-effort; it never fails a request.
    pub async fn send_or_log(&self, event: Event) {
        if let Err(err) = self.send(event.clone()).await {
            warn!(error = %err, event = ?event, "failed to publish event");
        }
    }
}

/// Creates a bounded event channel.
pub fn channel(capacity: usize) -> (EventSender, mpsc::Receiver<Event>) {
    let (tx, rx) = mpsc::channel(capacity);
    (EventSender::new(tx), rx)
}

/// Consumes incoming events. Currently they only feed the structured log;
/// the receiver is the single place to fan out to other consumers later.
pub async fn process_events(mut rx: mpsc::Receiver<Event>) {
    info!("Starting event processing loop");

    while let Some(event) = rx.recv().await {
        info!(event = ?event, "domain event");
    }

    info!("Event processing loop stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn send_delivers_event() {
        let (sender, mut rx) = channel(8);
        sender
            .send(Event::CartItemAdded {
                customer_id: 7,
                item_id: 101,
            })
            .await
            .expect("send should succeed");

        match rx.recv().await {
            Some(Event::CartItemAdded {
                customer_id,
                item_id,
            }) => {
                assert_eq!(customer_id, 7);
                assert_eq!(item_id, 101);
            }
            other => panic!("unexpected event: {:?}", other),
        }
    }

    #[tokio::test]
    async fn send_or_log_swallows_closed_channel() {
        let (sender, rx) = channel(1);
        drop(rx);

        // Must not panic or error out.
        sender
            .send_or_log(Event::CartCleared { customer_id: 7 })
            .await;
    }
}
