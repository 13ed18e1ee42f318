use crate::domain::events::Event;
use tokio::sync::mpsc::Receiver;
use tracing::{info, instrument};

/// Relays applied-command outcomes to the operator log. An interactive
/// surface would render these as toasts.
#[instrument(skip_all)]
pub async fn notice_listener(mut rx: Receiver<Event>) {
    while let Some(event) = rx.recv().await {
        info!("🔔 {}", event);
    }
}
