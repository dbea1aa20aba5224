//! Runs store commands on spawned tasks.

use std::sync::Arc;

use client_frontend_core::{Request, Response, dispatch};
use client_store_core::FighterStore;
use tokio::{sync::mpsc, task::JoinHandle};

/// Spawns one task per request; replies arrive on the paired receiver.
#[derive(Clone)]
pub struct Dispatcher {
    store: Arc<dyn FighterStore>,
    tx_reply: mpsc::Sender<Response>,
}

impl Dispatcher {
    pub fn new(store: Arc<dyn FighterStore>, buffer: usize) -> (Self, mpsc::Receiver<Response>) {
        let (tx_reply, rx_reply) = mpsc::channel(buffer.max(1));
        (Self { store, tx_reply }, rx_reply)
    }

    pub fn backend(&self) -> &str {
        self.store.backend()
    }

    pub fn spawn(&self, request: Request) -> JoinHandle<()> {
        let store = Arc::clone(&self.store);
        let tx_reply = self.tx_reply.clone();
        let Request { ticket, command } = request;
        tracing::debug!(?ticket, command = command.name(), "spawning store call");

        tokio::spawn(async move {
            let reply = dispatch(store.as_ref(), command).await;
            if tx_reply.send(Response::new(ticket, reply)).await.is_err() {
                tracing::debug!(?ticket, "reply channel closed; dropping reply");
            }
        })
    }
}
