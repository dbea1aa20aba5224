//! Event loop orchestrating store replies, user input, and rendering.
//!
//! This module coordinates three main concerns:
//! - Store replies, applied through the controller's ticket guard
//! - Keyboard input processing (navigation, form editing)
//! - Rendering the current page

use std::sync::Arc;

use anyhow::Result;
use client_frontend_core::{AppController, Request, Response};
use client_store_core::FighterStore;
use tokio::{
    sync::mpsc,
    time::{self, Duration},
};

use super::Dispatcher;
use crate::{config::CliConfig, input::InputHandler, presentation::terminal::Tui, state::AppState};

const FRAME_INTERVAL_MS: u64 = 16;
const REPLY_BUFFER: usize = 16;

/// Event loop owning the controller and coordinating UI updates.
pub struct EventLoop {
    pub(crate) app: AppController,
    pub(crate) dispatcher: Dispatcher,
    pub(crate) rx_reply: mpsc::Receiver<Response>,
    pub(crate) input: InputHandler,
    pub(crate) app_state: AppState,
    /// CLI UI configuration
    pub(crate) cli_config: CliConfig,
}

impl EventLoop {
    pub fn new(app: AppController, store: Arc<dyn FighterStore>, cli_config: CliConfig) -> Self {
        let (dispatcher, rx_reply) = Dispatcher::new(store, REPLY_BUFFER);
        Self {
            app,
            dispatcher,
            rx_reply,
            input: InputHandler::new(),
            app_state: AppState::new(),
            cli_config,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui, initial: Request) -> Result<()> {
        self.dispatcher.spawn(initial);
        self.render(terminal)?;

        loop {
            tokio::select! {
                Some(response) = self.rx_reply.recv() => {
                    self.handle_reply(response);
                    self.render(terminal)?;
                }
                _ = time::sleep(Duration::from_millis(FRAME_INTERVAL_MS)) => {
                    if self.handle_input_tick(terminal).await? {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    /// Feeds a reply to the controller and spawns any follow-up.
    fn handle_reply(&mut self, response: Response) {
        if let Some(next) = self.app.handle(response) {
            self.dispatcher.spawn(next);
        }
    }

    pub(crate) fn issue(&self, request: Option<Request>) {
        if let Some(request) = request {
            self.dispatcher.spawn(request);
        }
    }
}
