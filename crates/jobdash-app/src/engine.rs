//! Engine - owns the application state, the message channel and the
//! background work started by actions.
//!
//! The TUI runner drives it: key events and channel messages go through
//! [`Engine::process_message`], and the state is rendered between batches.

use tokio::sync::mpsc;

use jobdash_client::{JobsApi, LogsApi};
use jobdash_core::prelude::*;

use crate::actions::{RunControl, Services};
use crate::config::Settings;
use crate::follow::FollowState;
use crate::message::Message;
use crate::process;
use crate::router::DEFAULT_ROUTE;
use crate::screen::Screen;
use crate::state::AppState;

/// Capacity of the message channel
const MESSAGE_CHANNEL_CAPACITY: usize = 256;

/// Orchestration engine for jobdash
pub struct Engine<J, L> {
    /// TEA application state (the Model)
    pub state: AppState,

    /// Sender half of the message channel; background tasks hold clones
    pub msg_tx: mpsc::Sender<Message>,

    /// Receiver half, drained by the frontend event loop
    pub msg_rx: mpsc::Receiver<Message>,

    services: Services<J, L>,

    run: RunControl,
}

impl<J, L> Engine<J, L>
where
    J: JobsApi + Send + Sync + 'static,
    L: LogsApi + Send + Sync + 'static,
{
    pub fn new(settings: Settings, services: Services<J, L>) -> Result<Self> {
        let run = RunControl::new(settings.follow.interval());
        let state = AppState::with_settings(settings)?;
        let (msg_tx, msg_rx) = mpsc::channel::<Message>(MESSAGE_CHANNEL_CAPACITY);

        Ok(Self {
            state,
            msg_tx,
            msg_rx,
            services,
            run,
        })
    }

    /// Navigate to the configured start route, falling back to the default
    /// one when it doesn't resolve.
    pub fn start(&mut self) {
        let path = self.state.settings.ui.default_route.clone();
        info!("Starting at {:?}", path);
        self.process_message(Message::Navigate { path: path.clone() });

        if matches!(self.state.screen, Screen::Blank) {
            warn!("Start route {:?} matches no route, using {}", path, DEFAULT_ROUTE);
            self.process_message(Message::Navigate {
                path: DEFAULT_ROUTE.to_string(),
            });
        }
    }

    pub fn process_message(&mut self, message: Message) {
        process::process_message(
            &mut self.state,
            message,
            &self.msg_tx,
            &self.services,
            &mut self.run,
        );
    }

    /// Process every message already queued. Returns how many were handled.
    pub fn drain_pending(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    pub fn follow_state(&self) -> FollowState {
        self.run.follow.state()
    }

    pub fn is_streaming(&self) -> bool {
        self.run.is_streaming()
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }

    /// Stop all background work started by actions
    pub fn shutdown(&mut self) {
        info!("Engine shutting down");
        self.run.stop();
    }
}
