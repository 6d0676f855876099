//! Message processing: runs update and dispatches the resulting actions

use tokio::sync::mpsc;

use jobdash_client::{JobsApi, LogsApi};

use crate::actions::{handle_action, RunControl, Services};
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function.
///
/// Follow-up messages are processed in the same call; each result's action
/// is dispatched before its follow-up message.
pub fn process_message<J, L>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    services: &Services<J, L>,
    run: &mut RunControl,
) where
    J: JobsApi + Send + Sync + 'static,
    L: LogsApi + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), services, run);
        }

        msg = result.message;
    }
}
