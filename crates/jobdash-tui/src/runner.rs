//! Main TUI runner - terminal lifecycle and event loop

use jobdash_app::Engine;
use jobdash_client::{JobsApi, LogsApi};
use jobdash_core::prelude::*;

use crate::{event, render};

/// Run the dashboard until the user quits
///
/// Takes ownership of the terminal for the duration of the call and restores
/// it on return and on panic.
pub async fn run<J, L>(mut engine: Engine<J, L>) -> Result<()>
where
    J: JobsApi + Send + Sync + 'static,
    L: LogsApi + Send + Sync + 'static,
{
    install_panic_hook();
    let mut term = ratatui::init();

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    engine.shutdown();
    ratatui::restore();

    if let Err(ref e) = result {
        error!("Event loop failed: {}", e);
    }
    result
}

/// Restore the terminal before the default panic output
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}

/// Main event loop
fn run_loop<J, L>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<J, L>) -> Result<()>
where
    J: JobsApi + Send + Sync + 'static,
    L: LogsApi + Send + Sync + 'static,
{
    while !engine.should_quit() {
        // Replies, stream output and follow ticks from background tasks
        engine.drain_pending();

        terminal.draw(|frame| render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll()? {
            engine.process_message(message);
        }
    }

    info!("Quit requested, leaving event loop");
    Ok(())
}
