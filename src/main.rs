use std::sync::Arc;
use std::time::Duration;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use buddy::app::App;
use buddy::genai::client::GeminiClient;
use buddy::orchestrator::Orchestrator;
use buddy::{logging, terminal, ui};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    logging::init()?;
    terminal::setup_panic_hook();

    // Without a key the UI still runs; generation surfaces a notice.
    let orchestrator = match GeminiClient::from_env() {
        Ok(client) => Some(Arc::new(Orchestrator::new(Arc::new(client)))),
        Err(error) => {
            tracing::warn!(%error, "starting without a generation client");
            None
        }
    };

    let mut term = terminal::setup_terminal()?;
    let mut app = App::new(orchestrator);
    let size = term.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = run_event_loop(&mut term, &mut app).await;
    terminal::restore_terminal();
    result
}

async fn run_event_loop(
    term: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut message_rx = app
        .message_rx
        .take()
        .ok_or_else(|| eyre!("message receiver already taken"))?;

    loop {
        if app.needs_redraw {
            term.draw(|frame| ui::render(frame, app))?;
            app.needs_redraw = false;
        }

        // 16ms tick for smooth slide animation and spinners.
        let tick = tokio::time::sleep(Duration::from_millis(16));

        tokio::select! {
            _ = tick => {
                app.tick();
            }

            Some(message) = message_rx.recv() => {
                app.handle_message(message);
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            match key.code {
                                KeyCode::Char('c')
                                    if key.modifiers.contains(KeyModifiers::CONTROL) =>
                                {
                                    app.quit();
                                }
                                // 'q' quits only when no text field can
                                // be receiving it.
                                KeyCode::Char('q')
                                    if app.active_tool.is_none()
                                        && !app.chat.open
                                        && !app.settings_modal.open
                                        && !app.profile_edit.active =>
                                {
                                    app.quit();
                                }
                                _ => app.handle_key(key),
                            }
                        }
                        Event::Mouse(mouse) => {
                            app.handle_mouse(mouse);
                        }
                        Event::Paste(text) => {
                            app.handle_paste(&text);
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
