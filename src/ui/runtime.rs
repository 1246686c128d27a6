use crate::config::Config;
use crate::controller::SummarizeController;
use crate::service::HttpSummaryService;
use crate::ui::app::{App, SharedModel, UiModel};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::host::TuiHost;
use crate::ui::input::{handle_key, InputAction};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Run the interactive terminal UI until the user quits.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let service = Arc::new(HttpSummaryService::new(&config.service)?);
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);

    let model: SharedModel = Arc::new(Mutex::new(UiModel::default()));
    let mut events = EventHandler::new(tick_rate)?;
    let host = Arc::new(TuiHost::new(Arc::clone(&model), events.sender()));
    let controller = SummarizeController::new(service, host);
    let mut app = App::new(model, config.service.endpoint.clone());

    let (mut terminal, guard) = setup_terminal()?;
    tracing::info!(endpoint = %config.service.endpoint, "TUI started");

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let Some(event) = events.next().await else {
            break;
        };
        match event {
            AppEvent::Key(key) => match handle_key(&mut app, key) {
                InputAction::Summarize => {
                    let controller = controller.clone();
                    tokio::spawn(async move { controller.on_submit_trigger().await });
                }
                InputAction::Copy => controller.on_copy_trigger(),
                InputAction::None => {}
            },
            AppEvent::Paste(text) => app.on_paste(&text),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize(cols, rows) => {
                tracing::trace!(cols, rows, "Terminal resized");
            }
            AppEvent::Redraw => {}
        }
    }

    drop(guard);
    tracing::info!("TUI exited");
    Ok(())
}
