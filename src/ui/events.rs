use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use std::io;
use std::thread;
use std::time::{Duration, Instant};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

pub enum AppEvent {
    Key(KeyEvent),
    Paste(String),
    Tick,
    Resize(u16, u16),
    /// Shared model changed off the UI loop (host call from a request task).
    Redraw,
}

pub struct EventHandler {
    rx: UnboundedReceiver<AppEvent>,
    tx: UnboundedSender<AppEvent>,
}

impl EventHandler {
    /// Start the terminal reader thread.
    ///
    /// The thread exits once the receiving side is dropped.
    pub fn new(tick_rate: Duration) -> io::Result<Self> {
        let (tx, rx) = mpsc::unbounded_channel();
        let event_tx = tx.clone();

        thread::Builder::new()
            .name("terminal-events".to_string())
            .spawn(move || reader_loop(event_tx, tick_rate))?;

        Ok(Self { rx, tx })
    }

    pub async fn next(&mut self) -> Option<AppEvent> {
        self.rx.recv().await
    }

    pub fn sender(&self) -> UnboundedSender<AppEvent> {
        self.tx.clone()
    }
}

fn reader_loop(tx: UnboundedSender<AppEvent>, tick_rate: Duration) {
    let mut last_tick = Instant::now();
    loop {
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());

        match event::poll(timeout) {
            Ok(true) => {
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => {
                        Some(AppEvent::Key(key))
                    }
                    Ok(Event::Paste(text)) => Some(AppEvent::Paste(text)),
                    Ok(Event::Resize(cols, rows)) => Some(AppEvent::Resize(cols, rows)),
                    Ok(_) => None,
                    Err(err) => {
                        tracing::error!(error = %err, "Terminal read failed");
                        return;
                    }
                };
                if let Some(event) = forwarded {
                    if tx.send(event).is_err() {
                        return;
                    }
                }
            }
            Ok(false) => {}
            Err(err) => {
                tracing::error!(error = %err, "Terminal poll failed");
                return;
            }
        }

        if last_tick.elapsed() >= tick_rate {
            if tx.send(AppEvent::Tick).is_err() {
                return;
            }
            last_tick = Instant::now();
        }
    }
}
