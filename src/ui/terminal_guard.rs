//! Raw-mode terminal setup with restore on drop and on panic.

use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
    LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

type Restore = Box<dyn FnOnce() + Send + 'static>;

/// Restores the terminal exactly once, whichever comes first: drop or panic.
pub struct TerminalGuard {
    restore: Arc<Mutex<Option<Restore>>>,
}

impl TerminalGuard {
    fn new(restore: Restore) -> Self {
        let guard = Self {
            restore: Arc::new(Mutex::new(Some(restore))),
        };
        guard.install_panic_hook();
        guard
    }

    fn install_panic_hook(&self) {
        let restore = Arc::clone(&self.restore);
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if let Some(restore) = restore.lock().take() {
                restore();
            }
            default_hook(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.lock().take() {
            restore();
        }
    }
}

/// Create the guard, then run `enter`. If `enter` fails partway, the guard
/// is dropped and `restore` undoes whatever was already switched on.
fn guarded<T>(
    restore: Restore,
    enter: impl FnOnce() -> io::Result<T>,
) -> io::Result<(T, TerminalGuard)> {
    let guard = TerminalGuard::new(restore);
    let value = enter()?;
    Ok((value, guard))
}

/// Enter raw mode and the alternate screen, with bracketed paste and, where
/// the terminal supports it, disambiguated modifier keys (so Ctrl+Enter is
/// distinguishable from Enter).
pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let enhanced = Arc::new(AtomicBool::new(false));
    let pushed = Arc::clone(&enhanced);

    let restore: Restore = Box::new(move || {
        let mut stdout = io::stdout();
        if pushed.load(Ordering::SeqCst) {
            let _ = stdout.execute(PopKeyboardEnhancementFlags);
        }
        let _ = stdout.execute(DisableBracketedPaste);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
    });

    guarded(restore, || {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        stdout.execute(EnableBracketedPaste)?;

        if supports_keyboard_enhancement().unwrap_or(false) {
            stdout.execute(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES,
            ))?;
            enhanced.store(true, Ordering::SeqCst);
        }

        Terminal::new(CrosstermBackend::new(stdout))
    })
}
