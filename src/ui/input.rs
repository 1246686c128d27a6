use crate::ui::app::App;
use crate::ui::panel::SummaryPanelState;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Work the runtime must do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Handled in place (or ignored).
    None,
    /// Primary trigger: summarize the current input.
    Summarize,
    /// Secondary trigger: copy the summary.
    Copy,
}

/// What a key means, before any state is touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Quit,
    Summarize,
    Copy,
    DismissNotice,
    ClearInput,
    Edit,
}

/// Classify a key press against the current panel state.
///
/// Returns `None` for keys with no effect, including triggers whose
/// affordance is disabled: submit while loading, copy with no visible summary.
pub fn classify_key(key: KeyEvent, panel: &SummaryPanelState) -> Option<KeyIntent> {
    if is_ctrl_char(key, 'q') {
        return Some(KeyIntent::Quit);
    }

    if panel.notice.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => Some(KeyIntent::DismissNotice),
            _ => None,
        };
    }

    if is_submit_key(key) {
        return panel.can_submit().then_some(KeyIntent::Summarize);
    }
    if is_ctrl_char(key, 'y') || key.code == KeyCode::F(6) {
        return panel.can_copy().then_some(KeyIntent::Copy);
    }
    if is_ctrl_char(key, 'u') {
        return Some(KeyIntent::ClearInput);
    }

    Some(KeyIntent::Edit)
}

pub fn handle_key(app: &mut App, key: KeyEvent) -> InputAction {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return InputAction::None;
    }

    let panel = app.model().lock().panel.clone();
    match classify_key(key, &panel) {
        Some(KeyIntent::Quit) => app.request_quit(),
        Some(KeyIntent::Summarize) => return InputAction::Summarize,
        Some(KeyIntent::Copy) => return InputAction::Copy,
        Some(KeyIntent::DismissNotice) => app.dismiss_notice(),
        Some(KeyIntent::ClearInput) => app.edit(|editor| editor.clear()),
        Some(KeyIntent::Edit) => edit_key(app, key),
        None => {}
    }
    InputAction::None
}

fn edit_key(app: &mut App, key: KeyEvent) {
    let plain = !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);
    match key.code {
        KeyCode::Char(ch) if plain => app.edit(|editor| editor.insert_char(ch)),
        KeyCode::Enter if plain => app.edit(|editor| editor.insert_char('\n')),
        KeyCode::Tab => app.edit(|editor| editor.insert_char('\t')),
        KeyCode::Backspace => app.edit(|editor| editor.backspace()),
        KeyCode::Delete => app.edit(|editor| editor.delete()),
        KeyCode::Left => app.edit(|editor| editor.move_left()),
        KeyCode::Right => app.edit(|editor| editor.move_right()),
        KeyCode::Home => app.edit(|editor| editor.move_home()),
        KeyCode::End => app.edit(|editor| editor.move_end()),
        _ => {}
    }
}

/// Ctrl/Cmd+Enter, Ctrl+S, F5, or Ctrl+J (what many terminals send for Ctrl+Enter).
fn is_submit_key(key: KeyEvent) -> bool {
    let ctrl_or_cmd = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER);
    (key.code == KeyCode::Enter && ctrl_or_cmd)
        || key.code == KeyCode::F(5)
        || is_ctrl_char(key, 's')
        || is_ctrl_char(key, 'j')
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}
