use crate::ui::panel::SummaryPanelState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for the current state; disabled triggers are left out.
    pub fn hints(panel: &SummaryPanelState) -> String {
        let mut hints = Vec::new();
        if panel.notice.is_some() {
            hints.push("Esc: Dismiss");
        } else {
            if panel.can_submit() {
                hints.push("Ctrl+Enter/Ctrl+S: Summarize");
            }
            if panel.can_copy() {
                hints.push("Ctrl+Y: Copy");
            }
            hints.push("Ctrl+U: Clear");
        }
        hints.push("Ctrl+Q: Quit");
        format!(" {}", hints.join(" │ "))
    }

    pub fn widget(&self, area: Rect, panel: &SummaryPanelState) -> Paragraph<'static> {
        let hints = Self::hints(panel);
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_hide_disabled_triggers() {
        let busy = SummaryPanelState {
            loading: true,
            ..Default::default()
        };
        let hints = Footer::hints(&busy);
        assert!(!hints.contains("Summarize"));
        assert!(!hints.contains("Copy"));
        assert!(hints.contains("Quit"));
    }

    #[test]
    fn hints_show_copy_when_result_visible() {
        let shown = SummaryPanelState {
            result_visible: true,
            result_text: "s".into(),
            ..Default::default()
        };
        assert!(Footer::hints(&shown).contains("Ctrl+Y: Copy"));
    }
}
