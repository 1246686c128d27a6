use crate::ui::panel::SummaryPanelState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_OK, STATUS_WARN};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header<'a> {
    endpoint: &'a str,
}

impl<'a> Header<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self { endpoint }
    }

    pub fn widget(&self, panel: &SummaryPanelState) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let status = if panel.loading {
            Span::styled(
                format!("{} Summarizing...", panel.spinner()),
                Style::default().fg(STATUS_WARN),
            )
        } else if panel.result_visible {
            Span::styled("● Summary ready", Style::default().fg(STATUS_OK))
        } else {
            Span::styled("○ Idle", text_style)
        };

        let line = Line::from(vec![
            Span::styled(
                "  anysummary",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.endpoint, text_style),
            Span::styled("  │  ", separator_style),
            status,
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
