use crate::host::{CopyFeedback, NoticeLevel};
use crate::input::MIN_INPUT_CHARS;
use crate::ui::app::{App, UiModel};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect_by_size, layout_regions};
use crate::ui::theme::{
    ACCENT, DISABLED_TEXT, GLOBAL_BORDER, HEADER_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK,
    STATUS_WARN,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

const PLACEHOLDER: &str = "Paste or type the text you want to summarize...";
const NOTICE_MAX_WIDTH: u16 = 60;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let model = app.model().lock();
    let area = frame.area();
    let regions = layout_regions(area, model.panel.result_visible);

    frame.render_widget(Header::new(app.endpoint()).widget(&model.panel), regions.header);
    draw_input(frame, regions.input, &model);
    if model.panel.result_visible {
        draw_result(frame, regions.result, &model);
    }
    frame.render_widget(
        Footer::new().widget(regions.footer, &model.panel),
        regions.footer,
    );

    if let Some(notice) = &model.panel.notice {
        let (title, color) = match notice.level {
            NoticeLevel::Warning => (" Notice ", STATUS_WARN),
            NoticeLevel::Error => (" Error ", STATUS_ERROR),
        };
        let width = NOTICE_MAX_WIDTH.min(area.width.saturating_sub(4)).max(10);
        let text_width = width.saturating_sub(4).max(1) as usize;
        let text_lines = notice.message.chars().count().div_ceil(text_width).max(1) as u16;
        let popup = centered_rect_by_size(area, width, text_lines + 5);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                notice.message.clone(),
                Style::default().fg(HEADER_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Press Esc to dismiss",
                Style::default().fg(DISABLED_TEXT),
            )),
        ];

        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(Span::styled(title, Style::default().fg(color)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color));
        frame.render_widget(
            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false }),
            popup,
        );
    }
}

fn draw_input(frame: &mut Frame<'_>, area: Rect, model: &UiModel) {
    let editor = &model.editor;
    let count = editor.trimmed_len();
    let (count_color, border_color) = if editor.meets_minimum() {
        (STATUS_OK, ACCENT)
    } else {
        (DISABLED_TEXT, GLOBAL_BORDER)
    };

    let block = Block::default()
        .title(Line::from(vec![
            Span::styled(" Input ", Style::default().fg(HEADER_TEXT)),
            Span::styled(
                format!("{} chars (min {}) ", count, MIN_INPUT_CHARS),
                Style::default().fg(count_color),
            ),
        ]))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);

    if editor.text().is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(DISABLED_TEXT)
                    .add_modifier(Modifier::ITALIC),
            ))
            .block(block),
            area,
        );
    } else {
        let rows = editor.visual_lines(inner.width as usize);
        let (row, _) = editor.visual_cursor(inner.width as usize);
        let scroll = row.saturating_sub(inner.height.saturating_sub(1) as usize) as u16;
        let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
        frame.render_widget(
            Paragraph::new(lines)
                .style(Style::default().fg(HEADER_TEXT))
                .scroll((scroll, 0))
                .block(block),
            area,
        );
    }

    if model.panel.notice.is_none() && inner.width > 0 && inner.height > 0 {
        let (row, col) = editor.visual_cursor(inner.width as usize);
        let visible_row = row.min(inner.height.saturating_sub(1) as usize) as u16;
        frame.set_cursor_position((inner.x + col as u16, inner.y + visible_row));
    }
}

fn draw_result(frame: &mut Frame<'_>, area: Rect, model: &UiModel) {
    let feedback = model.panel.copy_feedback;
    let copy_style = match feedback {
        CopyFeedback::Idle => Style::default().fg(ACCENT),
        CopyFeedback::Copied => Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
    };

    let block = Block::default()
        .title(Span::styled(" Summary ", Style::default().fg(ACCENT)))
        .title(
            Line::from(Span::styled(format!(" [{}] ", feedback.label()), copy_style))
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    frame.render_widget(
        Paragraph::new(model.panel.result_text.as_str())
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
