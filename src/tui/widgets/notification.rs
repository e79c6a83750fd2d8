//! Modal notification popup for command results and errors.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::centered;
use crate::tui::state::NoticeKind;
use crate::tui::style::Styles;

pub fn render_notification(frame: &mut Frame, area: Rect, kind: NoticeKind, message: &str) {
    let popup_area = centered(area, 60, (40, 80), (7, 11));
    frame.render_widget(Clear, popup_area);

    let (title, style) = match kind {
        NoticeKind::Info => (" Notice ", Styles::accent()),
        NoticeKind::Error => (" Error ", Styles::error()),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(style);
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(inner);

    let body = Paragraph::new(message)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Styles::default());
    frame.render_widget(body, chunks[0]);

    let footer = Line::from(vec![
        Span::styled("Enter", Styles::popup_key()),
        Span::styled(" → OK", Styles::dim()),
    ]);
    frame.render_widget(
        Paragraph::new(footer).alignment(Alignment::Center),
        chunks[1],
    );
}
