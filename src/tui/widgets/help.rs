//! Help popup widget with key bindings.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use super::centered;
use crate::tui::style::Styles;

const BINDINGS: &[(&str, &str)] = &[
    ("↑/k ↓/j", "Move cursor"),
    ("PgUp/PgDn", "Move cursor by a page"),
    ("Home/End", "First / last student"),
    ("Space", "Select or unselect the cursor row"),
    ("Ctrl-A", "Select every student"),
    ("Esc", "Clear selection"),
    ("a, i", "Type a new student name"),
    ("Enter", "Add the typed student (in name field)"),
    ("p", "Mark selected students present today"),
    ("x", "Mark selected students absent today"),
    ("s", "Save the table to the attendance file"),
    ("?", "Toggle this help"),
    ("q", "Quit (asks for confirmation)"),
    ("Ctrl-C", "Quit immediately"),
];

/// Renders the help popup centered on screen with scroll support.
pub fn render_help(frame: &mut Frame, area: Rect, scroll: &mut usize) {
    let popup_area = centered(area, 60, (40, 80), (10, 24));
    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Styles::accent());
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::vertical([
        Constraint::Min(1),    // Content
        Constraint::Length(1), // Footer
    ])
    .split(inner);

    let content: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, text)| {
            Line::from(vec![
                Span::styled(format!("{:<12}", keys), Styles::popup_key()),
                Span::styled(*text, Styles::default()),
            ])
        })
        .collect();

    // Clamp scroll to valid range
    let visible_height = chunks[0].height as usize;
    let max_scroll = content.len().saturating_sub(visible_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }

    let paragraph = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .scroll((*scroll as u16, 0));
    frame.render_widget(paragraph, chunks[0]);

    let scroll_info = if max_scroll > 0 {
        format!(" [{}/{}]", *scroll + 1, max_scroll + 1)
    } else {
        String::new()
    };
    let footer = Line::from(vec![
        Span::styled("Esc", Styles::popup_key()),
        Span::styled(" → close", Styles::dim()),
        Span::styled(scroll_info, Styles::dim()),
    ]);
    frame.render_widget(Paragraph::new(footer), chunks[1]);
}
