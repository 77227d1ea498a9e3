use crate::ui::app::Page;
use crate::ui::theme::{BRAND_BLUE, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar with the navigation tabs.
pub struct Header {
    active: Page,
}

impl Header {
    pub fn new(active: Page) -> Self {
        Self { active }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active_style = Style::default()
            .fg(HEADER_TEXT)
            .bg(BRAND_BLUE)
            .add_modifier(Modifier::BOLD);

        let mut spans = vec![Span::styled("  Fundr  ", text_style.add_modifier(Modifier::BOLD))];
        for page in [Page::Dashboard, Page::Transactions] {
            spans.push(Span::styled("│", separator_style));
            let style = if page == self.active {
                active_style
            } else {
                text_style
            };
            spans.push(Span::styled(format!(" {} ", page.title()), style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
