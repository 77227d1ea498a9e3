use chrono::{Datelike, Duration, NaiveDate};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::api::types::DateRange;
use crate::format::format_date_range;
use crate::ui::app::{App, Page};
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{centered_rect, layout_regions};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR,
};
use crate::ui::{dashboard_view, transactions_view};

const PICKER_WIDTH: u16 = 32;
const PICKER_HEIGHT: u16 = 13;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new(app.page()).widget(), header);
    frame.render_widget(Clear, body);
    match app.page() {
        Page::Dashboard => dashboard_view::render(frame, body, app),
        Page::Transactions => transactions_view::render(frame, body, app),
    }
    let footer_widget = Footer::new(app.page(), app.date_picker().is_open());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let (Some(cursor), Some(range)) = (app.date_picker().cursor(), app.date_picker().range()) {
        let popup = centered_rect(PICKER_WIDTH, PICKER_HEIGHT, body);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .title(format!(" {} ", cursor.format("%B %Y")))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(POPUP_BORDER));
        frame.render_widget(Paragraph::new(calendar_lines(cursor, &range)).block(block), popup);
    }

    if let Some(notice) = app.notice() {
        let width = (notice.chars().count() as u16).saturating_add(4);
        let popup = centered_rect(width, 3, body);
        frame.render_widget(Clear, popup);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(STATUS_ERROR));
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                notice.to_string(),
                Style::default().fg(HEADER_TEXT),
            )))
            .block(block),
            popup,
        );
    }
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

fn in_range(day: NaiveDate, range: &DateRange) -> bool {
    match (range.from, range.to) {
        (Some(from), Some(to)) => day >= from && day <= to,
        (Some(from), None) => day == from,
        _ => false,
    }
}

/// Month grid around `cursor`, weeks starting on Monday.
pub fn calendar_lines(cursor: NaiveDate, range: &DateRange) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            format_date_range(range),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            " Mo  Tu  We  Th  Fr  Sa  Su",
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD),
        )),
    ];

    let first = first_of_month(cursor);
    let lead = first.weekday().num_days_from_monday() as usize;
    let mut week: Vec<Span<'static>> = vec![Span::raw("    "); lead];
    let mut day = first;
    while day.month() == first.month() {
        let style = if day == cursor {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(BRAND_BLUE)
                .add_modifier(Modifier::BOLD)
        } else if in_range(day, range) {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        } else {
            Style::default().fg(HEADER_TEXT)
        };
        week.push(Span::styled(format!(" {:>2} ", day.day()), style));
        if week.len() == 7 {
            lines.push(Line::from(std::mem::take(&mut week)));
        }
        day += Duration::days(1);
    }
    if !week.is_empty() {
        lines.push(Line::from(week));
    }
    lines
}
