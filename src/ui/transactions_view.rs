//! Transactions page: filter bar, table and pagination controls.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::api::types::{PaginationInfo, Transaction, TransactionFilters, TransactionStatus};
use crate::format::{format_currency, format_date_range};
use crate::ui::app::App;
use crate::ui::dashboard_view::{spinner, NO_DATA};
use crate::ui::pagination::{page_window, PageItem};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT, SKELETON, STATUS_ERROR,
    STATUS_OK,
};

pub const COLUMNS: [&str; 6] = [
    "AMOUNT",
    "TRANSACTION ID",
    "TRANSACTION TYPE",
    "DATE",
    "TIME",
    "STATUS",
];

const SKELETON_ROWS: usize = 6;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.store().transactions();
    let block = Block::default()
        .title(" Transactions ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(filter_bar(&state.filters)), chunks[0]);

    if state.is_loading {
        render_skeleton(frame, chunks[1], app.animation_tick());
        return;
    }
    if let Some(error) = &state.error {
        let message = Paragraph::new(Line::from(Span::styled(
            format!("Error: {}", error),
            Style::default().fg(STATUS_ERROR),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(message, chunks[1]);
        return;
    }
    let Some(data) = &state.data else {
        let message = Paragraph::new(Line::from(Span::styled(
            NO_DATA,
            Style::default().fg(MUTED_TEXT),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(message, chunks[1]);
        return;
    };

    frame.render_widget(transactions_table(&data.transactions), chunks[1]);
    frame.render_widget(
        Paragraph::new(pagination_lines(&data.pagination)),
        chunks[2],
    );
}

/// Account selector, date range and export button.
pub fn filter_bar(filters: &TransactionFilters) -> Line<'static> {
    let control = Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT);
    Line::from(vec![
        Span::styled(format!(" {} ▾ ", filters.account), control),
        Span::raw("  "),
        Span::styled(format!(" {} ", format_date_range(&filters.date_range)), control),
        Span::raw("  "),
        Span::styled(
            " Export ",
            Style::default()
                .fg(HEADER_TEXT)
                .bg(BRAND_BLUE)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn status_badge(status: TransactionStatus) -> Span<'static> {
    let color = match status {
        TransactionStatus::Processed => STATUS_OK,
        TransactionStatus::Failed => STATUS_ERROR,
    };
    Span::styled(format!("● {}", status.as_str()), Style::default().fg(color))
}

fn transaction_row(tx: &Transaction) -> Row<'static> {
    Row::new(vec![
        Cell::from(format_currency(tx.amount as f64, 0)),
        Cell::from(tx.transaction_id.clone()),
        Cell::from(tx.kind.as_str()),
        Cell::from(tx.date.clone()),
        Cell::from(tx.time.clone()),
        Cell::from(Line::from(status_badge(tx.status))),
    ])
    .style(Style::default().fg(HEADER_TEXT))
}

fn column_widths() -> [Constraint; 6] {
    [
        Constraint::Length(14),
        Constraint::Length(18),
        Constraint::Length(18),
        Constraint::Length(14),
        Constraint::Length(10),
        Constraint::Min(12),
    ]
}

fn header_row() -> Row<'static> {
    Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
        .style(
            Style::default()
                .fg(MUTED_TEXT)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1)
}

pub fn transactions_table(transactions: &[Transaction]) -> Table<'static> {
    let rows: Vec<Row> = transactions.iter().map(transaction_row).collect();
    Table::new(rows, column_widths())
        .header(header_row())
        .column_spacing(1)
}

fn render_skeleton(frame: &mut Frame, area: Rect, tick: u8) {
    let block_style = Style::default().fg(SKELETON);
    let rows: Vec<Row> = (0..SKELETON_ROWS)
        .map(|_| {
            Row::new(column_widths().iter().map(|_| Cell::from("██████████")))
                .style(block_style)
        })
        .collect();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    frame.render_widget(
        Table::new(rows, column_widths()).header(header_row()),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} ", spinner(tick)), Style::default().fg(STATUS_OK)),
            Span::styled("Loading transactions...", Style::default().fg(MUTED_TEXT)),
        ])),
        chunks[1],
    );
}

/// `Showing 1 to 6 of 20 results`
pub fn results_summary(info: &PaginationInfo) -> String {
    format!(
        "Showing {} to {} of {} results",
        info.first_item(),
        info.last_item(),
        info.total_items
    )
}

/// Summary line plus previous / page buttons / next.
pub fn pagination_lines(info: &PaginationInfo) -> Vec<Line<'static>> {
    let enabled = Style::default().fg(HEADER_TEXT);
    let disabled = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM);
    let current = Style::default()
        .fg(HEADER_TEXT)
        .bg(BRAND_BLUE)
        .add_modifier(Modifier::BOLD);

    let mut controls = vec![Span::styled(
        "‹ Previous ",
        if info.has_previous() { enabled } else { disabled },
    )];
    for item in page_window(info.current_page, info.total_pages) {
        match item {
            PageItem::Page(page) => {
                let style = if page == info.current_page {
                    current
                } else {
                    enabled
                };
                controls.push(Span::styled(format!(" {} ", page), style));
            }
            PageItem::Ellipsis => {
                controls.push(Span::styled(" … ", Style::default().fg(MUTED_TEXT)));
            }
        }
    }
    controls.push(Span::styled(
        " Next ›",
        if info.has_next() { enabled } else { disabled },
    ));

    vec![
        Line::from(Span::styled(
            results_summary(info),
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(controls),
    ]
}
