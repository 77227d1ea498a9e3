//! Dashboard page: account details card and revenue chart.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::api::types::{AccountDetails, DashboardData, Period};
use crate::format::{format_axis_value, format_change, format_currency};
use crate::store::dashboard::DashboardState;
use crate::ui::app::App;
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_BLUE, CHART_BAR, COPY_BUTTON, GLOBAL_BORDER, HEADER_TEXT, MUTED_TEXT,
    SKELETON, STATUS_ERROR, STATUS_OK,
};

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const NO_DATA: &str = "No data available";

const CARD_HEIGHT: u16 = 7;

pub fn spinner(tick: u8) -> &'static str {
    SPINNER_FRAMES[(tick as usize) % SPINNER_FRAMES.len()]
}

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let state = app.store().dashboard();
    let block = Block::default()
        .title(" Online Payments ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if state.is_loading {
        render_skeleton(frame, inner, app.animation_tick());
        return;
    }
    if let Some(error) = &state.error {
        render_message(frame, inner, &format!("Error: {}", error), STATUS_ERROR);
        return;
    }
    let Some(data) = &state.data else {
        render_message(frame, inner, NO_DATA, MUTED_TEXT);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(CARD_HEIGHT), Constraint::Min(0)])
        .split(inner);

    render_metrics_card(frame, chunks[0], &data.metrics.account_details, app.copy_label());
    render_revenue_chart(frame, chunks[1], &state, data, app.animation_tick());
}

fn render_message(frame: &mut Frame, area: Rect, message: &str, color: ratatui::style::Color) {
    let vertical_pad = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..vertical_pad).map(|_| Line::from("")).collect();
    lines.push(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(color),
    )));
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_skeleton(frame: &mut Frame, area: Rect, tick: u8) {
    let bar = Style::default().fg(SKELETON);
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  ████████████", bar)),
        Line::from(Span::styled("  ██████████████████████", bar)),
        Line::from(Span::styled("  ████████████████", bar)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {} ", spinner(tick)), Style::default().fg(STATUS_OK)),
            Span::styled("Loading dashboard...", Style::default().fg(MUTED_TEXT)),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

/// Lines of the account details card.
pub fn metrics_card_lines(details: &AccountDetails, copy_label: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(Span::styled(
            "ACCOUNT DETAILS",
            Style::default().fg(MUTED_TEXT),
        )),
        Line::from(Span::styled(
            details.bank.clone(),
            Style::default().fg(HEADER_TEXT),
        )),
        Line::from(vec![
            Span::styled(
                details.account_number.clone(),
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!(" {} ", copy_label),
                Style::default().fg(HEADER_TEXT).bg(COPY_BUTTON),
            ),
        ]),
        Line::from(Span::styled(
            details.business_name.clone(),
            Style::default().fg(HEADER_TEXT),
        )),
    ]
}

fn render_metrics_card(frame: &mut Frame, area: Rect, details: &AccountDetails, copy_label: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let paragraph = Paragraph::new(metrics_card_lines(details, copy_label)).block(block);
    frame.render_widget(paragraph, area);
}

fn period_buttons(selected: Period) -> Line<'static> {
    let mut spans = vec![Span::styled(
        "Showing data for ",
        Style::default().fg(MUTED_TEXT),
    )];
    for (i, period) in Period::ALL.into_iter().enumerate() {
        let style = if period == selected {
            Style::default()
                .fg(HEADER_TEXT)
                .bg(BRAND_BLUE)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT)
        };
        spans.push(Span::raw(" "));
        spans.push(Span::styled(format!(" {} {} ", i + 1, period.label()), style));
    }
    Line::from(spans)
}

/// Header lines above the bars: period selector, revenue change, total.
pub fn revenue_lines(state: &DashboardState, data: &DashboardData, tick: u8) -> Vec<Line<'static>> {
    let revenue = &data.metrics.revenue;
    let change_color = if revenue.change < 0.0 {
        STATUS_ERROR
    } else {
        STATUS_OK
    };
    let mut selector = period_buttons(state.selected_period);
    if state.is_updating_chart {
        selector.spans.push(Span::styled(
            format!("  {} updating", spinner(tick)),
            Style::default().fg(MUTED_TEXT),
        ));
    }
    vec![
        selector,
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Revenue ",
                Style::default()
                    .fg(HEADER_TEXT)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format_change(revenue.change),
                Style::default().fg(change_color),
            ),
            Span::styled(
                format!(" {}", revenue.period),
                Style::default().fg(MUTED_TEXT),
            ),
        ]),
        Line::from(Span::styled(
            format_currency(revenue.current, 2),
            Style::default()
                .fg(HEADER_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "in total value",
            Style::default().fg(MUTED_TEXT),
        )),
    ]
}

fn render_revenue_chart(
    frame: &mut Frame,
    area: Rect,
    state: &DashboardState,
    data: &DashboardData,
    tick: u8,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header = revenue_lines(state, data, tick);
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(header.len() as u16 + 1),
            Constraint::Min(0),
        ])
        .split(inner);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let bars: Vec<Bar> = data
        .chart_data
        .iter()
        .map(|point| {
            Bar::default()
                .value(point.value)
                .label(Line::from(point.month.clone()))
                .text_value(format_axis_value(point.value as f64))
                .style(Style::default().fg(CHART_BAR))
        })
        .collect();

    let chart = BarChart::default()
        .data(BarGroup::default().bars(&bars))
        .bar_width(6)
        .bar_gap(2)
        .value_style(Style::default().fg(HEADER_TEXT).bg(CHART_BAR));
    frame.render_widget(chart, chunks[1]);
}
