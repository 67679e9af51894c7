//! Bar chart of expense totals per category.
//!
//! Terminals get a full-screen `ratatui` chart that stays up until a key is
//! pressed; scripted sessions get the same data as text bars.

use std::io::{self, Stdout};

use crossterm::{
    event::{self, Event, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame, Terminal,
};

use crate::core::services::CategoryTotals;

use super::presenter::format_amount;

pub const CHART_TITLE: &str = "Expenses by Category";
pub const X_AXIS_LABEL: &str = "Category";
pub const Y_AXIS_LABEL: &str = "Amount Spent";
const CLOSE_HINT: &str = "Press any key to close the chart";
const TEXT_BAR_WIDTH: usize = 40;
const BAR_GAP: u16 = 2;

type ChartTerminal = Terminal<CrosstermBackend<Stdout>>;

/// Shows the chart in the alternate screen and blocks until a key press.
pub fn show_bar_chart(totals: &CategoryTotals) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let result = wait_for_dismissal(&mut terminal, totals);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> io::Result<ChartTerminal> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(stdout, EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut ChartTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn wait_for_dismissal(terminal: &mut ChartTerminal, totals: &CategoryTotals) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw_chart(frame, totals))?;
        // Resize and other events fall through to a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(());
            }
        }
    }
}

fn draw_chart(frame: &mut Frame<'_>, totals: &CategoryTotals) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.size());

    frame.render_widget(
        Paragraph::new(Line::from(Y_AXIS_LABEL)).style(Style::default().add_modifier(Modifier::BOLD)),
        rows[0],
    );

    let bars: Vec<Bar<'_>> = totals
        .iter()
        .map(|(category, total)| {
            Bar::default()
                .label(Line::from(category.to_string()))
                .value(bar_value(total))
                .text_value(format_amount(total))
        })
        .collect();

    let inner_width = rows[1].width.saturating_sub(2);
    let chart = BarChart::default()
        .block(Block::default().title(CHART_TITLE).borders(Borders::ALL))
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width(inner_width, totals.len()))
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(Color::Gray));
    frame.render_widget(chart, rows[1]);

    frame.render_widget(
        Paragraph::new(Line::from(X_AXIS_LABEL))
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        rows[2],
    );
    frame.render_widget(
        Paragraph::new(Line::from(CLOSE_HINT)).style(Style::default().fg(Color::DarkGray)),
        rows[3],
    );
}

/// Bar heights are whole cents so small totals still register.
fn bar_value(total: f64) -> u64 {
    (total * 100.0).round().max(0.0) as u64
}

fn bar_width(available: u16, bars: usize) -> u16 {
    if bars == 0 {
        return 1;
    }
    let per_bar = available / bars as u16;
    per_bar.saturating_sub(BAR_GAP).clamp(3, 20)
}

/// Renders the chart as text lines: title, axis caption, one bar per category.
pub fn text_chart(totals: &CategoryTotals) -> Vec<String> {
    let label_width = totals
        .iter()
        .map(|(category, _)| category.chars().count())
        .chain(std::iter::once(X_AXIS_LABEL.len()))
        .max()
        .unwrap_or(0);
    let max = totals.max().unwrap_or(0.0);

    let mut lines = Vec::with_capacity(totals.len() + 2);
    lines.push(CHART_TITLE.to_string());
    lines.push(format!("{X_AXIS_LABEL:<label_width$} | {Y_AXIS_LABEL}"));
    for (category, total) in totals.iter() {
        lines.push(format!(
            "{category:<label_width$} | {} {}",
            text_bar(total, max, TEXT_BAR_WIDTH),
            format_amount(total)
        ));
    }
    lines
}

fn text_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    let ratio = (value / max).clamp(0.0, 1.0);
    let filled = ((ratio * width as f64).round() as usize).min(width);
    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
