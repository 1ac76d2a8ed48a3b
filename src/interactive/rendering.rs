//! TUI rendering with ratatui
//!
//! Draws the hex-dump board, the message log and the status line.

use super::app::App;
use super::geometry::{BOARD_WIDTH, BoardGeometry};
use crate::core::{COLUMN_COUNT, CellPos, ROW_COUNT};
use crate::output::{MESSAGE_LINES, format_address, memory_value_label};
use crate::session::{CellStyle, IndicatorStatus};
use rand::Rng;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const TERMINAL_GREEN: Color = Color::Rgb(0, 255, 0);
const ADDRESS_GREEN: Color = Color::Rgb(0, 204, 0);
const MATCHED_BG: Color = Color::Rgb(0, 51, 0);

/// Main UI rendering function
///
/// Also records where the board landed so mouse events can be mapped back
/// to cells.
pub fn ui<R: Rng>(f: &mut Frame, app: &mut App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Length(ROW_COUNT as u16 + 2), // Board and messages
            Constraint::Length(3),                    // Status bar
            Constraint::Length(1),                    // Key help
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOARD_WIDTH + 2), Constraint::Min(20)])
        .split(chunks[1]);

    app.geometry = BoardGeometry::new(main_chunks[0].x + 1, main_chunks[0].y + 1);
    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_status(f, app, chunks[2]);
    render_help(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("TERMINAL MEMORY DUMP")
        .style(
            Style::default()
                .fg(TERMINAL_GREEN)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(TERMINAL_GREEN).bg(Color::Black)),
        );
    f.render_widget(header, area);
}

fn cell_style(style: CellStyle) -> Style {
    match style {
        CellStyle::Base => Style::default().fg(TERMINAL_GREEN).bg(Color::Black),
        CellStyle::Hover => Style::default().fg(Color::Black).bg(TERMINAL_GREEN),
        CellStyle::Matched => Style::default().fg(TERMINAL_GREEN).bg(MATCHED_BG),
        CellStyle::Revealed => Style::default()
            .fg(Color::Red)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_board<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let board = app.session.board();
    let lines: Vec<Line> = (0..ROW_COUNT)
        .map(|row| {
            let mut spans = Vec::new();
            for column in 0..COLUMN_COUNT {
                if column > 0 {
                    spans.push(Span::raw("    "));
                }
                spans.push(Span::styled(
                    format!("{} ", format_address(column, row)),
                    Style::default().fg(ADDRESS_GREEN),
                ));
                for (offset, &ch) in board.segment(column, row).iter().enumerate() {
                    let cell = CellPos::in_column(column, row, offset);
                    spans.push(Span::styled(
                        ch.to_string(),
                        cell_style(app.session.style_at(cell)),
                    ));
                }
            }
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().fg(TERMINAL_GREEN).bg(Color::Black)),
    );
    f.render_widget(paragraph, area);
}

fn render_messages<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .lines()
        .take(MESSAGE_LINES)
        .map(|text| ListItem::new(format!("> {text}")))
        .collect();

    let messages_list = List::new(messages).block(
        Block::default()
            .title(" Messages ")
            .borders(Borders::ALL)
            .style(Style::default().fg(TERMINAL_GREEN).bg(Color::Black)),
    );

    f.render_widget(messages_list, area);
}

fn render_status<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut boxes = vec![Span::raw("Attempts: ")];
    for status in app.session.indicators() {
        let color = match status {
            IndicatorStatus::Intact => TERMINAL_GREEN,
            IndicatorStatus::Wrong => Color::Red,
        };
        boxes.push(Span::styled("■ ", Style::default().fg(color)));
    }
    let indicators = Paragraph::new(Line::from(boxes))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(indicators, chunks[0]);

    let memory = Paragraph::new(memory_value_label(app.memory_value()))
        .alignment(Alignment::Center)
        .style(Style::default().fg(TERMINAL_GREEN))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(memory, chunks[1]);
}

fn render_help<R: Rng>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let help_text = if app.is_finished() {
        "r: New Board | q: Quit"
    } else {
        "Mouse/Arrows: Hover | Click/Enter: Select | r: New Board | g: Give Up | q: Quit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
