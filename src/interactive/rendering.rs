//! TUI rendering with ratatui
//!
//! Chat-style layout: conversation on the left, search progress and history
//! on the right.

use super::app::{App, InputMode, MessageStyle, Speaker};
use crate::output::formatters::feedback_to_markers;
use crate::session::Mode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    render_chat(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.mode {
        Mode::Attack => "⚾ NUMBER BASEBALL - Attack: you guess",
        Mode::Defense => "⚾ NUMBER BASEBALL - Defense: I guess",
        Mode::Autoplay => "⚾ NUMBER BASEBALL - Autoplay",
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_chat(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = Vec::new();
    for msg in &app.messages {
        let (prefix, prefix_style) = match msg.speaker {
            Speaker::Engine => ("💻 ", Style::default().fg(Color::Cyan)),
            Speaker::Player => ("🧑 ", Style::default().fg(Color::Magenta)),
        };
        let style = match msg.style {
            MessageStyle::Info => Style::default().fg(Color::White),
            MessageStyle::Success => Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
            MessageStyle::Warning => Style::default().fg(Color::Yellow),
            MessageStyle::Error => Style::default().fg(Color::Red),
        };

        for (i, text) in msg.text.lines().enumerate() {
            let lead = if i == 0 { prefix } else { "   " };
            lines.push(Line::from(vec![
                Span::styled(lead, prefix_style),
                Span::styled(text.to_string(), style),
            ]));
        }
    }

    // Keep the newest lines in view
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(visible);

    let chat = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Conversation ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false })
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0));

    f.render_widget(chat, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_history(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Search Space ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if app.mode == Mode::Attack {
        let turns = app.session.turn();
        let paragraph = Paragraph::new(format!("{turns} guesses so far")).block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let remaining = app.session.candidate_count();
    let total = app.universe_size;
    let eliminated = if remaining == 0 {
        0
    } else {
        ((total - remaining) * 100 / total.max(1)) as u16
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(eliminated.min(100))
        .label(format!("{remaining}/{total} candidates remain"));

    f.render_widget(gauge, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let items: Vec<ListItem> = history
        .iter()
        .enumerate()
        .rev()
        .map(|(i, turn)| {
            let mut spans = vec![
                Span::raw(format!("{:2}: ", i + 1)),
                Span::styled(
                    turn.guess.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    feedback_to_markers(turn.feedback, app.scale),
                    Style::default().fg(Color::Green),
                ),
                Span::raw(format!(" {}", turn.feedback)),
            ];
            if let Some((before, after)) = turn.candidates {
                spans.push(Span::styled(
                    format!("  {before} → {after}"),
                    Style::default().fg(Color::DarkGray),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (content, color) = match app.input_mode {
        InputMode::Typing => (app.input_buffer.as_str(), Color::Yellow),
        InputMode::Thinking => ("", Color::DarkGray),
        InputMode::GameOver => ("", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(app.input_hint())
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode = Paragraph::new(format!(
        "Mode: {} | n={} | {}",
        app.mode,
        app.scale,
        app.session.config().executor.name()
    ))
        .alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Won: {}",
        app.stats.total_games, app.stats.games_won
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[1],
    );

    let average = app
        .stats
        .average_turns()
        .map_or_else(|| "Avg turns: -".to_string(), |avg| format!("Avg turns: {avg:.2}"));
    f.render_widget(
        Paragraph::new(average).alignment(Alignment::Center),
        chunks[2],
    );

    let help = Paragraph::new("q: Quit | Esc: Stop | Enter: Submit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
