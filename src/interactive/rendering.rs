//! TUI rendering with ratatui
//!
//! Digit entry boxes, annotation panel and guess history.

use super::app::{App, InputMode};
use crate::core::DIGIT_COUNT;
use crate::output::formatters::{mark_symbol, score_badge};
use crate::session::{DigitMark, GameSession};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(5), // Entry boxes
            Constraint::Length(3), // Status message
            Constraint::Length(4), // Annotation panel
            Constraint::Min(5),    // History
            Constraint::Length(1), // Key help
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_entry(f, app, chunks[1]);
    render_message(f, app, chunks[2]);
    render_annotations(f, app, chunks[3]);
    render_history(f, &app.session, chunks[4]);
    render_help(f, app, chunks[5]);
}

/// Color for a digit according to the player's tag
const fn mark_color(mark: DigitMark) -> Color {
    match mark {
        DigitMark::Unknown => Color::White,
        DigitMark::InKnownPosition => Color::Green,
        DigitMark::InUnknownPosition => Color::Yellow,
        DigitMark::NotPresent => Color::DarkGray,
    }
}

fn digit_style(session: &GameSession, digit: u8) -> Style {
    let mark = session.annotation(digit).unwrap_or_default();
    Style::default()
        .fg(mark_color(mark))
        .add_modifier(Modifier::BOLD)
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🔢 NUMBER GUESS")
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

fn render_entry(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::WinCelebration => (" 🎉 SOLVED! 🎉 ", Color::Green),
        InputMode::Entry => (" Your Guess ", Color::Yellow),
        InputMode::Annotate => (" Your Guess (annotating) ", Color::DarkGray),
    };

    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .style(Style::default().fg(color));
    let inner = outer.inner(area);
    f.render_widget(outer, area);

    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend([Constraint::Length(5); DIGIT_COUNT]);
    constraints.push(Constraint::Min(0));
    let boxes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (i, slot) in app.entry.iter().enumerate() {
        let focused = app.input_mode == InputMode::Entry && i == app.cursor;
        let (text, style) = match slot {
            Some(d) => (d.to_string(), digit_style(&app.session, *d)),
            None => (" ".to_string(), Style::default()),
        };

        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::Gray)
        };

        let cell = Paragraph::new(Span::styled(text, style))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(if focused {
                        BorderType::Thick
                    } else {
                        BorderType::Plain
                    })
                    .border_style(border),
            );
        f.render_widget(cell, boxes[i + 1]);
    }
}

fn render_message(f: &mut Frame, app: &App, area: Rect) {
    let text = match app.input_mode {
        InputMode::WinCelebration => format!(
            "{}  Solved in {} {}! The number was {}.",
            app.session.message(),
            app.session.guess_count(),
            if app.session.guess_count() == 1 {
                "guess"
            } else {
                "guesses"
            },
            app.session.reveal_secret()
        ),
        _ => app.session.message().to_string(),
    };

    let message = app.session.message();
    let style = if message.starts_with("Your guess") || message.starts_with("New game") {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Red)
    };

    let paragraph = Paragraph::new(text)
        .style(style)
        .block(Block::default().title(" Status ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_annotations(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = Vec::new();
    for (digit, mark) in app.session.annotations().iter() {
        spans.push(Span::styled(
            format!(" {digit}{} ", mark_symbol(mark)),
            digit_style(&app.session, digit),
        ));
    }

    let legend = Line::from(vec![
        Span::styled("✓ known place  ", Style::default().fg(Color::Green)),
        Span::styled("? unknown place  ", Style::default().fg(Color::Yellow)),
        Span::styled("✗ not in", Style::default().fg(Color::DarkGray)),
    ]);

    let border = if app.input_mode == InputMode::Annotate {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let panel = Paragraph::new(vec![Line::from(spans), legend])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Notes (TAB, then press a digit) ")
                .borders(Borders::ALL)
                .border_style(border),
        );
    f.render_widget(panel, area);
}

fn render_history(f: &mut Frame, session: &GameSession, area: Rect) {
    let total = session.history().len();
    let items: Vec<ListItem> = session
        .history()
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let mut spans = vec![Span::raw(format!("Guess #{}: ", total - i))];
            for &d in record.guess.digits() {
                spans.push(Span::styled(d.to_string(), digit_style(session, d)));
            }
            spans.push(Span::raw(format!(", Result: {} ", record.score)));
            spans.push(Span::styled(
                score_badge(record.score),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::raw(format!(
                ", Time Spent: {:.2}s",
                record.time_spent_secs()
            )));
            ListItem::new(Line::from(spans))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" History ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(history, area);
}

fn render_help(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::WinCelebration => "q: Quit | n: New Game",
        InputMode::Entry => "0-9: Enter | ←/→: Move | Enter: Guess | TAB: Notes | Ctrl-N: New | q: Quit",
        InputMode::Annotate => "0-9: Cycle note | TAB/ESC: Back | q: Quit",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Secret;
    use ratatui::{Terminal, backend::TestBackend};

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_history_and_message() {
        let mut app = App::new(GameSession::with_secret(Secret::parse("1234").unwrap()));
        app.session.submit_guess("1243").unwrap();

        let text = screen_text(&app);
        assert!(text.contains("Guess #1: 1243, Result: -2 +2"));
        assert!(text.contains("Your guess: 1243, Result: -2 +2"));
    }

    #[test]
    fn celebration_reveals_secret() {
        let mut app = App::new(GameSession::with_secret(Secret::parse("1234").unwrap()));
        app.entry = [Some(1), Some(2), Some(3), Some(4)];
        app.submit();

        let text = screen_text(&app);
        assert!(text.contains("The number was 1234."));
    }
}
