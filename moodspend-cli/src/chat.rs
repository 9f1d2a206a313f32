//! Interactive chat session: free text drives the purchase dialogue, the
//! ledger feed stays visible, slash commands cover delete and the
//! cut-back recommendation.

use anyhow::Result;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use moodspend_core::{
    DialogueSession, DialogueState, Ledger, PurchaseRecord, Sentiment, recommend,
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use std::io::{self, Stdout};

#[derive(Clone, Debug)]
struct Msg {
    role: Role,
    content: String,
}

#[derive(Clone, Debug)]
enum Role {
    User,
    Bot,
}

pub fn run_chat(ledger: &dyn Ledger) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = chat_loop(&mut terminal, ledger);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    res
}

fn chat_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, ledger: &dyn Ledger) -> Result<()> {
    let mut session = DialogueSession::new()?;
    let mut messages: Vec<Msg> = vec![Msg {
        role: Role::Bot,
        content: "Tell me about a recent purchase, e.g. 'I bought a phone for 900'. \
                  Type /help for commands."
            .to_string(),
    }];
    let mut input = String::new();
    let mut feed = Vec::new();
    match ledger.list() {
        Ok(rows) => feed = rows,
        Err(err) => messages.push(Msg {
            role: Role::Bot,
            content: format!("Could not read the ledger: {err}"),
        }),
    }

    loop {
        terminal.draw(|f| {
            let size = f.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(10),
                    Constraint::Min(5),
                    Constraint::Length(3),
                ])
                .split(size);

            let feed_widget = Paragraph::new(Text::from(feed_lines(&feed)))
                .block(Block::default().borders(Borders::ALL).title("purchases (newest first)"))
                .wrap(Wrap { trim: false });
            f.render_widget(feed_widget, chunks[0]);

            let mut lines: Vec<Line> = Vec::new();
            for m in &messages {
                let (tag, color) = match m.role {
                    Role::User => ("you", Color::Cyan),
                    Role::Bot => ("moodspend", Color::Magenta),
                };
                lines.push(Line::from(vec![
                    Span::styled(format!("{}: ", tag), Style::default().fg(color)),
                    Span::raw(m.content.clone()),
                ]));
                lines.push(Line::raw(""));
            }
            let history = Paragraph::new(Text::from(lines))
                .block(Block::default().borders(Borders::ALL).title("conversation"))
                .wrap(Wrap { trim: false });
            f.render_widget(history, chunks[1]);

            // The input box doubles as the state indicator: its title says
            // which answer the dialogue is waiting for
            let input_title = match session.state() {
                DialogueState::Idle => "your purchase",
                DialogueState::AwaitingAmount { .. } => "amount",
                DialogueState::AwaitingFeeling { .. } => "feeling",
            };
            let input_widget = Paragraph::new(input.as_str())
                .block(Block::default().borders(Borders::ALL).title(input_title))
                .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
            f.render_widget(input_widget, chunks[2]);
        })?;

        if event::poll(std::time::Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Esc => break,
                    KeyCode::Enter => {
                        let trimmed = input.trim().to_string();
                        input.clear();
                        if trimmed.is_empty() {
                            continue;
                        }
                        if trimmed == "/quit" {
                            break;
                        }
                        messages.push(Msg {
                            role: Role::User,
                            content: trimmed.clone(),
                        });

                        let reply = match handle_slash(&trimmed, &mut session, ledger) {
                            Some(reply) => reply,
                            None => match session.handle(
                                &trimmed,
                                ledger,
                                Local::now().naive_local(),
                            ) {
                                Ok(reply) => reply.message(),
                                Err(err) => {
                                    format!("Could not save: {err}. Answer again to retry.")
                                }
                            },
                        };
                        messages.push(Msg {
                            role: Role::Bot,
                            content: reply,
                        });

                        match ledger.list() {
                            Ok(rows) => feed = rows,
                            Err(err) => messages.push(Msg {
                                role: Role::Bot,
                                content: format!("Could not read the ledger: {err}"),
                            }),
                        }
                    }
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Char(c) => {
                        input.push(c);
                    }
                    _ => {}
                }
            }
        }
    }

    Ok(())
}

fn sentiment_color(sentiment: Sentiment) -> Color {
    match sentiment {
        Sentiment::Positive => Color::Green,
        Sentiment::Neutral => Color::Yellow,
        Sentiment::Negative => Color::Red,
    }
}

fn feed_lines(records: &[PurchaseRecord]) -> Vec<Line<'static>> {
    if records.is_empty() {
        return vec![Line::from(Span::styled(
            "No purchases logged yet.",
            Style::default().fg(Color::Gray),
        ))];
    }
    records
        .iter()
        .map(|r| {
            Line::from(vec![
                Span::styled("| ", Style::default().fg(sentiment_color(r.sentiment))),
                Span::raw(format!(
                    "{} | {} | ${:.2} | {} | {}",
                    r.id(),
                    r.item,
                    r.amount,
                    r.sentiment,
                    r.category
                )),
            ])
        })
        .collect()
}

fn handle_slash(input: &str, session: &mut DialogueSession, ledger: &dyn Ledger) -> Option<String> {
    if !input.starts_with('/') {
        return None;
    }
    let mut parts = input.splitn(2, ' ');
    let command = parts.next().unwrap_or("");
    let arg = parts.next().unwrap_or("").trim();

    let reply = match command {
        "/help" => "Commands:\n\
- /list (refresh the feed)\n\
- /delete <id> (ids are the timestamps in the feed)\n\
- /recommend\n\
- /cancel (drop the purchase in progress)\n\
- /quit (or Esc)\n\
Anything else is a purchase sentence or an answer to my question."
            .to_string(),
        "/list" => match ledger.list() {
            Ok(records) => format!("Feed refreshed: {} purchase(s).", records.len()),
            Err(err) => format!("Could not read the ledger: {err}"),
        },
        "/cancel" => session.abandon().message(),
        "/delete" => {
            if arg.is_empty() {
                "Usage: /delete <id>".to_string()
            } else {
                match ledger.delete(arg) {
                    Ok(()) => format!("Deleted {} (if it existed).", arg),
                    Err(err) => format!("Could not delete: {err}"),
                }
            }
        }
        "/recommend" => match ledger.list() {
            Ok(records) => match recommend(&records) {
                Some(top) => top.message(),
                None => "Nothing clearly negative to cut back on!".to_string(),
            },
            Err(err) => format!("Could not read the ledger: {err}"),
        },
        _ => "Unknown command. Try /help".to_string(),
    };
    Some(reply)
}
