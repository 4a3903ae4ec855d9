//! Post-round description dialog
//!
//! After a solved round the frontends show a full-screen card: the
//! round's title, its picture, and the wrapped description, dismissed
//! with a single "Next" action. White-on-black, like the desktop
//! build's option pane.

use crate::core::config::config;
use crate::core::error::Result;
use crate::timer::Countdown;
use crate::ui::image_cells::CellImage;
use crate::ui::term::{poll_event, TerminalGuard};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use image::DynamicImage;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};
use std::time::Duration;

/// Content of one description dialog
pub struct Dialog<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub image: Option<&'a DynamicImage>,
}

/// How the dialog was dismissed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    /// Player asked for the next round
    Next,
    /// Player quit the game from the dialog
    Quit,
    /// The idle countdown expired while the dialog was up
    TimedOut,
}

/// Wrap description text at the last space at or before `width`.
///
/// A single word longer than the width is hard-broken rather than
/// scanned past the line start.
pub fn wrap_description(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars: Vec<char> = text.chars().collect();
    let mut lines = Vec::new();
    let mut start = 0;

    while start < chars.len() {
        if chars.len() - start <= width {
            lines.push(chars[start..].iter().collect());
            break;
        }

        let end = start + width;
        let mut cut = end;
        while cut > start && chars[cut] != ' ' {
            cut -= 1;
        }

        if cut == start {
            // One unbroken word filling the whole line
            lines.push(chars[start..end].iter().collect());
            start = end;
        } else {
            lines.push(chars[start..cut].iter().collect());
            start = cut + 1;
        }
    }

    lines
}

/// Show the dialog until dismissed, keeping the idle countdown honest
pub fn show(
    term: &mut TerminalGuard,
    dialog: &Dialog<'_>,
    idle: &mut Countdown,
) -> Result<DialogOutcome> {
    let cfg = config();
    let poll = Duration::from_millis(cfg.poll_interval_ms);
    let cells = dialog
        .image
        .map(|image| CellImage::fit(image, cfg.image_cols, cfg.image_rows));
    let body = build_lines(dialog, cells.as_ref());

    loop {
        let text = Text::from(body.clone());
        term.terminal().draw(|frame| {
            let paragraph = Paragraph::new(text)
                .alignment(Alignment::Center)
                .block(Block::default().style(Style::default().fg(Color::White).bg(Color::Black)));
            frame.render_widget(paragraph, frame.size());
        })?;

        if let Some(event) = poll_event(poll)? {
            idle.start_or_restart();
            if let Event::Key(key) = event {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                match key.code {
                    KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('n') => {
                        return Ok(DialogOutcome::Next)
                    }
                    KeyCode::Esc => return Ok(DialogOutcome::Quit),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(DialogOutcome::Quit)
                    }
                    _ => {}
                }
            }
        }

        if idle.fire() {
            tracing::info!("idle countdown expired on the description dialog");
            return Ok(DialogOutcome::TimedOut);
        }
    }
}

/// Brief "Correct!" splash shown before the description dialog
pub fn flash_correct(term: &mut TerminalGuard) -> Result<()> {
    term.terminal().draw(|frame| {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let paragraph = Paragraph::new(Text::from(lines))
            .alignment(Alignment::Center)
            .block(Block::default().style(Style::default().bg(Color::Black)));
        frame.render_widget(paragraph, frame.size());
    })?;
    std::thread::sleep(CORRECT_FLASH);
    Ok(())
}

/// How long the "Correct!" splash stays up
const CORRECT_FLASH: Duration = Duration::from_millis(600);

fn build_lines(dialog: &Dialog<'_>, cells: Option<&CellImage>) -> Vec<Line<'static>> {
    let cfg = config();
    let mut lines = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        dialog.title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    if let Some(cells) = cells {
        lines.extend(cells.to_lines());
        lines.push(Line::from(""));
    }

    for wrapped in wrap_description(dialog.description, cfg.wrap_width) {
        lines.push(Line::from(wrapped));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[ Next ]  enter continues, esc quits".to_string(),
        Style::default().add_modifier(Modifier::DIM),
    )));

    lines
}
