//! Scramble game frontend: typed guesses and drip-fed hints

use crate::core::config::config;
use crate::core::error::Result;
use crate::core::types::{ExitReason, GameSummary};
use crate::scramble::{GuessOutcome, ScrambleRound, ScrambleSession};
use crate::timer::Countdown;
use crate::ui::dialog::{self, Dialog, DialogOutcome};
use crate::ui::term::{poll_event, TerminalGuard};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};
use std::time::Duration;

enum RoundOutcome {
    Solved,
    Quit,
    TimedOut,
}

/// Run the scramble game until the pool is exhausted, the player quits,
/// or the idle countdown expires
pub fn run(term: &mut TerminalGuard, session: &mut ScrambleSession) -> Result<GameSummary> {
    let cfg = config();
    let poll = Duration::from_millis(cfg.poll_interval_ms);
    let mut idle = Countdown::new(Duration::from_millis(cfg.idle_timeout_ms));
    let mut hint = Countdown::new(Duration::from_millis(cfg.hint_interval_ms));
    idle.start_or_restart();
    let mut solved = 0u32;

    loop {
        if session.next_round().is_none() {
            return Ok(GameSummary::new(solved, ExitReason::ContentExhausted));
        }
        let remaining = session.remaining();
        hint.start_or_restart();
        let Some(round) = session.current_mut() else {
            return Ok(GameSummary::new(solved, ExitReason::ContentExhausted));
        };

        let outcome = run_round(term, round, remaining, &mut idle, &mut hint, poll)?;
        match outcome {
            RoundOutcome::Solved => {
                solved += 1;
                let Some(scramble) = session.finish_round() else {
                    return Ok(GameSummary::new(solved, ExitReason::ContentExhausted));
                };
                let dismissed = dialog::show(
                    term,
                    &Dialog {
                        title: &scramble.word,
                        description: &scramble.description,
                        image: scramble.image.as_ref(),
                    },
                    &mut idle,
                )?;
                match dismissed {
                    DialogOutcome::Next => {}
                    DialogOutcome::Quit => {
                        return Ok(GameSummary::new(solved, ExitReason::PlayerQuit))
                    }
                    DialogOutcome::TimedOut => {
                        tracing::info!("word scramble game timed out");
                        return Ok(GameSummary::new(solved, ExitReason::IdleTimeout));
                    }
                }
            }
            RoundOutcome::Quit => return Ok(GameSummary::new(solved, ExitReason::PlayerQuit)),
            RoundOutcome::TimedOut => {
                tracing::info!("word scramble game timed out");
                return Ok(GameSummary::new(solved, ExitReason::IdleTimeout));
            }
        }
    }
}

fn run_round(
    term: &mut TerminalGuard,
    round: &mut ScrambleRound,
    remaining: usize,
    idle: &mut Countdown,
    hint: &mut Countdown,
    poll: Duration,
) -> Result<RoundOutcome> {
    let mut buffer = String::new();
    let mut message: Option<String> = None;

    loop {
        term.terminal().draw(|frame| {
            let lines = round_lines(round, &buffer, message.as_deref(), remaining);
            let paragraph = Paragraph::new(Text::from(lines))
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
                    KeyCode::Esc => return Ok(RoundOutcome::Quit),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(RoundOutcome::Quit)
                    }
                    KeyCode::Backspace => {
                        buffer.pop();
                        message = None;
                    }
                    KeyCode::Enter => {
                        // Start the attempt over
                        buffer.clear();
                        message = None;
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        if buffer.chars().count() >= round.word().chars().count() {
                            continue;
                        }
                        buffer.push(c);
                        match round.submit_guess(&buffer) {
                            GuessOutcome::Correct => {
                                dialog::flash_correct(term)?;
                                return Ok(RoundOutcome::Solved);
                            }
                            GuessOutcome::Wrong => {
                                message = Some("Not quite - keep rearranging".to_string());
                                // An attempt counts as activity for the hint pacing
                                hint.start_or_restart();
                            }
                            GuessOutcome::Pending => message = None,
                        }
                    }
                    _ => {}
                }
            }
        }

        if hint.fire() {
            round.reveal_hint();
            hint.start_or_restart();
        }

        if idle.fire() {
            return Ok(RoundOutcome::TimedOut);
        }
    }
}

fn round_lines(
    round: &ScrambleRound,
    buffer: &str,
    message: Option<&str>,
    remaining: usize,
) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Word Scramble".to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        spaced_upper(round.scrambled_text()),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(format!("Your guess: {}_", buffer)));
    if round.hints_revealed() > 0 {
        lines.push(Line::from(format!("Hint: {}", spaced_upper(&round.hint_text()))));
    } else {
        lines.push(Line::from(""));
    }
    lines.push(Line::from(format!(
        "{} guesses · {} words left",
        round.guesses(),
        remaining
    )));
    lines.push(Line::from(""));

    match message {
        Some(message) => lines.push(Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red),
        ))),
        None => lines.push(Line::from("")),
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "type your guess · enter starts over · esc quits".to_string(),
        Style::default().add_modifier(Modifier::DIM),
    )));

    lines
}

/// `clavono` -> `C L A V O N O`
fn spaced_upper(text: &str) -> String {
    let mut out = String::new();
    for (i, c) in text.chars().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.extend(c.to_uppercase());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spaced_upper() {
        assert_eq!(spaced_upper("clavono"), "C L A V O N O");
        assert_eq!(spaced_upper("a_b"), "A _ B");
        assert_eq!(spaced_upper(""), "");
    }
}
