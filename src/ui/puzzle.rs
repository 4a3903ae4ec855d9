//! Puzzle game frontend: tile board, cursor, swap controls

use crate::core::config::config;
use crate::core::error::Result;
use crate::core::types::{ExitReason, GameSummary};
use crate::puzzle::{PuzzleRound, PuzzleSession};
use crate::timer::Countdown;
use crate::ui::dialog::{self, Dialog, DialogOutcome};
use crate::ui::image_cells::{span_for, tint, CellImage};
use crate::ui::term::{poll_event, TerminalGuard};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};
use std::time::Duration;

/// Tint applied to the currently selected tile
const SELECT_HIGHLIGHT: (u8, u8, u8) = (255, 215, 0);

enum RoundOutcome {
    Solved,
    Quit,
    TimedOut,
}

/// Run the puzzle game until the pool is exhausted, the player quits,
/// or the idle countdown expires
pub fn run(term: &mut TerminalGuard, session: &mut PuzzleSession) -> Result<GameSummary> {
    let cfg = config();
    let poll = Duration::from_millis(cfg.poll_interval_ms);
    let mut idle = Countdown::new(Duration::from_millis(cfg.idle_timeout_ms));
    idle.start_or_restart();
    let mut solved = 0u32;

    loop {
        if session.next_round().is_none() {
            return Ok(GameSummary::new(solved, ExitReason::ContentExhausted));
        }
        let remaining = session.remaining();
        let Some(round) = session.current_mut() else {
            return Ok(GameSummary::new(solved, ExitReason::ContentExhausted));
        };

        let outcome = run_round(term, round, remaining, &mut idle, poll)?;
        match outcome {
            RoundOutcome::Solved => {
                solved += 1;
                let Some(puzzle) = session.finish_round() else {
                    return Ok(GameSummary::new(solved, ExitReason::ContentExhausted));
                };
                let dismissed = dialog::show(
                    term,
                    &Dialog {
                        title: &puzzle.name,
                        description: &puzzle.description,
                        image: Some(&puzzle.image),
                    },
                    &mut idle,
                )?;
                match dismissed {
                    DialogOutcome::Next => {}
                    DialogOutcome::Quit => {
                        return Ok(GameSummary::new(solved, ExitReason::PlayerQuit))
                    }
                    DialogOutcome::TimedOut => {
                        tracing::info!("puzzle game timed out");
                        return Ok(GameSummary::new(solved, ExitReason::IdleTimeout));
                    }
                }
            }
            RoundOutcome::Quit => return Ok(GameSummary::new(solved, ExitReason::PlayerQuit)),
            RoundOutcome::TimedOut => {
                tracing::info!("puzzle game timed out");
                return Ok(GameSummary::new(solved, ExitReason::IdleTimeout));
            }
        }
    }
}

fn run_round(
    term: &mut TerminalGuard,
    round: &mut PuzzleRound,
    remaining: usize,
    idle: &mut Countdown,
    poll: Duration,
) -> Result<RoundOutcome> {
    let cfg = config();
    let layout = round.board.layout();
    let tile_w = (cfg.image_cols as usize / layout.cols).max(2) as u16;
    let tile_h = (cfg.image_rows as usize / layout.rows).max(1) as u16;
    let cells = CellImage::exact(
        &round.puzzle.image,
        tile_w * layout.cols as u16,
        tile_h * layout.rows as u16,
    );

    let mut cursor = 0usize;
    let mut selected: Option<usize> = None;

    loop {
        term.terminal().draw(|frame| {
            let lines = board_lines(round, &cells, tile_w, tile_h, cursor, selected, remaining);
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
                let cols = layout.cols;
                let rows = layout.rows;
                match key.code {
                    KeyCode::Esc => return Ok(RoundOutcome::Quit),
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(RoundOutcome::Quit)
                    }
                    KeyCode::Left if cursor % cols > 0 => cursor -= 1,
                    KeyCode::Right if cursor % cols < cols - 1 => cursor += 1,
                    KeyCode::Up if cursor / cols > 0 => cursor -= cols,
                    KeyCode::Down if cursor / cols < rows - 1 => cursor += cols,
                    KeyCode::Enter | KeyCode::Char(' ') => match selected {
                        None => selected = Some(cursor),
                        Some(a) if a == cursor => selected = None,
                        Some(a) => {
                            round.board.swap(a, cursor);
                            selected = None;
                        }
                    },
                    _ => {}
                }
            }
        }

        if idle.fire() {
            return Ok(RoundOutcome::TimedOut);
        }

        if round.board.is_solved() {
            dialog::flash_correct(term)?;
            return Ok(RoundOutcome::Solved);
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn board_lines(
    round: &PuzzleRound,
    cells: &CellImage,
    tile_w: u16,
    tile_h: u16,
    cursor: usize,
    selected: Option<usize>,
    remaining: usize,
) -> Vec<Line<'static>> {
    let layout = round.board.layout();
    let mut lines = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Puzzle: {}", round.puzzle.name),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!(
        "{}x{} tiles · {} swaps · {} puzzles left",
        layout.rows,
        layout.cols,
        round.board.swaps(),
        remaining
    )));
    lines.push(Line::from(""));

    for tile_row in 0..layout.rows {
        for y in 0..tile_h {
            let mut spans: Vec<Span<'static>> = Vec::new();
            for tile_col in 0..layout.cols {
                if tile_col > 0 {
                    spans.push(Span::raw(" "));
                }
                let pos = tile_row * layout.cols + tile_col;
                let tile = round.board.tile_at(pos);
                let src_col = ((tile % layout.cols) as u16) * tile_w;
                let src_row = ((tile / layout.cols) as u16) * tile_h;

                for x in 0..tile_w {
                    let mut cell = cells.cell(src_col + x, src_row + y);
                    if selected == Some(pos) {
                        cell = tint(cell, SELECT_HIGHLIGHT, 0.5);
                    }
                    let mut style = Style::default();
                    if pos == cursor {
                        style = style.add_modifier(Modifier::REVERSED);
                    }
                    spans.push(span_for(cell, style));
                }
            }
            lines.push(Line::from(spans));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "arrows move · enter selects and swaps · esc quits".to_string(),
        Style::default().add_modifier(Modifier::DIM),
    )));

    lines
}
