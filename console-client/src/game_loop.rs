use std::io::{self, BufRead, Write};
use std::time::Instant;

use common::games::tictactoe::{GameOutcome, TicTacToeGameState};
use common::log;

use crate::config::Config;
use crate::input::{parse_move, read_line};
use crate::timings::{TurnTimings, format_seconds};

#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    pub show_timings: bool,
    pub timing_precision: usize,
}

impl From<&Config> for LoopOptions {
    fn from(config: &Config) -> Self {
        Self {
            show_timings: config.show_timings,
            timing_precision: config.timing_precision,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GameSummary {
    pub outcome: GameOutcome,
    pub timings: TurnTimings,
}

/// Plays until the board is decided, reading human moves from `input`.
pub fn run_game<R: BufRead, W: Write>(
    state: &mut TicTacToeGameState,
    options: LoopOptions,
    input: &mut R,
    out: &mut W,
) -> io::Result<GameSummary> {
    let mut timings = TurnTimings::default();

    loop {
        write!(out, "{}", state.board)?;
        if state.is_over() {
            break;
        }

        let result = if state.is_ai_turn() {
            writeln!(out, "AI's turn...")?;
            let started = Instant::now();
            let result = state.play_ai_move();
            let elapsed = started.elapsed();
            timings.record_ai(elapsed);

            if options.show_timings {
                writeln!(
                    out,
                    "AI move evaluation time: {}s",
                    format_seconds(elapsed, options.timing_precision)
                )?;
            }
            if let Ok(report) = &result {
                log!(
                    "AI played {} with score {} after {} positions",
                    report.position,
                    report.score,
                    report.nodes
                );
            }
            result.map(|_| ())
        } else {
            writeln!(out, "Your turn!")?;
            write!(out, "Enter your move (row and column): ")?;
            out.flush()?;

            let started = Instant::now();
            let line = read_line(input)?;
            let elapsed = started.elapsed();
            timings.record_player(elapsed);

            if options.show_timings {
                writeln!(
                    out,
                    "Player move time: {}s",
                    format_seconds(elapsed, options.timing_precision)
                )?;
            }
            parse_move(&line).and_then(|pos| state.place_mark(pos))
        };

        if let Err(reason) = result {
            log!("Rejected move from {}: {}", state.current_mark, reason);
            writeln!(out, "Invalid move! Try again.")?;
        }
    }

    match state.winner() {
        Some(mark) => writeln!(out, "Winner: {}", mark)?,
        None => writeln!(out, "It's a tie!")?,
    }

    if options.show_timings {
        writeln!(
            out,
            "Total AI time: {}s",
            format_seconds(timings.ai_total, options.timing_precision)
        )?;
        writeln!(
            out,
            "Total Player time: {}s",
            format_seconds(timings.player_total, options.timing_precision)
        )?;
    }

    log!(
        "Game finished: {:?} after {} AI and {} player turns",
        state.status,
        timings.ai_turns,
        timings.player_turns
    );

    Ok(GameSummary {
        outcome: state.status,
        timings,
    })
}
