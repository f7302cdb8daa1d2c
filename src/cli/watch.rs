//! Watch command implementation - TUI viewer for a seeded AI game.
//!
//! The whole game is simulated up front (a dozen turns at most); the TUI
//! then steps through the captured frames, auto-advancing unless paused.

// Frame/frames naming is intentional in the viewer
#![allow(clippy::similar_names)]

use std::io::stdout;
use std::time::{Duration, Instant};

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use floe::render;
use floe::session::{AiDecider, Session, SessionConfig};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction as LayoutDirection, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame, Terminal,
};

/// One captured game moment.
struct ViewFrame {
    title: String,
    board: String,
    narration: Vec<String>,
}

/// Execute the watch command.
///
/// # Errors
///
/// Returns an error if the engine aborts or the terminal fails.
pub(crate) fn execute(seed: u64, rounds: u8, speed: u64) -> Result<(), CliError> {
    let frames = capture_game(seed, rounds)?;

    enable_raw_mode().map_err(|e| CliError::new(format!("terminal setup failed: {e}")))?;
    let mut out = stdout();
    execute!(out, EnterAlternateScreen)
        .map_err(|e| CliError::new(format!("terminal setup failed: {e}")))?;
    let backend = CrosstermBackend::new(out);
    let mut terminal =
        Terminal::new(backend).map_err(|e| CliError::new(format!("terminal setup failed: {e}")))?;

    let result = view_loop(&mut terminal, &frames, seed, speed);

    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);

    result
}

/// Run the full game, recording a frame per turn.
fn capture_game(seed: u64, rounds: u8) -> Result<Vec<ViewFrame>, CliError> {
    let config = SessionConfig { rounds };
    let mut decider = AiDecider::new(seed ^ 0x00C0_FFEE);
    let mut session = Session::new(seed, config, &mut decider)?;

    let mut frames = vec![ViewFrame {
        title: format!("Initial board (seed {seed})"),
        board: render::render_board(session.state()),
        narration: session
            .state()
            .penguins()
            .iter()
            .map(|p| {
                let marker = if p.is_player { " - player" } else { "" };
                format!("P{} is a {} Penguin{marker}", p.id, p.species.name())
            })
            .collect(),
    }];

    while let Some(report) = session.tick()? {
        frames.push(ViewFrame {
            title: format!("Turn {} - P{}", report.round, report.penguin),
            board: render::render_board(session.state()),
            narration: report.events.iter().copied().map(render::narrate).collect(),
        });
    }

    Ok(frames)
}

fn view_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    frames: &[ViewFrame],
    seed: u64,
    speed: u64,
) -> Result<(), CliError> {
    let mut current = 0usize;
    let mut paused = false;
    let mut last_advance = Instant::now();
    let delay = Duration::from_millis(speed.max(50));

    loop {
        terminal
            .draw(|f| draw_frame(f, &frames[current], current, frames.len(), seed, paused))
            .map_err(|e| CliError::new(format!("terminal draw failed: {e}")))?;

        let timeout = Duration::from_millis(50);
        if event::poll(timeout).map_err(|e| CliError::new(e.to_string()))? {
            if let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        KeyCode::Char(' ') => paused = !paused,
                        KeyCode::Right | KeyCode::Char('n') => {
                            current = (current + 1).min(frames.len() - 1);
                            paused = true;
                        }
                        KeyCode::Left | KeyCode::Char('p') => {
                            current = current.saturating_sub(1);
                            paused = true;
                        }
                        _ => {}
                    }
                }
            }
        }

        if !paused && last_advance.elapsed() >= delay {
            if current + 1 < frames.len() {
                current += 1;
            } else {
                paused = true;
            }
            last_advance = Instant::now();
        }
    }
}

fn draw_frame(
    f: &mut Frame<'_>,
    frame: &ViewFrame,
    index: usize,
    total: usize,
    seed: u64,
    paused: bool,
) {
    let chunks = Layout::default()
        .direction(LayoutDirection::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(22),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    let status = if paused { "paused" } else { "playing" };
    let header = Line::from(vec![
        Span::styled(
            format!(" {} ", frame.title),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!("({}/{total}, seed {seed}, {status})", index + 1)),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let board = Paragraph::new(frame.board.clone())
        .block(Block::default().borders(Borders::ALL).title("Ice field"));
    f.render_widget(board, chunks[1]);

    let narration: Vec<Line<'_>> = frame
        .narration
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    let events = Paragraph::new(narration)
        .block(Block::default().borders(Borders::ALL).title("Events"));
    f.render_widget(events, chunks[2]);

    let help = Paragraph::new("[space] pause  [<-/->] step  [q] quit")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
