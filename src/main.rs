//! LED matrix autoplay preview (default binary).
//!
//! Runs the self-playing stacker and shows the 7x10 matrix in the terminal.
//! Keys: `r` reset button, `p` pause, `q` quit. Set `RUST_LOG=debug` and redirect
//! stderr to a file to follow the evaluator's decisions.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use ledtris::input::{handle_key_event, should_quit, ButtonHandler};
use ledtris::term::{MatrixView, PixelBuffer, TerminalRenderer};
use ledtris::types::GameAction;
use ledtris::AutoplayConfig;

/// Frame interval for input polling and rendering
const FRAME_MS: u32 = 16;

fn main() -> Result<()> {
    env_logger::init();

    let config = AutoplayConfig::from_env();
    info!("starting with {:?}", config);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &AutoplayConfig) -> Result<()> {
    let mut game = config.new_game();
    let mut player = config.new_autoplayer();

    let view = MatrixView::default();
    let mut pb = PixelBuffer::new();
    let mut reset_button = ButtonHandler::new();
    let mut pause_button = ButtonHandler::new();

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();
    let mut move_timer_ms: u32 = 0;
    let mut game_over_ms: u32 = 0;

    loop {
        view.render_into(&game, &mut pb);
        let status = format!(
            "game {}  lines {}  best {}{}",
            game.games() + 1,
            game.lines(),
            game.best_lines(),
            if game.paused() { "  [paused]" } else { "" }
        );
        term.draw(&pb, &status)?;

        let timeout = frame
            .checked_sub(last_frame.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    let accepted = match handle_key_event(key) {
                        Some(GameAction::Reset) => reset_button.press(GameAction::Reset),
                        Some(GameAction::Pause) => pause_button.press(GameAction::Pause),
                        None => None,
                    };
                    if let Some(action) = accepted {
                        game.apply_action(action);
                        if action == GameAction::Reset {
                            player.clear();
                            game_over_ms = 0;
                        }
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        if last_frame.elapsed() < frame {
            continue;
        }
        last_frame = Instant::now();

        reset_button.update(FRAME_MS);
        pause_button.update(FRAME_MS);

        if game.game_over() {
            game_over_ms += FRAME_MS;
            if game_over_ms >= config.reset_delay_ms {
                game_over_ms = 0;
                player.clear();
                game.reset();
            }
            continue;
        }

        move_timer_ms += FRAME_MS;
        if move_timer_ms >= config.move_ms {
            move_timer_ms = 0;
            player.drive(&mut game);
        }
        game.tick(FRAME_MS);
    }
}
