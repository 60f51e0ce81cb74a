//! Headless autoplay runner.
//!
//! Plays `LEDTRIS_GAMES` games back to back with simulated time and reports how
//! the current weights perform. Useful for tuning the heuristic.

use anyhow::Result;
use log::info;

use ledtris::core::TickOutcome;
use ledtris::AutoplayConfig;

/// Hard stop for a single game that never tops out
const MAX_PIECES_PER_GAME: u32 = 5_000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AutoplayConfig::from_env();
    info!("simulating {} game(s) with {:?}", config.games, config);

    let mut game = config.new_game();
    let mut player = config.new_autoplayer();
    let mut total_lines: u64 = 0;
    let mut total_pieces: u64 = 0;

    for n in 1..=config.games {
        if n > 1 {
            player.clear();
            game.reset();
        }

        while !game.game_over() && game.pieces() < MAX_PIECES_PER_GAME {
            player.drive(&mut game);
            if let TickOutcome::Locked { lines } = game.tick(config.move_ms) {
                if lines > 0 {
                    log::debug!("game {}: +{} line(s)", n, lines);
                }
            }
        }

        info!(
            "game {}: {} lines, {} pieces{}",
            n,
            game.lines(),
            game.pieces(),
            if game.game_over() { "" } else { " (piece cap)" }
        );
        total_lines += game.lines() as u64;
        total_pieces += game.pieces() as u64;
    }

    println!(
        "{} games, {:.1} lines/game, {:.1} pieces/game, best {}",
        config.games,
        total_lines as f64 / config.games as f64,
        total_pieces as f64 / config.games as f64,
        game.best_lines().max(game.lines())
    );
    Ok(())
}
