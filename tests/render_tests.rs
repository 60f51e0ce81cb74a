//! Matrix rendering tests

use ledtris::core::GameState;
use ledtris::engine::{Autoplayer, Weights};
use ledtris::term::{encode_diff_into, encode_full_into, piece_color, MatrixView, PixelBuffer};
use ledtris::types::{BOARD_HEIGHT, BOARD_WIDTH, DEFAULT_MOVE_MS};

#[test]
fn test_render_matches_board_and_active_piece() {
    let mut game = GameState::new(9);
    game.start();
    let mut player = Autoplayer::new(Weights::default());
    for _ in 0..400 {
        player.drive(&mut game);
        game.tick(DEFAULT_MOVE_MS);
    }

    let view = MatrixView {
        dim_on_game_over: false,
    };
    let pb = view.render(&game);

    let active = game.active();
    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            let from_active = active.filter(|p| p.blocks().contains(&(x, y)));
            let expected = match (from_active, game.board().get(x, y)) {
                (Some(p), _) => Some(piece_color(p.kind)),
                (None, Some(Some(kind))) => Some(piece_color(kind)),
                _ => None,
            };
            match expected {
                Some(color) => assert_eq!(pb.get(x, y), Some(color)),
                None => assert!(pb.get(x, y).unwrap().is_off()),
            }
        }
    }
}

#[test]
fn test_render_into_reuses_buffer() {
    let mut game = GameState::new(1);
    game.start();
    let view = MatrixView::default();

    let mut pb = PixelBuffer::new();
    view.render_into(&game, &mut pb);

    game.board_mut().set(0, 9, Some(ledtris::types::PieceKind::Z));
    game.reset();
    view.render_into(&game, &mut pb);
    assert_eq!(pb.lit_count(), 4);
    assert_eq!(view.render(&game), pb);
}

#[test]
fn test_diff_encoding_only_touches_changed_leds() {
    let mut game = GameState::new(1);
    game.start();
    let view = MatrixView::default();
    let before = view.render(&game);
    let mut player = Autoplayer::new(Weights::default());
    player.drive(&mut game);
    game.tick(10_000);
    let after = view.render(&game);

    let mut full = Vec::new();
    let mut diff = Vec::new();
    encode_full_into(&after, &mut full).unwrap();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(!diff.is_empty());
    assert!(diff.len() < full.len());
}
