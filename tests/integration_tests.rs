//! Integration tests for the frame loop: key events -> input handler -> tick.

use crossterm::event::KeyCode;

use tui_invaders::config::GameConfig;
use tui_invaders::core::{GameState, PixelBuffer};
use tui_invaders::input::InputHandler;
use tui_invaders::types::{GameAction, PLAYER_SPEED, PLAYER_START_X, TICK_MS};

fn step(game: &mut GameState, input: &mut InputHandler, pixels: &mut PixelBuffer) {
    input.update(TICK_MS);
    game.tick(input.state_mut(), pixels);
}

#[test]
fn test_held_direction_moves_every_tick() {
    let mut game = GameState::new();
    let mut pixels = PixelBuffer::default();
    let mut input = InputHandler::new().with_key_release_timeout_ms(None);

    input.handle_key_press(KeyCode::Right);
    for _ in 0..10 {
        step(&mut game, &mut input, &mut pixels);
    }
    assert_eq!(game.player().x, PLAYER_START_X + 10 * PLAYER_SPEED);

    input.handle_key_release(KeyCode::Right);
    step(&mut game, &mut input, &mut pixels);
    assert_eq!(game.player().x, PLAYER_START_X + 10 * PLAYER_SPEED);
}

#[test]
fn test_fire_press_spawns_one_bullet_per_press() {
    let mut game = GameState::new();
    let mut pixels = PixelBuffer::default();
    let mut input = InputHandler::new();

    input.handle_key_press(KeyCode::Char(' '));
    step(&mut game, &mut input, &mut pixels);
    step(&mut game, &mut input, &mut pixels);
    assert_eq!(game.bullets().len(), 1);

    input.handle_key_press(KeyCode::Up);
    step(&mut game, &mut input, &mut pixels);
    assert_eq!(game.bullets().len(), 2);
}

#[test]
fn test_fire_pressed_between_ticks_is_not_lost() {
    let mut game = GameState::new();
    let mut pixels = PixelBuffer::default();
    let mut input = InputHandler::new();

    // Press and release both land before the next tick.
    input.handle_key_press(KeyCode::Char(' '));
    input.handle_key_release(KeyCode::Char(' '));
    step(&mut game, &mut input, &mut pixels);
    assert_eq!(game.bullets().len(), 1);
    assert!(!input.state().fire_requested);
}

#[test]
fn test_auto_release_stops_the_player() {
    let mut game = GameState::new();
    let mut pixels = PixelBuffer::default();
    let mut input = InputHandler::new().with_key_release_timeout_ms(Some(3 * TICK_MS));

    input.handle_key_press(KeyCode::Left);
    let mut moved_ticks = 0;
    for _ in 0..20 {
        let before = game.player().x;
        step(&mut game, &mut input, &mut pixels);
        if game.player().x != before {
            moved_ticks += 1;
        }
    }
    // Released on the 4th update, before that tick moves.
    assert_eq!(moved_ticks, 3);
    assert_eq!(input.state().direction(), 0);
}

#[test]
fn test_opposite_directions_cancel() {
    let mut game = GameState::new();
    let mut pixels = PixelBuffer::default();
    let mut input = InputHandler::new().with_key_release_timeout_ms(None);

    input.handle_key_press(KeyCode::Left);
    input.handle_key_press(KeyCode::Char('d'));
    step(&mut game, &mut input, &mut pixels);
    assert_eq!(game.player().x, PLAYER_START_X);
}

#[test]
fn test_default_config_matches_core_constants() {
    let cfg = GameConfig::from_lookup(|_| None);
    assert_eq!(cfg.tick_ms, TICK_MS);
    assert_eq!(GameAction::from_str("fire"), Some(GameAction::Fire));
}
