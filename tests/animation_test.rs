use tui_invaders::core::sprites::{ALIEN_A_FRAMES, ALIEN_C_FRAMES};
use tui_invaders::core::SpriteAnimation;
use tui_invaders::types::ALIEN_FRAME_TICKS;

#[test]
fn looping_animation_follows_frame_formula() {
    let mut anim = SpriteAnimation::looping(&ALIEN_A_FRAMES, ALIEN_FRAME_TICKS);
    let period = anim.frame_count() as u32 * ALIEN_FRAME_TICKS;

    for t in 0..3 * period {
        let expected = ((t % period) / ALIEN_FRAME_TICKS) as usize % anim.frame_count();
        assert_eq!(anim.frame_index(), expected, "t = {t}");
        assert_eq!(anim.current_frame(), Some(&ALIEN_A_FRAMES[expected]));
        anim.advance();
    }
    assert!(!anim.is_exhausted());
}

#[test]
fn looping_resets_elapsed_at_period() {
    let mut anim = SpriteAnimation::looping(&ALIEN_C_FRAMES, 10);
    for _ in 0..19 {
        anim.advance();
    }
    assert_eq!(anim.time(), 19);
    anim.advance();
    assert_eq!(anim.time(), 0);
    assert_eq!(anim.frame_index(), 0);
}

#[test]
fn one_shot_stops_drawing_once_exhausted() {
    let mut anim = SpriteAnimation::once(&ALIEN_C_FRAMES, 3);
    for _ in 0..5 {
        anim.advance();
        assert!(anim.current_frame().is_some());
    }
    anim.advance();
    assert!(anim.is_exhausted());
    assert_eq!(anim.current_frame(), None);

    anim.reset();
    assert_eq!(anim.current_frame(), Some(&ALIEN_C_FRAMES[0]));
}
