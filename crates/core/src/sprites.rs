//! Stencil tables for every entity in the game
//!
//! Each tier has two animation frames; the layouts are the classic arcade shapes.

use crate::sprite::Sprite;

#[rustfmt::skip]
static ALIEN_A_0: [u8; 8 * 8] = [
    0,0,0,1,1,0,0,0, // ...@@...
    0,0,1,1,1,1,0,0, // ..@@@@..
    0,1,1,1,1,1,1,0, // .@@@@@@.
    1,1,0,1,1,0,1,1, // @@.@@.@@
    1,1,1,1,1,1,1,1, // @@@@@@@@
    0,1,0,1,1,0,1,0, // .@.@@.@.
    1,0,0,0,0,0,0,1, // @......@
    0,1,0,0,0,0,1,0, // .@....@.
];

#[rustfmt::skip]
static ALIEN_A_1: [u8; 8 * 8] = [
    0,0,0,1,1,0,0,0, // ...@@...
    0,0,1,1,1,1,0,0, // ..@@@@..
    0,1,1,1,1,1,1,0, // .@@@@@@.
    1,1,0,1,1,0,1,1, // @@.@@.@@
    1,1,1,1,1,1,1,1, // @@@@@@@@
    0,0,1,0,0,1,0,0, // ..@..@..
    0,1,0,1,1,0,1,0, // .@.@@.@.
    1,0,1,0,0,1,0,1, // @.@..@.@
];

#[rustfmt::skip]
static ALIEN_B_0: [u8; 11 * 8] = [
    0,0,1,0,0,0,0,0,1,0,0, // ..@.....@..
    0,0,0,1,0,0,0,1,0,0,0, // ...@...@...
    0,0,1,1,1,1,1,1,1,0,0, // ..@@@@@@@..
    0,1,1,0,1,1,1,0,1,1,0, // .@@.@@@.@@.
    1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
    1,0,1,1,1,1,1,1,1,0,1, // @.@@@@@@@.@
    1,0,1,0,0,0,0,0,1,0,1, // @.@.....@.@
    0,0,0,1,1,0,1,1,0,0,0, // ...@@.@@...
];

#[rustfmt::skip]
static ALIEN_B_1: [u8; 11 * 8] = [
    0,0,1,0,0,0,0,0,1,0,0, // ..@.....@..
    1,0,0,1,0,0,0,1,0,0,1, // @..@...@..@
    1,0,1,1,1,1,1,1,1,0,1, // @.@@@@@@@.@
    1,1,1,0,1,1,1,0,1,1,1, // @@@.@@@.@@@
    1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
    0,1,1,1,1,1,1,1,1,1,0, // .@@@@@@@@@.
    0,0,1,0,0,0,0,0,1,0,0, // ..@.....@..
    0,1,0,0,0,0,0,0,0,1,0, // .@.......@.
];

#[rustfmt::skip]
static ALIEN_C_0: [u8; 12 * 8] = [
    0,0,0,0,1,1,1,1,0,0,0,0, // ....@@@@....
    0,1,1,1,1,1,1,1,1,1,1,0, // .@@@@@@@@@@.
    1,1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@@
    1,1,1,0,0,1,1,0,0,1,1,1, // @@@..@@..@@@
    1,1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@@
    0,0,0,1,1,0,0,1,1,0,0,0, // ...@@..@@...
    0,0,1,1,0,1,1,0,1,1,0,0, // ..@@.@@.@@..
    1,1,0,0,0,0,0,0,0,0,1,1, // @@........@@
];

#[rustfmt::skip]
static ALIEN_C_1: [u8; 12 * 8] = [
    0,0,0,0,1,1,1,1,0,0,0,0, // ....@@@@....
    0,1,1,1,1,1,1,1,1,1,1,0, // .@@@@@@@@@@.
    1,1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@@
    1,1,1,0,0,1,1,0,0,1,1,1, // @@@..@@..@@@
    1,1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@@
    0,0,1,1,1,0,0,1,1,1,0,0, // ..@@@..@@@..
    0,1,1,0,0,1,1,0,0,1,1,0, // .@@..@@..@@.
    0,0,1,1,0,0,0,0,1,1,0,0, // ..@@....@@..
];

#[rustfmt::skip]
static ALIEN_DEATH: [u8; 13 * 7] = [
    0,1,0,0,1,0,0,0,1,0,0,1,0, // .@..@...@..@.
    0,0,1,0,0,1,0,1,0,0,1,0,0, // ..@..@.@..@..
    0,0,0,1,0,0,0,0,0,1,0,0,0, // ...@.....@...
    1,1,0,0,0,0,0,0,0,0,0,1,1, // @@.........@@
    0,0,0,1,0,0,0,0,0,1,0,0,0, // ...@.....@...
    0,0,1,0,0,1,0,1,0,0,1,0,0, // ..@..@.@..@..
    0,1,0,0,1,0,0,0,1,0,0,1,0, // .@..@...@..@.
];

#[rustfmt::skip]
static PLAYER: [u8; 11 * 7] = [
    0,0,0,0,0,1,0,0,0,0,0, // .....@.....
    0,0,0,0,1,1,1,0,0,0,0, // ....@@@....
    0,0,0,0,1,1,1,0,0,0,0, // ....@@@....
    0,1,1,1,1,1,1,1,1,1,0, // .@@@@@@@@@.
    1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
    1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
    1,1,1,1,1,1,1,1,1,1,1, // @@@@@@@@@@@
];

static BULLET: [u8; 3] = [1, 1, 1];

/// Tier A (top row) animation frames
pub static ALIEN_A_FRAMES: [Sprite<'static>; 2] =
    [Sprite::new(8, 8, &ALIEN_A_0), Sprite::new(8, 8, &ALIEN_A_1)];

/// Tier B (middle rows) animation frames
pub static ALIEN_B_FRAMES: [Sprite<'static>; 2] =
    [Sprite::new(11, 8, &ALIEN_B_0), Sprite::new(11, 8, &ALIEN_B_1)];

/// Tier C (bottom rows) animation frames
pub static ALIEN_C_FRAMES: [Sprite<'static>; 2] =
    [Sprite::new(12, 8, &ALIEN_C_0), Sprite::new(12, 8, &ALIEN_C_1)];

/// Frames per tier, indexed by `AlienKind::tier_index`
pub static ALIEN_FRAMES: [&[Sprite<'static>]; 3] =
    [&ALIEN_A_FRAMES, &ALIEN_B_FRAMES, &ALIEN_C_FRAMES];

/// Pose shown while a dead alien fades out
pub static ALIEN_DEATH_SPRITE: Sprite<'static> = Sprite::new(13, 7, &ALIEN_DEATH);

/// Player cannon
pub static PLAYER_SPRITE: Sprite<'static> = Sprite::new(11, 7, &PLAYER);

/// Player bullet
pub static BULLET_SPRITE: Sprite<'static> = Sprite::new(1, 3, &BULLET);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_frames_share_dimensions() {
        for frames in ALIEN_FRAMES.iter() {
            assert_eq!(frames.len(), 2);
            assert_eq!(frames[0].width(), frames[1].width());
            assert_eq!(frames[0].height(), frames[1].height());
            assert_ne!(frames[0], frames[1]);
        }
    }

    #[test]
    fn stencil_sizes() {
        assert_eq!((ALIEN_A_FRAMES[0].width(), ALIEN_A_FRAMES[0].height()), (8, 8));
        assert_eq!((ALIEN_B_FRAMES[0].width(), ALIEN_B_FRAMES[0].height()), (11, 8));
        assert_eq!((ALIEN_C_FRAMES[0].width(), ALIEN_C_FRAMES[0].height()), (12, 8));
        assert_eq!((ALIEN_DEATH_SPRITE.width(), ALIEN_DEATH_SPRITE.height()), (13, 7));
        assert_eq!((PLAYER_SPRITE.width(), PLAYER_SPRITE.height()), (11, 7));
        assert_eq!((BULLET_SPRITE.width(), BULLET_SPRITE.height()), (1, 3));
    }

    #[test]
    fn player_top_is_single_barrel() {
        assert!(PLAYER_SPRITE.is_set(5, 0));
        assert_eq!((0..11).filter(|&i| PLAYER_SPRITE.is_set(i, 0)).count(), 1);
        assert_eq!((0..11).filter(|&i| PLAYER_SPRITE.is_set(i, 6)).count(), 11);
    }
}
