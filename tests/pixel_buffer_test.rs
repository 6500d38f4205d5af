//! Blitter behaviour against randomly generated stencils.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use tui_invaders::core::{rgb_to_u32, PixelBuffer, Sprite, BULLET_SPRITE, PLAYER_SPRITE};
use tui_invaders::types::{BUFFER_HEIGHT, BUFFER_WIDTH};

const SENTINEL: u32 = 0x1234_56ff;

fn random_stencil(rng: &mut StdRng) -> (usize, usize, Vec<u8>) {
    let w = rng.gen_range(1..=16);
    let h = rng.gen_range(1..=16);
    let data = (0..w * h).map(|_| u8::from(rng.gen_bool(0.4))).collect();
    (w, h, data)
}

/// Reference blit: which buffer cells a stencil should touch.
fn expected_cells(sprite: &Sprite<'_>, x: i32, y: i32, bw: i32, bh: i32) -> Vec<(i32, i32)> {
    let mut cells = Vec::new();
    for j in 0..sprite.height() {
        for i in 0..sprite.width() {
            if !sprite.is_set(i, j) {
                continue;
            }
            let tx = x + i as i32;
            let ty = y + (sprite.height() - 1 - j) as i32;
            if (0..bw).contains(&tx) && (0..bh).contains(&ty) {
                cells.push((tx, ty));
            }
        }
    }
    cells
}

#[test]
fn random_blits_match_reference_and_respect_transparency() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let color = rgb_to_u32(0, 255, 0);
    let (bw, bh) = (BUFFER_WIDTH as i32, BUFFER_HEIGHT as i32);

    for _ in 0..200 {
        let (w, h, data) = random_stencil(&mut rng);
        let sprite = Sprite::new(w, h, &data);
        let x = rng.gen_range(-20..bw + 20);
        let y = rng.gen_range(-20..bh + 20);

        let mut buffer = PixelBuffer::default();
        buffer.clear(SENTINEL);
        buffer.draw_sprite(&sprite, x, y, color);

        let expected = expected_cells(&sprite, x, y, bw, bh);
        assert_eq!(buffer.count(color), expected.len(), "stencil {w}x{h} at ({x}, {y})");
        for &(tx, ty) in &expected {
            assert_eq!(buffer.get(tx, ty), Some(color));
        }
        assert_eq!(buffer.count(SENTINEL), buffer.pixels().len() - expected.len());
    }
}

#[test]
fn blits_far_off_buffer_write_nothing() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut buffer = PixelBuffer::default();
    buffer.clear(SENTINEL);

    for _ in 0..50 {
        let (w, h, data) = random_stencil(&mut rng);
        let sprite = Sprite::new(w, h, &data);
        buffer.draw_sprite(&sprite, -(w as i32), rng.gen_range(0..256), 1);
        buffer.draw_sprite(&sprite, rng.gen_range(0..224), -(h as i32), 1);
        buffer.draw_sprite(&sprite, BUFFER_WIDTH as i32, 10, 1);
        buffer.draw_sprite(&sprite, 10, BUFFER_HEIGHT as i32, 1);
        buffer.draw_sprite(&sprite, i32::MIN, i32::MAX, 1);
    }
    assert_eq!(buffer.count(SENTINEL), BUFFER_WIDTH * BUFFER_HEIGHT);
}

#[test]
fn stencil_top_row_lands_highest() {
    let mut buffer = PixelBuffer::new(4, 4);
    buffer.draw_sprite(&BULLET_SPRITE, 2, 0, 9);
    // 1x3 solid column occupies y = 0..=2.
    assert_eq!(buffer.get(2, 0), Some(9));
    assert_eq!(buffer.get(2, 2), Some(9));
    assert_eq!(buffer.count(9), 3);

    let mut buffer = PixelBuffer::default();
    buffer.draw_sprite(&PLAYER_SPRITE, 0, 0, 9);
    assert_eq!(buffer.count(9), PLAYER_SPRITE.set_count());
    // The cannon's muzzle is the top data row, drawn at y = height - 1.
    let top_row_set = (0..PLAYER_SPRITE.width()).filter(|&i| PLAYER_SPRITE.is_set(i, 0)).count();
    let drawn_top = (0..11).filter(|&x| buffer.get(x, 6) == Some(9)).count();
    assert_eq!(drawn_top, top_row_set);
}

#[test]
fn later_blits_overwrite_without_blending() {
    let data = [1u8; 4];
    let sprite = Sprite::new(2, 2, &data);
    let mut buffer = PixelBuffer::new(3, 3);
    buffer.draw_sprite(&sprite, 0, 0, 1);
    buffer.draw_sprite(&sprite, 1, 1, 2);
    assert_eq!(buffer.get(0, 0), Some(1));
    assert_eq!(buffer.get(1, 1), Some(2));
    assert_eq!(buffer.count(1), 3);
    assert_eq!(buffer.count(2), 4);
}
