//! Game state module - manages the complete game state
//!
//! Owns the alien formation, the player, the bullet pool and the per-tier
//! animations, and advances them one fixed tick at a time. A tick is:
//!
//! 1. render the current state into a [`PixelBuffer`] (read-only)
//! 2. advance the shared tier animations
//! 3. count down death fades
//! 4. move bullets, retire the ones leaving the playfield, resolve hits
//! 5. move the player
//! 6. spawn a bullet if fire was requested

use arrayvec::ArrayVec;

use crate::buffer::{PixelBuffer, ALIEN_COLOR, BULLET_COLOR, CLEAR_COLOR, PLAYER_COLOR};
use crate::sprite::{Sprite, SpriteAnimation};
use crate::sprites::{ALIEN_DEATH_SPRITE, ALIEN_FRAMES, BULLET_SPRITE, PLAYER_SPRITE};
use crate::types::*;

/// A member of the formation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Alien {
    pub x: i32,
    pub y: i32,
    pub kind: AlienKind,
    /// Ticks left showing the death pose; live aliens hold the full count.
    pub death_counter: u8,
}

impl Alien {
    pub fn new(x: i32, y: i32, kind: AlienKind) -> Self {
        Self {
            x,
            y,
            kind,
            death_counter: DEATH_FADE_TICKS,
        }
    }

    /// Whether this alien contributes anything to the frame
    pub fn is_visible(&self) -> bool {
        self.death_counter > 0
    }
}

/// The player's cannon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Reserved; nothing damages the player yet.
    pub lives: u32,
}

/// A bullet travelling vertically by `dir` pixels per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub dir: i32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    width: usize,
    height: usize,
    aliens: [Alien; ALIEN_COUNT],
    player: Player,
    /// Unordered: removal swaps the last bullet into the freed slot.
    bullets: ArrayVec<Bullet, MAX_BULLETS>,
    /// One animation per tier, shared by every alien of that tier.
    animations: [SpriteAnimation<'static>; 3],
    score: u32,
    ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Create the initial formation on a 224x256 playfield
    pub fn new() -> Self {
        Self::with_size(BUFFER_WIDTH, BUFFER_HEIGHT)
    }

    pub fn with_size(width: usize, height: usize) -> Self {
        let aliens = std::array::from_fn(|idx| {
            let (row, col) = (idx / ALIEN_COLS, idx % ALIEN_COLS);
            Alien::new(
                ALIEN_SPACING_X * col as i32 + FORMATION_X,
                ALIEN_SPACING_Y * row as i32 + FORMATION_Y,
                AlienKind::for_row(row),
            )
        });
        let animations = std::array::from_fn(|tier| {
            SpriteAnimation::looping(ALIEN_FRAMES[tier], ALIEN_FRAME_TICKS)
        });

        Self {
            width,
            height,
            aliens,
            player: Player {
                x: PLAYER_START_X,
                y: PLAYER_START_Y,
                lives: PLAYER_LIVES,
            },
            bullets: ArrayVec::new(),
            animations,
            score: 0,
            ticks: 0,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn aliens(&self) -> &[Alien; ALIEN_COUNT] {
        &self.aliens
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Active bullets, in no particular order
    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn animation(&self, kind: AlienKind) -> Option<&SpriteAnimation<'static>> {
        kind.tier_index().map(|tier| &self.animations[tier])
    }

    pub fn aliens_alive(&self) -> usize {
        self.aliens.iter().filter(|a| a.kind.is_alive()).count()
    }

    /// True once every alien has been destroyed
    pub fn is_cleared(&self) -> bool {
        self.aliens_alive() == 0
    }

    /// Stencil an alien currently draws with, if any.
    pub fn alien_sprite(&self, alien: &Alien) -> Option<&'static Sprite<'static>> {
        if !alien.is_visible() {
            return None;
        }
        match alien.kind.tier_index() {
            Some(tier) => self.animations[tier].current_frame(),
            None => Some(&ALIEN_DEATH_SPRITE),
        }
    }

    /// Run one full tick: render, update, then consume the fire request.
    ///
    /// `buffer` receives the frame for the state *before* this tick's update.
    pub fn tick(&mut self, input: &mut InputState, buffer: &mut PixelBuffer) -> CoreTickEvent {
        self.render(buffer);
        let event = self.update(input);
        input.consume_fire();
        event
    }

    /// Draw the current state. Does not mutate anything.
    pub fn render(&self, buffer: &mut PixelBuffer) {
        buffer.clear(CLEAR_COLOR);

        for alien in self.aliens.iter() {
            if let Some(sprite) = self.alien_sprite(alien) {
                buffer.draw_sprite(sprite, alien.x, alien.y, ALIEN_COLOR);
            }
        }

        buffer.draw_sprite(&PLAYER_SPRITE, self.player.x, self.player.y, PLAYER_COLOR);

        for bullet in self.bullets.iter() {
            buffer.draw_sprite(&BULLET_SPRITE, bullet.x, bullet.y, BULLET_COLOR);
        }
    }

    /// Advance the simulation by one tick (steps 2-6).
    pub fn update(&mut self, input: &InputState) -> CoreTickEvent {
        let mut event = CoreTickEvent::default();
        self.ticks += 1;

        for animation in self.animations.iter_mut() {
            animation.advance();
        }

        for alien in self.aliens.iter_mut() {
            if alien.kind == AlienKind::Dead && alien.death_counter > 0 {
                alien.death_counter -= 1;
            }
        }

        self.update_bullets(&mut event);
        self.move_player(input.direction());

        if input.fire_requested {
            if self.fire() {
                event.fired = true;
            } else {
                event.fire_dropped = true;
            }
        }

        event
    }

    fn update_bullets(&mut self, event: &mut CoreTickEvent) {
        let min_y = BULLET_SPRITE.height() as i32;
        let max_y = self.height as i32;

        let mut bi = 0;
        while bi < self.bullets.len() {
            let bullet = &mut self.bullets[bi];
            bullet.y += bullet.dir;
            let bullet = *bullet;

            if bullet.y >= max_y || bullet.y < min_y {
                self.bullets.swap_remove(bi);
                event.bullets_retired += 1;
                continue;
            }

            if let Some(ai) = self.hit_alien(&bullet) {
                let kind = self.aliens[ai].kind;
                self.kill_alien(ai);
                self.score += kind.score();
                event.aliens_hit += 1;
                event.score_gained += kind.score();
                self.bullets.swap_remove(bi);
                continue;
            }

            bi += 1;
        }
    }

    /// First live alien whose current stencil box overlaps the bullet.
    fn hit_alien(&self, bullet: &Bullet) -> Option<usize> {
        let bw = BULLET_SPRITE.width() as i32;
        let bh = BULLET_SPRITE.height() as i32;

        self.aliens.iter().position(|alien| {
            if !alien.kind.is_alive() {
                return false;
            }
            let Some(sprite) = self.alien_sprite(alien) else {
                return false;
            };
            overlaps(
                (bullet.x, bullet.y, bw, bh),
                (alien.x, alien.y, sprite.width() as i32, sprite.height() as i32),
            )
        })
    }

    /// Move the player by `PLAYER_SPEED * dir`, clamped to the playfield.
    fn move_player(&mut self, dir: i32) {
        if dir == 0 {
            return;
        }
        let velocity = PLAYER_SPEED * dir;
        let player_w = PLAYER_SPRITE.width() as i32;
        let width = self.width as i32;

        if self.player.x + player_w + velocity >= width {
            self.player.x = width - player_w;
        } else if self.player.x + velocity <= 0 {
            self.player.x = 0;
        } else {
            self.player.x += velocity;
        }
    }

    /// Spawn a bullet above the cannon. Returns false when the pool is full.
    fn fire(&mut self) -> bool {
        self.push_bullet(Bullet {
            x: self.player.x + PLAYER_SPRITE.width() as i32 / 2,
            y: self.player.y + PLAYER_SPRITE.height() as i32,
            dir: BULLET_SPEED,
        })
    }

    /// Add a bullet to the pool. Returns false (dropping it) at capacity.
    pub fn push_bullet(&mut self, bullet: Bullet) -> bool {
        self.bullets.try_push(bullet).is_ok()
    }

    /// Transition a live alien to `Dead` and start its fade.
    ///
    /// Returns false if the index is out of range or the alien is already dead.
    pub fn kill_alien(&mut self, index: usize) -> bool {
        match self.aliens.get_mut(index) {
            Some(alien) if alien.kind.is_alive() => {
                alien.kind = AlienKind::Dead;
                alien.death_counter = DEATH_FADE_TICKS;
                true
            }
            _ => false,
        }
    }

    pub fn set_player_x(&mut self, x: i32) {
        self.player.x = x;
    }

    pub fn player_width(&self) -> i32 {
        PLAYER_SPRITE.width() as i32
    }

    pub fn player_height(&self) -> i32 {
        PLAYER_SPRITE.height() as i32
    }
}

/// Half-open box overlap on both axes; boxes are `(x, y, w, h)`.
fn overlaps(a: (i32, i32, i32, i32), b: (i32, i32, i32, i32)) -> bool {
    a.0 < b.0 + b.2 && b.0 < a.0 + a.2 && a.1 < b.1 + b.3 && b.1 < a.1 + a.3
}
