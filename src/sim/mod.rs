// sim/ - Pig and coin simulation
//
// Entity management using Structure-of-Arrays for cache efficiency.
// Each entity type in its own module. Nothing in here touches the
// canvas; `render` reads the state after `tick`.

mod coin;
mod label;
mod particle;
mod pig;
mod tear;

#[cfg(test)]
mod tests;

pub use coin::Coins;
pub use label::{Labels, REWARD_TEXT};
pub use particle::{Particles, Spark};
pub use pig::{Mood, Pig};
pub use tear::Tears;

use crate::config::SceneConfig;

// Capacity limits
pub const MAX_COINS: usize = 256;
pub const MAX_PARTICLES: usize = 256;
pub const MAX_TEARS: usize = 256;
pub const MAX_LABELS: usize = 32;

/// Coins on screen at once
pub const MAX_ACTIVE_COINS: usize = 5;

// Lap layout
const START_X: f32 = -80.0;
const EXIT_MARGIN: f32 = 60.0;
const STARTER_COIN_X: f32 = 150.0;
const COIN_REST: f32 = 8.0; // coin center above the floor line
const PRUNE_DEPTH: f32 = 100.0;

/// Pointer in surface-local coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
    pub x: f32,
    pub y: f32,
}

impl Default for Pointer {
    /// Far off-surface until the first move
    fn default() -> Self {
        Self { x: -1000.0, y: -1000.0 }
    }
}

/// The whole animation state, advanced one frame per `tick`
pub struct Scene {
    // Surface dimensions
    w: u32,
    h: u32,

    config: SceneConfig,

    // Entities
    pig: Pig,
    coins: Coins,
    particles: Particles,
    tears: Tears,
    labels: Labels,

    frame: u32,

    // RNG state
    rng: u32,
}

impl Scene {
    pub fn new(w: u32, h: u32, config: SceneConfig) -> Self {
        let mut rng = config.seed;
        let pig = Pig::new(-100.0, &mut rng);
        Self {
            w,
            h,
            config,
            pig,
            coins: Coins::new(),
            particles: Particles::new(),
            tears: Tears::new(),
            labels: Labels::new(),
            frame: 0,
            rng,
        }
    }

    /// Only the floor moves; entities keep their coordinates
    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
    }

    /// Advance one frame. Returns how many coins were eaten, which is
    /// where a pickup sound would be triggered.
    pub fn tick(&mut self, pointer: Pointer) -> usize {
        if self.w == 0 { return 0; }

        let width = self.w as f32;
        let floor = self.floor_y();
        let rest_y = floor - COIN_REST;

        // Spawn ahead of everything already on the line
        if self.frame % self.config.spawn_every == 0
            && self.coins.active_count() < MAX_ACTIVE_COINS
        {
            let furthest = self.coins.furthest_active(self.pig.x);
            self.coins.spawn(furthest, rest_y, &mut self.rng);
        }
        self.coins.update();

        // A fresh trip takes this whole frame; the sequence starts next tick
        if self.pig.spooked_by(pointer, floor, width) {
            self.pig.trip();
        } else {
            self.pig.update_mood(self.frame, floor, &mut self.tears, &mut self.rng);
        }
        self.pig.blink(&mut self.rng);

        let mut eaten = 0;
        if self.pig.walk(&mut self.coins, self.config.walk_speed).is_some() {
            log::trace!("coin eaten at x={:.1}", self.pig.x);
            self.particles.burst(self.pig.x + 40.0, floor - 10.0, &mut self.rng);
            self.labels.spawn(self.pig.x + 40.0, floor - 40.0, REWARD_TEXT);
            eaten += 1;
        }

        self.particles.update();
        self.tears.update();
        self.labels.update();
        self.coins.prune(floor + PRUNE_DEPTH);

        if self.pig.x > width + EXIT_MARGIN {
            self.restart_lap(rest_y);
        }

        self.frame = self.frame.wrapping_add(1);
        eaten
    }

    /// Pig walked off the right edge: back to the left with one coin waiting
    fn restart_lap(&mut self, rest_y: f32) {
        log::debug!("lap finished at frame {}, resetting scene", self.frame);
        self.pig.reset(START_X);
        self.coins.clear();
        self.particles.clear();
        self.tears.clear();
        self.labels.clear();
        self.coins.seed_landed(STARTER_COIN_X, rest_y);
    }

    pub fn floor_y(&self) -> f32 {
        self.h as f32 - self.config.ground_offset
    }

    // Random number generator (xorshift32), [0, 1)
    #[inline(always)]
    pub fn rand(rng: &mut u32) -> f32 {
        *rng ^= *rng << 13;
        *rng ^= *rng >> 17;
        *rng ^= *rng << 5;
        (*rng >> 8) as f32 * (1.0 / 16777216.0)
    }

    // Accessors for the renderer
    pub fn pig(&self) -> &Pig { &self.pig }
    pub fn coins(&self) -> &Coins { &self.coins }
    pub fn particles(&self) -> &Particles { &self.particles }
    pub fn tears(&self) -> &Tears { &self.tears }
    pub fn labels(&self) -> &Labels { &self.labels }
    pub fn config(&self) -> &SceneConfig { &self.config }
    pub fn frame(&self) -> u32 { self.frame }
    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }
}
