// particle.rs - Sparkle burst on coin pickup

use super::{MAX_PARTICLES, Scene};
use crate::physics::{decay, fall, integrate};

const BURST: usize = 6;
const GRAVITY: f32 = 0.2;
const FADE: f32 = 0.05;

/// Color tag, resolved to a fill style by the renderer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spark {
    Gold,
    White,
}

pub struct Particles {
    // Position
    pub x: [f32; MAX_PARTICLES],
    pub y: [f32; MAX_PARTICLES],

    // Velocity
    pub vx: [f32; MAX_PARTICLES],
    pub vy: [f32; MAX_PARTICLES],

    // 1.0 at spawn, removed at <= 0
    pub life: [f32; MAX_PARTICLES],
    pub color: [Spark; MAX_PARTICLES],

    // Count
    pub n: usize,
}

impl Particles {
    pub fn new() -> Self {
        Self {
            x: [0.0; MAX_PARTICLES],
            y: [0.0; MAX_PARTICLES],
            vx: [0.0; MAX_PARTICLES],
            vy: [0.0; MAX_PARTICLES],
            life: [0.0; MAX_PARTICLES],
            color: [Spark::Gold; MAX_PARTICLES],
            n: 0,
        }
    }

    pub fn clear(&mut self) {
        self.n = 0;
    }

    /// Scatter a fixed-size burst around (x, y), mostly upward
    pub fn burst(&mut self, x: f32, y: f32, rng: &mut u32) {
        for _ in 0..BURST {
            if self.n >= MAX_PARTICLES {
                log::warn!("particle pool full ({MAX_PARTICLES}), burst truncated");
                return;
            }

            let i = self.n;
            self.x[i] = x + Scene::rand(rng) * 10.0;
            self.y[i] = y + Scene::rand(rng) * 5.0;
            self.vx[i] = (Scene::rand(rng) - 0.5) * 4.0;
            self.vy[i] = (Scene::rand(rng) - 1.0) * 4.0;
            self.life[i] = 1.0;
            self.color[i] = if Scene::rand(rng) > 0.5 { Spark::Gold } else { Spark::White };
            self.n += 1;
        }
    }

    /// Move, pull down, fade; drop spent particles
    pub fn update(&mut self) {
        let mut write = 0;

        for read in 0..self.n {
            let (mut x, mut y) = (self.x[read], self.y[read]);
            let mut vy = self.vy[read];
            let mut life = self.life[read];

            integrate(&mut x, &mut y, self.vx[read], vy);
            fall(&mut vy, GRAVITY);
            if !decay(&mut life, FADE) { continue; }

            self.x[write] = x;
            self.y[write] = y;
            self.vx[write] = self.vx[read];
            self.vy[write] = vy;
            self.life[write] = life;
            self.color[write] = self.color[read];
            write += 1;
        }

        self.n = write;
    }
}
