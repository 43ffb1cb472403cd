// tear.rs - Tear fountain while the pig cries
//
// Same integration as particles, tuned for a high upward arc:
// stronger gravity, slower fade.

use super::{MAX_TEARS, Scene};
use crate::physics::{decay, fall, integrate};

const GRAVITY: f32 = 0.25;
const FADE: f32 = 0.015;
const SPREAD: f32 = 6.0;

pub struct Tears {
    // Position
    pub x: [f32; MAX_TEARS],
    pub y: [f32; MAX_TEARS],

    // Velocity
    pub vx: [f32; MAX_TEARS],
    pub vy: [f32; MAX_TEARS],

    pub life: [f32; MAX_TEARS],

    // Count
    pub n: usize,
}

impl Tears {
    pub fn new() -> Self {
        Self {
            x: [0.0; MAX_TEARS],
            y: [0.0; MAX_TEARS],
            vx: [0.0; MAX_TEARS],
            vy: [0.0; MAX_TEARS],
            life: [0.0; MAX_TEARS],
            n: 0,
        }
    }

    pub fn clear(&mut self) {
        self.n = 0;
    }

    /// Shoot one tear out of the eye at (x, y)
    pub fn spawn(&mut self, x: f32, y: f32, rng: &mut u32) {
        if self.n >= MAX_TEARS {
            log::warn!("tear pool full ({MAX_TEARS}), tear dropped");
            return;
        }

        let i = self.n;
        self.x[i] = x;
        self.y[i] = y;
        self.vx[i] = (Scene::rand(rng) - 0.5) * SPREAD;
        self.vy[i] = -2.0 - Scene::rand(rng) * 2.0;
        self.life[i] = 1.0;
        self.n += 1;
    }

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
            write += 1;
        }

        self.n = write;
    }
}
