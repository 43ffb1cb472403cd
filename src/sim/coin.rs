// coin.rs - Falling reward coins
//
// Structure-of-Arrays layout. Collected coins stay in the pool as
// inactive until they drop below the prune cutoff or the scene resets.

use super::{MAX_COINS, Scene};
use crate::physics::{bounce, fall};

// Physics constants
const SPAWN_Y: f32 = -30.0;
const SPAWN_VY: f32 = 6.0;
const GRAVITY: f32 = 0.5;
const RESTITUTION: f32 = 0.4;
const MAX_BOUNCES: u8 = 2;

// Spawn placement, relative to the furthest of pig and active coins
const MIN_GAP: f32 = 150.0;
const GAP_RANGE: f32 = 250.0;
const MIN_EXTRA: f32 = 1.0; // keeps the gap strict after f32 rounding

pub struct Coins {
    // Position
    pub x: [f32; MAX_COINS],
    pub y: [f32; MAX_COINS],
    pub target_y: [f32; MAX_COINS], // rest height

    // Velocity (y only, coins fall straight)
    pub vy: [f32; MAX_COINS],

    pub bounces: [u8; MAX_COINS],
    pub active: [bool; MAX_COINS],
    pub landed: [bool; MAX_COINS],

    // Count
    pub n: usize,
}

impl Coins {
    pub fn new() -> Self {
        Self {
            x: [0.0; MAX_COINS],
            y: [0.0; MAX_COINS],
            target_y: [0.0; MAX_COINS],
            vy: [0.0; MAX_COINS],
            bounces: [0; MAX_COINS],
            active: [false; MAX_COINS],
            landed: [false; MAX_COINS],
            n: 0,
        }
    }

    pub fn clear(&mut self) {
        self.n = 0;
    }

    pub fn active_count(&self) -> usize {
        self.active[..self.n].iter().filter(|&&a| a).count()
    }

    /// Rightmost of `from` and every active coin
    pub fn furthest_active(&self, from: f32) -> f32 {
        (0..self.n)
            .filter(|&i| self.active[i])
            .fold(from, |max, i| max.max(self.x[i]))
    }

    /// Drop a new coin from above the screen, strictly ahead of `furthest`
    pub fn spawn(&mut self, furthest: f32, target_y: f32, rng: &mut u32) -> Option<usize> {
        if self.n >= MAX_COINS {
            log::warn!("coin pool full ({MAX_COINS}), spawn dropped");
            return None;
        }

        let extra = ((1.0 - Scene::rand(rng)) * GAP_RANGE).max(MIN_EXTRA);
        let x = furthest + MIN_GAP + extra;
        Some(self.push(x, SPAWN_Y, target_y, SPAWN_VY, 0, false))
    }

    /// Place a coin already at rest, skipping the drop
    pub fn seed_landed(&mut self, x: f32, y: f32) -> Option<usize> {
        if self.n >= MAX_COINS {
            log::warn!("coin pool full ({MAX_COINS}), seed dropped");
            return None;
        }
        Some(self.push(x, y, y, 0.0, MAX_BOUNCES, true))
    }

    fn push(&mut self, x: f32, y: f32, target_y: f32, vy: f32, bounces: u8, landed: bool) -> usize {
        let i = self.n;
        self.x[i] = x;
        self.y[i] = y;
        self.target_y[i] = target_y;
        self.vy[i] = vy;
        self.bounces[i] = bounces;
        self.active[i] = true;
        self.landed[i] = landed;
        self.n += 1;
        i
    }

    /// Fall, bounce twice, then rest
    pub fn update(&mut self) {
        for i in 0..self.n {
            if !self.active[i] || self.landed[i] { continue; }

            self.y[i] += self.vy[i];
            if self.y[i] >= self.target_y[i] {
                self.y[i] = self.target_y[i];
                if self.bounces[i] < MAX_BOUNCES {
                    self.vy[i] = bounce(self.vy[i], RESTITUTION);
                    self.bounces[i] += 1;
                } else {
                    self.landed[i] = true;
                }
            } else {
                fall(&mut self.vy[i], GRAVITY);
            }
        }
    }

    /// Nearest active coin whose x is past `min_x`
    pub fn nearest_ahead(&self, min_x: f32) -> Option<usize> {
        (0..self.n)
            .filter(|&i| self.active[i] && self.x[i] > min_x)
            .min_by(|&a, &b| self.x[a].total_cmp(&self.x[b]))
    }

    /// Keep coins that are active or still above `cutoff_y`
    pub fn prune(&mut self, cutoff_y: f32) {
        let mut write = 0;

        for read in 0..self.n {
            if !self.active[read] && self.y[read] >= cutoff_y { continue; }

            self.x[write] = self.x[read];
            self.y[write] = self.y[read];
            self.target_y[write] = self.target_y[read];
            self.vy[write] = self.vy[read];
            self.bounces[write] = self.bounces[read];
            self.active[write] = self.active[read];
            self.landed[write] = self.landed[read];
            write += 1;
        }

        self.n = write;
    }
}
