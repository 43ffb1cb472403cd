// label.rs - "+₱" text drifting up after a pickup

use super::MAX_LABELS;
use crate::physics::decay;

const RISE: f32 = 0.8;
const FADE: f32 = 0.02;

pub const REWARD_TEXT: &str = "+₱";

pub struct Labels {
    // Position
    pub x: [f32; MAX_LABELS],
    pub y: [f32; MAX_LABELS],

    pub text: [&'static str; MAX_LABELS],
    pub life: [f32; MAX_LABELS],
    pub opacity: [f32; MAX_LABELS], // mirrors life

    // Count
    pub n: usize,
}

impl Labels {
    pub fn new() -> Self {
        Self {
            x: [0.0; MAX_LABELS],
            y: [0.0; MAX_LABELS],
            text: [""; MAX_LABELS],
            life: [0.0; MAX_LABELS],
            opacity: [0.0; MAX_LABELS],
            n: 0,
        }
    }

    pub fn clear(&mut self) {
        self.n = 0;
    }

    pub fn spawn(&mut self, x: f32, y: f32, text: &'static str) {
        if self.n >= MAX_LABELS {
            log::warn!("label pool full ({MAX_LABELS}), {text:?} dropped");
            return;
        }

        let i = self.n;
        self.x[i] = x;
        self.y[i] = y;
        self.text[i] = text;
        self.life[i] = 1.0;
        self.opacity[i] = 1.0;
        self.n += 1;
    }

    pub fn update(&mut self) {
        let mut write = 0;

        for read in 0..self.n {
            let mut life = self.life[read];
            if !decay(&mut life, FADE) { continue; }

            self.x[write] = self.x[read];
            self.y[write] = self.y[read] - RISE;
            self.text[write] = self.text[read];
            self.life[write] = life;
            self.opacity[write] = life;
            write += 1;
        }

        self.n = write;
    }
}
