// pig.rs - The mascot
//
// Kinematics (x, hop, rotation, gait) plus the trip -> sit -> cry
// sequence. `Mood` carries the sequence timers so illegal combinations
// (crying while walking, tripping while sitting) cannot be expressed.

use super::{Coins, Pointer, Scene, Tears};
use crate::physics::{approach, distance, rotate};

// Trip trigger
const TRIP_RADIUS: f32 = 45.0;
const EDGE_MARGIN: f32 = 100.0;
const BODY_LIFT: f32 = 20.0; // body center above the floor line

// Trip / sit / cry timing (frames) and poses (radians)
const TRIP_FRAMES: u32 = 50;
const IMPACT_FRAMES: u32 = 10;
const TRIP_ANGLE: f32 = 0.8;
const TRIP_EASE: f32 = 0.15;
const SIT_ANGLE: f32 = -0.2;
const SIT_EASE: f32 = 0.05;
const CRY_AFTER: u32 = 30;
const SIT_FRAMES: u32 = 250;
const SOB_AMPLITUDE: f32 = 0.05;
const SOB_RATE: f32 = 0.8;
const TEAR_EVERY: u32 = 4;
const EYE: (f32, f32) = (32.0, -12.0);

// Foraging
const MOUTH_OFFSET: f32 = 30.0;
const REACH_BEHIND: f32 = 10.0;
const ALIGN: f32 = 5.0;
const EAT_RANGE: f32 = 60.0;
const BITE_RANGE: f32 = 15.0;
const GAIT_STEP: f32 = 0.15;

// Blinking (frames)
const BLINK_MIN: f32 = 150.0;
const BLINK_SPREAD: f32 = 100.0;
const BLINK_END: u32 = 260;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mood {
    Walking,
    Tripping { timer: u32 },
    Sitting { timer: u32, crying: bool },
}

impl Mood {
    /// One frame of the sequence timers. Walking never leaves on its own;
    /// the pointer trigger starts a trip.
    pub fn advance(self) -> Mood {
        match self {
            Mood::Walking => Mood::Walking,
            Mood::Tripping { timer } => {
                let timer = timer + 1;
                if timer > TRIP_FRAMES {
                    Mood::Sitting { timer: 0, crying: false }
                } else {
                    Mood::Tripping { timer }
                }
            }
            Mood::Sitting { timer, crying } => {
                let timer = timer + 1;
                if timer > SIT_FRAMES {
                    Mood::Walking
                } else {
                    Mood::Sitting { timer, crying: crying || timer > CRY_AFTER }
                }
            }
        }
    }

    pub fn is_tripping(self) -> bool {
        matches!(self, Mood::Tripping { .. })
    }

    pub fn is_sitting(self) -> bool {
        matches!(self, Mood::Sitting { .. })
    }

    pub fn is_crying(self) -> bool {
        matches!(self, Mood::Sitting { crying: true, .. })
    }
}

pub struct Pig {
    pub x: f32,
    pub hop: f32, // vertical impact offset, negative is up
    pub rotation: f32,
    pub gait: f32,
    pub eating: bool,
    pub blinking: bool,
    pub mood: Mood,

    blink_timer: u32,
    blink_at: u32,
}

impl Pig {
    pub fn new(x: f32, rng: &mut u32) -> Self {
        Self {
            x,
            hop: 0.0,
            rotation: 0.0,
            gait: 0.0,
            eating: false,
            blinking: false,
            mood: Mood::Walking,
            blink_timer: 0,
            blink_at: roll_blink(rng),
        }
    }

    /// Back to the start line, walking and upright
    pub fn reset(&mut self, x: f32) {
        self.x = x;
        self.hop = 0.0;
        self.rotation = 0.0;
        self.mood = Mood::Walking;
    }

    /// Visual center, the point the pointer has to get close to
    pub fn center_y(&self, floor_y: f32) -> f32 {
        floor_y - BODY_LIFT + self.hop
    }

    /// Pointer close enough to trip a fully visible, walking pig
    pub fn spooked_by(&self, pointer: Pointer, floor_y: f32, width: f32) -> bool {
        self.mood == Mood::Walking
            && self.x > 0.0
            && self.x < width - EDGE_MARGIN
            && distance(self.x, self.center_y(floor_y), pointer.x, pointer.y) < TRIP_RADIUS
    }

    pub fn trip(&mut self) {
        log::debug!("pig tripped at x={:.1}", self.x);
        self.mood = Mood::Tripping { timer: 0 };
    }

    /// Advance the trip / sit / cry sequence one frame
    pub fn update_mood(&mut self, frame: u32, floor_y: f32, tears: &mut Tears, rng: &mut u32) {
        let next = self.mood.advance();

        match (self.mood, next) {
            (Mood::Tripping { .. }, Mood::Sitting { .. }) => {
                log::debug!("pig sat down");
                self.rotation = TRIP_ANGLE;
                self.hop = 0.0;
            }
            (Mood::Sitting { .. }, Mood::Walking) => {
                log::debug!("pig got back up");
                self.rotation = 0.0;
            }
            (_, Mood::Tripping { timer }) => {
                self.rotation = approach(self.rotation, TRIP_ANGLE, TRIP_EASE);
                self.hop = if timer < IMPACT_FRAMES {
                    -(timer as f32 * 0.5).sin() * 5.0
                } else {
                    0.0
                };
            }
            (_, Mood::Sitting { crying, .. }) => {
                if crying && !self.mood.is_crying() {
                    log::debug!("pig started crying");
                }
                self.rotation = approach(self.rotation, SIT_ANGLE, SIT_EASE);
                if crying {
                    self.rotation = SIT_ANGLE + (frame as f32 * SOB_RATE).sin() * SOB_AMPLITUDE;
                    if frame % TEAR_EVERY == 0 {
                        let (ex, ey) = rotate(EYE.0, EYE.1, self.rotation);
                        tears.spawn(self.x + ex, self.center_y(floor_y) + ey, rng);
                    }
                }
            }
            _ => {}
        }

        self.mood = next;
    }

    /// Blink on a random cadence; frozen mid-trip and while crying
    pub fn blink(&mut self, rng: &mut u32) {
        if self.mood.is_tripping() || self.mood.is_crying() { return; }

        self.blink_timer += 1;
        if self.blink_timer > self.blink_at {
            self.blinking = true;
        }
        if self.blink_timer > BLINK_END {
            self.blinking = false;
            self.blink_timer = 0;
            self.blink_at = roll_blink(rng);
        }
    }

    /// Head for the nearest coin ahead and eat it once it has landed.
    /// Returns the index of the coin eaten this frame.
    pub fn walk(&mut self, coins: &mut Coins, speed: f32) -> Option<usize> {
        self.eating = false;
        if self.mood != Mood::Walking { return None; }

        let mut moving = true;
        let mut eaten = None;

        match coins.nearest_ahead(self.x - REACH_BEHIND) {
            Some(i) => {
                let dx = coins.x[i] - (self.x + MOUTH_OFFSET);
                if dx > ALIGN {
                    self.x += speed;
                } else if dx < -ALIGN {
                    self.x += speed * 0.5;
                } else {
                    moving = false;
                }

                if coins.landed[i] && dx.abs() < EAT_RANGE {
                    self.eating = true;
                }
                if coins.landed[i] && dx.abs() < BITE_RANGE {
                    coins.active[i] = false;
                    eaten = Some(i);
                }
            }
            None => self.x += speed,
        }

        if moving {
            self.gait += GAIT_STEP;
        }
        eaten
    }
}

fn roll_blink(rng: &mut u32) -> u32 {
    (BLINK_MIN + Scene::rand(rng) * BLINK_SPREAD) as u32
}
