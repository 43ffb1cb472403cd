// physics/ - Per-frame integrators
//
// Pure functions shared by every entity pool.
// No state, no allocation - just math. All rates are per frame.

mod motion;
mod geometry;

pub use motion::*;
pub use geometry::*;
