//! Simulation engine for the balloon brawl.
//!
//! Owns a fixed-capacity structure-of-arrays world, runs the frame pipeline
//! (time, movement, collision, stats) once per host animation callback, and
//! reports kills and team tallies to the presentation layer. Completely
//! headless, so the whole pipeline is testable with a scripted random source.

pub mod ecs;
pub mod engine;
pub mod lifecycle;
pub mod random;
pub mod systems;
pub mod watch;

pub use brawl_core as core;
pub use engine::{Clock, FrameHooks, MonotonicClock, Simulation};

#[cfg(test)]
mod tests;
