//! Systems that operate on the world each frame.
//!
//! Systems are plain functions that receive exactly the state they read or
//! mutate. They hold no state of their own; anything that must persist
//! between frames (the stats cadence counter) is passed in by the caller.

pub mod collision;
pub mod movement;
pub mod snapshot;
pub mod stats;
pub mod time;
