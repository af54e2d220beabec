//! Entity storage: id allocation, component arrays, and the world that ties
//! them to the frame clock.

pub mod entity;
pub mod store;
pub mod world;

pub use entity::EntityAllocator;
pub use store::{ComponentStore, Vec3Column};
pub(crate) use world::EntityInit;
pub use world::World;
