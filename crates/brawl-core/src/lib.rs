//! Core types and definitions for the balloon brawl simulation.
//!
//! This crate defines the vocabulary shared by the simulation and whatever
//! presentation layer consumes it: geometric types, team ids, tuning
//! constants, configuration, events, snapshots, and errors.
//! It contains no simulation logic and no dependency on any host, renderer,
//! or runtime framework.

pub mod config;
pub mod constants;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
