//! Orbitwatch - Mission Control Dashboard
//!
//! A library crate providing the orbital simulation, picking, camera,
//! and console components for testing and integration purposes.

pub mod camera;
pub mod fleet;
pub mod picking;
pub mod render;
pub mod rng;
pub mod sim;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
