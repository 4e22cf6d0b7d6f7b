//! Raging Sea library - procedural ocean surface
//!
//! The wave model ([`wave`]) is a pure function of position, time and
//! parameters; everything else is the host that feeds it once per frame.

pub mod camera;
pub mod cli;
pub mod clock;
pub mod color;
pub mod control;
pub mod error;
pub mod noise;
pub mod ocean;
pub mod params;
pub mod rendering;
pub mod snapshot;
pub mod wave;

pub use error::{Error, Result};
