//! Data records for the SC8 detector transport simulation.
//!
//! - [`core::ParticleRecord`]: one particle at one transport step.
//! - [`core::EventEdep`]: per-event energy accumulation over 40 bars and 4 trays.
//!
//! With the `python` feature the crate builds as a Python extension module
//! named `sc8data`.

pub mod core;
pub mod error;
#[cfg(feature = "python")]
mod python;

pub use crate::core::{EventEdep, ParticleRecord, N_SBAR, N_TRAY};
pub use crate::error::{Error, Result};
