#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Step-level snapshot of one tracked particle.
///
/// Filled once per transport step by the simulation engine and handed off
/// as a plain value. Units follow whatever convention the producer uses
/// (typically MeV, mm, ns); the record carries none.
///
/// Physical expectations such as `steplength >= 0`, `edep >= 0` and
/// `ma >= 0` are not checked here: every field holds exactly what was
/// written to it. Layout matches the C `SC8Particle` struct.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "python", pyo3::pyclass(name = "Particle", get_all, set_all))]
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParticleRecord {
    /// Particle species identifier.
    pub pid: i32,
    /// Trajectory identifier, unique within an event.
    pub trackid: i32,
    /// Momentum, x component.
    pub px: f64,
    /// Momentum, y component.
    pub py: f64,
    /// Momentum, z component.
    pub pz: f64,
    /// Particle mass.
    pub ma: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Path length traversed in this step.
    pub steplength: f64,
    /// Energy deposited during this step.
    pub edep: f64,
}
