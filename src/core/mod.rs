//! Step- and event-level records exchanged with the SC8 transport simulation.
//!
//! Both types are passive values: the transport engine fills
//! [`ParticleRecord`]s, an accumulation stage folds them into an
//! [`EventEdep`], and an output stage reads the result.

#[cfg(feature = "serde")]
pub(crate) mod arrays;
pub mod edep;
pub mod particle;

pub use edep::{EventEdep, N_SBAR, N_TRAY};
pub use particle::ParticleRecord;
