use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// Number of scintillator bar slots.
pub const N_SBAR: usize = 40;
/// Number of tray slots.
pub const N_TRAY: usize = 4;

/// Per-event accumulation of energy (or length) over the detector's bars and trays.
///
/// Slot `i` maps to a physical element through the external geometry model;
/// nothing here knows that mapping. Both arrays are fixed-size, so a constant
/// out-of-range index does not compile and a runtime one panics on `[]` or
/// yields `None` from `get`. [`EventEdep::add_sbar`] and
/// [`EventEdep::add_tray`] report it as [`Error::OutOfBounds`] instead.
///
/// Layout matches the C `SC8edep` struct.
#[repr(C)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventEdep {
    /// Per-bar accumulated quantity.
    #[cfg_attr(
        feature = "serde",
        serde(rename = "SBAR", with = "crate::core::arrays")
    )]
    pub sbar: [f64; N_SBAR],
    /// Per-tray accumulated quantity.
    #[cfg_attr(feature = "serde", serde(rename = "TRAY"))]
    pub tray: [f64; N_TRAY],
}

// Arrays longer than 32 have no derived Default.
impl Default for EventEdep {
    fn default() -> Self {
        Self {
            sbar: [0.0; N_SBAR],
            tray: [0.0; N_TRAY],
        }
    }
}

impl EventEdep {
    /// A zero-filled record, ready for a new event.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to bar slot `index`.
    ///
    /// Errors:
    /// - `Error::OutOfBounds` if `index >= N_SBAR`; the record is left untouched.
    pub fn add_sbar(&mut self, index: usize, value: f64) -> Result<()> {
        add_slot(&mut self.sbar, "SBAR", index, value)
    }

    /// Add `value` to tray slot `index`.
    ///
    /// Errors:
    /// - `Error::OutOfBounds` if `index >= N_TRAY`; the record is left untouched.
    pub fn add_tray(&mut self, index: usize, value: f64) -> Result<()> {
        add_slot(&mut self.tray, "TRAY", index, value)
    }

    /// Overwrite every bar slot from `values`.
    ///
    /// Errors:
    /// - `Error::InvalidParam` unless `values.len() == N_SBAR`; the record is left untouched.
    pub fn set_sbar(&mut self, values: &[f64]) -> Result<()> {
        copy_slots(&mut self.sbar, "SBAR", values)
    }

    /// Overwrite every tray slot from `values`.
    ///
    /// Errors:
    /// - `Error::InvalidParam` unless `values.len() == N_TRAY`; the record is left untouched.
    pub fn set_tray(&mut self, values: &[f64]) -> Result<()> {
        copy_slots(&mut self.tray, "TRAY", values)
    }

    /// Element-wise add another record into this one (reduction of per-worker partials).
    pub fn merge(&mut self, other: &EventEdep) {
        for (a, b) in self.sbar.iter_mut().zip(other.sbar.iter()) {
            *a += b;
        }
        for (a, b) in self.tray.iter_mut().zip(other.tray.iter()) {
            *a += b;
        }
        tracing::trace!("merged partial event deposit record");
    }

    /// Zero both arrays so the record can be reused for the next event.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when every slot is exactly zero.
    pub fn is_empty(&self) -> bool {
        self.sbar.iter().chain(self.tray.iter()).all(|&v| v == 0.0)
    }
}

fn add_slot<const N: usize>(
    slots: &mut [f64; N],
    what: &'static str,
    index: usize,
    value: f64,
) -> Result<()> {
    let Some(slot) = slots.get_mut(index) else {
        tracing::debug!(what, index, len = N, "deposit rejected: index out of range");
        return Err(Error::OutOfBounds {
            what,
            index,
            len: N,
        });
    };
    *slot += value;
    Ok(())
}

fn copy_slots<const N: usize>(
    slots: &mut [f64; N],
    what: &'static str,
    values: &[f64],
) -> Result<()> {
    *slots = values.try_into().map_err(|_| {
        Error::InvalidParam(format!(
            "{what} must have length {N}, got {}",
            values.len()
        ))
    })?;
    Ok(())
}

impl AddAssign<&EventEdep> for EventEdep {
    fn add_assign(&mut self, rhs: &EventEdep) {
        self.merge(rhs);
    }
}

impl AddAssign<EventEdep> for EventEdep {
    fn add_assign(&mut self, rhs: EventEdep) {
        self.merge(&rhs);
    }
}
