//! OS-backed seeding for the "no seed supplied" case.
//!
//! The deterministic core never touches this; tools call it once when the
//! user asks for a fresh random seed, then carry the resulting seed around
//! explicitly so the variation stays reproducible.

use crate::error::PcgError;
use crate::pcg::Pcg32;

impl Pcg32 {
    /// Create a generator with a seed drawn from the OS entropy source,
    /// using the default stream.
    ///
    /// # Errors
    ///
    /// Returns [`PcgError::Entropy`] if the OS source is unavailable.
    pub fn from_entropy() -> Result<Self, PcgError> {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes).map_err(PcgError::Entropy)?;
        Ok(Self::new(u64::from_le_bytes(bytes)))
    }
}
