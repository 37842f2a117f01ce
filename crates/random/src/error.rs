//! Error type for generator state handling.

use core::fmt;

/// Error type for [`Pcg32`](crate::Pcg32) seeding and state restoration.
///
/// Both variants are caller errors, not transient failures: they should be
/// surfaced immediately (e.g. reject a corrupt preset), never retried or
/// silently coerced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PcgError {
    /// A state array did not have exactly four 32-bit words.
    InvalidState {
        /// Number of words actually provided.
        len: usize,
    },
    /// The OS entropy source failed while drawing a random seed.
    #[cfg(feature = "entropy")]
    Entropy(getrandom::Error),
}

impl fmt::Display for PcgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidState { len } => {
                write!(f, "expected a state array of 4 words, got {}", len)
            }
            #[cfg(feature = "entropy")]
            Self::Entropy(err) => write!(f, "entropy source failed: {}", err),
        }
    }
}

impl core::error::Error for PcgError {}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::string::ToString;

    #[test]
    fn invalid_state_message_names_length() {
        let err = PcgError::InvalidState { len: 3 };
        assert!(err.to_string().contains("got 3"));
    }
}
