//! Sources of cryptographically secure randomness.
//!
//! [`OsEntropy`] asks the operating system for fresh bytes on every call and
//! keeps nothing between calls. Tests substitute their own
//! [`EntropySource`] to make commitments reproducible.

use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::error::{FairError, FairResult};

/// Rejection sampling gives up after this many draws. A healthy source is
/// rejected with probability below one half per draw.
const MAX_DRAWS: usize = 64;

/// A provider of secure random bytes.
pub trait EntropySource {
    /// Fill `dest` with random bytes.
    fn fill(&mut self, dest: &mut [u8]) -> FairResult<()>;

    /// Draw a uniformly distributed integer in `0..bound`.
    ///
    /// Uses rejection sampling over 32-bit words so no value is favoured.
    fn uniform_below(&mut self, bound: u32) -> FairResult<u32> {
        if bound == 0 {
            return Err(FairError::InvalidRange(bound));
        }
        // Largest multiple of `bound` representable; words at or above it are redrawn.
        let zone = u32::MAX - u32::MAX % bound;
        for _ in 0..MAX_DRAWS {
            let mut word = [0u8; 4];
            self.fill(&mut word)?;
            let x = u32::from_le_bytes(word);
            if x < zone {
                return Ok(x % bound);
            }
        }
        Err(FairError::Entropy(format!(
            "no usable sample after {MAX_DRAWS} draws"
        )))
    }
}

/// The operating system's CSPRNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, dest: &mut [u8]) -> FairResult<()> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            tracing::error!(error = %e, "operating system entropy source failed");
            FairError::Entropy(e.to_string())
        })
    }
}

impl<E: EntropySource + ?Sized> EntropySource for &mut E {
    fn fill(&mut self, dest: &mut [u8]) -> FairResult<()> {
        (**self).fill(dest)
    }
}
