//! Entry point for drawing fair values.

use crate::commitment::Commitment;
use crate::entropy::{EntropySource, OsEntropy};
use crate::error::FairResult;

/// Produces commitments and secure uniform draws.
///
/// Holds nothing but its entropy source; with [`OsEntropy`] that is a unit
/// struct, so every call draws fresh bytes and no key or value outlives the
/// commitment it belongs to.
#[derive(Debug, Clone, Default)]
pub struct FairValueGenerator<E = OsEntropy> {
    entropy: E,
}

impl FairValueGenerator<OsEntropy> {
    /// A generator backed by the operating system's CSPRNG.
    pub fn new() -> Self {
        Self { entropy: OsEntropy }
    }
}

impl<E: EntropySource> FairValueGenerator<E> {
    /// A generator backed by a custom source.
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Commit to a secret value in `0..range` under a fresh key.
    pub fn commit(&mut self, range: u32) -> FairResult<Commitment> {
        Commitment::create(range, &mut self.entropy)
    }

    /// A plain secure draw in `0..range`, with no commitment attached.
    pub fn pick(&mut self, range: u32) -> FairResult<u32> {
        self.entropy.uniform_below(range)
    }
}
