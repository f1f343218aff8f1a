//! The commitment handle and its reveal.
//!
//! A [`Commitment`] moves through [`Phase`]s in one direction only:
//!
//! ```text
//! Committed --disclose--> Disclosed --contribute--> Contributed --reveal--> Revealed
//! ```
//!
//! A counterparty value is refused until the digest has been handed out, and
//! the secret is refused until a counterparty value is fixed. That keeps the
//! ordering the fairness argument depends on, although the handle cannot know
//! whether the caller actually showed the digest to anyone.

use crate::digest::{HmacDigest, SecretKey, hmac_digest};
use crate::entropy::EntropySource;
use crate::error::{FairError, FairResult};

/// Where a commitment is in the protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Value and key drawn, digest not yet handed out.
    Committed,
    /// Digest handed out, waiting for the counterparty.
    Disclosed,
    /// Counterparty value fixed, secret still hidden.
    Contributed,
    /// Secret value and key disclosed.
    Revealed,
}

/// `(secret + counterparty) mod range`.
///
/// If `secret` is uniform over `0..range` and chosen independently of
/// `counterparty`, the result is uniform no matter how `counterparty` was
/// picked.
pub fn combine_modulo(secret: u32, counterparty: u32, range: u32) -> FairResult<u32> {
    if range == 0 {
        return Err(FairError::InvalidRange(range));
    }
    for value in [secret, counterparty] {
        if value >= range {
            return Err(FairError::ValueOutOfRange { value, range });
        }
    }
    Ok(wrapping_sum(secret, counterparty, range))
}

fn wrapping_sum(a: u32, b: u32, range: u32) -> u32 {
    // Both operands are below `range`, so the u64 sum cannot overflow and the
    // remainder fits back into u32.
    ((u64::from(a) + u64::from(b)) % u64::from(range)) as u32
}

/// A hidden value bound to a published digest.
pub struct Commitment {
    value: u32,
    key: SecretKey,
    digest: HmacDigest,
    range: u32,
    phase: Phase,
    counterparty: Option<u32>,
}

impl Commitment {
    /// Draw a secret value in `0..range` and a fresh key, then bind them.
    pub fn create<E: EntropySource + ?Sized>(range: u32, entropy: &mut E) -> FairResult<Self> {
        if range == 0 {
            return Err(FairError::InvalidRange(range));
        }
        let value = entropy.uniform_below(range)?;
        let key = SecretKey::generate(entropy)?;
        let digest = hmac_digest(&key, value)?;
        tracing::debug!(range, hmac = %digest, "committed to a secret value");
        Ok(Self {
            value,
            key,
            digest,
            range,
            phase: Phase::Committed,
            counterparty: None,
        })
    }

    /// Exclusive upper bound of both contributions.
    pub fn range(&self) -> u32 {
        self.range
    }

    /// Current protocol phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Hand out the digest for display to the counterparty.
    ///
    /// May be repeated until the commitment is revealed.
    pub fn disclose(&mut self) -> FairResult<HmacDigest> {
        match self.phase {
            Phase::Revealed => Err(FairError::AlreadyRevealed),
            Phase::Committed => {
                self.phase = Phase::Disclosed;
                Ok(self.digest)
            }
            Phase::Disclosed | Phase::Contributed => Ok(self.digest),
        }
    }

    /// Fix the counterparty's value. It must lie in `0..range`.
    pub fn contribute(&mut self, counterparty: u32) -> FairResult<()> {
        match self.phase {
            Phase::Committed => return Err(FairError::NotDisclosed),
            Phase::Contributed => return Err(FairError::AlreadyContributed),
            Phase::Revealed => return Err(FairError::AlreadyRevealed),
            Phase::Disclosed => {}
        }
        if counterparty >= self.range {
            return Err(FairError::ValueOutOfRange {
                value: counterparty,
                range: self.range,
            });
        }
        tracing::trace!(counterparty, "counterparty value fixed");
        self.counterparty = Some(counterparty);
        self.phase = Phase::Contributed;
        Ok(())
    }

    /// Disclose the secret value and key. Allowed exactly once.
    pub fn reveal(&mut self) -> FairResult<Reveal> {
        let counterparty = match (self.phase, self.counterparty) {
            (Phase::Revealed, _) => return Err(FairError::AlreadyRevealed),
            (Phase::Contributed, Some(counterparty)) => counterparty,
            _ => return Err(FairError::NoContribution),
        };
        self.phase = Phase::Revealed;
        tracing::debug!(
            value = self.value,
            counterparty,
            range = self.range,
            "revealed commitment"
        );
        Ok(Reveal {
            value: self.value,
            key: self.key.clone(),
            digest: self.digest,
            counterparty,
            range: self.range,
        })
    }
}

impl std::fmt::Debug for Commitment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Commitment")
            .field("range", &self.range)
            .field("phase", &self.phase)
            .field("digest", &self.digest)
            .finish_non_exhaustive()
    }
}

/// Everything needed to check a commitment after the fact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reveal {
    value: u32,
    key: SecretKey,
    digest: HmacDigest,
    counterparty: u32,
    range: u32,
}

impl Reveal {
    /// The committed secret value.
    pub fn value(&self) -> u32 {
        self.value
    }

    /// The commitment key.
    pub fn key(&self) -> &SecretKey {
        &self.key
    }

    /// The commitment key as uppercase hex.
    pub fn key_hex(&self) -> String {
        self.key.to_hex()
    }

    /// The digest that was disclosed before the counterparty acted.
    pub fn digest(&self) -> HmacDigest {
        self.digest
    }

    /// The counterparty's fixed value.
    pub fn counterparty(&self) -> u32 {
        self.counterparty
    }

    /// Exclusive upper bound of both contributions.
    pub fn range(&self) -> u32 {
        self.range
    }

    /// The fair result: `(value + counterparty) mod range`.
    pub fn combined(&self) -> u32 {
        wrapping_sum(self.value, self.counterparty, self.range)
    }

    /// Recompute the digest from the revealed key and value.
    pub fn verify(&self) -> bool {
        hmac_digest(&self.key, self.value).is_ok_and(|d| d == self.digest)
    }
}
