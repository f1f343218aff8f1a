//! Commit-reveal fair value generation for two-party dice rolls.
//!
//! The generating party draws a secret value from a cryptographically secure
//! source and publishes an HMAC-SHA256 digest of it under a fresh 32-byte
//! key. Only after the counterparty has fixed its own contribution are the
//! value and key revealed. The final result is the modular sum of both
//! contributions, which is uniform as long as either side chose uniformly.
//!
//! ```no_run
//! use ntd_fair::FairValueGenerator;
//!
//! # fn main() -> ntd_fair::FairResult<()> {
//! let mut generator = FairValueGenerator::new();
//! let mut commitment = generator.commit(6)?;
//! println!("HMAC={}", commitment.disclose()?);
//! commitment.contribute(4)?;
//! let reveal = commitment.reveal()?;
//! println!("KEY={} result={}", reveal.key_hex(), reveal.combined());
//! # Ok(())
//! # }
//! ```

pub mod commitment;
pub mod digest;
pub mod entropy;
pub mod error;
pub mod generator;

pub use commitment::{Commitment, Phase, Reveal, combine_modulo};
pub use digest::{HmacDigest, KEY_LEN, SecretKey, hmac_digest, verify_digest};
pub use entropy::{EntropySource, OsEntropy};
pub use error::{FairError, FairResult};
pub use generator::FairValueGenerator;
