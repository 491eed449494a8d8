//! Fixed-size Bloom filter driven by a rotating pool of digest algorithms.
//!
//! The filter owns a packed bit buffer of `size_bits` positions and
//! consults `num_hashes` hash slots per operation. Slot `i` maps to one
//! member of an ordered pool of five general-purpose digests (SHA-256,
//! SHA-1, MD5, SHA-384, SHA-512) via `i mod pool_len`; the slot's bit
//! position is the digest of the item's bytes read as one big unsigned
//! integer, reduced modulo `size_bits`.
//!
//! Guarantees:
//!   * No false negatives: `query(x)` is `true` for every `x` previously
//!     passed to `insert`.
//!   * False positives are possible; the rate follows the usual
//!     `(1 - e^(-kn/m))^k` estimate.
//!   * Fully deterministic: indices depend only on the item bytes, slot
//!     and `size_bits` (no salt, randomness or time), so identical
//!     configurations behave identically across process runs.
//!
//! ```
//! use digest_bloom_rs::BloomFilter;
//!
//! let mut filter = BloomFilter::with_params(128, 3).unwrap();
//! filter.insert(b"apple");
//! assert!(filter.query(b"apple"));
//! ```

mod config;
mod digest;
mod error;
mod filter;
mod stats;

pub use config::{FilterConfig, FilterConfigBuilder, FilterConfigBuilderError};
pub use digest::{DIGEST_POOL, DigestAlgorithm, derive_index};
pub use error::{FilterError, Result};
pub use filter::BloomFilter;
pub use stats::{estimated_fpr, optimal_num_hashes, optimal_size_bits};
