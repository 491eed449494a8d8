use md5::Md5;
use sha1::Sha1;
use sha2::{Digest, Sha256, Sha384, Sha512};

/// One member of the filter's digest pool.
///
/// A closed set of general-purpose digest algorithms used as fast,
/// well-distributed index sources. None of their cryptographic
/// properties are relied on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigestAlgorithm {
    Sha256,
    Sha1,
    Md5,
    Sha384,
    Sha512,
}

/// The fixed, ordered digest pool. Hash slot `i` maps to
/// `DIGEST_POOL[i % DIGEST_POOL.len()]`, so slots cycle through the pool
/// when the configured hash count exceeds its length.
pub const DIGEST_POOL: [DigestAlgorithm; 5] = [
    DigestAlgorithm::Sha256,
    DigestAlgorithm::Sha1,
    DigestAlgorithm::Md5,
    DigestAlgorithm::Sha384,
    DigestAlgorithm::Sha512,
];

impl DigestAlgorithm {
    /// Pool member consulted by the given hash slot
    pub fn for_slot(slot: usize) -> Self {
        DIGEST_POOL[slot % DIGEST_POOL.len()]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha256 => "SHA-256",
            Self::Sha1 => "SHA-1",
            Self::Md5 => "MD5",
            Self::Sha384 => "SHA-384",
            Self::Sha512 => "SHA-512",
        }
    }

    /// Digest output width in bytes
    pub fn output_len(&self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha1 => 20,
            Self::Md5 => 16,
            Self::Sha384 => 48,
            Self::Sha512 => 64,
        }
    }

    /// Raw digest of `item`
    pub fn digest(&self, item: &[u8]) -> Vec<u8> {
        match self {
            Self::Sha256 => Sha256::digest(item).to_vec(),
            Self::Sha1 => Sha1::digest(item).to_vec(),
            Self::Md5 => Md5::digest(item).to_vec(),
            Self::Sha384 => Sha384::digest(item).to_vec(),
            Self::Sha512 => Sha512::digest(item).to_vec(),
        }
    }
}

/// Maps an item to a bit position in `[0, size_bits)` for one hash slot.
///
/// The slot's pool digest is computed over the item's bytes (callers
/// hand in a string's UTF-8 encoding), read as a single big-endian
/// unsigned integer and reduced modulo `size_bits`. Pure and
/// deterministic: the same `(item, slot, size_bits)` always yields the
/// same index, across calls and across process runs.
pub fn derive_index(item: &[u8], slot: usize, size_bits: usize) -> usize {
    let digest = DigestAlgorithm::for_slot(slot).digest(item);
    reduce_mod(&digest, size_bits)
}

// Digest widths run up to 512 bits, past any machine word. Folding byte
// by byte keeps the running remainder below the modulus, so the whole
// integer never has to be materialized.
fn reduce_mod(digest: &[u8], modulus: usize) -> usize {
    let m = modulus as u128;
    let rem = digest
        .iter()
        .fold(0u128, |acc, &byte| ((acc << 8) | u128::from(byte)) % m);
    rem as usize
}
