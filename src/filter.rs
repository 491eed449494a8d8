use crate::config::FilterConfig;
use crate::digest::derive_index;
use crate::error::Result;
use crate::stats::estimated_fpr;
use bitvec::{bitvec, order::Lsb0, vec::BitVec};
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

/// Bloom filter over a fixed-size packed bit buffer.
///
/// Each insert/query consults `num_hashes` slots; slot `i` derives a bit
/// position from the pool digest assigned to it (see
/// [`crate::derive_index`]). Bits only ever flip 0→1, so `query` can
/// return false positives but never a false negative for an item that
/// was inserted.
///
/// The buffer is owned exclusively by the filter and mutated only
/// through `&mut self`; callers that share a filter across threads wrap
/// it in their own synchronization.
pub struct BloomFilter {
    config: FilterConfig,
    bits: BitVec<u8, Lsb0>,
    insert_count: AtomicUsize,
}

impl BloomFilter {
    /// Creates a filter with an all-zero bit buffer of
    /// `ceil(size_bits / 8)` bytes. Fails with
    /// [`crate::FilterError::InvalidConfig`] when either parameter is
    /// zero.
    pub fn new(config: FilterConfig) -> Result<Self> {
        config.validate()?;

        let bits = bitvec![u8, Lsb0; 0; config.size_bits];
        debug!(
            "Created filter: {} bits, {} hash slots",
            config.size_bits, config.num_hashes
        );

        Ok(Self {
            config,
            bits,
            insert_count: AtomicUsize::new(0),
        })
    }

    /// Shorthand for constructing from the two raw parameters
    pub fn with_params(size_bits: usize, num_hashes: usize) -> Result<Self> {
        Self::new(FilterConfig {
            size_bits,
            num_hashes,
        })
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Inserts an item by setting the bit at every slot's derived index.
    ///
    /// Idempotent with respect to the buffer: re-inserting an item
    /// leaves it byte-for-byte unchanged.
    pub fn insert(&mut self, item: &[u8]) {
        for slot in 0..self.config.num_hashes {
            let idx = derive_index(item, slot, self.config.size_bits);
            self.bits.set(idx, true);
        }
        self.insert_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Tests membership. `false` means the item is definitely absent;
    /// `true` means it may be present (false positives are possible by
    /// design). Short-circuits on the first unset bit and never mutates
    /// the buffer.
    pub fn query(&self, item: &[u8]) -> bool {
        (0..self.config.num_hashes)
            .all(|slot| self.bits[derive_index(item, slot, self.config.size_bits)])
    }

    pub fn size_bits(&self) -> usize {
        self.config.size_bits
    }

    pub fn num_hashes(&self) -> usize {
        self.config.num_hashes
    }

    /// Number of `insert` calls, duplicates included
    pub fn insert_count(&self) -> usize {
        self.insert_count.load(Ordering::Relaxed)
    }

    /// Number of 1-bits currently set
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of the buffer's bits that are set
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.config.size_bits as f64
    }

    /// Expected false-positive probability at the current insert count
    pub fn estimated_fpr(&self) -> f64 {
        estimated_fpr(
            self.config.size_bits,
            self.insert_count(),
            self.config.num_hashes,
        )
    }

    /// Raw packed bytes backing the bit buffer, LSB-first within each
    /// byte
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }
}

impl std::fmt::Debug for BloomFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "BloomFilter {{ size_bits: {}, num_hashes: {}, bits_set: {}, insert_count: {} }}",
            self.config.size_bits,
            self.config.num_hashes,
            self.bits_set(),
            self.insert_count()
        )
    }
}
