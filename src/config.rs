use crate::error::{FilterError, Result};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Configuration for a [`crate::BloomFilter`]
#[derive(Clone, Debug, Builder, Serialize, Deserialize)]
#[builder(pattern = "owned")]
pub struct FilterConfig {
    /// Number of addressable bit positions in the filter
    #[builder(default = "1024")]
    pub size_bits: usize,

    /// Number of hash evaluations per insert/query
    #[builder(default = "3")]
    pub num_hashes: usize,
}

impl FilterConfig {
    pub fn validate(&self) -> Result<()> {
        if self.size_bits == 0 {
            return Err(FilterError::InvalidConfig(
                "size_bits must be > 0".into(),
            ));
        }
        if self.num_hashes == 0 {
            return Err(FilterError::InvalidConfig(
                "num_hashes must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Bytes needed to back `size_bits` positions
    pub fn buffer_bytes(&self) -> usize {
        self.size_bits.div_ceil(8)
    }
}

impl From<FilterConfigBuilderError> for FilterError {
    fn from(err: FilterConfigBuilderError) -> Self {
        FilterError::ConfigBuilder(err.to_string())
    }
}
