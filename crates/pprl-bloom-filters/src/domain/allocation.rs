//! Pluggable placement of field regions inside the composite bitset.
//!
//! The allocation is computed from field lengths alone so it can be
//! tested independently of the hashing.

use crate::error::ConfigurationError;

/// Maps every field-local bit to its composite bit index.
pub trait AllocationStrategy: Send + Sync {
    /// For each field, the composite index of each local bit.
    ///
    /// The returned maps must be a partition of `0..total_length`.
    fn allocate(
        &self,
        field_lengths: &[usize],
        total_length: usize,
    ) -> Result<Vec<Vec<usize>>, ConfigurationError>;
}

/// Fields occupy consecutive regions in configuration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContiguousAllocation;

impl AllocationStrategy for ContiguousAllocation {
    fn allocate(
        &self,
        field_lengths: &[usize],
        total_length: usize,
    ) -> Result<Vec<Vec<usize>>, ConfigurationError> {
        let allocated: usize = field_lengths.iter().sum();
        if allocated != total_length {
            return Err(ConfigurationError::AllocationMismatch {
                allocated,
                expected: total_length,
            });
        }

        let mut offset = 0;
        Ok(field_lengths
            .iter()
            .map(|&length| {
                let map = (offset..offset + length).collect();
                offset += length;
                map
            })
            .collect())
    }
}

/// Fields are striped round-robin across the composite; a field that has
/// exhausted its length drops out of the rotation.
#[derive(Clone, Copy, Debug, Default)]
pub struct InterleavedAllocation;

impl AllocationStrategy for InterleavedAllocation {
    fn allocate(
        &self,
        field_lengths: &[usize],
        total_length: usize,
    ) -> Result<Vec<Vec<usize>>, ConfigurationError> {
        let allocated: usize = field_lengths.iter().sum();
        if allocated != total_length {
            return Err(ConfigurationError::AllocationMismatch {
                allocated,
                expected: total_length,
            });
        }

        let mut maps: Vec<Vec<usize>> = field_lengths
            .iter()
            .map(|&length| Vec::with_capacity(length))
            .collect();

        let mut global = 0;
        while global < total_length {
            for (map, &length) in maps.iter_mut().zip(field_lengths) {
                if map.len() < length {
                    map.push(global);
                    global += 1;
                }
            }
        }

        Ok(maps)
    }
}
