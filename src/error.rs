/// Errors reported by the query store.
///
/// URL decomposition itself never fails; these only surface from direct
/// store mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Every slot is occupied
    CapacityExhausted {
        /// Slot count fixed at initialization
        capacity: usize,
    },
    /// The key already has an entry
    DuplicateKey,
}

impl core::fmt::Display for StoreError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::CapacityExhausted { capacity } => write!(
                f,
                "The item could not be added because the store has reached its capacity of {capacity}"
            ),
            Self::DuplicateKey => f.write_str("Key already exists in the store"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StoreError {}

/// Result type for query store operations
pub type Result<T> = core::result::Result<T, StoreError>;
