use alloc::collections::TryReserveError;

/// The reason an argument was rejected.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum InvalidArgument {
    /// Keys must contain at least one byte.
    #[error("key must not be empty")]
    EmptyKey,
    /// The maximum load factor must lie in `(0, 1]`.
    #[error("maximum load factor {0} is outside (0, 1]")]
    MaxLoadFactor(f64),
    /// The minimum load factor must lie in `[0, max_load_factor)`.
    #[error("minimum load factor {0} is outside [0, max_load_factor)")]
    MinLoadFactor(f64),
    /// A resize target that is not a power of two in `[2, u32::MAX / 2]`, or
    /// that cannot hold the live entries.
    #[error("capacity {0} is not a usable table size")]
    CapacityOutOfRange(u64),
}

/// Errors returned by [`RobinHoodTable`](crate::RobinHoodTable) operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// An argument or configuration value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
    /// The key is already present; the table was left unchanged.
    #[error("key already exists")]
    KeyExists,
    /// The key is not present.
    #[error("key not found")]
    KeyNotFound,
    /// The backing store for a new capacity could not be allocated. The table
    /// keeps its previous store.
    #[error("failed to allocate slot store: {0}")]
    MemoryError(#[from] TryReserveError),
    /// Placement walked `capacity` probe steps without finding an empty slot.
    ///
    /// This cannot happen with a probe strategy that visits every slot and a
    /// working load-factor trigger, so it points at a broken strategy or a
    /// corrupted table.
    #[error("probe sequence exhausted {capacity} slots without finding a free one")]
    InternalInvariantViolation {
        /// Capacity of the store at the time of failure.
        capacity: u32,
    },
}

/// A rejected [`insert`](crate::RobinHoodTable::insert), carrying the key and
/// value back to the caller.
///
/// The table only takes ownership of an entry once it is stored. When the
/// insert fails for any reason the entry is handed back here instead of being
/// dropped.
pub struct InsertError<K, V> {
    /// Why the insert was rejected.
    pub error: TableError,
    /// The key that was not stored.
    pub key: K,
    /// The value that was not stored.
    pub value: V,
}

impl<K, V> InsertError<K, V> {
    /// Splits the error into its cause and the returned entry.
    pub fn into_parts(self) -> (TableError, K, V) {
        (self.error, self.key, self.value)
    }
}

impl<K, V> core::fmt::Debug for InsertError<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("InsertError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<K, V> core::fmt::Display for InsertError<K, V> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "insert rejected: {}", self.error)
    }
}

impl<K, V> core::error::Error for InsertError<K, V> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<K, V> From<InsertError<K, V>> for TableError {
    fn from(rejected: InsertError<K, V>) -> Self {
        rejected.error
    }
}
