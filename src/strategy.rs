//! Pluggable hash, comparison and probe strategies.
//!
//! Each strategy is a small trait with a single method. Any closure with the
//! matching signature implements the trait, so ad-hoc strategies do not need
//! a named type:
//!
//! ```rust
//! use robin_hash::TableConfig;
//!
//! let config = TableConfig::<[u8; 4], u32>::default()
//!     .with_hasher(|key: &[u8]| key.len() as u32)
//!     .with_comparator(|a: &[u8], b: &[u8]| a == b);
//! # let _ = config;
//! ```

/// Maps key bytes to a 32-bit hash.
pub trait HashStrategy {
    /// Hashes `key`. Must be deterministic for the lifetime of a table.
    fn hash(&self, key: &[u8]) -> u32;
}

/// Decides whether a stored key and a query key are the same key.
///
/// The table only consults the comparator after the cached hashes matched.
pub trait KeyComparator {
    /// Returns `true` if `stored` and `query` name the same key.
    fn eq(&self, stored: &[u8], query: &[u8]) -> bool;
}

/// Maps `(hash, step, capacity)` to a slot index below `capacity`.
///
/// `capacity` is always a power of two. Backward-shift deletion walks the
/// removed key's sequence and assumes each step moves to the slot an
/// entry with one less displacement would occupy, which is what linear
/// probing provides.
pub trait ProbeStrategy {
    /// Returns the slot visited at `step` for a key hashing to `hash`.
    fn probe(&self, hash: u32, step: u32, capacity: u32) -> u32;
}

impl<F> HashStrategy for F
where
    F: Fn(&[u8]) -> u32,
{
    #[inline(always)]
    fn hash(&self, key: &[u8]) -> u32 {
        self(key)
    }
}

impl<F> KeyComparator for F
where
    F: Fn(&[u8], &[u8]) -> bool,
{
    #[inline(always)]
    fn eq(&self, stored: &[u8], query: &[u8]) -> bool {
        self(stored, query)
    }
}

impl<F> ProbeStrategy for F
where
    F: Fn(u32, u32, u32) -> u32,
{
    #[inline(always)]
    fn probe(&self, hash: u32, step: u32, capacity: u32) -> u32 {
        self(hash, step, capacity)
    }
}

const FNV_OFFSET_BASIS: u32 = 2_166_136_261;
const FNV_PRIME: u32 = 16_777_619;

/// 32-bit FNV-1a. The default hash strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct Fnv1a;

impl HashStrategy for Fnv1a {
    #[inline]
    fn hash(&self, key: &[u8]) -> u32 {
        key.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
            (hash ^ byte as u32).wrapping_mul(FNV_PRIME)
        })
    }
}

/// Hashes keys with `foldhash`'s fixed-seed fast hasher, folding the 64-bit
/// output down to 32 bits.
#[cfg(feature = "foldhash")]
#[derive(Debug, Clone)]
pub struct FoldHash {
    state: foldhash::fast::FixedState,
}

#[cfg(feature = "foldhash")]
impl FoldHash {
    /// Creates a hasher seeded with `seed`.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: foldhash::fast::FixedState::with_seed(seed),
        }
    }
}

#[cfg(feature = "foldhash")]
impl Default for FoldHash {
    fn default() -> Self {
        Self::with_seed(0)
    }
}

#[cfg(feature = "foldhash")]
impl HashStrategy for FoldHash {
    #[inline]
    fn hash(&self, key: &[u8]) -> u32 {
        use core::hash::BuildHasher;
        use core::hash::Hasher;

        let mut hasher = self.state.build_hasher();
        hasher.write(key);
        let hash = hasher.finish();
        (hash ^ (hash >> 32)) as u32
    }
}

/// Compares the first four bytes of each key as a native-endian `u32`.
///
/// Keys shorter than four bytes are zero-extended. This matches keys that
/// are the byte representation of a 32-bit integer and nothing else; use
/// [`ByteEq`] or a custom comparator for other keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct IntPrefixEq;

impl IntPrefixEq {
    #[inline(always)]
    fn prefix(key: &[u8]) -> u32 {
        let mut word = [0u8; 4];
        let len = key.len().min(4);
        word[..len].copy_from_slice(&key[..len]);
        u32::from_ne_bytes(word)
    }
}

impl KeyComparator for IntPrefixEq {
    #[inline]
    fn eq(&self, stored: &[u8], query: &[u8]) -> bool {
        Self::prefix(stored) == Self::prefix(query)
    }
}

/// Compares whole keys byte for byte.
#[derive(Debug, Clone, Copy, Default)]
pub struct ByteEq;

impl KeyComparator for ByteEq {
    #[inline]
    fn eq(&self, stored: &[u8], query: &[u8]) -> bool {
        stored == query
    }
}

/// Linear probing, `(hash + step) mod capacity`. The default probe strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearProbe;

impl ProbeStrategy for LinearProbe {
    #[inline(always)]
    fn probe(&self, hash: u32, step: u32, capacity: u32) -> u32 {
        debug_assert!(capacity.is_power_of_two());
        hash.wrapping_add(step) & (capacity - 1)
    }
}
