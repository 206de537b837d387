//! Backing storage for [`RobinHoodTable`](crate::RobinHoodTable).
//!
//! Two layouts are provided behind the [`SlotStore`] trait:
//!
//! - [`AosStore`] keeps one `Option<Bucket>` per slot, so a probe touches a
//!   single contiguous record.
//! - [`SoaStore`] keeps hashes, probe lengths, keys and values in parallel
//!   columns, so a probe that only inspects hashes and probe lengths stays
//!   inside two dense `u32` arrays.
//!
//! Both behave identically; which one is the default is selected by the
//! `struct-of-arrays` feature.

use alloc::collections::TryReserveError;
use alloc::vec::Vec;

mod sealed {
    pub trait Sealed {}
}

/// An occupied slot's contents, moved between slots during placement,
/// backward shifting and rehashing.
#[derive(Debug)]
pub struct Bucket<K, V> {
    pub(crate) hash: u32,
    pub(crate) psl: u32,
    pub(crate) key: K,
    pub(crate) value: V,
}

/// A read-only view of one occupied slot.
#[derive(Debug)]
pub struct SlotView<'a, K, V> {
    /// Slot index in the backing store.
    pub index: usize,
    /// Cached hash of the key.
    pub hash: u32,
    /// Probe sequence length: steps between this slot and the key's home slot.
    pub psl: u32,
    /// The stored key.
    pub key: &'a K,
    /// The stored value.
    pub value: &'a V,
}

/// Fixed-capacity slot storage.
///
/// Indices passed to these methods are always below [`capacity`]; the table
/// masks every probe result before using it.
///
/// This trait is sealed; pick one of [`AosStore`] or [`SoaStore`].
///
/// [`capacity`]: SlotStore::capacity
pub trait SlotStore<K, V>: sealed::Sealed + Sized {
    /// Allocates `capacity` empty slots, aborting on allocation failure like
    /// `Vec` does.
    fn with_capacity(capacity: u32) -> Self;

    /// Allocates `capacity` empty slots, reporting allocation failure.
    fn try_with_capacity(capacity: u32) -> Result<Self, TryReserveError>;

    /// Number of slots.
    fn capacity(&self) -> u32;

    /// `(hash, psl)` of an occupied slot, `None` for an empty one.
    fn meta(&self, index: usize) -> Option<(u32, u32)>;

    /// Key stored at `index`.
    fn key(&self, index: usize) -> Option<&K>;

    /// Value stored at `index`.
    fn value(&self, index: usize) -> Option<&V>;

    /// Mutable value stored at `index`.
    fn value_mut(&mut self, index: usize) -> Option<&mut V>;

    /// Full view of the slot at `index`.
    fn view(&self, index: usize) -> Option<SlotView<'_, K, V>>;

    /// Empties the slot at `index`, returning its contents.
    fn take(&mut self, index: usize) -> Option<Bucket<K, V>>;

    /// Stores `bucket` at `index`, returning the previous occupant.
    fn put(&mut self, index: usize, bucket: Bucket<K, V>) -> Option<Bucket<K, V>>;

    /// Bytes of slot storage owned by the store, excluding anything the keys
    /// and values own on the heap.
    fn storage_bytes(&self) -> usize;
}

fn try_empty_column<T>(capacity: u32) -> Result<Vec<Option<T>>, TryReserveError> {
    let mut column = Vec::new();
    column.try_reserve_exact(capacity as usize)?;
    column.resize_with(capacity as usize, || None);
    Ok(column)
}

fn try_zeroed_column(capacity: u32) -> Result<Vec<u32>, TryReserveError> {
    let mut column = Vec::new();
    column.try_reserve_exact(capacity as usize)?;
    column.resize(capacity as usize, 0);
    Ok(column)
}

/// Array-of-slots layout: one `Option<Bucket>` per slot.
pub struct AosStore<K, V> {
    slots: Vec<Option<Bucket<K, V>>>,
}

impl<K, V> sealed::Sealed for AosStore<K, V> {}

impl<K, V> SlotStore<K, V> for AosStore<K, V> {
    fn with_capacity(capacity: u32) -> Self {
        let mut slots = Vec::with_capacity(capacity as usize);
        slots.resize_with(capacity as usize, || None);
        Self { slots }
    }

    fn try_with_capacity(capacity: u32) -> Result<Self, TryReserveError> {
        Ok(Self {
            slots: try_empty_column(capacity)?,
        })
    }

    #[inline(always)]
    fn capacity(&self) -> u32 {
        self.slots.len() as u32
    }

    #[inline(always)]
    fn meta(&self, index: usize) -> Option<(u32, u32)> {
        self.slots[index]
            .as_ref()
            .map(|bucket| (bucket.hash, bucket.psl))
    }

    #[inline(always)]
    fn key(&self, index: usize) -> Option<&K> {
        self.slots[index].as_ref().map(|bucket| &bucket.key)
    }

    #[inline(always)]
    fn value(&self, index: usize) -> Option<&V> {
        self.slots[index].as_ref().map(|bucket| &bucket.value)
    }

    #[inline(always)]
    fn value_mut(&mut self, index: usize) -> Option<&mut V> {
        self.slots[index].as_mut().map(|bucket| &mut bucket.value)
    }

    fn view(&self, index: usize) -> Option<SlotView<'_, K, V>> {
        self.slots[index].as_ref().map(|bucket| SlotView {
            index,
            hash: bucket.hash,
            psl: bucket.psl,
            key: &bucket.key,
            value: &bucket.value,
        })
    }

    #[inline(always)]
    fn take(&mut self, index: usize) -> Option<Bucket<K, V>> {
        self.slots[index].take()
    }

    #[inline(always)]
    fn put(&mut self, index: usize, bucket: Bucket<K, V>) -> Option<Bucket<K, V>> {
        self.slots[index].replace(bucket)
    }

    fn storage_bytes(&self) -> usize {
        self.slots.capacity() * core::mem::size_of::<Option<Bucket<K, V>>>()
    }
}

/// Structure-of-arrays layout: parallel hash, psl, key and value columns.
///
/// A slot is occupied exactly when its key column entry is `Some`.
pub struct SoaStore<K, V> {
    hashes: Vec<u32>,
    psls: Vec<u32>,
    keys: Vec<Option<K>>,
    values: Vec<Option<V>>,
}

impl<K, V> sealed::Sealed for SoaStore<K, V> {}

impl<K, V> SlotStore<K, V> for SoaStore<K, V> {
    fn with_capacity(capacity: u32) -> Self {
        let len = capacity as usize;
        let mut keys = Vec::with_capacity(len);
        keys.resize_with(len, || None);
        let mut values = Vec::with_capacity(len);
        values.resize_with(len, || None);

        Self {
            hashes: alloc::vec![0; len],
            psls: alloc::vec![0; len],
            keys,
            values,
        }
    }

    fn try_with_capacity(capacity: u32) -> Result<Self, TryReserveError> {
        Ok(Self {
            hashes: try_zeroed_column(capacity)?,
            psls: try_zeroed_column(capacity)?,
            keys: try_empty_column(capacity)?,
            values: try_empty_column(capacity)?,
        })
    }

    #[inline(always)]
    fn capacity(&self) -> u32 {
        self.keys.len() as u32
    }

    #[inline(always)]
    fn meta(&self, index: usize) -> Option<(u32, u32)> {
        self.keys[index]
            .is_some()
            .then(|| (self.hashes[index], self.psls[index]))
    }

    #[inline(always)]
    fn key(&self, index: usize) -> Option<&K> {
        self.keys[index].as_ref()
    }

    #[inline(always)]
    fn value(&self, index: usize) -> Option<&V> {
        self.values[index].as_ref()
    }

    #[inline(always)]
    fn value_mut(&mut self, index: usize) -> Option<&mut V> {
        self.values[index].as_mut()
    }

    fn view(&self, index: usize) -> Option<SlotView<'_, K, V>> {
        match (&self.keys[index], &self.values[index]) {
            (Some(key), Some(value)) => Some(SlotView {
                index,
                hash: self.hashes[index],
                psl: self.psls[index],
                key,
                value,
            }),
            _ => None,
        }
    }

    fn take(&mut self, index: usize) -> Option<Bucket<K, V>> {
        match (self.keys[index].take(), self.values[index].take()) {
            (Some(key), Some(value)) => Some(Bucket {
                hash: self.hashes[index],
                psl: self.psls[index],
                key,
                value,
            }),
            _ => None,
        }
    }

    fn put(&mut self, index: usize, bucket: Bucket<K, V>) -> Option<Bucket<K, V>> {
        let previous = self.take(index);
        self.hashes[index] = bucket.hash;
        self.psls[index] = bucket.psl;
        self.keys[index] = Some(bucket.key);
        self.values[index] = Some(bucket.value);
        previous
    }

    fn storage_bytes(&self) -> usize {
        self.hashes.capacity() * core::mem::size_of::<u32>()
            + self.psls.capacity() * core::mem::size_of::<u32>()
            + self.keys.capacity() * core::mem::size_of::<Option<K>>()
            + self.values.capacity() * core::mem::size_of::<Option<V>>()
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "struct-of-arrays")] {
        /// The layout used when a table does not name one.
        pub type DefaultStore<K, V> = SoaStore<K, V>;
    } else {
        /// The layout used when a table does not name one.
        pub type DefaultStore<K, V> = AosStore<K, V>;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bucket(hash: u32, psl: u32, key: u32) -> Bucket<u32, u32> {
        Bucket {
            hash,
            psl,
            key,
            value: key * 10,
        }
    }

    fn exercise<S: SlotStore<u32, u32>>(mut store: S) {
        assert_eq!(store.capacity(), 8);
        assert!((0..8).all(|i| store.meta(i).is_none()));

        assert!(store.put(3, bucket(11, 2, 7)).is_none());
        assert_eq!(store.meta(3), Some((11, 2)));
        assert_eq!(store.key(3), Some(&7));
        assert_eq!(store.value(3), Some(&70));

        *store.value_mut(3).unwrap() = 71;
        let view = store.view(3).unwrap();
        assert_eq!((view.index, view.hash, view.psl), (3, 11, 2));
        assert_eq!((*view.key, *view.value), (7, 71));

        let previous = store.put(3, bucket(12, 0, 8)).unwrap();
        assert_eq!((previous.hash, previous.psl, previous.key), (11, 2, 7));
        assert_eq!(store.meta(3), Some((12, 0)));

        let taken = store.take(3).unwrap();
        assert_eq!(taken.key, 8);
        assert!(store.meta(3).is_none());
        assert!(store.take(3).is_none());
        assert!(store.view(3).is_none());
        assert!(store.storage_bytes() > 0);
    }

    #[test]
    fn array_of_slots_round_trip() {
        exercise(AosStore::with_capacity(8));
        exercise(AosStore::try_with_capacity(8).unwrap());
    }

    #[test]
    fn struct_of_arrays_round_trip() {
        exercise(SoaStore::with_capacity(8));
        exercise(SoaStore::try_with_capacity(8).unwrap());
    }
}
