//! The Robin Hood table: search, placement, backward-shift deletion and
//! load-driven resizing.

use alloc::format;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::fmt::Display;
use core::marker::PhantomData;

use crate::config::Destructors;
use crate::config::TableConfig;
use crate::error::InsertError;
use crate::error::InvalidArgument;
use crate::error::TableError;
use crate::slot_store::AosStore;
use crate::slot_store::Bucket;
use crate::slot_store::DefaultStore;
use crate::slot_store::SlotStore;
use crate::slot_store::SlotView;
use crate::slot_store::SoaStore;
use crate::strategy::Fnv1a;
use crate::strategy::HashStrategy;
use crate::strategy::IntPrefixEq;
use crate::strategy::KeyComparator;
use crate::strategy::LinearProbe;
use crate::strategy::ProbeStrategy;

/// Capacity of a freshly created table and the floor below which it never
/// shrinks.
pub const MIN_CAPACITY: u32 = 2;

/// Largest capacity a table may grow to.
pub const MAX_CAPACITY: u32 = 1 << 30;

#[inline(always)]
fn slot_index<P: ProbeStrategy>(prober: &P, hash: u32, step: u32, capacity: u32) -> usize {
    (prober.probe(hash, step, capacity) & (capacity - 1)) as usize
}

#[inline(always)]
fn over_load(entries: u32, capacity: u32, load_factor: f64) -> bool {
    entries as f64 > capacity as f64 * load_factor
}

fn validate_capacity(capacity: u32) -> Result<(), InvalidArgument> {
    if capacity < MIN_CAPACITY || capacity > MAX_CAPACITY || !capacity.is_power_of_two() {
        return Err(InvalidArgument::CapacityOutOfRange(capacity as u64));
    }
    Ok(())
}

/// Robin Hood placement of `carried`.
///
/// Walks the carried entry's probe sequence; an empty slot takes the carried
/// entry, and a resident with a shorter probe length is evicted in its favor
/// and carried onward. Returns whatever entry is still carried if `capacity`
/// steps pass without finding an empty slot.
fn place<K, V, S, P>(
    store: &mut S,
    prober: &P,
    mut carried: Bucket<K, V>,
) -> Result<(), Bucket<K, V>>
where
    S: SlotStore<K, V>,
    P: ProbeStrategy,
{
    let capacity = store.capacity();
    for _ in 0..capacity {
        let index = slot_index(prober, carried.hash, carried.psl, capacity);
        match store.meta(index) {
            None => {
                store.put(index, carried);
                return Ok(());
            }
            Some((_, resident_psl)) if carried.psl > resident_psl => {
                match store.put(index, carried) {
                    Some(resident) => carried = resident,
                    None => return Ok(()),
                }
            }
            Some(_) => {}
        }
        carried.psl += 1;
    }

    Err(carried)
}

/// A byte-keyed open-addressing hash table using Robin Hood hashing with
/// backward-shift deletion.
///
/// Keys are any owned type exposing their bytes through `AsRef<[u8]>`; the
/// table hashes and compares those bytes with the configured
/// [`HashStrategy`] and [`KeyComparator`], and walks slots with the
/// configured [`ProbeStrategy`]. Each occupied slot caches its key's hash and
/// its probe sequence length (PSL), the number of steps it sits past its home
/// slot.
///
/// ## Ownership
///
/// A successful [`insert`](Self::insert) moves the key and value into the
/// table; a rejected one hands them back in the [`InsertError`]. They leave
/// the table through [`take`](Self::take), which hands them back, or
/// through [`remove`](Self::remove), [`clear`](Self::clear) and drop, which
/// pass them to the configured destructors. With no destructor
/// configured they are dropped.
///
/// ## Example
///
/// ```rust
/// use robin_hash::RobinHoodTable;
///
/// let mut table: RobinHoodTable<[u8; 4], &str> = RobinHoodTable::new();
/// table.insert(7u32.to_ne_bytes(), "seven").unwrap();
///
/// assert_eq!(table.search(&7u32.to_ne_bytes()), Some(&"seven"));
/// assert!(table.insert(7u32.to_ne_bytes(), "again").is_err());
///
/// table.remove(&7u32.to_ne_bytes()).unwrap();
/// assert!(table.search(&7u32.to_ne_bytes()).is_none());
/// ```
pub struct RobinHoodTable<
    K,
    V,
    H = Fnv1a,
    C = IntPrefixEq,
    P = LinearProbe,
    S = DefaultStore<K, V>,
> where
    S: SlotStore<K, V>,
{
    store: S,
    active: u32,
    max_load_factor: f64,
    min_load_factor: f64,
    hasher: H,
    comparator: C,
    prober: P,
    destructors: Destructors<K, V>,
}

/// A [`RobinHoodTable`] using the array-of-slots layout.
pub type AosTable<K, V, H = Fnv1a, C = IntPrefixEq, P = LinearProbe> =
    RobinHoodTable<K, V, H, C, P, AosStore<K, V>>;

/// A [`RobinHoodTable`] using the structure-of-arrays layout.
pub type SoaTable<K, V, H = Fnv1a, C = IntPrefixEq, P = LinearProbe> =
    RobinHoodTable<K, V, H, C, P, SoaStore<K, V>>;

impl<K, V, H, C, P, S> Debug for RobinHoodTable<K, V, H, C, P, S>
where
    S: SlotStore<K, V>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let capacity = self.store.capacity() as usize;
        f.debug_struct("RobinHoodTable")
            .field(
                "slots",
                &(0..capacity)
                    .map(|index| match self.store.meta(index) {
                        Some((hash, psl)) => format!("{hash:08x}+{psl}"),
                        None => "........".into(),
                    })
                    .collect::<Vec<_>>(),
            )
            .field("populated", &self.active)
            .field("capacity", &self.store.capacity())
            .field("max_load_factor", &self.max_load_factor)
            .field("min_load_factor", &self.min_load_factor)
            .finish()
    }
}

impl<K, V, H, C, P, S> Drop for RobinHoodTable<K, V, H, C, P, S>
where
    S: SlotStore<K, V>,
{
    fn drop(&mut self) {
        if self.destructors.is_configured() {
            self.release_all();
        }
    }
}

impl<K, V> RobinHoodTable<K, V>
where
    K: AsRef<[u8]>,
{
    /// Creates an empty table with capacity 2, load factors 0.75/0.25 and the
    /// default strategies.
    ///
    /// The default comparator treats keys as 32-bit integers; tables keyed by
    /// anything else should be built from a [`TableConfig`] with a suitable
    /// comparator.
    pub fn new() -> Self {
        let store = <DefaultStore<K, V> as SlotStore<K, V>>::with_capacity(MIN_CAPACITY);
        Self::from_parts(TableConfig::default(), store)
    }
}

impl<K, V> Default for RobinHoodTable<K, V>
where
    K: AsRef<[u8]>,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, H, C, P, S> RobinHoodTable<K, V, H, C, P, S>
where
    K: AsRef<[u8]>,
    H: HashStrategy,
    C: KeyComparator,
    P: ProbeStrategy,
    S: SlotStore<K, V>,
{
    /// Creates an empty table with capacity 2 from `config`.
    ///
    /// Fails with [`TableError::InvalidArgument`] if the load factors are out
    /// of range and [`TableError::MemoryError`] if the initial store cannot
    /// be allocated.
    pub fn with_config(config: TableConfig<K, V, H, C, P>) -> Result<Self, TableError> {
        config.validate()?;
        let store = S::try_with_capacity(MIN_CAPACITY)?;
        Ok(Self::from_parts(config, store))
    }

    fn from_parts(config: TableConfig<K, V, H, C, P>, store: S) -> Self {
        Self {
            store,
            active: 0,
            max_load_factor: config.max_load_factor,
            min_load_factor: config.min_load_factor,
            hasher: config.hasher,
            comparator: config.comparator,
            prober: config.prober,
            destructors: config.destructors,
        }
    }

    /// Number of slots in the backing store. Always a power of two.
    pub fn capacity(&self) -> u32 {
        self.store.capacity()
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.active as usize
    }

    /// Returns `true` if the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.active == 0
    }

    /// Current ratio of entries to slots.
    pub fn load_factor(&self) -> f64 {
        self.active as f64 / self.store.capacity() as f64
    }

    /// Load factor above which an insert grows the table.
    pub fn max_load_factor(&self) -> f64 {
        self.max_load_factor
    }

    /// Load factor below which a remove shrinks the table.
    pub fn min_load_factor(&self) -> f64 {
        self.min_load_factor
    }

    /// Walks `key`'s probe sequence, returning the matching slot index and
    /// the step it was found at.
    fn locate(&self, hash: u32, key: &[u8]) -> Option<(usize, u32)> {
        let capacity = self.store.capacity();
        for step in 0..capacity {
            let index = slot_index(&self.prober, hash, step, capacity);
            let (slot_hash, psl) = self.store.meta(index)?;
            if slot_hash == hash
                && self
                    .store
                    .key(index)
                    .is_some_and(|stored| self.comparator.eq(stored.as_ref(), key))
            {
                return Some((index, step));
            }
            // A resident closer to home than we have walked would have been
            // displaced by the key had it been inserted.
            if psl < step {
                return None;
            }
        }

        None
    }

    fn find_index(&self, key: &[u8]) -> Option<usize> {
        if key.is_empty() || self.active == 0 {
            return None;
        }
        let hash = self.hasher.hash(key);
        self.locate(hash, key).map(|(index, _)| index)
    }

    /// Returns the value stored under `key`.
    ///
    /// Empty keys are never stored, so searching for one returns `None`.
    pub fn search(&self, key: &[u8]) -> Option<&V> {
        let index = self.find_index(key)?;
        self.store.value(index)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn search_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        let index = self.find_index(key)?;
        self.store.value_mut(index)
    }

    /// Returns `true` if `key` is present.
    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.find_index(key).is_some()
    }

    /// Inserts `key` with `value`.
    ///
    /// Fails with [`TableError::KeyExists`] if the key is present, leaving the
    /// stored value untouched. If the insert would push the load factor past
    /// the maximum the table first doubles; when that fails the insert is
    /// abandoned and the table is unchanged. Every rejection returns the key
    /// and value inside the [`InsertError`].
    ///
    /// [`TableError::InternalInvariantViolation`] means placement found no
    /// empty slot, which only a probe strategy that skips slots can cause.
    /// The error then carries the entry left without a slot, which is either
    /// the new one or a resident it displaced.
    pub fn insert(&mut self, key: K, value: V) -> Result<(), InsertError<K, V>> {
        let hash = match self.prepare_insert(key.as_ref()) {
            Ok(hash) => hash,
            Err(error) => return Err(InsertError { error, key, value }),
        };

        let bucket = Bucket {
            hash,
            psl: 0,
            key,
            value,
        };
        match place(&mut self.store, &self.prober, bucket) {
            Ok(()) => {
                self.active += 1;
                Ok(())
            }
            Err(lost) => {
                let capacity = self.store.capacity();
                tracing::error!(
                    capacity,
                    entries = self.active,
                    "probe sequence exhausted during insert"
                );
                Err(InsertError {
                    error: TableError::InternalInvariantViolation { capacity },
                    key: lost.key,
                    value: lost.value,
                })
            }
        }
    }

    /// Validates `key`, rejects duplicates and grows the table if one more
    /// entry would exceed the maximum load factor. Returns the key's hash.
    fn prepare_insert(&mut self, key: &[u8]) -> Result<u32, TableError> {
        if key.is_empty() {
            return Err(InvalidArgument::EmptyKey.into());
        }
        let hash = self.hasher.hash(key);
        if self.locate(hash, key).is_some() {
            return Err(TableError::KeyExists);
        }

        let capacity = self.store.capacity();
        if over_load(self.active + 1, capacity, self.max_load_factor) {
            let target = capacity
                .checked_mul(2)
                .ok_or(InvalidArgument::CapacityOutOfRange(capacity as u64 * 2))?;
            self.resize_to(target)?;
        }
        Ok(hash)
    }

    /// Removes `key`, passing its key and value to the configured
    /// destructors.
    ///
    /// May shrink the table afterwards; see [`resize`](Self::resize) for the
    /// conditions. A failed shrink is logged and does not fail the removal.
    pub fn remove(&mut self, key: &[u8]) -> Result<(), TableError> {
        let bucket = self.unlink(key)?;
        self.destructors.release(bucket.key, bucket.value);
        self.shrink_if_sparse();
        Ok(())
    }

    /// Removes `key` and returns ownership of its key and value without
    /// invoking any destructor.
    pub fn take(&mut self, key: &[u8]) -> Result<(K, V), TableError> {
        let bucket = self.unlink(key)?;
        self.shrink_if_sparse();
        Ok((bucket.key, bucket.value))
    }

    fn unlink(&mut self, key: &[u8]) -> Result<Bucket<K, V>, TableError> {
        if key.is_empty() {
            return Err(InvalidArgument::EmptyKey.into());
        }
        if self.active == 0 {
            return Err(TableError::KeyNotFound);
        }
        let hash = self.hasher.hash(key);
        let (index, step) = self.locate(hash, key).ok_or(TableError::KeyNotFound)?;
        let bucket = self.store.take(index).ok_or(TableError::KeyNotFound)?;
        self.backward_shift(hash, index, step);
        self.active -= 1;
        Ok(bucket)
    }

    /// Closes the gap at `gap` left by a key found at `step` of the sequence
    /// for `hash`: displaced successors move one step back until an empty
    /// slot or an entry already at home.
    fn backward_shift(&mut self, hash: u32, mut gap: usize, mut step: u32) {
        let capacity = self.store.capacity();
        for _ in 1..capacity {
            step = step.wrapping_add(1);
            let next = slot_index(&self.prober, hash, step, capacity);
            match self.store.meta(next) {
                Some((_, psl)) if psl > 0 => {
                    if let Some(mut moved) = self.store.take(next) {
                        moved.psl -= 1;
                        self.store.put(gap, moved);
                    }
                    gap = next;
                }
                _ => break,
            }
        }
    }

    fn shrink_if_sparse(&mut self) {
        let capacity = self.store.capacity();
        if capacity <= MIN_CAPACITY
            || self.active as f64 >= capacity as f64 * self.min_load_factor
        {
            return;
        }

        let target = capacity / 2;
        if over_load(self.active, target, self.max_load_factor) {
            return;
        }

        match self.resize_to(target) {
            Ok(()) => {}
            Err(TableError::MemoryError(error)) => {
                tracing::warn!(
                    capacity,
                    target,
                    %error,
                    "failed to shrink table, keeping current capacity"
                );
            }
            Err(error) => {
                tracing::error!(capacity, target, %error, "shrinking table failed");
            }
        }
    }

    /// Rehashes every entry into a store of `new_capacity` slots.
    ///
    /// `new_capacity` must be a power of two in `[2, 2^30]` that keeps the
    /// load factor at or below the maximum, otherwise
    /// [`TableError::InvalidArgument`] is returned. Allocation failure returns
    /// [`TableError::MemoryError`] and leaves the table as it was.
    ///
    /// The table calls this itself when an insert would exceed the maximum
    /// load factor (doubling) and when a remove leaves it below the minimum
    /// (halving, provided the entries fit under the maximum at half size).
    pub fn resize(&mut self, new_capacity: u32) -> Result<(), TableError> {
        if over_load(self.active, new_capacity, self.max_load_factor) {
            return Err(InvalidArgument::CapacityOutOfRange(new_capacity as u64).into());
        }
        self.resize_to(new_capacity)
    }

    fn resize_to(&mut self, new_capacity: u32) -> Result<(), TableError> {
        validate_capacity(new_capacity)?;
        let old_capacity = self.store.capacity();
        if new_capacity == old_capacity {
            return Ok(());
        }

        let fresh = S::try_with_capacity(new_capacity)?;
        tracing::debug!(
            old_capacity,
            new_capacity,
            entries = self.active,
            "resizing robin hood table"
        );

        let mut old = core::mem::replace(&mut self.store, fresh);
        let mut lost = 0u32;
        for index in 0..old_capacity as usize {
            let Some(mut bucket) = old.take(index) else {
                continue;
            };
            bucket.psl = 0;
            if let Err(unplaced) = place(&mut self.store, &self.prober, bucket) {
                lost += 1;
                self.destructors.release(unplaced.key, unplaced.value);
            }
        }

        if lost > 0 {
            self.active -= lost;
            tracing::error!(
                old_capacity,
                new_capacity,
                lost,
                "probe sequence exhausted during rehash"
            );
            return Err(TableError::InternalInvariantViolation {
                capacity: new_capacity,
            });
        }

        Ok(())
    }

    /// Removes every entry, passing each to the destructors. Capacity is
    /// kept.
    pub fn clear(&mut self) {
        self.release_all();
    }

    /// Iterates over `(key, value)` pairs in slot order.
    pub fn iter(&self) -> Iter<'_, K, V, S> {
        Iter {
            store: &self.store,
            index: 0,
            remaining: self.active as usize,
            _phantom: PhantomData,
        }
    }

    /// Iterates over occupied slots with their cached hash and probe length.
    pub fn slots(&self) -> impl Iterator<Item = SlotView<'_, K, V>> + '_ {
        (0..self.store.capacity() as usize).filter_map(|index| self.store.view(index))
    }

    /// Writes a diagnostic listing of every occupied slot to `out`.
    ///
    /// The first line summarizes capacity, entry count and maximum load
    /// factor; each following line reads
    /// `index N: hash=H, psl=P, key=K, value=V` with `K` and `V` produced by
    /// the formatters.
    ///
    /// ```rust
    /// use robin_hash::RobinHoodTable;
    ///
    /// let mut table: RobinHoodTable<[u8; 4], u32> = RobinHoodTable::new();
    /// table.insert(1u32.to_ne_bytes(), 10).unwrap();
    ///
    /// let mut dump = String::new();
    /// table
    ///     .debug_dump(&mut dump, |k| u32::from_ne_bytes(*k), |v| *v)
    ///     .unwrap();
    /// assert!(dump.contains("key=1, value=10"));
    /// ```
    pub fn debug_dump<W, KD, VD>(
        &self,
        out: &mut W,
        key_fmt: impl Fn(&K) -> KD,
        value_fmt: impl Fn(&V) -> VD,
    ) -> core::fmt::Result
    where
        W: core::fmt::Write,
        KD: Display,
        VD: Display,
    {
        writeln!(
            out,
            "--- RobinHoodTable - capacity[{}] - entries[{}] - max_load_factor[{:.2}] ---",
            self.store.capacity(),
            self.active,
            self.max_load_factor
        )?;
        for slot in self.slots() {
            writeln!(
                out,
                "index {}: hash={}, psl={}, key={}, value={}",
                slot.index,
                slot.hash,
                slot.psl,
                key_fmt(slot.key),
                value_fmt(slot.value)
            )?;
        }
        Ok(())
    }
}

impl<K, V, H, C, P, S> RobinHoodTable<K, V, H, C, P, S>
where
    S: SlotStore<K, V>,
{
    fn release_all(&mut self) {
        if self.active == 0 {
            return;
        }
        for index in 0..self.store.capacity() as usize {
            if let Some(bucket) = self.store.take(index) {
                self.destructors.release(bucket.key, bucket.value);
            }
        }
        self.active = 0;
    }
}

/// Statistics about a table's probe lengths and memory use.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of entries in the table
    pub populated: usize,
    /// Number of slots in the table
    pub capacity: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Longest probe sequence length of any entry
    pub max_psl: u32,
    /// Mean probe sequence length over all entries
    pub mean_psl: f64,
    /// Bytes of slot storage
    pub total_bytes: usize,
    /// Bytes of slot storage spent on empty slots
    pub wasted_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Robin Hood Table Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!("PSL: max {} / mean {:.3}", self.max_psl, self.mean_psl);
        println!("Total Allocated: {} bytes", self.total_bytes);
        println!(
            "Memory: {} bytes wasted ({:.02}%)",
            self.wasted_bytes,
            if self.total_bytes == 0 {
                0.0
            } else {
                (self.wasted_bytes as f64 / self.total_bytes as f64) * 100.0
            }
        );
    }
}

#[cfg(any(test, feature = "stats"))]
impl<K, V, H, C, P, S> RobinHoodTable<K, V, H, C, P, S>
where
    K: AsRef<[u8]>,
    H: HashStrategy,
    C: KeyComparator,
    P: ProbeStrategy,
    S: SlotStore<K, V>,
{
    /// Counts entries by probe sequence length; index `n` holds the number
    /// of entries sitting `n` steps past their home slot.
    pub fn probe_histogram(&self) -> Vec<usize> {
        let mut hist = Vec::new();
        for slot in self.slots() {
            let psl = slot.psl as usize;
            if hist.len() <= psl {
                hist.resize(psl + 1, 0);
            }
            hist[psl] += 1;
        }
        hist
    }

    /// Returns probe-length and memory statistics for the current state.
    pub fn debug_stats(&self) -> DebugStats {
        let capacity = self.store.capacity() as usize;
        let (max_psl, total_psl) = self
            .slots()
            .fold((0u32, 0u64), |(max, total), slot| {
                (max.max(slot.psl), total + slot.psl as u64)
            });
        let total_bytes = self.store.storage_bytes();
        let per_slot = if capacity == 0 {
            0
        } else {
            total_bytes / capacity
        };

        DebugStats {
            populated: self.len(),
            capacity,
            load_factor: self.load_factor(),
            max_psl,
            mean_psl: if self.active == 0 {
                0.0
            } else {
                total_psl as f64 / self.active as f64
            },
            total_bytes,
            wasted_bytes: (capacity - self.len()) * per_slot,
        }
    }

    /// Pretty-prints the probe-length histogram horizontally using stdout.
    #[cfg(feature = "std")]
    pub fn print_probe_histogram(&self) {
        let hist = self.probe_histogram();
        let max = *hist.iter().max().unwrap_or(&0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!("probe histogram ({} entries):", self.active);

        let make_bar = |count: usize| -> alloc::string::String {
            if count == 0 {
                return alloc::string::String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            let partial = ['▏', '▎', '▍', '▌', '▋', '▊', '▉'];
            if units % 8 > 0 {
                bar.push(partial[units % 8 - 1]);
            }
            bar
        };

        for (psl, &count) in hist.iter().enumerate() {
            println!("{:>3} | {} ({})", psl, make_bar(count), count);
        }
    }
}

/// Iterator over a table's `(key, value)` pairs in slot order.
///
/// Created by [`RobinHoodTable::iter`].
pub struct Iter<'a, K, V, S> {
    store: &'a S,
    index: usize,
    remaining: usize,
    _phantom: PhantomData<(&'a K, &'a V)>,
}

impl<'a, K, V, S> Iterator for Iter<'a, K, V, S>
where
    S: SlotStore<K, V>,
{
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let capacity = self.store.capacity() as usize;
        while self.index < capacity {
            let index = self.index;
            self.index += 1;
            if let Some(view) = self.store.view(index) {
                self.remaining -= 1;
                return Some((view.key, view.value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V, S> ExactSizeIterator for Iter<'_, K, V, S> where S: SlotStore<K, V> {}

impl<'a, K, V, H, C, P, S> IntoIterator for &'a RobinHoodTable<K, V, H, C, P, S>
where
    K: AsRef<[u8]>,
    H: HashStrategy,
    C: KeyComparator,
    P: ProbeStrategy,
    S: SlotStore<K, V>,
{
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
