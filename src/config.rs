//! Construction-time configuration for [`RobinHoodTable`](crate::RobinHoodTable).

use alloc::boxed::Box;
use core::fmt::Debug;

use crate::error::InvalidArgument;
use crate::strategy::Fnv1a;
use crate::strategy::HashStrategy;
use crate::strategy::IntPrefixEq;
use crate::strategy::KeyComparator;
use crate::strategy::LinearProbe;
use crate::strategy::ProbeStrategy;

/// Load factor above which an insert grows the table.
pub const DEFAULT_MAX_LOAD_FACTOR: f64 = 0.75;

/// Load factor below which a remove shrinks the table.
pub const DEFAULT_MIN_LOAD_FACTOR: f64 = 0.25;

type Destructor<T> = Box<dyn FnMut(T)>;

/// Optional callbacks that receive keys and values leaving the table through
/// `remove`, `clear` or drop.
///
/// Without a callback the key or value is dropped normally.
pub(crate) struct Destructors<K, V> {
    key: Option<Destructor<K>>,
    value: Option<Destructor<V>>,
}

impl<K, V> Destructors<K, V> {
    pub(crate) fn is_configured(&self) -> bool {
        self.key.is_some() || self.value.is_some()
    }

    pub(crate) fn release(&mut self, key: K, value: V) {
        match &mut self.key {
            Some(destroy) => destroy(key),
            None => drop(key),
        }
        match &mut self.value {
            Some(destroy) => destroy(value),
            None => drop(value),
        }
    }
}

/// Table configuration: load-factor thresholds, strategies and destructors.
///
/// Strategies are fixed once the table is built. Validation happens in
/// [`RobinHoodTable::with_config`](crate::RobinHoodTable::with_config).
///
/// ```rust
/// use robin_hash::RobinHoodTable;
/// use robin_hash::TableConfig;
/// use robin_hash::strategy::ByteEq;
///
/// let config = TableConfig::new(0.9, 0.1).with_comparator(ByteEq);
/// let mut table: RobinHoodTable<String, u32, _, _> = RobinHoodTable::with_config(config).unwrap();
/// table.insert("alpha".to_string(), 1).unwrap();
/// assert_eq!(table.search(b"alpha"), Some(&1));
/// ```
pub struct TableConfig<K, V, H = Fnv1a, C = IntPrefixEq, P = LinearProbe> {
    pub(crate) max_load_factor: f64,
    pub(crate) min_load_factor: f64,
    pub(crate) hasher: H,
    pub(crate) comparator: C,
    pub(crate) prober: P,
    pub(crate) destructors: Destructors<K, V>,
}

impl<K, V, H, C, P> Debug for TableConfig<K, V, H, C, P>
where
    H: Debug,
    C: Debug,
    P: Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("TableConfig")
            .field("max_load_factor", &self.max_load_factor)
            .field("min_load_factor", &self.min_load_factor)
            .field("hasher", &self.hasher)
            .field("comparator", &self.comparator)
            .field("prober", &self.prober)
            .field("key_destructor", &self.destructors.key.is_some())
            .field("value_destructor", &self.destructors.value.is_some())
            .finish()
    }
}

impl<K, V> Default for TableConfig<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LOAD_FACTOR, DEFAULT_MIN_LOAD_FACTOR)
    }
}

impl<K, V> TableConfig<K, V> {
    /// Creates a configuration with the given load factors and the default
    /// FNV-1a hash, 32-bit integer comparator and linear probe.
    pub fn new(max_load_factor: f64, min_load_factor: f64) -> Self {
        Self {
            max_load_factor,
            min_load_factor,
            hasher: Fnv1a,
            comparator: IntPrefixEq,
            prober: LinearProbe,
            destructors: Destructors {
                key: None,
                value: None,
            },
        }
    }
}

impl<K, V, H, C, P> TableConfig<K, V, H, C, P>
where
    H: HashStrategy,
    C: KeyComparator,
    P: ProbeStrategy,
{
    /// Replaces the hash strategy.
    pub fn with_hasher<H2: HashStrategy>(self, hasher: H2) -> TableConfig<K, V, H2, C, P> {
        TableConfig {
            max_load_factor: self.max_load_factor,
            min_load_factor: self.min_load_factor,
            hasher,
            comparator: self.comparator,
            prober: self.prober,
            destructors: self.destructors,
        }
    }

    /// Replaces the key comparator.
    pub fn with_comparator<C2: KeyComparator>(
        self,
        comparator: C2,
    ) -> TableConfig<K, V, H, C2, P> {
        TableConfig {
            max_load_factor: self.max_load_factor,
            min_load_factor: self.min_load_factor,
            hasher: self.hasher,
            comparator,
            prober: self.prober,
            destructors: self.destructors,
        }
    }

    /// Replaces the probe strategy.
    pub fn with_probe<P2: ProbeStrategy>(self, prober: P2) -> TableConfig<K, V, H, C, P2> {
        TableConfig {
            max_load_factor: self.max_load_factor,
            min_load_factor: self.min_load_factor,
            hasher: self.hasher,
            comparator: self.comparator,
            prober,
            destructors: self.destructors,
        }
    }

    /// Hands every key leaving the table to `destroy` instead of dropping it.
    pub fn with_key_destructor(mut self, destroy: impl FnMut(K) + 'static) -> Self {
        self.destructors.key = Some(Box::new(destroy));
        self
    }

    /// Hands every value leaving the table to `destroy` instead of dropping
    /// it.
    pub fn with_value_destructor(mut self, destroy: impl FnMut(V) + 'static) -> Self {
        self.destructors.value = Some(Box::new(destroy));
        self
    }

    /// Checks `0 < max_load_factor <= 1` and
    /// `0 <= min_load_factor < max_load_factor`.
    pub fn validate(&self) -> Result<(), InvalidArgument> {
        let max = self.max_load_factor;
        let min = self.min_load_factor;
        if !(max > 0.0 && max <= 1.0) {
            return Err(InvalidArgument::MaxLoadFactor(max));
        }
        if !(min >= 0.0 && min < max) {
            return Err(InvalidArgument::MinLoadFactor(min));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(max: f64, min: f64) -> Result<(), InvalidArgument> {
        TableConfig::<u32, u32>::new(max, min).validate()
    }

    #[test]
    fn accepts_valid_ranges() {
        assert_eq!(check(0.75, 0.25), Ok(()));
        assert_eq!(check(1.0, 0.0), Ok(()));
        assert_eq!(check(0.01, 0.0), Ok(()));
        assert_eq!(TableConfig::<u32, u32>::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_bad_max_load_factor() {
        assert_eq!(check(0.0, 0.0), Err(InvalidArgument::MaxLoadFactor(0.0)));
        assert_eq!(check(1.5, 0.25), Err(InvalidArgument::MaxLoadFactor(1.5)));
        assert_eq!(check(-0.5, 0.0), Err(InvalidArgument::MaxLoadFactor(-0.5)));
        assert!(matches!(
            check(f64::NAN, 0.0),
            Err(InvalidArgument::MaxLoadFactor(_))
        ));
    }

    #[test]
    fn rejects_bad_min_load_factor() {
        assert_eq!(check(0.5, 0.5), Err(InvalidArgument::MinLoadFactor(0.5)));
        assert_eq!(check(0.5, 0.75), Err(InvalidArgument::MinLoadFactor(0.75)));
        assert_eq!(check(0.5, -0.1), Err(InvalidArgument::MinLoadFactor(-0.1)));
    }

    #[test]
    fn destructors_receive_released_entries() {
        use alloc::rc::Rc;
        use core::cell::RefCell;

        let seen = Rc::new(RefCell::new(alloc::vec::Vec::new()));
        let keys = Rc::clone(&seen);
        let config = TableConfig::<u32, u32>::default()
            .with_key_destructor(move |k| keys.borrow_mut().push(k));
        assert!(config.destructors.is_configured());

        let mut destructors = config.destructors;
        destructors.release(4, 40);
        destructors.release(5, 50);
        assert_eq!(*seen.borrow(), [4, 5]);
    }
}
