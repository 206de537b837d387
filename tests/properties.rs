use hashbrown::HashMap;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use robin_hash::AosStore;
use robin_hash::RobinHoodTable;
use robin_hash::SlotStore;
use robin_hash::SoaStore;
use robin_hash::TableConfig;
use robin_hash::TableError;
use robin_hash::strategy::ByteEq;
use robin_hash::strategy::Fnv1a;
use robin_hash::strategy::LinearProbe;
use robin_hash::strategy::ProbeStrategy;

type Table<S> = RobinHoodTable<Vec<u8>, u64, Fnv1a, ByteEq, LinearProbe, S>;

fn table<S: SlotStore<Vec<u8>, u64>>(max: f64, min: f64) -> Table<S> {
    RobinHoodTable::with_config(TableConfig::new(max, min).with_comparator(ByteEq)).unwrap()
}

fn random_key(rng: &mut SmallRng, universe: u32) -> Vec<u8> {
    let k = rng.random_range(0..universe);
    let len = rng.random_range(1..=6usize);
    let mut key = k.to_le_bytes().to_vec();
    key.resize(len.max(4), b'k');
    key
}

fn check_layout<S: SlotStore<Vec<u8>, u64>>(table: &Table<S>) {
    let capacity = table.capacity();
    assert!(capacity.is_power_of_two());
    assert!(capacity >= 2);

    let mut psl_at = vec![None; capacity as usize];
    for slot in table.slots() {
        assert_eq!(slot.hash, robin_hash::strategy::HashStrategy::hash(&Fnv1a, slot.key));
        psl_at[slot.index] = Some(slot.psl);
    }
    assert_eq!(psl_at.iter().flatten().count(), table.len());

    for slot in table.slots() {
        assert_eq!(
            LinearProbe.probe(slot.hash, slot.psl, capacity) as usize,
            slot.index
        );
        for step in 0..slot.psl {
            let earlier = LinearProbe.probe(slot.hash, step, capacity) as usize;
            let psl = psl_at[earlier].expect("empty slot inside a probe run");
            assert!(psl >= step);
        }
    }
}

fn check_contents<S: SlotStore<Vec<u8>, u64>>(table: &Table<S>, reference: &HashMap<Vec<u8>, u64>) {
    assert_eq!(table.len(), reference.len());
    for (key, value) in reference {
        assert_eq!(table.search(key), Some(value));
    }
    for (key, value) in table.iter() {
        assert_eq!(reference.get(key), Some(value));
    }
}

fn random_operations<S: SlotStore<Vec<u8>, u64>>(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut table = table::<S>(0.75, 0.25);
    let mut reference = HashMap::new();

    for round in 0..4_000u64 {
        let key = random_key(&mut rng, 512);
        let before = table.capacity();
        if rng.random_bool(0.6) {
            let expected_growth = !reference.contains_key(&key)
                && (reference.len() + 1) as f64 > before as f64 * 0.75;
            match table.insert(key.clone(), round) {
                Ok(()) => {
                    assert!(reference.insert(key, round).is_none());
                }
                Err(rejected) if rejected.error == TableError::KeyExists => {
                    assert!(reference.contains_key(&rejected.key));
                    assert_eq!(rejected.value, round);
                }
                Err(other) => panic!("unexpected insert error: {other}"),
            }
            assert_eq!(table.capacity() == before * 2, expected_growth);
            assert!(table.load_factor() <= 0.75);
        } else {
            match table.remove(&key) {
                Ok(()) => {
                    assert!(reference.remove(&key).is_some());
                }
                Err(TableError::KeyNotFound) => {
                    assert!(!reference.contains_key(&key));
                }
                Err(other) => panic!("unexpected remove error: {other}"),
            }
            if table.capacity() < before {
                assert_eq!(table.capacity(), before / 2);
                assert!((reference.len() as f64) < before as f64 * 0.25);
            }
        }

        if round % 97 == 0 {
            check_layout(&table);
        }
    }

    check_layout(&table);
    check_contents(&table, &reference);
}

fn resize_is_transparent<S: SlotStore<Vec<u8>, u64>>(seed: u64) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut table = table::<S>(0.9, 0.0);
    let mut reference = HashMap::new();
    while reference.len() < 300 {
        let key = random_key(&mut rng, 100_000);
        let value = rng.random::<u64>();
        if table.insert(key.clone(), value).is_ok() {
            reference.insert(key, value);
        }
    }

    for capacity in [4096u32, 512, 1 << 14, 512] {
        table.resize(capacity).unwrap();
        assert_eq!(table.capacity(), capacity);
        check_layout(&table);
        check_contents(&table, &reference);
    }
    assert!(table.resize(256).is_err());
    assert_eq!(table.capacity(), 512);
}

fn heavy_collisions<S: SlotStore<Vec<u8>, u64>>() {
    let config = TableConfig::new(0.75, 0.25)
        .with_hasher(|key: &[u8]| u32::from(key[0] % 3))
        .with_comparator(ByteEq);
    let mut table: RobinHoodTable<Vec<u8>, u64, _, ByteEq, LinearProbe, S> =
        RobinHoodTable::with_config(config).unwrap();

    for k in 0..200u64 {
        table.insert(k.to_le_bytes().to_vec(), k).unwrap();
    }
    for k in (0..200u64).filter(|k| k % 4 != 1) {
        table.remove(&k.to_le_bytes()).unwrap();
    }
    for k in 0..200u64 {
        assert_eq!(table.search(&k.to_le_bytes()).is_some(), k % 4 == 1);
    }
    assert_eq!(table.len(), 50);
}

macro_rules! layout_suite {
    ($name:ident, $store:ident) => {
        mod $name {
            use super::*;

            type Store = $store<Vec<u8>, u64>;

            #[test]
            #[cfg_attr(miri, ignore)]
            fn random_operations_match_reference() {
                for seed in [1, 0x5eed, 0xdead_beef] {
                    random_operations::<Store>(seed);
                }
            }

            #[test]
            #[cfg_attr(miri, ignore)]
            fn explicit_resize_preserves_contents() {
                resize_is_transparent::<Store>(42);
            }

            #[test]
            fn colliding_hashes_survive_removal() {
                heavy_collisions::<Store>();
            }
        }
    };
}

layout_suite!(array_of_slots, AosStore);
layout_suite!(struct_of_arrays, SoaStore);
