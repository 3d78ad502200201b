//! Property-based invariant tests for the row store and row sort.
//!
//! 1. Sorting by id ascending on the sample rows yields `8, 10, 20, 25`;
//!    toggled yields `25, 20, 10, 8`.
//! 2. Sorting twice in the same direction is idempotent.
//! 3. Sorting is a permutation: no record is lost or duplicated.
//! 4. The sorted order is monotone under the directed comparator.
//! 5. Keys of removed records never resolve again.

use proptest::prelude::*;
use tether_runtime::rows::{
    Record, RowStore, SortColumn, SortDirection, SortToggle, compare_directed,
};

// ── Strategies ────────────────────────────────────────────────────────────

fn record_strategy() -> impl Strategy<Value = Record> {
    (-50i64..50, "[A-Za-z -]{0,8}", "[a-z ]{0,6}")
        .prop_map(|(id, name, description)| Record::new(id, name, description))
}

fn store_strategy() -> impl Strategy<Value = Vec<Record>> {
    proptest::collection::vec(record_strategy(), 0..24)
}

fn column_strategy() -> impl Strategy<Value = SortColumn> {
    prop_oneof![
        Just(SortColumn::Id),
        Just(SortColumn::Name),
        Just(SortColumn::Description),
    ]
}

fn direction_strategy() -> impl Strategy<Value = SortDirection> {
    prop_oneof![Just(SortDirection::Ascending), Just(SortDirection::Descending)]
}

fn sample_store() -> RowStore {
    [
        Record::new(20, "A-Some Item------------", "foo"),
        Record::new(25, "B-Another Item----", "bar"),
        Record::new(10, "D-some item", "blob"),
        Record::new(8, "C-big", "max power"),
    ]
    .into_iter()
    .collect()
}

fn ids(store: &RowStore) -> Vec<i64> {
    store.iter().map(|(_, r)| r.id).collect()
}

// 1. Sample rows by id

#[test]
fn sample_rows_sort_by_id_with_toggle() {
    let mut store = sample_store();
    let mut toggle = SortToggle::default();
    store.sort_by(SortColumn::Id, toggle.advance());
    assert_eq!(ids(&store), vec![8, 10, 20, 25]);
    store.sort_by(SortColumn::Id, toggle.advance());
    assert_eq!(ids(&store), vec![25, 20, 10, 8]);
}

// 2. Idempotence

proptest! {
    #[test]
    fn sorting_twice_is_idempotent(
        records in store_strategy(),
        column in column_strategy(),
        direction in direction_strategy(),
    ) {
        let mut store: RowStore = records.into_iter().collect();
        store.sort_by(column, direction);
        let once: Vec<_> = store.keys().to_vec();
        store.sort_by(column, direction);
        prop_assert_eq!(store.keys(), once.as_slice());
    }
}

// 3. Permutation

proptest! {
    #[test]
    fn sorting_is_a_permutation(
        records in store_strategy(),
        column in column_strategy(),
        direction in direction_strategy(),
    ) {
        let mut store: RowStore = records.iter().cloned().collect();
        store.sort_by(column, direction);
        let mut before = records;
        let mut after: Vec<Record> = store.iter().map(|(_, r)| r.clone()).collect();
        before.sort_by(|a, b| (a.id, &a.name, &a.description).cmp(&(b.id, &b.name, &b.description)));
        after.sort_by(|a, b| (a.id, &a.name, &a.description).cmp(&(b.id, &b.name, &b.description)));
        prop_assert_eq!(before, after);
    }
}

// 4. Monotone order

proptest! {
    #[test]
    fn sorted_rows_are_monotone(
        records in store_strategy(),
        column in column_strategy(),
        direction in direction_strategy(),
    ) {
        let mut store: RowStore = records.into_iter().collect();
        store.sort_by(column, direction);
        let rows: Vec<&Record> = store.iter().map(|(_, r)| r).collect();
        for pair in rows.windows(2) {
            prop_assert_ne!(
                compare_directed(pair[0], pair[1], column, direction),
                std::cmp::Ordering::Greater
            );
        }
    }
}

// 5. Stale keys

proptest! {
    #[test]
    fn removed_keys_never_resolve(
        records in proptest::collection::vec(record_strategy(), 1..16),
        removals in proptest::collection::vec(0usize..16, 1..8),
        refill in proptest::collection::vec(record_strategy(), 0..8),
    ) {
        let mut store: RowStore = records.into_iter().collect();
        let mut stale = Vec::new();
        for r in removals {
            if store.is_empty() {
                break;
            }
            let key = store.key_at(r % store.len()).unwrap();
            prop_assert!(store.remove(key).is_some());
            stale.push(key);
        }
        for record in refill {
            store.insert(record);
        }
        for key in stale {
            prop_assert!(store.get(key).is_none());
            prop_assert!(!store.keys().contains(&key));
        }
        prop_assert_eq!(store.iter().count(), store.len());
    }
}
