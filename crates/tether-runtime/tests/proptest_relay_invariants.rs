//! Property-based invariant tests for the change relay.
//!
//! 1. An in-range set is stored and observed by every subscriber.
//! 2. An out-of-range set on the reject path fails and changes nothing.
//! 3. Reset lands on the minimum and reaches every subscriber.
//! 4. Subscribers are pulled in registration order.
//! 5. The clamp path always stores an in-range value.
//! 6. Version counts value-changing mutations exactly.
//! 7. A failing subscriber never stops the ones after it.

use proptest::prelude::*;
use tether_core::error::{BindError, PullError};
use tether_core::id::WidgetId;
use tether_runtime::reactive::{BoundedValue, Bounds, ChangeRelay, Resettable, SetPolicy};

// ── Strategies ────────────────────────────────────────────────────────────

fn bounds_strategy() -> impl Strategy<Value = Bounds> {
    (-1_000i64..=1_000, 0i64..=2_000).prop_map(|(min, span)| Bounds::new(min, min + span))
}

fn relay_with(bounds: Bounds, subscribers: usize) -> ChangeRelay<WidgetId> {
    let mut relay = ChangeRelay::new(BoundedValue::new(bounds.min(), bounds));
    for i in 0..subscribers {
        relay.subscribe(WidgetId::new(i as u32 + 1));
    }
    relay
}

fn pull_all(relay: &mut ChangeRelay<WidgetId>) -> Vec<(WidgetId, i64)> {
    let mut seen = Vec::new();
    relay.propagate(|h, v| {
        seen.push((h, v.get()));
        Ok(())
    });
    seen
}

// 1. In-range set is stored and observed

proptest! {
    #[test]
    fn in_range_set_reaches_every_subscriber(
        bounds in bounds_strategy(),
        offset in 0i64..=2_000,
        subscribers in 0usize..8,
    ) {
        let value = bounds.min() + offset % (bounds.max() - bounds.min() + 1);
        let mut relay = relay_with(bounds, subscribers);
        prop_assert_eq!(relay.set_value(value, SetPolicy::Reject), Ok(value));
        prop_assert_eq!(relay.get(), value);
        let seen = pull_all(&mut relay);
        prop_assert_eq!(seen.len(), subscribers);
        prop_assert!(seen.iter().all(|&(_, v)| v == value));
    }
}

// 2. Reject path leaves value untouched

proptest! {
    #[test]
    fn out_of_range_rejected(
        bounds in bounds_strategy(),
        beyond in 1i64..=10_000,
        below in proptest::bool::ANY,
    ) {
        let candidate = if below { bounds.min() - beyond } else { bounds.max() + beyond };
        let mut relay = relay_with(bounds, 2);
        let before = relay.get();
        let err = relay.set_value(candidate, SetPolicy::Reject).unwrap_err();
        let is_out_of_range = matches!(err, BindError::OutOfRange { .. });
        prop_assert!(is_out_of_range);
        prop_assert_eq!(relay.get(), before);
        prop_assert_eq!(relay.version(), 0);
        prop_assert!(!relay.is_pending());
    }
}

// 3. Reset lands on the minimum

proptest! {
    #[test]
    fn reset_reaches_min_everywhere(
        bounds in bounds_strategy(),
        start in -5_000i64..=5_000,
        subscribers in 1usize..6,
    ) {
        let mut relay = relay_with(bounds, subscribers);
        relay.set_value(start, SetPolicy::Clamp).unwrap();
        pull_all(&mut relay);
        relay.reset();
        prop_assert!(relay.is_pending());
        prop_assert_eq!(relay.get(), bounds.min());
        let seen = pull_all(&mut relay);
        prop_assert!(seen.iter().all(|&(_, v)| v == bounds.min()));
    }
}

// 4. Registration order

proptest! {
    #[test]
    fn propagation_follows_registration_order(
        handles in proptest::collection::vec(1u32..50, 0..12),
    ) {
        let mut relay = ChangeRelay::new(BoundedValue::new(0, Bounds::new(0, 10)));
        for &h in &handles {
            relay.subscribe(WidgetId::new(h));
        }
        relay.set_value(5, SetPolicy::Clamp).unwrap();
        let order: Vec<u32> = pull_all(&mut relay).into_iter().map(|(h, _)| h.get()).collect();
        prop_assert_eq!(order, handles);
    }
}

// 5. Clamp path stays in range

proptest! {
    #[test]
    fn clamp_always_in_range(
        bounds in bounds_strategy(),
        candidates in proptest::collection::vec(any::<i64>(), 1..30),
    ) {
        let mut relay = relay_with(bounds, 0);
        for c in candidates {
            let stored = relay.set_value(c, SetPolicy::Clamp).unwrap();
            prop_assert!(bounds.contains(stored));
            prop_assert_eq!(stored, bounds.clamp(c));
        }
    }
}

// 6. Version counts real changes

proptest! {
    #[test]
    fn version_counts_changes(
        candidates in proptest::collection::vec(-20i64..=120, 1..40),
    ) {
        let mut relay = relay_with(Bounds::new(0, 100), 0);
        let mut expected = 0u64;
        let mut last = relay.get();
        for c in candidates {
            match relay.set_value(c, SetPolicy::Reject) {
                Ok(v) => {
                    if v != last {
                        expected += 1;
                    }
                    last = v;
                }
                Err(_) => prop_assert_eq!(relay.get(), last),
            }
        }
        prop_assert_eq!(relay.version(), expected);
    }
}

// 7. Failures are isolated

proptest! {
    #[test]
    fn failing_subscriber_is_isolated(
        count in 1usize..10,
        failing in 0usize..10,
    ) {
        let failing = failing % count;
        let mut relay = relay_with(Bounds::new(0, 100), count);
        relay.set_value(42, SetPolicy::Clamp).unwrap();
        let mut pulled = 0usize;
        let report = relay.propagate(|h, _| {
            pulled += 1;
            if h.get() as usize == failing + 1 {
                Err(PullError::new(h, "detached"))
            } else {
                Ok(())
            }
        });
        prop_assert_eq!(pulled, count);
        prop_assert_eq!(report.notified, count - 1);
        prop_assert_eq!(report.failures.len(), 1);
        prop_assert_eq!(relay.get(), 42);
    }
}

#[test]
fn reset_is_a_capability_of_bounded_value_too() {
    fn reset_all(items: &mut [&mut dyn Resettable]) {
        for item in items.iter_mut() {
            item.reset();
        }
    }
    let bounds = Bounds::new(3, 9);
    let mut value = BoundedValue::new(7, bounds);
    let mut relay = relay_with(bounds, 1);
    relay.set_value(8, SetPolicy::Clamp).unwrap();
    reset_all(&mut [&mut value, &mut relay]);
    assert_eq!(value.get(), 3);
    assert_eq!(relay.get(), 3);
}
