//! Integration tests for Slicebox

use proptest::prelude::*;
use serde_json::json;
use slicebox::slices::{app_store, auth, counter};
use slicebox::{fn_slice, Action, RootState, Store, StoreBuilder, StoreError};
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc, Mutex,
};

fn counter_of(store: &Store<RootState>) -> i64 {
    store.select(counter::select_counter).unwrap_or_default()
}

#[test]
fn example_scenario() {
    let store = app_store().unwrap();
    assert_eq!(
        store.get_state().to_json(),
        json!({ "counter": { "counter": 0, "isShown": true }, "auth": { "isAuthenticated": false } })
    );

    store.dispatch(counter::increment());
    assert_eq!(counter_of(&store), 1);

    store.dispatch(counter::increase_by_amount(5));
    assert_eq!(counter_of(&store), 6);

    store.dispatch(counter::decrement());
    assert_eq!(counter_of(&store), 5);

    store.dispatch(counter::toggle_counter());
    assert_eq!(store.select(counter::select_is_shown), Some(false));

    store.dispatch(auth::login());
    assert_eq!(
        store.get_state().to_json(),
        json!({ "counter": { "counter": 5, "isShown": false }, "auth": { "isAuthenticated": true } })
    );
}

#[test]
fn plain_data_actions() {
    let store = app_store().unwrap();
    let actions: Vec<Action> = serde_json::from_value(json!([
        { "kind": "increment" },
        { "kind": "increaseByAmount", "payload": 10 },
        { "kind": "decrement" },
        { "kind": "toggleCounter" },
        { "kind": "login" },
    ]))
    .unwrap();

    for action in actions {
        store.dispatch(action);
    }

    assert_eq!(counter_of(&store), 10);
    assert_eq!(store.select(counter::select_is_shown), Some(false));
    assert_eq!(store.select(auth::select_is_authenticated), Some(true));
}

fn any_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(counter::increment()),
        Just(counter::decrement()),
        Just(counter::toggle_counter()),
        Just(auth::login()),
        Just(auth::logout()),
        Just(Action::new("nothing")),
    ]
}

proptest! {
    /// The counter is the sum of +1/-1 per increment/decrement, whatever else is interleaved.
    #[test]
    fn counter_is_independent_of_other_actions(actions in prop::collection::vec(any_action(), 0..40)) {
        let store = app_store().unwrap();

        let expected: i64 = actions
            .iter()
            .map(|action| match action.kind() {
                "counter/increment" => 1,
                "counter/decrement" => -1,
                _ => 0,
            })
            .sum();
        let toggles = actions
            .iter()
            .filter(|action| action.kind() == "counter/toggleCounter")
            .count();

        for action in actions {
            store.dispatch(action);
        }

        prop_assert_eq!(counter_of(&store), expected);
        prop_assert_eq!(store.select(counter::select_is_shown), Some(toggles % 2 == 0));
    }

    #[test]
    fn increase_by_amount_adds_exactly(start in -1_000_000i64..1_000_000, amount in -1_000_000i64..1_000_000) {
        let store = app_store().unwrap();
        store.dispatch(counter::increase_by_amount(start));
        store.dispatch(counter::increase_by_amount(amount));
        prop_assert_eq!(counter_of(&store), start + amount);
    }
}

#[test]
fn increase_by_negative_and_zero() {
    let store = app_store().unwrap();
    store.dispatch(counter::increase_by_amount(0));
    assert_eq!(counter_of(&store), 0);
    store.dispatch(counter::increase_by_amount(-4));
    assert_eq!(counter_of(&store), -4);
}

#[test]
fn unknown_action_leaves_root_state_unchanged() {
    let store = app_store().unwrap();
    store.dispatch(counter::increment());
    let before = store.get_state();

    store.dispatch("counter/reset");
    store.dispatch("nothing");
    store.dispatch(Action::with_payload("increaseByAmount", "not a number"));

    let after = store.get_state();
    assert_eq!(after, before);
    assert!(before.shares_slice(&after, counter::NAME));
    assert!(before.shares_slice(&after, auth::NAME));
}

#[test]
fn logout_is_idempotent() {
    let store = app_store().unwrap();
    store.dispatch(auth::logout());
    assert_eq!(store.select(auth::select_is_authenticated), Some(false));

    store.dispatch(auth::login());
    store.dispatch(auth::logout());
    assert_eq!(store.select(auth::select_is_authenticated), Some(false));
}

#[test]
fn store_subscription() {
    let store = app_store().unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_clone = calls.clone();

    let subscription = store.subscribe(move |_| {
        calls_clone.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(calls.load(Ordering::SeqCst), 0);

    store.dispatch(counter::increment());
    assert_eq!(calls.load(Ordering::SeqCst), 1);

    // Unknown kinds still notify
    store.dispatch("nothing");
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    subscription.unsubscribe();
    store.dispatch(counter::increment());
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

#[test]
fn subscribers_see_post_dispatch_state_in_registration_order() {
    let store = app_store().unwrap();
    let log = Arc::new(Mutex::new(Vec::new()));

    let mut subscriptions = Vec::new();
    for name in ["first", "second", "third"] {
        let log = log.clone();
        subscriptions.push(store.subscribe(move |state: &RootState| {
            log.lock()
                .unwrap()
                .push((name, counter::select_counter(state)));
        }));
    }

    store.dispatch(counter::increase_by_amount(3));
    assert_eq!(
        *log.lock().unwrap(),
        vec![("first", Some(3)), ("second", Some(3)), ("third", Some(3))]
    );

    // Drop the middle subscriber before the next dispatch
    drop(subscriptions.remove(1));
    log.lock().unwrap().clear();

    store.dispatch(counter::decrement());
    assert_eq!(
        *log.lock().unwrap(),
        vec![("first", Some(2)), ("third", Some(2))]
    );
}

#[test]
fn nested_dispatch_reaches_later_subscribers_in_order() {
    let store = app_store().unwrap();

    let handle = store.clone();
    store
        .subscribe(move |state: &RootState| {
            if counter::select_counter(state) == Some(1) {
                handle.dispatch(counter::increase_by_amount(10));
            }
        })
        .detach();

    let second = Arc::new(Mutex::new(Vec::new()));
    let _second = {
        let second = second.clone();
        store.subscribe(move |state: &RootState| {
            second.lock().unwrap().push(counter::select_counter(state));
        })
    };

    let watched = Arc::new(Mutex::new(Vec::new()));
    let _watch = {
        let watched = watched.clone();
        store.watch(counter::select_counter, move |value| {
            watched.lock().unwrap().push(*value);
        })
    };

    store.dispatch(counter::increment());

    assert_eq!(store.select(counter::select_counter), Some(11));
    assert_eq!(*second.lock().unwrap(), vec![Some(1), Some(11)]);
    assert_eq!(*watched.lock().unwrap(), vec![Some(1), Some(11)]);
}

#[test]
fn header_watch_follows_auth_only() {
    let store = app_store().unwrap();
    let renders = Arc::new(Mutex::new(Vec::new()));

    let _header = {
        let renders = renders.clone();
        store.watch(auth::select_is_authenticated, move |authenticated| {
            renders.lock().unwrap().push(*authenticated);
        })
    };

    store.dispatch(counter::increment());
    store.dispatch(auth::login());
    store.dispatch(auth::login());
    store.dispatch(counter::toggle_counter());
    store.dispatch(auth::logout());

    assert_eq!(*renders.lock().unwrap(), vec![Some(true), Some(false)]);
}

#[test]
fn configuration_errors() {
    assert_eq!(StoreBuilder::new().build().err(), Some(StoreError::NoSlices));

    let duplicate = StoreBuilder::new()
        .slice(counter::CounterSlice)
        .slice(fn_slice("counter", 0u8, |n: &u8, _: &Action| *n))
        .build();
    assert!(matches!(duplicate, Err(StoreError::DuplicateSlice { .. })));
}

#[test]
fn custom_slices_compose_with_app_slices() {
    let store = StoreBuilder::new()
        .slice(counter::CounterSlice)
        .slice(fn_slice("history", Vec::<String>::new(), |log: &Vec<String>, action: &Action| {
            let mut next = log.clone();
            next.push(action.kind().to_string());
            next
        }))
        .build()
        .unwrap();

    store.dispatch(counter::increment());
    store.dispatch(auth::login());

    let state = store.get_state();
    assert_eq!(counter::select_counter(&state), Some(1));
    assert_eq!(
        state.get::<Vec<String>>("history").cloned(),
        Some(vec!["counter/increment".to_string(), "auth/login".to_string()])
    );
    assert_eq!(auth::select_is_authenticated(&state), None);
}
