//! Counter screen driven by the application store.
//!
//! Run with `RUST_LOG=slicebox=debug` to see each dispatch.

use slicebox::slices::{app_store, counter, legacy};
use slicebox::{RootState, StoreError};
use tracing_subscriber::EnvFilter;

fn render(state: &RootState) {
    let shown = counter::select_is_shown(state).unwrap_or(false);
    match counter::select_counter(state) {
        Some(value) if shown => println!("   [Counter] {value}"),
        _ => println!("   [Counter] (hidden)"),
    }
}

fn main() -> Result<(), StoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Redux Counter ===\n");

    let store = app_store()?;
    store.read(render);

    // Re-render on every store change
    let _view = store.subscribe(render);

    println!("\n1. Increment");
    store.dispatch(counter::increment());

    println!("\n2. Increment by 5");
    store.dispatch(counter::increase_by_amount(5));

    println!("\n3. Decrement");
    store.dispatch(counter::decrement());

    println!("\n4. Toggle counter");
    store.dispatch(counter::toggle_counter());

    println!("\n5. Toggle counter again");
    store.dispatch(counter::toggle_counter());

    println!("\nFinal state: {}", store.get_state().to_json());

    println!("\n=== Flat reducer ===\n");
    let flat = legacy::store();
    flat.dispatch("increment");
    flat.dispatch(slicebox::Action::with_payload("increase_by_value", 5));
    flat.dispatch("toggle_counter");
    println!("   {:?}", flat.get_state());

    Ok(())
}
