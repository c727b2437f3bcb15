//! Header that shows navigation only while authenticated.

use slicebox::slices::{app_store, auth, counter};
use slicebox::StoreError;
use tracing_subscriber::EnvFilter;

fn render_header(authenticated: bool) {
    if authenticated {
        println!("   [Header] Redux Auth | My Products | My Sales | Logout");
    } else {
        println!("   [Header] Redux Auth");
    }
}

fn main() -> Result<(), StoreError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Redux Auth ===\n");

    let store = app_store()?;
    render_header(store.select(auth::select_is_authenticated).unwrap_or(false));

    // Only auth changes re-render the header
    let _header = store.watch(auth::select_is_authenticated, |authenticated| {
        render_header(authenticated.unwrap_or(false));
    });

    println!("\n1. Counter changes do not touch the header");
    store.dispatch(counter::increment());

    println!("\n2. Login");
    store.dispatch(auth::login());

    println!("\n3. Login again (no change)");
    store.dispatch(auth::login());

    println!("\n4. Logout");
    store.dispatch(auth::logout());

    Ok(())
}
