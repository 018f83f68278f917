//! # Logging
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter whose
//! level is taken from `RUST_LOG`.
//!
//! ```bash
//! RUST_LOG=info cargo run            # lifecycle, refreshes, status changes
//! RUST_LOG=debug cargo run           # plus actor traffic and payloads
//! RUST_LOG=order_console=debug,record_actor=warn cargo run
//! ```
//!
//! With `RUST_LOG=info` a refresh followed by a refused status change reads:
//!
//! ```text
//! INFO refresh: Board refreshed size=4
//! INFO change_status: Optimistic status applied order_id=o1 previous=pending status=completed
//! WARN change_status: Rolled back to snapshot order_id=o1
//! WARN change_status: Status change failed error=orders request failed: refused rollback=Restored
//! ```
//!
//! Spans are shown inline and module paths are hidden (`with_target(false)`).
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
