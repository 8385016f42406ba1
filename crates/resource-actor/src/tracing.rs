//! # Observability & Tracing
//!
//! Structured logging for actor systems built on this crate.
//!
//! Every `ResourceActor` logs with an `entity_type` field (`CatalogItem`, `Cart`, `Order`,
//! …) instead of a module path, so the subscriber is configured with `with_target(false)`.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: startup (with capacity), shutdown (with final size)
//! - **Entity Operations**: Create, Get, Update, Delete, Action, List at `debug`;
//!   committed mutations and evictions at `info`; rejected operations at `warn`
//! - **Client Calls**: `#[instrument]` spans on the domain clients
//!
//! ## Usage
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle + committed mutations
//! RUST_LOG=debug cargo run     # full payloads and read requests
//! ```
//!
//! With `RUST_LOG=info` a submission from the kitchen feed looks like:
//!
//! ```text
//! INFO Created entity_type="Order" id=order_6 size=6
//! INFO Evicted entity_type="Order" id=order_1 capacity=5
//! INFO Action ok entity_type="Order" id=order_2
//! ```

/// Initializes the tracing subscriber from `RUST_LOG`.
///
/// Call once, from the binary. Library code and tests never install a subscriber.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type already says where a line came from
        .compact()
        .init();
}
