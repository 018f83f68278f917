//! # Order Console
//!
//! The data core of a small shop's order management screen. It reads
//! customers, products, orders and order lines from a catalog service, joins
//! them into display-ready [`OrderView`](model::OrderView)s, and lets an
//! operator change an order's status optimistically, undoing the change if the
//! service refuses it.
//!
//! ## Layers
//!
//! - **[model]**: plain records and the derived views.
//! - **[service]**: the [`CatalogService`](service::CatalogService) seam, with an
//!   HTTP implementation and one backed by in-process record actors.
//! - **[backend]** and **[clients]**: the in-process backend built on
//!   [`record_actor`], one actor per collection behind a typed client.
//! - **[console]**: fetcher, aggregator, board and optimistic mutator, tied
//!   together by [`OrderConsole`](console::OrderConsole).
//! - **[lifecycle]**: spawns and shuts down the in-process backend; logging setup.
//! - **[config]**: `console.toml` plus `CONSOLE_*` environment overrides.
//!
//! ## Running the Demo
//!
//! ```bash
//! RUST_LOG=info cargo run
//! CONSOLE_API_URL=http://127.0.0.1:8000/api RUST_LOG=info cargo run
//! ```

pub mod backend;
pub mod clients;
pub mod config;
pub mod console;
pub mod lifecycle;
pub mod model;
pub mod service;
