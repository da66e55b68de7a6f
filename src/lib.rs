//! # session-nav
//!
//! Leptos + WASM bundle that keeps a static site's navigation bar in sync
//! with the server session and drives the prompt-based team actions.
//!
//! The crate is split the same way as a regular Leptos client: `net` for
//! REST calls, `state` for pure view models, `components` for rendered
//! views, and `util` for page glue. `controller` ties them together behind
//! the `SessionApi` and `Page` seams. Browser bindings are compiled only
//! with the `csr` feature; without it every browser call is a stub, which
//! keeps the crate testable with plain `cargo test`.

pub mod components;
pub mod config;
pub mod controller;
pub mod error;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
mod entry;
