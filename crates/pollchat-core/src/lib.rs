//! pollchat-core — Chat client logic, no UI.
//!
//! Holds the message model, markup rendering and the render cursor that
//! short-circuits redundant re-renders. With the default `client` feature it
//! also provides the HTTP client, the poll/submit session and the repeating
//! poller used by native frontends. The browser widget builds without it.

pub mod config;
pub mod draft;
pub mod render;
pub mod types;
pub mod view;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
pub mod error;
#[cfg(feature = "client")]
pub mod poller;
#[cfg(feature = "client")]
pub mod session;
