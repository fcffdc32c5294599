//! Typed client for the Prospety lead-generation API.
//!
//! With only the `data` feature the crate exposes the typed records and the
//! wire decoders/encoders. The default `client` feature adds the HTTP
//! transport, one service function per remote operation and the [`Client`]
//! facade.

#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod models;

#[cfg(feature = "client")]
pub mod client;
#[cfg(feature = "client")]
mod error_conversions;
#[cfg(feature = "client")]
pub mod pagination;
#[cfg(feature = "client")]
pub mod services;
#[cfg(feature = "client")]
pub mod transport;

#[cfg(feature = "client")]
pub use client::Client;
