//! # mcuflash-link - Connector Seam and Session Lifecycle
//!
//! The wire protocol (framing, handshake, chunked transfer, command
//! encoding) lives behind the [`Connector`] trait; this crate owns the
//! rules around it: per-invocation session options with caller
//! overrides, and the open/perform/release session lifecycle every
//! device-facing operation goes through.
//!
//! Depends on [`mcuflash_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Session Configuration (`options`)
//! - [`SessionOptions`] - Transport address, bit rate, settle delay
//! - [`SessionOverrides`] - Caller overrides, merged truthy-wins
//!
//! ### The Connector Seam (`connector`)
//! - [`Connector`] / [`LocalConnector`] - Wire-protocol operations
//! - [`ChunkProgress`] - Per-chunk progress callback for uploads
//!
//! ### Session Lifecycle (`session`)
//! - [`Session`] - One open logical connection, bound to exactly one
//!   operation, released on every exit path

pub mod connector;
pub mod options;
pub mod session;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use connector::{ChunkProgress, Connector, LocalConnector};
pub use options::{SessionOptions, SessionOverrides, DEFAULT_BAUD_RATE, DEFAULT_DEVICE};
pub use session::Session;
