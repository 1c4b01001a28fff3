//! # mcuflash-core - Core Domain Types
//!
//! Foundation crate for mcuflash. Provides the domain records shared by
//! the connector seam and the orchestration layer, the error taxonomy,
//! and the diagnostic stream setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on
//! external crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`RemoteFile`] - A file stored on the device flash
//! - [`FlashInfo`] - Volume usage reported alongside the file list
//! - [`SerialDevice`] - A serial port visible on the host
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum covering connection, transfer, compile and
//!   enumeration failures
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Logging (`logging`)
//! - [`logging::init()`] - Configure the diagnostic stream (stderr)
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use mcuflash_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all mcuflash crates
pub mod prelude {
    pub use super::error::{Error, Result};
    pub use tracing::{debug, error, info, trace, warn};
}

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use types::{FlashInfo, RemoteFile, SerialDevice};
