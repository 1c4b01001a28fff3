//! # mcuflash-app - Session Orchestration
//!
//! The operation layer on top of the [`mcuflash_link`] connector seam:
//! one [`DeviceTool`] per invocation owns the merged session options,
//! the primary output sink, and the connector, and exposes the device
//! operations (inventory, upload, download, script execution, removal,
//! formatting, resets, port enumeration).
//!
//! Every device-facing operation follows the same shape: open one
//! session, perform the connector calls, report, release the session
//! on every exit path. Primary payloads (file lists, script output,
//! JSON) go through the [`OutputSink`]; status and errors go through
//! `tracing`.

pub mod commands;
pub mod output;
pub mod progress;
pub mod tool;

// Re-export primary types
pub use commands::fsinfo::ListFormat;
pub use commands::upload::UploadOptions;
pub use output::{OutputHandler, OutputSink};
pub use progress::{NoProgress, UploadProgress};
pub use tool::DeviceTool;
