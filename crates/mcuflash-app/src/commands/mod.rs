//! Device operations
//!
//! One module per concern. Every device-facing operation follows the
//! same shape: open one session, perform the connector calls, report,
//! release the session on every exit path.

pub mod devices;
pub mod download;
pub mod fsinfo;
pub mod maintenance;
pub mod reset;
pub mod run;
pub mod upload;

use std::path::Path;

/// Final path component as an owned string; empty when the path has no
/// file name component.
pub(crate) fn basename(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
