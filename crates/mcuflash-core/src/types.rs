//! Domain records shared between the connector seam and the
//! orchestration layer

use serde::{Deserialize, Serialize};

/// A file stored on the device flash
///
/// Immutable snapshot taken at inventory time; the device can mutate
/// its store between queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteFile {
    /// File name within the flash namespace (flat, no directories on
    /// most firmwares)
    pub name: String,

    /// Size in bytes
    pub size_bytes: u64,
}

impl RemoteFile {
    pub fn new(name: impl Into<String>, size_bytes: u64) -> Self {
        Self {
            name: name.into(),
            size_bytes,
        }
    }
}

/// Flash volume usage, reported by the same inventory query that
/// produced the file list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashInfo {
    /// Total volume capacity in bytes
    pub total_bytes: u64,

    /// Free space in bytes
    pub remaining_bytes: u64,
}

impl FlashInfo {
    pub fn new(total_bytes: u64, remaining_bytes: u64) -> Self {
        Self {
            total_bytes,
            remaining_bytes,
        }
    }

    /// Total capacity in whole kilobytes, for the human summary line
    pub fn total_kb(&self) -> u64 {
        self.total_bytes / 1024
    }

    /// Free space in whole kilobytes, for the human summary line
    pub fn remaining_kb(&self) -> u64 {
        self.remaining_bytes / 1024
    }
}

/// A serial port visible on the host
///
/// Host-local record with no relation to an open session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerialDevice {
    /// Port identifier (e.g. `/dev/ttyUSB0`, `COM3`)
    pub port_id: String,

    /// USB manufacturer string, if the host exposes one
    pub manufacturer: String,

    /// Hardware identifier (VID/PID or pnp id)
    pub hardware_id: String,
}

impl SerialDevice {
    /// One formatted line for the human device listing
    pub fn describe(&self) -> String {
        format!(
            "{} ({}, {})",
            self.port_id, self.manufacturer, self.hardware_id
        )
    }
}
