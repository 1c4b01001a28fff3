//! The wire-protocol seam
//!
//! The connector implements framing, handshake, command encoding and
//! chunked transfer against the device. This layer never talks to the
//! serial port itself; it sequences connector calls inside a
//! [`crate::Session`].

use mcuflash_core::{FlashInfo, RemoteFile, Result, SerialDevice};

/// Per-chunk progress callback for uploads: `(bytes_sent, total_bytes)`.
///
/// The orchestration layer wraps this to add the file index when
/// running a bulk transfer.
pub type ChunkProgress<'a> = &'a mut (dyn FnMut(u64, u64) + Send);

/// Wire-protocol operations orchestrated by this layer.
///
/// One connector instance backs at most one open session at a time:
/// the transport is a single half-duplex channel, and interleaved
/// commands would corrupt the device-side protocol state. None of the
/// calls carry a timeout; an unresponsive device blocks the operation
/// until an external watchdog intervenes.
#[trait_variant::make(Connector: Send)]
pub trait LocalConnector {
    /// Open the transport and run the protocol handshake.
    ///
    /// Returns the banner/identification text the device prints on
    /// connect. `connect_delay_ms` is honored between opening the port
    /// and starting the handshake.
    async fn connect(
        &mut self,
        device: &str,
        baud_rate: u32,
        connect_delay_ms: u64,
    ) -> Result<String>;

    /// Release the transport.
    async fn disconnect(&mut self) -> Result<()>;

    /// Query volume metadata and the file list in one round trip, so
    /// both halves describe the same store state.
    async fn fsinfo(&mut self) -> Result<(FlashInfo, Vec<RemoteFile>)>;

    /// Send `data` to the device as `remote_name` using the chunked
    /// transfer primitive, reporting progress per chunk.
    async fn upload(
        &mut self,
        remote_name: &str,
        data: &[u8],
        progress: ChunkProgress<'_>,
    ) -> Result<()>;

    /// Fetch the complete content of a stored file. Either the whole
    /// payload comes back or the call fails; there are no partial
    /// results.
    async fn download(&mut self, remote_name: &str) -> Result<Vec<u8>>;

    /// Delete a stored file. Succeeds when the file is already absent.
    async fn remove_file(&mut self, remote_name: &str) -> Result<()>;

    /// Compile a stored Lua source into bytecode on the device.
    async fn compile(&mut self, remote_name: &str) -> Result<()>;

    /// Execute a stored script and capture its combined output.
    async fn execute(&mut self, remote_name: &str) -> Result<String>;

    /// Re-create the device file system. Long-running (~30s class);
    /// returns the device's completion response.
    async fn format(&mut self) -> Result<String>;

    /// Graceful restart through the device firmware.
    async fn softreset(&mut self) -> Result<()>;

    /// Power-cycle-equivalent reset via the serial control lines of
    /// the open port.
    async fn hardreset(&mut self) -> Result<()>;

    /// Enumerate serial devices visible on the host. With `show_all`
    /// unset, the connector filters to known microcontroller bridge
    /// chips.
    async fn list_devices(&mut self, show_all: bool) -> Result<Vec<SerialDevice>>;
}
