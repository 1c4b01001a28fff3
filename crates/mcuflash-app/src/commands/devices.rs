//! Host-side serial device enumeration

use mcuflash_core::prelude::*;
use mcuflash_link::Connector;

use crate::tool::DeviceTool;

impl<C: Connector> DeviceTool<C> {
    /// List serial devices visible on the host.
    ///
    /// Runs without a session: enumeration must work when no
    /// microcontroller is reachable. Enumeration failures are reported
    /// as an alert and never propagate; an empty list is a non-fatal
    /// diagnostic, not a silent success.
    pub async fn devices(&mut self, show_all: bool, json_output: bool) -> Result<()> {
        let devices = match self.connector.list_devices(show_all).await {
            Ok(devices) => devices,
            Err(e) => {
                error!(target: "device", "Cannot retrieve serial device list - {e}");
                return Ok(());
            }
        };

        if json_output {
            let blob = serde_json::to_string(&devices)?;
            self.sink.write(&blob);
        } else if devices.is_empty() {
            error!(target: "device", "No Connected Devices found | Total: 0");
        } else {
            info!(target: "device", "Connected Devices | Total: {}", devices.len());
            for device in &devices {
                info!(target: "device", "- {}", device.describe());
            }
        }

        Ok(())
    }
}
