//! Single-call store maintenance: file removal and formatting

use mcuflash_core::prelude::*;
use mcuflash_link::{Connector, Session};

use crate::tool::DeviceTool;

impl<C: Connector> DeviceTool<C> {
    /// Delete a stored file by name. No content round-trip; the device
    /// gives no feedback beyond accepting the command.
    pub async fn remove(&mut self, filename: &str) -> Result<()> {
        let mut session = Session::open(&mut self.connector, &self.options).await?;
        let result = session.connector().remove_file(filename).await;
        session.close().await;

        match result {
            Ok(()) => {
                info!(target: "device", "File \"{filename}\" removed!");
                Ok(())
            }
            Err(e) => {
                error!(target: "device", "{e}");
                Err(e)
            }
        }
    }

    /// Re-create the device file system. Long-running; no automatic
    /// retry.
    pub async fn mkfs(&mut self) -> Result<()> {
        let mut session = Session::open(&mut self.connector, &self.options).await?;
        info!(target: "device", "Formatting the file system...this will take around ~30s");
        let result = session.connector().format().await;
        session.close().await;

        match result {
            Ok(response) => {
                info!(target: "device", "File System created | {response}");
                Ok(())
            }
            Err(e) => {
                error!(target: "device", "Formatting failed - {e}");
                Err(e)
            }
        }
    }
}
