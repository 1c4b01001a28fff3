//! Device resets

use mcuflash_core::prelude::*;
use mcuflash_link::{Connector, Session};

use crate::tool::DeviceTool;

impl<C: Connector> DeviceTool<C> {
    /// Graceful restart through the device firmware.
    pub async fn softreset(&mut self) -> Result<()> {
        let mut session = Session::open(&mut self.connector, &self.options).await?;
        let result = session.connector().softreset().await;
        session.close().await;

        match result {
            Ok(()) => {
                info!(target: "device", "Soft-Reset executed (node.restart())");
                Ok(())
            }
            Err(e) => {
                error!(target: "device", "{e}");
                Err(e)
            }
        }
    }

    /// Power-cycle-equivalent reset via the serial control lines.
    ///
    /// Gated on an open session like every other device operation: the
    /// connector can only strobe the control lines of a port it has
    /// opened, even though the reset itself needs no handshake.
    pub async fn hardreset(&mut self) -> Result<()> {
        let mut session = Session::open(&mut self.connector, &self.options).await?;
        let result = session.connector().hardreset().await;
        session.close().await;

        match result {
            Ok(()) => {
                info!(target: "device", "Hard-Reset executed (100ms)");
                Ok(())
            }
            Err(e) => {
                error!(target: "device", "{e}");
                Err(e)
            }
        }
    }
}
