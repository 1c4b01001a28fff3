//! Remote script execution

use mcuflash_core::prelude::*;
use mcuflash_link::{Connector, Session};

use crate::tool::DeviceTool;

/// Marker line framing script output, so downstream tooling can strip
/// the frame deterministically.
const OUTPUT_FRAME: &str = ">----------------------------->";

impl<C: Connector> DeviceTool<C> {
    /// Execute a stored script on the device and relay its captured
    /// output.
    ///
    /// The raw output goes through the output sink between two framing
    /// marker lines on the diagnostic stream; the payload itself stays
    /// unmixed with diagnostics.
    pub async fn run(&mut self, filename: &str) -> Result<()> {
        let mut session = Session::open(&mut self.connector, &self.options).await?;
        let result = session.connector().execute(filename).await;
        session.close().await;

        match result {
            Ok(output) => {
                info!(target: "device", "Running \"{filename}\"");
                info!(target: "device", "{OUTPUT_FRAME}");
                self.sink.write(&output);
                info!(target: "device", "{OUTPUT_FRAME}");
                Ok(())
            }
            Err(e) => {
                error!(target: "device", "{e}");
                Err(e)
            }
        }
    }
}
