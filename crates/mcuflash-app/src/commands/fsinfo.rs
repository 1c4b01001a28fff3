//! Filesystem inventory reporting

use mcuflash_core::prelude::*;
use mcuflash_link::{Connector, Session};
use serde_json::json;

use crate::tool::DeviceTool;

/// Output contract for [`DeviceTool::fsinfo`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListFormat {
    /// One `{files, meta}` JSON object on the output sink, for
    /// third-party applications.
    Json,
    /// File names only, one per line, on the output sink, for shell
    /// composition.
    Raw,
    /// Summary plus itemized listing on the diagnostic stream.
    #[default]
    Human,
}

impl ListFormat {
    /// Map a caller-supplied format name. Anything unrecognized falls
    /// back to the human-readable format.
    pub fn from_arg(arg: &str) -> Self {
        match arg {
            "json" => Self::Json,
            "raw" => Self::Raw,
            _ => Self::Human,
        }
    }
}

impl<C: Connector> DeviceTool<C> {
    /// Report volume usage and the stored file list.
    ///
    /// Metadata and file list come from a single inventory query, so
    /// both describe the same store state. Zero files is a valid,
    /// non-error state.
    pub async fn fsinfo(&mut self, format: ListFormat) -> Result<()> {
        let mut session = Session::open(&mut self.connector, &self.options).await?;
        let result = session.connector().fsinfo().await;
        session.close().await;

        let (meta, files) = match result {
            Ok(inventory) => inventory,
            Err(e) => {
                error!("{e}");
                return Err(e);
            }
        };

        match format {
            ListFormat::Json => {
                let blob = serde_json::to_string(&json!({ "files": files, "meta": meta }))?;
                self.sink.write(&blob);
            }
            ListFormat::Raw => {
                for file in &files {
                    self.sink.write(&file.name);
                }
            }
            ListFormat::Human => {
                info!(target: "device",
                    "Free Disk Space: {} KB | Total: {} KB | {} Files",
                    meta.remaining_kb(),
                    meta.total_kb(),
                    files.len()
                );
                if files.is_empty() {
                    info!(target: "device", "No Files found - have you created the file-system?");
                } else {
                    info!(target: "device", "Files stored into Flash (SPIFFS)");
                    for file in &files {
                        info!(target: "device", " - {} ({} Bytes)", file.name, file.size_bytes);
                    }
                }
            }
        }

        Ok(())
    }
}
