//! Download with local collision renaming

use std::path::Path;

use chrono::Utc;
use mcuflash_core::prelude::*;
use mcuflash_link::{Connector, Session};

use crate::commands::basename;
use crate::tool::DeviceTool;

impl<C: Connector> DeviceTool<C> {
    /// Download a remote file into the current working directory.
    ///
    /// The local target is `basename(remote_file)`; an existing local
    /// file of that name is never touched, the new file gets an
    /// epoch-millisecond suffix instead. The payload is written in one
    /// synchronous write after the complete content arrived; a failed
    /// transfer writes nothing.
    pub async fn download(&mut self, remote_file: &str) -> Result<()> {
        self.download_into(Path::new("."), remote_file).await
    }

    /// Download a remote file into `dir`. See [`DeviceTool::download`].
    pub async fn download_into(&mut self, dir: &Path, remote_file: &str) -> Result<()> {
        let local_name = resolve_local_name(dir, remote_file);

        let mut session = Session::open(&mut self.connector, &self.options).await?;
        info!("Downloading \"{remote_file}\" ...");
        let result = session.connector().download(remote_file).await;

        let outcome = match result {
            Ok(data) => {
                info!("Data Transfer complete!");
                match std::fs::write(dir.join(&local_name), &data) {
                    Ok(()) => {
                        info!("File \"{local_name}\" created");
                        Ok(())
                    }
                    Err(e) => {
                        error!("Cannot write \"{local_name}\": {e}");
                        Err(Error::from(e))
                    }
                }
            }
            Err(e) => {
                error!("Data Transfer FAILED!");
                Err(e)
            }
        };

        session.close().await;
        outcome
    }
}

/// Local target name for a remote file, renamed with a millisecond
/// epoch suffix when a file of that name already exists in `dir`.
fn resolve_local_name(dir: &Path, remote_file: &str) -> String {
    let local_name = basename(remote_file);
    if dir.join(&local_name).exists() {
        let renamed = format!("{}.{}", local_name, Utc::now().timestamp_millis());
        info!("Local file \"{local_name}\" already exist - new file renamed to \"{renamed}\"");
        renamed
    } else {
        local_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_local_name_no_collision() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(resolve_local_name(dir.path(), "lfs/init.lua"), "init.lua");
    }

    #[test]
    fn test_resolve_local_name_collision_appends_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("init.lua"), b"old").unwrap();

        let resolved = resolve_local_name(dir.path(), "init.lua");

        let suffix = resolved.strip_prefix("init.lua.").unwrap();
        assert!(!suffix.is_empty());
        assert!(suffix.chars().all(|c| c.is_ascii_digit()));
    }
}
