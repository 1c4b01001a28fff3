//! Upload orchestration
//!
//! Per-file pipeline: stat locally, derive and sanitize the remote
//! name, delete any existing remote file, transfer in chunks, then
//! optionally compile and drop the uncompiled source. Files are
//! processed strictly in submission order over one session; the
//! transport is a single half-duplex channel and concurrent transfers
//! would corrupt the device-side protocol state.

use std::path::Path;

use mcuflash_core::prelude::*;
use mcuflash_link::{Connector, Session};

use crate::commands::basename;
use crate::progress::UploadProgress;
use crate::tool::DeviceTool;

/// Per-run upload options.
#[derive(Debug, Clone, Default)]
pub struct UploadOptions {
    /// Compile Lua sources after the transfer and remove the original,
    /// leaving only the bytecode artifact on the device.
    pub compile: bool,

    /// Keep the local relative path as the remote name instead of the
    /// basename.
    pub keep_path: bool,

    /// Explicit remote name; wins over `keep_path` and the basename
    /// derivation.
    pub remote_name: Option<String>,
}

impl<C: Connector> DeviceTool<C> {
    /// Upload one or more local files through one session.
    ///
    /// A missing or directory local path skips that file in bulk mode
    /// and aborts a single-file run; it never touches the device.
    /// Failures of device-mutating steps (remove, transfer, compile)
    /// abort the whole run. The session is released exactly once, on
    /// every exit path.
    pub async fn upload(
        &mut self,
        local_files: &[String],
        options: &UploadOptions,
        progress: &mut (dyn UploadProgress + Send),
    ) -> Result<()> {
        let bulk = local_files.len() != 1;

        let mut session = Session::open(&mut self.connector, &self.options).await?;
        let result = upload_all(&mut session, local_files, options, progress, bulk).await;
        if let Err(e) = &result {
            error!("{e}");
        }
        session.close().await;
        result?;

        if bulk {
            info!("Bulk File Transfer complete!");
        } else {
            info!("File Transfer complete!");
        }
        Ok(())
    }
}

/// Run the per-file pipeline for every queued file, in submission
/// order.
async fn upload_all<C: Connector>(
    session: &mut Session<'_, C>,
    local_files: &[String],
    options: &UploadOptions,
    progress: &mut (dyn UploadProgress + Send),
    bulk: bool,
) -> Result<()> {
    for (index, local_file) in local_files.iter().enumerate() {
        // 1-based position in the original submission list, reported
        // as-is even while the queue shrinks
        let file_index = index + 1;

        // stat before touching the device
        let data = match read_local(local_file).await {
            Ok(data) => data,
            Err(skip) if bulk => {
                match skip {
                    SkipReason::Missing => {
                        error!("Local file not found \"{local_file}\" skipping...")
                    }
                    SkipReason::IsDirectory => {
                        error!(target: "device", "Path \"{local_file}\" is a directory.")
                    }
                }
                continue;
            }
            Err(skip) => {
                return Err(match skip {
                    SkipReason::Missing => {
                        Error::transfer(format!("local file \"{local_file}\" not found"))
                    }
                    SkipReason::IsDirectory => {
                        Error::transfer(format!("path \"{local_file}\" is a directory"))
                    }
                });
            }
        };

        let remote_name = remote_name_for(local_file, options);
        info!("Uploading \"{local_file}\" >> \"{remote_name}\"...");

        // the store cannot truncate on write; delete first to get
        // overwrite semantics, a no-op when the file is absent
        session.connector().remove_file(&remote_name).await?;

        let mut forward = |sent: u64, total: u64| progress.on_progress(sent, total, file_index);
        session
            .connector()
            .upload(&remote_name, &data, &mut forward)
            .await?;

        if options.compile && has_lua_extension(local_file) {
            info!(target: "device", " |- compiling lua file..");
            session
                .connector()
                .compile(&remote_name)
                .await
                .map_err(|e| match e {
                    Error::Compile { .. } => e,
                    other => Error::compile(remote_name.clone(), other.to_string()),
                })?;
            info!(target: "device", " |- success");

            // only the bytecode artifact stays on the device
            session.connector().remove_file(&remote_name).await?;
            info!(target: "device", " |- original Lua file removed");
        }
    }

    Ok(())
}

enum SkipReason {
    Missing,
    IsDirectory,
}

async fn read_local(path: &str) -> std::result::Result<Vec<u8>, SkipReason> {
    let meta = match tokio::fs::metadata(path).await {
        Ok(meta) => meta,
        Err(_) => return Err(SkipReason::Missing),
    };
    if meta.is_dir() {
        return Err(SkipReason::IsDirectory);
    }
    tokio::fs::read(path).await.map_err(|_| SkipReason::Missing)
}

/// Derive the remote name for one local path: explicit override, else
/// the kept relative path, else the basename. Sanitization always
/// runs, explicit names included.
fn remote_name_for(local_file: &str, options: &UploadOptions) -> String {
    let name = if let Some(explicit) = &options.remote_name {
        explicit.clone()
    } else if options.keep_path {
        local_file.to_string()
    } else {
        basename(local_file)
    };
    sanitize_remote_name(&name)
}

/// Strip relative path components so a name cannot escape the flash
/// namespace: every `../`, then every remaining `..`, then one leading
/// `./`.
fn sanitize_remote_name(name: &str) -> String {
    let name = name.replace("../", "");
    let name = name.replace("..", "");
    match name.strip_prefix("./") {
        Some(rest) => rest.to_string(),
        None => name,
    }
}

fn has_lua_extension(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("lua"))
}
