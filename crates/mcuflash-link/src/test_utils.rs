//! Test doubles for the connector seam
//!
//! [`FakeConnector`] records every call in order and serves scripted
//! responses, so dependent crates can assert pipeline sequencing
//! (remove before upload, compile before cleanup), session balance,
//! and failure behavior at any step.

use std::collections::{HashMap, HashSet};

use mcuflash_core::{Error, FlashInfo, RemoteFile, Result, SerialDevice};

use crate::connector::{ChunkProgress, Connector};

/// One recorded connector call, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Connect {
        device: String,
        baud_rate: u32,
        connect_delay_ms: u64,
    },
    Disconnect,
    Fsinfo,
    Upload {
        remote_name: String,
        size: u64,
    },
    Download {
        remote_name: String,
    },
    RemoveFile {
        remote_name: String,
    },
    Compile {
        remote_name: String,
    },
    Execute {
        remote_name: String,
    },
    Format,
    SoftReset,
    HardReset,
    ListDevices {
        show_all: bool,
    },
}

/// Scripted connector: configure responses up front, inspect `calls`
/// afterwards. All fields are public; tests set what they need.
#[derive(Debug, Default)]
pub struct FakeConnector {
    /// Ordered record of every call made through the trait.
    pub calls: Vec<Call>,

    /// Banner returned from a successful connect.
    pub banner: String,
    pub fail_connect: bool,
    pub fail_disconnect: bool,

    /// Inventory served by `fsinfo`.
    pub flash_info: FlashInfo,
    pub files: Vec<RemoteFile>,
    pub fail_fsinfo: bool,

    /// Remote file contents served by `download`; missing names fail.
    pub stored: HashMap<String, Vec<u8>>,

    /// Remote names whose removal fails.
    pub fail_remove: HashSet<String>,
    /// Remote names whose upload fails.
    pub fail_upload: HashSet<String>,
    /// Remote names whose compile fails.
    pub fail_compile: HashSet<String>,

    /// Output served by `execute`; `None` fails the call.
    pub script_output: Option<String>,

    /// Response served by `format`; `None` fails the call.
    pub format_response: Option<String>,

    pub fail_softreset: bool,
    pub fail_hardreset: bool,

    /// Devices served by `list_devices`.
    pub devices: Vec<SerialDevice>,
    pub fail_list_devices: bool,

    /// Upload progress granularity in bytes; zero means one event for
    /// the whole payload.
    pub chunk_size: u64,
}

impl FakeConnector {
    pub fn new() -> Self {
        Self {
            banner: "NodeMCU 3.0.0 build 20210401 powered by Lua 5.1.4".to_string(),
            script_output: Some(String::new()),
            format_response: Some("format done.".to_string()),
            chunk_size: 64,
            ..Self::default()
        }
    }

    /// Inventory to serve from `fsinfo`.
    pub fn with_files(mut self, flash_info: FlashInfo, files: Vec<RemoteFile>) -> Self {
        self.flash_info = flash_info;
        self.files = files;
        self
    }

    /// Content to serve from `download`.
    pub fn with_stored(mut self, name: &str, data: &[u8]) -> Self {
        self.stored.insert(name.to_string(), data.to_vec());
        self
    }

    /// Devices to serve from `list_devices`.
    pub fn with_devices(mut self, devices: Vec<SerialDevice>) -> Self {
        self.devices = devices;
        self
    }

    /// Number of recorded calls matching `predicate`.
    pub fn count(&self, predicate: impl Fn(&Call) -> bool) -> usize {
        self.calls.iter().filter(|c| predicate(c)).count()
    }

    /// True when every connect has a matching disconnect.
    pub fn sessions_balanced(&self) -> bool {
        self.count(|c| matches!(c, Call::Connect { .. }))
            == self.count(|c| matches!(c, Call::Disconnect))
    }
}

impl Connector for FakeConnector {
    async fn connect(
        &mut self,
        device: &str,
        baud_rate: u32,
        connect_delay_ms: u64,
    ) -> Result<String> {
        self.calls.push(Call::Connect {
            device: device.to_string(),
            baud_rate,
            connect_delay_ms,
        });
        if self.fail_connect {
            return Err(Error::connection(format!("cannot open {device}")));
        }
        Ok(self.banner.clone())
    }

    async fn disconnect(&mut self) -> Result<()> {
        self.calls.push(Call::Disconnect);
        if self.fail_disconnect {
            return Err(Error::transfer("port already gone"));
        }
        Ok(())
    }

    async fn fsinfo(&mut self) -> Result<(FlashInfo, Vec<RemoteFile>)> {
        self.calls.push(Call::Fsinfo);
        if self.fail_fsinfo {
            return Err(Error::transfer("fsinfo query failed"));
        }
        Ok((self.flash_info, self.files.clone()))
    }

    async fn upload(
        &mut self,
        remote_name: &str,
        data: &[u8],
        progress: ChunkProgress<'_>,
    ) -> Result<()> {
        self.calls.push(Call::Upload {
            remote_name: remote_name.to_string(),
            size: data.len() as u64,
        });
        if self.fail_upload.contains(remote_name) {
            return Err(Error::transfer(format!("upload of \"{remote_name}\" failed")));
        }

        let total = data.len() as u64;
        if total == 0 {
            progress(0, 0);
            return Ok(());
        }
        let step = if self.chunk_size == 0 { total } else { self.chunk_size };
        let mut sent = 0;
        while sent < total {
            sent = (sent + step).min(total);
            progress(sent, total);
        }
        Ok(())
    }

    async fn download(&mut self, remote_name: &str) -> Result<Vec<u8>> {
        self.calls.push(Call::Download {
            remote_name: remote_name.to_string(),
        });
        self.stored
            .get(remote_name)
            .cloned()
            .ok_or_else(|| Error::transfer(format!("no such file \"{remote_name}\"")))
    }

    async fn remove_file(&mut self, remote_name: &str) -> Result<()> {
        self.calls.push(Call::RemoveFile {
            remote_name: remote_name.to_string(),
        });
        if self.fail_remove.contains(remote_name) {
            return Err(Error::transfer(format!("remove of \"{remote_name}\" failed")));
        }
        Ok(())
    }

    async fn compile(&mut self, remote_name: &str) -> Result<()> {
        self.calls.push(Call::Compile {
            remote_name: remote_name.to_string(),
        });
        if self.fail_compile.contains(remote_name) {
            return Err(Error::compile(remote_name, "syntax error"));
        }
        Ok(())
    }

    async fn execute(&mut self, remote_name: &str) -> Result<String> {
        self.calls.push(Call::Execute {
            remote_name: remote_name.to_string(),
        });
        self.script_output
            .clone()
            .ok_or_else(|| Error::transfer(format!("cannot execute \"{remote_name}\"")))
    }

    async fn format(&mut self) -> Result<String> {
        self.calls.push(Call::Format);
        self.format_response
            .clone()
            .ok_or_else(|| Error::transfer("format rejected"))
    }

    async fn softreset(&mut self) -> Result<()> {
        self.calls.push(Call::SoftReset);
        if self.fail_softreset {
            return Err(Error::transfer("softreset rejected"));
        }
        Ok(())
    }

    async fn hardreset(&mut self) -> Result<()> {
        self.calls.push(Call::HardReset);
        if self.fail_hardreset {
            return Err(Error::transfer("hardreset rejected"));
        }
        Ok(())
    }

    async fn list_devices(&mut self, show_all: bool) -> Result<Vec<SerialDevice>> {
        self.calls.push(Call::ListDevices { show_all });
        if self.fail_list_devices {
            return Err(Error::enumeration("udev unavailable"));
        }
        Ok(self.devices.clone())
    }
}
