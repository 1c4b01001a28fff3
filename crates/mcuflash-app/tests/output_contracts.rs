//! Output sink contracts: fsinfo formats, device listings, script
//! output framing.

use std::sync::{Arc, Mutex};

use mcuflash_app::{DeviceTool, ListFormat};
use mcuflash_core::{FlashInfo, RemoteFile, SerialDevice};
use mcuflash_link::test_utils::{Call, FakeConnector};
use mcuflash_link::Connector;
use serde_json::Value;

/// Route the tool's primary output into a shared buffer.
fn capture_output<C: Connector>(tool: &mut DeviceTool<C>) -> Arc<Mutex<Vec<String>>> {
    let lines: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
    let sink_lines = lines.clone();
    tool.on_output(Box::new(move |line| {
        sink_lines.lock().unwrap().push(line.to_string())
    }));
    lines
}

fn inventory() -> (FlashInfo, Vec<RemoteFile>) {
    (
        FlashInfo::new(3_356_672, 3_310_592),
        vec![
            RemoteFile::new("init.lua", 512),
            RemoteFile::new("config.lua", 128),
            RemoteFile::new("data.json", 2048),
        ],
    )
}

#[tokio::test]
async fn test_fsinfo_raw_is_one_name_per_line() {
    let (info, files) = inventory();
    let mut tool = DeviceTool::new(FakeConnector::new().with_files(info, files));
    let lines = capture_output(&mut tool);

    tool.fsinfo(ListFormat::Raw).await.unwrap();

    assert_eq!(
        *lines.lock().unwrap(),
        vec!["init.lua", "config.lua", "data.json"]
    );
}

#[tokio::test]
async fn test_fsinfo_raw_empty_store_emits_nothing() {
    let mut tool = DeviceTool::new(FakeConnector::new());
    let lines = capture_output(&mut tool);

    tool.fsinfo(ListFormat::Raw).await.unwrap();

    assert!(lines.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_fsinfo_json_structure() {
    let (info, files) = inventory();
    let mut tool = DeviceTool::new(FakeConnector::new().with_files(info, files));
    let lines = capture_output(&mut tool);

    tool.fsinfo(ListFormat::Json).await.unwrap();

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1);

    let parsed: Value = serde_json::from_str(&lines[0]).unwrap();
    let file_entries = parsed["files"].as_array().unwrap();
    assert_eq!(file_entries.len(), 3);
    assert_eq!(file_entries[0]["name"], "init.lua");
    assert_eq!(file_entries[0]["sizeBytes"], 512);
    assert_eq!(parsed["meta"]["totalBytes"], 3_356_672);
    assert_eq!(parsed["meta"]["remainingBytes"], 3_310_592);
}

#[tokio::test]
async fn test_fsinfo_human_keeps_sink_clean() {
    let (info, files) = inventory();
    let mut tool = DeviceTool::new(FakeConnector::new().with_files(info, files));
    let lines = capture_output(&mut tool);

    tool.fsinfo(ListFormat::Human).await.unwrap();

    // human rendering is diagnostics only; the sink stays empty
    assert!(lines.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_fsinfo_zero_files_is_not_an_error() {
    let mut tool = DeviceTool::new(FakeConnector::new());
    assert!(tool.fsinfo(ListFormat::Human).await.is_ok());
    assert!(tool.connector().sessions_balanced());
}

#[tokio::test]
async fn test_devices_json_emits_raw_list() {
    let devices = vec![
        SerialDevice {
            port_id: "/dev/ttyUSB0".to_string(),
            manufacturer: "Silicon Labs".to_string(),
            hardware_id: "usb-10c4:ea60".to_string(),
        },
        SerialDevice {
            port_id: "/dev/ttyUSB1".to_string(),
            manufacturer: "wch.cn".to_string(),
            hardware_id: "usb-1a86:7523".to_string(),
        },
    ];
    let mut tool = DeviceTool::new(FakeConnector::new().with_devices(devices));
    let lines = capture_output(&mut tool);

    tool.devices(false, true).await.unwrap();

    let lines = lines.lock().unwrap();
    assert_eq!(lines.len(), 1);
    let parsed: Value = serde_json::from_str(&lines[0]).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
    assert_eq!(parsed[0]["portId"], "/dev/ttyUSB0");
    assert_eq!(parsed[1]["hardwareId"], "usb-1a86:7523");
}

#[tokio::test]
async fn test_devices_human_listing_keeps_sink_clean() {
    let devices = vec![SerialDevice {
        port_id: "/dev/ttyUSB0".to_string(),
        manufacturer: "Silicon Labs".to_string(),
        hardware_id: "usb-10c4:ea60".to_string(),
    }];
    let mut tool = DeviceTool::new(FakeConnector::new().with_devices(devices));
    let lines = capture_output(&mut tool);

    tool.devices(false, false).await.unwrap();

    assert!(lines.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_devices_runs_without_a_session() {
    let mut tool = DeviceTool::new(FakeConnector::new());
    tool.devices(true, false).await.unwrap();

    assert_eq!(
        tool.connector().calls,
        vec![Call::ListDevices { show_all: true }]
    );
}

#[tokio::test]
async fn test_devices_enumeration_failure_does_not_propagate() {
    let mut connector = FakeConnector::new();
    connector.fail_list_devices = true;
    let mut tool = DeviceTool::new(connector);
    let lines = capture_output(&mut tool);

    // reported as an alert, swallowed locally
    assert!(tool.devices(false, true).await.is_ok());
    assert!(lines.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_run_relays_raw_output_through_sink() {
    let mut connector = FakeConnector::new();
    connector.script_output = Some("sensor: 42\ndone".to_string());
    let mut tool = DeviceTool::new(connector);
    let lines = capture_output(&mut tool);

    tool.run("main.lc").await.unwrap();

    // raw output only; framing markers stay on the diagnostic stream
    assert_eq!(*lines.lock().unwrap(), vec!["sensor: 42\ndone"]);
    assert_eq!(
        tool.connector()
            .count(|c| matches!(c, Call::Execute { .. })),
        1
    );
    assert!(tool.connector().sessions_balanced());
}

#[tokio::test]
async fn test_run_failure_emits_nothing() {
    let mut connector = FakeConnector::new();
    connector.script_output = None;
    let mut tool = DeviceTool::new(connector);
    let lines = capture_output(&mut tool);

    assert!(tool.run("ghost.lc").await.is_err());
    assert!(lines.lock().unwrap().is_empty());
    assert!(tool.connector().sessions_balanced());
}
