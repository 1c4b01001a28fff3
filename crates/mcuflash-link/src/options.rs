//! Session configuration with caller overrides

use serde::{Deserialize, Serialize};

/// Default serial device connected to the microcontroller
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// Default serial port baud rate
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Immutable per-invocation session configuration
///
/// Created once per process invocation from defaults merged with
/// caller overrides; see [`SessionOptions::merge`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Serial device the microcontroller is attached to
    pub device: String,

    /// Serial port baud rate
    pub baud_rate: u32,

    /// Delay after opening the connection, in milliseconds, for boards
    /// that need time to settle before the handshake
    pub connect_delay_ms: u64,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            baud_rate: DEFAULT_BAUD_RATE,
            connect_delay_ms: 0,
        }
    }
}

/// Caller-supplied overrides; unset fields keep their current values
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SessionOverrides {
    pub device: Option<String>,
    pub baud_rate: Option<u32>,
    pub connect_delay_ms: Option<u64>,
}

impl SessionOptions {
    /// Merge caller overrides into this configuration.
    ///
    /// An override only wins when it carries a usable value: `None`,
    /// an empty device string, and a zero baud rate or delay all keep
    /// the current value. Callers passing a zero/empty field are
    /// saying "not provided", not "set to zero".
    pub fn merge(mut self, overrides: SessionOverrides) -> Self {
        if let Some(device) = overrides.device.filter(|d| !d.is_empty()) {
            self.device = device;
        }
        if let Some(baud_rate) = overrides.baud_rate.filter(|b| *b != 0) {
            self.baud_rate = baud_rate;
        }
        if let Some(delay) = overrides.connect_delay_ms.filter(|d| *d != 0) {
            self.connect_delay_ms = delay;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = SessionOptions::default();
        assert_eq!(options.device, "/dev/ttyUSB0");
        assert_eq!(options.baud_rate, 115_200);
        assert_eq!(options.connect_delay_ms, 0);
    }

    #[test]
    fn test_merge_truthy_overrides_win() {
        let options = SessionOptions::default().merge(SessionOverrides {
            device: Some("/dev/ttyACM1".to_string()),
            baud_rate: Some(9600),
            connect_delay_ms: Some(300),
        });

        assert_eq!(options.device, "/dev/ttyACM1");
        assert_eq!(options.baud_rate, 9600);
        assert_eq!(options.connect_delay_ms, 300);
    }

    #[test]
    fn test_merge_none_keeps_defaults() {
        let options = SessionOptions::default().merge(SessionOverrides::default());
        assert_eq!(options, SessionOptions::default());
    }

    #[test]
    fn test_merge_falsy_overrides_discarded() {
        // Zero and empty-string overrides are "not provided", never
        // replacements.
        let options = SessionOptions::default().merge(SessionOverrides {
            device: Some(String::new()),
            baud_rate: Some(0),
            connect_delay_ms: Some(0),
        });

        assert_eq!(options, SessionOptions::default());
    }

    #[test]
    fn test_merge_partial_override() {
        let options = SessionOptions::default().merge(SessionOverrides {
            device: None,
            baud_rate: Some(74_880),
            connect_delay_ms: None,
        });

        assert_eq!(options.device, "/dev/ttyUSB0");
        assert_eq!(options.baud_rate, 74_880);
    }

    #[test]
    fn test_overrides_deserialize_missing_fields() {
        let overrides: SessionOverrides =
            serde_json::from_str(r#"{"baud_rate": 57600}"#).unwrap();
        assert_eq!(overrides.baud_rate, Some(57_600));
        assert!(overrides.device.is_none());
    }
}
