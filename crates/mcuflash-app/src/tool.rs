//! Per-invocation orchestrator

use mcuflash_link::{Connector, SessionOptions, SessionOverrides};

use crate::output::{OutputHandler, OutputSink};

/// One orchestrator per process invocation.
///
/// Owns the connector, the merged session options, and the primary
/// output sink. Operations live in [`crate::commands`]; each one opens
/// its own session and releases it before returning.
pub struct DeviceTool<C: Connector> {
    pub(crate) connector: C,
    pub(crate) options: SessionOptions,
    pub(crate) sink: OutputSink,
}

impl<C: Connector> DeviceTool<C> {
    /// Build a tool around a connector with default options and a
    /// stdout output sink.
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            options: SessionOptions::default(),
            sink: OutputSink::stdout(),
        }
    }

    /// Merge caller overrides into the session options. Zero or empty
    /// override values keep the current settings.
    pub fn set_options(&mut self, overrides: SessionOverrides) {
        self.options = self.options.clone().merge(overrides);
    }

    /// Current session options.
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Install the primary output handler. Last registration wins.
    pub fn on_output(&mut self, handler: OutputHandler) {
        self.sink.set_handler(handler);
    }

    /// Access the connector, e.g. to inspect a test double after an
    /// operation completed.
    pub fn connector(&self) -> &C {
        &self.connector
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcuflash_link::test_utils::FakeConnector;

    #[test]
    fn test_set_options_merges_truthy_only() {
        let mut tool = DeviceTool::new(FakeConnector::new());

        tool.set_options(SessionOverrides {
            device: Some("/dev/ttyACM2".to_string()),
            baud_rate: Some(0),
            connect_delay_ms: None,
        });

        assert_eq!(tool.options().device, "/dev/ttyACM2");
        assert_eq!(tool.options().baud_rate, 115_200);
    }

    #[test]
    fn test_set_options_applies_repeatedly() {
        let mut tool = DeviceTool::new(FakeConnector::new());

        tool.set_options(SessionOverrides {
            baud_rate: Some(9600),
            ..Default::default()
        });
        tool.set_options(SessionOverrides {
            connect_delay_ms: Some(500),
            ..Default::default()
        });

        assert_eq!(tool.options().baud_rate, 9600);
        assert_eq!(tool.options().connect_delay_ms, 500);
    }
}
