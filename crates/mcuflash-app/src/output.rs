//! Primary output channel
//!
//! Command payloads (file lists, script output, JSON blobs) go through
//! this sink; diagnostics go through `tracing` to stderr. The two
//! streams have different consumers and must never mix: a shell script
//! piping `fsinfo raw` relies on stdout carrying file names only.

/// Installed handler for primary output lines.
pub type OutputHandler = Box<dyn FnMut(&str) + Send>;

/// Single-consumer sink for primary command output.
pub struct OutputSink {
    handler: OutputHandler,
}

impl OutputSink {
    /// Sink printing to stdout, the default consumer.
    pub fn stdout() -> Self {
        Self {
            handler: Box::new(|line| println!("{line}")),
        }
    }

    /// Replace the handler. The previous handler is dropped; last
    /// registration wins.
    pub fn set_handler(&mut self, handler: OutputHandler) {
        self.handler = handler;
    }

    /// Emit one line of primary output.
    pub fn write(&mut self, line: &str) {
        (self.handler)(line);
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::stdout()
    }
}

impl std::fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OutputSink")
            .field("handler", &"<handler>")
            .finish()
    }
}
