//! Connection lifecycle
//!
//! Every device-facing operation opens exactly one session, performs
//! its work, and releases the session on every exit path. Sessions are
//! never pooled or shared between operations.

use mcuflash_core::prelude::*;

use crate::connector::Connector;
use crate::options::SessionOptions;

/// One open logical connection, bound to a single operation.
///
/// Borrows the connector exclusively for the operation's duration, so
/// two operations cannot interleave commands on the half-duplex link.
pub struct Session<'c, C: Connector> {
    connector: &'c mut C,
}

impl<'c, C: Connector> Session<'c, C> {
    /// Open the transport and run the handshake.
    ///
    /// On success, logs the connectivity confirmation and the device
    /// banner. On failure, logs a diagnostic and re-raises; the caller
    /// aborts before any device-mutating call.
    pub async fn open(connector: &'c mut C, options: &SessionOptions) -> Result<Session<'c, C>> {
        match connector
            .connect(&options.device, options.baud_rate, options.connect_delay_ms)
            .await
        {
            Ok(banner) => {
                info!("Connected");
                info!(target: "device", "{banner}");
                Ok(Self { connector })
            }
            Err(e) => {
                error!("Unable to establish connection");
                Err(e)
            }
        }
    }

    /// Access the connector for protocol calls within this session.
    pub fn connector(&mut self) -> &mut C {
        self.connector
    }

    /// Release the session.
    ///
    /// A failed disconnect is logged at warn level and swallowed; the
    /// operation's own result takes precedence over teardown noise.
    pub async fn close(self) {
        if let Err(e) = self.connector.disconnect().await {
            warn!("Disconnect failed: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{Call, FakeConnector};

    #[tokio::test]
    async fn test_open_connects_with_options() {
        let mut connector = FakeConnector::new();
        let options = SessionOptions {
            device: "/dev/ttyACM0".to_string(),
            baud_rate: 9600,
            connect_delay_ms: 250,
        };

        let session = Session::open(&mut connector, &options).await.unwrap();
        session.close().await;

        assert_eq!(
            connector.calls,
            vec![
                Call::Connect {
                    device: "/dev/ttyACM0".to_string(),
                    baud_rate: 9600,
                    connect_delay_ms: 250,
                },
                Call::Disconnect,
            ]
        );
    }

    #[tokio::test]
    async fn test_open_failure_reraises_without_disconnect() {
        let mut connector = FakeConnector::new();
        connector.fail_connect = true;

        let result = Session::open(&mut connector, &SessionOptions::default()).await;

        assert!(matches!(result, Err(Error::Connection { .. })));
        assert!(!connector.calls.contains(&Call::Disconnect));
    }

    #[tokio::test]
    async fn test_close_swallows_disconnect_failure() {
        let mut connector = FakeConnector::new();
        connector.fail_disconnect = true;

        let session = Session::open(&mut connector, &SessionOptions::default())
            .await
            .unwrap();
        // Must not panic or propagate
        session.close().await;

        assert_eq!(connector.calls.last(), Some(&Call::Disconnect));
    }
}
