use super::{ControllerTransport, TransportError};
use crate::models::door::DoorStatus;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

/// Writes commands to a fixed serial device, opening and closing the handle
/// per call. The underlying line has no multiplexing, so a process-wide
/// mutex keeps concurrent writes from interleaving.
pub struct SerialTransport {
    port: String,
    baud_rate: u32,
    line: Arc<Mutex<()>>,
}

impl SerialTransport {
    pub fn new(port: String, baud_rate: u32) -> Self {
        Self {
            port,
            baud_rate,
            line: Arc::new(Mutex::new(())),
        }
    }
}

#[async_trait]
impl ControllerTransport for SerialTransport {
    async fn send_command(&self, _target: &str, command: &str) -> Result<String, TransportError> {
        // Held across the whole open-write-close cycle.
        let _line = self.line.lock().await;

        let port = self.port.clone();
        let baud_rate = self.baud_rate;
        let payload = command.as_bytes().to_vec();

        tokio::task::spawn_blocking(move || {
            let mut handle = tokio_serial::new(port.as_str(), baud_rate)
                .timeout(Duration::from_secs(1))
                .open()
                .map_err(|e| TransportError(e.to_string()))?;
            handle
                .write_all(&payload)
                .map_err(|e| TransportError(e.to_string()))
        })
        .await
        .map_err(|e| TransportError(e.to_string()))??;

        Ok(format!("Command '{}' sent successfully!", command))
    }

    fn toggle_command(&self, requested: Option<&str>, new_status: DoorStatus) -> String {
        match requested {
            Some(command) => command.to_string(),
            None => match new_status {
                DoorStatus::Open => "ON".to_string(),
                DoorStatus::Closed => "OFF".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_defaults_follow_the_new_status() {
        let transport = SerialTransport::new("/dev/ttyUSB0".to_string(), 9600);
        assert_eq!(transport.toggle_command(None, DoorStatus::Open), "ON");
        assert_eq!(transport.toggle_command(None, DoorStatus::Closed), "OFF");
    }

    #[test]
    fn caller_command_overrides_the_default() {
        let transport = SerialTransport::new("/dev/ttyUSB0".to_string(), 9600);
        assert_eq!(
            transport.toggle_command(Some("abrir"), DoorStatus::Open),
            "abrir"
        );
    }

    #[tokio::test]
    async fn missing_device_reports_a_transport_error() {
        let transport = SerialTransport::new("/dev/does-not-exist".to_string(), 9600);
        let err = transport.send_command("", "ON").await.unwrap_err();
        assert!(err.to_string().contains("Error communicating with the Arduino"));
    }
}
