pub mod network;
pub mod serial;

pub use network::NetworkTransport;
pub use serial::SerialTransport;

use crate::models::door::DoorStatus;
use async_trait::async_trait;

#[derive(Debug, thiserror::Error)]
#[error("Error communicating with the Arduino: {0}")]
pub struct TransportError(pub String);

/// One outbound command to a physical controller. A single attempt per
/// invocation; no retries, no backoff.
#[async_trait]
pub trait ControllerTransport: Send + Sync {
    /// `target` is the door's controller address; the serial variant ignores
    /// it because one physical line serves the whole process.
    async fn send_command(&self, target: &str, command: &str) -> Result<String, TransportError>;

    /// The command the toggle route sends for this transport, given an
    /// optional caller override and the status the door is moving to.
    fn toggle_command(&self, requested: Option<&str>, new_status: DoorStatus) -> String;
}
