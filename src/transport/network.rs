use super::{ControllerTransport, TransportError};
use crate::models::door::DoorStatus;
use async_trait::async_trait;
use reqwest::Client;

/// Sends commands as `GET http://{target}/{command}`. The client carries the
/// fixed 3 second timeout; any failure or non-success status collapses into
/// one `TransportError`.
pub struct NetworkTransport {
    client: Client,
}

impl NetworkTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ControllerTransport for NetworkTransport {
    async fn send_command(&self, target: &str, command: &str) -> Result<String, TransportError> {
        if target.is_empty() {
            return Err(TransportError(
                "no controller address configured".to_string(),
            ));
        }

        let url = format!("http://{}/{}", target, command);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError(format!("controller returned {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| TransportError(e.to_string()))
    }

    fn toggle_command(&self, _requested: Option<&str>, _new_status: DoorStatus) -> String {
        "toggle".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_always_sends_the_fixed_command() {
        let transport = NetworkTransport::new(Client::new());
        assert_eq!(transport.toggle_command(None, DoorStatus::Open), "toggle");
        assert_eq!(
            transport.toggle_command(Some("abrir"), DoorStatus::Closed),
            "toggle"
        );
    }

    #[tokio::test]
    async fn empty_target_is_rejected_before_any_request() {
        let transport = NetworkTransport::new(Client::new());
        let err = transport.send_command("", "toggle").await.unwrap_err();
        assert!(err.to_string().contains("no controller address"));
    }
}
