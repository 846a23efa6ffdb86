pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod transport;
pub mod utils;

use crate::config::TransportMode;
use crate::services::{door_service::DoorService, user_service::UserService};
use crate::transport::{ControllerTransport, NetworkTransport, SerialTransport};
use reqwest::Client;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub user_service: UserService,
    pub door_service: DoorService,
    pub transport: Arc<dyn ControllerTransport>,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let config = crate::config::get_config();

        let transport: Arc<dyn ControllerTransport> = match config.controller_transport {
            TransportMode::Network => {
                let http_client = Client::builder()
                    .timeout(std::time::Duration::from_secs(3))
                    .build()
                    .unwrap();
                Arc::new(NetworkTransport::new(http_client))
            }
            TransportMode::Serial => Arc::new(SerialTransport::new(
                config.serial_port.clone(),
                config.baud_rate,
            )),
        };

        let user_service = UserService::new(pool.clone());
        let door_service = DoorService::new(pool.clone());

        Self {
            pool,
            user_service,
            door_service,
            transport,
        }
    }
}
