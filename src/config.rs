use crate::error::{Error, Result};
use dotenvy::dotenv;
use std::env;
use std::sync::OnceLock;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportMode {
    Network,
    Serial,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_address: String,
    pub database_url: String,
    pub controller_transport: TransportMode,
    pub serial_port: String,
    pub baud_rate: u32,
    /// Default controller address for the direct command routes; per-door
    /// targets live on the door rows.
    pub arduino_ip: Option<String>,
}

pub static CONFIG: OnceLock<Config> = OnceLock::new();

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        Ok(Self {
            server_address: get_env("SERVER_ADDRESS")?,
            database_url: get_env("DATABASE_URL")?,
            controller_transport: parse_transport(&get_env_or(
                "CONTROLLER_TRANSPORT",
                "network",
            ))?,
            serial_port: get_env_or("SERIAL_PORT", "/dev/ttyUSB0"),
            baud_rate: get_env_parse_or("BAUD_RATE", 9600)?,
            arduino_ip: env::var("ARDUINO_IP").ok(),
        })
    }
}

fn get_env(name: &str) -> Result<String> {
    env::var(name).map_err(|_| Error::Config(format!("Missing environment variable: {}", name)))
}

fn get_env_or(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

fn get_env_parse_or<T>(name: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| Error::Config(format!("Invalid value for {}: {}", name, e))),
        Err(_) => Ok(default),
    }
}

fn parse_transport(raw: &str) -> Result<TransportMode> {
    match raw {
        "network" => Ok(TransportMode::Network),
        "serial" => Ok(TransportMode::Serial),
        other => Err(Error::Config(format!(
            "Unknown CONTROLLER_TRANSPORT '{}': expected 'network' or 'serial'",
            other
        ))),
    }
}

pub fn init_config() -> Result<()> {
    let config = Config::from_env()?;
    CONFIG
        .set(config)
        .map_err(|_| Error::Config("Configuration has already been initialized".to_string()))?;
    Ok(())
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}
