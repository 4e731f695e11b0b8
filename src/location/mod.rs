mod fixed;
mod http;

use crate::app_config::{AppConfig, SensorKind};
use crate::domain::Coordinates;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

pub use fixed::FixedLocationSensor;
pub use http::HttpLocationSensor;

/// A single reading of the device's position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub coordinates: Coordinates,
    /// In meters, when the sensor reports it
    pub accuracy: Option<f64>,
}

/// One-shot position source, there is no continuous tracking.
#[async_trait]
pub trait LocationSensor: Debug + Send + Sync {
    async fn current_position(&self) -> Result<Position, LocationError>;
}

#[derive(Error, Debug)]
pub enum LocationError {
    #[error("location access was denied")]
    PermissionDenied,
    #[error("location is unavailable: {0}")]
    Unavailable(String),
    #[error("location request error: {0}")]
    RequestError(#[from] reqwest::Error),
}

pub fn new_sensor(config: &AppConfig, client: Client) -> Result<Arc<dyn LocationSensor>, LocationError> {
    match config.location().sensor() {
        SensorKind::Fixed => {
            let position = config
                .location()
                .fixed_position()
                .ok_or_else(|| LocationError::Unavailable("the fixed sensor needs both a latitude and a longitude".to_string()))?;
            Ok(Arc::new(FixedLocationSensor::new(position)))
        }
        SensorKind::Http => {
            let url = config
                .location()
                .url()
                .ok_or_else(|| LocationError::Unavailable("the http sensor needs a url".to_string()))?;
            Ok(Arc::new(HttpLocationSensor::new(client, url.to_string())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;

    #[test]
    fn new_sensor_creates_the_configured_sensor() -> Result<(), LocationError> {
        let fixed = new_sensor(&AppConfigBuilder::new().build(), Client::new())?;
        let http = new_sensor(&AppConfigBuilder::new().location_url("http://localhost/position".to_string()).build(), Client::new())?;

        assert!(format!("{:?}", fixed).starts_with("FixedLocationSensor"));
        assert!(format!("{:?}", http).starts_with("HttpLocationSensor"));

        Ok(())
    }
}
