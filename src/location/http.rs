use crate::domain::Coordinates;
use crate::location::{LocationError, LocationSensor, Position};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct PositionResponse {
    #[serde(flatten)]
    coordinates: Coordinates,
    accuracy: Option<f64>,
}

/// Reads the position from a local position service, such as a GPS daemon's HTTP endpoint.
#[derive(Debug)]
pub struct HttpLocationSensor {
    client: Client,
    url: String,
}

impl HttpLocationSensor {
    pub fn new(client: Client, url: String) -> Self {
        HttpLocationSensor { client, url }
    }
}

#[async_trait]
impl LocationSensor for HttpLocationSensor {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn current_position(&self) -> Result<Position, LocationError> {
        let response = self.client.get(&self.url).send().await?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(LocationError::PermissionDenied),
            status if !status.is_success() => return Err(LocationError::Unavailable(format!("position service answered {}", status))),
            _ => {}
        }

        let position = response.json::<PositionResponse>().await?;
        debug!(accuracy = ?position.accuracy, "📍 Read position {:?}", position.coordinates);

        Ok(Position {
            coordinates: position.coordinates,
            accuracy: position.accuracy,
        })
    }
}
