use crate::domain::Coordinates;
use crate::location::{LocationError, LocationSensor, Position};
use async_trait::async_trait;

/// Reports the configured position of a kiosk that never moves.
#[derive(Debug)]
pub struct FixedLocationSensor {
    position: Coordinates,
}

impl FixedLocationSensor {
    pub fn new(position: Coordinates) -> Self {
        FixedLocationSensor { position }
    }
}

#[async_trait]
impl LocationSensor for FixedLocationSensor {
    async fn current_position(&self) -> Result<Position, LocationError> {
        Ok(Position {
            coordinates: self.position,
            accuracy: None,
        })
    }
}
