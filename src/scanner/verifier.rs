use crate::domain::Coordinates;
use crate::location::{LocationSensor, Position};
use crate::scanner::ScanError;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

/// Gates a scan on the device being at the institute. Positions are compared component-wise after
/// rounding, there is no radius.
#[derive(Debug)]
pub struct LocationVerifier {
    sensor: Arc<dyn LocationSensor>,
    timeout: Duration,
    precision: usize,
}

impl LocationVerifier {
    pub fn new(sensor: Arc<dyn LocationSensor>, timeout: Duration, precision: usize) -> Self {
        LocationVerifier { sensor, timeout, precision }
    }

    #[instrument(skip(self))]
    pub async fn verify(&self, target: &Coordinates) -> Result<Position, ScanError> {
        info!("📍 Verifying location...");

        let position = match timeout(self.timeout, self.sensor.current_position()).await {
            Ok(Ok(position)) => position,
            Ok(Err(e)) => {
                warn!("📍 Verifying location... failed, {}", e);
                return Err(ScanError::LocationUnavailable(e.to_string()));
            }
            Err(_) => {
                warn!("📍 Verifying location... failed, no position within {:?}", self.timeout);
                return Err(ScanError::LocationUnavailable(format!("no position within {:?}", self.timeout)));
            }
        };

        if !position.coordinates.matches(target, self.precision) {
            info!(accuracy = ?position.accuracy, "📍 Verifying location... mismatch, device is at {:?}", position.coordinates);
            return Err(ScanError::LocationMismatch {
                device: position.coordinates,
                target: *target,
            });
        }

        info!("📍 Verifying location... OK");
        Ok(position)
    }
}
