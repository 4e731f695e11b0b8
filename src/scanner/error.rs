use crate::api::ApiError;
use crate::domain::Coordinates;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("malformed QR payload: {0}")]
    MalformedPayload(String),
    #[error("location unavailable: {0}")]
    LocationUnavailable(String),
    #[error("device at {device:?} is not at the institute location {target:?}")]
    LocationMismatch { device: Coordinates, target: Coordinates },
    #[error("institute '{0}' not found")]
    InstituteNotFound(String),
    #[error("institute lookup failed: {0}")]
    InstituteLookupFailed(ApiError),
    #[error("attendance submission failed: {0}")]
    SubmissionFailed(ApiError),
    #[error("unrecognized attendance type '{0}'")]
    UnrecognizedOutcome(String),
}

impl ScanError {
    /// Failures caused by the device or the network rather than by the QR code itself.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ScanError::LocationUnavailable(_) | ScanError::InstituteLookupFailed(_) | ScanError::SubmissionFailed(_)
        )
    }

    /// The message shown to the person at the scanner.
    pub fn user_message(&self) -> String {
        let message = match self {
            ScanError::MalformedPayload(_) => "Invalid QR code format.",
            ScanError::LocationUnavailable(_) => "Unable to access your location.",
            ScanError::LocationMismatch { .. } => "❌ You must be exactly at the institute's location.",
            ScanError::InstituteNotFound(_) => "Institute not found.",
            ScanError::InstituteLookupFailed(_) => "Could not fetch institute ID.",
            ScanError::SubmissionFailed(_) => "Could not mark attendance.",
            ScanError::UnrecognizedOutcome(_) => "Unknown attendance type received.",
        };

        if self.is_transient() {
            format!("{} Please try again.", message)
        } else {
            message.to_string()
        }
    }
}
