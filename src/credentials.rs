use serde::Deserialize;
use std::io;
use thiserror::Error;
use tokio::fs;
use tracing::{debug, instrument};

/// What the login view left in client-side storage. This side only ever reads it.
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredCredentials {
    employee_id: Option<String>,
    token: Option<String>,
}

impl StoredCredentials {
    #[instrument]
    pub async fn load(path: &str) -> Result<Self, CredentialsError> {
        let content = match fs::read_to_string(path).await {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("🔑 No stored credentials at '{}'", path);
                return Ok(StoredCredentials::default());
            }
            Err(e) => return Err(CredentialsError::Io(e)),
        };

        Ok(serde_json::from_str(&content)?)
    }

    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref().filter(|id| !id.trim().is_empty())
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref().filter(|token| !token.trim().is_empty())
    }
}

#[derive(Error, Debug)]
pub enum CredentialsError {
    #[error("unable to read the stored credentials: {0}")]
    Io(#[from] io::Error),
    #[error("stored credentials are not valid: {0}")]
    Invalid(#[from] serde_json::Error),
}
