use crate::app_config::AppConfig;
use reqwest::header::HeaderValue;
use reqwest::{Client, header};
use thiserror::Error;

/// Builds the client for the attendance API. Admin calls pass the session token, which is sent as a
/// bearer token on every request, the scan flow does not need one.
pub fn new_client(config: &AppConfig, token: Option<&str>) -> Result<Client, ApiError> {
    let mut headers = header::HeaderMap::new();
    if let Some(token) = token {
        let mut authorization_value = HeaderValue::from_str(&format!("Bearer {}", token))?;
        authorization_value.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, authorization_value);
    }

    let client = Client::builder()
        .timeout(config.api().request_timeout())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request error: {0}")]
    RequestError(#[from] reqwest::Error),
    #[error("attendance client set an invalid header value: {0}")]
    InvalidHeaderValue(#[from] header::InvalidHeaderValue),
    #[error("resource not found")]
    NotFound,
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),
}
