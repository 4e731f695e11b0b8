use crate::domain::Coordinates;
use config::{Config, ConfigError};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    api: Api,
    scanner: Scanner,
    location: Location,
    routes: Routes,
    credentials: Credentials,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::with_prefix("ATTENDANCE").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn api(&self) -> &Api {
        &self.api
    }

    pub fn scanner(&self) -> &Scanner {
        &self.scanner
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn routes(&self) -> &Routes {
        &self.routes
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[derive(Debug, Deserialize)]
pub struct Api {
    url: String,
    #[serde(with = "humantime_serde")]
    request_timeout: Duration,
}

impl Api {
    /// Base url of the attendance API, without a trailing slash.
    pub fn url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Scanner {
    #[serde(with = "humantime_serde")]
    reset_delay: Duration,
    coordinate_precision: usize,
}

impl Scanner {
    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    pub fn coordinate_precision(&self) -> usize {
        self.coordinate_precision
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Fixed,
    Http,
}

#[derive(Debug, Deserialize)]
pub struct Location {
    sensor: SensorKind,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
    latitude: Option<f64>,
    longitude: Option<f64>,
    url: Option<String>,
}

impl Location {
    pub fn sensor(&self) -> SensorKind {
        self.sensor
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// The configured position of a fixed kiosk, if both components are set.
    pub fn fixed_position(&self) -> Option<Coordinates> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Coordinates { latitude, longitude }),
            _ => None,
        }
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }
}

#[derive(Debug, Deserialize)]
pub struct Routes {
    check_in: String,
    check_out: String,
}

impl Routes {
    pub fn check_in(&self) -> &str {
        &self.check_in
    }

    /// Route template, `{employee_id}` and `{institute_id}` are substituted on navigation.
    pub fn check_out(&self) -> &str {
        &self.check_out
    }
}

#[derive(Debug, Deserialize)]
pub struct Credentials {
    path: String,
}

impl Credentials {
    pub fn path(&self) -> &str {
        &self.path
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                api: Api {
                    url: "https://attendance.url/api".to_string(),
                    request_timeout: Duration::from_secs(10),
                },
                scanner: Scanner {
                    reset_delay: Duration::from_secs(5),
                    coordinate_precision: 6,
                },
                location: Location {
                    sensor: SensorKind::Fixed,
                    timeout: Duration::from_secs(10),
                    latitude: Some(12.345678),
                    longitude: Some(77.123456),
                    url: None,
                },
                routes: Routes {
                    check_in: "/login-success".to_string(),
                    check_out: "/remark/{employee_id}/{institute_id}".to_string(),
                },
                credentials: Credentials {
                    path: "session.json".to_string(),
                },
            },
        }
    }

    pub fn api_url(mut self, url: String) -> Self {
        self.config.api.url = url;
        self
    }

    pub fn request_timeout(mut self, request_timeout: Duration) -> Self {
        self.config.api.request_timeout = request_timeout;
        self
    }

    pub fn location_url(mut self, url: String) -> Self {
        self.config.location.sensor = SensorKind::Http;
        self.config.location.url = Some(url);
        self
    }

    pub fn credentials_path(mut self, path: String) -> Self {
        self.config.credentials.path = path;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
