use crate::api::ApiError;
use crate::app_config::AppConfig;
use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct Total {
    total: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeeklyReportEntry {
    pub date: NaiveDate,
    #[serde(default)]
    pub present: u64,
    #[serde(default)]
    pub absent: u64,
}

/// Fetches a `{ "total": n }` figure, a missing total counts as zero.
#[instrument(skip(client, config))]
pub async fn fetch_total(client: &Client, config: &AppConfig, path: &str) -> Result<u64, ApiError> {
    let total = client
        .get(format!("{}{}", config.api().url(), path))
        .send()
        .await?
        .error_for_status()?
        .json::<Total>()
        .await?;
    debug!(total = ?total.total, "Retrieved total for {}", path);

    Ok(total.total.unwrap_or_default())
}

#[instrument(skip(client, config))]
pub async fn fetch_absent_today(client: &Client, config: &AppConfig) -> Result<u64, ApiError> {
    let absent = client
        .get(format!("{}/attendance/absent-today", config.api().url()))
        .send()
        .await?
        .error_for_status()?
        .json::<Option<u64>>()
        .await?;

    Ok(absent.unwrap_or_default())
}

#[instrument(skip(client, config))]
pub async fn fetch_weekly_report(client: &Client, config: &AppConfig) -> Result<Vec<WeeklyReportEntry>, ApiError> {
    let entries = client
        .get(format!("{}/admin/weekly-report", config.api().url()))
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<WeeklyReportEntry>>()
        .await?;

    Ok(entries)
}
