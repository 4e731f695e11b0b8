use crate::api::{ApiError, fetch_all_attendance, fetch_attendance_by_date, new_client};
use crate::app_config::AppConfig;
use crate::credentials::StoredCredentials;
use crate::domain::AttendanceRecord;
use chrono::NaiveDate;
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RecordsQuery {
    All,
    ByDate(NaiveDate),
}

#[instrument(skip(config, credentials))]
pub async fn search(config: &AppConfig, credentials: &StoredCredentials, query: RecordsQuery) -> Result<Vec<AttendanceRecord>, RecordsError> {
    let token = credentials.token().ok_or(RecordsError::MissingToken)?;
    let client = new_client(config, Some(token))?;

    let records = match query {
        RecordsQuery::All => fetch_all_attendance(&client, config).await?,
        RecordsQuery::ByDate(date) => fetch_attendance_by_date(&client, config, date).await?,
    };

    Ok(records)
}

/// One tab separated row: id, employee id, name, email, designation, work location, institute,
/// login time, type and remarks.
pub fn format_record(record: &AttendanceRecord) -> String {
    let employee = record.employee.as_ref();
    let field = |value: Option<&String>| value.map(String::as_str).unwrap_or("").to_string();

    [
        record.id.to_string(),
        field(employee.and_then(|e| e.employee_id.as_ref())),
        field(employee.and_then(|e| e.full_name.as_ref())),
        field(employee.and_then(|e| e.email.as_ref())),
        field(employee.and_then(|e| e.designation.as_ref())),
        field(employee.and_then(|e| e.work_location.as_ref())),
        field(record.institute.as_ref().and_then(|i| i.institute_name.as_ref())),
        record.login_time.map(|time| time.format("%Y-%m-%d %H:%M:%S").to_string()).unwrap_or_default(),
        field(record.attendance_type.as_ref()),
        record.remarks.clone().filter(|remarks| !remarks.is_empty()).unwrap_or_else(|| "N/A".to_string()),
    ]
    .join("\t")
}

#[derive(Error, Debug)]
pub enum RecordsError {
    #[error("Token not found. Please log in.")]
    MissingToken,
    #[error("failed to load attendance data: {0}")]
    Api(#[from] ApiError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::{EmployeeSummary, InstituteSummary};
    use chrono::NaiveDateTime;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use std::env::temp_dir;
    use tokio::fs;

    async fn credentials(name: &str, content: &str) -> StoredCredentials {
        let path = temp_dir().join(name);
        fs::write(&path, content).await.unwrap();
        StoredCredentials::load(&path.to_string_lossy()).await.unwrap()
    }

    #[tokio::test]
    async fn search_requires_a_token() {
        let config = AppConfigBuilder::new().build();

        let result = search(&config, &StoredCredentials::default(), RecordsQuery::All).await;

        assert!(matches!(result, Err(RecordsError::MissingToken)));
        assert_eq!(RecordsError::MissingToken.to_string(), "Token not found. Please log in.");
    }

    #[tokio::test]
    async fn search_by_date_sends_the_bearer_token() -> Result<(), RecordsError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/attendance/by-date")
            .match_query(Matcher::UrlEncoded("date".into(), "2026-10-19".into()))
            .match_header("authorization", "Bearer abc")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"id": 1}]"#)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().api_url(server.url()).build();
        let credentials = credentials("attendance_records_token.json", r#"{"token": "abc"}"#).await;
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let records = search(&config, &credentials, RecordsQuery::ByDate(date)).await?;

        mock.assert();
        assert_eq!(records.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn search_reports_an_api_failure() {
        let mut server = mockito::Server::new_async().await;

        server.mock("GET", "/attendance/getAll").with_status(401).create_async().await;

        let config = AppConfigBuilder::new().api_url(server.url()).build();
        let credentials = credentials("attendance_records_expired.json", r#"{"token": "expired"}"#).await;
        let result = search(&config, &credentials, RecordsQuery::All).await;

        assert!(matches!(result, Err(RecordsError::Api(_))));
    }

    #[test]
    fn format_record_fills_missing_remarks() {
        let record = AttendanceRecord {
            id: 3,
            employee: Some(EmployeeSummary {
                employee_id: Some("EMP7".to_string()),
                full_name: Some("Asha Rao".to_string()),
                email: None,
                designation: Some("Trainer".to_string()),
                work_location: None,
            }),
            institute: Some(InstituteSummary {
                institute_name: Some("NICT".to_string()),
            }),
            login_time: NaiveDateTime::parse_from_str("2026-10-19 09:12:33", "%Y-%m-%d %H:%M:%S").ok(),
            attendance_type: Some("Login".to_string()),
            remarks: None,
        };

        assert_eq!(
            format_record(&record),
            "3\tEMP7\tAsha Rao\t\tTrainer\t\tNICT\t2026-10-19 09:12:33\tLogin\tN/A"
        );
    }
}
