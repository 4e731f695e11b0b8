use crate::api::ApiError;
use crate::app_config::AppConfig;
use crate::domain::{AttendanceRecord, InstituteId};
use chrono::NaiveDate;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MarkAttendanceRequest<'a> {
    employee_id: &'a str,
    institute_id: &'a InstituteId,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendanceResponse {
    pub attendance_type: Option<String>,
}

/// Records attendance for the employee at the institute. Whether this is a check-in or a check-out
/// is decided by the server.
#[instrument(skip(client, config))]
pub async fn mark_attendance(client: &Client, config: &AppConfig, employee_id: &str, institute_id: &InstituteId) -> Result<MarkAttendanceResponse, ApiError> {
    info!("📝 Marking attendance...");

    let response = client
        .post(format!("{}/attendance/mark", config.api().url()))
        .json(&MarkAttendanceRequest { employee_id, institute_id })
        .send()
        .await?
        .error_for_status()?;

    let mark_response = response.json::<MarkAttendanceResponse>().await?;
    info!(attendance_type = ?mark_response.attendance_type, "📝 Marking attendance... OK");

    Ok(mark_response)
}

#[instrument(skip(client, config))]
pub async fn fetch_all_attendance(client: &Client, config: &AppConfig) -> Result<Vec<AttendanceRecord>, ApiError> {
    info!("📋 Retrieving all attendance records...");

    let records = client
        .get(format!("{}/attendance/getAll", config.api().url()))
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<AttendanceRecord>>()
        .await?;
    info!("📋 Retrieving all attendance records... OK, {} found", records.len());

    Ok(records)
}

#[instrument(skip(client, config))]
pub async fn fetch_attendance_by_date(client: &Client, config: &AppConfig, date: NaiveDate) -> Result<Vec<AttendanceRecord>, ApiError> {
    info!("📋 Retrieving attendance records for {}...", date);

    let records = client
        .get(format!("{}/attendance/by-date", config.api().url()))
        .query(&[("date", date.format("%Y-%m-%d").to_string())])
        .send()
        .await?
        .error_for_status()?
        .json::<Vec<AttendanceRecord>>()
        .await?;
    info!("📋 Retrieving attendance records for {}... OK, {} found", date, records.len());

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use crate::domain::{EmployeeSummary, InstituteSummary};
    use chrono::NaiveDateTime;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn mark_attendance_posts_employee_and_institute() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/attendance/mark")
            .match_body(Matcher::Json(json!({"employeeId": "EMP7", "instituteId": "INST1"})))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"attendanceType": "Login"}"#)
            .create_async()
            .await;

        let config = AppConfigBuilder::new().api_url(server.url()).build();
        let response = mark_attendance(&Client::new(), &config, "EMP7", &InstituteId::from("INST1")).await?;

        mock.assert();
        assert_eq!(
            response,
            MarkAttendanceResponse {
                attendance_type: Some("Login".to_string())
            }
        );

        Ok(())
    }

    #[tokio::test]
    async fn mark_attendance_fails_on_an_error_status() {
        let mut server = mockito::Server::new_async().await;

        server.mock("POST", "/attendance/mark").with_status(503).create_async().await;

        let config = AppConfigBuilder::new().api_url(server.url()).build();
        let result = mark_attendance(&Client::new(), &config, "EMP7", &InstituteId::from("INST1")).await;

        assert!(matches!(result, Err(ApiError::RequestError(_))));
    }

    #[tokio::test]
    async fn fetch_attendance_by_date_returns_the_records() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/attendance/by-date")
            .match_query(Matcher::UrlEncoded("date".into(), "2026-10-19".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"[{
                    "id": 3,
                    "employee": {
                        "employeeId": "EMP7",
                        "fullName": "Asha Rao",
                        "email": "asha@example.com",
                        "designation": "Trainer",
                        "workLocation": "Bengaluru"
                    },
                    "institute": { "instituteName": "NICT Computers" },
                    "loginTime": "2026-10-19T09:12:33",
                    "attendanceType": "Login",
                    "remarks": null
                }]"#,
            )
            .create_async()
            .await;

        let config = AppConfigBuilder::new().api_url(server.url()).build();
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).ok_or(ApiError::NotFound)?;
        let records = fetch_attendance_by_date(&Client::new(), &config, date).await?;

        mock.assert();
        assert_eq!(
            records,
            vec![AttendanceRecord {
                id: 3,
                employee: Some(EmployeeSummary {
                    employee_id: Some("EMP7".to_string()),
                    full_name: Some("Asha Rao".to_string()),
                    email: Some("asha@example.com".to_string()),
                    designation: Some("Trainer".to_string()),
                    work_location: Some("Bengaluru".to_string()),
                }),
                institute: Some(InstituteSummary {
                    institute_name: Some("NICT Computers".to_string())
                }),
                login_time: NaiveDateTime::parse_from_str("2026-10-19 09:12:33", "%Y-%m-%d %H:%M:%S").ok(),
                attendance_type: Some("Login".to_string()),
                remarks: None,
            }]
        );

        Ok(())
    }

    #[tokio::test]
    async fn fetch_all_attendance_returns_an_empty_list() -> Result<(), ApiError> {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("GET", "/attendance/getAll")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let config = AppConfigBuilder::new().api_url(server.url()).build();
        let records = fetch_all_attendance(&Client::new(), &config).await?;

        mock.assert();
        assert!(records.is_empty());

        Ok(())
    }
}
