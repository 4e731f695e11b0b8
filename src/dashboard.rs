use crate::api::{ApiError, WeeklyReportEntry, fetch_absent_today, fetch_total, fetch_weekly_report};
use crate::app_config::AppConfig;
use chrono::{Datelike, Weekday};
use reqwest::Client;
use std::fmt::{Display, Formatter};
use tracing::{info, instrument, warn};

pub const WEEKDAY_LABELS: [&str; 6] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Default, PartialEq)]
pub struct WeeklyAttendance {
    pub present: [u64; 6],
    pub absent: [u64; 6],
}

#[derive(Debug, PartialEq)]
pub struct DashboardSummary {
    pub total_employees: u64,
    pub present_today: u64,
    pub on_leave: u64,
    pub absent_today: u64,
    pub weekly: WeeklyAttendance,
}

/// Fetches every dashboard figure concurrently. A figure that cannot be fetched is reported as zero
/// so one failing endpoint does not hide the others.
#[instrument(skip_all)]
pub async fn fetch_summary(client: &Client, config: &AppConfig) -> DashboardSummary {
    info!("📊 Retrieving dashboard...");

    let (total_employees, present_today, on_leave, absent_today, weekly) = tokio::join!(
        fetch_total(client, config, "/admin/employees/count"),
        fetch_total(client, config, "/attendance/count/today"),
        fetch_total(client, config, "/attendance/on-leave"),
        fetch_absent_today(client, config),
        fetch_weekly_report(client, config),
    );

    let weekly = match weekly {
        Ok(entries) => weekly_attendance(&entries),
        Err(e) => {
            warn!("⚠️ Unable to retrieve the weekly report: {}", e);
            WeeklyAttendance::default()
        }
    };

    info!("📊 Retrieving dashboard... OK");

    // The admin account is counted as an employee, and as absent since it never checks in
    DashboardSummary {
        total_employees: or_zero("total employees", total_employees).saturating_sub(1),
        present_today: or_zero("present today", present_today),
        on_leave: or_zero("on leave", on_leave),
        absent_today: or_zero("absent today", absent_today).saturating_sub(1),
        weekly,
    }
}

fn or_zero(figure: &str, result: Result<u64, ApiError>) -> u64 {
    result.unwrap_or_else(|e| {
        warn!("⚠️ Unable to retrieve {}: {}", figure, e);
        0
    })
}

/// Spreads report entries over Monday to Saturday. A later entry for the same weekday replaces an
/// earlier one and Sunday is not reported.
pub fn weekly_attendance(entries: &[WeeklyReportEntry]) -> WeeklyAttendance {
    let mut weekly = WeeklyAttendance::default();

    for entry in entries {
        let index = match entry.date.weekday() {
            Weekday::Sun => continue,
            weekday => weekday.num_days_from_monday() as usize,
        };

        weekly.present[index] = entry.present;
        weekly.absent[index] = entry.absent.saturating_sub(1);
    }

    weekly
}

impl Display for DashboardSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total employees: {}", self.total_employees)?;
        writeln!(f, "Present today:   {}", self.present_today)?;
        writeln!(f, "On leave:        {}", self.on_leave)?;
        writeln!(f, "Absent today:    {}", self.absent_today)?;
        writeln!(f)?;
        writeln!(f, "Weekly    {}", WEEKDAY_LABELS.map(|label| format!("{:>4}", label)).join(""))?;
        writeln!(f, "Present   {}", self.weekly.present.map(|count| format!("{:>4}", count)).join(""))?;
        write!(f, "Absent    {}", self.weekly.absent.map(|count| format!("{:>4}", count)).join(""))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app_config::AppConfigBuilder;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn entry(date: &str, present: u64, absent: u64) -> WeeklyReportEntry {
        WeeklyReportEntry {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            present,
            absent,
        }
    }

    #[test]
    fn weekly_attendance_maps_entries_to_weekdays() {
        // 2026-10-19 is a Monday
        let entries = vec![
            entry("2026-10-19", 8, 3),
            entry("2026-10-21", 6, 0),
            entry("2026-10-24", 2, 9),
            entry("2026-10-25", 1, 1),
        ];

        assert_eq!(
            weekly_attendance(&entries),
            WeeklyAttendance {
                present: [8, 0, 6, 0, 0, 2],
                absent: [2, 0, 0, 0, 0, 8],
            }
        );
    }

    #[test]
    fn weekly_attendance_keeps_the_last_entry_for_a_weekday() {
        let entries = vec![entry("2026-10-12", 1, 1), entry("2026-10-19", 5, 4)];

        let weekly = weekly_attendance(&entries);

        assert_eq!(weekly.present[0], 5);
        assert_eq!(weekly.absent[0], 3);
    }

    #[tokio::test]
    async fn fetch_summary_adjusts_counts_and_tolerates_failures() {
        let mut server = mockito::Server::new_async().await;

        let mut mocks = Vec::new();
        for (path, status, body) in [
            ("/admin/employees/count", 200, r#"{"total": 11}"#),
            ("/attendance/count/today", 200, r#"{"total": 7}"#),
            ("/attendance/on-leave", 500, ""),
            ("/attendance/absent-today", 200, "4"),
            ("/admin/weekly-report", 200, r#"[{"date": "2026-10-20", "present": 7, "absent": 4}]"#),
        ] {
            let mock = server
                .mock("GET", path)
                .match_header("authorization", "Bearer token")
                .with_status(status)
                .with_header("content-type", "application/json")
                .with_body(body)
                .create_async()
                .await;
            mocks.push(mock);
        }

        let config = AppConfigBuilder::new().api_url(server.url()).build();
        let client = crate::api::new_client(&config, Some("token")).unwrap();
        let summary = fetch_summary(&client, &config).await;

        for mock in mocks {
            mock.assert();
        }
        assert_eq!(
            summary,
            DashboardSummary {
                total_employees: 10,
                present_today: 7,
                on_leave: 0,
                absent_today: 3,
                weekly: WeeklyAttendance {
                    present: [0, 7, 0, 0, 0, 0],
                    absent: [0, 3, 0, 0, 0, 0],
                },
            }
        );
    }

    #[test]
    fn display_lists_figures_and_the_week() {
        let summary = DashboardSummary {
            total_employees: 10,
            present_today: 7,
            on_leave: 1,
            absent_today: 2,
            weekly: WeeklyAttendance {
                present: [1, 2, 3, 4, 5, 6],
                absent: [0, 0, 0, 0, 0, 1],
            },
        };

        let text = summary.to_string();

        assert!(text.starts_with("Total employees: 10\n"));
        assert!(text.contains("Weekly     Mon Tue Wed Thu Fri Sat"));
        assert!(text.ends_with("Absent       0   0   0   0   0   1"));
    }
}
