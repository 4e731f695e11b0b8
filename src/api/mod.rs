mod attendance;
mod client;
mod dashboard;
mod gateway;
mod institute;

pub use attendance::{MarkAttendanceResponse, fetch_all_attendance, fetch_attendance_by_date};
pub use client::{ApiError, new_client};
pub use dashboard::{WeeklyReportEntry, fetch_absent_today, fetch_total, fetch_weekly_report};
pub use gateway::{AttendanceGateway, HttpAttendanceGateway};
