use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceKind {
    CheckIn,
    CheckOut,
}

impl AttendanceKind {
    /// Maps the server's `attendanceType` to a kind, `None` for anything it does not recognize.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "Login" => Some(AttendanceKind::CheckIn),
            "Logout" => Some(AttendanceKind::CheckOut),
            _ => None,
        }
    }
}

impl Display for AttendanceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            AttendanceKind::CheckIn => write!(f, "check-in"),
            AttendanceKind::CheckOut => write!(f, "check-out"),
        }
    }
}

/// Opaque institute identifier, sent back to the server exactly as it was received.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct InstituteId(Value);

impl InstituteId {
    pub fn new(value: Value) -> Self {
        InstituteId(value)
    }
}

impl From<&str> for InstituteId {
    fn from(value: &str) -> Self {
        InstituteId(Value::String(value.to_string()))
    }
}

impl Display for InstituteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::String(s) => write!(f, "{}", s),
            other => write!(f, "{}", other),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceOutcome {
    pub kind: AttendanceKind,
    pub employee_id: String,
    pub institute_id: InstituteId,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: u64,
    pub employee: Option<EmployeeSummary>,
    pub institute: Option<InstituteSummary>,
    pub login_time: Option<NaiveDateTime>,
    pub attendance_type: Option<String>,
    pub remarks: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeSummary {
    pub employee_id: Option<String>,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub designation: Option<String>,
    pub work_location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstituteSummary {
    pub institute_name: Option<String>,
}
