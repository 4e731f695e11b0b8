use crate::api::{ApiError, AttendanceGateway};
use crate::domain::{AttendanceKind, AttendanceOutcome};
use crate::scanner::ScanError;
use std::sync::Arc;
use tracing::{info, instrument};

/// Resolves the institute and records attendance for the employee. The server decides whether the
/// submission is a check-in or a check-out.
#[derive(Debug)]
pub struct AttendanceSubmitter {
    gateway: Arc<dyn AttendanceGateway>,
}

impl AttendanceSubmitter {
    pub fn new(gateway: Arc<dyn AttendanceGateway>) -> Self {
        AttendanceSubmitter { gateway }
    }

    #[instrument(skip(self))]
    pub async fn submit(&self, employee_id: &str, institute_name: &str) -> Result<AttendanceOutcome, ScanError> {
        if institute_name.trim().is_empty() {
            return Err(ScanError::InstituteNotFound(institute_name.to_string()));
        }

        let institute_id = self.gateway.institute_id(institute_name).await.map_err(|e| match e {
            ApiError::NotFound => ScanError::InstituteNotFound(institute_name.to_string()),
            e => ScanError::InstituteLookupFailed(e),
        })?;

        let response = self
            .gateway
            .mark_attendance(employee_id, &institute_id)
            .await
            .map_err(ScanError::SubmissionFailed)?;

        let attendance_type = response.attendance_type.unwrap_or_default();
        let kind = AttendanceKind::from_wire(&attendance_type).ok_or(ScanError::UnrecognizedOutcome(attendance_type))?;
        info!(institute_id = %institute_id, "✅ Recorded {} at '{}'", kind, institute_name);

        Ok(AttendanceOutcome {
            kind,
            employee_id: employee_id.to_string(),
            institute_id,
        })
    }
}
