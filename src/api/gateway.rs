use crate::api::attendance::{MarkAttendanceResponse, mark_attendance};
use crate::api::institute::fetch_institute_id;
use crate::api::ApiError;
use crate::app_config::AppConfig;
use crate::domain::InstituteId;
use async_trait::async_trait;
use reqwest::Client;
use std::fmt::Debug;
use std::sync::Arc;

/// The two remote calls a scan attempt depends on.
#[async_trait]
pub trait AttendanceGateway: Debug + Send + Sync {
    async fn institute_id(&self, institute_name: &str) -> Result<InstituteId, ApiError>;

    async fn mark_attendance(&self, employee_id: &str, institute_id: &InstituteId) -> Result<MarkAttendanceResponse, ApiError>;
}

#[derive(Debug)]
pub struct HttpAttendanceGateway {
    client: Client,
    config: Arc<AppConfig>,
}

impl HttpAttendanceGateway {
    pub fn new(client: Client, config: Arc<AppConfig>) -> Self {
        HttpAttendanceGateway { client, config }
    }
}

#[async_trait]
impl AttendanceGateway for HttpAttendanceGateway {
    async fn institute_id(&self, institute_name: &str) -> Result<InstituteId, ApiError> {
        fetch_institute_id(&self.client, &self.config, institute_name).await
    }

    async fn mark_attendance(&self, employee_id: &str, institute_id: &InstituteId) -> Result<MarkAttendanceResponse, ApiError> {
        mark_attendance(&self.client, &self.config, employee_id, institute_id).await
    }
}
