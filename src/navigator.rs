use crate::app_config::Routes;
use crate::domain::{AttendanceKind, AttendanceOutcome};
use std::fmt::Debug;
use tracing::info;

/// Receives the route of the view to show once a scan succeeded.
pub trait Navigator: Debug + Send + Sync {
    fn navigate(&self, route: &str);
}

/// Announces the next view on stdout, for kiosks driven by a wrapper process.
#[derive(Debug)]
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn navigate(&self, route: &str) {
        info!("➡️ Navigating to {}", route);
        println!("{}", route);
    }
}

pub fn route_for(routes: &Routes, outcome: &AttendanceOutcome) -> String {
    match outcome.kind {
        AttendanceKind::CheckIn => routes.check_in().to_string(),
        AttendanceKind::CheckOut => routes
            .check_out()
            .replace("{employee_id}", &outcome.employee_id)
            .replace("{institute_id}", &outcome.institute_id.to_string()),
    }
}
