mod attendance;
mod coordinates;
mod coordinates_deserializer;
mod scan_payload;

pub use attendance::{AttendanceKind, AttendanceOutcome, AttendanceRecord, EmployeeSummary, InstituteId, InstituteSummary};
pub use coordinates::Coordinates;
pub use scan_payload::ScanPayload;
