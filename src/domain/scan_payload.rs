use crate::domain::Coordinates;
use serde::Deserialize;

/// What a check-in QR code carries: where the institute is and what it is called.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawScanPayload")]
pub struct ScanPayload {
    pub location: Coordinates,
    pub institute_name: String,
}

// Printed codes use the lowercase spelling, which wins when a code carries both
#[derive(Debug, Deserialize)]
struct RawScanPayload {
    location: Coordinates,
    #[serde(rename = "instituteName")]
    institute_name: Option<String>,
    institutename: Option<String>,
}

impl TryFrom<RawScanPayload> for ScanPayload {
    type Error = String;

    fn try_from(raw: RawScanPayload) -> Result<Self, Self::Error> {
        let institute_name = raw
            .institutename
            .or(raw.institute_name)
            .ok_or_else(|| "missing field `instituteName`".to_string())?;

        Ok(ScanPayload {
            location: raw.location,
            institute_name,
        })
    }
}
