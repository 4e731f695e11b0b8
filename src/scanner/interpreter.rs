use crate::domain::ScanPayload;
use crate::scanner::ScanError;

/// Decodes scanned text into a payload. Anything that is not a JSON object with a valid location and
/// a non-empty institute name is rejected.
pub fn interpret(text: &str) -> Result<ScanPayload, ScanError> {
    let payload = serde_json::from_str::<ScanPayload>(text.trim()).map_err(|e| ScanError::MalformedPayload(e.to_string()))?;

    let institute_name = payload.institute_name.trim();
    if institute_name.is_empty() {
        return Err(ScanError::MalformedPayload("instituteName is empty".to_string()));
    }

    Ok(ScanPayload {
        institute_name: institute_name.to_string(),
        ..payload
    })
}
