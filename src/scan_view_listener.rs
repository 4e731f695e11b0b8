use crate::scanner::{ScanState, ScanView};
use tokio::sync::watch::Receiver;
use tracing::instrument;

/// Prints the scanner view whenever it changes.
#[instrument(skip_all)]
pub async fn scan_view_listener(mut rx: Receiver<ScanView>) {
    while rx.changed().await.is_ok() {
        let view = rx.borrow_and_update().clone();
        if let Some(line) = render(&view) {
            eprintln!("{}", line);
        }
    }
}

fn render(view: &ScanView) -> Option<String> {
    match (&view.state, &view.error) {
        (ScanState::Processing, Some(error)) => Some(format!("{}\nProcessing your scan...", error)),
        (ScanState::Processing, None) => Some("Processing your scan...".to_string()),
        (_, Some(error)) => Some(error.clone()),
        (ScanState::Idle, None) => Some("Ready to scan.".to_string()),
        (ScanState::Succeeded(kind), None) => Some(format!("Recorded your {}.", kind)),
        (ScanState::Reset, None) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AttendanceKind;
    use rstest::rstest;

    #[rstest]
    #[case(ScanState::Processing, Some("Institute not found."), Some("Institute not found.\nProcessing your scan..."))]
    #[case(ScanState::Processing, None, Some("Processing your scan..."))]
    #[case(ScanState::Reset, Some("Institute not found."), Some("Institute not found."))]
    #[case(ScanState::Idle, None, Some("Ready to scan."))]
    #[case(ScanState::Succeeded(AttendanceKind::CheckOut), None, Some("Recorded your check-out."))]
    #[case(ScanState::Reset, None, None)]
    fn render_keeps_errors_visible_while_processing(#[case] state: ScanState, #[case] error: Option<&str>, #[case] expected: Option<&str>) {
        let view = ScanView {
            state,
            error: error.map(str::to_string),
        };

        assert_eq!(render(&view).as_deref(), expected);
    }
}
