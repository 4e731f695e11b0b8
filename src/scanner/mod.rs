mod error;
mod interpreter;
mod session;
mod submitter;
mod verifier;

pub use error::ScanError;
pub use interpreter::interpret;
pub use session::{ScanSession, ScanState, ScanView};
pub use submitter::AttendanceSubmitter;
pub use verifier::LocationVerifier;
