use crate::app_config::AppConfig;
use crate::domain::{AttendanceKind, AttendanceOutcome};
use crate::navigator::{Navigator, route_for};
use crate::scanner::{AttendanceSubmitter, LocationVerifier, ScanError, interpret};
use futures::future::BoxFuture;
use std::future;
use std::pin::pin;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};
use tokio_stream::{Stream, StreamExt};
use tracing::{debug, info, instrument, warn};

#[derive(Debug, Clone, PartialEq)]
pub enum ScanState {
    Idle,
    Processing,
    Succeeded(AttendanceKind),
    Reset,
}

/// What the scanner view shows.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanView {
    pub state: ScanState,
    pub error: Option<String>,
}

/// Drives scan attempts for one employee. An attempt runs interpret, verify location, resolve
/// institute and submit in order, and only one attempt is in flight at a time.
#[derive(Debug)]
pub struct ScanSession {
    employee_id: String,
    verifier: LocationVerifier,
    submitter: AttendanceSubmitter,
    navigator: Arc<dyn Navigator>,
    config: Arc<AppConfig>,
    view_tx: watch::Sender<ScanView>,
}

impl ScanSession {
    pub fn new(
        employee_id: String,
        verifier: LocationVerifier,
        submitter: AttendanceSubmitter,
        navigator: Arc<dyn Navigator>,
        config: Arc<AppConfig>,
    ) -> Self {
        let (view_tx, _) = watch::channel(ScanView {
            state: ScanState::Idle,
            error: None,
        });

        ScanSession {
            employee_id,
            verifier,
            submitter,
            navigator,
            config,
            view_tx,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ScanView> {
        self.view_tx.subscribe()
    }

    /// Consumes decoded QR texts until an attempt succeeds or the stream ends. Texts that arrive
    /// while an attempt is in flight are dropped, an attempt in flight when the stream ends still
    /// completes. Dropping the returned future cancels the attempt.
    #[instrument(skip_all, fields(employee_id = %self.employee_id))]
    pub async fn run<S>(&self, decodes: S) -> Option<AttendanceOutcome>
    where
        S: Stream<Item = String>,
    {
        let mut decodes = pin!(decodes);
        let mut in_flight: Option<BoxFuture<'_, Result<AttendanceOutcome, ScanError>>> = None;
        let mut clear_error_at: Option<Instant> = None;
        let mut scanner_closed = false;

        info!("📷 Ready to scan");
        loop {
            tokio::select! {
                decoded = decodes.next(), if !scanner_closed => {
                    let Some(text) = decoded else {
                        scanner_closed = true;
                        if in_flight.is_none() {
                            info!("📷 Scanner closed, no attendance was marked");
                            return None;
                        }
                        continue;
                    };

                    if text.trim().is_empty() {
                        continue;
                    }

                    if in_flight.is_some() {
                        debug!("📷 Ignoring scan, another one is being processed");
                        continue;
                    }

                    debug!(text = %text, "📷 Scanned QR code");
                    self.view_tx.send_modify(|view| view.state = ScanState::Processing);
                    in_flight = Some(Box::pin(self.attempt(text)));
                }
                result = until_done(&mut in_flight) => {
                    in_flight = None;

                    match result {
                        Ok(outcome) => {
                            let route = route_for(self.config.routes(), &outcome);
                            self.navigator.navigate(&route);
                            self.view_tx.send_modify(|view| {
                                view.state = ScanState::Succeeded(outcome.kind);
                                view.error = None;
                            });
                            return Some(outcome);
                        }
                        Err(error) => {
                            warn!(transient = error.is_transient(), "⚠️ Scan failed: {}", error);
                            let message = error.user_message();
                            self.view_tx.send_modify(|view| {
                                view.state = ScanState::Reset;
                                view.error = Some(message);
                            });
                            if scanner_closed {
                                info!("📷 Scanner closed, no attendance was marked");
                                return None;
                            }
                            clear_error_at = Some(Instant::now() + self.config.scanner().reset_delay());
                        }
                    }
                }
                _ = expire(clear_error_at) => {
                    clear_error_at = None;
                    self.view_tx.send_modify(|view| {
                        view.error = None;
                        if view.state == ScanState::Reset {
                            view.state = ScanState::Idle;
                        }
                    });
                }
            }
        }
    }

    async fn attempt(&self, text: String) -> Result<AttendanceOutcome, ScanError> {
        let payload = interpret(&text)?;
        info!("📷 Scanned code for institute '{}'", payload.institute_name);

        self.verifier.verify(&payload.location).await?;
        self.submitter.submit(&self.employee_id, &payload.institute_name).await
    }
}

async fn until_done<T>(attempt: &mut Option<BoxFuture<'_, T>>) -> T {
    match attempt {
        Some(attempt) => attempt.await,
        None => future::pending().await,
    }
}

async fn expire(deadline: Option<Instant>) {
    match deadline {
        Some(deadline) => sleep_until(deadline).await,
        None => future::pending().await,
    }
}
