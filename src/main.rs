use crate::api::HttpAttendanceGateway;
use crate::app_config::AppConfig;
use crate::credentials::StoredCredentials;
use crate::navigator::ConsoleNavigator;
use crate::records::{RecordsQuery, format_record};
use crate::scan_view_listener::scan_view_listener;
use crate::scanner::{AttendanceSubmitter, LocationVerifier, ScanSession};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::error::Error;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::LinesStream;
use tracing::{info, warn};

mod api;
mod app_config;
mod credentials;
mod dashboard;
mod domain;
mod location;
mod navigator;
mod records;
mod scan_view_listener;
mod scanner;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Reads decoded QR codes from stdin, one per line, and marks attendance for the logged in employee
    Scan,
    /// Shows today's figures and the weekly overview
    Dashboard,
    /// Lists attendance records, for today unless a date is given
    Records {
        #[arg(long)]
        date: Option<NaiveDate>,
        #[arg(long, conflicts_with = "date")]
        all: bool,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).with_max_level(tracing::Level::INFO).init();

    let args = Args::parse();
    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = Arc::new(AppConfig::load()?);
    info!("✅  Loaded configuration");

    let credentials = StoredCredentials::load(config.credentials().path()).await?;

    match args.command {
        Command::Scan => scan(config, &credentials).await,
        Command::Dashboard => {
            let token = credentials.token().ok_or(records::RecordsError::MissingToken)?;
            let client = api::new_client(&config, Some(token))?;
            println!("{}", dashboard::fetch_summary(&client, &config).await);
            Ok(())
        }
        Command::Records { date, all } => {
            let query = if all {
                RecordsQuery::All
            } else {
                RecordsQuery::ByDate(date.unwrap_or_else(|| Local::now().date_naive()))
            };

            let records = records::search(&config, &credentials, query).await?;
            if records.is_empty() {
                println!("No attendance records found.");
            }
            for record in &records {
                println!("{}", format_record(record));
            }
            Ok(())
        }
    }
}

async fn scan(config: Arc<AppConfig>, credentials: &StoredCredentials) -> Result<(), Box<dyn Error>> {
    let employee_id = credentials.employee_id().ok_or("no employee id is stored, log in first")?;

    let client = api::new_client(&config, None)?;
    let sensor = location::new_sensor(&config, client.clone())?;
    let verifier = LocationVerifier::new(sensor, config.location().timeout(), config.scanner().coordinate_precision());
    let submitter = AttendanceSubmitter::new(Arc::new(HttpAttendanceGateway::new(client, config.clone())));
    let session = ScanSession::new(employee_id.to_string(), verifier, submitter, Arc::new(ConsoleNavigator), config);

    task::spawn(scan_view_listener(session.subscribe()));
    info!("✅  Initialized scanner view");

    let decodes = LinesStream::new(BufReader::new(tokio::io::stdin()).lines()).filter_map(|line| match line {
        Ok(line) => Some(line),
        Err(e) => {
            warn!("⚠️ Unable to read from the scanner: {}", e);
            None
        }
    });

    info!("🔥 {} is up and running", env!("CARGO_PKG_NAME"));
    match session.run(decodes).await {
        Some(outcome) => info!(institute_id = %outcome.institute_id, "✅ Marked {} for employee {}", outcome.kind, outcome.employee_id),
        None => info!("👋 Scanner closed"),
    }

    Ok(())
}
