use core::fmt;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use ypbank_stress::{
    Console, DriverConfig, EndpointMap, HttpTransport, LoadDriver, driver, endpoints, error,
};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Общее число запросов
    #[arg(
        short = 'n',
        long,
        env = "YPBANK_TOTAL_REQUESTS",
        default_value_t = driver::DEFAULT_TOTAL_REQUESTS
    )]
    total_requests: u32,

    /// Максимум одновременных запросов
    #[arg(
        short = 'c',
        long,
        env = "YPBANK_MAX_CONCURRENCY",
        default_value_t = driver::DEFAULT_MAX_CONCURRENCY
    )]
    max_concurrency: usize,

    /// Базовый адрес сервиса транзакций
    #[arg(long, env = "YPBANK_BASE_URL", default_value = endpoints::DEFAULT_BASE_URL)]
    base_url: String,

    /// Таймаут одного запроса в секундах (по умолчанию не ограничен)
    #[arg(long, env = "YPBANK_TIMEOUT_SECS")]
    timeout_secs: Option<u64>,

    /// Зерно генератора для воспроизводимых прогонов
    #[arg(long, env = "YPBANK_SEED")]
    seed: Option<u64>,
}

impl Args {
    fn as_config(&self) -> DriverConfig {
        DriverConfig {
            total_requests: self.total_requests,
            max_concurrency: self.max_concurrency,
            seed: self.seed,
        }
    }
}

#[derive(Debug)]
enum Error {
    Usage(String),
    Setup(String),
    Run(String),
}

impl Error {
    fn code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Setup(_) => 3,
            Self::Run(_) => 4,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) | Self::Setup(msg) | Self::Run(msg) => write!(f, "{}", msg),
        }
    }
}

impl From<error::DriverError> for Error {
    fn from(value: error::DriverError) -> Self {
        match value {
            error::DriverError::InvalidConfig(_) => Error::Usage(value.to_string()),
            error::DriverError::Client(_) => Error::Setup(value.to_string()),
            error::DriverError::Worker(_) | error::DriverError::Output(_) => {
                Error::Run(value.to_string())
            }
        }
    }
}

fn init_logging() {
    let level = std::env::var("YPBANK_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run() -> Result<(), Error> {
    let args = Args::parse();
    let config = args.as_config();

    let transport = HttpTransport::new(args.timeout_secs.map(Duration::from_secs))?;
    let endpoints = EndpointMap::new(&args.base_url);
    let mut driver = LoadDriver::new(transport, endpoints, Console::stdout());
    if let Some(seed) = config.seed {
        driver = driver.with_seed(seed);
    }
    tracing::info!(base_url = %args.base_url, seed = driver.seed(), "configured");

    driver.run_with(&config).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    init_logging();
    match run().await {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.code());
        }
    }
}
