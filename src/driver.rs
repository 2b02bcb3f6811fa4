//! Драйвер нагрузки: пул задач ограниченного размера, который прогоняет
//! номера запросов `1..=N` через [`Transport`] и печатает результат каждого.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng, rngs::StdRng};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::console::Console;
use crate::endpoints::EndpointMap;
use crate::error::DriverError;
use crate::payload::build_payload;
use crate::transport::Transport;
use crate::types::{Outcome, OutcomeResult, TxKind};
use crate::utils::{error_chain, summary_line};

pub const DEFAULT_TOTAL_REQUESTS: u32 = 50;
pub const DEFAULT_MAX_CONCURRENCY: usize = 20;

/// Параметры одного прогона.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    pub total_requests: u32,
    pub max_concurrency: usize,
    /// Базовое зерно генератора. `None` - взять случайное.
    pub seed: Option<u64>,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            total_requests: DEFAULT_TOTAL_REQUESTS,
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            seed: None,
        }
    }
}

pub struct LoadDriver<T> {
    transport: Arc<T>,
    endpoints: Arc<EndpointMap>,
    console: Console,
    seed: u64,
}

impl<T> Clone for LoadDriver<T> {
    fn clone(&self) -> Self {
        LoadDriver {
            transport: Arc::clone(&self.transport),
            endpoints: Arc::clone(&self.endpoints),
            console: self.console.clone(),
            seed: self.seed,
        }
    }
}

impl<T: Transport + 'static> LoadDriver<T> {
    pub fn new(transport: T, endpoints: EndpointMap, console: Console) -> Self {
        LoadDriver {
            transport: Arc::new(transport),
            endpoints: Arc::new(endpoints),
            console,
            seed: rand::random(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Генератор для запроса `index`: зависит только от зерна и номера,
    /// а не от порядка выполнения задач.
    pub fn rng_for(&self, index: u32) -> StdRng {
        StdRng::seed_from_u64(self.seed.wrapping_add(u64::from(index)))
    }

    /// Выполняет один запрос и печатает строку с результатом.
    ///
    /// Транспортные ошибки не пробрасываются, а попадают в [`Outcome`].
    pub async fn dispatch_one<R: Rng + Send>(&self, index: u32, rng: &mut R) -> Outcome {
        let kind = TxKind::random(rng);
        let payload = build_payload(kind, index, rng);
        let url = self.endpoints.url_for(kind);
        debug!(index, %kind, url, monto = payload.monto, "dispatching");

        let result = match self.transport.post(url, &payload).await {
            Ok(status) => OutcomeResult::Status(status),
            Err(err) => {
                let description = error_chain(&err);
                warn!(index, %kind, error = %description, "request failed");
                OutcomeResult::Error(description)
            }
        };

        let outcome = Outcome {
            index,
            kind,
            result,
        };
        if let Err(err) = self.console.line(&outcome.to_string()) {
            warn!(index, error = %err, "failed to print outcome");
        }
        outcome
    }

    /// Прогоняет запросы `1..=total_requests`, держа в работе не более
    /// `max_concurrency` одновременно, дожидается всех и печатает итог.
    ///
    /// Возвращает измеренное время прогона.
    pub async fn run(
        &self,
        total_requests: u32,
        max_concurrency: usize,
    ) -> Result<Duration, DriverError> {
        if max_concurrency == 0 {
            return Err(DriverError::InvalidConfig(
                "max_concurrency должен быть не меньше 1".to_string(),
            ));
        }

        let workers_count = max_concurrency.min(total_requests as usize);
        info!(
            total_requests,
            max_concurrency,
            workers = workers_count,
            seed = self.seed,
            "starting run"
        );

        let start = Instant::now();
        let next = Arc::new(AtomicU64::new(1));
        let total = u64::from(total_requests);
        let mut workers = JoinSet::new();

        for worker in 0..workers_count {
            let driver = self.clone();
            let next = Arc::clone(&next);
            workers.spawn(async move {
                let mut handled = 0u32;
                loop {
                    let index = next.fetch_add(1, Ordering::Relaxed);
                    if index > total {
                        break;
                    }
                    // index <= total_requests, so it fits in u32
                    let index = index as u32;
                    let mut rng = driver.rng_for(index);
                    driver.dispatch_one(index, &mut rng).await;
                    handled += 1;
                }
                debug!(worker, handled, "worker finished");
            });
        }

        while let Some(joined) = workers.join_next().await {
            joined?;
        }
        let elapsed = start.elapsed();

        self.console.line("")?;
        self.console.line(&summary_line(elapsed))?;
        info!(elapsed_ms = elapsed.as_millis() as u64, "run finished");

        Ok(elapsed)
    }

    /// То же, что [`LoadDriver::run`], но с параметрами из [`DriverConfig`].
    pub async fn run_with(&self, config: &DriverConfig) -> Result<Duration, DriverError> {
        self.run(config.total_requests, config.max_concurrency).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::SharedBuffer;
    use crate::error::TransportError;
    use crate::types::Payload;
    use async_trait::async_trait;

    struct Fixed(u16);

    #[async_trait]
    impl Transport for Fixed {
        async fn post(&self, _url: &str, _payload: &Payload) -> Result<u16, TransportError> {
            Ok(self.0)
        }
    }

    struct Refused;

    #[async_trait]
    impl Transport for Refused {
        async fn post(&self, _url: &str, _payload: &Payload) -> Result<u16, TransportError> {
            Err(TransportError::Other("connection refused".to_string()))
        }
    }

    #[test]
    fn default_config() {
        let config = DriverConfig::default();
        assert_eq!(config.total_requests, 50);
        assert_eq!(config.max_concurrency, 20);
        assert_eq!(config.seed, None);
    }

    #[tokio::test]
    async fn dispatch_prints_status() {
        let buffer = SharedBuffer::new();
        let driver =
            LoadDriver::new(Fixed(201), EndpointMap::default(), Console::new(buffer.clone()))
                .with_seed(5);

        let mut rng = driver.rng_for(4);
        let outcome = driver.dispatch_one(4, &mut rng).await;

        assert_eq!(outcome.index, 4);
        assert_eq!(outcome.result, OutcomeResult::Status(201));
        assert_eq!(buffer.lines(), vec![outcome.to_string()]);
        assert!(buffer.contents().starts_with("[4] "));
    }

    #[tokio::test]
    async fn dispatch_captures_transport_error() {
        let buffer = SharedBuffer::new();
        let driver =
            LoadDriver::new(Refused, EndpointMap::default(), Console::new(buffer.clone()));

        let mut rng = StdRng::seed_from_u64(1);
        let outcome = driver.dispatch_one(1, &mut rng).await;

        assert!(outcome.is_error());
        assert!(buffer.contents().contains("=> Error: connection refused"));
    }

    #[tokio::test]
    async fn same_seed_same_kinds() {
        let a = LoadDriver::new(
            Fixed(200),
            EndpointMap::default(),
            Console::new(SharedBuffer::new()),
        )
        .with_seed(77);
        let b = a.clone();
        for index in 1..=20 {
            let oa = a.dispatch_one(index, &mut a.rng_for(index)).await;
            let ob = b.dispatch_one(index, &mut b.rng_for(index)).await;
            assert_eq!(oa.kind, ob.kind);
        }
    }

    #[tokio::test]
    async fn zero_concurrency_is_rejected() {
        let driver = LoadDriver::new(
            Fixed(200),
            EndpointMap::default(),
            Console::new(SharedBuffer::new()),
        );
        let err = driver.run(10, 0).await.unwrap_err();
        assert!(matches!(err, DriverError::InvalidConfig(_)));
    }
}
