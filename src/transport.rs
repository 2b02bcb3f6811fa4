//! Транспорт до сервиса транзакций.
//!
//! Драйвер знает только трейт [`Transport`]; реальная реализация
//! [`HttpTransport`] отправляет JSON через `reqwest`, а тесты подставляют
//! свои заглушки.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{DriverError, TransportError};
use crate::types::Payload;

#[async_trait]
pub trait Transport: Send + Sync {
    /// Отправляет `payload` POST-запросом на `url` и возвращает HTTP-код ответа.
    ///
    /// Код, отличный от 2xx, не является ошибкой.
    async fn post(&self, url: &str, payload: &Payload) -> Result<u16, TransportError>;
}

/// HTTP-транспорт поверх общего `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Option<Duration>) -> Result<Self, DriverError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(DriverError::Client)?;
        Ok(HttpTransport { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, payload: &Payload) -> Result<u16, TransportError> {
        let response = self.client.post(url).json(payload).send().await?;
        Ok(response.status().as_u16())
    }
}
