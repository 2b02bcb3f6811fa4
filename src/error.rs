use std::io;

use thiserror::Error;

/// Ошибка одного HTTP-обмена. Никогда не выходит за границу отправки:
/// превращается в [`crate::types::OutcomeResult::Error`].
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

/// Системные ошибки, прерывающие весь прогон.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("некорректная конфигурация: {0}")]
    InvalidConfig(String),
    #[error("не удалось создать HTTP-клиент: {0}")]
    Client(#[source] reqwest::Error),
    #[error("сбой рабочего потока: {0}")]
    Worker(#[from] tokio::task::JoinError),
    #[error("ошибка вывода: {0}")]
    Output(#[from] io::Error),
}
