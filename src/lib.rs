//! # ypbank_stress
//!
//! Генератор синтетической нагрузки для HTTP API транзакций.
//!
//! Драйвер отправляет заданное число запросов трёх видов (перевод, снятие,
//! пополнение) через пул задач ограниченного размера и печатает по строке
//! на каждый завершённый запрос, а в конце - общее время прогона.
//!
//! ## Быстрый старт
//!
//! ```no_run
//! use ypbank_stress::{Console, EndpointMap, HttpTransport, LoadDriver};
//!
//! # async fn demo() -> Result<(), ypbank_stress::error::DriverError> {
//! let transport = HttpTransport::new(None)?;
//! let driver = LoadDriver::new(transport, EndpointMap::default(), Console::stdout());
//! let elapsed = driver.run(50, 20).await?;
//! # Ok(()) }
//! ```
//!
//! ## Обработка ошибок
//! Ошибки отдельных запросов не прерывают прогон: они печатаются как
//! `Error: ...` в строке результата. [`error::DriverError`] возвращается
//! только при системном сбое (неверная конфигурация, сбой пула, ошибка вывода).

pub mod console;
pub mod driver;
pub mod endpoints;
pub mod error;
pub mod payload;
pub mod transport;
pub mod types;

mod utils;

pub use console::Console;
pub use driver::{DriverConfig, LoadDriver};
pub use endpoints::EndpointMap;
pub use transport::{HttpTransport, Transport};
