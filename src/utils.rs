use std::error::Error;
use std::time::Duration;

/// Округляет сумму до двух знаков после запятой.
pub(crate) fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Склеивает сообщение ошибки со всеми её причинами через `: `.
/// Повторяющиеся подряд сообщения выводятся один раз.
pub(crate) fn error_chain(err: &(dyn Error + 'static)) -> String {
    let mut parts: Vec<String> = vec![err.to_string()];
    let mut source = err.source();
    while let Some(cause) = source {
        let msg = cause.to_string();
        if parts.last() != Some(&msg) {
            parts.push(msg);
        }
        source = cause.source();
    }
    parts.join(": ")
}

pub(crate) fn summary_line(elapsed: Duration) -> String {
    format!("Completadas en {:.2} segundos.", elapsed.as_secs_f64())
}
