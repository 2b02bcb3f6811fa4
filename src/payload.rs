//! Генерация тел запросов для каждого вида транзакции.

use std::ops::RangeInclusive;

use rand::Rng;

use crate::types::{Payload, TxKind};
use crate::utils::round_to_cents;

pub const TRANSFER_ORIGIN: &str = "7777777777";
pub const TRANSFER_DESTINATION: &str = "1111111111";
pub const WITHDRAWAL_ORIGIN: &str = "1111111111";
pub const DEPOSIT_ORIGIN: &str = "2222222222";

/// Диапазон суммы (включительно) для вида транзакции.
pub fn amount_range(kind: TxKind) -> RangeInclusive<f64> {
    match kind {
        TxKind::Transfer => 10.0..=1000.0,
        TxKind::Withdrawal => 10.0..=500.0,
        TxKind::Deposit => 100.0..=50000.0,
    }
}

/// Строит тело запроса для транзакции с номером `index` (нумерация с 1).
///
/// Номера счетов фиксированы, сумма берётся равномерно из [`amount_range`]
/// и округляется до копеек. Источник случайности передаётся явно.
///
/// # Пример
///
/// ```rust
/// use rand::{SeedableRng, rngs::StdRng};
/// use ypbank_stress::{payload::build_payload, types::TxKind};
///
/// let mut rng = StdRng::seed_from_u64(3);
/// let p = build_payload(TxKind::Withdrawal, 3, &mut rng);
/// assert_eq!(p.numero_cuenta_origen, "1111111111");
/// assert!(p.numero_cuenta_destino.is_none());
/// assert!(p.descripcion.contains('3'));
/// assert!((10.0..=500.0).contains(&p.monto));
/// ```
pub fn build_payload(kind: TxKind, index: u32, rng: &mut impl Rng) -> Payload {
    let monto = round_to_cents(rng.gen_range(amount_range(kind)));
    let (origin, destination, description) = match kind {
        TxKind::Transfer => (
            TRANSFER_ORIGIN,
            Some(TRANSFER_DESTINATION),
            format!("Transferencia {}", index),
        ),
        TxKind::Withdrawal => (WITHDRAWAL_ORIGIN, None, format!("Retiro {}", index)),
        TxKind::Deposit => (DEPOSIT_ORIGIN, None, format!("Depósito {}", index)),
    };

    Payload {
        numero_cuenta_origen: origin,
        numero_cuenta_destino: destination,
        tipo_transaccion: kind,
        monto,
        descripcion: description,
    }
}
