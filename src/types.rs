use core::fmt;

use rand::Rng;
use serde::Serialize;

type Index = u32;
type AccountNumber = &'static str;

/// Вид транзакции. Определяет форму тела запроса и целевой эндпоинт.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TxKind {
    #[serde(rename = "TRANSFERENCIA")]
    Transfer,
    #[serde(rename = "RETIRO")]
    Withdrawal,
    #[serde(rename = "DEPOSITO")]
    Deposit,
}

impl TxKind {
    pub const ALL: [TxKind; 3] = [TxKind::Transfer, TxKind::Withdrawal, TxKind::Deposit];

    /// Имя вида транзакции в том виде, в котором его ожидает API.
    pub fn wire_name(&self) -> &'static str {
        match self {
            TxKind::Transfer => "TRANSFERENCIA",
            TxKind::Withdrawal => "RETIRO",
            TxKind::Deposit => "DEPOSITO",
        }
    }

    /// Выбирает вид транзакции равновероятно.
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Тело запроса, отправляемое в API транзакций.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    pub numero_cuenta_origen: AccountNumber,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub numero_cuenta_destino: Option<AccountNumber>,
    pub tipo_transaccion: TxKind,
    pub monto: f64,
    pub descripcion: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum OutcomeResult {
    /// Обмен завершился, сервис вернул этот код (любой, не только 2xx).
    Status(u16),
    /// Обмен не удался на транспортном уровне.
    Error(String),
}

/// Результат одной отправки.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub index: Index,
    pub kind: TxKind,
    pub result: OutcomeResult,
}

impl Outcome {
    pub fn is_error(&self) -> bool {
        matches!(self.result, OutcomeResult::Error(_))
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.result {
            OutcomeResult::Status(code) => {
                write!(f, "[{}] {} => Código: {}", self.index, self.kind, code)
            }
            OutcomeResult::Error(msg) => {
                write!(f, "[{}] {} => Error: {}", self.index, self.kind, msg)
            }
        }
    }
}
