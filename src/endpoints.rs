use crate::types::TxKind;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const TRANSFER_PATH: &str = "/api/v1/transacciones/transferencia";
const WITHDRAWAL_PATH: &str = "/api/v1/transacciones/retiro";
const DEPOSIT_PATH: &str = "/api/v1/transacciones/deposito";

/// Неизменяемое соответствие вида транзакции и URL эндпоинта.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointMap {
    transfer: String,
    withdrawal: String,
    deposit: String,
}

impl EndpointMap {
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        EndpointMap {
            transfer: format!("{}{}", base, TRANSFER_PATH),
            withdrawal: format!("{}{}", base, WITHDRAWAL_PATH),
            deposit: format!("{}{}", base, DEPOSIT_PATH),
        }
    }

    pub fn url_for(&self, kind: TxKind) -> &str {
        match kind {
            TxKind::Transfer => &self.transfer,
            TxKind::Withdrawal => &self.withdrawal,
            TxKind::Deposit => &self.deposit,
        }
    }
}

impl Default for EndpointMap {
    fn default() -> Self {
        EndpointMap::new(DEFAULT_BASE_URL)
    }
}
