use super::session::ApiClient;
use crate::errors::AppResult;
use crate::period::Period;
use serde_json::Value;
use tracing::info;

impl ApiClient {
    /// Lists bank-account transactions (extrato) for the period.
    /// The JSON is returned unmodified in shape.
    pub async fn list_bank_transactions(&self, period: Period) -> AppResult<Value> {
        info!(period = %period, "Fetching bank transaction list");
        self.get_json(&format!(
            "/movimentacaousuario/listextrato/{}/{}",
            period.month, period.year
        ))
        .await
    }

    /// Lists issued invoices (notas fiscais) for the period.
    /// Cursor and limit are fixed; the service's paging is not consumed.
    pub async fn list_invoices(&self, period: Period) -> AppResult<Value> {
        info!(period = %period, "Fetching invoice list");
        self.get_json(&format!(
            "/nota002/list/{}/{}?cursor=0&limit=20",
            period.month, period.year
        ))
        .await
    }

    /// Lists manual cash-ledger entries (caixa) for the period.
    pub async fn list_cash_ledger(&self, period: Period) -> AppResult<Value> {
        info!(period = %period, "Fetching cash ledger list");
        self.get_json(&format!(
            "/movimentacaousuario/listcaixa/{}/{}",
            period.month, period.year
        ))
        .await
    }
}
