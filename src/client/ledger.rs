use super::session::ApiClient;
use crate::errors::{AppError, AppResult};
use crate::models::{CashLedgerEntry, LedgerAccountRef, LedgerCategory};
use chrono::{Datelike, NaiveDate};
use serde_json::Value;
use tracing::info;

/// Milliseconds since the Unix epoch at noon of `date`.
///
/// The service stores entry dates as epoch milliseconds and renders them in
/// local time; anchoring at noon keeps the entry on the intended calendar day
/// for any offset within UTC-12..UTC+12.
pub fn noon_epoch_millis(date: NaiveDate) -> AppResult<i64> {
    date.and_hms_opt(12, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .ok_or_else(|| AppError::InvalidInput(format!("Invalid entry date: {date}")))
}

impl ApiClient {
    /// Posts a manual cash-ledger entry dated at `date`.
    ///
    /// The category is already resolved to one of the four known values, so
    /// the only failure modes left are the date conversion and the request
    /// itself. The service is the system of record; no local copy is kept.
    pub async fn add_cash_ledger_entry(
        &self,
        date: NaiveDate,
        description: &str,
        amount: f64,
        category: LedgerCategory,
    ) -> AppResult<Value> {
        info!(
            date = %date,
            description = description,
            amount = amount,
            category = category.display_name(),
            "Adding cash ledger entry"
        );

        let entry = CashLedgerEntry {
            id: String::new(),
            date_epoch_ms: noon_epoch_millis(date)?,
            description: description.to_string(),
            amount,
            account: LedgerAccountRef {
                id: category.account_id(),
            },
        };

        self.post_json(
            &format!(
                "/movimentacaousuario/salvarcaixa/{}/{}",
                date.month(),
                date.year()
            ),
            &entry,
        )
        .await
    }
}
