use crate::constants::*;
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Operation selected with the `--op` flag.
#[derive(Debug, PartialEq, Eq)]
pub enum Operation {
    DownloadTaxDocuments,
    ListTaxDocuments,
    ListBankTransactions,
    ListInvoices,
    ListCashLedger,
}

impl Operation {
    /// Returns a human-readable name for the operation.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DownloadTaxDocuments => "Download Tax Documents",
            Self::ListTaxDocuments => "List Tax Documents",
            Self::ListBankTransactions => "List Bank Transactions",
            Self::ListInvoices => "List Invoices",
            Self::ListCashLedger => "List Cash Ledger",
        }
    }
}

impl From<&str> for Operation {
    fn from(value: &str) -> Self {
        // Trim whitespace and compare case-insensitively
        let lower = value.trim().to_lowercase();

        if LIST_TAXES_ALIASES.contains(&lower.as_str()) {
            Self::ListTaxDocuments
        } else if LIST_BANK_ALIASES.contains(&lower.as_str()) {
            Self::ListBankTransactions
        } else if LIST_INVOICES_ALIASES.contains(&lower.as_str()) {
            Self::ListInvoices
        } else if LIST_LEDGER_ALIASES.contains(&lower.as_str()) {
            Self::ListCashLedger
        } else {
            // Default silently to the primary use case; callers can log if needed.
            Self::DownloadTaxDocuments
        }
    }
}

/// Token and user id issued by the login endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    pub token: String,
    #[serde(rename = "userId", deserialize_with = "string_or_number")]
    pub user_id: String,
}

/// One payable tax document as returned by the listing endpoint.
///
/// Field names mirror the vendor JSON so listings can be re-serialized
/// without changing shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxDocumentSummary {
    /// Opaque document identifier (the vendor sends a string or a number)
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "descGuia")]
    pub description: String,
    #[serde(rename = "valorTotal")]
    pub total_value: f64,
}

/// Manual cash-movement entry, serialized as the body the vendor expects.
#[derive(Debug, Clone, Serialize)]
pub struct CashLedgerEntry {
    /// Always empty; the service assigns the id
    pub id: String,
    /// Epoch milliseconds at noon of the entry date
    #[serde(rename = "data")]
    pub date_epoch_ms: i64,
    #[serde(rename = "descricao")]
    pub description: String,
    #[serde(rename = "valor")]
    pub amount: f64,
    #[serde(rename = "contaUsuario")]
    pub account: LedgerAccountRef,
}

#[derive(Debug, Clone, Serialize)]
pub struct LedgerAccountRef {
    pub id: i64,
}

/// Fixed category a manual cash-ledger entry must be filed under.
///
/// The vendor models these as user accounts with opaque ids; only these four
/// are known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerCategory {
    /// Pro-labore (partner payroll draw)
    PayrollDraw,
    /// Nota fiscal de entrada (incoming invoice)
    IncomingInvoice,
    /// Contabilizei service fee
    ServiceFee,
    /// Distribuicao de lucros (profit distribution)
    ProfitDistribution,
}

impl LedgerCategory {
    pub const ALL: [LedgerCategory; 4] = [
        Self::PayrollDraw,
        Self::IncomingInvoice,
        Self::ServiceFee,
        Self::ProfitDistribution,
    ];

    /// Returns the canonical name used on the command line and in logs.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::PayrollDraw => "pro-labore",
            Self::IncomingInvoice => "nota-fiscal-entrada",
            Self::ServiceFee => "contabilizei",
            Self::ProfitDistribution => "distribuicao-de-lucros",
        }
    }

    /// Vendor account id the entry is posted against.
    pub fn account_id(&self) -> i64 {
        match self {
            Self::PayrollDraw => PAYROLL_DRAW_ACCOUNT_ID,
            Self::IncomingInvoice => INCOMING_INVOICE_ACCOUNT_ID,
            Self::ServiceFee => SERVICE_FEE_ACCOUNT_ID,
            Self::ProfitDistribution => PROFIT_DISTRIBUTION_ACCOUNT_ID,
        }
    }

    /// Looks a category up by name.
    ///
    /// Accepts the canonical vendor names and English aliases, with `_` or `-`
    /// separators, case-insensitively. Fails before any network call is made.
    pub fn from_name(name: &str) -> AppResult<Self> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        match normalized.as_str() {
            "pro-labore" | "payroll-draw" => Ok(Self::PayrollDraw),
            "nota-fiscal-entrada" | "incoming-invoice" => Ok(Self::IncomingInvoice),
            "contabilizei" | "service-fee" => Ok(Self::ServiceFee),
            "distribuicao-de-lucros" | "profit-distribution" => Ok(Self::ProfitDistribution),
            _ => Err(AppError::UnknownCategory {
                name: name.to_string(),
                known: Self::ALL
                    .iter()
                    .map(|c| c.display_name())
                    .collect::<Vec<_>>()
                    .join(", "),
            }),
        }
    }
}

/// Accepts a JSON string or number and yields it as a string.
/// The vendor is inconsistent about id fields across endpoints.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Int(i64),
        Float(f64),
    }

    Ok(match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::String(s) => s,
        StringOrNumber::Int(n) => n.to_string(),
        StringOrNumber::Float(n) => n.to_string(),
    })
}
