// Production REST endpoint of the accounting service
pub const DEFAULT_BASE_URL: &str = "https://appservices.contabilizei.com.br/rest";

// CLI Metadata
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
pub const APP_AUTHOR: &str = "Fabricio Zuardi <fabricio@fabricio.org>";
pub const APP_ABOUT: &str = "Downloads tax-document PDFs and lists accounting data from Contabilizei";

// Operation aliases accepted by the --op flag
pub const DOWNLOAD_TAXES_ALIASES: &[&str] = &["download", "dl", "impostos"];
pub const LIST_TAXES_ALIASES: &[&str] = &["taxes", "list-taxes"];
pub const LIST_BANK_ALIASES: &[&str] = &["bank", "transactions", "extrato"];
pub const LIST_INVOICES_ALIASES: &[&str] = &["invoices", "nf", "notas"];
pub const LIST_LEDGER_ALIASES: &[&str] = &["ledger", "cash", "caixa"];

// Vendor account ids for the fixed cash-ledger categories
pub const PAYROLL_DRAW_ACCOUNT_ID: i64 = 6_262_818_231_812_096;
pub const INCOMING_INVOICE_ACCOUNT_ID: i64 = 5_906_663_437_500_416;
pub const SERVICE_FEE_ACCOUNT_ID: i64 = 5_073_833_845_325_824;
pub const PROFIT_DISTRIBUTION_ACCOUNT_ID: i64 = 6_199_733_752_168_448;
