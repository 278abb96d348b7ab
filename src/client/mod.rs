//! Authenticated HTTP client for the accounting-service REST API.
//!
//! [`ApiClient`] wraps the fixed set of vendor endpoints: login, tax-document
//! listing and download, bank-transaction and invoice listings, and the manual
//! cash ledger. Every call except [`ApiClient::login`] requires a prior login.

mod ledger;
mod listings;
mod session;
mod taxes;

// Re-export public API
pub use ledger::noon_epoch_millis;
pub use session::{ApiClient, Session};
pub use taxes::pdf_filename;
