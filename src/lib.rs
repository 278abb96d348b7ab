//! contab-cli library
//!
//! This crate provides the core functionality for the `contab-cli` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different aspects of the
//! accounting-service workflow:
//!
//! - [`client`] - Authenticated HTTP client for the vendor REST API: login,
//!   tax-document listing and download, bank/invoice/cash-ledger listings,
//!   and manual cash-ledger entry creation
//! - [`cli`] - Command-line interface that logs in and runs one operation
//! - [`models`] - Request/response records and the fixed ledger categories
//! - [`period`] - Month/year accounting period with the 30-days-ago default
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! The typical workflow is: construct the client, log in, then download all
//! tax documents for the previous month:
//!
//! ```no_run
//! use contab_cli::client::ApiClient;
//! use contab_cli::constants::DEFAULT_BASE_URL;
//! use contab_cli::errors::AppResult;
//! use contab_cli::period::Period;
//!
//! # async fn example() -> AppResult<()> {
//! let mut client = ApiClient::new(DEFAULT_BASE_URL)?;
//! client.login("user@example.com", "secret").await?;
//!
//! let period = Period::current(None, None)?;
//! let count = client
//!     .download_all_tax_documents(period, std::path::Path::new("."))
//!     .await?;
//! println!("downloaded {count} PDFs");
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod constants;
pub mod errors;
pub mod models;
pub mod period;
pub mod ui;
