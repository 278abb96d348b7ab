use crate::client::ApiClient;
use crate::constants::{APP_ABOUT, APP_AUTHOR, APP_VERSION, DEFAULT_BASE_URL};
use crate::errors::AppResult;
use crate::models::Operation;
use crate::period::Period;
use clap::{Arg, ArgAction, Command};
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

/// Builds the clap command definition.
///
/// Positional EMAIL and PASSWORD are required; with fewer than two arguments
/// clap prints usage and exits non-zero. The remaining flags select the
/// operation and period (both default to the primary use case: download the
/// previous month's tax documents into the current directory).
fn command() -> Command<'static> {
    Command::new("contab-cli")
        .version(APP_VERSION)
        .author(APP_AUTHOR)
        .about(APP_ABOUT)
        .after_help(
            "Examples:\n  contab-cli user@example.com secret\n  contab-cli user@example.com secret -o invoices -m 6 -y 2016",
        )
        .arg(
            Arg::new("email")
                .help("E-mail registered with the accounting service")
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("password")
                .help("Account password")
                .required(true)
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("month")
                .short('m')
                .long("month")
                .help("Accounting month, 1-12 (defaults to the month 30 days ago)")
                .value_parser(clap::value_parser!(u32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("year")
                .short('y')
                .long("year")
                .help("Accounting year (defaults to the year 30 days ago)")
                .value_parser(clap::value_parser!(i32))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("op")
                .short('o')
                .long("op")
                .help("Operation: 'download' (default), 'taxes', 'bank', 'invoices' or 'ledger'")
                .default_value("download")
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("output_dir")
                .short('d')
                .long("output-dir")
                .help("Directory where downloaded PDFs are written")
                .default_value(".")
                .value_parser(clap::value_parser!(PathBuf))
                .action(ArgAction::Set),
        )
        .arg(
            Arg::new("base_url")
                .long("base-url")
                .help("Service base URL")
                .default_value(DEFAULT_BASE_URL)
                .action(ArgAction::Set),
        )
}

/// Parses command-line arguments, logs in and runs the selected operation.
pub async fn run() -> AppResult<()> {
    let matches = command().get_matches();

    let email = matches
        .get_one::<String>("email")
        .expect("email is required");
    let password = matches
        .get_one::<String>("password")
        .expect("password is required");
    let base_url = matches
        .get_one::<String>("base_url")
        .expect("base_url has default_value");
    let output_dir = matches
        .get_one::<PathBuf>("output_dir")
        .expect("output_dir has default_value");
    let operation = Operation::from(
        matches
            .get_one::<String>("op")
            .expect("op has default_value")
            .as_str(),
    );

    let period = Period::current(
        matches.get_one::<u32>("month").copied(),
        matches.get_one::<i32>("year").copied(),
    )?;

    let mut client = ApiClient::new(base_url)?;
    client.login(email, password).await?;

    info!(
        operation = operation.display_name(),
        period = %period,
        "Running operation"
    );

    match operation {
        Operation::DownloadTaxDocuments => {
            let count = client.download_all_tax_documents(period, output_dir).await?;
            println!("Downloaded {count} tax document(s) for {period}");
        }
        Operation::ListTaxDocuments => {
            let documents = client.list_tax_documents(period).await?;
            print_json(&serde_json::to_value(&documents)?)?;
        }
        Operation::ListBankTransactions => {
            print_json(&client.list_bank_transactions(period).await?)?;
        }
        Operation::ListInvoices => {
            print_json(&client.list_invoices(period).await?)?;
        }
        Operation::ListCashLedger => {
            print_json(&client.list_cash_ledger(period).await?)?;
        }
    }

    Ok(())
}

/// Pretty-prints a JSON value to stdout, the way listing results are consumed.
fn print_json(value: &Value) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
