//! CLI command handler for account balances

use chrono::NaiveDate;
use clap::Args;

use crate::display::format_balance_list;
use crate::error::StatementResult;
use crate::services::BalanceService;
use crate::storage::Storage;

/// Arguments of the balance command
#[derive(Args, Debug)]
pub struct BalanceArgs {
    /// Account number
    pub account: String,

    /// First day to include (YYYY-MM-DD), defaults to 1970-01-01
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// First day to exclude (YYYY-MM-DD), defaults to today
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Print the balances as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle the balance command
pub fn handle_balance_command(storage: &Storage, args: BalanceArgs) -> StatementResult<()> {
    let balances = BalanceService::new(&storage.statements).get_account_balances(
        &args.account,
        args.from,
        args.to,
    )?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&balances)?);
    } else {
        println!("{}", format_balance_list(&args.account, &balances));
    }

    Ok(())
}
