//! Account balance display formatting

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::AccountBalance;

#[derive(Tabled)]
struct BalanceLine<'a> {
    #[tabled(rename = "Currency")]
    currency: &'a str,
    #[tabled(rename = "Balance")]
    amount: String,
}

/// Format the balances of an account as a table
pub fn format_balance_list(account_number: &str, balances: &[AccountBalance]) -> String {
    if balances.is_empty() {
        return format!("No transactions found for account {}.", account_number);
    }

    let mut table = Table::new(balances.iter().map(|b| BalanceLine {
        currency: &b.currency,
        amount: b.amount.to_string(),
    }));
    table
        .with(Style::psql())
        .modify(Columns::single(1), Alignment::right());

    format!("Balance of {}\n{}", account_number, table)
}
