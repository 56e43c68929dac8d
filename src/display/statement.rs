//! Bank statement display formatting
//!
//! Formats statements for terminal output as a table.

use tabled::settings::{object::Columns, Alignment, Style};
use tabled::{Table, Tabled};

use crate::models::BankStatement;

#[derive(Tabled)]
struct StatementLine {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Account")]
    account: String,
    #[tabled(rename = "Beneficiary")]
    beneficiary: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Currency")]
    currency: String,
    #[tabled(rename = "Comment")]
    comment: String,
}

impl From<&BankStatement> for StatementLine {
    fn from(statement: &BankStatement) -> Self {
        Self {
            id: statement.id.map(|id| id.to_string()).unwrap_or_default(),
            date: statement
                .operation_date
                .map(|d| d.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default(),
            account: statement.account_number.clone(),
            beneficiary: statement.beneficiary.clone(),
            amount: statement.amount.map(|a| a.to_string()).unwrap_or_default(),
            currency: statement.currency.clone(),
            comment: statement.comment.clone().unwrap_or_default(),
        }
    }
}

/// Format a list of statements as a table
pub fn format_statement_list(statements: &[BankStatement]) -> String {
    if statements.is_empty() {
        return "No bank statements found.".to_string();
    }

    let mut table = Table::new(statements.iter().map(StatementLine::from));
    table
        .with(Style::psql())
        .modify(Columns::single(4), Alignment::right());

    format!("{}\n{} statement(s)", table, statements.len())
}
